//! Splits a free-form model reply into the five diagnosis fields.
//!
//! The reply is scanned line by line. A line that contains a section anchor
//! (anywhere, case-insensitive) opens that section and everything after its
//! first colon starts the section text; following lines without an anchor are
//! appended to the open section. Opening a section commits the previous one.
//!
//! Anchors are matched as substrings, so a value that mentions another
//! section's anchor (`"... the cause: ..."`) switches sections mid-value.

use crate::domain::crop_doctor::entities::{DiagnosisRecord, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Problem,
    Cause,
    Solution,
    Prevention,
    Severity,
}

/// Checked in order; the first hit wins.
const ANCHORS: [(Section, &str, &str); 5] = [
    (Section::Problem, "problem:", "समस्या:"),
    (Section::Cause, "cause:", "कारण:"),
    (Section::Solution, "solution:", "समाधान:"),
    (Section::Prevention, "prevention:", "रोकथाम:"),
    (Section::Severity, "severity:", "गंभीरता:"),
];

fn anchored_section(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    ANCHORS
        .iter()
        .find(|(_, english, hindi)| lower.contains(english) || lower.contains(hindi))
        .map(|(section, _, _)| *section)
}

#[derive(Debug, Default)]
struct SectionScanner {
    current: Option<Section>,
    buffer: String,
    problem: String,
    cause: String,
    solution: String,
    prevention: String,
    severity: Option<String>,
}

impl SectionScanner {
    fn feed(&mut self, line: &str) {
        if let Some(section) = anchored_section(line) {
            self.flush();
            self.current = Some(section);
            self.buffer = line
                .split_once(':')
                .map(|(_, rest)| rest.to_string())
                .unwrap_or_default();
            return;
        }

        if self.current.is_some() {
            self.buffer.push(' ');
            self.buffer.push_str(line.trim());
        }
    }

    fn flush(&mut self) {
        let Some(section) = self.current else {
            return;
        };
        let value = std::mem::take(&mut self.buffer).trim().to_string();

        match section {
            Section::Problem => self.problem = value,
            Section::Cause => self.cause = value,
            Section::Solution => self.solution = value,
            Section::Prevention => self.prevention = value,
            Section::Severity => self.severity = Some(value),
        }
    }

    fn finish(mut self) -> DiagnosisRecord {
        self.flush();

        DiagnosisRecord {
            problem: self.problem,
            cause: self.cause,
            solution: self.solution,
            prevention: self.prevention,
            severity: self
                .severity
                .as_deref()
                .map(Severity::from_label)
                .unwrap_or_default(),
        }
    }
}

/// Best-effort extraction; never fails.
pub fn parse_diagnosis(raw: &str) -> DiagnosisRecord {
    let mut scanner = SectionScanner::default();
    for line in raw.lines() {
        scanner.feed(line);
    }
    scanner.finish()
}
