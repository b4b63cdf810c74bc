use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    #[default]
    Unknown,
}

impl Severity {
    /// Maps free-form severity text (English or Hindi) onto the fixed scale.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();

        if label.contains("severe") || label.contains("गंभीर") {
            Severity::Severe
        } else if label.contains("moderate") || label.contains("मध्यम") {
            Severity::Moderate
        } else if label.contains("mild") || label.contains("हल्का") {
            Severity::Mild
        } else {
            Severity::Unknown
        }
    }
}

/// Normalized crop-disease diagnosis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRecord {
    pub problem: String,
    pub cause: String,
    pub solution: String,
    pub prevention: String,
    pub severity: Severity,
}

impl DiagnosisRecord {
    pub fn new(
        problem: impl Into<String>,
        cause: impl Into<String>,
        solution: impl Into<String>,
        prevention: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            problem: problem.into(),
            cause: cause.into(),
            solution: solution.into(),
            prevention: prevention.into(),
            severity,
        }
    }
}

/// Which path produced a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisSource {
    Model,
    Fallback,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CropDiagnosis {
    pub language: Language,
    pub diagnosis: DiagnosisRecord,
    pub source: DiagnosisSource,
    pub raw_response: String,
}
