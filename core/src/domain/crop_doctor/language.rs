use crate::domain::crop_doctor::entities::Language;

const DEVANAGARI: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Any Devanagari character tags the whole request as Hindi.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(|c| DEVANAGARI.contains(&c)) {
        Language::Hindi
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_english() {
        assert_eq!(detect_language("My leaves have brown spots"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_devanagari_is_hindi() {
        assert_eq!(detect_language("पत्तियों पर भूरे धब्बे"), Language::Hindi);
    }

    #[test]
    fn test_single_devanagari_char_is_hindi() {
        assert_eq!(detect_language("leaves are \u{0900} odd"), Language::Hindi);
        assert_eq!(detect_language("end of block \u{097F}"), Language::Hindi);
    }

    #[test]
    fn test_other_scripts_are_english() {
        assert_eq!(detect_language("feuilles jaunies é"), Language::English);
        assert_eq!(detect_language("\u{0980} bengali"), Language::English);
    }
}
