//! User profile texts.

use wlss_validator::constrained;

constrained! {
    /// Free-form "about me" text.
    pub ProfileDescription: Str { length_min: 1, length_max: 1000, regexp: r"(?s).{1,1000}" }
}

constrained! {
    /// Display name: Latin and Cyrillic letters, spaces and a little
    /// punctuation.
    pub ProfileName: Str { length_min: 1, length_max: 50, regexp: r"[A-Za-zА-яЁё'-.() ]*" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Jane Doe")]
    #[case("Иван Петров")]
    #[case("Фёдор")]
    #[case("O'Neil (Jr.)")]
    #[case("Mary-Jane")]
    fn name_accepts(#[case] input: &str) {
        assert!(ProfileName::new(input).is_ok());
    }

    #[rstest]
    #[case("R2D2")]
    #[case("jane@doe")]
    #[case("Jane\nDoe")]
    fn name_rejects(#[case] input: &str) {
        assert_eq!(ProfileName::new(input).unwrap_err().code(), "regexp");
    }

    #[test]
    fn description_spans_lines() {
        assert!(ProfileDescription::new("line one\nline two").is_ok());
        assert_eq!(
            ProfileDescription::new("").unwrap_err().message(),
            "ProfileDescription value length should not be less than 1."
        );
        assert!(ProfileDescription::new("ж".repeat(1000)).is_ok());
        assert!(ProfileDescription::new("ж".repeat(1001)).is_err());
    }
}
