//! Regular expression full-match rule

use std::borrow::Cow;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Rejects strings that do not match `pattern` in full.
///
/// The pattern is compiled anchored at both ends, so `[a-z]+` rejects
/// `"abc1"` even though it matches a prefix.
#[derive(Debug, Clone)]
pub struct FullMatch {
    name: Cow<'static, str>,
    pattern: Cow<'static, str>,
    regex: Regex,
}

impl FullMatch {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// `regexp_invalid` if the pattern is not a valid regular expression.
    pub fn new(
        name: Cow<'static, str>,
        pattern: Cow<'static, str>,
    ) -> Result<Self, ValidationError> {
        let invalid = |error: regex::Error| {
            ValidationError::new(
                "regexp_invalid",
                format!("REGEXP should be a valid regular expression: {error}"),
            )
            .with_param("pattern", pattern.clone())
        };
        // Compiled alone first: an unbalanced `)` would otherwise close the
        // anchoring group.
        Regex::new(&pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;
        Ok(Self {
            name,
            pattern,
            regex,
        })
    }

    /// The pattern as declared, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validate for FullMatch {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::regexp(&self.name, &self.pattern))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("bar", "bar", true)]
    #[case("bar", "barbar", false)]
    #[case("bar", "foobar", false)]
    #[case("[a-z]+", "abc", true)]
    #[case("[a-z]+", "abc1", false)]
    #[case("a|b", "a", true)]
    #[case("a|b", "ab", false)]
    fn full_match(#[case] pattern: &'static str, #[case] input: &str, #[case] ok: bool) {
        let rule = FullMatch::new("MyStr".into(), pattern.into()).unwrap();
        assert_eq!(rule.validate(input).is_ok(), ok);
    }

    #[test]
    fn message_names_the_pattern() {
        let rule = FullMatch::new("MyStr".into(), "bar".into()).unwrap();
        let error = rule.validate("foo").unwrap_err();
        assert_eq!(error.code(), "regexp");
        assert_eq!(
            error.message(),
            "MyStr value should match regular expression: bar."
        );
        assert_eq!(rule.pattern(), "bar");
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let error = FullMatch::new("MyStr".into(), "(".into()).unwrap_err();
        assert_eq!(error.code(), "regexp_invalid");
        assert!(
            error
                .message()
                .starts_with("REGEXP should be a valid regular expression: ")
        );
        assert_eq!(error.param("pattern"), Some("("));
    }

    #[rstest]
    #[case("a)|(b")]
    #[case(")(")]
    #[case("x)*(?:y")]
    fn unbalanced_pattern_cannot_escape_anchors(#[case] pattern: &'static str) {
        let error = FullMatch::new("MyStr".into(), pattern.into()).unwrap_err();
        assert_eq!(error.code(), "regexp_invalid");
        assert_eq!(error.param("pattern"), Some(pattern));
    }
}
