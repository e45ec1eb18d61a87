//! Error type for validation failures
//!
//! A [`ValidationError`] carries one fully formatted, human-readable message
//! together with a stable code for programmatic handling, the violated bound
//! as ordered parameters, and the frames the failure passed through on its way
//! out of the library.
//!
//! String fields use `Cow<'static, str>` so static codes never allocate.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A violated constraint.
///
/// Raised both when a candidate value breaks a rule at construction time and
/// when a constrained type is declared with an inconsistent configuration.
/// `Display` renders the message only; the code and params are there for
/// callers that need to branch on the failure.
///
/// # Examples
///
/// ```
/// use wlss_validator::ValidationError;
///
/// let error = ValidationError::new("value_min", "MyInt value should not be less than 0.")
///     .with_param("min", "0");
///
/// assert_eq!(error.to_string(), "MyInt value should not be less than 0.");
/// assert_eq!(error.param("min"), Some("0"));
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// Innermost frame first.
    trace: Vec<Frame>,
}

impl ValidationError {
    /// Creates a new error and records the caller as the raise site.
    #[track_caller]
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
            trace: vec![Frame::new(Location::caller())],
        }
    }

    /// Adds a parameter describing the violated bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Stable, machine-readable error code (`value_max`, `regexp`, ...).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// All parameters in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Frames recorded while the error propagated, innermost first.
    pub fn trace(&self) -> &[Frame] {
        &self.trace
    }

    /// Records the construction boundary the error crossed.
    pub(crate) fn crossed_boundary(mut self, location: &'static Location<'static>) -> Self {
        self.trace.push(Frame::sentinel(location));
        self
    }

    /// Records the call site that asked for the construction.
    pub(crate) fn called_from(mut self, location: &'static Location<'static>) -> Self {
        self.trace.push(Frame::new(location));
        self
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// `<name> value should not be greater than <max>.`
    #[track_caller]
    pub fn value_max(name: &str, max: impl fmt::Display) -> Self {
        let max = max.to_string();
        Self::new(
            "value_max",
            format!("{name} value should not be greater than {max}."),
        )
        .with_param("max", max)
    }

    /// `<name> value should not be less than <min>.`
    #[track_caller]
    pub fn value_min(name: &str, min: impl fmt::Display) -> Self {
        let min = min.to_string();
        Self::new("value_min", format!("{name} value should not be less than {min}."))
            .with_param("min", min)
    }

    /// `<name> value length should not be greater than <max>.`
    #[track_caller]
    pub fn length_max(name: &str, max: usize, actual: usize) -> Self {
        Self::new(
            "length_max",
            format!("{name} value length should not be greater than {max}."),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// `<name> value length should not be less than <min>.`
    #[track_caller]
    pub fn length_min(name: &str, min: usize, actual: usize) -> Self {
        Self::new(
            "length_min",
            format!("{name} value length should not be less than {min}."),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// `<name> value should match regular expression: <pattern>.`
    #[track_caller]
    pub fn regexp(name: &str, pattern: &str) -> Self {
        Self::new(
            "regexp",
            format!("{name} value should match regular expression: {pattern}."),
        )
        .with_param("pattern", pattern.to_owned())
    }

    /// Declaration-time ordering violation, e.g.
    /// `VALUE_MAX should not be less than VALUE_MIN.`
    #[track_caller]
    pub fn bounds_order(max_key: &'static str, min_key: &'static str) -> Self {
        Self::new(
            "bounds_order",
            format!("{max_key} should not be less than {min_key}."),
        )
        .with_param("max_key", max_key)
        .with_param("min_key", min_key)
    }
}

// ============================================================================
// FRAME
// ============================================================================

/// One source location a validation failure passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    location: &'static Location<'static>,
    sentinel: bool,
}

impl Frame {
    fn new(location: &'static Location<'static>) -> Self {
        Self {
            location,
            sentinel: false,
        }
    }

    fn sentinel(location: &'static Location<'static>) -> Self {
        Self {
            location,
            sentinel: true,
        }
    }

    /// Source file of the frame.
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Whether this frame marks the point where a value entered the library.
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// Whether the frame lies inside this crate's sources.
    pub fn is_library(&self) -> bool {
        library_root().is_some_and(|root| Path::new(self.file()).starts_with(root))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}:{}:{}", self.file(), self.line(), self.column())
    }
}

/// `src/` of this crate, as rustc spells it in `Location::file`.
fn library_root() -> Option<&'static Path> {
    Path::new(file!()).parent()?.parent()
}

// ============================================================================
// TESTS
// ============================================================================
