//! Reporting of unhandled validation failures
//!
//! A program that lets a [`ValidationError`] escape `main` can route it
//! through [`run`] to get a trace-style report on stderr. With
//! `WLSS_LIB_TRACEBACK=disable` the frames inside this library are cut off
//! and only the caller's side of the trace is shown.
//!
//! ```no_run
//! use std::process::ExitCode;
//! use wlss_validator::{PositiveInt, report};
//!
//! fn main() -> ExitCode {
//!     report::run(|| {
//!         let age = PositiveInt::new(-10)?;
//!         println!("{age}");
//!         Ok(())
//!     })
//! }
//! ```

use std::any;
use std::fmt;
use std::process::ExitCode;

use crate::foundation::ValidationError;

/// Name the notice uses for this library.
const LIB_NAME: &str = "wlss";

// ============================================================================
// MODE
// ============================================================================

/// How much of a failure's trace to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TracebackMode {
    /// Every recorded frame.
    #[default]
    Full,
    /// Only frames before the construction boundary, plus a notice.
    Suppressed,
}

impl TracebackMode {
    /// Environment variable holding the toggle.
    pub const ENV_VAR: &'static str = "WLSS_LIB_TRACEBACK";

    /// Reads the toggle from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// `disable` selects [`Suppressed`](Self::Suppressed); anything else,
    /// including an unset variable, selects [`Full`](Self::Full).
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("disable") => Self::Suppressed,
            _ => Self::Full,
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Trace-style rendering of a [`ValidationError`].
///
/// Frames are printed outermost first. The error itself is never altered.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a ValidationError,
    mode: TracebackMode,
}

impl<'a> Report<'a> {
    /// Renders `error` according to `mode`.
    pub fn new(error: &'a ValidationError, mode: TracebackMode) -> Self {
        Self { error, mode }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trace (most recent call last):")?;
        let outermost_first = self.error.trace().iter().rev();
        match self.mode {
            TracebackMode::Full => {
                for frame in outermost_first {
                    writeln!(f, "  {frame}")?;
                }
            }
            TracebackMode::Suppressed => {
                let before_boundary =
                    outermost_first.take_while(|frame| !(frame.is_library() && frame.is_sentinel()));
                for frame in before_boundary {
                    writeln!(f, "  {frame}")?;
                }
            }
        }
        writeln!(f, "{}: {}", any::type_name::<ValidationError>(), self.error)?;

        if self.mode == TracebackMode::Suppressed {
            writeln!(f)?;
            writeln!(f, "<...>")?;
            writeln!(f)?;
            writeln!(
                f,
                "Rest of the trace related to '{LIB_NAME}' lib was cut off for the sake of readability."
            )?;
            writeln!(
                f,
                "If you need to have full trace unset {} environment variable.",
                TracebackMode::ENV_VAR
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// BOUNDARY
// ============================================================================

/// Runs `body` and reports an unhandled error on stderr.
///
/// A [`ValidationError`] is rendered with the mode read from the
/// environment at this point; any other error is printed as `main` would
/// print it. Returns [`ExitCode::FAILURE`] on error.
pub fn run(body: impl FnOnce() -> anyhow::Result<()>) -> ExitCode {
    let Err(error) = body() else {
        return ExitCode::SUCCESS;
    };
    tracing::error!(error = %error, "unhandled error");
    eprint!("{}", render(&error));
    ExitCode::FAILURE
}

/// The text [`run`] prints for `error`.
///
/// A [`ValidationError`] becomes a [`Report`] in the mode read from the
/// environment; anything else is rendered as `main` would render it.
#[must_use]
pub fn render(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ValidationError>() {
        Some(validation) => Report::new(validation, TracebackMode::from_env()).to_string(),
        None => format!("Error: {error:?}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PositiveInt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, TracebackMode::Full)]
    #[case(Some(""), TracebackMode::Full)]
    #[case(Some("true"), TracebackMode::Full)]
    #[case(Some("DISABLE"), TracebackMode::Full)]
    #[case(Some("disable"), TracebackMode::Suppressed)]
    fn parse(#[case] value: Option<&str>, #[case] expected: TracebackMode) {
        assert_eq!(TracebackMode::parse(value), expected);
    }

    #[test]
    fn full_lists_every_frame() {
        let error = PositiveInt::new(-10).unwrap_err();
        let report = Report::new(&error, TracebackMode::Full).to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Trace (most recent call last):");
        assert!(lines[1].contains(file!()));
        assert!(lines[2].contains("value.rs"));
        assert_eq!(
            lines[4],
            "wlss_validator::foundation::error::ValidationError: PositiveInt value should not be less than 0."
        );
    }

    #[test]
    fn suppressed_cuts_at_boundary() {
        let error = PositiveInt::new(-10).unwrap_err();
        let report = Report::new(&error, TracebackMode::Suppressed).to_string();
        let lines: Vec<&str> = report.lines().collect();
        let caller = format!("  {}", error.trace()[2]);

        assert_eq!(
            lines,
            vec![
                "Trace (most recent call last):",
                caller.as_str(),
                "wlss_validator::foundation::error::ValidationError: PositiveInt value should not be less than 0.",
                "",
                "<...>",
                "",
                "Rest of the trace related to 'wlss' lib was cut off for the sake of readability.",
                "If you need to have full trace unset WLSS_LIB_TRACEBACK environment variable.",
            ]
        );
    }

    #[test]
    fn report_keeps_message() {
        let error = PositiveInt::new(-1).unwrap_err();
        let before = error.to_string();
        let _ = Report::new(&error, TracebackMode::Suppressed).to_string();
        assert_eq!(error.to_string(), before);
    }

    #[test]
    fn run_exit_codes() {
        assert_eq!(run(|| Ok(())), ExitCode::SUCCESS);
        assert_eq!(
            run(|| {
                PositiveInt::new(-1)?;
                Ok(())
            }),
            ExitCode::FAILURE
        );
        assert_eq!(run(|| Err(anyhow::anyhow!("boom"))), ExitCode::FAILURE);
    }
}
