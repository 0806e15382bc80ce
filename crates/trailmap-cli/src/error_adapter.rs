//! Error adapter for converting TrailmapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Profile errors
//! carry a source span and are rendered with a snippet of the profile file.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use trailmap::{TrailmapError, profile::ProfileError};

/// Adapter for a profile diagnostic.
///
/// This adapter wraps a [`ProfileError`] and implements
/// [`MietteDiagnostic`] to point at the offending part of the profile.
pub struct ProfileDiagnostic<'a> {
    /// The wrapped error
    err: &'a ProfileError,
    /// Profile source for displaying snippets
    src: &'a str,
}

impl<'a> ProfileDiagnostic<'a> {
    /// Create a new profile diagnostic adapter.
    pub fn new(err: &'a ProfileError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ProfileDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ProfileDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for ProfileDiagnostic<'_> {}

impl MietteDiagnostic for ProfileDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.code().description().to_string()),
            SourceSpan::new(span.start.into(), span.len()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`TrailmapError`] variants.
///
/// This adapter handles errors that don't have source locations, such as
/// I/O, configuration, encoding, and generation errors.
pub struct ErrorAdapter<'a>(pub &'a TrailmapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrailmapError::Io(_) => "trailmap::io",
            TrailmapError::Profile { .. } => return None,
            TrailmapError::Encode(_) => "trailmap::encode",
            TrailmapError::Generator(_) => "trailmap::generator",
            TrailmapError::Config(_) => "trailmap::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a profile diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A profile diagnostic with source location information.
    Diagnostic(ProfileDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`TrailmapError`] into a reportable error.
pub fn to_reportable(err: &TrailmapError) -> Reportable<'_> {
    match err {
        TrailmapError::Profile { err, src } => {
            Reportable::Diagnostic(ProfileDiagnostic::new(err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

/// Render a [`TrailmapError`] as a graphical miette report.
pub fn render(err: &TrailmapError) -> String {
    let reporter = GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &to_reportable(err))
        .expect("Writing to String buffer is infallible");
    writer
}

#[cfg(test)]
mod tests {
    use trailmap::profile::{ErrorCode, parse_profile};

    use super::*;

    fn profile_error(src: &str) -> TrailmapError {
        let err = parse_profile(src).unwrap_err();
        TrailmapError::new_profile_error(err, src)
    }

    #[test]
    fn test_profile_error_is_diagnostic() {
        let err = profile_error(r#"{ "name": "Asha", }"#);

        match to_reportable(&err) {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.code().unwrap().to_string(), "P001");
                assert!(d.help().is_some());
                assert!(d.source_code().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_profile_label_points_at_span() {
        let src = r#"{ "name": " ", "education": "10th", "experience": "none" }"#;
        let parsed = parse_profile(src).unwrap_err();
        assert_eq!(parsed.code(), ErrorCode::P003);

        let adapter = ProfileDiagnostic::new(&parsed, src);
        let labels: Vec<_> = adapter.labels().unwrap().collect();

        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 6);
        assert_eq!(labels[0].label(), Some("invalid value"));
    }

    #[test]
    fn test_non_profile_error() {
        let err = TrailmapError::Config("bad config".to_string());

        match to_reportable(&err) {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad config");
                assert_eq!(e.code().unwrap().to_string(), "trailmap::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_render_includes_message() {
        let err = profile_error(r#"{ "name": "Asha", "education": "10th" }"#);
        let report = render(&err);

        assert!(report.contains("missing field `experience`"));
        assert!(report.contains("P002"));
    }
}
