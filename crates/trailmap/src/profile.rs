//! Profile loading with source diagnostics.
//!
//! [`parse_profile`] turns a JSON document into a [`Profile`] and reports
//! problems as a [`ProfileError`] carrying an [`ErrorCode`], a message, the
//! byte span of the offending text, and optional help.
//!
//! Error codes:
//! - `P001` - The document is not valid JSON
//! - `P002` - The JSON does not have the shape of a profile
//! - `P003` - A field has an unusable value

use std::{fmt, fs, ops::Range, path::Path};

use log::{debug, info};
use serde_json::error::Category;

pub use trailmap_core::profile::{CompletedCourse, Profile};

use crate::TrailmapError;

/// Error codes for profile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed JSON.
    ///
    /// The document could not be parsed as JSON at all.
    P001,

    /// Profile shape mismatch.
    ///
    /// A required field is missing or has the wrong type.
    P002,

    /// Invalid value.
    ///
    /// The document is well formed but a value cannot be used.
    P003,
}

impl ErrorCode {
    /// Returns a short description of the error category.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::P001 => "malformed JSON",
            ErrorCode::P002 => "profile shape mismatch",
            ErrorCode::P003 => "invalid value",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A problem found while reading a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileError {
    code: ErrorCode,
    message: String,
    span: Option<Range<usize>>,
    help: Option<String>,
}

impl ProfileError {
    /// Creates an error without a source location.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            help: None,
        }
    }

    /// Attaches the byte span of the offending text.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    /// Attaches help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProfileError {}

/// Parses and validates a profile document.
///
/// # Errors
///
/// Returns a [`ProfileError`] with code `P001` for malformed JSON, `P002`
/// for a missing or mistyped field, and `P003` for a blank name.
///
/// # Examples
///
/// ```
/// use trailmap::profile::{ErrorCode, parse_profile};
///
/// let profile = parse_profile(
///     r#"{ "name": "Asha", "education": "10th grade", "experience": "Tailoring" }"#,
/// )
/// .unwrap();
/// assert_eq!(profile.name(), "Asha");
///
/// let err = parse_profile(r#"{ "name": "Asha", }"#).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::P001);
/// ```
pub fn parse_profile(src: &str) -> Result<Profile, ProfileError> {
    let profile: Profile = serde_json::from_str(src).map_err(|err| json_error(&err, src))?;

    if profile.name().trim().is_empty() {
        let mut err = ProfileError::new(ErrorCode::P003, "profile name is blank")
            .with_help("set `name` to the person the roadmap is for");
        if let Some(span) = key_span(src, "name") {
            err = err.with_span(span);
        }
        return Err(err);
    }

    debug!(
        name = profile.name(),
        skills = profile.skills().len(),
        courses = profile.courses().len();
        "Profile parsed"
    );

    Ok(profile)
}

/// Reads and parses a profile file.
///
/// # Errors
///
/// Returns [`TrailmapError::Io`] if the file cannot be read and
/// [`TrailmapError::Profile`] if its content is not a valid profile.
pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, TrailmapError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading profile");

    let src = fs::read_to_string(path)?;
    parse_profile(&src).map_err(|err| TrailmapError::new_profile_error(err, src))
}

fn json_error(err: &serde_json::Error, src: &str) -> ProfileError {
    let code = match err.classify() {
        Category::Data => ErrorCode::P002,
        Category::Syntax | Category::Eof | Category::Io => ErrorCode::P001,
    };

    // serde_json appends " at line L column C"; the span replaces it.
    let full = err.to_string();
    let message = match full.rfind(" at line ") {
        Some(idx) => full[..idx].to_string(),
        None => full,
    };

    let help = match code {
        ErrorCode::P002 => {
            "a profile needs `name`, `education` and `experience`, plus optional `skills` and `courses`"
        }
        _ => "check for missing commas, quotes, or brackets",
    };

    let offset = line_column_offset(src, err.line(), err.column());
    let end = (offset + 1).min(src.len());
    ProfileError::new(code, message)
        .with_span(offset..end)
        .with_help(help)
}

/// Converts serde_json's 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Finds the span of the first `"key"` token in `src`.
fn key_span(src: &str, key: &str) -> Option<Range<usize>> {
    let quoted = format!("\"{key}\"");
    src.find(&quoted).map(|start| start..start + quoted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let src = r#"{
            "name": "Asha Devi",
            "education": "Dropped out after 10th grade",
            "skills": ["Tailoring"],
            "experience": "Stitching for neighbours",
            "courses": [{ "course_name": "Computer Basics", "marks": 78, "date": "2024-03-01" }]
        }"#;

        let profile = parse_profile(src).unwrap();
        assert_eq!(profile.name(), "Asha Devi");
        assert_eq!(profile.courses()[0].marks(), "78");
    }

    #[test]
    fn test_syntax_error_points_at_location() {
        let src = "{\n  \"name\": \"Asha\",\n  \"education\" \"10th\"\n}";

        let err = parse_profile(src).unwrap_err();

        assert_eq!(err.code(), ErrorCode::P001);
        assert!(!err.message().contains(" at line "));
        let span = err.span().unwrap();
        // The error is reported on the third line.
        let third_line_start = src.find("  \"education\"").unwrap();
        assert!(span.start >= third_line_start);
        assert!(err.help().is_some());
    }

    #[test]
    fn test_truncated_document_is_malformed() {
        let src = r#"{ "name": "Asha""#;
        let err = parse_profile(src).unwrap_err();

        assert_eq!(err.code(), ErrorCode::P001);
        let span = err.span().unwrap();
        assert!(span.end <= src.len());
    }

    #[test]
    fn test_missing_field_is_shape_mismatch() {
        let src = r#"{ "name": "Asha", "education": "10th grade" }"#;
        let err = parse_profile(src).unwrap_err();

        assert_eq!(err.code(), ErrorCode::P002);
        assert!(err.message().contains("experience"));
    }

    #[test]
    fn test_wrong_type_is_shape_mismatch() {
        let src = r#"{ "name": "Asha", "education": "10th", "experience": "none", "skills": "Tailoring" }"#;
        let err = parse_profile(src).unwrap_err();
        assert_eq!(err.code(), ErrorCode::P002);
    }

    #[test]
    fn test_blank_name_is_invalid_value() {
        let src = r#"{ "name": "   ", "education": "10th", "experience": "none" }"#;
        let err = parse_profile(src).unwrap_err();

        assert_eq!(err.code(), ErrorCode::P003);
        assert_eq!(err.span(), Some(2..8));
    }

    #[test]
    fn test_line_column_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_column_offset(src, 1, 1), 0);
        assert_eq!(line_column_offset(src, 2, 2), 4);
        assert_eq!(line_column_offset(src, 3, 1), 7);
        assert_eq!(line_column_offset(src, 3, 0), 7);
        assert_eq!(line_column_offset(src, 9, 9), src.len());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::P002.to_string(), "P002");
        assert_eq!(ErrorCode::P001.description(), "malformed JSON");
    }

    #[test]
    fn test_load_profile_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TrailmapError::Io(_)));
    }

    #[test]
    fn test_load_profile_keeps_source_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();

        match load_profile(&path).unwrap_err() {
            TrailmapError::Profile { err, src } => {
                assert_eq!(err.code(), ErrorCode::P001);
                assert_eq!(src, "{ not json");
            }
            other => panic!("Expected Profile error, got {other:?}"),
        }
    }
}
