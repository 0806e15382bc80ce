//! Configuration types for Trailmap dashboards.
//!
//! All types implement [`serde::Deserialize`] and every field is optional,
//! so a configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`GeneratorConfig`] - Where and how the roadmap narrative is generated.
//! - [`DiagramConfig`] - Which PlantUML server renders the flowchart.
//! - [`SectionsConfig`] - Which dashboard sections are shown.
//!
//! # Example
//!
//! ```
//! # use trailmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.generator().model(), "gemini-1.5-flash");
//! assert!(config.sections().quote());
//! ```

use std::fmt;

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Roadmap generation section.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Flowchart rendering section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Section visibility.
    #[serde(default)]
    sections: SectionsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        generator: GeneratorConfig,
        diagram: DiagramConfig,
        sections: SectionsConfig,
    ) -> Self {
        Self {
            generator,
            diagram,
            sections,
        }
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the section visibility configuration.
    pub fn sections(&self) -> &SectionsConfig {
        &self.sections
    }

    /// Replaces the section visibility configuration.
    pub fn with_sections(mut self, sections: SectionsConfig) -> Self {
        self.sections = sections;
        self
    }
}

/// Settings for the generative-text service that writes the roadmap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model name, e.g. `gemini-1.5-flash`.
    model: String,

    /// Base URL of the Generative Language API.
    endpoint: String,

    /// Name of the environment variable holding the API key.
    ///
    /// The key itself never lives in the configuration file.
    api_key_env: String,

    /// Request timeout in seconds.
    timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeneratorConfig {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

/// Output format requested from the PlantUML server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    #[default]
    Png,
    Svg,
    Txt,
}

impl DiagramFormat {
    /// Returns the URL path segment for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramFormat::Png => "png",
            DiagramFormat::Svg => "svg",
            DiagramFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PlantUML rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Base URL of the PlantUML server.
    server: String,

    /// Image format.
    format: DiagramFormat,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            server: "http://www.plantuml.com/plantuml".to_string(),
            format: DiagramFormat::default(),
        }
    }
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`].
    pub fn new(server: impl Into<String>, format: DiagramFormat) -> Self {
        Self {
            server: server.into(),
            format,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn format(&self) -> DiagramFormat {
        self.format
    }
}

/// Which sections of the dashboard are rendered.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    roadmap: bool,
    flowchart: bool,
    courses: bool,
    quote: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            roadmap: true,
            flowchart: true,
            courses: true,
            quote: true,
        }
    }
}

impl SectionsConfig {
    /// Creates a new [`SectionsConfig`].
    pub fn new(roadmap: bool, flowchart: bool, courses: bool, quote: bool) -> Self {
        Self {
            roadmap,
            flowchart,
            courses,
            quote,
        }
    }

    pub fn roadmap(&self) -> bool {
        self.roadmap
    }

    pub fn flowchart(&self) -> bool {
        self.flowchart
    }

    pub fn courses(&self) -> bool {
        self.courses
    }

    pub fn quote(&self) -> bool {
        self.quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "generator": { "model": "gemini-2.0-flash" }, "sections": { "quote": false } }"#,
        )
        .unwrap();

        assert_eq!(config.generator().model(), "gemini-2.0-flash");
        assert_eq!(config.generator().api_key_env(), "GEMINI_API_KEY");
        assert_eq!(config.generator().timeout_secs(), 60);
        assert!(!config.sections().quote());
        assert!(config.sections().roadmap());
        assert_eq!(config.diagram().server(), "http://www.plantuml.com/plantuml");
    }

    #[test]
    fn test_diagram_format_from_lowercase() {
        let config: DiagramConfig = serde_json::from_str(r#"{ "format": "svg" }"#).unwrap();
        assert_eq!(config.format(), DiagramFormat::Svg);
        assert_eq!(config.format().to_string(), "svg");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = serde_json::from_str::<DiagramConfig>(r#"{ "format": "gif" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_sections() {
        let config = AppConfig::default().with_sections(SectionsConfig::new(false, true, false, true));
        assert!(!config.sections().roadmap());
        assert!(!config.sections().courses());
        assert!(config.sections().flowchart());
    }
}
