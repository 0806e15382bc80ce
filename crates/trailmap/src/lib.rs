//! Trailmap - personalized career roadmap dashboards.
//!
//! Loads a user profile, asks a generative-text service for a career roadmap,
//! links a PlantUML career flowchart, recommends courses for a requested skill,
//! and closes with a motivational quote. The result is a [`Dashboard`] that
//! renders as Markdown.

pub mod config;
pub mod dashboard;
pub mod profile;
pub mod roadmap;

mod error;

pub use trailmap_core::{catalog, encoding, flowchart, quotes};

pub use dashboard::Dashboard;
pub use error::TrailmapError;

use log::{debug, info, warn};
use rand::Rng;

use trailmap_core::{catalog::CourseCatalog, flowchart::CAREER_FLOWCHART};

use config::AppConfig;
use dashboard::{CoursesSection, FlowchartSection, Header, RoadmapSection};
use profile::Profile;
use roadmap::{FALLBACK_ROADMAP, RoadmapGenerator};

/// Builder for career dashboards.
///
/// The configuration and the roadmap generator are passed in explicitly;
/// nothing is read from process-wide state.
///
/// # Examples
///
/// ```rust
/// use trailmap::{DashboardBuilder, config::AppConfig, profile::Profile, roadmap::GeneratorError};
///
/// let profile = Profile::new("Asha", "10th grade", "Tailoring at home");
///
/// let builder = DashboardBuilder::new(AppConfig::default())
///     .with_generator(|_prompt: &str| -> Result<String, GeneratorError> {
///         Ok("Hello Asha! Here is your plan.".to_string())
///     });
///
/// let dashboard = builder.build(Some(&profile), Some("Learn Tailoring"));
/// let markdown = dashboard.to_markdown();
/// assert!(markdown.contains("Hello Asha! Here is your plan."));
/// assert!(markdown.contains("Tailoring for Beginners - Full Course"));
/// ```
pub struct DashboardBuilder {
    config: AppConfig,
    generator: Option<Box<dyn RoadmapGenerator>>,
    flowchart: String,
    catalog: CourseCatalog,
}

impl DashboardBuilder {
    /// Create a new dashboard builder with the given configuration.
    ///
    /// The builder starts without a roadmap generator and with the built-in
    /// career flowchart.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            generator: None,
            flowchart: CAREER_FLOWCHART.to_string(),
            catalog: CourseCatalog::builtin(),
        }
    }

    /// Sets the generator used for the roadmap section.
    pub fn with_generator(mut self, generator: impl RoadmapGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Replaces the built-in flowchart with custom PlantUML source.
    pub fn with_flowchart(mut self, source: impl Into<String>) -> Self {
        self.flowchart = source.into();
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the PlantUML image URL for the flowchart.
    ///
    /// # Errors
    ///
    /// Returns [`TrailmapError::Encode`] if the flowchart cannot be encoded.
    pub fn flowchart_url(&self) -> Result<String, TrailmapError> {
        let diagram = self.config.diagram();
        let token = encoding::encode(&self.flowchart)?;
        Ok(token.to_url(diagram.server(), diagram.format().as_str()))
    }

    /// Build the dashboard using the thread-local RNG for the quote.
    ///
    /// # Arguments
    ///
    /// * `profile` - The loaded profile, or `None` if it could not be loaded
    /// * `skill` - The skill request for course recommendations, if any
    pub fn build(&self, profile: Option<&Profile>, skill: Option<&str>) -> Dashboard {
        self.build_with_rng(profile, skill, &mut rand::rng())
    }

    /// Build the dashboard drawing the quote from `rng`.
    ///
    /// Failures inside a section never abort the page: a failed roadmap
    /// shows the fallback text with the error, and a flowchart that cannot
    /// be encoded shows a placeholder.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        profile: Option<&Profile>,
        skill: Option<&str>,
        rng: &mut R,
    ) -> Dashboard {
        let sections = self.config.sections();
        info!(
            profile_loaded = profile.is_some(),
            roadmap = sections.roadmap(),
            flowchart = sections.flowchart(),
            courses = sections.courses(),
            quote = sections.quote();
            "Building dashboard"
        );

        let header = match profile {
            Some(profile) => Header::Loaded {
                name: profile.name().to_string(),
            },
            None => Header::Missing,
        };

        let courses = sections.courses().then(|| self.courses_section(skill));

        let roadmap = match profile {
            Some(profile) if sections.roadmap() => Some(self.roadmap_section(profile)),
            _ => None,
        };

        let flowchart = sections.flowchart().then(|| self.flowchart_section());

        let quote = sections.quote().then(|| quotes::pick(rng));

        debug!("Dashboard built");

        Dashboard {
            header,
            courses,
            roadmap,
            flowchart,
            quote,
        }
    }

    fn courses_section(&self, skill: Option<&str>) -> CoursesSection {
        match skill.map(str::trim).filter(|skill| !skill.is_empty()) {
            None => CoursesSection::Prompt {
                examples: self.catalog.requests().collect(),
            },
            Some(request) => match self.catalog.lookup(request) {
                Some(courses) => CoursesSection::Found {
                    request: request.to_string(),
                    courses,
                },
                None => CoursesSection::NotFound {
                    request: request.to_string(),
                },
            },
        }
    }

    fn roadmap_section(&self, profile: &Profile) -> RoadmapSection {
        let file_name = profile.download_file_name();

        let result = match &self.generator {
            Some(generator) => roadmap::generate_roadmap(generator.as_ref(), profile),
            None => Err(roadmap::GeneratorError::Unavailable(
                "no roadmap generator is configured".to_string(),
            )),
        };

        match result {
            Ok(text) => RoadmapSection {
                text,
                error: None,
                file_name,
            },
            Err(err) => {
                warn!(error = err.to_string(); "Roadmap generation failed");
                RoadmapSection {
                    text: FALLBACK_ROADMAP.to_string(),
                    error: Some(err.to_string()),
                    file_name,
                }
            }
        }
    }

    fn flowchart_section(&self) -> FlowchartSection {
        match self.flowchart_url() {
            Ok(url) => {
                debug!(url_len = url.len(); "Flowchart URL built");
                FlowchartSection::Image { url }
            }
            Err(err) => {
                warn!(error = err.to_string(); "Flowchart encoding failed");
                FlowchartSection::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
