//! CLI logic for the Trailmap career dashboard.
//!
//! This module contains the core CLI logic: resolving configuration,
//! loading the profile, wiring the Gemini roadmap generator, and writing the
//! rendered dashboard.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{error, info, warn};

use trailmap::{
    DashboardBuilder, TrailmapError,
    config::{AppConfig, SectionsConfig},
    profile::load_profile,
    roadmap::{GeminiClient, GeneratorError},
};

/// Run the Trailmap CLI application
///
/// This function builds the dashboard for the profile named in `args` and
/// writes it as Markdown to the output file. A profile that cannot be loaded
/// is reported and the page is still written without the sections that need
/// it.
///
/// # Errors
///
/// Returns `TrailmapError` for:
/// - Configuration loading errors
/// - Reading a custom flowchart file
/// - Writing the output files
pub fn run(args: &Args) -> Result<(), TrailmapError> {
    info!(
        profile_path = args.profile,
        output_path = args.output;
        "Processing dashboard"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_section_flags(app_config, args);

    let profile = match load_profile(&args.profile) {
        Ok(profile) => {
            info!(name = profile.name(); "Profile loaded");
            Some(profile)
        }
        Err(err) => {
            error!("{}", error_adapter::render(&err));
            None
        }
    };

    let mut builder = DashboardBuilder::new(app_config);

    if let Some(path) = &args.flowchart {
        info!(path = path.as_str(); "Loading custom flowchart");
        builder = builder.with_flowchart(fs::read_to_string(path)?);
    }

    if builder.config().sections().roadmap() && profile.is_some() {
        builder = match GeminiClient::from_env(builder.config().generator()) {
            Ok(client) => builder.with_generator(client),
            Err(err) => {
                warn!(error = err.to_string(); "Roadmap generator unavailable");
                let reason = err.to_string();
                builder.with_generator(move |_: &str| -> Result<String, GeneratorError> {
                    Err(GeneratorError::Unavailable(reason.clone()))
                })
            }
        };
    }

    let dashboard = builder.build(profile.as_ref(), args.skill.as_deref());
    fs::write(&args.output, dashboard.to_markdown())?;
    info!(output_file = args.output; "Dashboard written");

    if args.save_roadmap {
        match dashboard.roadmap() {
            Some(roadmap) => {
                let dir = Path::new(&args.output).parent().unwrap_or(Path::new("."));
                let path = dir.join(roadmap.file_name());
                fs::write(&path, roadmap.text())?;
                info!(roadmap_file = path.display().to_string(); "Roadmap saved");
            }
            None => warn!("No roadmap to save"),
        }
    }

    Ok(())
}

/// Applies the `--no-*` flags on top of the configured sections.
fn apply_section_flags(config: AppConfig, args: &Args) -> AppConfig {
    let sections = *config.sections();
    config.with_sections(SectionsConfig::new(
        sections.roadmap() && !args.no_roadmap,
        sections.flowchart() && !args.no_flowchart,
        sections.courses() && !args.no_courses,
        sections.quote() && !args.no_quote,
    ))
}
