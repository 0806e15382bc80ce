//! Command-line argument definitions for the Trailmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the profile and output paths, the
//! skill to recommend courses for, configuration file selection, section
//! visibility, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Trailmap career dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the user profile (JSON)
    #[arg(default_value = "user_profile.json", help = "Path to the profile file")]
    pub profile: String,

    /// Path to the output Markdown file
    #[arg(short, long, default_value = "dashboard.md")]
    pub output: String,

    /// Skill to recommend courses for, e.g. "Learn Tailoring"
    #[arg(short, long)]
    pub skill: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// PlantUML file to use instead of the built-in career flowchart
    #[arg(long)]
    pub flowchart: Option<String>,

    /// Also write the roadmap text next to the output file
    #[arg(long)]
    pub save_roadmap: bool,

    /// Hide the career roadmap section
    #[arg(long)]
    pub no_roadmap: bool,

    /// Hide the career flowchart section
    #[arg(long)]
    pub no_flowchart: bool,

    /// Hide the course recommendations section
    #[arg(long)]
    pub no_courses: bool,

    /// Hide the motivational quote section
    #[arg(long)]
    pub no_quote: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
