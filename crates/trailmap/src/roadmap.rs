//! Career roadmap generation.
//!
//! The roadmap narrative is written by an external generative-text service.
//! This module builds the prompt from a [`Profile`], defines the
//! [`RoadmapGenerator`] seam the service sits behind, and provides the
//! Gemini-backed implementation in [`GeminiClient`].

mod gemini;

pub use gemini::GeminiClient;

use std::fmt::Write;

use log::{debug, info};
use thiserror::Error;

use trailmap_core::profile::Profile;

/// Text shown in place of the roadmap when generation fails.
pub const FALLBACK_ROADMAP: &str = "Sorry, there was an error generating your career roadmap.";

/// Errors raised while generating a roadmap.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("API key is missing; set the `{0}` environment variable")]
    MissingApiKey(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Service response contained no text")]
    EmptyResponse,

    #[error("Roadmap generation is unavailable: {0}")]
    Unavailable(String),
}

/// Produces roadmap text from a prompt.
///
/// Implemented by [`GeminiClient`] and by any
/// `Fn(&str) -> Result<String, GeneratorError>`, which keeps tests and
/// alternative backends simple.
pub trait RoadmapGenerator {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the service cannot produce text.
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

impl<F> RoadmapGenerator for F
where
    F: Fn(&str) -> Result<String, GeneratorError>,
{
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self(prompt)
    }
}

/// Builds the roadmap prompt for `profile`.
///
/// # Examples
///
/// ```
/// use trailmap::roadmap::build_prompt;
/// use trailmap_core::profile::{CompletedCourse, Profile};
///
/// let profile = Profile::new("Asha", "10th grade", "Tailoring at home")
///     .with_skill("Sewing")
///     .with_course(CompletedCourse::new("Computer Basics", "78", "2024-03-01"));
///
/// let prompt = build_prompt(&profile);
/// assert!(prompt.contains("- Computer Basics (Marks: 78, Date: 2024-03-01)"));
/// ```
pub fn build_prompt(profile: &Profile) -> String {
    let mut prompt = String::new();

    write!(
        prompt,
        "You are a friendly career guide assistant.\n\
         \n\
         Generate a roadmap in friendly and structured format for the following user:\n\
         \n\
         👤 Name: {}\n\
         🎓 Education: {}\n\
         🛠️ Skills: {}\n\
         📍 Experience: {}\n\
         \n\
         📚 Courses Completed:\n",
        profile.name(),
        profile.education(),
        profile.skills().join(", "),
        profile.experience(),
    )
    .expect("Writing to String buffer is infallible");

    for course in profile.courses() {
        writeln!(
            prompt,
            "- {} (Marks: {}, Date: {})",
            course.course_name(),
            course.marks(),
            course.date()
        )
        .expect("Writing to String buffer is infallible");
    }

    prompt.push_str(INSTRUCTIONS);
    prompt
}

const INSTRUCTIONS: &str = "
Now, do the following:

1. Greet the user.
2. Describe their education & give a positive/neutral assessment of it.
3. Analyze their skills and tell if they are sufficient, average, or need improvement.
4. Discuss the work experience, and optionally provide real-life quotes/examples where such experience is valued.
5. Analyze completed courses and recommend 2–3 more relevant courses they can take.
6. Suggest a personalized career path: job roles they can target, required skills/certifications, and industries.
7. Give an approximate 6-month action plan with timelines.
8. End with a motivational note.
";

/// Generates the roadmap narrative for `profile`.
///
/// # Errors
///
/// Propagates the generator's error unchanged.
pub fn generate_roadmap(
    generator: &dyn RoadmapGenerator,
    profile: &Profile,
) -> Result<String, GeneratorError> {
    info!(name = profile.name(); "Generating career roadmap");

    let prompt = build_prompt(profile);
    debug!(prompt_len = prompt.len(); "Roadmap prompt built");

    let text = generator.generate(&prompt)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }

    info!(roadmap_len = text.len(); "Career roadmap generated");
    Ok(text.to_string())
}
