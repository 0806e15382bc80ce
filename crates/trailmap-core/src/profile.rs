//! User profile records.
//!
//! A [`Profile`] describes the person a dashboard is generated for: their
//! education, skills, work experience, and the courses they have completed.
//! Profiles are deserialized from JSON documents such as:
//!
//! ```json
//! {
//!   "name": "Asha Devi",
//!   "education": "Dropped out after 10th grade",
//!   "skills": ["Tailoring", "Handicrafts"],
//!   "experience": "2 years stitching for neighbours",
//!   "courses": [
//!     { "course_name": "Computer Basics", "marks": 78, "date": "2024-03-01" }
//!   ]
//! }
//! ```
//!
//! Scalar fields that people tend to write either as text or as numbers
//! (`experience`, `marks`, `date`) are kept as their display text.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    education: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    experience: String,
    #[serde(default)]
    courses: Vec<CompletedCourse>,
}

impl Profile {
    /// Creates a profile without skills or completed courses.
    pub fn new(
        name: impl Into<String>,
        education: impl Into<String>,
        experience: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            education: education.into(),
            skills: Vec::new(),
            experience: experience.into(),
            courses: Vec::new(),
        }
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds a completed course.
    pub fn with_course(mut self, course: CompletedCourse) -> Self {
        self.courses.push(course);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }

    pub fn courses(&self) -> &[CompletedCourse] {
        &self.courses
    }

    /// File name offered when saving this profile's roadmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap_core::profile::Profile;
    ///
    /// let profile = Profile::new("Asha Devi", "10th grade", "Tailoring");
    /// assert_eq!(profile.download_file_name(), "career_roadmap_for_Asha_Devi.txt");
    /// ```
    pub fn download_file_name(&self) -> String {
        format!("career_roadmap_for_{}.txt", self.name.replace(' ', "_"))
    }
}

/// A course the user has already completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedCourse {
    course_name: String,
    #[serde(deserialize_with = "text_or_number")]
    marks: String,
    #[serde(deserialize_with = "text_or_number")]
    date: String,
}

impl CompletedCourse {
    pub fn new(
        course_name: impl Into<String>,
        marks: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            course_name: course_name.into(),
            marks: marks.into(),
            date: date.into(),
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn marks(&self) -> &str {
        &self.marks
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Accepts a string or a number and keeps its display text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl Visitor<'_> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}
