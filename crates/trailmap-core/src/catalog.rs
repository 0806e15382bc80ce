//! Canned video-course recommendations.
//!
//! The catalog is a fixed table from a skill request ("Learn Tailoring") to a
//! short list of [`VideoCourse`]s. Lookups compare the whole request, ignoring
//! case and surrounding whitespace; there is no partial or fuzzy matching.

use log::debug;

/// A recommended video course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoCourse {
    pub title: &'static str,
    pub channel: &'static str,
    /// Running time as `h:mm:ss`.
    pub duration: &'static str,
    pub url: &'static str,
    pub thumbnail: &'static str,
}

/// Courses suggested for one skill request.
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub request: &'static str,
    pub courses: &'static [VideoCourse],
}

const BUILTIN: &[SkillEntry] = &[
    SkillEntry {
        request: "Learn Tailoring",
        courses: &[
            VideoCourse {
                title: "Tailoring for Beginners - Full Course",
                channel: "Fashion with Style",
                duration: "8:30:00",
                url: "https://www.youtube.com/watch?v=example_tailoring_course",
                thumbnail: "https://i.ytimg.com/vi/example_tailoring_course/hqdefault.jpg",
            },
            VideoCourse {
                title: "Basic Sewing Techniques - Tailoring Skills",
                channel: "Learn Sewing with Jenny",
                duration: "5:15:00",
                url: "https://www.youtube.com/watch?v=example_sewing_skills",
                thumbnail: "https://i.ytimg.com/vi/example_sewing_skills/hqdefault.jpg",
            },
        ],
    },
    SkillEntry {
        request: "Learn Jaggery Making",
        courses: &[
            VideoCourse {
                title: "How to Make Jaggery at Home",
                channel: "Traditional Cooking with Ramesh",
                duration: "3:45:00",
                url: "https://www.youtube.com/watch?v=example_jaggery_course",
                thumbnail: "https://i.ytimg.com/vi/example_jaggery_course/hqdefault.jpg",
            },
            VideoCourse {
                title: "Jaggery Production and Benefits",
                channel: "Ayurvedic Cooking with Shreya",
                duration: "4:00:00",
                url: "https://www.youtube.com/watch?v=example_jaggery_benefits",
                thumbnail: "https://i.ytimg.com/vi/example_jaggery_benefits/hqdefault.jpg",
            },
        ],
    },
];

/// Lookup table of course recommendations.
///
/// # Examples
///
/// ```
/// use trailmap_core::catalog::CourseCatalog;
///
/// let catalog = CourseCatalog::builtin();
/// let courses = catalog.lookup("learn tailoring").unwrap();
/// assert_eq!(courses[0].channel, "Fashion with Style");
/// assert!(catalog.lookup("Learn Pottery").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CourseCatalog {
    entries: &'static [SkillEntry],
}

impl CourseCatalog {
    /// Returns the catalog shipped with Trailmap.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Finds the courses for a skill request.
    ///
    /// Returns `None` when no entry matches the whole request.
    pub fn lookup(&self, request: &str) -> Option<&'static [VideoCourse]> {
        let request = request.trim();
        let wanted = request.to_lowercase();
        let found = self
            .entries
            .iter()
            .find(|entry| entry.request.to_lowercase() == wanted)
            .map(|entry| entry.courses);

        debug!(request, matched = found.is_some(); "Course catalog lookup");
        found
    }

    /// Iterates over the requests the catalog knows about.
    pub fn requests(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.request)
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_request() {
        let courses = CourseCatalog::builtin().lookup("Learn Jaggery Making").unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "How to Make Jaggery at Home");
        assert_eq!(courses[1].duration, "4:00:00");
    }

    #[test]
    fn test_lookup_ignores_case_and_surrounding_whitespace() {
        let catalog = CourseCatalog::builtin();
        assert!(catalog.lookup("LEARN TAILORING").is_some());
        assert!(catalog.lookup("  learn tailoring\n").is_some());
    }

    #[test]
    fn test_lookup_requires_whole_request() {
        let catalog = CourseCatalog::builtin();
        assert!(catalog.lookup("Tailoring").is_none());
        assert!(catalog.lookup("Learn Tailoring now").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_requests_lists_every_entry() {
        let requests: Vec<_> = CourseCatalog::builtin().requests().collect();
        assert_eq!(requests, ["Learn Tailoring", "Learn Jaggery Making"]);
    }
}
