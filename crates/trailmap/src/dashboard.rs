//! The assembled dashboard page.
//!
//! A [`Dashboard`] is plain data: a header plus up to four optional sections
//! in page order (courses, roadmap, flowchart, quote). Its [`fmt::Display`]
//! implementation renders the page as Markdown.

use std::fmt;

use trailmap_core::catalog::VideoCourse;

/// A rendered career dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub(crate) header: Header,
    pub(crate) courses: Option<CoursesSection>,
    pub(crate) roadmap: Option<RoadmapSection>,
    pub(crate) flowchart: Option<FlowchartSection>,
    pub(crate) quote: Option<&'static str>,
}

impl Dashboard {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn courses(&self) -> Option<&CoursesSection> {
        self.courses.as_ref()
    }

    pub fn roadmap(&self) -> Option<&RoadmapSection> {
        self.roadmap.as_ref()
    }

    pub fn flowchart(&self) -> Option<&FlowchartSection> {
        self.flowchart.as_ref()
    }

    pub fn quote(&self) -> Option<&'static str> {
        self.quote
    }

    /// Renders the page as Markdown.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

/// Page title and profile status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// A profile was loaded for the named person.
    Loaded { name: String },
    /// No profile is available.
    Missing,
}

/// Course recommendations for the requested skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursesSection {
    /// No skill was requested; the known requests are suggested.
    Prompt { examples: Vec<&'static str> },
    /// The request matched a catalog entry.
    Found {
        request: String,
        courses: &'static [VideoCourse],
    },
    /// The request matched nothing.
    NotFound { request: String },
}

/// The generated career roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapSection {
    pub(crate) text: String,
    pub(crate) error: Option<String>,
    pub(crate) file_name: String,
}

impl RoadmapSection {
    /// Roadmap text, or the fallback message when generation failed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Why generation failed, if it did.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// File name offered for saving the roadmap.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// The career flowchart image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowchartSection {
    /// URL of the image on the PlantUML server.
    Image { url: String },
    /// The diagram could not be encoded.
    Unavailable { reason: String },
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.header {
            Header::Loaded { name } => {
                writeln!(f, "# 🚀 Personalized Career Roadmap Generator for {name}")?;
                writeln!(f)?;
                writeln!(f, "> ✅ Profile loaded for **{name}**")?;
            }
            Header::Missing => {
                writeln!(f, "# 🚀 Personalized Career Roadmap Generator")?;
                writeln!(f)?;
                writeln!(f, "> ❌ Unable to load the user profile.")?;
            }
        }

        if let Some(courses) = &self.courses {
            writeln!(f)?;
            write!(f, "{courses}")?;
        }
        if let Some(roadmap) = &self.roadmap {
            writeln!(f)?;
            write!(f, "{roadmap}")?;
        }
        if let Some(flowchart) = &self.flowchart {
            writeln!(f)?;
            write!(f, "{flowchart}")?;
        }
        if let Some(quote) = self.quote {
            writeln!(f)?;
            writeln!(f, "## 💡 Motivational Quote")?;
            writeln!(f)?;
            writeln!(f, "**{quote}**")?;
        }

        Ok(())
    }
}

impl fmt::Display for CoursesSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 📚 Skill-based Course Recommendations")?;
        writeln!(f)?;

        match self {
            CoursesSection::Prompt { examples } => {
                let examples: Vec<_> = examples.iter().map(|e| format!("'{e}'")).collect();
                writeln!(
                    f,
                    "Enter the skill you want to learn (e.g., {}).",
                    examples.join(", ")
                )?;
            }
            CoursesSection::Found { request, courses } => {
                writeln!(f, "Recommendations for *{request}*:")?;
                for course in courses.iter() {
                    writeln!(f)?;
                    writeln!(f, "**{}**  ", course.title)?;
                    writeln!(f, "*Channel:* {}  ", course.channel)?;
                    writeln!(f, "*Duration:* {}  ", course.duration)?;
                    writeln!(f, "[Watch Now]({})", course.url)?;
                    writeln!(f)?;
                    writeln!(f, "![{}]({})", course.title, course.thumbnail)?;
                }
            }
            CoursesSection::NotFound { request } => {
                writeln!(
                    f,
                    "> ⚠️ No recommendations found for \"{request}\". Please try again."
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RoadmapSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🎯 Your Career Roadmap")?;
        writeln!(f)?;
        if let Some(error) = &self.error {
            writeln!(f, "> ❌ Error generating career roadmap: {error}")?;
            writeln!(f)?;
        }
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;
        writeln!(f, "📄 Download: `{}`", self.file_name)
    }
}

impl fmt::Display for FlowchartSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🌐 Visual Career Map (PlantUML)")?;
        writeln!(f)?;
        match self {
            FlowchartSection::Image { url } => {
                writeln!(f, "![Branched Career Journey Diagram]({url})")
            }
            FlowchartSection::Unavailable { reason } => {
                writeln!(f, "> ❌ Flowchart unavailable: {reason}")
            }
        }
    }
}
