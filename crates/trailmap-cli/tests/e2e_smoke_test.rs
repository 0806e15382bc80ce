use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

use trailmap::{TrailmapError, encoding, roadmap::FALLBACK_ROADMAP};
use trailmap_cli::{Args, run};

const PROFILE: &str = r#"{
    "name": "Asha Devi",
    "education": "Dropped out after 10th grade",
    "skills": ["Tailoring", "Handicrafts", "Basic Caregiving"],
    "experience": "Stitching clothes for neighbours",
    "courses": [
        { "course_name": "Computer Basics", "marks": 78, "date": "2024-03-01" }
    ]
}"#;

/// Points the generator at an environment variable that is never set, so
/// the roadmap section always takes the missing-key path.
const CONFIG: &str = r#"
[generator]
api_key_env = "TRAILMAP_E2E_NEVER_SET_API_KEY"

[diagram]
server = "https://plantuml.example.org/plantuml"
format = "svg"
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("Failed to create temp directory");
        fs::write(dir.path().join("profile.json"), PROFILE).unwrap();
        fs::write(dir.path().join("config.toml"), CONFIG).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self) -> Args {
        Args {
            profile: path_string(&self.path("profile.json")),
            output: path_string(&self.path("dashboard.md")),
            skill: None,
            config: Some(path_string(&self.path("config.toml"))),
            flowchart: None,
            save_roadmap: false,
            no_roadmap: false,
            no_flowchart: false,
            no_courses: false,
            no_quote: false,
            log_level: "off".to_string(),
        }
    }

    fn output(&self) -> String {
        fs::read_to_string(self.path("dashboard.md")).expect("Dashboard should be written")
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn e2e_dashboard_without_roadmap() {
    let fixture = Fixture::new();
    let args = Args {
        skill: Some("Learn Tailoring".to_string()),
        no_roadmap: true,
        ..fixture.args()
    };

    run(&args).expect("Dashboard should build");
    let output = fixture.output();

    assert!(output.starts_with("# 🚀 Personalized Career Roadmap Generator for Asha Devi"));
    assert!(output.contains("**Tailoring for Beginners - Full Course**"));
    assert!(output.contains("https://plantuml.example.org/plantuml/svg/"));
    assert!(output.contains("## 💡 Motivational Quote"));
    assert!(!output.contains("## 🎯 Your Career Roadmap"));
}

#[test]
fn e2e_missing_api_key_falls_back() {
    let fixture = Fixture::new();

    run(&fixture.args()).expect("Dashboard should build");
    let output = fixture.output();

    assert!(output.contains("## 🎯 Your Career Roadmap"));
    assert!(output.contains(FALLBACK_ROADMAP));
    assert!(output.contains("API key is missing"));
    assert!(output.contains("TRAILMAP_E2E_NEVER_SET_API_KEY"));
}

#[test]
fn e2e_save_roadmap_writes_download_file() {
    let fixture = Fixture::new();
    let args = Args {
        save_roadmap: true,
        ..fixture.args()
    };

    run(&args).expect("Dashboard should build");

    let saved = fs::read_to_string(fixture.path("career_roadmap_for_Asha_Devi.txt"))
        .expect("Roadmap file should be written");
    assert_eq!(saved, FALLBACK_ROADMAP);
}

#[test]
fn e2e_invalid_profile_still_renders_page() {
    let fixture = Fixture::new();
    fs::write(fixture.path("profile.json"), "{ \"name\": \"Asha\", }").unwrap();

    run(&fixture.args()).expect("Dashboard should build");
    let output = fixture.output();

    assert!(output.contains("Unable to load the user profile."));
    assert!(!output.contains("## 🎯 Your Career Roadmap"));
    assert!(output.contains("## 🌐 Visual Career Map (PlantUML)"));
}

#[test]
fn e2e_custom_flowchart() {
    let fixture = Fixture::new();
    let source = "@startuml\nstart\n:Learn;\n:Earn;\nstop\n@enduml\n";
    fs::write(fixture.path("career.puml"), source).unwrap();
    let args = Args {
        flowchart: Some(path_string(&fixture.path("career.puml"))),
        no_roadmap: true,
        no_quote: true,
        ..fixture.args()
    };

    run(&args).expect("Dashboard should build");
    let output = fixture.output();

    let prefix = "![Branched Career Journey Diagram](https://plantuml.example.org/plantuml/svg/";
    let start = output.find(prefix).expect("Flowchart image should be linked") + prefix.len();
    let end = start + output[start..].find(')').unwrap();
    assert_eq!(encoding::decode(&output[start..end]).unwrap(), source);
}

#[test]
fn e2e_all_sections_disabled() {
    let fixture = Fixture::new();
    let args = Args {
        no_roadmap: true,
        no_flowchart: true,
        no_courses: true,
        no_quote: true,
        ..fixture.args()
    };

    run(&args).expect("Dashboard should build");

    assert_eq!(
        fixture.output(),
        "# 🚀 Personalized Career Roadmap Generator for Asha Devi\n\n> ✅ Profile loaded for **Asha Devi**\n"
    );
}

#[test]
fn e2e_missing_config_file_fails() {
    let fixture = Fixture::new();
    let args = Args {
        config: Some(path_string(&fixture.path("absent.toml"))),
        ..fixture.args()
    };

    let err = run(&args).unwrap_err();
    assert!(matches!(err, TrailmapError::Config(_)));
    assert!(!fixture.path("dashboard.md").exists());
}

#[test]
fn e2e_missing_flowchart_file_fails() {
    let fixture = Fixture::new();
    let args = Args {
        flowchart: Some(path_string(&fixture.path("absent.puml"))),
        ..fixture.args()
    };

    let err = run(&args).unwrap_err();
    assert!(matches!(err, TrailmapError::Io(_)));
}
