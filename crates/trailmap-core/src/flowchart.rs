//! The built-in career flowchart.
//!
//! A month-by-month PlantUML activity diagram that ends in four parallel
//! career paths. It is static content; callers may substitute their own
//! PlantUML source.

/// PlantUML source of the built-in career flowchart.
pub const CAREER_FLOWCHART: &str = r#"@startuml
skinparam backgroundColor #FFFFFF
skinparam defaultFontSize 14
skinparam node {
    BackgroundColor white
    BorderColor black
    FontSize 14
}
skinparam ArrowColor #4B8BBE

title Career Roadmap - Month-wise 🎯

start
:📚 Jan: Informal Education\nDropped Out After 10th Grade;
note right
"You are here"
end note
:🧶 Feb: Skill Discovery\nTailoring, Handicrafts, Basic Caregiving (from home & workshops);
:🎥 Mar: Online Learning\nMobile App + NGO Courses (Spoken English, Computer Basics);
:💻 Apr: Hands-on Practice\nTailoring for Neighbors, Helping at Local Clinic;
:👩‍👧 May: Community Help\nAssisted Women in Learning Tailoring Basics;
:🎓 Jun: Upskilling\nCompleted Computer & Handicrafts Course;
:📱 Jul: Digital Presence\nWhatsApp Catalog, Basic Phone Skills;
:🎨 Aug: Expand Skills\nFabric Handling, Finishing Techniques;

split
    :🚀 Path 1:\nHospital Attendant Role\n(Sept - Apply Locally);
split again
    :🪡 Path 2:\nPart-time Tailoring Work\n(Home or Boutique-based);
split again
    :🧑‍🏫 Path 3:\nCommunity Trainer\nTeach Women Basic Skills;
split again
    :🛍️ Path 4:\nSell Handicrafts & Clothes\nOnline/Offline;
endsplit

:🧳 Oct: Portfolio Prep\nClick Work Photos, Create WhatsApp Showcase;
:📢 Nov-Dec: Promotion Time\nLeaflets, Local WhatsApp Groups, Community Events;
stop
@enduml
"#;
