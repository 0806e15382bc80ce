//! Trailmap Core Types and Definitions
//!
//! This crate provides the building blocks of a Trailmap career dashboard.
//! It includes:
//!
//! - **Encoding**: PlantUML link encoding of diagram source ([`encoding`] module)
//! - **Profile**: User profile records ([`profile::Profile`])
//! - **Catalog**: Canned course recommendations ([`catalog::CourseCatalog`])
//! - **Quotes**: Motivational quotes ([`quotes`] module)
//! - **Flowchart**: The built-in career flowchart ([`flowchart::CAREER_FLOWCHART`])

pub mod catalog;
pub mod encoding;
pub mod flowchart;
pub mod profile;
pub mod quotes;
