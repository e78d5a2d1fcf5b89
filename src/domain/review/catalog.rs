//! Fixed catalogs offered by the questionnaire.
//!
//! Both enums serialize to their display label, which is also the persisted
//! representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Internship position a reviewer can select. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Tracker/Project Manager")]
    ProjectManager,
    #[serde(rename = "Content Creator")]
    ContentCreator,
    #[serde(rename = "Marketer")]
    Marketer,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Psychologist")]
    Psychologist,
    #[serde(rename = "Designer")]
    Designer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Fundraising Manager")]
    FundraisingManager,
}

impl Position {
    pub const ALL: [Position; 11] = [
        Position::ProductManager,
        Position::ProjectManager,
        Position::ContentCreator,
        Position::Marketer,
        Position::FrontendDeveloper,
        Position::BackendDeveloper,
        Position::DevOpsEngineer,
        Position::Psychologist,
        Position::Designer,
        Position::DataScientist,
        Position::FundraisingManager,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::ProductManager => "Product Manager",
            Position::ProjectManager => "Tracker/Project Manager",
            Position::ContentCreator => "Content Creator",
            Position::Marketer => "Marketer",
            Position::FrontendDeveloper => "Frontend Developer",
            Position::BackendDeveloper => "Backend Developer",
            Position::DevOpsEngineer => "DevOps Engineer",
            Position::Psychologist => "Psychologist",
            Position::Designer => "Designer",
            Position::DataScientist => "Data Scientist",
            Position::FundraisingManager => "Fundraising Manager",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ValidationError::invalid_format("position", format!("unknown position '{}'", s)))
    }
}

/// Criterion rated during the multi-rating phase. Declaration order is ask order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Working atmosphere in the team")]
    WorkingAtmosphere,
    #[serde(rename = "Convenience of schedule")]
    ScheduleConvenience,
    #[serde(rename = "Activity of founders")]
    FounderActivity,
    #[serde(rename = "Activity of the whole team")]
    TeamActivity,
    #[serde(rename = "Opportunities for self-realization and creativity")]
    SelfRealization,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::WorkingAtmosphere,
        Criterion::ScheduleConvenience,
        Criterion::FounderActivity,
        Criterion::TeamActivity,
        Criterion::SelfRealization,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::WorkingAtmosphere => "Working atmosphere in the team",
            Criterion::ScheduleConvenience => "Convenience of schedule",
            Criterion::FounderActivity => "Activity of founders",
            Criterion::TeamActivity => "Activity of the whole team",
            Criterion::SelfRealization => "Opportunities for self-realization and creativity",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
