use crate::units::Units;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An academic term, with links to its neighbors in the term sequence
///
/// Every field defaults so that a sparse record degrades at render time
/// instead of failing the whole catalog load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Term {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub start_year: u16,
    #[serde(default)]
    pub end_year: u16,
    #[serde(default)]
    pub stanford_term_id: Option<i64>,
    #[serde(default)]
    pub previous_term: Option<i64>,
    #[serde(default)]
    pub next_term: Option<i64>,
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.season, self.start_year)
    }
}

/// One instructor's aggregate student rating for a course in a term
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    #[serde(default)]
    pub instructor_name: String,
    /// Numeric average carried as text, exactly as the endpoint sends it
    #[serde(default)]
    pub average_rating: String,
    #[serde(default)]
    pub num_ratings: u32,
    #[serde(default)]
    pub term: Term,
}

/// A scheduled instance of a course in a given term
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Offering {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub section_number: String,
    #[serde(default)]
    pub instruction_mode: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub term: Term,
    /// Schedule entries are carried as-is, never interpreted
    #[serde(default)]
    pub schedules: Vec<Value>,
}

/// Relations to other courses, carried as unvalidated payloads so they
/// survive a round-trip without loss
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SimilarCourses {
    #[serde(default)]
    pub taken_after: Vec<Value>,
    #[serde(default)]
    pub taken_before: Vec<Value>,
    #[serde(default)]
    pub taken_concurrently: Vec<Value>,
    #[serde(default)]
    pub similar_descriptions: Vec<Value>,
}

/// One catalog entry; immutable once fetched
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_units: f32,
    #[serde(default)]
    pub max_units: f32,
    #[serde(default)]
    pub grading: Option<String>,
    #[serde(default)]
    pub average_hours_spent: Option<String>,
    #[serde(default)]
    pub repeatable: bool,
    #[serde(default)]
    pub seasons_offered: Vec<String>,
    #[serde(default)]
    pub general_requirements: Vec<String>,
    #[serde(default)]
    pub course_codes: Vec<String>,
    #[serde(default)]
    pub offerings: Vec<Offering>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub similar_courses: Option<SimilarCourses>,
}

impl Course {
    /// Unit value for display, collapsing an equal min/max pair
    pub fn units(&self) -> Units {
        Units::from_min_max(self.min_units, self.max_units)
    }
}
