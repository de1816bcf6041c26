use crate::course::Rating;
use std::cmp::Ordering;

/// Aggregate rating statistics for one instructor across terms
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorSummary {
    pub name: String,
    /// Arithmetic mean of the per-term averages
    pub average: f64,
    /// Sum of the per-term rating counts
    pub total_ratings: u32,
    /// The contributing entries, in catalog order
    pub entries: Vec<Rating>,
}

impl InstructorSummary {
    /// The average formatted for display, two decimal places
    pub fn display_average(&self) -> String {
        format!("{:.2}", self.average)
    }
}

/// Groups a course's ratings by exact instructor-name equality and computes
/// per-instructor statistics
///
/// Two spellings of the same person are distinct groups. The result is
/// sorted descending by average; equal averages keep first-seen order.
/// An unparseable `average_rating` contributes 0.0 to the mean.
pub fn summarize_by_instructor(ratings: &[Rating]) -> Vec<InstructorSummary> {
    let mut groups: Vec<(String, Vec<Rating>)> = Vec::new();

    for rating in ratings {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == rating.instructor_name)
        {
            Some((_, entries)) => entries.push(rating.clone()),
            None => groups.push((rating.instructor_name.clone(), vec![rating.clone()])),
        }
    }

    let mut summaries = groups
        .into_iter()
        .map(|(name, entries)| {
            let total: f64 = entries
                .iter()
                .map(|rating| rating.average_rating.parse::<f64>().unwrap_or(0.0))
                .sum();
            let average = total / entries.len() as f64;
            let total_ratings = entries.iter().map(|rating| rating.num_ratings).sum();

            InstructorSummary {
                name,
                average,
                total_ratings,
                entries,
            }
        })
        .collect::<Vec<_>>();

    // Stable sort, so ties keep insertion order
    summaries.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));

    summaries
}

/// Renders an average rating as a five-symbol star string
///
/// The filled count is the average rounded to the nearest integer,
/// clamped to 0..=5; the remainder is unfilled.
pub fn star_display(average: f64) -> String {
    let filled = if average.is_nan() {
        0
    } else {
        average.round().clamp(0.0, 5.0) as usize
    };

    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
