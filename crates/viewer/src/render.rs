use crate::session::Session;
use datafetcher::LoadState;
use models::{
    course::Course,
    ratings::{self, InstructorSummary},
};
use storage::Storage;

/// Longest description excerpt shown on a list card
const CARD_DESCRIPTION_CHARS: usize = 120;

/// Banner text for the pre-list load states; `Ready` renders nothing
pub fn load_banner(state: &LoadState) -> Option<String> {
    match state {
        LoadState::Loading => Some("Loading courses...".to_string()),
        LoadState::Failed(message) => Some(format!("Error: {message}")),
        LoadState::Ready(_) => None,
    }
}

/// Renders the list view: header, result count when a query is active,
/// and one card per visible course
pub fn render_list<S: Storage>(session: &Session<S>) -> String {
    let visible = session.visible_courses();
    // Any non-empty query counts as searching, whitespace included
    let searching = !session.query().is_empty();

    let mut out = String::from("Carta Course Search\n");
    if searching {
        out.push_str(&format!("{} found\n", count_noun(visible.len(), "course")));
    }
    out.push('\n');

    if visible.is_empty() {
        out.push_str(if searching {
            "No courses found matching your search.\n"
        } else {
            "No courses available.\n"
        });
        return out;
    }

    for (index, course) in visible.iter().enumerate() {
        out.push_str(&render_card(index + 1, course, session.is_viewed(&course.id)));
        out.push('\n');
    }

    out
}

fn render_card(number: usize, course: &Course, viewed: bool) -> String {
    let marker = if viewed { " [viewed]" } else { "" };

    let mut out = format!("{number}. {}{marker}\n", course.course_codes.join(" "));
    out.push_str(&format!("   {}\n", course.title));
    out.push_str(&format!(
        "   {}\n",
        excerpt(&course.description, CARD_DESCRIPTION_CHARS)
    ));

    let mut meta = course.units().to_string();
    if let Some(grading) = present(&course.grading) {
        meta.push_str(&format!(" | {grading}"));
    }
    out.push_str(&format!("   {meta}\n"));

    out
}

/// Renders the detail view: metadata, description, offerings, and
/// instructor ratings grouped by instructor
pub fn render_detail(course: &Course) -> String {
    let mut out = format!("{}\n{}\n", course.course_codes.join(" "), course.title);

    let mut meta = vec![course.units().to_string()];
    if let Some(grading) = present(&course.grading) {
        meta.push(grading.to_string());
    }
    if let Some(hours) = present(&course.average_hours_spent) {
        meta.push(format!("Avg. {hours} hours/week"));
    }
    out.push_str(&format!("{}\n", meta.join(" | ")));

    out.push_str(&format!("\nDescription\n{}\n", course.description));

    if !course.offerings.is_empty() {
        out.push_str("\nCourse Offerings\n");
        for offering in &course.offerings {
            out.push_str(&format!(
                "- {} Section {} | {} | {}\n",
                offering.component,
                offering.section_number,
                offering.instruction_mode,
                offering.term
            ));
            if !offering.notes.is_empty() {
                out.push_str(&format!("  {}\n", offering.notes));
            }
        }
    }

    out.push_str("\nInstructor Ratings\n");
    let summaries = ratings::summarize_by_instructor(&course.ratings);
    if summaries.is_empty() {
        out.push_str("No instructor ratings available for this course.\n");
    } else {
        for summary in &summaries {
            out.push_str(&render_instructor(summary));
        }
    }

    out
}

fn render_instructor(summary: &InstructorSummary) -> String {
    let mut out = format!(
        "{}: {} {} ({})\n",
        summary.name,
        summary.display_average(),
        ratings::star_display(summary.average),
        count_noun(summary.total_ratings as usize, "rating")
    );

    // Per-term breakdown under each instructor
    for entry in &summary.entries {
        out.push_str(&format!(
            "  {}: {} ({})\n",
            entry.term,
            entry.average_rating,
            count_noun(entry.num_ratings as usize, "rating")
        ));
    }

    out
}

/// "1 course" / "3 courses"
fn count_noun(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

/// Treats empty and whitespace-only optional text as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text.chars().take(max_chars).collect::<String>();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::course::{Offering, Rating, Term};
    use storage::MemoryStorage;

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: "A course.".to_string(),
            min_units: 3.0,
            max_units: 3.0,
            course_codes: vec!["CS 101".to_string()],
            ..Course::default()
        }
    }

    fn autumn() -> Term {
        Term {
            season: "Autumn".to_string(),
            start_year: 2023,
            ..Term::default()
        }
    }

    #[test]
    fn test_load_banner() {
        assert_eq!(
            load_banner(&LoadState::Loading).as_deref(),
            Some("Loading courses...")
        );
        assert_eq!(
            load_banner(&LoadState::Failed("boom".to_string())).as_deref(),
            Some("Error: boom")
        );
        assert_eq!(load_banner(&LoadState::Ready(Vec::new())), None);
    }

    #[test]
    fn test_list_shows_result_count_only_when_searching() {
        let mut session = Session::new(
            vec![course("c-1", "Compilers"), course("c-2", "Networks")],
            MemoryStorage::new(),
        );

        let rendered = render_list(&session);
        assert!(!rendered.contains("found"));
        assert!(rendered.contains("1. CS 101"));
        assert!(rendered.contains("3 units"));

        session.set_query("compilers");
        let rendered = render_list(&session);
        assert!(rendered.contains("1 course found"));

        // A whitespace-only query filters nothing but still shows the count
        session.set_query("   ");
        let rendered = render_list(&session);
        assert!(rendered.contains("2 courses found"));
    }

    #[test]
    fn test_list_empty_states() {
        let mut session = Session::new(Vec::new(), MemoryStorage::new());
        assert!(render_list(&session).contains("No courses available."));

        session.set_query("anything");
        assert!(render_list(&session).contains("No courses found matching your search."));
    }

    #[test]
    fn test_list_marks_viewed_courses() {
        let mut session = Session::new(
            vec![course("c-1", "Compilers"), course("c-2", "Networks")],
            MemoryStorage::new(),
        );
        session.select(0).unwrap();
        session.back();

        let rendered = render_list(&session);
        assert!(rendered.contains("1. CS 101 [viewed]\n"));
        assert!(rendered.contains("2. CS 101\n"));
    }

    #[test]
    fn test_detail_omits_absent_optional_fields() {
        let bare = course("c-1", "Compilers");

        let rendered = render_detail(&bare);
        assert!(rendered.contains("Compilers"));
        assert!(rendered.contains("3 units\n"));
        assert!(!rendered.contains("hours/week"));
        assert!(!rendered.contains("Course Offerings"));
        assert!(rendered.contains("No instructor ratings available for this course."));
    }

    #[test]
    fn test_detail_full_meta_line() {
        let mut full = course("c-1", "Compilers");
        full.grading = Some("Letter".to_string());
        full.average_hours_spent = Some("12".to_string());

        assert!(render_detail(&full).contains("3 units | Letter | Avg. 12 hours/week\n"));
    }

    #[test]
    fn test_detail_offerings_and_ratings() {
        let mut full = course("c-1", "Compilers");
        full.offerings = vec![Offering {
            component: "LEC".to_string(),
            section_number: "01".to_string(),
            instruction_mode: "In Person".to_string(),
            notes: "First meeting in room 104.".to_string(),
            term: autumn(),
            ..Offering::default()
        }];
        full.ratings = vec![
            Rating {
                instructor_name: "A".to_string(),
                average_rating: "4.0".to_string(),
                num_ratings: 10,
                term: autumn(),
            },
            Rating {
                instructor_name: "A".to_string(),
                average_rating: "5.0".to_string(),
                num_ratings: 20,
                term: autumn(),
            },
            Rating {
                instructor_name: "B".to_string(),
                average_rating: "3.0".to_string(),
                num_ratings: 1,
                term: autumn(),
            },
        ];

        let rendered = render_detail(&full);
        assert!(rendered.contains("- LEC Section 01 | In Person | Autumn 2023\n"));
        assert!(rendered.contains("  First meeting in room 104.\n"));
        assert!(rendered.contains("A: 4.50 ★★★★★ (30 ratings)\n"));
        assert!(rendered.contains("B: 3.00 ★★★☆☆ (1 rating)\n"));
        // A's per-term breakdown sits under the summary line
        assert!(rendered.contains("  Autumn 2023: 4.0 (10 ratings)\n"));
    }

    #[test]
    fn test_excerpt_truncates_long_descriptions() {
        let long = "x".repeat(200);
        let shown = excerpt(&long, CARD_DESCRIPTION_CHARS);
        assert_eq!(shown.chars().count(), CARD_DESCRIPTION_CHARS + 3);
        assert!(shown.ends_with("..."));
    }
}
