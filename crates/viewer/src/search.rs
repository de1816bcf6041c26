use models::course::Course;

/// Filters courses by a free-text query, preserving catalog order
///
/// An empty or whitespace-only query returns the full list. Otherwise a
/// course matches when the lowercased query, surrounding whitespace
/// included, is a substring of its lowercased title, description, or one
/// of its course codes. Substring matching only; no tokenization, no
/// ranking.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    if query.trim().is_empty() {
        return courses.iter().collect();
    }

    let query = query.to_lowercase();

    courses
        .iter()
        .filter(|course| {
            course.title.to_lowercase().contains(&query)
                || course.description.to_lowercase().contains(&query)
                || course
                    .course_codes
                    .iter()
                    .any(|code| code.to_lowercase().contains(&query))
        })
        .collect()
}
