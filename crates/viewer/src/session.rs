use crate::search::filter_courses;
use models::course::Course;
use storage::{Storage, StorageError, ViewedCourses};

/// The two navigation states; `Detail` carries the selected course
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    List,
    Detail(Course),
}

/// In-memory UI state: the fetched catalog, the current query, the
/// navigation state, and the viewed-course tracker
///
/// The catalog is read-only after construction; selecting a course only
/// mutates the viewed set.
pub struct Session<S: Storage> {
    courses: Vec<Course>,
    viewed: ViewedCourses<S>,
    query: String,
    view: View,
}

impl<S: Storage> Session<S> {
    pub fn new(courses: Vec<Course>, storage: S) -> Self {
        Self {
            courses,
            viewed: ViewedCourses::load(storage),
            query: String::new(),
            view: View::List,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Courses visible under the current query, in catalog order.
    /// Recomputed on every call; nothing is memoized.
    pub fn visible_courses(&self) -> Vec<&Course> {
        filter_courses(&self.courses, &self.query)
    }

    pub fn is_viewed(&self, id: &str) -> bool {
        self.viewed.contains(id)
    }

    pub fn viewed_ids(&self) -> &[String] {
        self.viewed.ids()
    }

    /// Selects the nth visible course (zero-based): marks it viewed and
    /// switches to the detail view. An out-of-range index leaves the
    /// session unchanged and returns `false`.
    pub fn select(&mut self, index: usize) -> Result<bool, StorageError> {
        let course = match self.visible_courses().get(index) {
            Some(course) => (*course).clone(),
            None => return Ok(false),
        };

        self.viewed.mark_viewed(&course.id)?;
        self.view = View::Detail(course);

        Ok(true)
    }

    /// Returns to the list view, re-reading the viewed set from storage
    pub fn back(&mut self) {
        self.viewed.refresh();
        self.view = View::List;
    }
}
