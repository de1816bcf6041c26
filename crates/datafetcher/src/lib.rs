pub mod fetch;

pub use fetch::{COURSES_API_URL, FetchError, LoadState, fetch_courses, load};
