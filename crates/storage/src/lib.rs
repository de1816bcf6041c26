pub mod backend;
pub mod viewed;

pub use backend::{FileStorage, MemoryStorage, Storage, StorageError};
pub use viewed::{VIEWED_COURSES_KEY, ViewedCourses};
