pub mod course;
pub mod ratings;
pub mod units;
