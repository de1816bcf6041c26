use log::{error, info};
use models::course::Course;
use reqwest::{Client, StatusCode};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default catalog endpoint, overridable via `COURSES_API_URL`
pub const COURSES_API_URL: &str = "https://gist.githubusercontent.com/jwass91/f8c0b4f887c5db63434b41ad04d56d03/raw/6b532445911a4a871fc8f29bb00b367c7dd2dc61/carta-courses.json";

/// Custom error type for the catalog fetch
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be decoded
    Request(reqwest::Error),
    /// The endpoint answered with a non-success status
    Status(StatusCode),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Request(e) => write!(f, "Failed to fetch courses: {e}"),
            Self::Status(status) => {
                write!(f, "Failed to fetch courses: server answered {status}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

/// Observable states of the one-shot catalog load
#[derive(Debug)]
pub enum LoadState {
    /// The fetch has not resolved yet
    Loading,
    /// The fetch failed; terminal until the process restarts
    Failed(String),
    /// The course list is available, read-only
    Ready(Vec<Course>),
}

/// Fetches the course catalog: exactly one GET, no retry, no timeout
pub async fn fetch_courses(client: &Client, url: &str) -> Result<Vec<Course>, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json::<Vec<Course>>().await?)
}

/// Runs the startup fetch and folds the outcome into a [`LoadState`]
pub async fn load(client: &Client, url: &str) -> LoadState {
    match fetch_courses(client, url).await {
        Ok(courses) => {
            info!("Loaded {} courses from {url}", courses.len());
            LoadState::Ready(courses)
        }
        Err(e) => {
            error!("Course fetch failed: {e}");
            LoadState::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(
            error.to_string(),
            "Failed to fetch courses: server answered 404 Not Found"
        );
    }
}
