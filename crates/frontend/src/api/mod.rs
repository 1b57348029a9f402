//! Gateway to the tourism REST backend.
//!
//! The [`TourismApi`] trait is the seam between the state layer and the
//! network: production code talks to [`HttpApi`], tests substitute their
//! own implementation.

pub mod http;

pub use http::HttpApi;

use async_trait::async_trait;
use contracts::{Destination, DestinationDraft, Province, Region};

/// Connection settings for the backend, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    /// Read settings from the compile-time environment.
    ///
    /// `API_BASE_URL` and `API_TOKEN` are baked in at build time; the
    /// defaults point at a local backend with no credential.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("API_BASE_URL").unwrap_or("http://localhost:8000/api"),
            option_env!("API_TOKEN").unwrap_or(""),
        )
    }

    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Errors that can occur while talking to the backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, message: Option<String> },
    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The human-readable message the backend attached to a failure
    /// response, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Read and write operations of the tourism backend.
#[async_trait(?Send)]
pub trait TourismApi {
    /// `GET /provinsis`, the full province collection.
    async fn fetch_provinces(&self) -> Result<Vec<Province>, ApiError>;

    /// `GET /daerahs`, the full region collection.
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError>;

    /// `GET /wisatas`, every destination the backend will hand out in bulk.
    async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, ApiError>;

    /// `GET /wisatas/daerah/{id}`, destinations scoped to one region.
    async fn fetch_destinations_by_region(
        &self,
        region_id: i64,
    ) -> Result<Vec<Destination>, ApiError>;

    /// `POST /wisatas`, create a destination; the backend assigns the id.
    async fn create_destination(&self, draft: &DestinationDraft)
        -> Result<Destination, ApiError>;

    /// `DELETE /wisatas/{id}`.
    async fn delete_destination(&self, id: i64) -> Result<(), ApiError>;
}
