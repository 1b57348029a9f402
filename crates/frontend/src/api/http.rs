//! [`TourismApi`] implementation backed by the browser fetch API.

use contracts::{Destination, DestinationDraft, Province, Region};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::debug;

use super::{ApiConfig, ApiError, TourismApi};

/// Error payload the backend attaches to some non-success responses.
#[derive(serde::Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.token)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.config.endpoint(path))
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json")
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        debug!("GET {path}");
        let response = self.get(path).send().await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }
}

/// Decode a non-success response into [`ApiError::Status`], keeping the
/// backend's `{message}` payload when one is present.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorPayload>()
        .await
        .ok()
        .and_then(|payload| payload.message);
    ApiError::Status { status, message }
}

#[async_trait::async_trait(?Send)]
impl TourismApi for HttpApi {
    async fn fetch_provinces(&self) -> Result<Vec<Province>, ApiError> {
        self.get_json("/provinsis").await
    }

    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json("/daerahs").await
    }

    async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, ApiError> {
        self.get_json("/wisatas").await
    }

    async fn fetch_destinations_by_region(
        &self,
        region_id: i64,
    ) -> Result<Vec<Destination>, ApiError> {
        self.get_json(&format!("/wisatas/daerah/{region_id}")).await
    }

    async fn create_destination(
        &self,
        draft: &DestinationDraft,
    ) -> Result<Destination, ApiError> {
        debug!("POST /wisatas ({})", draft.nama);
        let response = Request::post(&self.config.endpoint("/wisatas"))
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json")
            .json(draft)?
            .send()
            .await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_destination(&self, id: i64) -> Result<(), ApiError> {
        debug!("DELETE /wisatas/{id}");
        let response = Request::delete(&self.config.endpoint(&format!("/wisatas/{id}")))
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json")
            .send()
            .await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}
