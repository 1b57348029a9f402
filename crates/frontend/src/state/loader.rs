//! On-demand loading of one region's destination list.

use leptos::prelude::Set;
use log::error;

use crate::api::{ApiError, TourismApi};

use super::DirectoryContext;

/// Fetch the destinations of `region_id` into the region-scoped list.
///
/// The loading flag covers the whole operation. Success replaces the list
/// and clears the current error; failure empties the list and stores a
/// message built from the failure, preferring the backend's own `{message}`.
pub async fn load_region_destinations(
    api: &impl TourismApi,
    ctx: DirectoryContext,
    region_id: i64,
) {
    ctx.loading.set(true);
    match api.fetch_destinations_by_region(region_id).await {
        Ok(list) => {
            ctx.destinations.set(list);
            ctx.error.set(None);
        }
        Err(err) => {
            error!("failed to fetch destinations for region {region_id}: {err}");
            ctx.destinations.set(Vec::new());
            ctx.error.set(Some(match err {
                ApiError::Status {
                    message: Some(message),
                    ..
                } => message,
                ApiError::Status { .. } => "Terjadi kesalahan saat mengambil data.".to_string(),
                other => format!("Gagal mengambil data wisata: {other}"),
            }));
        }
    }
    ctx.loading.set(false);
}
