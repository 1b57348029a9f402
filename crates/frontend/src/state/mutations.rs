//! Create and delete choreography.
//!
//! Both mutations share the same refresh sequence afterwards: refetch the
//! superset in bulk, drop the now-stale search output, reload the selected
//! region if there is one, and re-run an active query against the fresh
//! superset handed back by the refetch (not the cached signal, which may
//! not have propagated yet).

use contracts::DestinationDraft;
use leptos::prelude::{GetUntracked, Set};
use log::{debug, error};

use crate::api::{ApiError, TourismApi};

use super::{aggregator, loader, DirectoryContext};

/// Question shown before a destination is deleted.
pub const CONFIRM_DELETE_MESSAGE: &str = "Apakah Anda yakin ingin menghapus destinasi ini?";

/// Yes/no gate in front of destructive actions, injected so tests can
/// answer deterministically.
pub trait ConfirmGate {
    fn confirm(&self, message: &str) -> bool;
}

/// The browser's native blocking confirm dialog.
pub struct BrowserConfirm;

impl ConfirmGate for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Submit a new destination.
///
/// On success the app returns to browsing and refreshes; on failure the
/// form stays up with the backend's message (or a generic fallback) stored.
pub async fn create_destination(
    api: &impl TourismApi,
    ctx: DirectoryContext,
    draft: &DestinationDraft,
) {
    ctx.loading.set(true);
    match api.create_destination(draft).await {
        Ok(created) => {
            debug!("created destination {} ({})", created.id, created.nama);
            ctx.show_browse();
            ctx.error.set(None);
            refresh_after_mutation(api, ctx).await;
        }
        Err(err) => {
            error!("create failed: {err}");
            ctx.error.set(Some(match err {
                ApiError::Status {
                    message: Some(message),
                    ..
                } => message,
                ApiError::Status { .. } => "Gagal menambahkan destinasi wisata.".to_string(),
                other => format!("Gagal menambahkan destinasi wisata: {other}"),
            }));
        }
    }
    ctx.loading.set(false);
}

/// Delete a destination after the gate confirms.
///
/// A declined confirmation means no network call and no state change. The
/// screen never changes here; the delete view stays up for further work.
pub async fn delete_destination(
    api: &impl TourismApi,
    gate: &impl ConfirmGate,
    ctx: DirectoryContext,
    id: i64,
) {
    if !gate.confirm(CONFIRM_DELETE_MESSAGE) {
        return;
    }

    ctx.loading.set(true);
    match api.delete_destination(id).await {
        Ok(()) => {
            debug!("deleted destination {id}");
            ctx.error.set(None);
            refresh_after_mutation(api, ctx).await;
        }
        Err(err) => {
            error!("delete of destination {id} failed: {err}");
            ctx.error.set(Some(match err {
                ApiError::Status { .. } => "Gagal menghapus destinasi wisata.".to_string(),
                other => format!("Gagal menghapus destinasi wisata: {other}"),
            }));
        }
    }
    ctx.loading.set(false);
}

/// Shared post-mutation refresh; see the module docs for the sequence.
async fn refresh_after_mutation(api: &impl TourismApi, ctx: DirectoryContext) {
    let fresh = aggregator::refresh_superset(api, ctx).await;

    ctx.search_results.set(Vec::new());
    ctx.results_visible.set(false);

    if let Some(region_id) = ctx.selected_region.get_untracked() {
        loader::load_region_destinations(api, ctx, region_id).await;
    }

    if !ctx.query.get_untracked().is_empty() {
        ctx.run_search_with(&fresh);
    }
}
