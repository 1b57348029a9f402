//! Application root: one shared [`DirectoryContext`], the startup loads,
//! and the callbacks wiring screen events to the async choreography.
//!
//! Views never construct the HTTP gateway themselves. Each callback clones
//! the [`ApiConfig`] and builds an [`HttpApi`] inside its spawned task, so
//! the callbacks stay cheap to copy into the view tree.

use contracts::{Destination, DestinationDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiConfig, HttpApi};
use crate::state::aggregator::{self, REGION_SCAN_LIMIT};
use crate::state::loader;
use crate::state::mutations::{self, BrowserConfirm};
use crate::state::reference;
use crate::state::{DirectoryContext, Screen};
use crate::ui::browse::BrowseView;
use crate::ui::delete_view::DeleteView;
use crate::ui::form::AddDestinationForm;

#[component]
pub fn App() -> impl IntoView {
    let ctx = DirectoryContext::new();
    let config = ApiConfig::from_env();

    {
        let config = config.clone();
        spawn_local(async move {
            let api = HttpApi::new(config);
            reference::load_provinces(&api, ctx).await;
        });
    }
    {
        let config = config.clone();
        spawn_local(async move {
            let api = HttpApi::new(config);
            reference::load_regions(&api, ctx).await;
        });
    }

    // The degraded-mode scan needs the region cache, so the aggregator only
    // starts once regions are in. The started flag keeps it to one run even
    // though the effect retriggers on later region updates.
    let aggregator_config = config.clone();
    Effect::new(move |_| {
        let regions_ready = ctx.regions.with(|regions| !regions.is_empty());
        let superset_missing = ctx.superset.with(|superset| superset.is_empty());
        if regions_ready && superset_missing && !ctx.aggregator_started.get_untracked() {
            ctx.aggregator_started.set(true);
            let config = aggregator_config.clone();
            spawn_local(async move {
                let api = HttpApi::new(config);
                aggregator::load_all_destinations(&api, ctx, REGION_SCAN_LIMIT).await;
            });
        }
    });

    let on_select_region = {
        let config = config.clone();
        Callback::new(move |id: Option<i64>| {
            ctx.select_region(id);
            let Some(region_id) = id else { return };
            let config = config.clone();
            spawn_local(async move {
                let api = HttpApi::new(config);
                loader::load_region_destinations(&api, ctx, region_id).await;
            });
        })
    };

    let on_reveal = {
        let config = config.clone();
        Callback::new(move |dest: Destination| {
            let Some(region_id) = ctx.reveal_result(&dest) else { return };
            let config = config.clone();
            spawn_local(async move {
                let api = HttpApi::new(config);
                loader::load_region_destinations(&api, ctx, region_id).await;
            });
        })
    };

    let on_create = {
        let config = config.clone();
        Callback::new(move |draft: DestinationDraft| {
            let config = config.clone();
            spawn_local(async move {
                let api = HttpApi::new(config);
                mutations::create_destination(&api, ctx, &draft).await;
            });
        })
    };

    let on_delete = {
        let config = config.clone();
        Callback::new(move |id: i64| {
            let config = config.clone();
            spawn_local(async move {
                let api = HttpApi::new(config);
                mutations::delete_destination(&api, &BrowserConfirm, ctx, id).await;
            });
        })
    };

    view! {
        {move || match ctx.screen.get() {
            Screen::Browse => view! {
                <BrowseView ctx=ctx on_select_region=on_select_region on_reveal=on_reveal />
            }
            .into_any(),
            Screen::Add => view! {
                <AddDestinationForm ctx=ctx on_submit=on_create />
            }
            .into_any(),
            Screen::Delete => view! {
                <DeleteView
                    ctx=ctx
                    on_select_region=on_select_region
                    on_reveal=on_reveal
                    on_delete=on_delete
                />
            }
            .into_any(),
        }}
    }
}
