use contracts::Destination;
use leptos::prelude::*;

use crate::search::RegionLabels;

use super::icons::{icon, star_icon};

/// One destination tile. With `on_delete` set the card swaps its maps link
/// for a delete action.
#[component]
pub fn DestinationCard(
    place: Destination,
    #[prop(into)] labels: Signal<RegionLabels>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<i64>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let stars = place.star_count();
    let Destination {
        id,
        nama,
        alamat,
        rating,
        link_gmaps,
        ..
    } = place;

    view! {
        <div class="bg-white rounded-2xl shadow-lg p-5 border border-gray-100 hover:border-blue-300 transition">
            <h3 class="text-lg font-bold text-gray-900 mb-1">{nama}</h3>
            <p class="text-sm text-gray-600 mb-2">{alamat}</p>
            <p class="text-xs text-blue-600 mb-3">
                {move || {
                    let labels = labels.get();
                    format!("📍 {}, {}", labels.region, labels.province)
                }}
            </p>

            <div class="flex items-center text-yellow-500 mb-3">
                {(0u8..5).map(|slot| star_icon(slot < stars)).collect_view()}
                <span class="text-sm text-gray-600 ml-2">{format!("{rating} / 5")}</span>
            </div>

            {match on_delete {
                Some(on_delete) => view! {
                    <button
                        class="w-full bg-red-500 text-white px-4 py-2 rounded-lg hover:bg-red-600 transition flex items-center justify-center gap-2 disabled:opacity-50"
                        disabled=move || loading.get()
                        on:click=move |_| on_delete.run(id)
                    >
                        {icon("trash")}
                        "Hapus Destinasi"
                    </button>
                }
                .into_any(),
                None => view! {
                    <a
                        href=link_gmaps
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-600 text-sm hover:underline"
                    >
                        "Lihat di Google Maps →"
                    </a>
                }
                .into_any(),
            }}
        </div>
    }
}
