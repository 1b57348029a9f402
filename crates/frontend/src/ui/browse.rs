use contracts::Destination;
use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::grid::DestinationGrid;
use super::navbar::NavigationBar;
use super::search_filter::SearchFilterPanel;

/// Main browsing screen: hero header, search/filter panel and the result
/// sections (search hits, regional list, filtered regional list).
#[component]
pub fn BrowseView(
    ctx: DirectoryContext,
    #[prop(into)] on_select_region: Callback<Option<i64>>,
    #[prop(into)] on_reveal: Callback<Destination>,
) -> impl IntoView {
    let selected_region_name = move || {
        ctx.selected_region
            .get()
            .map(|id| ctx.region_labels(id).region)
            .unwrap_or_default()
    };
    let filtered = Signal::derive(move || ctx.filtered_destinations());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 font-sans text-gray-800 p-6">
            <NavigationBar ctx=ctx />

            <header class="max-w-5xl mx-auto text-center py-10">
                <h1 class="text-4xl font-bold mb-4">"Jelajahi Tempat Wisata di Jawa Timur"</h1>
                <p class="text-lg text-gray-600 mb-8">
                    "Cari destinasi wisata atau pilih provinsi dan daerah untuk melihat destinasi wisata menarik."
                </p>
            </header>

            <SearchFilterPanel ctx=ctx on_select_region=on_select_region on_reveal=on_reveal />

            <main class="max-w-4xl mx-auto">
                {move || {
                    let query = ctx.query.get();
                    (!query.is_empty() && ctx.search_results.with(|r| !r.is_empty()))
                        .then(|| view! {
                            <div class="mb-8">
                                <h2 class="text-2xl font-semibold mb-6 text-center">
                                    {format!("Hasil Pencarian \"{query}\"")}
                                </h2>
                                <div class="mb-4 text-center text-sm text-gray-600">
                                    {format!(
                                        "Ditemukan {} destinasi wisata",
                                        ctx.search_results.with_untracked(|r| r.len())
                                    )}
                                </div>
                                <DestinationGrid ctx=ctx destinations=ctx.search_results />
                            </div>
                        })
                }}

                {move || {
                    (ctx.selected_region.get().is_some() && ctx.query.with(|q| q.is_empty()))
                        .then(|| view! {
                            <div>
                                <h2 class="text-2xl font-semibold mb-6 text-center">
                                    {move || format!("Destinasi Wisata di {}", selected_region_name())}
                                </h2>

                                {move || ctx.error.get().map(|message| view! {
                                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-6">
                                        {message}
                                    </div>
                                })}

                                {move || if ctx.loading.get() {
                                    view! {
                                        <div class="text-center py-8">
                                            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                                            <p class="mt-2">"Memuat data wisata..."</p>
                                        </div>
                                    }
                                    .into_any()
                                } else if ctx.destinations.with(|d| !d.is_empty()) {
                                    view! {
                                        <DestinationGrid ctx=ctx destinations=ctx.destinations />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="text-center py-12">
                                            <p class="text-gray-600 text-lg">
                                                "Belum ada data tempat wisata di daerah ini."
                                            </p>
                                        </div>
                                    }
                                    .into_any()
                                }}
                            </div>
                        })
                }}

                {move || {
                    let query = ctx.query.get();
                    (ctx.selected_region.get().is_some() && !query.is_empty())
                        .then(|| view! {
                            <div class="mt-8">
                                <h2 class="text-2xl font-semibold mb-6 text-center">
                                    {move || format!("Destinasi di {}", selected_region_name())}
                                    <span class="text-lg text-gray-600">
                                        {format!(" (Filter: \"{query}\")")}
                                    </span>
                                </h2>

                                {move || if ctx.loading.get() {
                                    view! {
                                        <div class="text-center py-8">
                                            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                                            <p class="mt-2">"Memuat data wisata..."</p>
                                        </div>
                                    }
                                    .into_any()
                                } else if filtered.with(|d| !d.is_empty()) {
                                    view! {
                                        <div>
                                            <div class="mb-4 text-center text-sm text-gray-600">
                                                {move || format!(
                                                    "Menampilkan {} dari {} destinasi di wilayah ini",
                                                    filtered.with(|d| d.len()),
                                                    ctx.destinations.with(|d| d.len())
                                                )}
                                            </div>
                                            <DestinationGrid ctx=ctx destinations=filtered />
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="text-center py-12">
                                            <p class="text-gray-600 text-lg">
                                                {move || format!(
                                                    "Tidak ada hasil yang sesuai dengan pencarian \"{}\" di daerah ini.",
                                                    ctx.query.get()
                                                )}
                                            </p>
                                        </div>
                                    }
                                    .into_any()
                                }}
                            </div>
                        })
                }}

                {move || {
                    let query = ctx.query.get();
                    (!query.is_empty() && ctx.search_results.with(|r| r.is_empty()))
                        .then(|| view! {
                            <div class="text-center py-12">
                                <div class="bg-white rounded-lg shadow-md p-8">
                                    <h3 class="text-xl font-semibold mb-4 text-gray-700">
                                        "Tidak Ada Hasil Ditemukan"
                                    </h3>
                                    <p class="text-gray-600">
                                        {format!(
                                            "Tidak ada destinasi wisata yang sesuai dengan pencarian \"{query}\"."
                                        )}
                                        <br />
                                        "Coba gunakan kata kunci yang berbeda atau jelajahi berdasarkan provinsi dan daerah."
                                    </p>
                                </div>
                            </div>
                        })
                }}
            </main>

            <footer class="text-center text-sm text-gray-500 mt-16">
                "© Wisata Jawa Timur. Seluruh hak cipta dilindungi."
            </footer>
        </div>
    }
}
