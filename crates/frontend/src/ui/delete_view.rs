use contracts::Destination;
use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::grid::DestinationGrid;
use super::search_filter::SearchFilterPanel;

/// Delete screen: the same search/filter panel in delete mode, cards with a
/// delete action, and a warning card while nothing is selected.
#[component]
pub fn DeleteView(
    ctx: DirectoryContext,
    #[prop(into)] on_select_region: Callback<Option<i64>>,
    #[prop(into)] on_reveal: Callback<Destination>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let selected_region_name = move || {
        ctx.selected_region
            .get()
            .map(|id| ctx.region_labels(id).region)
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 p-6">
            <div class="max-w-6xl mx-auto">
                <div class="flex items-center justify-between mb-8">
                    <div>
                        <h1 class="text-3xl font-bold mb-2">"Hapus Destinasi Wisata"</h1>
                        <p class="text-gray-600">"Cari dan filter destinasi wisata yang ingin dihapus"</p>
                    </div>
                    <button
                        class="bg-gray-500 text-white px-4 py-2 rounded-lg hover:bg-gray-600 transition"
                        on:click=move |_| ctx.show_browse()
                    >
                        "Kembali ke Beranda"
                    </button>
                </div>

                <SearchFilterPanel
                    ctx=ctx
                    on_select_region=on_select_region
                    on_reveal=on_reveal
                    delete_mode=true
                />

                {move || ctx.error.get().map(|message| view! {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-6">
                        {message}
                    </div>
                })}

                {move || if ctx.loading.get() {
                    view! {
                        <div class="text-center py-8">
                            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                            <p class="mt-2">"Loading..."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div>
                            {move || {
                                let query = ctx.query.get();
                                (!query.is_empty() && ctx.search_results.with(|r| !r.is_empty()))
                                    .then(|| view! {
                                        <div class="mb-8">
                                            <h2 class="text-2xl font-semibold mb-6 text-center">
                                                {format!("🔍 Hasil Pencarian \"{query}\" untuk Dihapus")}
                                            </h2>
                                            <div class="mb-4 text-center text-sm text-gray-600">
                                                {format!(
                                                    "Ditemukan {} destinasi wisata",
                                                    ctx.search_results.with_untracked(|r| r.len())
                                                )}
                                            </div>
                                            <DestinationGrid
                                                ctx=ctx
                                                destinations=ctx.search_results
                                                on_delete=Some(on_delete)
                                            />
                                        </div>
                                    })
                            }}

                            {move || {
                                (ctx.selected_region.get().is_some() && ctx.query.with(|q| q.is_empty()))
                                    .then(|| view! {
                                        <div>
                                            <h2 class="text-2xl font-semibold mb-6 text-center">
                                                {move || format!(
                                                    "🗑️ Destinasi Wisata di {} untuk Dihapus",
                                                    selected_region_name()
                                                )}
                                            </h2>
                                            <div class="mb-4 text-center text-sm text-gray-600">
                                                {move || format!(
                                                    "Menampilkan {} destinasi wisata di {}",
                                                    ctx.destinations.with(|d| d.len()),
                                                    selected_region_name()
                                                )}
                                            </div>
                                            {move || if ctx.destinations.with(|d| !d.is_empty()) {
                                                view! {
                                                    <DestinationGrid
                                                        ctx=ctx
                                                        destinations=ctx.destinations
                                                        on_delete=Some(on_delete)
                                                    />
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <div class="text-center py-12">
                                                        <div class="bg-white rounded-lg shadow-md p-8">
                                                            <h3 class="text-xl font-semibold mb-4 text-gray-700">
                                                                "Belum Ada Destinasi"
                                                            </h3>
                                                            <p class="text-gray-600">
                                                                "Belum ada destinasi wisata yang terdaftar di daerah ini."
                                                            </p>
                                                        </div>
                                                    </div>
                                                }
                                                .into_any()
                                            }}
                                        </div>
                                    })
                            }}

                            {move || {
                                (ctx.selected_region.get().is_none() && ctx.query.with(|q| q.is_empty()))
                                    .then(|| view! {
                                        <div class="text-center py-12">
                                            <div class="bg-white rounded-lg shadow-md p-8">
                                                <h3 class="text-xl font-semibold mb-4 text-gray-700">
                                                    "Pilih Destinasi untuk Dihapus"
                                                </h3>
                                                <p class="text-gray-600 mb-4">
                                                    "Gunakan kotak pencarian di atas untuk mencari destinasi wisata secara langsung, atau pilih provinsi dan daerah untuk melihat destinasi wisata yang dapat dihapus."
                                                </p>
                                                <div class="bg-red-50 p-4 rounded-lg border border-red-200 mt-4">
                                                    <p class="text-sm text-red-700">
                                                        "⚠️ "
                                                        <span class="font-semibold">"Peringatan:"</span>
                                                        " Tindakan penghapusan tidak dapat dibatalkan. Pastikan Anda yakin sebelum menghapus destinasi wisata."
                                                    </p>
                                                </div>
                                            </div>
                                        </div>
                                    })
                            }}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
