use contracts::Destination;
use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::dropdown::SearchableDropdown;
use super::icons::icon;

/// Search bar with its live-results dropdown, the province/region filter
/// pair, and the active-filter summary.
///
/// Province selection is a pure state change and is handled inline; region
/// selection triggers a fetch, so it goes back to the caller, as does a
/// click on a search result.
#[component]
pub fn SearchFilterPanel(
    ctx: DirectoryContext,
    #[prop(into)] on_select_region: Callback<Option<i64>>,
    #[prop(into)] on_reveal: Callback<Destination>,
    #[prop(optional)] delete_mode: bool,
) -> impl IntoView {
    let province_options = Signal::derive(move || {
        ctx.provinces
            .get()
            .into_iter()
            .map(|province| (province.id, province.nama_provinsi))
            .collect::<Vec<_>>()
    });
    let region_options = Signal::derive(move || {
        ctx.regions_for_province()
            .into_iter()
            .map(|region| (region.id, region.nama_daerah))
            .collect::<Vec<_>>()
    });

    let province_label = if delete_mode { "Filter Provinsi (Opsional)" } else { "Provinsi" };
    let region_label = if delete_mode { "Filter Daerah/Kota (Opsional)" } else { "Daerah/Kota" };
    let province_placeholder = if delete_mode { "Semua Provinsi" } else { "Pilih Provinsi" };
    let region_placeholder = Signal::derive(move || {
        if ctx.selected_province.get().is_none() {
            "Pilih Provinsi terlebih dahulu".to_string()
        } else if delete_mode {
            "Semua Daerah/Kota".to_string()
        } else {
            "Pilih Daerah/Kota".to_string()
        }
    });

    let any_filter_active = move || {
        ctx.selected_province.get().is_some()
            || ctx.selected_region.get().is_some()
            || !ctx.query.get().is_empty()
    };
    let filter_summary = move || {
        let mut summary = String::new();
        let query = ctx.query.get();
        if !query.is_empty() {
            summary.push_str(&format!(" Pencarian: \"{query}\""));
        }
        if let Some(province) = ctx.selected_province.get().and_then(|id| ctx.find_province(id)) {
            summary.push_str(&format!(" | Provinsi: {}", province.nama_provinsi));
        }
        if let Some(region) = ctx.selected_region.get().and_then(|id| ctx.find_region(id)) {
            summary.push_str(&format!(" | Daerah: {}", region.nama_daerah));
        }
        summary
    };

    view! {
        <section class="max-w-4xl mx-auto mb-12">
            <div class="bg-white rounded-lg shadow-md p-6">
                <div class="mb-6 relative">
                    <label class="block text-gray-700 text-sm font-semibold mb-2">
                        "Cari Destinasi Wisata"
                    </label>
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">
                            {icon("search")}
                        </span>
                        <input
                            type="text"
                            prop:value=move || ctx.query.get()
                            on:input=move |ev| ctx.update_query(event_target_value(&ev))
                            class="w-full pl-10 pr-4 py-3 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500"
                            placeholder="Cari berdasarkan nama wisata, alamat, provinsi, atau daerah..."
                        />
                    </div>
                    <p class="text-xs text-gray-500 mt-1">
                        "💡 Ketik nama destinasi untuk melihat hasil pencarian langsung"
                    </p>

                    {move || {
                        (ctx.results_visible.get() && ctx.search_results.with(|r| !r.is_empty()))
                            .then(|| view! {
                                <div class="absolute z-50 w-full mt-1 bg-white border border-gray-300 rounded-lg shadow-lg max-h-60 overflow-y-auto">
                                    <div class="p-3 border-b border-gray-200 bg-gray-50">
                                        <p class="text-sm font-semibold text-gray-700">
                                            {move || format!(
                                                "Hasil Pencarian ({} destinasi ditemukan)",
                                                ctx.search_results.with(|r| r.len())
                                            )}
                                        </p>
                                        <p class="text-xs text-gray-500 mt-1">
                                            "Lihat hasil lengkap di bawah atau klik destinasi untuk melihat lokasinya"
                                        </p>
                                    </div>
                                    <For
                                        each=move || {
                                            ctx.search_results
                                                .get()
                                                .into_iter()
                                                .take(5)
                                                .collect::<Vec<_>>()
                                        }
                                        key=|place| place.id
                                        children=move |place: Destination| {
                                            let region_id = place.id_daerah;
                                            let rating = place.rating;
                                            let nama = place.nama.clone();
                                            view! {
                                                <div
                                                    class="p-3 border-b border-gray-100 hover:bg-blue-50 cursor-pointer transition"
                                                    on:click=move |_| on_reveal.run(place.clone())
                                                >
                                                    <h4 class="font-semibold text-gray-900 text-sm mb-1">{nama}</h4>
                                                    <div class="flex items-center text-xs text-blue-600">
                                                        <span>
                                                            {move || {
                                                                let labels = ctx.region_labels(region_id);
                                                                format!("📍 {}, {}", labels.region, labels.province)
                                                            }}
                                                        </span>
                                                        <div class="flex items-center ml-3 text-yellow-500">
                                                            <span>"⭐"</span>
                                                            <span class="ml-1 text-gray-600">{rating}</span>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                    {move || {
                                        let total = ctx.search_results.with(|r| r.len());
                                        (total > 5).then(|| view! {
                                            <div class="p-3 text-center text-sm text-gray-500 bg-gray-50">
                                                {format!("Dan {} destinasi lainnya...", total - 5)}
                                                <br />
                                                <span class="text-blue-600">"Lihat semua hasil di bawah"</span>
                                            </div>
                                        })
                                    }}
                                </div>
                            })
                    }}

                    {move || {
                        let query = ctx.query.get();
                        (ctx.results_visible.get()
                            && ctx.search_results.with(|r| r.is_empty())
                            && !query.is_empty())
                            .then(|| view! {
                                <div class="absolute z-50 w-full mt-1 bg-white border border-gray-300 rounded-lg shadow-lg p-4 text-center">
                                    <p class="text-gray-500">
                                        {format!("Tidak ada destinasi wisata yang ditemukan untuk \"{query}\"")}
                                    </p>
                                </div>
                            })
                    }}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <SearchableDropdown
                        label=province_label
                        options=province_options
                        value=ctx.selected_province
                        on_change=Callback::new(move |id| ctx.select_province(id))
                        placeholder=Signal::derive(move || province_placeholder.to_string())
                    />

                    <SearchableDropdown
                        label=region_label
                        options=region_options
                        value=ctx.selected_region
                        on_change=on_select_region
                        placeholder=region_placeholder
                        disabled=Signal::derive(move || ctx.selected_province.get().is_none())
                    />
                </div>

                {move || any_filter_active().then(|| view! {
                    <div class="mt-4 flex justify-end">
                        <button
                            class="text-blue-600 hover:text-blue-800 text-sm font-medium"
                            on:click=move |_| ctx.clear_filters()
                        >
                            "🗑️ Hapus Semua Filter"
                        </button>
                    </div>
                })}

                {move || any_filter_active().then(|| view! {
                    <div class="mt-4 p-3 bg-blue-50 rounded-lg border border-blue-200">
                        <p class="text-sm text-blue-700">
                            <span class="font-semibold">"🔍 Filter aktif:"</span>
                            {filter_summary}
                        </p>
                    </div>
                })}
            </div>
        </section>
    }
}
