use contracts::{DestinationDraft, Province, Region};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::icons::icon;

/// Creation form for a destination. Field state is local; reference data
/// comes from the shared context (loaded once at startup), and the draft is
/// validated before it is handed to `on_submit`.
#[component]
pub fn AddDestinationForm(
    ctx: DirectoryContext,
    #[prop(into)] on_submit: Callback<DestinationDraft>,
) -> impl IntoView {
    let (province_id, set_province_id) = signal(None::<i64>);
    let (region_id, set_region_id) = signal(None::<i64>);
    let (nama, set_nama) = signal(String::new());
    let (alamat, set_alamat) = signal(String::new());
    let (rating, set_rating) = signal(String::new());
    let (link_gmaps, set_link_gmaps) = signal(String::new());
    let (validation, set_validation) = signal(None::<String>);

    let region_options = move || {
        let Some(selected) = province_id.get() else {
            return Vec::new();
        };
        ctx.regions
            .get()
            .into_iter()
            .filter(|region| region.id_provinsi == selected)
            .collect::<Vec<_>>()
    };

    let province_name = move || {
        province_id
            .get()
            .and_then(|id| ctx.find_province(id))
            .map(|province| province.nama_provinsi)
            .unwrap_or_else(|| "-".to_string())
    };
    let region_name = move || {
        region_id
            .get()
            .and_then(|id| ctx.find_region(id))
            .map(|region| region.nama_daerah)
            .unwrap_or_else(|| "-".to_string())
    };
    let preview_text = move |signal: ReadSignal<String>| {
        let value = signal.get();
        if value.is_empty() { "-".to_string() } else { value }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = DestinationDraft {
            id_daerah: region_id.get().unwrap_or(0),
            nama: nama.get(),
            alamat: alamat.get(),
            rating: rating.get().parse().unwrap_or(0.0),
            link_gmaps: link_gmaps.get(),
        };
        match draft.validate() {
            Ok(()) => {
                set_validation.set(None);
                on_submit.run(draft);
            }
            Err(message) => set_validation.set(Some(message)),
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 font-sans text-gray-800 p-6">
            <div class="max-w-4xl mx-auto">
                <div class="flex items-center gap-4 mb-6">
                    <button
                        class="bg-gray-500 text-white px-3 py-2 rounded hover:bg-gray-600 transition flex items-center"
                        on:click=move |_| ctx.show_browse()
                    >
                        {icon("arrow-left")}
                    </button>
                    <h2 class="text-2xl font-bold">"Tambah Destinasi Wisata Baru"</h2>
                </div>

                {move || validation.get().or_else(|| ctx.error.get()).map(|message| view! {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-6">
                        {message}
                    </div>
                })}

                <div class="bg-white rounded-lg shadow-md p-6">
                    <form on:submit=handle_submit class="space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">
                                    "Provinsi *"
                                </label>
                                <select
                                    prop:value=move || {
                                        province_id.get().map(|id| id.to_string()).unwrap_or_default()
                                    }
                                    on:change=move |ev| {
                                        set_province_id.set(event_target_value(&ev).parse::<i64>().ok());
                                        set_region_id.set(None);
                                    }
                                    required
                                    class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500"
                                >
                                    <option value="">"Pilih Provinsi"</option>
                                    <For
                                        each=move || ctx.provinces.get()
                                        key=|province| province.id
                                        children=|province: Province| view! {
                                            <option value=province.id.to_string()>
                                                {province.nama_provinsi}
                                            </option>
                                        }
                                    />
                                </select>
                            </div>

                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">
                                    "Daerah/Kota *"
                                </label>
                                <select
                                    prop:value=move || {
                                        region_id.get().map(|id| id.to_string()).unwrap_or_default()
                                    }
                                    on:change=move |ev| {
                                        set_region_id.set(event_target_value(&ev).parse::<i64>().ok());
                                    }
                                    required
                                    disabled=move || province_id.get().is_none()
                                    class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500 disabled:bg-gray-100 disabled:cursor-not-allowed"
                                >
                                    <option value="">
                                        {move || if province_id.get().is_some() {
                                            "Pilih Daerah/Kota"
                                        } else {
                                            "Pilih Provinsi terlebih dahulu"
                                        }}
                                    </option>
                                    <For
                                        each=region_options
                                        key=|region| region.id
                                        children=|region: Region| view! {
                                            <option value=region.id.to_string()>
                                                {region.nama_daerah}
                                            </option>
                                        }
                                    />
                                </select>
                            </div>
                        </div>

                        <div>
                            <label class="block text-gray-700 text-sm font-bold mb-2">
                                "Nama Destinasi Wisata *"
                            </label>
                            <input
                                type="text"
                                prop:value=move || nama.get()
                                on:input=move |ev| set_nama.set(event_target_value(&ev))
                                required
                                class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500"
                                placeholder="Masukkan nama destinasi wisata (contoh: Pantai Klayar, Candi Borobudur)"
                            />
                        </div>

                        <div>
                            <label class="block text-gray-700 text-sm font-bold mb-2">
                                "Alamat Lengkap *"
                            </label>
                            <textarea
                                prop:value=move || alamat.get()
                                on:input=move |ev| set_alamat.set(event_target_value(&ev))
                                required
                                rows="4"
                                class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500 resize-vertical"
                                placeholder="Masukkan alamat lengkap destinasi wisata..."
                            ></textarea>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">
                                    "Rating (1.0 - 5.0) *"
                                </label>
                                <input
                                    type="number"
                                    prop:value=move || rating.get()
                                    on:input=move |ev| set_rating.set(event_target_value(&ev))
                                    required
                                    min="1"
                                    max="5"
                                    step="0.1"
                                    class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500"
                                    placeholder="4.5"
                                />
                                <p class="text-xs text-gray-500 mt-1">
                                    "Masukkan rating antara 1.0 hingga 5.0"
                                </p>
                            </div>

                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">
                                    "Link Google Maps *"
                                </label>
                                <input
                                    type="url"
                                    prop:value=move || link_gmaps.get()
                                    on:input=move |ev| set_link_gmaps.set(event_target_value(&ev))
                                    required
                                    class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500"
                                    placeholder="https://maps.google.com/..."
                                />
                                <p class="text-xs text-gray-500 mt-1">"Salin link dari Google Maps"</p>
                            </div>
                        </div>

                        {move || {
                            (!nama.get().is_empty() || !alamat.get().is_empty()).then(|| view! {
                                <div class="border-t pt-6">
                                    <h3 class="text-lg font-semibold mb-4 text-gray-700">"Preview"</h3>
                                    <div class="bg-gray-50 p-4 rounded-lg">
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm">
                                            <div>
                                                <span class="font-semibold text-gray-600">"Provinsi:"</span>
                                                <p class="text-gray-800">{province_name}</p>
                                            </div>
                                            <div>
                                                <span class="font-semibold text-gray-600">"Daerah:"</span>
                                                <p class="text-gray-800">{region_name}</p>
                                            </div>
                                            <div>
                                                <span class="font-semibold text-gray-600">"Nama:"</span>
                                                <p class="text-gray-800">{move || preview_text(nama)}</p>
                                            </div>
                                            <div>
                                                <span class="font-semibold text-gray-600">"Rating:"</span>
                                                <p class="text-gray-800">
                                                    {move || {
                                                        let value = rating.get();
                                                        if value.is_empty() {
                                                            "-".to_string()
                                                        } else {
                                                            format!("{value}/5")
                                                        }
                                                    }}
                                                </p>
                                            </div>
                                            <div class="md:col-span-2">
                                                <span class="font-semibold text-gray-600">"Alamat:"</span>
                                                <p class="text-gray-800">{move || preview_text(alamat)}</p>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            })
                        }}

                        <div class="flex gap-4 pt-6 border-t">
                            <button
                                type="submit"
                                disabled=move || ctx.loading.get()
                                class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition disabled:opacity-50 disabled:cursor-not-allowed flex items-center gap-2"
                            >
                                {move || if ctx.loading.get() { "Menyimpan..." } else { "Tambah Destinasi" }}
                            </button>
                            <button
                                type="button"
                                disabled=move || ctx.loading.get()
                                on:click=move |_| ctx.show_browse()
                                class="bg-gray-500 text-white px-6 py-2 rounded-lg hover:bg-gray-600 transition disabled:opacity-50"
                            >
                                "Batal"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
