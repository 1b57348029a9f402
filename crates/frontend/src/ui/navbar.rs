use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::icons::icon;

#[component]
pub fn NavigationBar(ctx: DirectoryContext) -> impl IntoView {
    view! {
        <nav class="max-w-5xl mx-auto mb-8">
            <div class="bg-white rounded-lg shadow-md px-6 py-4 flex items-center justify-between">
                <h2 class="text-xl font-bold text-gray-800">"Wisata Jawa Timur"</h2>
                <div class="flex items-center gap-3">
                    <button
                        class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition flex items-center gap-2"
                        on:click=move |_| ctx.show_add()
                    >
                        {icon("plus")}
                        "Tambah Wisata"
                    </button>
                    <button
                        class="bg-red-500 text-white px-4 py-2 rounded-lg hover:bg-red-600 transition flex items-center gap-2"
                        on:click=move |_| ctx.show_delete()
                    >
                        {icon("trash")}
                        "Hapus Wisata"
                    </button>
                </div>
            </div>
        </nav>
    }
}
