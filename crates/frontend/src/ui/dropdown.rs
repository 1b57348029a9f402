use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::icons::icon;

/// Dropdown with an inline search box over `(id, label)` options.
///
/// Open/closed state and the inline filter are local; the selected id is
/// owned by the caller and reported through `on_change` (`None` = cleared).
#[component]
pub fn SearchableDropdown(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    #[prop(into)] value: Signal<Option<i64>>,
    #[prop(into)] on_change: Callback<Option<i64>>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (filter, set_filter) = signal(String::new());

    let filtered = move || {
        let needle = filter.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    let display_text = move || {
        value.get().and_then(|id| {
            options
                .get()
                .into_iter()
                .find(|(option_id, _)| *option_id == id)
                .map(|(_, name)| name)
        })
    };

    view! {
        <div class="relative">
            <label class="block text-gray-700 text-sm font-semibold mb-2">{label}</label>

            <div
                class=move || format!(
                    "relative w-full px-3 py-2 border rounded-lg cursor-pointer transition-colors {}",
                    if disabled.get() {
                        "bg-gray-100 cursor-not-allowed border-gray-300"
                    } else if is_open.get() {
                        "border-blue-500 ring-1 ring-blue-500"
                    } else {
                        "border-gray-300 hover:border-gray-400"
                    }
                )
                on:click=move |_| {
                    if !disabled.get() {
                        set_is_open.update(|open| *open = !*open);
                    }
                }
            >
                <div class="flex items-center justify-between">
                    <span class=move || format!(
                        "truncate {}",
                        if display_text().is_some() { "text-gray-900" } else { "text-gray-500" }
                    )>
                        {move || display_text().unwrap_or_else(|| placeholder.get())}
                    </span>
                    <div class="flex items-center gap-1">
                        {move || (value.get().is_some() && !disabled.get()).then(|| view! {
                            <button
                                class="p-1 hover:bg-gray-200 rounded text-gray-400 hover:text-gray-600"
                                on:click=move |ev: MouseEvent| {
                                    ev.stop_propagation();
                                    on_change.run(None);
                                    set_filter.set(String::new());
                                }
                            >
                                {icon("x")}
                            </button>
                        })}
                        <span class=move || format!(
                            "text-gray-400 transition-transform {}",
                            if is_open.get() { "rotate-180" } else { "" }
                        )>
                            {icon("chevron-down")}
                        </span>
                    </div>
                </div>
            </div>

            {move || (is_open.get() && !disabled.get()).then(|| view! {
                <div class="absolute z-50 w-full mt-1 bg-white border border-gray-300 rounded-lg shadow-lg max-h-60 overflow-hidden">
                    <div class="p-2 border-b border-gray-200">
                        <input
                            type="text"
                            prop:value=move || filter.get()
                            on:input=move |ev| set_filter.set(event_target_value(&ev))
                            on:click=move |ev: MouseEvent| ev.stop_propagation()
                            class="w-full px-3 py-2 text-sm border border-gray-300 rounded focus:outline-none focus:border-blue-500"
                            placeholder=format!("Cari {}...", label.to_lowercase())
                        />
                    </div>

                    <div class="max-h-48 overflow-y-auto">
                        {move || filtered().is_empty().then(|| view! {
                            <div class="px-3 py-2 text-sm text-gray-500 text-center">
                                "Tidak ada hasil ditemukan"
                            </div>
                        })}
                        <For
                            each=filtered
                            key=|(id, _)| *id
                            children=move |(id, name): (i64, String)| {
                                let is_selected = move || value.get() == Some(id);
                                view! {
                                    <div
                                        class=move || format!(
                                            "px-3 py-2 cursor-pointer hover:bg-blue-50 text-sm {}",
                                            if is_selected() {
                                                "bg-blue-100 text-blue-700 font-medium"
                                            } else {
                                                "text-gray-700"
                                            }
                                        )
                                        on:click=move |_| {
                                            on_change.run(Some(id));
                                            set_is_open.set(false);
                                            set_filter.set(String::new());
                                        }
                                    >
                                        {name}
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
