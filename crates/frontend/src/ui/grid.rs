use contracts::Destination;
use leptos::prelude::*;

use crate::state::DirectoryContext;

use super::card::DestinationCard;

/// Responsive card grid. Region and province labels resolve through the
/// reference cache reactively, so cards refine if that data arrives late.
#[component]
pub fn DestinationGrid(
    ctx: DirectoryContext,
    #[prop(into)] destinations: Signal<Vec<Destination>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || destinations.get()
                key=|place| place.id
                children=move |place: Destination| {
                    let region_id = place.id_daerah;
                    let labels = Signal::derive(move || ctx.region_labels(region_id));
                    view! {
                        <DestinationCard
                            place=place
                            labels=labels
                            on_delete=on_delete
                            loading=ctx.loading
                        />
                    }
                }
            />
        </div>
    }
}
