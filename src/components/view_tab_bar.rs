//! View Tab Bar Component
//!
//! Switches between the configured entity tables.

use leptos::prelude::*;

use crate::store::{use_console_store, ConsoleStateStoreFields};

#[component]
pub fn ViewTabBar(
    /// Tab labels, in schema order
    titles: Vec<&'static str>,
) -> impl IntoView {
    let store = use_console_store();

    view! {
        <nav class="view-tab-bar">
            {titles.into_iter().enumerate().map(|(index, title)| {
                let is_active = move || store.active_view().get() == index;
                view! {
                    <button
                        class=move || if is_active() { "view-tab active" } else { "view-tab" }
                        on:click=move |_| *store.active_view().write() = index
                    >
                        {title}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
