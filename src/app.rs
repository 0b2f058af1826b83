//! Table Admin Console App
//!
//! View switcher, notice list and the active entity table.

use leptos::prelude::*;
use list_manager::ConsoleConfig;
use reactive_stores::Store;

use crate::components::{EntityTable, NoticeList, ViewTabBar};
use crate::context::ConsoleContext;
use crate::store::{ConsoleState, ConsoleStateStoreFields};

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let schemas = StoredValue::new(config.schemas());
    let titles = schemas.with_value(|all| all.iter().map(|s| s.title).collect::<Vec<_>>());

    // Provide context to all children
    provide_context(ConsoleContext::new(config));
    let store = Store::new(ConsoleState::default());
    provide_context(store);

    // Switching views remounts the table, which reloads its collection
    let active_table = move || {
        let index = store.active_view().get();
        schemas
            .with_value(|all| all.get(index).cloned())
            .map(|schema| view! { <EntityTable schema=schema /> })
    };

    view! {
        <div class="app-layout">
            <ViewTabBar titles=titles />
            <NoticeList />
            <main class="main-content">
                {active_table}
            </main>
        </div>
    }
}
