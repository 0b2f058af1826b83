//! Notice List Component
//!
//! Shows request failures and confirmations raised by the table views.

use leptos::prelude::*;

use crate::models::NoticeLevel;
use crate::store::{store_dismiss_notice, use_console_store, ConsoleStateStoreFields};

#[component]
pub fn NoticeList() -> impl IntoView {
    let store = use_console_store();

    view! {
        <div class="notice-list">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Info => "notice notice-info",
                        NoticeLevel::Error => "notice notice-error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice-source">"[" {notice.source} "]"</span>
                            <span class="notice-message">{notice.message}</span>
                            <button class="notice-close" on:click=move |_| store_dismiss_notice(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
