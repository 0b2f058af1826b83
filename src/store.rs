//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only console-wide
//! state lives here; each table owns its own list state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::ListError;
use reactive_stores::Store;

use crate::models::{Notice, NoticeLevel};

/// Info notices disappear after this long; errors stay until dismissed
const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// Index into the configured schemas of the visible table
    pub active_view: usize,
    /// Newest last
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_notice(store: &ConsoleStore, source: &'static str, level: NoticeLevel, message: String) -> u32 {
    let id = {
        let field = store.next_notice_id();
        let mut next = field.write();
        let id = *next;
        *next = id.wrapping_add(1);
        id
    };
    store.notices().write().push(Notice { id, source, level, message });
    id
}

pub fn store_dismiss_notice(store: &ConsoleStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}

/// Surface a failed request to the operator
pub fn report_failure(store: ConsoleStore, source: &'static str, action: &str, err: &ListError) {
    store_push_notice(&store, source, NoticeLevel::Error, format!("Error al {}: {}", action, err));
}

/// Short-lived confirmation of a completed change
pub fn report_success(store: ConsoleStore, source: &'static str, message: String) {
    let id = store_push_notice(&store, source, NoticeLevel::Info, message);
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        store_dismiss_notice(&store, id);
    });
}
