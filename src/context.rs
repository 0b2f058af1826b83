//! Console Context
//!
//! Read-only settings provided via Leptos Context API.

use leptos::prelude::*;
use list_manager::{ConsoleConfig, ListError};

/// Embedded at build time; edit `console.toml` at the crate root
const CONSOLE_TOML: &str = include_str!("../console.toml");

/// Parse the embedded config, falling back to defaults on error
pub fn load_config() -> (ConsoleConfig, Option<ListError>) {
    match ConsoleConfig::from_toml(CONSOLE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    }
}

/// Settings shared by every table view
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    pub config: StoredValue<ConsoleConfig>,
    /// Origin the collection endpoints are joined to
    pub base_url: StoredValue<String>,
}

impl ConsoleContext {
    pub fn new(config: ConsoleConfig) -> Self {
        let base_url = config.resolve_base_url(&page_origin());
        Self {
            config: StoredValue::new(config),
            base_url: StoredValue::new(base_url),
        }
    }
}

pub fn use_console_context() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}

/// `window.location.origin`, empty outside a browser
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
