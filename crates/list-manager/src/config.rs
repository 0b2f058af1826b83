//! Console Configuration
//!
//! TOML settings for the admin console: where the collection services live,
//! pagination defaults, log verbosity and per-entity overrides.

use std::collections::HashMap;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};
use crate::filter::EmptyFilter;
use crate::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::schema::EntitySchema;

/// Per-entity settings that replace the built-in schema values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityOverride {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub empty_filter: Option<EmptyFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Origin prepended to every endpoint; the page origin when unset
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Keyed by schema key: "users", "products", "orders"
    #[serde(default)]
    pub entities: HashMap<String, EntityOverride>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            log_level: default_log_level(),
            entities: HashMap::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml(content: &str) -> ListResult<Self> {
        let config: ConsoleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ListResult<()> {
        if self.default_page_size == 0 {
            return Err(ListError::Config("default_page_size must be at least 1".to_string()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ListError::Config("page_size_options may not contain 0".to_string()));
        }
        let known: Vec<&str> = EntitySchema::builtin().iter().map(|s| s.key).collect();
        if let Some(key) = self.entities.keys().find(|k| !known.contains(&k.as_str())) {
            return Err(ListError::Config(format!("unknown entity section [entities.{}]", key)));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> ListResult<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ListError::Config(format!("invalid log_level {:?}", self.log_level)))
    }

    /// Built-in schemas with this config's overrides applied
    pub fn schemas(&self) -> Vec<EntitySchema> {
        EntitySchema::builtin()
            .into_iter()
            .map(|mut schema| {
                if let Some(o) = self.entities.get(schema.key) {
                    if let Some(endpoint) = &o.endpoint {
                        schema.endpoint = endpoint.clone();
                    }
                    if let Some(empty_filter) = o.empty_filter {
                        schema.empty_filter = empty_filter;
                    }
                }
                schema
            })
            .collect()
    }

    /// `base_url` if configured, otherwise `origin`
    pub fn resolve_base_url(&self, origin: &str) -> String {
        self.base_url.clone().unwrap_or_else(|| origin.to_string())
    }

    /// Selector options, always including the default page size
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = self.page_size_options.clone();
        if !sizes.contains(&self.default_page_size) {
            sizes.push(self.default_page_size);
        }
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
