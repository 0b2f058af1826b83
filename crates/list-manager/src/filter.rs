//! Identifier Filter
//!
//! Point lookup by record id, typed into a text box. Never goes to the server.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};

/// What the view shows while no filter is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyFilter {
    /// The whole collection
    #[default]
    ShowAll,
    /// Nothing until an id is entered
    ShowNone,
}

/// Active filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Cleared,
    ById(RecordId),
}

impl Filter {
    /// Parse raw input as a base-10 integer id.
    ///
    /// Blank or unparsable input clears the filter.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<RecordId>() {
            Ok(id) => Filter::ById(id),
            Err(_) => Filter::Cleared,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Filter::ById(_))
    }

    /// Records of `collection` visible under this filter, in collection order
    pub fn select<'a>(&self, collection: &'a [Record], empty: EmptyFilter) -> Vec<&'a Record> {
        match (self, empty) {
            (Filter::ById(id), _) => collection.iter().filter(|r| r.id == *id).collect(),
            (Filter::Cleared, EmptyFilter::ShowAll) => collection.iter().collect(),
            (Filter::Cleared, EmptyFilter::ShowNone) => Vec::new(),
        }
    }
}
