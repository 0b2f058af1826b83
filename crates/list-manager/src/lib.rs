//! List Manager
//!
//! Client-side state for the admin console's entity tables:
//! - record / schema: entity shapes and the wire format
//! - filter / pagination / state: local view over the fetched collection
//! - remote: the REST collection service
//! - manager: load, create, update, delete and reconcile
//! - form: add-form draft and edit buffer lifecycle
//! - config: console settings

pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod manager;
pub mod pagination;
pub mod record;
pub mod remote;
pub mod schema;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::{ConsoleConfig, EntityOverride};
pub use error::{ListError, ListResult};
pub use filter::{EmptyFilter, Filter};
pub use form::FormState;
pub use manager::{ensure_known, fetch_all, submit_create, submit_delete, submit_update, ListManager};
pub use pagination::Pagination;
pub use record::{DraftRecord, EditBuffer, Record, RecordId};
pub use remote::{HttpCollection, RemoteCollection};
pub use schema::{display_value, EntitySchema, FieldDef, FieldKind};
pub use state::{ListState, Mutation};
