//! REST Collection Wrappers
//!
//! Frontend bindings to the entity collection services. Every call builds its
//! client from the console context and returns a `Mutation` (or records) for
//! the caller to reconcile into its own list state.

use list_manager::{
    fetch_all, submit_create, submit_delete, submit_update, DraftRecord, EditBuffer, EntitySchema,
    HttpCollection, ListResult, Mutation, Record, RecordId,
};

fn collection(base_url: &str, schema: &EntitySchema) -> HttpCollection {
    HttpCollection::new(base_url, schema)
}

pub async fn list_records(base_url: &str, schema: &EntitySchema) -> ListResult<Vec<Record>> {
    fetch_all(&collection(base_url, schema), schema.key).await
}

pub async fn create_record(base_url: &str, schema: &EntitySchema, draft: &DraftRecord) -> ListResult<Mutation> {
    submit_create(&collection(base_url, schema), schema.key, draft).await
}

/// Sends the full record; check it with `ensure_known` first
pub async fn update_record(base_url: &str, schema: &EntitySchema, edited: EditBuffer) -> ListResult<Mutation> {
    submit_update(&collection(base_url, schema), schema.key, edited).await
}

pub async fn delete_record(base_url: &str, schema: &EntitySchema, id: RecordId) -> ListResult<Mutation> {
    submit_delete(&collection(base_url, schema), schema.key, id).await
}
