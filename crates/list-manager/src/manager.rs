//! List Manager
//!
//! Mediates between one remote collection and its local `ListState`:
//! fetch → filter → paginate → mutate → reconcile.
//!
//! The `submit_*` functions do the remote half of each mutation and hand back
//! a `Mutation`; reactive front ends apply it to their own copy of the state.
//! `ListManager` bundles both halves for callers that own the state directly.

use log::{error, info, warn};

use crate::error::{ListError, ListResult};
use crate::form::FormState;
use crate::record::{DraftRecord, EditBuffer, Record, RecordId};
use crate::remote::RemoteCollection;
use crate::schema::EntitySchema;
use crate::state::{ListState, Mutation};

// ========================
// Remote Round-Trips
// ========================

/// Fetch the full collection
pub async fn fetch_all<R>(remote: &R, key: &str) -> ListResult<Vec<Record>>
where
    R: RemoteCollection + ?Sized,
{
    match remote.list().await {
        Ok(records) => {
            info!("[{}] loaded {} records", key, records.len());
            Ok(records)
        }
        Err(e) => {
            error!("[{}] error fetching collection: {}", key, e);
            Err(e)
        }
    }
}

pub async fn submit_create<R>(remote: &R, key: &str, draft: &DraftRecord) -> ListResult<Mutation>
where
    R: RemoteCollection + ?Sized,
{
    match remote.create(draft).await {
        Ok(record) => {
            info!("[{}] created #{}", key, record.id);
            Ok(Mutation::Created(record))
        }
        Err(e) => {
            error!("[{}] error adding record: {}", key, e);
            Err(e)
        }
    }
}

/// Send the whole edited record; on success the edited copy is what gets
/// reconciled, not the server's reply.
pub async fn submit_update<R>(remote: &R, key: &str, edited: Record) -> ListResult<Mutation>
where
    R: RemoteCollection + ?Sized,
{
    match remote.update(&edited).await {
        Ok(()) => {
            info!("[{}] updated #{}", key, edited.id);
            Ok(Mutation::Updated(edited))
        }
        Err(e) => {
            error!("[{}] error updating #{}: {}", key, edited.id, e);
            Err(e)
        }
    }
}

pub async fn submit_delete<R>(remote: &R, key: &str, id: RecordId) -> ListResult<Mutation>
where
    R: RemoteCollection + ?Sized,
{
    match remote.delete(id).await {
        Ok(()) => {
            info!("[{}] deleted #{}", key, id);
            Ok(Mutation::Deleted(id))
        }
        Err(e) => {
            error!("[{}] error deleting #{}: {}", key, id, e);
            Err(e)
        }
    }
}

/// Updates may only target records already in the local collection
pub fn ensure_known(state: &ListState, key: &str, id: RecordId) -> ListResult<()> {
    if state.find(id).is_some() {
        Ok(())
    } else {
        warn!("[{}] refusing to update #{}: not in local collection", key, id);
        Err(ListError::UnknownRecord(id))
    }
}

// ========================
// Stateful Manager
// ========================

/// One entity view's collection, filter, pagination and form state
pub struct ListManager<R> {
    schema: EntitySchema,
    remote: R,
    pub state: ListState,
    pub form: FormState,
}

impl<R: RemoteCollection> ListManager<R> {
    pub fn new(schema: EntitySchema, remote: R, page_size: usize) -> Self {
        let state = ListState::new(page_size, schema.empty_filter);
        let form = FormState::new(&schema);
        Self { schema, remote, state, form }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Fetch everything. On failure the previous collection stays in place.
    pub async fn load(&mut self) -> ListResult<usize> {
        let records = fetch_all(&self.remote, self.schema.key).await?;
        self.state.replace_collection(records);
        Ok(self.state.len())
    }

    /// Post `draft`. Success appends the server's record, resets the draft and
    /// closes the add form; failure keeps the typed draft for a retry.
    pub async fn create(&mut self, draft: DraftRecord) -> ListResult<RecordId> {
        self.form.replace_draft(draft);
        let result = submit_create(&self.remote, self.schema.key, self.form.draft()).await;
        self.form.on_create_result(&mut self.state, result)
    }

    /// Put the full edited record. Failure keeps it in the edit buffer.
    pub async fn update(&mut self, edited: EditBuffer) -> ListResult<()> {
        ensure_known(&self.state, self.schema.key, edited.id)?;
        let result = submit_update(&self.remote, self.schema.key, edited.clone()).await;
        self.form.on_update_result(&mut self.state, edited, result)
    }

    /// Delete by id. Failure leaves the row where it was.
    pub async fn delete(&mut self, id: RecordId) -> ListResult<()> {
        let mutation = submit_delete(&self.remote, self.schema.key, id).await?;
        self.state.apply(mutation);
        Ok(())
    }

    // ------------------------
    // Form state
    // ------------------------

    pub fn draft(&self) -> &DraftRecord {
        self.form.draft()
    }

    pub fn is_add_form_open(&self) -> bool {
        self.form.is_add_open()
    }

    pub fn open_add_form(&mut self) {
        self.form.open_add();
    }

    pub fn cancel_add_form(&mut self) {
        self.form.cancel_add();
    }

    /// Set one draft field from form text. Unknown field names are ignored.
    pub fn set_draft_field(&mut self, name: &str, raw: &str) {
        if let Some(field) = self.schema.field(name) {
            self.form.set_draft_field(field, raw);
        }
    }

    /// Submit whatever the add form currently holds
    pub async fn submit_draft(&mut self) -> ListResult<RecordId> {
        let draft = self.form.draft().clone();
        self.create(draft).await
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.form.edit_buffer()
    }

    pub fn open_edit(&mut self, id: RecordId) -> ListResult<()> {
        self.form.open_edit(&self.state, id)
    }

    pub fn set_edit_field(&mut self, name: &str, raw: &str) {
        if let Some(field) = self.schema.field(name) {
            self.form.set_edit_field(field, raw);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    /// Submit the edit buffer, if one is open
    pub async fn save_edit(&mut self) -> ListResult<()> {
        match self.form.pending_update(&self.state)? {
            Some(edited) => self.update(edited).await,
            None => Ok(()),
        }
    }
}
