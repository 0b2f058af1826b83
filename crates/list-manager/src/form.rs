//! Form State
//!
//! The "add new" draft and the "edit" buffer of one view, and how each
//! remote outcome closes or keeps them. Both `ListManager` and the console's
//! table component drive their forms through this type.

use crate::error::{ListError, ListResult};
use crate::manager::ensure_known;
use crate::record::{DraftRecord, EditBuffer, RecordId};
use crate::schema::{EntitySchema, FieldDef};
use crate::state::{ListState, Mutation};

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    key: &'static str,
    /// All schema fields blank; what the draft resets to
    blank: DraftRecord,
    draft: DraftRecord,
    add_open: bool,
    edit_buffer: Option<EditBuffer>,
}

impl FormState {
    pub fn new(schema: &EntitySchema) -> Self {
        let blank = DraftRecord::empty(schema);
        Self {
            key: schema.key,
            draft: blank.clone(),
            blank,
            add_open: false,
            edit_buffer: None,
        }
    }

    // ------------------------
    // Add form
    // ------------------------

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn is_add_open(&self) -> bool {
        self.add_open
    }

    pub fn open_add(&mut self) {
        self.add_open = true;
    }

    /// Close without submitting; typed values are discarded
    pub fn cancel_add(&mut self) {
        self.add_open = false;
        self.draft = self.blank.clone();
    }

    pub fn set_draft_field(&mut self, field: &FieldDef, raw: &str) {
        self.draft.set(field, raw);
    }

    pub fn replace_draft(&mut self, draft: DraftRecord) {
        self.draft = draft;
    }

    /// Reconcile a create outcome. Success appends the record, resets the
    /// draft and closes the form; failure keeps both for a retry.
    pub fn on_create_result(&mut self, state: &mut ListState, result: ListResult<Mutation>) -> ListResult<RecordId> {
        let mutation = result?;
        let id = mutation.id();
        state.apply(mutation);
        self.draft = self.blank.clone();
        self.add_open = false;
        Ok(id)
    }

    // ------------------------
    // Edit form
    // ------------------------

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit_buffer.as_ref()
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Copy the record with `id` into the edit buffer
    pub fn open_edit(&mut self, state: &ListState, id: RecordId) -> ListResult<()> {
        let record = state.find(id).cloned().ok_or(ListError::UnknownRecord(id))?;
        self.edit_buffer = Some(record);
        Ok(())
    }

    pub fn set_edit_field(&mut self, field: &FieldDef, raw: &str) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.set(field, raw);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    /// Buffer to submit, if it still names a record in `state`
    pub fn pending_update(&self, state: &ListState) -> ListResult<Option<EditBuffer>> {
        match &self.edit_buffer {
            Some(edited) => {
                ensure_known(state, self.key, edited.id)?;
                Ok(Some(edited.clone()))
            }
            None => Ok(None),
        }
    }

    /// Reconcile an update outcome. Success replaces the record and closes
    /// the form; failure leaves `edited` in the buffer.
    pub fn on_update_result(
        &mut self,
        state: &mut ListState,
        edited: EditBuffer,
        result: ListResult<Mutation>,
    ) -> ListResult<()> {
        match result {
            Ok(mutation) => {
                state.apply(mutation);
                self.edit_buffer = None;
                Ok(())
            }
            Err(e) => {
                self.edit_buffer = Some(edited);
                Err(e)
            }
        }
    }
}
