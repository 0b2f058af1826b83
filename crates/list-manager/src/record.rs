//! Records
//!
//! A record is a server-assigned identifier plus the scalar fields named by
//! its entity schema. On the wire it is one flat JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{display_value, EntitySchema, FieldDef};

/// Identifier assigned by the remote collection service
pub type RecordId = i64;

/// One persisted entity instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: RecordId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Persisted form of a draft, as the server would return it
    pub fn from_draft(id: RecordId, draft: DraftRecord) -> Self {
        Self { id, fields: draft.fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn display(&self, name: &str) -> String {
        display_value(self.get(name))
    }

    /// Store form input for `field`; the identifier is never touched
    pub fn set(&mut self, field: &FieldDef, raw: &str) {
        self.fields.insert(field.name.to_string(), field.kind.coerce(raw));
    }
}

/// Staged "add new" form contents; has no identifier yet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord {
    pub fields: Map<String, Value>,
}

impl DraftRecord {
    /// Every schema field present and blank
    pub fn empty(schema: &EntitySchema) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|f| (f.name.to_string(), Value::String(String::new())))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn display(&self, name: &str) -> String {
        display_value(self.get(name))
    }

    pub fn set(&mut self, field: &FieldDef, raw: &str) {
        self.fields.insert(field.name.to_string(), field.kind.coerce(raw));
    }
}

/// Staged "edit" form contents: a full copy of the record being edited
pub type EditBuffer = Record;
