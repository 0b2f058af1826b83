//! Entity Schemas
//!
//! Describes one entity type: where its collection lives and which fields
//! its records carry. The three console views differ only in their schema.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::filter::EmptyFilter;

/// Scalar shape of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

impl FieldKind {
    /// Convert form input into the JSON value sent to the server.
    ///
    /// Numeric kinds become JSON numbers when the text parses; anything else
    /// is passed through as the raw string. Nothing is rejected.
    pub fn coerce(self, raw: &str) -> Value {
        let trimmed = raw.trim();
        match self {
            FieldKind::Text => Value::String(raw.to_string()),
            FieldKind::Integer => match trimmed.parse::<i64>() {
                Ok(n) => Value::Number(n.into()),
                Err(_) => Value::String(raw.to_string()),
            },
            FieldKind::Decimal => {
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Value::Number(n.into());
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string()))
            }
        }
    }
}

/// One named field of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// JSON key
    pub name: &'static str,
    /// Column / form label
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text }
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Integer }
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Decimal }
    }
}

/// Everything a list manager needs to know about one entity type
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySchema {
    /// Short key used in logs and config sections (e.g. "users")
    pub key: &'static str,
    /// View heading
    pub title: &'static str,
    /// Singular noun for form headings
    pub noun: &'static str,
    /// Collection path, e.g. `/api1/users`
    pub endpoint: String,
    pub fields: &'static [FieldDef],
    pub empty_filter: EmptyFilter,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn users() -> Self {
        Self {
            key: "users",
            title: "Lista de Usuarios",
            noun: "Usuario",
            endpoint: "/api1/users".to_string(),
            fields: USER_FIELDS,
            empty_filter: EmptyFilter::default(),
        }
    }

    pub fn products() -> Self {
        Self {
            key: "products",
            title: "Lista de Productos",
            noun: "Producto",
            endpoint: "/api2/products".to_string(),
            fields: PRODUCT_FIELDS,
            empty_filter: EmptyFilter::default(),
        }
    }

    pub fn orders() -> Self {
        Self {
            key: "orders",
            title: "Lista de Órdenes",
            noun: "Orden",
            endpoint: "/api3/orders".to_string(),
            fields: ORDER_FIELDS,
            empty_filter: EmptyFilter::default(),
        }
    }

    /// The three built-in entity types, in console tab order
    pub fn builtin() -> Vec<Self> {
        vec![Self::users(), Self::products(), Self::orders()]
    }
}

const USER_FIELDS: &[FieldDef] = &[
    FieldDef::text("firstname", "Nombre"),
    FieldDef::text("lastname", "Apellido"),
    FieldDef::text("gender", "Género"),
    FieldDef::integer("age", "Edad"),
    FieldDef::text("phone", "Teléfono"),
    FieldDef::text("address", "Dirección"),
];

const PRODUCT_FIELDS: &[FieldDef] = &[
    FieldDef::text("name", "Nombre"),
    FieldDef::text("description", "Descripción"),
    FieldDef::decimal("price", "Precio"),
    FieldDef::integer("quantity", "Cantidad"),
];

const ORDER_FIELDS: &[FieldDef] = &[
    FieldDef::text("first_name", "Nombre"),
    FieldDef::text("last_name", "Apellido"),
    FieldDef::text("order_date", "Fecha de Orden"),
];

/// Render a field value for a table cell or form input
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
