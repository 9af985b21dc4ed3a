//! Dynamic rows and their declared schema.

use std::collections::HashMap;

/// A dynamic cell value.
///
/// Rows hold one of these per column. `Null` stands for absent data and
/// is never coerced into a matchable or comparable string: filtering
/// skips it and sorting treats it as empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(FieldKind::Bool),
            Value::Int(_) => Some(FieldKind::Int),
            Value::Float(_) => Some(FieldKind::Float),
            Value::Str(_) => Some(FieldKind::Text),
        }
    }

    /// Stringified form used for filtering and sorting.
    /// `Null` has none.
    pub fn text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Str(s) => Some(s.clone()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One record in a tabular collection, keyed by column.
///
/// Field order is not carried by the row itself; display order comes
/// from the column descriptors and validity from the [`Schema`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value (builder pattern).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }
}

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
}

/// One declared field of a row schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// Schema validation failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("row {row}: unknown field '{key}'")]
    UnknownField { row: usize, key: String },
    #[error("row {row}: field '{key}' expected {expected:?}, got {actual:?}")]
    KindMismatch {
        row: usize,
        key: String,
        expected: FieldKind,
        actual: FieldKind,
    },
}

/// The declared field list for a row collection.
///
/// Validation happens once at the collection boundary; after that the
/// filter and sorter can assume every key they see is declared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Check every row against the declared fields. Unknown keys and
    /// kind mismatches are errors; `Null` is valid for any kind, and a
    /// row may omit declared fields entirely.
    pub fn validate(&self, rows: &[Row]) -> Result<(), SchemaError> {
        for (i, row) in rows.iter().enumerate() {
            for key in row.keys() {
                let Some(field) = self.field(key) else {
                    return Err(SchemaError::UnknownField {
                        row: i,
                        key: key.to_string(),
                    });
                };
                if let Some(actual) = row.get(key).and_then(Value::kind) {
                    if actual != field.kind {
                        return Err(SchemaError::KindMismatch {
                            row: i,
                            key: key.to_string(),
                            expected: field.kind,
                            actual,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Conversion from a typed domain entity to a dynamic table row.
pub trait Tabular {
    /// The declared fields produced by [`Tabular::row`].
    fn schema() -> Schema;

    fn row(&self) -> Row;
}
