use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabula::table::{Field, FieldKind, Row, Schema, Tabular};
use uuid::Uuid;

/// A directory user tracked on managed endpoints. Distinct from the
/// console operator accounts in [`crate::auth`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointUser {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub department: String,
    pub active: bool,
    pub created: NaiveDate,
}

impl Tabular for EndpointUser {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("username", FieldKind::Text),
            Field::new("display_name", FieldKind::Text),
            Field::new("email", FieldKind::Text),
            Field::new("department", FieldKind::Text),
            Field::new("status", FieldKind::Text),
            Field::new("created", FieldKind::Text),
        ])
    }

    fn row(&self) -> Row {
        Row::new()
            .set("username", self.username.as_str())
            .set("display_name", self.display_name.as_str())
            .set("email", self.email.as_str())
            .set("department", self.department.as_str())
            .set("status", if self.active { "Active" } else { "Inactive" })
            .set("created", self.created.to_string())
    }
}
