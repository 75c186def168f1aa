use serde::{Deserialize, Serialize};

/// A ticket classification tag. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A staff member who may be assigned to tickets. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
}
