use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RDepartmentDelete {
    pub department_name: Option<String>,
}

/// Identifiers produced by a successful department insert.
#[derive(Debug)]
pub struct DepartmentCreated {
    pub department_id: String,
    pub inserted_id: String,
}
