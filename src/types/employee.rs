use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug)]
pub struct RAddEmployee {
    pub department_name: Option<String>,
    pub employee: Option<Map<String, Value>>,
}

#[derive(Deserialize, Debug)]
pub struct EmployeesQuery {
    pub department_name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct EmployeeQuery {
    pub department_name: Option<String>,
    pub employee_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct REmployeeUpdate {
    pub department_name: Option<String>,
    pub employee_name: Option<String>,
    pub updated_name: Option<String>,
    pub updated_email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RStatusUpdate {
    pub department_name: Option<String>,
    pub employee_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct REmployeeMove {
    pub current_department_name: Option<String>,
    pub employee_name: Option<String>,
    pub new_department_name: Option<String>,
    pub new_location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    /// Accepts exactly the two wire spellings, nothing else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Result of appending an employee to a department.
///
/// The store can match the department but report zero modifications; that is
/// surfaced as `Unchanged` so the handler can answer with a neutral success.
#[derive(Debug)]
pub enum AddEmployeeOutcome {
    Added { employee_id: String },
    Unchanged,
}
