use crate::db::mongo_service::MongoService;
use crate::types::employee::{AddEmployeeOutcome, EmployeeStatus};
use crate::types::error::AppError;
use mongodb::bson::{doc, to_document, Bson, Document};
use serde_json::{Map, Value};
use uuid::Uuid;

impl MongoService {
    /// Appends an employee to a department's `employees` array, tagging it
    /// with a fresh `employee_id` first. A blank client-side `id` field is
    /// dropped rather than persisted.
    pub async fn add_employee(
        &self,
        department_name: &str,
        employee: Map<String, Value>,
    ) -> Result<AddEmployeeOutcome, AppError> {
        let mut employee = to_document(&employee)?;
        let employee_id = Uuid::new_v4().to_string();
        employee.insert("employee_id", employee_id.clone());

        match employee.get("id") {
            Some(Bson::Null) => {
                employee.remove("id");
            }
            Some(Bson::String(s)) if s.is_empty() => {
                employee.remove("id");
            }
            _ => {}
        }

        let result = self
            .collection
            .update_one(
                doc! { "department_name": department_name },
                doc! { "$push": { "employees": employee } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Department '{}' not found",
                department_name
            )));
        }
        if result.modified_count == 0 {
            return Ok(AddEmployeeOutcome::Unchanged);
        }
        Ok(AddEmployeeOutcome::Added { employee_id })
    }

    /// The department's employee array, in insertion order. A department
    /// created without employees yields an empty list.
    pub async fn employees(&self, department_name: &str) -> Result<Vec<Document>, AppError> {
        let department = self
            .collection
            .find_one(doc! { "department_name": department_name })
            .projection(doc! { "employees": 1, "_id": 0 })
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Department '{}' not found", department_name))
            })?;

        let employees = department
            .get_array("employees")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.as_document().cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(employees)
    }

    /// First employee whose `name` matches, in array order. Duplicate names
    /// are possible; later ones are unreachable through this lookup.
    pub async fn employee_by_name(
        &self,
        department_name: &str,
        employee_name: &str,
    ) -> Result<Document, AppError> {
        let employees = self.employees(department_name).await?;
        employees
            .into_iter()
            .find(|employee| employee.get_str("name") == Ok(employee_name))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Employee named '{}' not found in department '{}'",
                    employee_name, department_name
                ))
            })
    }

    /// Positional update of name and/or email on the first matching
    /// employee. Returns the `$set` document that was applied.
    pub async fn update_employee(
        &self,
        department_name: &str,
        employee_name: &str,
        updated_name: Option<&str>,
        updated_email: Option<&str>,
    ) -> Result<Document, AppError> {
        let mut update_fields = Document::new();
        if let Some(name) = updated_name {
            update_fields.insert("employees.$.name", name);
        }
        if let Some(email) = updated_email {
            update_fields.insert("employees.$.email", email);
        }

        let result = self
            .collection
            .update_one(
                doc! {
                    "department_name": department_name,
                    "employees.name": employee_name,
                },
                doc! { "$set": update_fields.clone() },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Employee '{}' not found in department '{}'",
                employee_name, department_name
            )));
        }
        Ok(update_fields)
    }

    pub async fn update_employee_status(
        &self,
        department_name: &str,
        employee_name: &str,
        status: EmployeeStatus,
    ) -> Result<(), AppError> {
        let result = self
            .collection
            .update_one(
                doc! {
                    "department_name": department_name,
                    "employees.name": employee_name,
                },
                doc! { "$set": { "employees.$.status": status.as_str() } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Employee '{}' not found in department '{}'",
                employee_name, department_name
            )));
        }
        Ok(())
    }

    /// Two sequential writes with no rollback between them.
    ///
    /// The source record is retagged in place and stays in the source
    /// department's array; the destination gains a new `{name, location}`
    /// record without the source record's other fields. Known
    /// inconsistency, kept for wire compatibility.
    pub async fn move_employee(
        &self,
        current_department_name: &str,
        employee_name: &str,
        new_department_name: &str,
        new_location: &str,
    ) -> Result<(), AppError> {
        let result = self
            .collection
            .update_one(
                doc! {
                    "department_name": current_department_name,
                    "employees.name": employee_name,
                },
                doc! { "$set": {
                    "employees.$.department_name": new_department_name,
                    "employees.$.location": new_location,
                } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Employee '{}' not found in department '{}'",
                employee_name, current_department_name
            )));
        }

        let moved = self
            .collection
            .update_one(
                doc! { "department_name": new_department_name },
                doc! { "$push": { "employees": {
                    "name": employee_name,
                    "location": new_location,
                } } },
            )
            .await?;

        if moved.modified_count == 0 {
            // The first write already went through; there is no compensation.
            return Err(AppError::Internal(format!(
                "Unable to move employee '{}' to department '{}'",
                employee_name, new_department_name
            )));
        }
        Ok(())
    }
}
