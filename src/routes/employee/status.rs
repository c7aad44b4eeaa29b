use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::{EmployeeStatus, RStatusUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[put("/employee/status")]
async fn update_status(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RStatusUpdate>,
) -> ApiResult<Response> {
    let (department_name, employee_name, status) = match (
        body.department_name.as_deref(),
        body.employee_name.as_deref(),
        body.status.as_deref(),
    ) {
        (Some(department), Some(employee), Some(status))
            if !department.is_empty() && !employee.is_empty() && !status.is_empty() =>
        {
            (department, employee, status)
        }
        _ => {
            return Err(AppError::Validation(
                "department_name, employee_name, and status are required".to_string(),
            ))
        }
    };

    // Rejected before any store call.
    let status = EmployeeStatus::parse(status).ok_or_else(|| {
        AppError::Validation("status must be either 'Active' or 'Inactive'".to_string())
    })?;

    db.update_employee_status(department_name, employee_name, status)
        .await?;

    Ok(ApiResponse::Ok(Response {
        message: format!(
            "Employee '{}' status updated to '{}' successfully",
            employee_name,
            status.as_str()
        ),
    }))
}
