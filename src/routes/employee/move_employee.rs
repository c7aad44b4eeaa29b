use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::REmployeeMove;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[put("/move")]
async fn move_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<REmployeeMove>,
) -> ApiResult<Response> {
    let (current_department_name, employee_name, new_department_name, new_location) = match (
        body.current_department_name.as_deref(),
        body.employee_name.as_deref(),
        body.new_department_name.as_deref(),
        body.new_location.as_deref(),
    ) {
        (Some(current), Some(employee), Some(new_department), Some(location))
            if !current.is_empty()
                && !employee.is_empty()
                && !new_department.is_empty()
                && !location.is_empty() =>
        {
            (current, employee, new_department, location)
        }
        _ => {
            return Err(AppError::Validation(
                "current_department_name, employee_name, new_department_name, and new_location are required"
                    .to_string(),
            ))
        }
    };

    db.move_employee(
        current_department_name,
        employee_name,
        new_department_name,
        new_location,
    )
    .await?;

    Ok(ApiResponse::Ok(Response {
        message: format!(
            "Employee '{}' successfully moved to department '{}' and located at '{}'",
            employee_name, new_department_name, new_location
        ),
    }))
}
