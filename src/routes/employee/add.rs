use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::{AddEmployeeOutcome, RAddEmployee};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

#[post("/add_employee")]
async fn add_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RAddEmployee>,
) -> ApiResult<Response> {
    let body = body.into_inner();

    let department_name = match body.department_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(AppError::Validation(
                "Both department_name and employee data are required".to_string(),
            ))
        }
    };
    let employee = match body.employee {
        Some(employee) if !employee.is_empty() => employee,
        _ => {
            return Err(AppError::Validation(
                "Both department_name and employee data are required".to_string(),
            ))
        }
    };

    match db.add_employee(&department_name, employee).await? {
        AddEmployeeOutcome::Added { employee_id } => Ok(ApiResponse::Ok(Response {
            message: "Employee added successfully".to_string(),
            employee_id: Some(employee_id),
        })),
        AddEmployeeOutcome::Unchanged => Ok(ApiResponse::Ok(Response {
            message: "No changes made".to_string(),
            employee_id: None,
        })),
    }
}
