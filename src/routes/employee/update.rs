use actix_web::{put, web};
use mongodb::bson::Document;
use serde::Serialize;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::REmployeeUpdate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub updated_fields: Document,
}

#[put("/employee/update")]
async fn update_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<REmployeeUpdate>,
) -> ApiResult<Response> {
    let (department_name, employee_name) = match (
        body.department_name.as_deref(),
        body.employee_name.as_deref(),
    ) {
        (Some(department), Some(employee)) if !department.is_empty() && !employee.is_empty() => {
            (department, employee)
        }
        _ => {
            return Err(AppError::Validation(
                "department_name and employee_name are required".to_string(),
            ))
        }
    };

    // Blank update values count as absent.
    let updated_name = body.updated_name.as_deref().filter(|name| !name.is_empty());
    let updated_email = body
        .updated_email
        .as_deref()
        .filter(|email| !email.is_empty());

    if updated_name.is_none() && updated_email.is_none() {
        return Err(AppError::Validation(
            "At least one of updated_name or updated_email is required".to_string(),
        ));
    }

    let updated_fields = db
        .update_employee(department_name, employee_name, updated_name, updated_email)
        .await?;

    Ok(ApiResponse::Ok(Response {
        message: format!("Employee '{}' updated successfully", employee_name),
        updated_fields,
    }))
}
