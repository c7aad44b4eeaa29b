use actix_web::{get, web};
use mongodb::bson::Document;
use serde::Serialize;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::EmployeeQuery;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub employee: Document,
}

#[get("/employee")]
async fn get_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    query: web::Query<EmployeeQuery>,
) -> ApiResult<Response> {
    let (department_name, employee_name) = match (
        query.department_name.as_deref(),
        query.employee_name.as_deref(),
    ) {
        (Some(department), Some(employee)) if !department.is_empty() && !employee.is_empty() => {
            (department, employee)
        }
        _ => {
            return Err(AppError::Validation(
                "Both department_name and employee_name are required".to_string(),
            ))
        }
    };

    let employee = db.employee_by_name(department_name, employee_name).await?;

    Ok(ApiResponse::Ok(Response { employee }))
}
