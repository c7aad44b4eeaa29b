use actix_web::{get, web};
use mongodb::bson::Document;
use serde::Serialize;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::employee::EmployeesQuery;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub employees: Vec<Document>,
}

#[get("/employees")]
async fn list_employees(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    query: web::Query<EmployeesQuery>,
) -> ApiResult<Response> {
    let department_name = match query.department_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Validation(
                "department_name is required".to_string(),
            ))
        }
    };

    let employees = db.employees(department_name).await?;

    Ok(ApiResponse::Ok(Response { employees }))
}
