use actix_web::{delete, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::department::RDepartmentDelete;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("")]
async fn delete_department(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RDepartmentDelete>,
) -> ApiResult<Response> {
    let department_name = match body.department_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Validation(
                "department_name is required".to_string(),
            ))
        }
    };

    db.delete_department(department_name).await?;

    Ok(ApiResponse::Ok(Response {
        message: format!("Department '{}' deleted successfully", department_name),
    }))
}
