use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub department_id: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[post("")]
async fn create_department(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
    body: web::Json<Map<String, Value>>,
) -> ApiResult<Response> {
    let data = body.into_inner();

    let department_name = match data.get("department_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(AppError::Validation(
                "Department name is required".to_string(),
            ))
        }
    };

    let created = db.create_department(&department_name, data).await?;

    Ok(ApiResponse::Created(Response {
        message: "Data added successfully".to_string(),
        department_id: created.department_id,
        id: created.inserted_id,
    }))
}
