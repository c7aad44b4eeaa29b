use actix_web::{get, web};
use mongodb::bson::Document;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list_departments(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MongoService>>,
) -> ApiResult<Vec<Document>> {
    let departments = db.list_departments().await?;

    Ok(ApiResponse::Ok(departments))
}
