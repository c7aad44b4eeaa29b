use actix_web::{web, App, HttpServer};
use department_directory::config::EnvConfig;
use department_directory::db::mongo_service::MongoService;
use department_directory::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let mongo_service = Arc::new(
        MongoService::new(&config.db_url, &config.db_name, &config.collection)
            .await
            .expect("Failed to initialize MongoService"),
    );

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&mongo_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
