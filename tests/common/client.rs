use actix_web::{web, App};
use department_directory::db::mongo_service::MongoService;
use department_directory::types::employee::AddEmployeeOutcome;
use std::sync::Arc;

use super::test_data;

pub struct TestClient {
    pub db: Arc<MongoService>,
}

impl TestClient {
    pub fn new(db: Arc<MongoService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(department_directory::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn seed_department(&self, name: &str) -> String {
        let created = self
            .db
            .create_department(name, test_data::department(name))
            .await
            .expect("Failed to create department");
        created.department_id
    }

    #[allow(dead_code)]
    pub async fn seed_employee(&self, department: &str, name: &str) -> String {
        match self
            .db
            .add_employee(department, test_data::employee(name))
            .await
            .expect("Failed to add employee")
        {
            AddEmployeeOutcome::Added { employee_id } => employee_id,
            AddEmployeeOutcome::Unchanged => panic!("Employee append made no changes"),
        }
    }
}
