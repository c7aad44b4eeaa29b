use department_directory::db::mongo_service::MongoService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

pub mod client;

pub struct TestContext {
    pub db: Arc<MongoService>,
    pub _container: ContainerAsync<Mongo>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start mongo container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get port");

        let db_url = format!("mongodb://{}:{}", host, port);

        let db = Arc::new(
            MongoService::new(&db_url, "EmployeeDatabase", "DepartmentCollection")
                .await
                .expect("Failed to initialize MongoService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Map, Value};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    pub fn department(name: &str) -> Map<String, Value> {
        object(json!({ "department_name": name }))
    }

    #[allow(dead_code)]
    pub fn employee(name: &str) -> Map<String, Value> {
        object(json!({ "name": name }))
    }

    #[allow(dead_code)]
    pub fn employee_with_email(name: &str, email: &str) -> Map<String, Value> {
        object(json!({ "name": name, "email": email }))
    }
}
