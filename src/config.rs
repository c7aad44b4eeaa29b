use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub db_name: String,
    pub collection: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("MONGODB_URI");

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "EmployeeDatabase".to_string()),
            collection: env::var("COLLECTION_NAME")
                .unwrap_or_else(|_| "DepartmentCollection".to_string()),
        }
    }
}
