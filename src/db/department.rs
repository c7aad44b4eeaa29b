use crate::db::mongo_service::MongoService;
use crate::types::department::DepartmentCreated;
use crate::types::error::AppError;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_document, Bson, Document};
use serde_json::{Map, Value};
use uuid::Uuid;

impl MongoService {
    /// Full dump of the collection, `_id` rendered as its hex string.
    pub async fn list_departments(&self) -> Result<Vec<Document>, AppError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut departments = Vec::new();
        while let Some(mut department) = cursor.try_next().await? {
            if let Ok(oid) = department.get_object_id("_id") {
                department.insert("_id", oid.to_hex());
            }
            departments.push(department);
        }
        Ok(departments)
    }

    pub async fn department_exists(&self, department_name: &str) -> Result<bool, AppError> {
        Ok(self
            .collection
            .find_one(doc! { "department_name": department_name })
            .await?
            .is_some())
    }

    /// Persists the submitted object verbatim plus a generated
    /// `department_id`. The uniqueness check is a separate read, not atomic
    /// with the insert.
    pub async fn create_department(
        &self,
        department_name: &str,
        data: Map<String, Value>,
    ) -> Result<DepartmentCreated, AppError> {
        if self.department_exists(department_name).await? {
            return Err(AppError::Conflict(
                "Department name already exists".to_string(),
            ));
        }

        let mut department = to_document(&data)?;
        let department_id = Uuid::new_v4().to_string();
        department.insert("department_id", department_id.clone());

        let inserted = self.collection.insert_one(department).await?;
        let inserted_id = match inserted.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        Ok(DepartmentCreated {
            department_id,
            inserted_id,
        })
    }

    /// Deletes at most one department; its embedded employees go with it.
    pub async fn delete_department(&self, department_name: &str) -> Result<(), AppError> {
        let result = self
            .collection
            .delete_one(doc! { "department_name": department_name })
            .await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Department '{}' not found",
                department_name
            )));
        }
        Ok(())
    }
}
