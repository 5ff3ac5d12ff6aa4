use crate::error::AppResult;
use crate::models::{Student, StudentInput};
use crate::store::{self, ListQuery, StoreClient};

pub struct StudentRepository;

impl StudentRepository {
    pub async fn list(store: &StoreClient) -> AppResult<Vec<Student>> {
        let records = store.list(store::STUDENTS, &ListQuery::default()).await?;
        Ok(records.into_iter().map(Student::from).collect())
    }

    pub async fn create(store: &StoreClient, input: &StudentInput) -> AppResult<Student> {
        let record = store.create(store::STUDENTS, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn update(store: &StoreClient, id: &str, input: &StudentInput) -> AppResult<Student> {
        let record = store.update(store::STUDENTS, id, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn delete(store: &StoreClient, id: &str) -> AppResult<()> {
        store.delete(store::STUDENTS, id).await
    }
}
