use crate::error::AppResult;
use crate::models::{Stack, StackInput};
use crate::store::{self, ListQuery, StoreClient};

pub struct StackRepository;

impl StackRepository {
    pub async fn list(store: &StoreClient) -> AppResult<Vec<Stack>> {
        let records = store.list(store::STACKS, &ListQuery::default()).await?;
        Ok(records.into_iter().map(Stack::from).collect())
    }

    pub async fn create(store: &StoreClient, input: &StackInput) -> AppResult<Stack> {
        let record = store.create(store::STACKS, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn update(store: &StoreClient, id: &str, input: &StackInput) -> AppResult<Stack> {
        let record = store.update(store::STACKS, id, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn delete(store: &StoreClient, id: &str) -> AppResult<()> {
        store.delete(store::STACKS, id).await
    }
}
