use async_trait::async_trait;
use sea_orm::ConnectionTrait;

#[async_trait]
pub trait ClubEntity: Send + Sync + Sized {
    async fn save<C>(&self, db: &C, guarantee_insert: bool) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        Self::save_many(db, guarantee_insert, &vec![self]).await
    }

    async fn save_many<C>(db: &C, guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait;
}
