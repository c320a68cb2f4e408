use club_backend::actions::ActionTrait;
use club_entities::EntityGroup;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::response::APIError;


/// Runs an action and saves its changes in a single transaction.
pub(crate) async fn execute_action<A>(db: &DatabaseConnection, action: A) -> Result<EntityGroup, APIError> where A: ActionTrait + Send + 'static {
    let transaction = db.begin().await?;
    let changes = action.get_changes(&transaction).await?;
    changes.save_all(&transaction).await?;
    transaction.commit().await?;
    info!("Committed {} changed records", changes.len());
    Ok(changes)
}
