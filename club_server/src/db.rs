use migration::MigratorTrait;
use sea_orm::{prelude::*, Database, DbBackend, Statement};
use tracing::info;


/// Connects and brings the schema up to date.
pub async fn set_up_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(url).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA foreign_keys = ON;",
        )).await?;
    }

    migration::Migrator::up(&db, None).await?;
    info!("Database ready at {}", url);

    Ok(db)
}
