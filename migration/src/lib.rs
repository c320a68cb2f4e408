pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20240301_101530_create_club_tables;
mod m20240318_194210_add_match_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_101530_create_club_tables::Migration),
            Box::new(m20240318_194210_add_match_events::Migration),
        ]
    }
}
