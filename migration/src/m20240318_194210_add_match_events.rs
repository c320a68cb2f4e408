use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub enum MatchGoals {
    Table,
    Id,
    MatchId,
    UserId,
    TeamId,
    GoalType,
}

#[derive(DeriveIden)]
pub enum MatchAssists {
    Table,
    Id,
    MatchId,
    UserId,
    TeamId,
}

#[derive(DeriveIden)]
pub enum MatchMom {
    Table,
    Id,
    MatchId,
    UserId,
    TeamId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(MatchGoals::Table)
                .if_not_exists()
                .col(ColumnDef::new(MatchGoals::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(MatchGoals::MatchId).uuid().not_null())
                .col(ColumnDef::new(MatchGoals::UserId).uuid().not_null())
                .col(ColumnDef::new(MatchGoals::TeamId).uuid().not_null())
                .col(ColumnDef::new(MatchGoals::GoalType).string_len(16))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-goals-match-id")
                        .from(MatchGoals::Table, MatchGoals::MatchId)
                        .to(Matches::Table, Matches::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-goals-team-id")
                        .from(MatchGoals::Table, MatchGoals::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-match-goals-match-id")
                .table(MatchGoals::Table)
                .col(MatchGoals::MatchId)
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(MatchAssists::Table)
                .if_not_exists()
                .col(ColumnDef::new(MatchAssists::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(MatchAssists::MatchId).uuid().not_null())
                .col(ColumnDef::new(MatchAssists::UserId).uuid().not_null())
                .col(ColumnDef::new(MatchAssists::TeamId).uuid().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-assists-match-id")
                        .from(MatchAssists::Table, MatchAssists::MatchId)
                        .to(Matches::Table, Matches::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-assists-team-id")
                        .from(MatchAssists::Table, MatchAssists::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-match-assists-match-id")
                .table(MatchAssists::Table)
                .col(MatchAssists::MatchId)
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(MatchMom::Table)
                .if_not_exists()
                .col(ColumnDef::new(MatchMom::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(MatchMom::MatchId).uuid().not_null())
                .col(ColumnDef::new(MatchMom::UserId).uuid().not_null())
                .col(ColumnDef::new(MatchMom::TeamId).uuid().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-mom-match-id")
                        .from(MatchMom::Table, MatchMom::MatchId)
                        .to(Matches::Table, Matches::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-mom-team-id")
                        .from(MatchMom::Table, MatchMom::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        // At most one man of the match per match
        manager.create_index(
            Index::create()
                .name("idx-match-mom-match-id")
                .table(MatchMom::Table)
                .col(MatchMom::MatchId)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MatchMom::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MatchAssists::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MatchGoals::Table).to_owned()).await?;
        Ok(())
    }
}
