use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub enum Profiles {
    Table,
    Id,
    DisplayName,
}

#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
    Name,
    City,
    Gu,
    LeaderId,
}

#[derive(DeriveIden)]
pub enum TeamMembers {
    Table,
    TeamId,
    UserId,
    Role,
    Status,
}

#[derive(DeriveIden)]
pub enum Stadiums {
    Table,
    Id,
    Name,
    Address,
}

#[derive(DeriveIden)]
pub enum GuestClubs {
    Table,
    Id,
    TeamId,
    Name,
    NameKey,
    Description,
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    TeamId,
    MatchDate,
    RegistrationDeadline,
    Venue,
    StadiumId,
    IsHome,
    OpponentTeamId,
    OpponentGuestTeamId,
    IsTbd,
    IsFinished,
    HomeScore,
    AwayScore,
    CompetitionType,
    GameType,
    Description,
}

#[derive(DeriveIden)]
pub enum MatchAttendance {
    Table,
    MatchId,
    UserId,
    TeamId,
    Status,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Profiles::Table)
                .if_not_exists()
                .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Profiles::DisplayName).string_len(255).not_null())
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Teams::Table)
                .if_not_exists()
                .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Teams::Name).string_len(255).not_null())
                .col(ColumnDef::new(Teams::City).string_len(255))
                .col(ColumnDef::new(Teams::Gu).string_len(255))
                .col(ColumnDef::new(Teams::LeaderId).uuid().not_null())
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(TeamMembers::Table)
                .if_not_exists()
                .col(ColumnDef::new(TeamMembers::TeamId).uuid().not_null())
                .col(ColumnDef::new(TeamMembers::UserId).uuid().not_null())
                .col(ColumnDef::new(TeamMembers::Role).string_len(16).not_null())
                .col(ColumnDef::new(TeamMembers::Status).string_len(16).not_null())
                .primary_key(
                    Index::create()
                        .name("pk-team-members")
                        .col(TeamMembers::TeamId)
                        .col(TeamMembers::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-team-members-team-id")
                        .from(TeamMembers::Table, TeamMembers::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-team-members-user-id")
                .table(TeamMembers::Table)
                .col(TeamMembers::UserId)
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Stadiums::Table)
                .if_not_exists()
                .col(ColumnDef::new(Stadiums::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Stadiums::Name).string_len(255).not_null())
                .col(ColumnDef::new(Stadiums::Address).string_len(512))
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(GuestClubs::Table)
                .if_not_exists()
                .col(ColumnDef::new(GuestClubs::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(GuestClubs::TeamId).uuid().not_null())
                .col(ColumnDef::new(GuestClubs::Name).string_len(255).not_null())
                .col(ColumnDef::new(GuestClubs::NameKey).string_len(255).not_null())
                .col(ColumnDef::new(GuestClubs::Description).text())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-guest-clubs-team-id")
                        .from(GuestClubs::Table, GuestClubs::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-guest-clubs-team-id-name-key")
                .table(GuestClubs::Table)
                .col(GuestClubs::TeamId)
                .col(GuestClubs::NameKey)
                .unique()
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Matches::Table)
                .if_not_exists()
                .col(ColumnDef::new(Matches::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Matches::TeamId).uuid().not_null())
                .col(ColumnDef::new(Matches::MatchDate).date_time().not_null())
                .col(ColumnDef::new(Matches::RegistrationDeadline).date_time().not_null())
                .col(ColumnDef::new(Matches::Venue).string_len(255).not_null())
                .col(ColumnDef::new(Matches::StadiumId).uuid())
                .col(ColumnDef::new(Matches::IsHome).boolean().not_null().default(true))
                .col(ColumnDef::new(Matches::OpponentTeamId).uuid())
                .col(ColumnDef::new(Matches::OpponentGuestTeamId).uuid())
                .col(ColumnDef::new(Matches::IsTbd).boolean().not_null().default(false))
                .col(ColumnDef::new(Matches::IsFinished).boolean().not_null().default(false))
                .col(ColumnDef::new(Matches::HomeScore).integer())
                .col(ColumnDef::new(Matches::AwayScore).integer())
                .col(ColumnDef::new(Matches::CompetitionType).string_len(64).not_null())
                .col(ColumnDef::new(Matches::GameType).string_len(64).not_null())
                .col(ColumnDef::new(Matches::Description).text())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-matches-team-id")
                        .from(Matches::Table, Matches::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-matches-opponent-team-id")
                        .from(Matches::Table, Matches::OpponentTeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-matches-opponent-guest-team-id")
                        .from(Matches::Table, Matches::OpponentGuestTeamId)
                        .to(GuestClubs::Table, GuestClubs::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-matches-stadium-id")
                        .from(Matches::Table, Matches::StadiumId)
                        .to(Stadiums::Table, Stadiums::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-matches-team-id-match-date")
                .table(Matches::Table)
                .col(Matches::TeamId)
                .col(Matches::MatchDate)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-matches-opponent-team-id")
                .table(Matches::Table)
                .col(Matches::OpponentTeamId)
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(MatchAttendance::Table)
                .if_not_exists()
                .col(ColumnDef::new(MatchAttendance::MatchId).uuid().not_null())
                .col(ColumnDef::new(MatchAttendance::UserId).uuid().not_null())
                .col(ColumnDef::new(MatchAttendance::TeamId).uuid().not_null())
                .col(ColumnDef::new(MatchAttendance::Status).string_len(16).not_null())
                .primary_key(
                    Index::create()
                        .name("pk-match-attendance")
                        .col(MatchAttendance::MatchId)
                        .col(MatchAttendance::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-attendance-match-id")
                        .from(MatchAttendance::Table, MatchAttendance::MatchId)
                        .to(Matches::Table, Matches::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-match-attendance-team-id")
                        .from(MatchAttendance::Table, MatchAttendance::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx-match-attendance-team-id")
                .table(MatchAttendance::Table)
                .col(MatchAttendance::TeamId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MatchAttendance::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Matches::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(GuestClubs::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Stadiums::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TeamMembers::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Teams::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Profiles::Table).to_owned()).await?;
        Ok(())
    }
}
