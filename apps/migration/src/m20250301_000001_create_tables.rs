//! Creates the three collections: accounts, job postings, event postings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Accounts::Role).string().not_null())
                    .col(ColumnDef::new(Accounts::RollNo).string().not_null())
                    .col(ColumnDef::new(Accounts::Series).string().not_null())
                    .col(ColumnDef::new(Accounts::Section).string().not_null())
                    .col(ColumnDef::new(Accounts::Department).string().not_null())
                    .col(ColumnDef::new(Accounts::PassingYear).integer().not_null())
                    .col(ColumnDef::new(Accounts::ContactNo).string())
                    .col(ColumnDef::new(Accounts::Address).string())
                    .col(ColumnDef::new(Accounts::CurrentJob).string())
                    .col(ColumnDef::new(Accounts::CurrentCompany).string())
                    .col(ColumnDef::new(Accounts::Skills).string())
                    .col(ColumnDef::new(Accounts::Bio).text())
                    .col(ColumnDef::new(Accounts::Github).string())
                    .col(ColumnDef::new(Accounts::Linkedin).string())
                    .col(ColumnDef::new(Accounts::ProfilePhoto).string())
                    .col(ColumnDef::new(Accounts::CoverPhoto).string())
                    .col(
                        ColumnDef::new(Accounts::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostings::Title).string().not_null())
                    .col(ColumnDef::new(JobPostings::Company).string().not_null())
                    .col(ColumnDef::new(JobPostings::Location).string().not_null())
                    .col(ColumnDef::new(JobPostings::JobType).string().not_null())
                    .col(ColumnDef::new(JobPostings::Description).text().not_null())
                    .col(ColumnDef::new(JobPostings::ApplyLink).string())
                    .col(ColumnDef::new(JobPostings::Attachment).string())
                    .col(ColumnDef::new(JobPostings::PostedBy).string().not_null())
                    .col(
                        ColumnDef::new(JobPostings::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(JobPostings::Comments).json().not_null())
                    .col(
                        ColumnDef::new(JobPostings::DatePosted)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventPostings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventPostings::Name).string().not_null())
                    .col(ColumnDef::new(EventPostings::Date).date().not_null())
                    .col(ColumnDef::new(EventPostings::Time).string().not_null())
                    .col(ColumnDef::new(EventPostings::Location).string().not_null())
                    .col(ColumnDef::new(EventPostings::EventType).string().not_null())
                    .col(
                        ColumnDef::new(EventPostings::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventPostings::RsvpLink).string())
                    .col(ColumnDef::new(EventPostings::Attachment).string())
                    .col(ColumnDef::new(EventPostings::PostedBy).string().not_null())
                    .col(
                        ColumnDef::new(EventPostings::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(EventPostings::Comments).json().not_null())
                    .col(
                        ColumnDef::new(EventPostings::DatePosted)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventPostings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    RollNo,
    Series,
    Section,
    Department,
    PassingYear,
    ContactNo,
    Address,
    CurrentJob,
    CurrentCompany,
    Skills,
    Bio,
    Github,
    Linkedin,
    ProfilePhoto,
    CoverPhoto,
    Verified,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JobPostings {
    Table,
    Id,
    Title,
    Company,
    Location,
    JobType,
    Description,
    ApplyLink,
    Attachment,
    PostedBy,
    Verified,
    Comments,
    DatePosted,
}

#[derive(DeriveIden)]
enum EventPostings {
    Table,
    Id,
    Name,
    Date,
    Time,
    Location,
    EventType,
    Description,
    RsvpLink,
    Attachment,
    PostedBy,
    Verified,
    Comments,
    DatePosted,
}
