//! Account entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use alumnet_core::domain::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub roll_no: String,
    pub series: String,
    pub section: String,
    pub department: String,
    pub passing_year: i32,
    pub contact_no: Option<String>,
    pub address: Option<String>,
    pub current_job: Option<String>,
    pub current_company: Option<String>,
    pub skills: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub verified: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Account.
impl From<Model> for alumnet_core::domain::Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.parse().unwrap_or(Role::Alumni),
            roll_no: model.roll_no,
            series: model.series,
            section: model.section,
            department: model.department,
            passing_year: model.passing_year,
            contact_no: model.contact_no,
            address: model.address,
            current_job: model.current_job,
            current_company: model.current_company,
            skills: model.skills,
            bio: model.bio,
            github: model.github,
            linkedin: model.linkedin,
            profile_photo: model.profile_photo,
            cover_photo: model.cover_photo,
            verified: model.verified,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from the domain Account to a SeaORM ActiveModel.
impl From<alumnet_core::domain::Account> for ActiveModel {
    fn from(account: alumnet_core::domain::Account) -> Self {
        Self {
            id: Set(account.id),
            name: Set(account.name),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            role: Set(account.role.as_str().to_owned()),
            roll_no: Set(account.roll_no),
            series: Set(account.series),
            section: Set(account.section),
            department: Set(account.department),
            passing_year: Set(account.passing_year),
            contact_no: Set(account.contact_no),
            address: Set(account.address),
            current_job: Set(account.current_job),
            current_company: Set(account.current_company),
            skills: Set(account.skills),
            bio: Set(account.bio),
            github: Set(account.github),
            linkedin: Set(account.linkedin),
            profile_photo: Set(account.profile_photo),
            cover_photo: Set(account.cover_photo),
            verified: Set(account.verified),
            created_at: Set(account.created_at.into()),
        }
    }
}
