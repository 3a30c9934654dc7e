//! Job posting entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use alumnet_core::domain::Comment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub apply_link: Option<String>,
    pub attachment: Option<String>,
    pub posted_by: String,
    pub verified: bool,
    pub comments: Json,
    pub date_posted: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) fn comments_from_json(value: Json) -> Vec<Comment> {
    serde_json::from_value(value).unwrap_or_default()
}

pub(crate) fn comments_to_json(comments: &[Comment]) -> Json {
    serde_json::to_value(comments).unwrap_or_else(|_| Json::Array(Vec::new()))
}

/// Conversion from SeaORM Model to the domain JobPosting.
impl From<Model> for alumnet_core::domain::JobPosting {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            company: model.company,
            location: model.location,
            job_type: model.job_type,
            description: model.description,
            apply_link: model.apply_link,
            attachment: model.attachment,
            posted_by: model.posted_by,
            verified: model.verified,
            comments: comments_from_json(model.comments),
            date_posted: model.date_posted.into(),
        }
    }
}

/// Conversion from the domain JobPosting to a SeaORM ActiveModel.
impl From<alumnet_core::domain::JobPosting> for ActiveModel {
    fn from(job: alumnet_core::domain::JobPosting) -> Self {
        Self {
            id: Set(job.id),
            title: Set(job.title),
            company: Set(job.company),
            location: Set(job.location),
            job_type: Set(job.job_type),
            description: Set(job.description),
            apply_link: Set(job.apply_link),
            attachment: Set(job.attachment),
            posted_by: Set(job.posted_by),
            verified: Set(job.verified),
            comments: Set(comments_to_json(&job.comments)),
            date_posted: Set(job.date_posted.into()),
        }
    }
}
