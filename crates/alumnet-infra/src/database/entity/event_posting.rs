//! Event posting entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use super::job_posting::{comments_from_json, comments_to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_postings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub date: Date,
    pub time: String,
    pub location: String,
    pub event_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rsvp_link: Option<String>,
    pub attachment: Option<String>,
    pub posted_by: String,
    pub verified: bool,
    pub comments: Json,
    pub date_posted: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain EventPosting.
impl From<Model> for alumnet_core::domain::EventPosting {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            time: model.time,
            location: model.location,
            event_type: model.event_type,
            description: model.description,
            rsvp_link: model.rsvp_link,
            attachment: model.attachment,
            posted_by: model.posted_by,
            verified: model.verified,
            comments: comments_from_json(model.comments),
            date_posted: model.date_posted.into(),
        }
    }
}

/// Conversion from the domain EventPosting to a SeaORM ActiveModel.
impl From<alumnet_core::domain::EventPosting> for ActiveModel {
    fn from(event: alumnet_core::domain::EventPosting) -> Self {
        Self {
            id: Set(event.id),
            name: Set(event.name),
            date: Set(event.date),
            time: Set(event.time),
            location: Set(event.location),
            event_type: Set(event.event_type),
            description: Set(event.description),
            rsvp_link: Set(event.rsvp_link),
            attachment: Set(event.attachment),
            posted_by: Set(event.posted_by),
            verified: Set(event.verified),
            comments: Set(comments_to_json(&event.comments)),
            date_posted: Set(event.date_posted.into()),
        }
    }
}
