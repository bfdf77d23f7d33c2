use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::author::Model> for AuthorDto {
    fn from(model: entity::author::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewAuthorDto {
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::post::Model> for PostDto {
    fn from(model: entity::post::Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            body: model.body,
            published: model.published,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewPostDto {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub published: bool,
}
