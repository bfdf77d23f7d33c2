//! Factories inserting blog rows with sensible defaults.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Inserts an author with the given name
pub async fn author<C: ConnectionTrait>(db: &C, name: &str) -> Result<entity::author::Model, DbErr> {
    entity::author::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a post for an author, with a body derived from the title
pub async fn post<C: ConnectionTrait>(
    db: &C,
    author_id: i32,
    title: &str,
    published: bool,
) -> Result<entity::post::Model, DbErr> {
    entity::post::ActiveModel {
        author_id: ActiveValue::Set(author_id),
        title: ActiveValue::Set(title.to_string()),
        body: ActiveValue::Set(format!("Body of {}", title)),
        published: ActiveValue::Set(published),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
