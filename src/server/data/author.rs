use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct AuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorRepository<'a, C> {
    /// Creates a new instance of [`AuthorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new author
    pub async fn create(&self, name: String) -> Result<entity::author::Model, DbErr> {
        let author = entity::author::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        author.insert(self.db).await
    }

    pub async fn get(&self, author_id: i32) -> Result<Option<entity::author::Model>, DbErr> {
        entity::prelude::Author::find_by_id(author_id)
            .one(self.db)
            .await
    }

    /// Lists all authors, oldest first
    pub async fn list(&self) -> Result<Vec<entity::author::Model>, DbErr> {
        entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::Id)
            .all(self.db)
            .await
    }
}
