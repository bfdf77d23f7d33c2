use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new post for an author
    pub async fn create(
        &self,
        author_id: i32,
        title: String,
        body: String,
        published: bool,
    ) -> Result<entity::post::Model, DbErr> {
        let post = entity::post::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(title),
            body: ActiveValue::Set(body),
            published: ActiveValue::Set(published),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    /// Lists an author's posts, oldest first
    pub async fn get_by_author_id(&self, author_id: i32) -> Result<Vec<entity::post::Model>, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await
    }
}
