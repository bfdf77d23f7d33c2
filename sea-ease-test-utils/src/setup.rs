use sea_ease::{Db, DbSession, EngineOptions};
use sea_orm::DatabaseConnection;

use crate::{constant::TEST_DATABASE_URL, error::TestError, fixtures::blog::factory};

pub struct TestSetup {
    pub db: Db,
}

impl TestSetup {
    /// An independent facade initialized on an in-memory SQLite database, with no models.
    pub async fn new() -> Result<Self, TestError> {
        let db = Db::isolated();
        db.init_app(TEST_DATABASE_URL, EngineOptions::new()).await?;

        Ok(Self { db })
    }

    /// An independent facade that was never initialized.
    pub fn uninitialized() -> Self {
        Self { db: Db::isolated() }
    }

    /// Convert the facade into any state type that can be built from it, such as `AppState`.
    pub fn state<T>(&self) -> T
    where
        T: From<Db>,
    {
        T::from(self.db.clone())
    }

    pub fn conn(&self) -> Result<DatabaseConnection, TestError> {
        Ok(self.db.connection()?)
    }

    pub async fn session(&self) -> Result<DbSession, TestError> {
        Ok(self.db.session().await?)
    }

    /// Inserts an author outside of any session
    pub async fn insert_author(&self, name: &str) -> Result<entity::author::Model, TestError> {
        Ok(factory::author(&self.conn()?, name).await?)
    }

    /// Inserts a post outside of any session
    pub async fn insert_post(
        &self,
        author_id: i32,
        title: &str,
        published: bool,
    ) -> Result<entity::post::Model, TestError> {
        Ok(factory::post(&self.conn()?, author_id, title, published).await?)
    }
}

#[macro_export]
macro_rules! test_setup_with_models {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided, tables created in the order given
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            $(setup.db.model().register($entity);)+
            setup.db.create_all().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
