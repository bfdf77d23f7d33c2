//! Declarative test builder.
//!
//! Configuration calls are queued and executed in a fixed order by `build()`: register models,
//! initialize the facade, create tables, then insert fixtures.

use sea_ease::Db;
use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::blog::factory, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    models: Vec<Box<dyn FnOnce(&Db)>>,
    include_blog_models: bool,
    initialize: bool,
    create_tables: bool,
    authors: Vec<String>,
    posts: Vec<(String, String, bool)>, // (author name, title, published)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// By default the facade is initialized and tables for registered models are created.
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            include_blog_models: false,
            initialize: true,
            create_tables: true,
            authors: Vec::new(),
            posts: Vec::new(),
        }
    }

    /// Register the author and post models.
    pub fn with_blog_models(mut self) -> Self {
        self.include_blog_models = true;
        self
    }

    /// Register a custom entity. Tables are created in the order models are added.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sea_ease_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), sea_ease_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_model(Author)
    ///     .with_model(Post)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_model<E: EntityTrait + 'static>(mut self, entity: E) -> Self {
        self.models.push(Box::new(move |db: &Db| {
            db.model().register(entity);
        }));
        self
    }

    /// Leave the facade uninitialized. Models are still registered.
    pub fn uninitialized(mut self) -> Self {
        self.initialize = false;
        self
    }

    /// Initialize the facade but do not create any table.
    pub fn without_tables(mut self) -> Self {
        self.create_tables = false;
        self
    }

    /// Insert an author. Requires blog models.
    pub fn with_author(mut self, name: &str) -> Self {
        self.authors.push(name.to_string());
        self
    }

    /// Insert a post for an author added with `with_author`. Requires blog models.
    pub fn with_post(mut self, author_name: &str, title: &str, published: bool) -> Self {
        self.posts
            .push((author_name.to_string(), title.to_string(), published));
        self
    }

    /// Build the test setup, executing all queued operations.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = if self.initialize {
            TestSetup::new().await?
        } else {
            TestSetup::uninitialized()
        };

        if self.include_blog_models {
            setup
                .db
                .model()
                .register(entity::prelude::Author)
                .register(entity::prelude::Post);
        }
        for register in self.models {
            register(&setup.db);
        }

        if !self.initialize {
            return Ok(setup);
        }

        if self.create_tables {
            setup.db.create_all().await?;
        }

        let conn = setup.db.connection()?;
        let mut authors = Vec::with_capacity(self.authors.len());
        for name in &self.authors {
            authors.push(factory::author(&conn, name).await?);
        }
        for (author_name, title, published) in &self.posts {
            let author = authors
                .iter()
                .find(|author| &author.name == author_name)
                .ok_or_else(|| {
                    sea_orm::DbErr::Custom(format!(
                        "Post fixture references unknown author {}",
                        author_name
                    ))
                })?;
            factory::post(&conn, author.id, title, *published).await?;
        }

        Ok(setup)
    }
}
