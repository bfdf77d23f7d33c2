use entity::prelude::*;
use sea_ease::{Db, EngineOptions, Error};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect every database operation to fail with Error::NotInitialized before init_app
#[tokio::test]
async fn operations_fail_before_init() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().uninitialized().build().await?;

    assert!(!test.db.is_initialized());
    assert!(matches!(test.db.connection(), Err(Error::NotInitialized)));
    assert!(matches!(test.db.ping().await, Err(Error::NotInitialized)));
    assert!(matches!(test.db.create_all().await, Err(Error::NotInitialized)));
    assert!(matches!(test.db.drop_all().await, Err(Error::NotInitialized)));
    assert!(matches!(test.db.session().await, Err(Error::NotInitialized)));

    Ok(())
}

/// Expect models to be registrable before the facade is initialized
#[tokio::test]
async fn registers_models_before_init() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().uninitialized().build().await?;

    assert_eq!(test.db.model().table_names(), vec!["author", "post"]);

    test.db.init_app("sqlite::memory:", EngineOptions::new()).await?;
    test.db.create_all().await?;

    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}

/// Expect create_all to create registered tables and skip them when they already exist
#[tokio::test]
async fn create_all_is_repeatable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .build()
        .await?;

    test.db.create_all().await?;

    assert_eq!(Author::find().count(&test.conn()?).await?, 1);
    assert_eq!(Post::find().count(&test.conn()?).await?, 0);

    Ok(())
}

/// Expect drop_all to remove registered tables, and a second call to do nothing
#[tokio::test]
async fn drop_all_removes_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .with_post("Ada", "First", true)
        .build()
        .await?;

    test.db.drop_all().await?;
    test.db.drop_all().await?;

    assert!(Author::find().all(&test.conn()?).await.is_err());
    assert!(Post::find().all(&test.conn()?).await.is_err());

    Ok(())
}

/// Expect tables to be empty after dropping and creating them again
#[tokio::test]
async fn drop_then_create_resets_data() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .build()
        .await?;

    test.db.drop_all().await?;
    test.db.create_all().await?;

    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}

/// Expect the macro to register and create tables for the given models
#[tokio::test]
async fn macro_creates_given_models() -> Result<(), TestError> {
    let test = test_setup_with_models!(Author, Post)?;

    let author = test.insert_author("Grace").await?;
    test.insert_post(author.id, "Compilers", false).await?;

    assert_eq!(Post::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Expect a connection failure to leave the facade uninitialized
#[tokio::test]
async fn failed_init_keeps_facade_uninitialized() {
    let db = Db::isolated();

    let result = db
        .init_app("sqlite:///nonexistent-dir/sea-ease/app.db", EngineOptions::new())
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert!(!db.is_initialized());
}

/// Expect close to return the facade to the uninitialized state
#[tokio::test]
async fn close_uninitializes() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    test.db.ping().await?;
    test.db.close().await?;

    assert!(!test.db.is_initialized());
    assert!(matches!(test.db.session().await, Err(Error::NotInitialized)));

    // Closing twice does nothing
    test.db.close().await?;

    Ok(())
}

/// Expect init_app on an initialized facade to switch to the new engine
#[tokio::test]
async fn reinit_replaces_engine() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .build()
        .await?;

    test.db.init_app("sqlite::memory:", EngineOptions::new()).await?;

    // The new in-memory database has no tables yet
    assert!(Author::find().all(&test.conn()?).await.is_err());
    test.db.create_all().await?;
    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}
