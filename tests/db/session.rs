use entity::prelude::*;
use futures::FutureExt;
use sea_ease::Error;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

use super::*;

fn new_author(name: &str) -> entity::author::ActiveModel {
    entity::author::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Expect a committed session to persist its changes and be released
#[tokio::test]
async fn commit_persists() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let session = test.session().await?;
    new_author("Ada").insert(&*session).await?;
    session.commit().await?;

    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Expect an error propagated out of the session scope to roll back and release it
#[tokio::test]
async fn error_releases_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .build()
        .await?;

    let scope = async {
        let session = test.session().await?;
        new_author("Grace").insert(&*session).await?;
        // Violates the unique constraint on author.name
        new_author("Ada").insert(&*session).await?;
        session.commit().await?;

        Ok::<(), TestError>(())
    };
    let result = scope.await;

    assert!(result.is_err());
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Expect a panic inside the session scope to roll back and release it
#[tokio::test]
async fn panic_releases_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let scope = async {
        let session = test.session().await.unwrap();
        new_author("Ada").insert(&*session).await.unwrap();
        panic!("consumer failed");
    };
    let result = std::panic::AssertUnwindSafe(scope).catch_unwind().await;

    assert!(result.is_err());
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}

/// Expect sessions opened one after another to be independent units of work
#[tokio::test]
async fn sequential_sessions_are_independent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let first = test.session().await?;
    new_author("Ada").insert(&*first).await?;
    first.rollback().await?;

    let second = test.session().await?;
    new_author("Grace").insert(&*second).await?;
    second.commit().await?;

    let authors = Author::find().all(&test.conn()?).await?;
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, "Grace");

    Ok(())
}

/// Expect with_session to commit on Ok
#[tokio::test]
async fn with_session_commits_on_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let author = test
        .db
        .with_session(|session| {
            Box::pin(async move {
                let author = new_author("Ada").insert(&**session).await?;
                Ok::<_, Error>(author)
            })
        })
        .await?;

    assert_eq!(author.name, "Ada");
    assert_eq!(Author::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Expect with_session to roll back on Err and return the error unchanged
#[tokio::test]
async fn with_session_rolls_back_on_err() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let result = test
        .db
        .with_session(|session| {
            Box::pin(async move {
                new_author("Ada").insert(&**session).await?;
                Err::<(), Error>(Error::NotInitialized)
            })
        })
        .await;

    assert!(matches!(result, Err(Error::NotInitialized)));
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}
