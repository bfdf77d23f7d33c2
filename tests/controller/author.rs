//! Tests for the author endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};
use entity::prelude::*;
use sea_ease::{
    model::blog::NewAuthorDto,
    server::controller::author::{create_author, list_authors},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests creating an author.
///
/// Expected: Ok with 201 CREATED and the author persisted after the session is committed
#[tokio::test]
async fn create_author_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let session = test.session().await?;
    let result = create_author(
        session,
        Json(NewAuthorDto {
            name: "Ada".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Tests creating an author with a blank name.
///
/// Expected: Ok with 400 BAD REQUEST and nothing persisted
#[tokio::test]
async fn create_author_rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().build().await?;

    let session = test.session().await?;
    let result = create_author(
        session,
        Json(NewAuthorDto {
            name: "   ".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 0);

    Ok(())
}

/// Tests creating an author whose name is taken.
///
/// The insert itself hits the unique constraint, as the losing request of two concurrent
/// creations would.
///
/// Expected: Ok with 409 CONFLICT, the session rolled back and released
#[tokio::test]
async fn create_author_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .build()
        .await?;

    let session = test.session().await?;
    let result = create_author(
        session,
        Json(NewAuthorDto {
            name: "Ada".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(test.db.active_sessions(), 0);
    assert_eq!(Author::find().count(&test.conn()?).await?, 1);

    Ok(())
}

/// Tests creating an author when the tables are missing.
///
/// Expected: Err with 500 INTERNAL SERVER ERROR and the session released
#[tokio::test]
async fn create_author_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_models().without_tables().build().await?;

    let session = test.session().await?;
    let result = create_author(
        session,
        Json(NewAuthorDto {
            name: "Ada".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test.db.active_sessions(), 0);

    Ok(())
}

/// Tests listing authors.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn list_authors_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_models()
        .with_author("Ada")
        .with_author("Grace")
        .build()
        .await?;

    let session = test.session().await?;
    let result = list_authors(session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.db.active_sessions(), 0);

    Ok(())
}
