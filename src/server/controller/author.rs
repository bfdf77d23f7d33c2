use axum::{http::StatusCode, response::IntoResponse, Json};
use sea_orm::SqlErr;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        blog::{AuthorDto, NewAuthorDto},
    },
    server::data::author::AuthorRepository,
    DbSession,
};

pub static AUTHOR_TAG: &str = "author";

/// Create an author
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    request_body = NewAuthorDto,
    responses(
        (status = 201, description = "Author created", body = AuthorDto),
        (status = 400, description = "Author name is empty", body = ErrorDto),
        (status = 409, description = "Author name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    session: DbSession,
    Json(payload): Json<NewAuthorDto>,
) -> Result<impl IntoResponse, Error> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Author name must not be empty".to_string(),
            }),
        )
            .into_response());
    }

    // Uniqueness is enforced by the constraint on author.name
    let author = match AuthorRepository::new(&*session).create(name.clone()).await {
        Ok(author) => author,
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Ok((
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("Author {} already exists", name),
                }),
            )
                .into_response());
        }
        Err(err) => return Err(err.into()),
    };
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(AuthorDto::from(author))).into_response())
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Success when listing authors", body = Vec<AuthorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_authors(session: DbSession) -> Result<impl IntoResponse, Error> {
    let authors = AuthorRepository::new(&*session).list().await?;

    let author_dtos: Vec<AuthorDto> = authors.into_iter().map(AuthorDto::from).collect();

    Ok((StatusCode::OK, Json(author_dtos)))
}
