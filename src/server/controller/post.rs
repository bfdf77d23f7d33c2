use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        blog::{NewPostDto, PostDto},
    },
    server::data::{author::AuthorRepository, post::PostRepository},
    DbSession,
};

pub static POST_TAG: &str = "post";

fn author_not_found(author_id: i32) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: format!("Author {} not found", author_id),
        }),
    )
        .into_response()
}

/// Create a post for an author
#[utoipa::path(
    post,
    path = "/api/authors/{author_id}/posts",
    tag = POST_TAG,
    params(("author_id" = i32, Path, description = "Author ID")),
    request_body = NewPostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Post title is empty", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    session: DbSession,
    Path(author_id): Path<i32>,
    Json(payload): Json<NewPostDto>,
) -> Result<impl IntoResponse, Error> {
    if payload.title.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Post title must not be empty".to_string(),
            }),
        )
            .into_response());
    }

    if AuthorRepository::new(&*session)
        .get(author_id)
        .await?
        .is_none()
    {
        return Ok(author_not_found(author_id));
    }

    let post = PostRepository::new(&*session)
        .create(author_id, payload.title, payload.body, payload.published)
        .await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(post))).into_response())
}

/// List an author's posts
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/posts",
    tag = POST_TAG,
    params(("author_id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Success when listing posts", body = Vec<PostDto>),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    session: DbSession,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if AuthorRepository::new(&*session)
        .get(author_id)
        .await?
        .is_none()
    {
        return Ok(author_not_found(author_id));
    }

    let posts = PostRepository::new(&*session)
        .get_by_author_id(author_id)
        .await?;

    let post_dtos: Vec<PostDto> = posts.into_iter().map(PostDto::from).collect();

    Ok((StatusCode::OK, Json(post_dtos)).into_response())
}
