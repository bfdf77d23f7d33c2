//! HTTP routing and OpenAPI documentation configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/authors` - Create an author
/// - `GET /api/authors` - List authors
/// - `POST /api/authors/{author_id}/posts` - Create a post for an author
/// - `GET /api/authors/{author_id}/posts` - List an author's posts
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(Db::global().clone()));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "sea-ease", description = "sea-ease reference blog API"), tags(
        (name = controller::author::AUTHOR_TAG, description = "Author API routes"),
        (name = controller::post::POST_TAG, description = "Post API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::author::create_author,
            controller::author::list_authors
        ))
        .routes(routes!(
            controller::post::create_post,
            controller::post::list_posts
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
