use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
///
/// The alias routes (/async/books, /promise/*) are intentionally absent:
/// they share the contract of their primary routes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bookstore-gateway API",
        version = "1.0.0",
        description = "HTTP gateway re-exposing a remote book-catalog API"
    ),
    paths(
        handlers::health::health_handler,
        handlers::books::list_books_handler,
        handlers::books::book_by_isbn_handler,
        handlers::books::books_by_author_handler,
        handlers::books::books_by_title_handler,
        handlers::reviews::review_by_isbn_handler,
        handlers::reviews::add_review_handler,
        handlers::reviews::delete_review_handler,
        handlers::users::register_handler,
        handlers::users::login_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "books", description = "Book catalog lookups forwarded to the upstream API"),
        (name = "reviews", description = "Book review operations forwarded to the upstream API"),
        (name = "users", description = "User registration and login passthrough")
    )
)]
pub struct ApiDoc;
