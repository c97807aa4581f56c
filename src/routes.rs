// Route path constants - single source of truth for all API paths

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const BOOKS: &str = "/books";
pub const BOOK_BY_ISBN: &str = "/books/isbn/{isbn}";
pub const BOOKS_BY_AUTHOR: &str = "/books/author/{author}";
pub const BOOKS_BY_TITLE: &str = "/books/title/{title}";
pub const REVIEWS_BY_ISBN: &str = "/books/review/{isbn}";
pub const REVIEWS: &str = "/books/review";
pub const REGISTER: &str = "/register";
pub const LOGIN: &str = "/login";

// Alias paths: same forwarding contract as their primary routes, kept on the
// public surface for compatibility with older clients.
pub const ASYNC_BOOKS: &str = "/async/books";
pub const PROMISE_ISBN: &str = "/promise/isbn/{isbn}";
pub const PROMISE_AUTHOR: &str = "/promise/author/{author}";
pub const PROMISE_TITLE: &str = "/promise/title/{title}";

/// Immutable mapping from a local endpoint to an upstream endpoint.
///
/// Descriptors are defined once below and never change for the process
/// lifetime. `upstream_path` may contain `{name}` segments filled from the
/// inbound request's path parameters; `error_message` is the fixed text
/// returned to the caller when the outbound call fails.
pub struct RouteDescriptor {
    pub method: Method,
    pub local_path: &'static str,
    pub upstream_path: &'static str,
    pub forwards_body: bool,
    pub error_message: &'static str,
}

pub static LIST_BOOKS: RouteDescriptor = RouteDescriptor {
    method: Method::GET,
    local_path: BOOKS,
    upstream_path: "/books",
    forwards_body: false,
    error_message: "Error fetching books list",
};

pub static BOOK_LOOKUP: RouteDescriptor = RouteDescriptor {
    method: Method::GET,
    local_path: BOOK_BY_ISBN,
    upstream_path: "/books/{isbn}",
    forwards_body: false,
    error_message: "Error fetching book by ISBN",
};

pub static AUTHOR_LOOKUP: RouteDescriptor = RouteDescriptor {
    method: Method::GET,
    local_path: BOOKS_BY_AUTHOR,
    upstream_path: "/books/author/{author}",
    forwards_body: false,
    error_message: "Error fetching books by author",
};

pub static TITLE_LOOKUP: RouteDescriptor = RouteDescriptor {
    method: Method::GET,
    local_path: BOOKS_BY_TITLE,
    upstream_path: "/books/title/{title}",
    forwards_body: false,
    error_message: "Error fetching books by title",
};

pub static REVIEW_LOOKUP: RouteDescriptor = RouteDescriptor {
    method: Method::GET,
    local_path: REVIEWS_BY_ISBN,
    upstream_path: "/books/review/{isbn}",
    forwards_body: false,
    error_message: "Error fetching book review",
};

pub static REVIEW_UPSERT: RouteDescriptor = RouteDescriptor {
    method: Method::POST,
    local_path: REVIEWS,
    upstream_path: "/books/review",
    forwards_body: true,
    error_message: "Error adding/modifying review",
};

pub static REVIEW_DELETE: RouteDescriptor = RouteDescriptor {
    method: Method::DELETE,
    local_path: REVIEWS_BY_ISBN,
    upstream_path: "/books/review/{isbn}",
    forwards_body: false,
    error_message: "Error deleting book review",
};

pub static USER_REGISTRATION: RouteDescriptor = RouteDescriptor {
    method: Method::POST,
    local_path: REGISTER,
    upstream_path: "/register",
    forwards_body: true,
    error_message: "Error registering user",
};

pub static USER_LOGIN: RouteDescriptor = RouteDescriptor {
    method: Method::POST,
    local_path: LOGIN,
    upstream_path: "/login",
    forwards_body: true,
    error_message: "Error logging in user",
};

/// Assemble the full inbound surface.
///
/// The alias routes are registered on the same handlers as their primaries;
/// they share descriptors, upstream targets, and error messages.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(BOOKS, get(handlers::list_books_handler))
        .route(BOOK_BY_ISBN, get(handlers::book_by_isbn_handler))
        .route(BOOKS_BY_AUTHOR, get(handlers::books_by_author_handler))
        .route(BOOKS_BY_TITLE, get(handlers::books_by_title_handler))
        .route(
            REVIEWS_BY_ISBN,
            get(handlers::review_by_isbn_handler).delete(handlers::delete_review_handler),
        )
        .route(REVIEWS, post(handlers::add_review_handler))
        .route(REGISTER, post(handlers::register_handler))
        .route(LOGIN, post(handlers::login_handler))
        .route(ASYNC_BOOKS, get(handlers::list_books_handler))
        .route(PROMISE_ISBN, get(handlers::book_by_isbn_handler))
        .route(PROMISE_AUTHOR, get(handlers::books_by_author_handler))
        .route(PROMISE_TITLE, get(handlers::books_by_title_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::UpstreamClient;
    use axum::{body::Body, http::Request, http::StatusCode, Json};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn spawn_permissive_upstream() -> String {
        // Answers every method on every path, so a local 404/405 can only
        // come from the gateway's own routing table.
        async fn ok() -> Json<serde_json::Value> {
            Json(serde_json::json!({ "ok": true }))
        }

        let stub = Router::new().fallback(ok);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn gateway_app(upstream_base_url: &str) -> Router {
        let config = Config {
            upstream_base_url: upstream_base_url.to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let upstream =
            UpstreamClient::from_config(&config).expect("Failed to build upstream client");
        let state = AppState {
            upstream,
            config: Arc::new(config),
        };
        router(state)
    }

    #[tokio::test]
    async fn test_all_routes_are_registered() {
        let base_url = spawn_permissive_upstream().await;
        let app = gateway_app(&base_url);

        let surface = [
            ("GET", "/books"),
            ("GET", "/books/isbn/0136091814"),
            ("GET", "/books/author/Chinua%20Achebe"),
            ("GET", "/books/title/Things%20Fall%20Apart"),
            ("GET", "/books/review/0136091814"),
            ("POST", "/register"),
            ("POST", "/login"),
            ("POST", "/books/review"),
            ("DELETE", "/books/review/0136091814"),
            ("GET", "/async/books"),
            ("GET", "/promise/isbn/0136091814"),
            ("GET", "/promise/author/Chinua%20Achebe"),
            ("GET", "/promise/title/Things%20Fall%20Apart"),
        ];

        for (method, path) in surface {
            let request = if method == "POST" {
                Request::builder()
                    .method(method)
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap()
            } else {
                Request::builder()
                    .method(method)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap()
            };

            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::OK,
                "{method} {path} should be routed and forwarded"
            );
        }
    }
}
