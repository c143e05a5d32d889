use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use marquee_config::CorsConfig;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    handlers::{
        health::{health_handler, ping_handler},
        movies::{
            create_movie_handler, get_movie_handler, list_movies_handler,
        },
    },
};

/// Route paths shared by the router and its tests.
pub mod paths {
    pub const MOVIES: &str = "/movies";
    pub const MOVIE: &str = "/movies/{imdb_id}";
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";

    pub fn movie(imdb_id: &str) -> String {
        MOVIE.replace("{imdb_id}", imdb_id)
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        build_cors_layer(&state.config().cors)
    };

    Router::new()
        .route(
            paths::MOVIES,
            get(list_movies_handler).post(create_movie_handler),
        )
        .route(paths::MOVIE, get(get_movie_handler))
        .route(paths::PING, get(ping_handler))
        .route(paths::HEALTH, get(health_handler))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter(|origin| origin.trim() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    // Method and header tokens were validated when the config was loaded.
    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
        .collect();
    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|header| HeaderName::from_bytes(header.as_bytes()).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use marquee_config::{
        Config, ConfigMetadata, ServerConfig, StorageConfig,
    };
    use marquee_core::InMemoryMovieStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(dev_mode: bool) -> Router {
        let config = Config {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            cors: CorsConfig::default(),
            dev_mode,
            metadata: ConfigMetadata::default(),
        };
        create_router(AppState::new(
            Arc::new(InMemoryMovieStore::new()),
            Arc::new(config),
        ))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri(paths::MOVIES)
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn movie_path_is_expanded() {
        assert_eq!(paths::movie("tt4154796"), "/movies/tt4154796");
    }

    #[tokio::test]
    async fn configured_origin_passes_preflight() {
        let response = router(false)
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn unknown_origin_gets_no_allow_header() {
        let response = router(false)
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn dev_mode_allows_any_origin() {
        let response = router(true)
            .oneshot(preflight("https://anywhere.example"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
