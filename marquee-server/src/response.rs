use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_model::Movie;
use serde_json::{Value, json};

/// Successful catalog outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieReply {
    Listed(Vec<Movie>),
    Found(Movie),
    Created(Movie),
}

impl MovieReply {
    pub fn status_and_body(&self) -> (StatusCode, Value) {
        match self {
            MovieReply::Listed(movies) => (StatusCode::OK, json!(movies)),
            MovieReply::Found(movie) => (StatusCode::OK, json!(movie)),
            MovieReply::Created(movie) => (StatusCode::CREATED, json!(movie)),
        }
    }
}

impl IntoResponse for MovieReply {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
