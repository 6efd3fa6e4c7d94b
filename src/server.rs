use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use thiserror::Error;

use crate::dao::{JsonFileDao, MovieDao};
use crate::queries;
use crate::server::AppError::{InvalidMovieId, MissingMovieId, MovieNotFound};
use crate::types::{MaxCommenter, Movie, Movies};

#[derive(Clone)]
pub struct AppState {
    pub dao: std::sync::Arc<dyn MovieDao + Send + Sync>,
}

impl AppState {
    pub fn load(args: &crate::Args) -> AppState {
        AppState {
            dao: std::sync::Arc::new(JsonFileDao::new(args.movies_path.clone())),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no id provided for the movie")]
    MissingMovieId,

    #[error("the id provided is not a number: {0}")]
    InvalidMovieId(String),

    #[error("movie {0} is not present in the database")]
    MovieNotFound(i64),

    // その他の予期せぬエラー: Anyhowにラップして任せる
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingMovieId => (
                StatusCode::BAD_REQUEST,
                "no id provided for the movie".to_string(),
            ),
            AppError::InvalidMovieId(id) => (
                StatusCode::BAD_REQUEST,
                format!("the id provided is not a number: {}", id),
            ),
            AppError::MovieNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("movie {} is not present in the database", id),
            ),
            // 予期せぬエラー (JSONが壊れている、ファイルが無い)
            AppError::Unexpected(err) => {
                tracing::error!("Internal Server Error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };
        (status, message).into_response()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(handle_get_movies))
        .route("/movies/:id", get(handle_get_movie))
        .route("/comments", get(handle_most_comments))
        .route("/likes", get(handle_most_likes))
        .with_state(state)
}

pub async fn handle_get_movies(State(state): State<AppState>) -> Result<Json<Movies>, AppError> {
    let movies = state.dao.fetch_all()?;
    Ok(Json(queries::list_all(movies)))
}

pub async fn handle_get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    if id.is_empty() {
        return Err(MissingMovieId);
    }
    let id: i64 = id.parse().map_err(|_| InvalidMovieId(id))?;

    let movies = state.dao.fetch_all()?;
    let movie = queries::find_by_id(&movies, id).ok_or(MovieNotFound(id))?;
    Ok(Json(movie.clone()))
}

pub async fn handle_most_comments(
    State(state): State<AppState>,
) -> Result<Json<MaxCommenter>, AppError> {
    let movies = state.dao.fetch_all()?;
    Ok(Json(queries::most_prolific_commenter(&movies)))
}

pub async fn handle_most_likes(State(state): State<AppState>) -> Result<Json<Movie>, AppError> {
    let movies = state.dao.fetch_all()?;
    Ok(Json(queries::most_liked(&movies)))
}
