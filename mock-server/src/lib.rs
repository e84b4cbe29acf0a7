//! In-process stand-in for the Trakt API, used by the client's integration
//! tests.
//!
//! Read endpoints serve canned wire-format fixtures (see [`fixtures`]);
//! comments are backed by a real in-memory store so the full CRUD cycle can
//! be exercised. Endpoints that act on user data demand a bearer token, any
//! non-empty one.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub mod fixtures;

/// Shared state. Only comments are mutable; everything else is canned.
#[derive(Clone)]
pub struct AppState {
    comments: Arc<RwLock<HashMap<u32, Value>>>,
    next_comment_id: Arc<AtomicU32>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
            next_comment_id: Arc::new(AtomicU32::new(76957)),
        }
    }
}

#[derive(Deserialize)]
struct PageParams {
    page: Option<usize>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct ExtendedParams {
    extended: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/users/settings", get(user_settings))
        .route("/users/{username}", get(user_profile))
        .route("/users/{username}/collection/movies", get(collection_movies))
        .route("/users/{username}/collection/shows", get(collection_shows))
        .route("/users/{username}/history/movies", get(history_movies))
        .route("/users/{username}/history/episodes", get(history_episodes))
        .route("/users/{username}/watched/movies", get(watched_movies))
        .route("/users/{username}/watched/shows", get(watched_shows))
        .route("/users/{username}/ratings/movies", get(ratings_movies))
        .route("/users/{username}/ratings/shows", get(ratings_shows))
        .route("/users/{username}/lists", get(user_lists).post(create_list))
        .route("/comments", post(post_comment))
        .route(
            "/comments/{id}",
            get(get_comment).post(update_comment).delete(delete_comment),
        )
        .route("/movies/{id}", get(movie_summary))
        .route("/movies/{id}/people", get(movie_people))
        .route("/movies/{id}/ratings", get(movie_ratings))
        .route("/shows/{id}", get(show_summary))
        .route("/shows/{id}/people", get(show_people))
        .route("/shows/{id}/ratings", get(show_ratings))
        .route("/sync/collection", post(sync_add_collection))
        .route("/sync/collection/remove", post(sync_remove_collection))
        .route("/sync/history", post(sync_add_history))
        .route("/sync/ratings", post(sync_add_ratings))
        .with_state(AppState::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return false;
    };
    value
        .to_str()
        .unwrap_or_default()
        .strip_prefix("Bearer ")
        .is_some_and(|token| !token.is_empty())
}

fn known_user(username: &str) -> Result<(), StatusCode> {
    if username == fixtures::USERNAME {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

fn paginate(entries: Vec<Value>, params: &PageParams) -> Vec<Value> {
    let limit = params.limit.unwrap_or(10).max(1);
    let skip = params.page.unwrap_or(1).saturating_sub(1).saturating_mul(limit);
    entries.into_iter().skip(skip).take(limit).collect()
}

// --- users ---

async fn user_settings(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(fixtures::settings()))
}

async fn user_profile(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::profile()))
}

async fn collection_movies(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::movie_collection()))
}

async fn collection_shows(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::show_collection()))
}

async fn history_movies(
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    known_user(&username)?;
    Ok(Json(paginate(fixtures::movie_history(), &params)))
}

async fn history_episodes(
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    known_user(&username)?;
    Ok(Json(paginate(fixtures::episode_history(), &params)))
}

async fn watched_movies(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::watched_movies()))
}

async fn watched_shows(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::watched_shows()))
}

async fn ratings_movies(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::rated_movies()))
}

async fn ratings_shows(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::rated_shows()))
}

async fn user_lists(Path(username): Path<String>) -> Result<Json<Value>, StatusCode> {
    known_user(&username)?;
    Ok(Json(fixtures::lists()))
}

async fn create_list(
    headers: HeaderMap,
    Path(username): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    known_user(&username)?;
    let Some(name) = payload.get("name").and_then(Value::as_str) else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let slug = slugify(name);
    let mut list = payload.clone();
    if list.get("privacy").is_none() {
        list["privacy"] = json!("private");
    }
    list["created_at"] = json!(fixtures::LIST_CREATED_AT);
    list["updated_at"] = json!(fixtures::LIST_CREATED_AT);
    list["item_count"] = json!(0);
    list["comment_count"] = json!(0);
    list["likes"] = json!(0);
    list["ids"] = json!({"trakt": 55, "slug": slug});
    Ok((StatusCode::CREATED, Json(list)))
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

// --- comments ---

async fn post_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let Some(text) = payload.get("comment").and_then(Value::as_str) else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let id = state.next_comment_id.fetch_add(1, Ordering::Relaxed);
    let comment = json!({
        "id": id,
        "parent_id": 0,
        "created_at": fixtures::COMMENT_CREATED_AT,
        "comment": text,
        "spoiler": payload.get("spoiler").and_then(Value::as_bool).unwrap_or(false),
        "review": payload.get("review").and_then(Value::as_bool).unwrap_or(false),
        "replies": 0,
        "likes": 0,
        "user": fixtures::profile(),
    });
    state.comments.write().await.insert(id, comment.clone());
    tracing::debug!("comment {id} created");
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, StatusCode> {
    let comments = state.comments.read().await;
    comments.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut comments = state.comments.write().await;
    let comment = comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    for field in ["comment", "spoiler", "review"] {
        if let Some(value) = payload.get(field) {
            comment[field] = value.clone();
        }
    }
    Ok(Json(comment.clone()))
}

async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Result<StatusCode, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut comments = state.comments.write().await;
    comments
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- movies and shows ---

async fn movie_summary(
    Path(id): Path<String>,
    Query(params): Query<ExtendedParams>,
) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_tron_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let full = params.extended.as_deref().is_some_and(|e| e.contains("full"));
    Ok(Json(fixtures::tron_legacy(full)))
}

async fn movie_people(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_tron_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(fixtures::movie_credits()))
}

async fn movie_ratings(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_tron_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(fixtures::movie_rating_summary()))
}

async fn show_summary(
    Path(id): Path<String>,
    Query(params): Query<ExtendedParams>,
) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_breaking_bad_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let full = params.extended.as_deref().is_some_and(|e| e.contains("full"));
    Ok(Json(fixtures::breaking_bad(full)))
}

async fn show_people(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_breaking_bad_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(fixtures::show_credits()))
}

async fn show_ratings(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if !fixtures::is_breaking_bad_id(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(fixtures::show_rating_summary()))
}

// --- sync ---

async fn sync_add_collection(
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok((StatusCode::CREATED, Json(added_counters(&payload))))
}

async fn sync_remove_collection(
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(deleted_counters(&payload)))
}

async fn sync_add_history(
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok((StatusCode::CREATED, Json(added_counters(&payload))))
}

async fn sync_add_ratings(
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok((StatusCode::CREATED, Json(added_counters(&payload))))
}

fn added_counters(payload: &Value) -> Value {
    json!({
        "added": item_counts(payload),
        "existing": {"movies": 0, "shows": 0, "seasons": 0, "episodes": 0},
        "not_found": {"movies": [], "shows": [], "episodes": []}
    })
}

fn deleted_counters(payload: &Value) -> Value {
    json!({
        "deleted": item_counts(payload),
        "not_found": {"movies": [], "shows": [], "episodes": []}
    })
}

/// The real service expands shows into the episodes they cover; the mock
/// only counts what was posted, which is enough for the client tests.
fn item_counts(payload: &Value) -> Value {
    let movies = array_len(payload, "movies");
    let shows = array_len(payload, "shows");
    let episodes = array_len(payload, "episodes") + nested_episodes(payload);
    json!({"movies": movies, "shows": shows, "seasons": 0, "episodes": episodes})
}

fn array_len(payload: &Value, key: &str) -> usize {
    payload.get(key).and_then(Value::as_array).map_or(0, Vec::len)
}

fn nested_episodes(payload: &Value) -> usize {
    let Some(shows) = payload.get("shows").and_then(Value::as_array) else {
        return 0;
    };
    shows
        .iter()
        .flat_map(|show| {
            show.get("seasons")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
        })
        .map(|season| array_len(season, "episodes"))
        .sum()
}
