use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Article, UpdateArticle},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    let articles = state.articles.read().await.list();

    info!(count = articles.len(), "Listed articles");

    Json(articles)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    let article = state
        .articles
        .read()
        .await
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no article with id '{}'", id)))?;

    info!(id = %id, "Fetched article");

    Ok(Json(article))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<Article>, JsonRejection>,
) -> AppResult<Json<Article>> {
    let Json(article) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let stored = state.articles.write().await.create(article);

    info!(id = %stored.id, title = %stored.title, "Created article");

    Ok(Json(stored))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_article(
    State(state): State<AppState>,
    payload: Result<Json<UpdateArticle>, JsonRejection>,
) -> AppResult<Json<Article>> {
    let Json(changes) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if changes.id.is_empty() {
        return Err(AppError::BadRequest("'id' is required.".to_string()));
    }

    let updated = state
        .articles
        .write()
        .await
        .update(&changes)
        .ok_or_else(|| AppError::NotFound(format!("no article with id '{}'", changes.id)))?;

    info!(id = %updated.id, "Updated article");

    Ok(Json(updated))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = state.articles.write().await.delete(&id);

    if !removed {
        return Err(AppError::NotFound(format!("no article with id '{}'", id)));
    }

    info!(id = %id, "Deleted article");

    Ok(StatusCode::OK)
}
