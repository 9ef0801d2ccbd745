use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ArticleStore;

/// Shared application state — cheap to clone (all heap behind Arc).
/// A single RwLock serializes every read-modify-write on the article list;
/// the original had no synchronization at all.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<RwLock<ArticleStore>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,article_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Article Service  —  Rust + Axum     ║");
    info!("╚══════════════════════════════════════╝");

    // One-shot relational bootstrap. Failures here are fatal: the insert is a
    // demonstration, not a dependency with retry semantics. The pool is held
    // for the process lifetime even though nothing queries it afterwards.
    let _db_pool = match &config.database_url {
        Some(url) => {
            info!("Connecting to PostgreSQL...");
            let pool = db::connect(url).await?;
            db::ensure_product_table(&pool).await?;
            let pk = db::insert_product(&pool, &seed::demo_product()).await?;
            info!(id = pk, "Inserted demonstration product");
            Some(pool)
        }
        None => {
            info!("DATABASE_URL not set; skipping product bootstrap");
            None
        }
    };

    let state = AppState {
        articles: Arc::new(RwLock::new(ArticleStore::with_articles(
            seed::seed_articles(),
        ))),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Home / health ───────────────────────────────────────────────────
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))

        // ── Articles ────────────────────────────────────────────────────────
        .route("/articles", get(handlers::articles::list_articles))
        .route(
            "/article",
            post(handlers::articles::create_article).put(handlers::articles::update_article),
        )
        .route(
            "/article/:id",
            get(handlers::articles::get_article).delete(handlers::articles::delete_article),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
