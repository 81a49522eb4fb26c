use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/sessions", post(handlers::create_session))
        .route("/api/sessions/:id", delete(handlers::end_session))
        .route("/api/sessions/:id/actions", post(handlers::dispatch))
        .route("/api/sessions/:id/visible", get(handlers::get_visible))
        .route("/api/sessions/:id/stats", get(handlers::get_stats))
        .route("/api/sessions/:id/export", get(handlers::export_report))
        .route("/api/sessions/:id/import", post(handlers::import_counts))
        .route("/api/duas", get(handlers::get_duas))
        .route("/api/quran/surahs", get(handlers::get_surahs))
        .route("/api/quran/surahs/:number", get(handlers::get_surah))
        .route("/api/prayer-times", get(handlers::get_prayer_times))
        .with_state(state)
}
