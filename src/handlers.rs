use crate::catalog::DuaSection;
use crate::errors::AppError;
use crate::models::{ActionResponse, DuaQuery, PrayerQuery, SessionCreated, StatsResponse};
use crate::remote::{PrayerTimes, Surah, SurahSummary};
use crate::session::{Action, Session};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::store::CounterEntry;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use tracing::info;
use uuid::Uuid;

const SURAH_COUNT: u16 = 114;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.catalog))
}

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let id = Uuid::new_v4();
    let session = Session::new(&state.catalog, state.config.report_page_rows);
    state.sessions.lock().await.insert(id, session);
    info!(%id, "session started");
    (StatusCode::CREATED, Json(SessionCreated { id }))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    match state.sessions.lock().await.remove(&id) {
        Some(_) => {
            info!(%id, "session ended");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(unknown_session(id)),
    }
}

pub async fn dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<Action>,
) -> Result<Json<ActionResponse>, AppError> {
    let response = run_action(&state, id, action).await?;
    Ok(Json(response))
}

pub async fn get_visible(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CounterEntry>>, AppError> {
    let visible = with_session(&state, id, |session| session.visible()).await?;
    Ok(Json(visible))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = with_session(&state, id, |session| build_stats(session.store())).await?;
    Ok(Json(stats))
}

pub async fn export_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = with_session(&state, id, |session| session.export()).await?;
    let filename = format!(
        "attachment; filename=\"dhikr-report-{}.txt\"",
        Local::now().date_naive()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        document,
    ))
}

pub async fn import_counts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: String,
) -> Result<Json<ActionResponse>, AppError> {
    let response = run_action(&state, id, Action::Import { text: body }).await?;
    Ok(Json(response))
}

pub async fn get_duas(
    State(state): State<AppState>,
    Query(query): Query<DuaQuery>,
) -> Json<Vec<DuaSection>> {
    Json(state.catalog.duas(query.category))
}

pub async fn get_surahs(State(state): State<AppState>) -> Json<Vec<SurahSummary>> {
    Json(state.remote.surahs().await)
}

pub async fn get_surah(
    State(state): State<AppState>,
    Path(number): Path<u16>,
) -> Result<Json<Surah>, AppError> {
    if !(1..=SURAH_COUNT).contains(&number) {
        return Err(AppError::bad_request(format!(
            "surah number must be between 1 and {SURAH_COUNT}"
        )));
    }
    state
        .remote
        .surah(number)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("no data"))
}

pub async fn get_prayer_times(
    State(state): State<AppState>,
    Query(query): Query<PrayerQuery>,
) -> Result<Json<PrayerTimes>, AppError> {
    let city = query.city.trim();
    if city.is_empty() {
        return Err(AppError::bad_request("Please enter a city."));
    }
    state
        .remote
        .prayer_times(city, query.country.trim())
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found("Could not fetch prayer times. Please check your city name.")
        })
}

async fn run_action(state: &AppState, id: Uuid, action: Action) -> Result<ActionResponse, AppError> {
    with_session(state, id, |session| {
        let reply = session.dispatch(action);
        ActionResponse::new(reply, session)
    })
    .await
}

async fn with_session<T>(
    state: &AppState,
    id: Uuid,
    work: impl FnOnce(&mut Session) -> T,
) -> Result<T, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(&id).ok_or_else(|| unknown_session(id))?;
    Ok(work(session))
}

fn unknown_session(id: Uuid) -> AppError {
    AppError::not_found(format!("unknown session {id}"))
}
