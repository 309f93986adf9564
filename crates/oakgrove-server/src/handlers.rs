//! Endpoint handlers for the action API.
//!
//! Every player-scoped handler runs the same pipeline under that
//! player's lock:
//!
//! 1. Fetch the record (missing record is a recoverable "start again"
//!    error with nothing mutated).
//! 2. Commit the energy regeneration pass.
//! 3. Run the companion gate, healing in place when the rest elapsed.
//! 4. Apply the action's transition.
//! 5. Persist and render the [`ActionOutcome`].
//!
//! Rejections coming out of steps 3-4 are `200` outcomes with
//! explanatory text, matching the legacy bot's behavior of replying
//! in-channel rather than erroring.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use chrono::{DateTime, Utc};

use oakgrove_core::companion::{CompanionCheck, check_companion};
use oakgrove_core::energy::apply_regen;
use oakgrove_core::explore::{ExploreOutcome, explore};
use oakgrove_core::stars::{StarOutcome, collect_stars};
use oakgrove_db::PlayerStore;
use oakgrove_types::{ActionOutcome, ExploreSite, PlayerId};

use crate::error::ApiError;
use crate::messages;
use crate::state::AppState;

/// Query parameters for the `POST /api/players/{id}/start` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct StartQuery {
    /// Display name captured at first contact, if the platform has one.
    pub display_name: Option<String>,
}

/// Result of the shared fetch-regen-gate prelude.
enum Gate {
    /// The action proceeds with the refreshed record.
    Proceed(oakgrove_types::PlayerRecord),
    /// The companion is resting; the rejection outcome is final.
    Resting(ActionOutcome),
}

/// Fetch the record, commit regeneration, and run the companion gate.
///
/// Both branches persist the regeneration (and any in-place heal)
/// before returning, so a rejected action still refreshes energy.
async fn load_and_gate(
    state: &AppState,
    player: PlayerId,
    now: DateTime<Utc>,
) -> Result<Gate, ApiError> {
    let store = PlayerStore::new(state.pool.pool());
    let mut record = store.fetch(player).await?.ok_or(ApiError::NotStarted)?;

    apply_regen(&mut record, now, &state.config.energy);

    if let CompanionCheck::Resting { minutes_left } = check_companion(&mut record, now) {
        store.update(&record).await?;
        return Ok(Gate::Resting(messages::companion_resting(minutes_left)));
    }

    store.update(&record).await?;
    Ok(Gate::Proceed(record))
}

/// `GET /` -- minimal HTML status page for operators.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let time = state.clock.at(Utc::now());
    let phase = if time.is_night { "Night" } else { "Day" };
    Html(format!(
        r"<!DOCTYPE html>
<html lang=en>
<head><meta charset=utf-8><title>Oakgrove</title></head>
<body>
<h1>Zagros Oak Forest</h1>
<p>Forest time: {phase}, day {day}/{days}</p>
<ul>
<li>GET /api/time</li>
<li>GET /api/help</li>
<li>POST /api/players/:id/start</li>
<li>GET /api/players/:id</li>
<li>POST /api/players/:id/explore</li>
<li>POST /api/players/:id/explore/:site</li>
<li>POST /api/players/:id/stars</li>
<li>POST /api/players/:id/stars/catch</li>
</ul>
</body>
</html>",
        day = time.day,
        days = state.clock.days_per_cycle(),
    ))
}

/// `GET /api/time` -- the current forest time.
pub async fn get_time(State(state): State<Arc<AppState>>) -> Json<oakgrove_core::GameTime> {
    Json(state.clock.at(Utc::now()))
}

/// `GET /api/help` -- the game guide.
pub async fn get_help(State(state): State<Arc<AppState>>) -> Json<ActionOutcome> {
    Json(messages::help_guide(&state.config))
}

/// `POST /api/players/{id}/start` -- first contact.
///
/// Creates the record with game defaults if the player is new,
/// otherwise leaves the existing record untouched, and replies with
/// the welcome message either way.
pub async fn start(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<StartQuery>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    let store = PlayerStore::new(state.pool.pool());
    let record = store
        .ensure(player, query.display_name.as_deref(), now)
        .await?;

    tracing::info!(player = %player, "player started");
    let time = state.clock.at(now);
    Ok(Json(messages::welcome(
        &record,
        &time,
        state.clock.days_per_cycle(),
    )))
}

/// `GET /api/players/{id}` -- the status report.
///
/// Runs the full pipeline like every other action: energy is
/// regenerated and persisted, and a resting companion answers with the
/// rest message instead of the report.
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    let record = match load_and_gate(&state, player, now).await? {
        Gate::Resting(outcome) => return Ok(Json(outcome)),
        Gate::Proceed(record) => record,
    };

    let time = state.clock.at(now);
    Ok(Json(messages::status_report(
        &record,
        &time,
        &state.config,
        state.clock.days_per_cycle(),
    )))
}

/// `POST /api/players/{id}/explore` -- the exploration site menu.
///
/// Checks energy up front so the menu is never offered to a player who
/// cannot afford an exploration; the resolution re-checks anyway.
pub async fn explore_menu(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    let record = match load_and_gate(&state, player, now).await? {
        Gate::Resting(outcome) => return Ok(Json(outcome)),
        Gate::Proceed(record) => record,
    };

    if record.energy < state.config.energy.explore_cost {
        return Ok(Json(messages::tired()));
    }

    Ok(Json(messages::site_menu(
        record.energy,
        state.config.energy.cap,
    )))
}

/// `POST /api/players/{id}/explore/{site}` -- resolve one exploration.
pub async fn explore_site(
    State(state): State<Arc<AppState>>,
    Path((id, site)): Path<(i64, String)>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let site = match ExploreSite::parse(&site) {
        Ok(parsed) => parsed,
        Err(e) => return Err(ApiError::InvalidSite(e.to_string())),
    };

    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    let mut record = match load_and_gate(&state, player, now).await? {
        Gate::Resting(outcome) => return Ok(Json(outcome)),
        Gate::Proceed(record) => record,
    };

    let outcome = {
        let mut rng = rand::rng();
        explore(&mut record, site, now, &state.config, &mut rng)?
    };

    let store = PlayerStore::new(state.pool.pool());
    store.update(&record).await?;

    let reply = match outcome {
        ExploreOutcome::TooTired => messages::tired(),
        ExploreOutcome::Hazard { hazard, .. } => {
            messages::hazard_struck(hazard, state.config.companion.recovery_hours)
        }
        ExploreOutcome::Found {
            site,
            acorns_found,
            level_up,
        } => messages::explore_found(site, acorns_found, level_up),
    };
    Ok(Json(reply))
}

/// `POST /api/players/{id}/stars` -- offer stars, night only.
pub async fn stars_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    if let Gate::Resting(outcome) = load_and_gate(&state, player, now).await? {
        return Ok(Json(outcome));
    }

    let time = state.clock.at(now);
    let outcome = {
        let mut rng = rand::rng();
        collect_stars(&time, &state.config.stars, &mut rng)
    };

    let reply = match outcome {
        StarOutcome::Daytime { hours_to_night } => messages::daytime(hours_to_night),
        StarOutcome::Offered { visible } => messages::stars_offered(visible),
    };
    Ok(Json(reply))
}

/// `POST /api/players/{id}/stars/catch` -- catch one offered star.
///
/// Whichever star the player picked, the counter goes up by exactly
/// one; the increment is a single atomic statement in the store.
pub async fn stars_catch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let player = PlayerId::new(id);
    let lock = state.locks.handle(player).await;
    let _guard = lock.lock().await;

    let now = Utc::now();
    if let Gate::Resting(outcome) = load_and_gate(&state, player, now).await? {
        return Ok(Json(outcome));
    }

    let store = PlayerStore::new(state.pool.pool());
    let stars = store
        .increment_stars(player)
        .await?
        .ok_or(ApiError::NotStarted)?;

    tracing::debug!(player = %player, stars, "star caught");
    Ok(Json(messages::star_caught()))
}
