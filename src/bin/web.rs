//! Single binary web server exposing the league engine as stateless JSON endpoints.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Engine defaults come from MIN_MATCHES_PER_PLAYER, MIN_PARTICIPANTS, BRACKET_SIZE, PAIRING_STRATEGY.
//!
//! Nothing is stored between requests: callers send the roster and match records they hold and
//! persist whatever comes back.

use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use golf_league_engine::{
    aggregate_standings, build_bracket_with_size, champion, checked_in_pool, generate_group_matches,
    generate_matches, ready_bracket_matches, read_roster_csv, replace_pending_matches,
    resolve_bracket, resolve_groups_with_manual, score_match_play, BracketSlot, ClubGroup,
    Competitor, CompetitorId, EngineError, EngineSettings, GroupStandings, ManualGroup,
    MatchRecord, PairingStrategy, Scorecard,
};
use serde::Deserialize;
use std::collections::HashMap;

type Settings = Data<EngineSettings>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StandingsBody {
    competitors: Vec<Competitor>,
    #[serde(default)]
    matches: Vec<MatchRecord>,
}

#[derive(Deserialize)]
struct GroupsBody {
    club_counts: HashMap<String, u32>,
    min_participants: Option<u32>,
    #[serde(default)]
    manual_groups: Vec<ManualGroup>,
}

#[derive(Deserialize)]
struct GenerateBody {
    /// Strategy name; parsed here so unknown names map to `InvalidStrategy`.
    strategy: Option<String>,
    pool: Vec<Competitor>,
    /// Restrict the pool to these ids when present.
    checked_in: Option<Vec<CompetitorId>>,
    min_matches_per_player: Option<u32>,
    /// Generate per group instead of across the whole pool.
    #[serde(default)]
    groups: Vec<ClubGroup>,
    /// Current records; pending ones are replaced, completed ones kept.
    #[serde(default)]
    existing: Vec<MatchRecord>,
}

#[derive(Deserialize)]
struct BracketBody {
    groups: Vec<GroupStandings>,
    size: Option<usize>,
}

#[derive(Deserialize)]
struct ResolveBody {
    slots: Vec<BracketSlot>,
    #[serde(default)]
    matches: Vec<MatchRecord>,
}

fn bad_request(e: EngineError) -> HttpResponse {
    log::debug!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-league-engine",
    })
}

/// Ranked standings for the given competitors and matches.
#[post("/api/standings")]
async fn api_standings(body: Json<StandingsBody>) -> HttpResponse {
    HttpResponse::Ok().json(aggregate_standings(&body.matches, &body.competitors))
}

/// Resolve club groups (manual groups first, then automatic pooling).
#[post("/api/groups")]
async fn api_groups(settings: Settings, body: Json<GroupsBody>) -> HttpResponse {
    let min = body.min_participants.unwrap_or(settings.min_participants);
    HttpResponse::Ok().json(resolve_groups_with_manual(&body.club_counts, min, &body.manual_groups))
}

/// Generate pending matches and return the full replacement match list.
#[post("/api/matches/generate")]
async fn api_generate_matches(settings: Settings, body: Json<GenerateBody>) -> HttpResponse {
    let body = body.into_inner();
    let strategy = match body.strategy.as_deref() {
        Some(name) => match name.parse::<PairingStrategy>() {
            Ok(s) => s,
            Err(e) => return bad_request(e),
        },
        None => settings.strategy,
    };
    let min = body.min_matches_per_player.unwrap_or(settings.min_matches_per_player);
    let pool = match &body.checked_in {
        Some(ids) => checked_in_pool(&body.pool, ids),
        None => body.pool,
    };
    let generated = if body.groups.is_empty() {
        generate_matches(strategy, &pool, min)
    } else {
        generate_group_matches(strategy, &body.groups, &pool, min, &mut rand::thread_rng())
    };
    match generated {
        Ok(matches) => HttpResponse::Ok().json(replace_pending_matches(&body.existing, matches)),
        Err(e) => bad_request(e),
    }
}

/// Select qualifiers from group standings and lay out the bracket.
#[post("/api/bracket")]
async fn api_bracket(settings: Settings, body: Json<BracketBody>) -> HttpResponse {
    let size = body.size.unwrap_or(settings.bracket_size);
    match build_bracket_with_size(&body.groups, size) {
        Ok(slots) => HttpResponse::Ok().json(slots),
        Err(e) => bad_request(e),
    }
}

/// Current bracket state from match results, plus matches now ready to play.
#[post("/api/bracket/resolve")]
async fn api_resolve_bracket(body: Json<ResolveBody>) -> HttpResponse {
    let resolved = resolve_bracket(&body.slots, &body.matches);
    let ready = ready_bracket_matches(&body.slots, &body.matches);
    HttpResponse::Ok().json(serde_json::json!({
        "slots": resolved,
        "ready_matches": ready,
        "champion": champion(&resolved),
    }))
}

/// Score a match-play card into holes won per side.
#[post("/api/scorecards/score")]
async fn api_score_card(body: Json<Scorecard>) -> HttpResponse {
    match score_match_play(&body) {
        Ok(scored) => HttpResponse::Ok().json(scored),
        Err(e) => bad_request(e),
    }
}

/// Parse a `name,club,handicap` CSV body into competitors.
#[post("/api/roster/csv")]
async fn api_roster_csv(body: String) -> HttpResponse {
    match read_roster_csv(body.as_bytes()) {
        Ok(roster) => HttpResponse::Ok().json(roster),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let settings = EngineSettings::from_env();
    log::info!("Engine settings: {:?}", settings);
    log::info!("Starting server at http://{}:{}", host, port);

    let settings = Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .service(api_health)
            .service(api_standings)
            .service(api_groups)
            .service(api_generate_matches)
            .service(api_bracket)
            .service(api_resolve_bracket)
            .service(api_score_card)
            .service(api_roster_csv)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
