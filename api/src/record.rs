use crate::GameRecord;
use crate::schedule::RawGame;
use crate::status::classify;
use chrono::{DateTime, Local, TimeZone};
use log::warn;
use std::fmt;

const LOGO_BASE: &str =
    "https://www-league.nhlstatic.com/images/logos/teams-current-primary-light";
const UNKNOWN_START: &str = "TBD";

/// Team logo URL, a pure function of the team id.
pub fn logo_url(team_id: u32) -> String {
    format!("{LOGO_BASE}/{team_id}.svg")
}

/// Build a display record with the start time on the local clock.
pub fn build(game: &RawGame) -> GameRecord {
    build_in(game, &Local)
}

/// Build a display record with the start time rendered in `tz`.
pub fn build_in<Tz>(game: &RawGame, tz: &Tz) -> GameRecord
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let classification = classify(game);
    let home = &game.teams.home.team;
    let away = &game.teams.away.team;

    GameRecord {
        id: game.game_pk,
        start_time: start_time(game, tz),
        status: classification.status,
        period: classification.period,
        home: home.name.clone(),
        home_goals: classification.home_goals,
        home_logo: logo_url(home.id),
        away: away.name.clone(),
        away_goals: classification.away_goals,
        away_logo: logo_url(away.id),
    }
}

fn start_time<Tz>(game: &RawGame, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match DateTime::parse_from_rfc3339(&game.game_date) {
        Ok(instant) => instant.with_timezone(tz).format("%-H:%M").to_string(),
        Err(e) => {
            warn!("game {}: bad gameDate {:?}: {e}", game.game_pk, game.game_date);
            UNKNOWN_START.into()
        }
    }
}
