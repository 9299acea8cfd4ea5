use crate::schedule::{RawGame, RawLinescore};
use crate::{GameStatus, Goals};
use log::warn;

const SCHEDULED_STATE: &str = "Scheduled";
const FINAL_STATE: &str = "Final";
const NOT_STARTED_PERIOD: &str = "N/A";
const FINAL_PERIOD: &str = "Final";

/// Status plus the score and period fields derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: GameStatus,
    pub home_goals: Goals,
    pub away_goals: Goals,
    pub period: String,
}

/// Classify a raw game by its `detailedState`.
///
/// Anything that is neither "Scheduled" nor "Final" is treated as live, but
/// only when the linescore actually carries the period and both goal counts.
/// Otherwise the game is `Unrecognized` and shows the raw state as its period.
pub fn classify(game: &RawGame) -> Classification {
    let state = game.status.detailed_state.as_str();
    match state {
        SCHEDULED_STATE => Classification {
            status: GameStatus::Scheduled,
            home_goals: Goals::Pending,
            away_goals: Goals::Pending,
            period: NOT_STARTED_PERIOD.into(),
        },
        FINAL_STATE => match (game.teams.home.score, game.teams.away.score) {
            (Some(home), Some(away)) => Classification {
                status: GameStatus::Final,
                home_goals: Goals::Count(home),
                away_goals: Goals::Count(away),
                period: FINAL_PERIOD.into(),
            },
            _ => unrecognized(game.game_pk, state),
        },
        _ => live(game.linescore.as_ref()).unwrap_or_else(|| unrecognized(game.game_pk, state)),
    }
}

fn live(linescore: Option<&RawLinescore>) -> Option<Classification> {
    let linescore = linescore?;
    let teams = linescore.teams.as_ref()?;
    let home = teams.home.as_ref()?.goals?;
    let away = teams.away.as_ref()?.goals?;
    let period = linescore.current_period_ordinal.clone()?;
    Some(Classification {
        status: GameStatus::InProgress,
        home_goals: Goals::Count(home),
        away_goals: Goals::Count(away),
        period,
    })
}

fn unrecognized(game_pk: u64, state: &str) -> Classification {
    warn!("game {game_pk}: state {state:?} is missing the fields it needs, showing as unrecognized");
    Classification {
        status: GameStatus::Unrecognized { state: state.to_owned() },
        home_goals: Goals::Pending,
        away_goals: Goals::Pending,
        period: if state.is_empty() { "?".into() } else { state.to_owned() },
    }
}
