pub mod client;
pub mod date;
pub mod pipeline;
pub mod record;
pub mod schedule;
pub mod status;

use schedule::RawGame;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the NHL wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    /// A state we have no mapping for, or a live state missing its linescore.
    Unrecognized { state: String },
}

/// Goal count for one side. Renders as `-` before puck drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Goals {
    #[default]
    Pending,
    Count(u32),
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goals::Pending => f.write_str("-"),
            Goals::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Display-ready game, one per raw game per pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u64,
    pub start_time: String, // "19:00", local clock
    pub status: GameStatus,
    pub period: String, // "N/A", "Final", "2nd", ...
    pub home: String,
    pub home_goals: Goals,
    pub home_logo: String,
    pub away: String,
    pub away_goals: Goals,
    pub away_logo: String,
}

/// Outcome of fetching one day's schedule.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Transport failure, non-success status, or undecodable body.
    NetworkError,
    /// Payload retrieved, zero games.
    NoGames,
    Games(Vec<RawGame>),
}

/// What the pipeline hands to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
    Error,
    Empty,
    Records(Vec<GameRecord>),
}
