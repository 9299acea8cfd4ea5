/// NHL stats API raw wire types — serde shapes for deserializing schedule responses.
/// These map to the clean domain types via `status::classify` and `record::build`.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Schedule  (statsapi v1)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default)]
    pub total_items: u32,
    /// One bucket per calendar day in the requested range.
    #[serde(default)]
    pub dates: Vec<DateBucket>,
}

impl ScheduleResponse {
    /// Games of the first date bucket. A single-day query yields exactly one bucket.
    pub fn into_first_bucket_games(self) -> Vec<RawGame> {
        self.dates
            .into_iter()
            .next()
            .map(|bucket| bucket.games)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DateBucket {
    #[serde(default)]
    pub date: String, // "2023-05-12"
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub games: Vec<RawGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    #[serde(default)]
    pub game_pk: u64,
    pub game_date: String, // ISO 8601, UTC
    pub status: RawStatus,
    pub teams: RawMatchup,
    /// Only present when the request expands `schedule.linescore`.
    pub linescore: Option<RawLinescore>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    /// "Preview" | "Live" | "Final"
    pub abstract_game_state: Option<String>,
    /// "Scheduled", "In Progress", "Final", "Postponed", ...
    #[serde(default)]
    pub detailed_state: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawMatchup {
    pub away: RawSide,
    pub home: RawSide,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawSide {
    pub score: Option<u32>,
    pub team: RawTeam,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawTeam {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawLinescore {
    pub current_period: Option<u8>,
    /// "1st", "2nd", "3rd", "OT", "SO"
    pub current_period_ordinal: Option<String>,
    pub teams: Option<RawLinescoreTeams>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawLinescoreTeams {
    pub away: Option<RawLinescoreSide>,
    pub home: Option<RawLinescoreSide>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawLinescoreSide {
    pub goals: Option<u32>,
}
