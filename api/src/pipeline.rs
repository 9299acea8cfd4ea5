use crate::client::NhlApi;
use crate::date::CalendarDate;
use crate::record::build;
use crate::{FetchOutcome, PipelineResult};
use log::debug;

/// Fetch → classify → transform for one day. Holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    api: NhlApi,
}

impl Pipeline {
    pub fn new(api: NhlApi) -> Self {
        Self { api }
    }

    /// Run the pipeline for `date`, rendering start times on the local clock.
    pub async fn run(&self, date: CalendarDate) -> PipelineResult {
        let outcome = self.api.fetch_schedule(date).await;
        let result = transform(outcome);
        debug!("pipeline for {date}: {}", summary(&result));
        result
    }
}

/// Map a fetch outcome onto the renderer's terms, keeping the service's game order.
pub fn transform(outcome: FetchOutcome) -> PipelineResult {
    match outcome {
        FetchOutcome::NetworkError => PipelineResult::Error,
        FetchOutcome::NoGames => PipelineResult::Empty,
        FetchOutcome::Games(games) => {
            PipelineResult::Records(games.iter().map(build).collect())
        }
    }
}

fn summary(result: &PipelineResult) -> String {
    match result {
        PipelineResult::Error => "error".into(),
        PipelineResult::Empty => "no games".into(),
        PipelineResult::Records(records) => format!("{} games", records.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RawGame;
    use serde_json::json;

    fn game(pk: u64, home: &str) -> RawGame {
        serde_json::from_value(json!({
            "gamePk": pk,
            "gameDate": "2023-05-12T23:30:00Z",
            "status": { "detailedState": "Scheduled" },
            "teams": {
                "away": { "team": { "id": 10, "name": "Toronto Maple Leafs" } },
                "home": { "team": { "id": 13, "name": home } }
            }
        }))
        .expect("fixture should decode")
    }

    #[test]
    fn network_error_maps_to_error() {
        assert_eq!(transform(FetchOutcome::NetworkError), PipelineResult::Error);
    }

    #[test]
    fn no_games_maps_to_empty() {
        assert_eq!(transform(FetchOutcome::NoGames), PipelineResult::Empty);
    }

    #[test]
    fn games_keep_service_order() {
        let outcome = FetchOutcome::Games(vec![
            game(3, "Florida Panthers"),
            game(1, "Boston Bruins"),
            game(2, "Carolina Hurricanes"),
        ]);
        let PipelineResult::Records(records) = transform(outcome) else {
            panic!("expected records");
        };
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(records[1].home, "Boston Bruins");
        assert_eq!(records[0].start_time, build(&game(3, "Florida Panthers")).start_time);
    }
}
