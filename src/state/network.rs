use crate::state::app_state::RunToken;
use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use nhl_api::date::CalendarDate;
use nhl_api::pipeline::Pipeline;
use tokio::sync::mpsc;

/// Runs pipeline requests off the UI loop. Each request gets its own task, so
/// a slow day never holds up navigation. The worker reports results tagged
/// with their run and nothing else; the app decides which run is current.
pub struct NetworkWorker {
    pipeline: Pipeline,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        pipeline: Pipeline,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self { pipeline, requests, responses }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            match request {
                NetworkRequest::LoadSchedule { run, date } => self.spawn_load_schedule(run, date),
            }
        }
        debug!("network request channel closed");
    }

    fn spawn_load_schedule(&self, run: RunToken, date: CalendarDate) {
        debug!("{run}: loading schedule for {date}");
        let pipeline = self.pipeline.clone();
        let responses = self.responses.clone();

        tokio::spawn(async move {
            let result = pipeline.run(date).await;
            debug!("{run}: pipeline complete");

            let response = NetworkResponse::ScheduleLoaded { run, date, result };
            if let Err(e) = responses.send(response).await {
                error!("Failed to send network response: {e}");
            }
        });
    }
}
