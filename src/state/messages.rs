use crate::state::app_state::RunToken;
use crossterm::event::KeyEvent;
use nhl_api::PipelineResult;
use nhl_api::date::CalendarDate;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    /// Run the schedule pipeline for `date`. `run` comes back with the result
    /// so the app can tell a stale answer from the current one.
    LoadSchedule { run: RunToken, date: CalendarDate },
}

#[derive(Debug)]
pub enum NetworkResponse {
    ScheduleLoaded {
        run: RunToken,
        date: CalendarDate,
        result: PipelineResult,
    },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    AnimationTick,
}
