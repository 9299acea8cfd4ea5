use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, DatePrompt, RunToken};
use crate::state::messages::NetworkRequest;
use log::{debug, warn};
use nhl_api::PipelineResult;
use nhl_api::date::CalendarDate;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    Schedule,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let date = settings.start_date.unwrap_or_else(CalendarDate::today);
        Self {
            state: AppState::new(date),
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Day navigation — each move hands back the request for a fresh run
    // -----------------------------------------------------------------------

    /// Start a pipeline run for the selected day.
    pub fn load_current_day(&mut self) -> NetworkRequest {
        let (run, date) = self.state.schedule.begin_run();
        debug!("{run}: requesting {date}");
        NetworkRequest::LoadSchedule { run, date }
    }

    pub fn previous_day(&mut self) -> Option<NetworkRequest> {
        self.shift_day(-1)
    }

    pub fn next_day(&mut self) -> Option<NetworkRequest> {
        self.shift_day(1)
    }

    pub fn jump_to_today(&mut self) -> NetworkRequest {
        self.jump_to(CalendarDate::today())
    }

    pub fn jump_to(&mut self, date: CalendarDate) -> NetworkRequest {
        self.state.schedule.date.set_explicit(date);
        self.load_current_day()
    }

    fn shift_day(&mut self, delta_days: i64) -> Option<NetworkRequest> {
        if self.state.schedule.date.advance(delta_days) {
            Some(self.load_current_day())
        } else {
            self.on_error(format!(
                "cannot move {delta_days} days from {}",
                self.state.schedule.date.canonical_string()
            ));
            None
        }
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.state.schedule.date.date()
    }

    // -----------------------------------------------------------------------
    // Date prompt
    // -----------------------------------------------------------------------

    pub fn open_date_prompt(&mut self) {
        self.state.date_prompt = Some(DatePrompt::default());
    }

    pub fn is_prompting(&self) -> bool {
        self.state.date_prompt.is_some()
    }

    pub fn prompt_input(&mut self, c: char) {
        if let Some(prompt) = self.state.date_prompt.as_mut() {
            prompt.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.state.date_prompt.as_mut() {
            prompt.backspace();
        }
    }

    pub fn cancel_date_prompt(&mut self) {
        self.state.date_prompt = None;
    }

    /// Close the prompt and jump to the typed date. Bad input leaves the date alone.
    pub fn submit_date_prompt(&mut self) -> Option<NetworkRequest> {
        let prompt = self.state.date_prompt.take()?;
        match prompt.parse() {
            Ok(date) => {
                self.state.last_error = None;
                Some(self.jump_to(date))
            }
            Err(e) => {
                warn!("date prompt: {e}");
                self.on_error(e.to_string());
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Returns false when the result belongs to a superseded run.
    pub fn on_schedule_loaded(
        &mut self,
        run: RunToken,
        date: CalendarDate,
        result: PipelineResult,
    ) -> bool {
        let failed = result == PipelineResult::Error;
        if !self.state.schedule.accept(run, result) {
            debug!("{run}: discarding stale result for {date}");
            return false;
        }
        if failed {
            self.on_error(format!("could not load the schedule for {date}"));
        } else {
            self.state.last_error = None;
        }
        true
    }

    // -----------------------------------------------------------------------
    // Animation tick, called every 80ms from the AnimationTick event
    // -----------------------------------------------------------------------

    /// Returns true while a run is pending, i.e. when the spinner needs a redraw.
    pub fn advance_animation(&mut self) -> bool {
        if !self.state.schedule.is_loading() {
            return false;
        }
        self.state.animation.advance();
        true
    }

    pub fn loading_indicator(&self) -> Option<char> {
        self.state.schedule.indicator(self.state.animation.frame)
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tabs and toggles
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_show_logos(&mut self) {
        self.state.show_logos = !self.state.show_logos;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::{ERROR_CHAR, ScheduleView};

    fn app_on(y: i32, m: u32, d: u32) -> App {
        App::new(AppSettings {
            start_date: CalendarDate::from_ymd(y, m, d),
            ..AppSettings::default()
        })
    }

    fn unpack(request: NetworkRequest) -> (RunToken, CalendarDate) {
        match request {
            NetworkRequest::LoadSchedule { run, date } => (run, date),
        }
    }

    #[test]
    fn starts_on_configured_date() {
        let app = app_on(2023, 5, 12);
        assert_eq!(app.selected_date().canonical_string(), "2023-05-12");
        assert_eq!(app.state.active_tab, MenuItem::Schedule);
    }

    #[test]
    fn navigation_requests_the_new_day() {
        let mut app = app_on(2022, 12, 31);
        let (first, date) = unpack(app.next_day().unwrap());
        assert_eq!(date.canonical_string(), "2023-01-01");

        let (second, date) = unpack(app.previous_day().unwrap());
        assert_eq!(date.canonical_string(), "2022-12-31");
        assert!(second > first);
    }

    #[test]
    fn only_latest_run_updates_view() {
        let mut app = app_on(2023, 5, 12);
        let (stale, stale_date) = unpack(app.next_day().unwrap());
        let (current, current_date) = unpack(app.next_day().unwrap());

        assert!(app.on_schedule_loaded(current, current_date, PipelineResult::Empty));
        assert!(!app.on_schedule_loaded(stale, stale_date, PipelineResult::Error));
        assert_eq!(app.state.schedule.view, ScheduleView::Empty);
        assert_eq!(app.state.last_error, None);
    }

    #[test]
    fn stale_error_arriving_last_leaves_no_error_indicator() {
        let mut app = app_on(2023, 5, 12);
        let (stale, stale_date) = unpack(app.load_current_day());
        let (current, current_date) = unpack(app.next_day().unwrap());

        assert!(app.on_schedule_loaded(current, current_date, PipelineResult::Empty));
        assert!(!app.on_schedule_loaded(stale, stale_date, PipelineResult::Error));
        assert_eq!(app.loading_indicator(), None);
        assert!(!app.advance_animation());
    }

    #[test]
    fn animation_only_runs_while_loading() {
        let mut app = app_on(2023, 5, 12);
        let (run, date) = unpack(app.load_current_day());
        let before = app.loading_indicator();
        assert!(app.advance_animation());
        assert!(app.loading_indicator().is_some());
        assert_ne!(app.loading_indicator(), before);

        assert!(app.on_schedule_loaded(run, date, PipelineResult::Error));
        assert!(!app.advance_animation());
        assert_eq!(app.loading_indicator(), Some(ERROR_CHAR));
    }

    #[test]
    fn error_result_sets_banner() {
        let mut app = app_on(2023, 5, 12);
        let (run, date) = unpack(app.load_current_day());
        assert!(app.on_schedule_loaded(run, date, PipelineResult::Error));
        assert_eq!(app.state.schedule.view, ScheduleView::Error);
        assert!(app.state.last_error.is_some());
    }

    #[test]
    fn date_prompt_jumps_to_typed_date() {
        let mut app = app_on(2023, 5, 12);
        app.open_date_prompt();
        assert!(app.is_prompting());
        for c in "2021-10-12".chars() {
            app.prompt_input(c);
        }
        let (_, date) = unpack(app.submit_date_prompt().unwrap());
        assert_eq!(date.canonical_string(), "2021-10-12");
        assert!(!app.is_prompting());
    }

    #[test]
    fn bad_prompt_input_keeps_date() {
        let mut app = app_on(2023, 5, 12);
        app.open_date_prompt();
        for c in "2023-02-31".chars() {
            app.prompt_input(c);
        }
        assert!(app.submit_date_prompt().is_none());
        assert_eq!(app.selected_date().canonical_string(), "2023-05-12");
        assert!(app.state.last_error.is_some());
    }

    #[test]
    fn cancelled_prompt_requests_nothing() {
        let mut app = app_on(2023, 5, 12);
        app.open_date_prompt();
        app.prompt_input('2');
        app.cancel_date_prompt();
        assert!(app.submit_date_prompt().is_none());
        assert_eq!(app.state.last_error, None);
    }

    #[test]
    fn help_returns_to_previous_tab() {
        let mut app = app_on(2023, 5, 12);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Schedule);
    }
}
