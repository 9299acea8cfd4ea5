use crate::app::MenuItem;
use nhl_api::date::{CalendarDate, DateParseError, DateState};
use nhl_api::{GameRecord, PipelineResult};
use std::fmt;

// ---------------------------------------------------------------------------
// Loading indicator
// ---------------------------------------------------------------------------

const SPINNER_CHARS: [char; 8] = ['⣷', '⣯', '⣟', '⡿', '⢿', '⣻', '⣽', '⣾'];
pub const ERROR_CHAR: char = '!';

/// Spinner frame, advanced on every animation tick.
#[derive(Debug, Default)]
pub struct AnimationState {
    pub frame: usize,
}

impl AnimationState {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_CHARS.len();
    }
}

// ---------------------------------------------------------------------------
// Schedule state
// ---------------------------------------------------------------------------

/// Sequence number of one pipeline run. Only the newest run may update the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunToken(u64);

impl RunToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run #{}", self.0)
    }
}

/// What the schedule pane shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScheduleView {
    #[default]
    Loading,
    Error,
    Empty,
    Games(Vec<GameRecord>),
}

impl From<PipelineResult> for ScheduleView {
    fn from(result: PipelineResult) -> Self {
        match result {
            PipelineResult::Error => ScheduleView::Error,
            PipelineResult::Empty => ScheduleView::Empty,
            PipelineResult::Records(records) => ScheduleView::Games(records),
        }
    }
}

#[derive(Debug)]
pub struct ScheduleState {
    pub date: DateState,
    /// Token of the most recently issued run.
    pub latest_run: RunToken,
    pub view: ScheduleView,
    /// Vertical scroll offset, in games, for days that overflow the pane.
    pub scroll_offset: u16,
}

impl ScheduleState {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date: DateState::new(date),
            latest_run: RunToken::default(),
            view: ScheduleView::Loading,
            scroll_offset: 0,
        }
    }

    /// Issue a fresh token for the current date and show the loading state.
    /// Any run still in flight becomes stale.
    pub fn begin_run(&mut self) -> (RunToken, CalendarDate) {
        self.latest_run = self.latest_run.next();
        self.view = ScheduleView::Loading;
        self.scroll_offset = 0;
        (self.latest_run, self.date.date())
    }

    /// Store a pipeline result if it answers the latest run. Returns false for stale runs.
    pub fn accept(&mut self, run: RunToken, result: PipelineResult) -> bool {
        if run != self.latest_run {
            return false;
        }
        self.view = result.into();
        true
    }

    /// Spinner while the latest run is pending, `ERROR_CHAR` once it has failed.
    /// Derived from the accepted view, so a superseded run can never set it.
    pub fn indicator(&self, frame: usize) -> Option<char> {
        match self.view {
            ScheduleView::Loading => Some(SPINNER_CHARS[frame % SPINNER_CHARS.len()]),
            ScheduleView::Error => Some(ERROR_CHAR),
            ScheduleView::Empty | ScheduleView::Games(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view == ScheduleView::Loading
    }

    pub fn game_count(&self) -> usize {
        match &self.view {
            ScheduleView::Games(games) => games.len(),
            _ => 0,
        }
    }

    pub fn scroll_down(&mut self) {
        let max = self.game_count().saturating_sub(1) as u16;
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Date prompt
// ---------------------------------------------------------------------------

const PROMPT_MAX_LEN: usize = 10;

/// Input buffer for jumping straight to a `YYYY-MM-DD` date.
#[derive(Debug, Default, Clone)]
pub struct DatePrompt {
    pub input: String,
}

impl DatePrompt {
    pub fn push(&mut self, c: char) {
        if (c.is_ascii_digit() || c == '-') && self.input.len() < PROMPT_MAX_LEN {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn parse(&self) -> Result<CalendarDate, DateParseError> {
        CalendarDate::parse(&self.input)
    }
}

// ---------------------------------------------------------------------------
// Top-level app state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    /// Print each team's logo URL under its game.
    pub show_logos: bool,
    pub last_error: Option<String>,
    pub animation: AnimationState,
    pub schedule: ScheduleState,
    /// Open while the user is typing a date.
    pub date_prompt: Option<DatePrompt>,
}

impl AppState {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            active_tab: MenuItem::default(),
            previous_tab: MenuItem::default(),
            show_logs: false,
            show_logos: false,
            last_error: None,
            animation: AnimationState::default(),
            schedule: ScheduleState::new(date),
            date_prompt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_12() -> CalendarDate {
        CalendarDate::from_ymd(2023, 5, 12).unwrap()
    }

    #[test]
    fn tokens_increase() {
        let first = RunToken::default().next();
        assert!(first.next() > first);
        assert_eq!(first.to_string(), "run #1");
    }

    #[test]
    fn begin_run_issues_new_token_and_shows_loading() {
        let mut schedule = ScheduleState::new(may_12());
        schedule.view = ScheduleView::Empty;
        let (run, date) = schedule.begin_run();
        assert_eq!(run, schedule.latest_run);
        assert_eq!(date, may_12());
        assert_eq!(schedule.view, ScheduleView::Loading);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut schedule = ScheduleState::new(may_12());
        let (stale, _) = schedule.begin_run();
        schedule.date.advance(1);
        let (current, _) = schedule.begin_run();

        assert!(schedule.accept(current, PipelineResult::Empty));
        assert!(!schedule.accept(stale, PipelineResult::Error));
        assert_eq!(schedule.view, ScheduleView::Empty);
    }

    #[test]
    fn stale_result_arriving_first_does_not_flash() {
        let mut schedule = ScheduleState::new(may_12());
        let (stale, _) = schedule.begin_run();
        let (current, _) = schedule.begin_run();

        assert!(!schedule.accept(stale, PipelineResult::Empty));
        assert_eq!(schedule.view, ScheduleView::Loading);
        assert!(schedule.accept(current, PipelineResult::Error));
        assert_eq!(schedule.view, ScheduleView::Error);
    }

    #[test]
    fn indicator_follows_the_latest_run() {
        let mut schedule = ScheduleState::new(may_12());
        let (stale, _) = schedule.begin_run();
        let (current, _) = schedule.begin_run();
        assert_eq!(schedule.indicator(0), Some(SPINNER_CHARS[0]));
        assert_eq!(schedule.indicator(9), Some(SPINNER_CHARS[1]));

        assert!(schedule.accept(current, PipelineResult::Empty));
        assert!(!schedule.accept(stale, PipelineResult::Error));
        assert_eq!(schedule.indicator(0), None);
    }

    #[test]
    fn failed_current_run_shows_error_char() {
        let mut schedule = ScheduleState::new(may_12());
        let (run, _) = schedule.begin_run();
        assert!(schedule.accept(run, PipelineResult::Error));
        assert_eq!(schedule.indicator(3), Some(ERROR_CHAR));

        schedule.begin_run();
        assert!(schedule.is_loading());
        assert_ne!(schedule.indicator(3), Some(ERROR_CHAR));
    }

    #[test]
    fn animation_wraps() {
        let mut animation = AnimationState::default();
        for _ in 0..SPINNER_CHARS.len() {
            animation.advance();
        }
        assert_eq!(animation.frame, 0);
    }

    #[test]
    fn scroll_is_clamped_to_game_count() {
        let mut schedule = ScheduleState::new(may_12());
        schedule.scroll_down();
        assert_eq!(schedule.scroll_offset, 0);
        schedule.scroll_up();
        assert_eq!(schedule.scroll_offset, 0);
    }

    #[test]
    fn prompt_only_takes_date_characters() {
        let mut prompt = DatePrompt::default();
        for c in "2023-05-12x99".chars() {
            prompt.push(c);
        }
        assert_eq!(prompt.input, "2023-05-12");
        assert_eq!(prompt.parse().unwrap(), may_12());
        for _ in 0..3 {
            prompt.backspace();
        }
        assert_eq!(prompt.input, "2023-05");
        assert!(prompt.parse().is_err());
    }
}
