//! Pure rendering of the schedule pane: view state in, styled lines out.
//! Nothing here touches the terminal, so any frontend can reuse it.

use crate::state::app_state::ScheduleView;
use nhl_api::{GameRecord, GameStatus};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};

pub const ERROR_MESSAGE: &str = "Error fetching data. Reload and try again.";
pub const EMPTY_MESSAGE: &str = "No scheduled games.";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Rows one game occupies, including the blank separator.
pub fn game_block_height(show_logos: bool) -> u16 {
    if show_logos { 5 } else { 3 }
}

pub fn schedule_lines(view: &ScheduleView, show_logos: bool) -> Vec<Line<'static>> {
    match view {
        ScheduleView::Loading => vec![message_line(LOADING_MESSAGE, Color::DarkGray)],
        ScheduleView::Error => vec![message_line(ERROR_MESSAGE, Color::Red)],
        ScheduleView::Empty => vec![message_line(EMPTY_MESSAGE, Color::DarkGray)],
        ScheduleView::Games(records) => records
            .iter()
            .flat_map(|record| game_lines(record, show_logos))
            .collect(),
    }
}

/// One game: scoreline, timing, optional logo references, then a blank row.
pub fn game_lines(record: &GameRecord, show_logos: bool) -> Vec<Line<'static>> {
    let team = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let status = status_style(&record.status);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(record.away.clone(), team),
            Span::raw("  "),
            Span::styled(record.away_goals.to_string(), status),
            Span::styled("  @  ", dim),
            Span::styled(record.home_goals.to_string(), status),
            Span::raw("  "),
            Span::styled(record.home.clone(), team),
        ]),
        Line::from(vec![
            Span::styled("Start: ", dim),
            Span::raw(record.start_time.clone()),
            Span::styled("   Period: ", dim),
            Span::styled(record.period.clone(), status),
        ]),
    ];

    if show_logos {
        lines.push(Line::from(Span::styled(format!("  away logo: {}", record.away_logo), dim)));
        lines.push(Line::from(Span::styled(format!("  home logo: {}", record.home_logo), dim)));
    }

    lines.push(Line::default());
    lines
}

fn status_style(status: &GameStatus) -> Style {
    match status {
        GameStatus::Scheduled => Style::default().fg(Color::Gray),
        GameStatus::InProgress => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::Final => Style::default().fg(Color::White),
        GameStatus::Unrecognized { .. } => Style::default().fg(Color::Red),
    }
}

fn message_line(msg: &'static str, color: Color) -> Line<'static> {
    Line::from(Span::styled(msg, Style::default().fg(color)))
}
