use tui::backend::Backend;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::schedule::{game_block_height, schedule_lines};
use crate::state::app_state::ERROR_CHAR;
use crate::ui::layout::LayoutAreas;

static TABS: &[&str; 1] = &["Schedule"];

const HELP_TEXT: &str = "q=quit  ←/h=previous day  →/l=next day  t=today  g=go to date  r=reload\n\
                         ↑/k ↓/j=scroll  o=logo URLs  f=full screen  \"=logs  Esc=close help";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let _ = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }
        draw_header(f, layout.header, app);

        match app.state.active_tab {
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if app.state.show_logs {
            draw_logs(f, layout.logs);
        }

        draw_loading_spinner(f, f.area(), app);
    });
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Schedule | MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

/// Date title on the first row; prompt, error banner, or key legend on the second.
fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let date = app.selected_date();
    let title = Line::from(vec![
        Span::styled(
            format!(" 🗓️ {}", date.title()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", date.canonical_string()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let second = if let Some(prompt) = app.state.date_prompt.as_ref() {
        Line::from(vec![
            Span::styled(" Go to date (YYYY-MM-DD): ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("{}_", prompt.input)),
        ])
    } else if let Some(err) = app.state.last_error.as_deref() {
        Line::from(Span::styled(format!(" {err}"), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            " Keys: h/l=day  t=today  g=go to date  r=reload  ?=help  q=quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    f.render_widget(Paragraph::new(vec![title, second]), area);
}

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Games ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let schedule = &app.state.schedule;
    let lines = schedule_lines(&schedule.view, app.state.show_logos);
    let scroll = schedule
        .scroll_offset
        .saturating_mul(game_block_height(app.state.show_logos));

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logger = TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs "));
    f.render_widget(logger, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App) {
    let Some(indicator) = app.loading_indicator() else {
        return;
    };
    let style = match indicator {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(indicator.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
