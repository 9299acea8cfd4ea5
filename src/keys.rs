use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // The date prompt swallows everything until Enter or Esc.
    if guard.is_prompting() {
        let request = match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Enter, _) => guard.submit_date_prompt(),
            (KeyCode::Esc, _) => {
                guard.cancel_date_prompt();
                None
            }
            (KeyCode::Backspace, _) => {
                guard.prompt_backspace();
                None
            }
            (Char(c), _) => {
                guard.prompt_input(c);
                None
            }
            _ => None,
        };
        drop(guard);
        if let Some(request) = request {
            let _ = network_requests.send(request).await;
        }
        return;
    }

    let request = match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => {
            guard.update_tab(MenuItem::Schedule);
            None
        }
        (_, Char('?'), _) => {
            guard.update_tab(MenuItem::Help);
            None
        }
        (MenuItem::Help, KeyCode::Esc, _) => {
            guard.exit_help();
            None
        }

        // Day navigation
        (MenuItem::Schedule, Char('h') | KeyCode::Left, _) => guard.previous_day(),
        (MenuItem::Schedule, Char('l') | KeyCode::Right, _) => guard.next_day(),
        (MenuItem::Schedule, Char('t'), _) => Some(guard.jump_to_today()),
        (MenuItem::Schedule, Char('r'), _) => Some(guard.load_current_day()),
        (MenuItem::Schedule, Char('g'), _) => {
            guard.open_date_prompt();
            None
        }

        // Scrolling
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => {
            guard.state.schedule.scroll_down();
            None
        }
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => {
            guard.state.schedule.scroll_up();
            None
        }

        // Global
        (_, Char('f'), _) => {
            guard.toggle_full_screen();
            None
        }
        (_, Char('o'), _) => {
            guard.toggle_show_logos();
            None
        }
        (_, Char('"'), _) => {
            guard.toggle_show_logs();
            None
        }

        _ => None,
    };

    drop(guard);
    if let Some(request) = request {
        let _ = network_requests.send(request).await;
    }
}
