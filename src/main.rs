//! Attendee List - Terminal User Interface for browsing event attendees.
//!
//! Main entry point and event loop for the application.

mod app;
mod attendees;
mod config;
mod loader;
mod location;
mod logging;
mod relative_time;
mod ui;

use anyhow::Context;
use app::{App, LoadError, UiMode};
use attendees::AttendeeClient;
use chrono::Utc;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use loader::{FetchOutcome, spawn_fetch};
use location::ListLocation;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use ui::ScreenLayout;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "attendee-list", version, about = "Browse the attendees of an event")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial view, e.g. "page=3&search=ana" or a URL carrying those parameters
    #[arg(long, default_value = "")]
    location: String,
    /// Event to list (overrides the config file)
    #[arg(long)]
    event_id: Option<String>,
    /// Base URL of the event API (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts logging, builds the list view from the
/// initial location, and runs the event loop. The final location is printed
/// on exit so the same view can be reopened with `--location`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(event_id) = cli.event_id {
        config.event_id = event_id;
    }
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    if config.event_id.is_empty() {
        eprintln!("Error: an event ID is required.");
        eprintln!(
            "Set \"event_id\" in {} or pass --event-id.",
            Config::default_config_path()?.display()
        );
        return Err(anyhow::anyhow!("Event ID not configured"));
    }

    logging::init(
        &config.log_file_path()?,
        logging::parse_level(&config.log_level),
    )?;

    let client = AttendeeClient::new(&config)?;
    let mut app = App::new(ListLocation::parse(&cli.location));
    tracing::info!(
        event_id = %config.event_id,
        location = %app.location().to_query(),
        "starting attendee list"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    println!("?{}", app.location().to_query());
    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
/// * `layout` - Screen areas for this frame
fn render_ui(f: &mut ratatui::Frame, app: &App, layout: &ScreenLayout) {
    ui::render_search(app, layout.header, f.buffer_mut());
    ui::render_table(app, Utc::now(), layout.table, f.buffer_mut());
    ui::render_pagination(app, layout.footer, f.buffer_mut());

    let status = match (&app.load_error, &app.status_message) {
        (Some(LoadError::Recoverable(message)), _) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )),
        (_, Some(message)) => Line::from(message.as_str()),
        _ => {
            let mut help = String::from(
                "q sair, / buscar, ←→ página, Home/End primeira/última, espaço marcar, r recarregar",
            );
            if app.history_len() > 1 {
                help.push_str(", b voltar");
            }
            Line::from(vec![
                Span::styled(
                    format!("?{}  ", app.location().to_query()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(help),
            ])
        }
    };
    f.render_widget(Paragraph::new(status), layout.status);
}

/// Hand the queued request, if any, to the loader.
fn dispatch_pending(app: &mut App, client: &AttendeeClient, sender: &UnboundedSender<FetchOutcome>) {
    if let Some(request) = app.take_pending_request() {
        spawn_fetch(client.clone(), request, sender.clone());
    }
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `client` - Listing API client
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Each turn dispatches the queued fetch, applies finished fetches, renders,
/// and then waits briefly for keyboard or mouse input.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &AttendeeClient,
) -> anyhow::Result<()> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut layout = ScreenLayout::default();

    loop {
        dispatch_pending(app, client, &sender);
        while let Ok(outcome) = receiver.try_recv() {
            app.apply_fetch(outcome);
            // a clamped page queues a follow-up request
            dispatch_pending(app, client, &sender);
        }

        terminal
            .draw(|f| {
                layout = ScreenLayout::new(f.area());
                render_ui(f, app, &layout);
            })
            .context("Failed to draw frame")?;

        // Use non-blocking event polling with timeout to keep UI responsive
        if event::poll(Duration::from_millis(100))? {
            let flow = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app),
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse, app, &layout);
                    Flow::Continue
                }
                _ => Flow::Continue,
            };
            if flow == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Arguments
/// * `key` - Key event
/// * `app` - Application state
///
/// # Returns
/// * `Flow` - Whether to keep running
fn handle_key_event(key: KeyEvent, app: &mut App) -> Flow {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    match app.mode {
        UiMode::List => {
            app.status_message = None;
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
                KeyCode::Char('/') => app.mode = UiMode::Search,
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Char(' ') => app.toggle_selected(),
                KeyCode::Char('a') => app.toggle_all_on_page(),
                KeyCode::Home => app.go_to_first_page(),
                KeyCode::Left | KeyCode::Char('h') => app.go_to_previous_page(),
                KeyCode::Right | KeyCode::Char('l') => app.go_to_next_page(),
                KeyCode::End => app.go_to_last_page(),
                KeyCode::Char('r') => app.reload(),
                KeyCode::Char('b') | KeyCode::Backspace => {
                    if !app.navigate_back() {
                        app.set_status("Nenhuma página anterior".to_string());
                    }
                }
                _ => {}
            }
        }
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::List,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        },
    }
    Flow::Continue
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `layout` - Screen areas of the last frame
///
/// # Details
/// The wheel moves the row cursor; a left click on an enabled pagination
/// button changes the page.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &ScreenLayout) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = layout.pagination.button_at(mouse.column, mouse.row) {
                action.apply(app);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cli_parses_location_and_overrides() {
        let cli = Cli::parse_from([
            "attendee-list",
            "--location",
            "page=5&search=ana",
            "--event-id",
            "evt",
        ]);
        assert_eq!(ListLocation::parse(&cli.location).page, 5);
        assert_eq!(cli.event_id.as_deref(), Some("evt"));
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_typing_in_search_mode_updates_search() {
        let mut app = App::new(ListLocation::parse("page=5"));
        assert_eq!(handle_key_event(press(KeyCode::Char('/')), &mut app), Flow::Continue);
        for c in "leandro".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.search, "leandro");
        assert_eq!(app.page, 1);

        let request = app.take_pending_request().unwrap();
        assert_eq!(request.page.page_index, 0);
        assert_eq!(request.page.query.as_deref(), Some("leandro"));

        handle_key_event(press(KeyCode::Esc), &mut app);
        assert_eq!(app.mode, UiMode::List);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut app), Flow::Quit);
    }

    #[test]
    fn test_back_at_initial_entry_sets_status() {
        let mut app = App::new(ListLocation::default());
        handle_key_event(press(KeyCode::Char('b')), &mut app);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_ctrl_c_quits_in_search_mode() {
        let mut app = App::new(ListLocation::default());
        app.mode = UiMode::Search;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key, &mut app), Flow::Quit);
        assert!(app.search.is_empty());
    }
}
