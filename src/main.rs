use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use parking_lot::Mutex;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use qa_header::config::{AppConfig, ViewportConfig};
use qa_header::date::format_date;
use qa_header::header::{PageContext, TopMenu, TopMenuDeps, TopMenuOptions};
use qa_header::logging::init_tracing;
use qa_header::session::{Navigator, SessionIntent, SessionStore};
use qa_header::storage::{FileStorage, KeyValueStore, PROFILE_KEY};
use qa_header::view::{RootClassList, Viewport, DARK_CLASS};

#[derive(Parser, Debug)]
#[command(name = "qa-header", about = "Interactive preview of the Q&A top navigation bar")]
struct Cli {
    /// Page the header is mounted on (home, saved, thread, ask, ...)
    #[arg(long, default_value = "home")]
    page: String,

    /// Page the user navigated from; target of the back button
    #[arg(long, default_value = "home")]
    from: String,

    /// Config file (default: ~/.config/qa-header/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage file, overrides the configured one
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Question id toggled with `s`
    #[arg(long, default_value = "demo-question")]
    question: String,
}

/// Records the last requested route; the preview has no real router.
#[derive(Default)]
struct RouteLog {
    last: Mutex<Option<String>>,
}

impl Navigator for RouteLog {
    fn navigate(&self, route: &str) {
        *self.last.lock() = Some(route.to_string());
    }
}

struct Shell {
    menu: TopMenu,
    session: SessionStore,
    storage: Arc<dyn KeyValueStore>,
    routes: Arc<RouteLog>,
    root: Arc<RootClassList>,
    viewport: Viewport,
    viewport_config: ViewportConfig,
    question: String,
    status: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("loading configuration")?;

    let storage_path = cli.storage.clone().unwrap_or_else(|| config.storage_path());
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::new(storage_path));
    let session = SessionStore::new();
    let routes = Arc::new(RouteLog::default());
    let root = Arc::new(RootClassList::new());

    let (cols, _) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(config.viewport.viewport_width(cols));

    let deps = TopMenuDeps {
        storage: Arc::clone(&storage),
        session: session.clone(),
        navigator: routes.clone(),
        theme_target: root.clone(),
        viewport: viewport.clone(),
    };
    let mut menu = TopMenu::new(
        PageContext::new(&cli.page, &cli.from),
        deps,
        TopMenuOptions::from(&config),
    );

    // A broken profile is shown to the user, the header keeps working.
    let status = menu.activate().err().map(|e| format!("Session error: {}", e));

    let mut shell = Shell {
        menu,
        session,
        storage,
        routes,
        root,
        viewport,
        viewport_config: config.viewport.clone(),
        question: cli.question,
        status,
    };

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut shell);
    ratatui::restore();
    shell.menu.deactivate();
    result
}

fn run(terminal: &mut DefaultTerminal, shell: &mut Shell) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, shell))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('t') => {
                    let theme = shell.menu.toggle_theme();
                    shell.status = Some(format!("Theme: {}", theme.as_str()));
                }
                KeyCode::Char('s') => {
                    shell.status = Some(match shell.menu.toggle_saved_question(&shell.question) {
                        Ok(true) => format!("Saved {}", shell.question),
                        Ok(false) => format!("Removed {}", shell.question),
                        Err(e) => e.to_string(),
                    });
                }
                KeyCode::Char('l') => {
                    if let Err(e) = shell.storage.remove(PROFILE_KEY) {
                        tracing::warn!(error = %e, "failed to remove stored profile");
                    }
                    shell.session.dispatch(SessionIntent::SetCurrentUser(None))?;
                    shell.status = Some("Logged out".to_string());
                }
                _ => {}
            },
            Event::Resize(cols, _) => {
                shell
                    .viewport
                    .resize(shell.viewport_config.viewport_width(cols));
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame<'_>, shell: &Shell) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let model = shell.menu.model();
    frame.render_widget(model.widget(), shell.menu.render_area(&model, chunks[0]));

    let palette = model.theme.palette();
    let text = Style::default().fg(palette.text).bg(palette.background);
    let view = shell.menu.view_state();
    let route = shell
        .routes
        .last
        .lock()
        .clone()
        .unwrap_or_else(|| format!("/{}", shell.menu.page().current));

    let mut lines = vec![
        Line::from(format!("Route: {}", route)),
        Line::from(format!(
            "Viewport: {}px ({})",
            shell.viewport.width(),
            if view.is_compact { "compact" } else { "wide" }
        )),
        Line::from(format!(
            "Theme: {} (root dark class: {})",
            view.theme.as_str(),
            shell.root.contains(DARK_CLASS)
        )),
    ];
    match shell.menu.current_user() {
        Some(user) => {
            lines.push(Line::from(format!("User: {}", user.id)));
            lines.push(Line::from(format!(
                "Saved questions: {}",
                user.saved_questions.join(", ")
            )));
            if let Some(joined) = user
                .extra
                .get("joinedOn")
                .and_then(|v| v.as_i64())
                .and_then(format_date)
            {
                lines.push(Line::from(format!(
                    "Joined: {} {}, {}",
                    joined.month_name(),
                    joined.day,
                    joined.year
                )));
            }
        }
        None => lines.push(Line::from("User: not logged in")),
    }
    if let Some(status) = &shell.status {
        lines.push(Line::from(""));
        lines.push(Line::from(status.clone()));
    }
    frame.render_widget(Paragraph::new(lines).style(text), chunks[1]);

    frame.render_widget(
        Paragraph::new("t: theme   s: save question   l: log out   q: quit")
            .style(Style::default().fg(palette.separator)),
        chunks[2],
    );
}
