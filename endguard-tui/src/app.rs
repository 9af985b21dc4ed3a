//! Application state and the event loop.
//!
//! One synchronous loop: draw the current screen, wait for input,
//! apply it. Store calls are awaited inline; the table engine itself
//! never suspends.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use endguard_lib::auth::{Directory, Session};
use endguard_lib::store::Store;
use log::{info, warn};
use tabula::buffer::Buffer;
use tabula::event::{Event, Key, Modifiers};
use tabula::layout::Rect;
use tabula::style::TextStyle;
use tabula::table::{Row, Value};
use tabula::terminal::Terminal;
use tabula::text::display_width;
use tabula::theme::Palette;
use uuid::Uuid;

use crate::nav::{self, Route};
use crate::pages::{self, ListOutcome, LoginOutcome, LoginPage, PageView, next_access};
use crate::settings::{SESSION_KEY, SettingsError, SettingsProvider, THEME_KEY};
use crate::theme::ThemeChoice;

const TICK: Duration = Duration::from_millis(100);
const SIDEBAR_WIDTH: u16 = 22;

const CONSOLE_HINTS: &str =
    "1-9: pages   /: search   s: sort   r: reverse   t: theme   x: sign out   q: quit";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Store(#[from] endguard_lib::Error),
    #[error("could not determine a home directory")]
    NoHomeDir,
}

enum Screen {
    Login(LoginPage),
    Console {
        session: Session,
        route: Route,
        view: PageView,
    },
}

pub struct App {
    terminal: Terminal,
    store: Arc<dyn Store>,
    directory: Directory,
    settings: SettingsProvider,
    theme: ThemeChoice,
    screen: Screen,
    status: Option<String>,
}

impl App {
    pub async fn new(
        store: Arc<dyn Store>,
        directory: Directory,
        settings: SettingsProvider,
    ) -> Result<Self, AppError> {
        let theme = match settings.get_or(THEME_KEY, ThemeChoice::default()).await {
            Ok(theme) => theme,
            Err(e) => {
                warn!("failed to read theme setting: {e}");
                ThemeChoice::default()
            }
        };

        let screen = match settings.get::<Session>(SESSION_KEY).await {
            Ok(Some(session)) => {
                info!("restored session for {}", session.operator.email);
                let view = pages::open(Route::Dashboard, store.as_ref()).await?;
                Screen::Console {
                    session,
                    route: Route::Dashboard,
                    view,
                }
            }
            Ok(None) => Screen::Login(LoginPage::new()),
            Err(e) => {
                warn!("failed to restore session: {e}");
                Screen::Login(LoginPage::new())
            }
        };

        // Raw mode last, so setup errors leave the terminal untouched
        let terminal = Terminal::new()?;
        Ok(Self {
            terminal,
            store,
            directory,
            settings,
            theme,
            screen,
            status: None,
        })
    }

    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.draw()?;
            let Some(event) = self.terminal.poll(TICK)? else {
                continue;
            };
            match event {
                Event::Resize { .. } => {}
                Event::Key { key, modifiers } => {
                    if !self.handle_key(key, modifiers).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Returns false when the application should exit.
    async fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Result<bool, AppError> {
        if modifiers.ctrl && key == Key::Char('q') {
            return Ok(false);
        }

        match &mut self.screen {
            Screen::Login(login) => {
                let outcome = login.handle_key(key, modifiers);
                match outcome {
                    LoginOutcome::Submit { email, password } => {
                        self.try_sign_in(email, password).await?;
                    }
                    LoginOutcome::Consumed => {}
                    LoginOutcome::Ignored => {
                        if key == Key::Escape {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            }
            Screen::Console { .. } => self.handle_console_key(key, modifiers).await,
        }
    }

    async fn handle_console_key(&mut self, key: Key, modifiers: Modifiers) -> Result<bool, AppError> {
        // The active listing gets first refusal
        let outcome = match &mut self.screen {
            Screen::Console {
                view: PageView::List(page),
                ..
            } => page.handle_key(key, modifiers),
            _ => ListOutcome::Ignored,
        };
        match outcome {
            ListOutcome::Consumed => return Ok(true),
            ListOutcome::Activate(id, row) => {
                self.activate(id, row).await?;
                return Ok(true);
            }
            ListOutcome::Ignored => {}
        }

        match key {
            Key::Char('q') => return Ok(false),
            Key::Char('t') => self.toggle_theme().await,
            Key::Char('x') => self.sign_out().await,
            Key::Char(c) => {
                if let Some(route) = nav::route_for_key(c) {
                    self.navigate(route).await;
                }
            }
            _ => {}
        }
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    async fn try_sign_in(&mut self, email: String, password: String) -> Result<(), AppError> {
        match self.directory.authenticate(&email, &password).await {
            Ok(session) => {
                if let Err(e) = self.settings.set(SESSION_KEY, &session).await {
                    warn!("failed to persist session: {e}");
                }
                let view = pages::open(Route::Dashboard, self.store.as_ref()).await?;
                self.status = Some(format!("Signed in as {}", session.operator.email));
                self.screen = Screen::Console {
                    session,
                    route: Route::Dashboard,
                    view,
                };
            }
            Err(e) => {
                if let Screen::Login(login) = &mut self.screen {
                    login.set_error(e.to_string());
                }
            }
        }
        Ok(())
    }

    async fn sign_out(&mut self) {
        if let Screen::Console { session, .. } = &self.screen {
            info!("operator {} signed out", session.operator.email);
        }
        if let Err(e) = self.settings.delete(SESSION_KEY).await {
            warn!("failed to clear persisted session: {e}");
        }
        self.screen = Screen::Login(LoginPage::new());
        self.status = None;
    }

    async fn navigate(&mut self, route: Route) {
        let Screen::Console { route: current, .. } = &self.screen else {
            return;
        };
        if *current == route {
            return;
        }
        match pages::open(route, self.store.as_ref()).await {
            Ok(view) => {
                if let Screen::Console {
                    route: r, view: v, ..
                } = &mut self.screen
                {
                    *r = route;
                    *v = view;
                }
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    async fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.settings.set(THEME_KEY, &self.theme).await {
            warn!("failed to persist theme: {e}");
        }
        self.status = Some(format!("Theme: {}", self.theme.label()));
    }

    /// Perform the active page's row action on the cursor record.
    async fn activate(&mut self, id: Uuid, row: Row) -> Result<(), AppError> {
        let Screen::Console { route, .. } = &self.screen else {
            return Ok(());
        };

        let message = match route {
            Route::Devices => {
                let current = row
                    .get("access")
                    .and_then(Value::text)
                    .unwrap_or_default();
                match next_access(&current) {
                    Some(next) => Some(match self.store.set_device_access(id, next).await {
                        Ok(()) => format!("Device access set to {next}"),
                        Err(e) => e.to_string(),
                    }),
                    None => None,
                }
            }
            Route::Violations => Some(match self.store.resolve_violation(id).await {
                Ok(()) => "Violation resolved".to_string(),
                Err(e) => e.to_string(),
            }),
            Route::Alerts => Some(match self.store.acknowledge_alert(id).await {
                Ok(()) => "Alert acknowledged".to_string(),
                Err(e) => e.to_string(),
            }),
            _ => None,
        };

        if let Some(message) = message {
            self.status = Some(message);
            self.refresh_current().await?;
        }
        Ok(())
    }

    async fn refresh_current(&mut self) -> Result<(), AppError> {
        let route = match &self.screen {
            Screen::Console { route, .. } => *route,
            Screen::Login(_) => return Ok(()),
        };
        if let Screen::Console {
            view: PageView::List(page),
            ..
        } = &mut self.screen
        {
            pages::refresh(route, page, self.store.as_ref()).await?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn draw(&mut self) -> io::Result<()> {
        let (width, height) = self.terminal.size()?;
        let mut buf = Buffer::new(width, height);
        let palette = self.theme.palette();
        buf.fill(palette.text, palette.background);
        let area = Rect::from_size(width, height);

        match &self.screen {
            Screen::Login(login) => login.draw(&mut buf, area, &palette),
            Screen::Console {
                session,
                route,
                view,
            } => draw_console(
                &mut buf,
                area,
                &palette,
                session,
                *route,
                view,
                self.status.as_deref(),
            ),
        }

        self.terminal.draw(&buf)
    }
}

fn draw_console(
    buf: &mut Buffer,
    area: Rect,
    palette: &Palette,
    session: &Session,
    route: Route,
    view: &PageView,
    status: Option<&str>,
) {
    if area.is_empty() || area.height < 4 {
        return;
    }
    let (header, rest) = area.split_top(1);
    let (body, statusline) = rest.split_top(rest.height.saturating_sub(1));
    let (sidebar, content) = body.split_left(SIDEBAR_WIDTH);

    draw_header(buf, header, palette, session);
    draw_sidebar(buf, sidebar, palette, route);

    // Breathing room between the sidebar and the page
    let (_, content) = content.split_left(2);
    match view {
        PageView::Dashboard(dashboard) => dashboard.draw(buf, content, palette),
        PageView::List(page) => page.draw(buf, content, palette),
    }

    buf.fill_row(statusline.x, statusline.y, statusline.width, palette.surface);
    let text = status.unwrap_or(CONSOLE_HINTS);
    buf.put_str(
        statusline.x + 1,
        statusline.y,
        text,
        palette.muted,
        palette.surface,
        TextStyle::new(),
    );
}

fn draw_header(buf: &mut Buffer, area: Rect, palette: &Palette, session: &Session) {
    buf.fill_row(area.x, area.y, area.width, palette.surface);
    buf.put_str(
        area.x + 1,
        area.y,
        "endguard",
        palette.primary,
        palette.surface,
        TextStyle::bold(),
    );
    buf.put_str(
        area.x + 10,
        area.y,
        "device control console",
        palette.muted,
        palette.surface,
        TextStyle::new(),
    );

    let who = format!(
        "{} ({})",
        session.operator.email, session.operator.role
    );
    let w = display_width(&who) as u16;
    if w + 1 < area.width {
        buf.put_str(
            area.right() - w - 1,
            area.y,
            &who,
            palette.muted,
            palette.surface,
            TextStyle::new(),
        );
    }
}

fn draw_sidebar(buf: &mut Buffer, area: Rect, palette: &Palette, active: Route) {
    for y in area.y..area.bottom() {
        buf.fill_row(area.x, y, area.width, palette.surface);
    }

    let mut y = area.y + 1;
    for section in nav::SECTIONS {
        if y >= area.bottom() {
            break;
        }
        buf.put_str(
            area.x + 1,
            y,
            section.title,
            palette.muted,
            palette.surface,
            TextStyle::new(),
        );
        y += 1;
        for entry in section.entries {
            if y >= area.bottom() {
                break;
            }
            let (fg, style) = if entry.route == active {
                (palette.primary, TextStyle::bold())
            } else {
                (palette.text, TextStyle::new())
            };
            let line = format!("{} {}", entry.key, entry.label);
            buf.put_str(area.x + 2, y, &line, fg, palette.surface, style);
            y += 1;
        }
        y += 1;
    }
}
