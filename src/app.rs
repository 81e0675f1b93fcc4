use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use crate::{
    constants::{MESSAGES, TIME_SETTINGS},
    domain::{PlantingTracker, StatusMessage},
    export,
    rain::{RainController, SystemClock, Viewport},
};

mod event_handlers;
mod form_state;
mod rain_overlay;
mod render_views;
mod ui_helpers;
mod view_style;

use form_state::FormState;

struct App {
    tracker: PlantingTracker,
    rain: RainController,
    form: FormState,
    export_path: PathBuf,
    render_needed: bool,
}

impl App {
    fn new(export_path: PathBuf) -> Self {
        Self {
            tracker: PlantingTracker::new(),
            rain: RainController::new(Viewport::default(), SystemClock::new()),
            form: FormState::default(),
            export_path,
            render_needed: true,
        }
    }

    /// Fields are only cleared when the record was accepted.
    fn submit_form(&mut self) {
        let raw = self.form.to_submission();
        if let Some(seed) = self.tracker.submit(&raw) {
            self.form.clear();
            self.rain.start(seed);
        }
        self.render_needed = true;
    }

    fn export_records(&mut self) {
        let status = match export::export_to_file(&self.export_path, self.tracker.records()) {
            Ok(()) => StatusMessage::success(format!(
                "{} {}",
                MESSAGES.export_done,
                self.export_path.display()
            )),
            Err(e) => {
                error!(error = %e, "export failed");
                StatusMessage::warning(format!("{} {}", MESSAGES.export_failed, e))
            }
        };
        self.tracker.set_status(status);
        self.render_needed = true;
    }

    fn tick(&mut self) {
        let was_active = self.rain.is_active();
        let moved = self.rain.update();
        if moved || was_active {
            self.render_needed = true;
        }
    }
}

/// Runs `restore` when dropped, so the terminal is handed back even when the
/// event loop bails out early with an error.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "failed to leave alternate screen");
    }
}

fn next_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

pub fn run_ui(export_path: PathBuf) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(export = %export_path.display(), "ui started");
    let mut app = App::new(export_path);

    let result = run_loop(&mut terminal, &mut app, next_event);
    info!(records = app.tracker.records().len(), "ui closed");
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut next_event: impl FnMut(Duration) -> io::Result<Option<Event>>,
) -> io::Result<()> {
    let frame_rate = Duration::from_millis(TIME_SETTINGS.frame_ms);
    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_frame = Instant::now();
    let mut last_render = Instant::now();

    loop {
        if last_frame.elapsed() >= frame_rate {
            app.tick();
            last_frame = Instant::now();
        }

        if last_render.elapsed() >= render_rate && app.render_needed {
            terminal.draw(|f| {
                app.draw_frame(f);
            })?;
            app.render_needed = false;
            last_render = Instant::now();
        }

        match next_event(Duration::from_millis(1))? {
            Some(Event::Key(key)) => {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
            Some(Event::Resize(..)) => app.render_needed = true,
            _ => {}
        }
    }
}
