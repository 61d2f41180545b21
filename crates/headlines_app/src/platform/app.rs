use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_debug, engine_info};
use headlines_core::{
    end_reached, update, ListState, ListViewModel, Msg, RenderMode, Viewport,
    END_REACHED_THRESHOLD,
};
use headlines_engine::EngineHandle;
use log::LevelFilter;

use super::config::AppConfig;
use super::effects::{EffectRunner, Navigator};
use super::logging;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;
    logging::initialize(config.log_destination, LevelFilter::Info);
    engine_info!(
        "Starting headlines country={} page_size={}",
        config.country,
        config.page_size
    );

    let engine = EngineHandle::new(config.fetch_settings()).context("starting fetch engine")?;
    let runner = EffectRunner::new(engine, TerminalNavigator);
    let mut screen = Screen::new(ListState::new(config.list_query()), runner, config.viewport_rows);

    let (input_tx, input_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(command) => {
                    if input_tx.send(command).is_err() {
                        break;
                    }
                }
                None => println!("{HELP}"),
            }
        }
        // End of input closes the screen.
        let _ = input_tx.send(Command::Quit);
    });

    println!("{HELP}");
    screen.dispatch(Msg::Initialize);
    screen.render_if_dirty();

    loop {
        for msg in screen.runner.poll() {
            screen.dispatch(msg);
        }
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(command) => screen.handle_command(command),
            Err(RecvTimeoutError::Timeout) => {}
        }
        screen.render_if_dirty();
    }

    engine_info!("Screen closed");
    Ok(())
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn open(&mut self, url: &str) {
        println!("Open: {url}");
    }
}

/// Single owner of the list state; every message goes through `dispatch`.
struct Screen<N> {
    state: ListState,
    runner: EffectRunner<N>,
    viewport: Viewport,
    redraw: bool,
}

impl<N: Navigator> Screen<N> {
    fn new(state: ListState, runner: EffectRunner<N>, rows: usize) -> Self {
        Self {
            state,
            runner,
            viewport: Viewport { first: 0, len: rows },
            redraw: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let intent = msg.intent();
        let outcome_id = match &msg {
            Msg::FetchDone { request_id, .. } => Some(*request_id),
            _ => None,
        };
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        } else if effects.is_empty() {
            if let Some(intent) = intent {
                engine_debug!("Dropped intent {:?}", intent);
            } else if let Some(request_id) = outcome_id {
                engine_debug!("Discarded stale outcome of fetch {}", request_id);
            }
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Refresh => self.dispatch(Msg::Refresh),
            // Retry is only offered by the error view.
            Command::Retry if self.state.render_mode() == RenderMode::ErrorEmpty => {
                self.dispatch(Msg::Retry)
            }
            Command::Retry => engine_debug!("Retry ignored outside the error view"),
            Command::Open(row) => self.dispatch(Msg::ArticleActivated { index: row - 1 }),
            Command::ScrollDown => self.scroll_by(self.viewport.len as isize),
            Command::ScrollUp => self.scroll_by(-(self.viewport.len as isize)),
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let count = self.state.items().len();
        let max_first = count.saturating_sub(self.viewport.len);
        self.viewport.first = self.viewport.first.saturating_add_signed(delta).min(max_first);
        self.redraw = true;

        if end_reached(self.viewport, count, END_REACHED_THRESHOLD) {
            self.dispatch(Msg::LoadMore);
        }
    }

    fn render_if_dirty(&mut self) {
        if !std::mem::take(&mut self.redraw) {
            return;
        }
        let view = self.state.view();
        self.clamp_viewport(&view);
        print_lines(&render(&view, self.viewport));
    }

    /// Keeps the viewport inside the list after a refresh shrinks it.
    fn clamp_viewport(&mut self, view: &ListViewModel) {
        if matches!(view.mode, RenderMode::Populated { .. }) {
            let max_first = view.rows.len().saturating_sub(self.viewport.len);
            self.viewport.first = self.viewport.first.min(max_first);
        } else {
            self.viewport.first = 0;
        }
    }
}

fn print_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
