//! Terminal Game of Life runner.
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_life::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_life::config::{Cli, LifeConfig};
use tui_life::core::Session;
use tui_life::input::{handle_key_event, should_quit, InputContext, InputHandler};
use tui_life::logging::init_tracing;
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, ViewState, Viewport};
use tui_life::types::{tick_interval_ms, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LifeConfig::resolve(&cli)?;
    init_tracing(config.log_file.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &LifeConfig) -> Result<()> {
    let mut session = config.build_session();
    let mut input = InputHandler::new(session.pattern_names());
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<String> = None;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let ui = ViewState {
            cursor: input.cursor(),
            menu_index: input.menu_index(),
            status: status.as_deref(),
        };
        view.render_into(&session, &ui, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next generation.
        let tick_duration = Duration::from_millis(tick_interval_ms(session.speed()) as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(generation = session.generation(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let ctx = InputContext {
                            width: session.grid().width(),
                            height: session.grid().height(),
                            placing: session.selected_pattern().is_some(),
                            draw_mode: session.draw_mode(),
                        };
                        if let Some(command) = input.handle(action, ctx) {
                            status = apply_command(&mut session, command);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}

/// Apply one command and return the status line it leaves behind
fn apply_command(session: &mut Session, command: Command) -> Option<String> {
    let name = command.as_str();
    let done = match command {
        Command::Save => Some(format!("saved to {}", session.save_path().display())),
        Command::Load => Some(format!("loaded {}", session.save_path().display())),
        _ => None,
    };

    match session.apply(command) {
        Ok(_) => done,
        Err(err) => {
            warn!(command = name, %err, "command failed");
            Some(format!("{name} failed: {err}"))
        }
    }
}
