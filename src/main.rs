mod app;
mod config;
mod engine;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::engine::DiceEngine;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let mut engine = DiceEngine::new();
    engine.subscribe(|snapshot| tracing::trace!(?snapshot, "dice state changed"));

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task for transient status expiry
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    let size = terminal.size()?;
    state.dice_cells = ui::layout::compute_layout(Rect::new(0, 0, size.width, size.height)).dice_cells;
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let actions = tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                handler::handle_event(&mut state, event)
            }
            action = engine.recv() => {
                engine.apply(&action);
                state.dice = engine.current_state();
                state.dirty = true;
                Vec::new()
            }
        };

        // Process actions
        for action in actions {
            match action {
                Action::Roll(die) => {
                    engine.start_roll(die);
                }
                Action::ResetDice => {
                    engine.dispatch_reset();
                    state.dice = engine.current_state();
                    state.set_status("Dice cleared");
                }
                Action::SaveConfig => {
                    if let Err(e) = config::save_config(&state.config) {
                        tracing::warn!(error = %e, "failed to save config");
                        state.set_status(format!("Save failed: {}", e));
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            let size = terminal.size()?;
            let full = Rect::new(0, 0, size.width, size.height);
            state.dice_cells = ui::layout::compute_layout(full).dice_cells;
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
