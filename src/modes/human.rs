use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Interactive session: owns the game state for its whole lifetime
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(&config);
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval: config.tick_interval(),
        }
    }

    /// Final or current state of the session
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        debug!("Terminal ready");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut ctrl_c_armed = true;

        info!(
            "Session started, one tick every {} ms",
            self.tick_interval.as_millis()
        );

        while self.state.is_running() {
            tokio::select! {
                // Input arriving between ticks forms the next tick's batch
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.engine.quit(&mut self.state),
                    }
                }

                _ = tick_timer.tick() => {
                    self.tick(terminal)?;
                }

                // A resolved signal future must not be polled again
                signal = &mut ctrl_c, if ctrl_c_armed => {
                    ctrl_c_armed = false;
                    self.handle_interrupt(signal);
                }
            }
        }

        Ok(())
    }

    /// Spawn fruit, draw, then advance the game by one step
    fn tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.engine.ensure_fruit(&mut self.state);

        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.state);
            })
            .context("Failed to draw frame")?;

        self.engine.step(&mut self.state);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.steer(&mut self.state, direction);
                }
                KeyAction::Quit => {
                    self.engine.quit(&mut self.state);
                }
                KeyAction::None => {}
            }
        }
    }

    /// Ctrl+C from the OS quits; a handler that failed to install only warns,
    /// raw mode still delivers Ctrl+C as a key event
    fn handle_interrupt(&mut self, signal: io::Result<()>) {
        match signal {
            Ok(()) => self.engine.quit(&mut self.state),
            Err(err) => warn!("Ctrl+C handler unavailable: {}", err),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        debug!("Terminal restored");
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = (|| -> Result<_> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    })();

    undo_on_error(terminal, disable_raw_mode)
}

/// Run `undo` before handing back an error, so a half-finished setup is rolled back
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(err) = undo() {
            warn!("Rollback after failed setup also failed: {}", err);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, StopReason};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, style::Color};
    use std::cell::Cell;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert!(mode.state().is_running());
        assert_eq!(mode.state().score.value(), 0);
        assert_eq!(mode.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_escape_stops_session() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(key(KeyCode::Esc, KeyEventKind::Press));

        assert_eq!(mode.state().stop_reason(), Some(StopReason::Quit));
    }

    #[test]
    fn test_arrow_sets_pending_heading() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(key(KeyCode::Up, KeyEventKind::Press));
        mode.handle_event(key(KeyCode::Left, KeyEventKind::Press));

        assert_eq!(mode.state().snake.next_heading(), Direction::Up);
        assert_eq!(mode.state().snake.heading(), Direction::Right);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(key(KeyCode::Esc, KeyEventKind::Release));
        mode.handle_event(key(KeyCode::Down, KeyEventKind::Release));

        assert!(mode.state().is_running());
        assert_eq!(mode.state().snake.next_heading(), Direction::Right);
    }

    #[test]
    fn test_tick_draws_before_stepping() {
        let mut mode = HumanMode::new(GameConfig::default().with_seed(11));
        mode.state.fruit = None;
        let mut terminal = Terminal::new(TestBackend::new(52, 29)).expect("test terminal");

        mode.tick(&mut terminal).expect("tick");

        // Fruit was spawned before drawing and the snake has moved since
        let fruit = mode.state().fruit.expect("fruit spawned");
        assert_eq!(mode.state().ticks, 1);
        assert_eq!(mode.state().snake.head(), Position::new(110, 50));

        let buffer = terminal.backend().buffer();
        let at = |pos: Position| {
            let (column, row) = (pos.x / 10, pos.y / 10);
            let cell = &buffer.content()[buffer.index_of(1 + column as u16, 2 + (row / 2) as u16)];
            if row % 2 == 0 { cell.fg } else { cell.bg }
        };

        // The frame shows the head where it was before the step
        assert_eq!(at(Position::new(100, 50)), Color::LightGreen);
        assert_ne!(at(Position::new(110, 50)), Color::LightGreen);
        assert_eq!(at(fruit), Color::Red);
    }

    #[test]
    fn test_interrupt_quits() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_interrupt(Ok(()));

        assert_eq!(mode.state().stop_reason(), Some(StopReason::Quit));
    }

    #[test]
    fn test_failed_interrupt_handler_keeps_running() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_interrupt(Err(io::Error::other("no signal support")));

        assert!(mode.state().is_running());
    }

    #[test]
    fn test_undo_runs_only_on_error() {
        let undone = Cell::new(false);
        let undo = || {
            undone.set(true);
            Ok(())
        };

        let ok: Result<u8> = undo_on_error(Ok(1), undo);
        assert_eq!(ok.unwrap(), 1);
        assert!(!undone.get());

        let failed: Result<u8> = undo_on_error(Err(anyhow::anyhow!("no tty")), || {
            undone.set(true);
            Ok(())
        });
        assert!(failed.is_err());
        assert!(undone.get());
    }
}
