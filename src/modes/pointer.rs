//! Pointer play: a continuous cursor position steers the snake.
//!
//! The terminal mouse is the pointer source. Every mouse event is one
//! sample: the cursor cell is normalized onto the unit square and mapped to
//! a steering command. Commands land in a single latest-direction slot that
//! the fixed-rate tick loop reads, so sampling cadence and tick cadence stay
//! independent and the most recent command wins. A centered or absent
//! pointer maps to no command, and the snake keeps its last heading.
//!
//! Keyboard steering stays available as a manual override through the same
//! slot.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine};
use crate::gesture::{map_position, normalized_position, GestureConfig};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Hud, Renderer};

pub struct PointerMode {
    engine: GameEngine,
    gesture: GestureConfig,
    metrics: SessionMetrics,
    renderer: Renderer,
    input: InputHandler,
    /// Terminal extent in cells, the pointer's sampling frame.
    extent: (u16, u16),
    /// Latest command from either source. Unlike keyboard mode this slot is
    /// not consumed by the tick: the pointer keeps steering until it says
    /// otherwise, so a hand resting off-center keeps its direction alive.
    latest_direction: Option<Direction>,
    paused: bool,
    should_quit: bool,
}

impl PointerMode {
    pub fn new(config: GameConfig, gesture: GestureConfig) -> Result<Self> {
        let extent = crossterm::terminal::size().context("failed to query terminal size")?;

        Ok(Self {
            engine: GameEngine::new(config)?,
            gesture,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            extent,
            latest_direction: None,
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.game_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;
        result
    }

    async fn game_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick_timer = interval(self.engine.config().tick_interval());
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                _ = tick_timer.tick() => {
                    self.advance_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let hud = Hud {
                        paused: self.paused,
                        command: self.latest_direction,
                        hint: "pointer mode: steer by moving the cursor away from the screen center",
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics, &hud);
                    }).context("failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input.handle_key_event(key) {
                    KeyAction::Steer(direction) => self.latest_direction = Some(direction),
                    KeyAction::Pause => self.paused = !self.paused,
                    KeyAction::Restart => self.restart(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Ignored => {}
                }
            }
            Event::Mouse(mouse) => self.sample_pointer(mouse)?,
            Event::Resize(columns, rows) => self.extent = (columns, rows),
            _ => {}
        }
        Ok(())
    }

    /// Feeds one pointer sample through the mapper into the shared slot.
    fn sample_pointer(&mut self, mouse: MouseEvent) -> Result<()> {
        let (columns, rows) = self.extent;
        let position = normalized_position(mouse.column, mouse.row, columns, rows);

        if let Action::Move(direction) = map_position(Some(position), self.gesture.threshold)? {
            self.latest_direction = Some(direction);
        }
        Ok(())
    }

    fn advance_game(&mut self) {
        if self.paused || !self.engine.state().is_running() {
            return;
        }

        let outcome = self.engine.tick(Action::from(self.latest_direction));

        if outcome.ate_food {
            self.metrics.on_food();
        }
        if outcome.collision.is_some() {
            self.metrics.on_game_over(self.engine.state().score);
        }
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.metrics.on_reset();
        self.latest_direction = None;
        self.paused = false;
    }

    fn restore_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
