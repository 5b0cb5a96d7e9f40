//! Keyboard play: arrow keys or WASD steer the snake directly.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Hud, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input: InputHandler,
    /// Latest steering key since the previous tick; consumed by the tick.
    latest_direction: Option<Direction>,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            engine: GameEngine::new(config)?,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            latest_direction: None,
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
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
                        self.handle_event(event);
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
                        hint: "keyboard mode",
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

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input.handle_key_event(key) {
            KeyAction::Steer(direction) => self.latest_direction = Some(direction),
            KeyAction::Pause => self.paused = !self.paused,
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignored => {}
        }
    }

    fn advance_game(&mut self) {
        if self.paused || !self.engine.state().is_running() {
            return;
        }

        let action = Action::from(self.latest_direction.take());
        let outcome = self.engine.tick(action);

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
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
