use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{GameState, Position};
use crate::metrics::SessionMetrics;

/// Driver-side display state the game engine knows nothing about.
pub struct Hud {
    /// The driver is holding ticks.
    pub paused: bool,
    /// Most recent steering command, from pointer or keys.
    pub command: Option<crate::game::Direction>,
    /// Mode-specific control hint for the footer.
    pub hint: &'static str,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &SessionMetrics, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // status line
                Constraint::Min(0),    // board
                Constraint::Length(2), // controls
            ])
            .split(frame.area());

        frame.render_widget(self.status_line(state, metrics, hud), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_running() {
            frame.render_widget(self.board(state), board_area);
        } else {
            frame.render_widget(self.game_over(state), board_area);
        }

        if hud.paused {
            let overlay = centered(board_area, 30, 3);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.paused_banner(), overlay);
        }

        frame.render_widget(self.controls(hud), chunks[2]);
    }

    fn status_line(
        &self,
        state: &GameState,
        metrics: &SessionMetrics,
        hud: &Hud,
    ) -> Paragraph<'_> {
        let command = hud.command.map_or("-", |d| d.as_str());

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_elapsed(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("Heading: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.snake.direction.as_str(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("Command: ", Style::default().fg(Color::Yellow)),
            Span::styled(command, Style::default().fg(Color::Green)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn board(&self, state: &GameState) -> Paragraph<'_> {
        let cell = state.cell_size;
        let (head_col, head_row) = state.snake.head().cell_index(cell);
        let mut lines = Vec::new();

        for row in 0..state.board_height / cell {
            let mut spans = Vec::new();

            for col in 0..state.board_width / cell {
                let pos = Position::new(col * cell, row * cell);

                let glyph = if (col, row) == (head_col, head_row) {
                    Span::styled(
                        "■ ",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Cyan))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(glyph);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" hand_snake "),
            )
            .alignment(Alignment::Center)
    }

    fn game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" to restart"),
            ]),
        ];

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double))
            .alignment(Alignment::Center)
    }

    fn paused_banner(&self) -> Paragraph<'_> {
        Paragraph::new(vec![Line::from(Span::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))])
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
    }

    fn controls(&self, hud: &Hud) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Arrows/WASD steer   P pause   R restart   Q quit",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(hud.hint, Style::default().fg(Color::DarkGray))),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width`x`height` rect centered inside `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
