use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::game::{Board, GameState, Position};

const HEAD_COLOR: Color = Color::LightGreen;
const BODY_COLOR: Color = Color::Green;
const FRUIT_COLOR: Color = Color::Red;

/// Upper half filled with the foreground, lower half shows the background
const HALF_BLOCK: &str = "▀";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Terminal size needed to show the whole board: one column per cell,
    /// two board rows per terminal row, plus borders, header and footer
    pub fn required_size(board: &Board) -> (u16, u16) {
        let width = board.columns() + 2;
        let height = (board.rows() + 1) / 2 + 2 + 2;
        (width as u16, height as u16)
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let area = frame.area();
        let (min_width, min_height) = Self::required_size(&state.board);

        if area.width < min_width || area.height < min_height {
            frame.render_widget(self.render_too_small(area, min_width, min_height), area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),              // Header
                Constraint::Length(min_height - 2), // Board
                Constraint::Length(1),              // Footer
            ])
            .split(area);

        let board_area = Rect {
            width: min_width,
            ..chunks[1]
        };

        frame.render_widget(self.render_stats(state), chunks[0]);
        frame.render_widget(self.render_board(state), board_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn cell_color(&self, state: &GameState, pos: Position) -> Option<Color> {
        if pos == state.snake.head() {
            Some(HEAD_COLOR)
        } else if state.snake.occupies(pos) {
            Some(BODY_COLOR)
        } else if state.fruit == Some(pos) {
            Some(FRUIT_COLOR)
        } else {
            None
        }
    }

    /// Each terminal line packs two board rows into half-block glyphs
    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let rows = state.board.rows();
        let mut lines = Vec::with_capacity(((rows + 1) / 2) as usize);

        for row in (0..rows).step_by(2) {
            let mut spans = Vec::with_capacity(state.board.columns() as usize);

            for column in 0..state.board.columns() {
                let top = self.cell_color(state, Position::from_cell(column, row));
                let bottom = if row + 1 < rows {
                    self.cell_color(state, Position::from_cell(column, row + 1))
                } else {
                    None
                };

                let cell = match (top, bottom) {
                    (None, None) => Span::raw(" "),
                    (top, bottom) => Span::styled(
                        HALF_BLOCK,
                        Style::default()
                            .fg(top.unwrap_or(Color::Reset))
                            .bg(bottom.unwrap_or(Color::Reset)),
                    ),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_too_small(&self, area: Rect, min_width: u16, min_height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "need {}x{}, have {}x{}",
                min_width, min_height, area.width, area.height
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn render_stats(&self, state: &GameState) -> Paragraph<'_> {
        let spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ];

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
