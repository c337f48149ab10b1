use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;

use crate::game::{Position, Snapshot};
use crate::menu::{MainMenuItem, Menu, OptionsItem};
use crate::metrics::GameMetrics;
use crate::settings::{ColorChoice, Settings};

const HEAD_GLYPH: &str = "■ ";
const BODY_GLYPH: &str = "□ ";
const FOOD_GLYPH: &str = "O ";
const EMPTY_GLYPH: &str = ". ";

fn to_color(choice: ColorChoice) -> Color {
    let (r, g, b) = choice.rgb();
    Color::Rgb(r, g, b)
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a game in progress, or the game over panel once it has ended
    pub fn render_game(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        settings: &Settings,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, settings, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = centered_column(chunks[1]);

        if snapshot.is_running() {
            let (need_width, need_height) = board_size(snapshot);
            let fits = game_area.width as usize >= need_width
                && game_area.height as usize >= need_height;
            if !fits {
                let warning = self.render_too_small(game_area, need_width, need_height);
                frame.render_widget(warning, game_area);
            } else {
                let grid = self.render_grid(snapshot, settings);
                frame.render_widget(grid, game_area);
            }
        } else {
            let game_over = self.render_game_over(snapshot);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    pub fn render_main_menu(&self, frame: &mut Frame, menu: &Menu<MainMenuItem>) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Snake Game",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, item) in menu.items().iter().enumerate() {
            let selected = i == menu.selected_index();
            lines.push(Line::from(Span::styled(item.label(), highlight(selected))));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Use Arrow Keys to Navigate, Enter to Select",
            Style::default().fg(Color::Gray),
        )));

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake "),
        );
        frame.render_widget(panel, centered_column(frame.area()));
    }

    pub fn render_options(&self, frame: &mut Frame, menu: &Menu<OptionsItem>, settings: &Settings) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Options",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, item) in menu.items().iter().enumerate() {
            let style = highlight(i == menu.selected_index());
            let mut spans = vec![Span::styled(format!("{:<12}", item.label()), style)];

            match item {
                OptionsItem::Difficulty => {
                    spans.push(Span::styled(
                        format!("< {} >", settings.difficulty.as_str()),
                        style,
                    ));
                }
                OptionsItem::SnakeColor => {
                    spans.extend(color_preview(settings.snake_color, style));
                }
                OptionsItem::FoodColor => {
                    spans.extend(color_preview(settings.food_color, style));
                }
                OptionsItem::Back => {}
            }

            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Use Arrow Keys to Navigate and Change Values",
            Style::default().fg(Color::Gray),
        )));

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Options "),
        );
        frame.render_widget(panel, centered_column(frame.area()));
    }

    fn render_grid(&self, snapshot: &Snapshot, settings: &Settings) -> Paragraph<'static> {
        let head = snapshot.head();
        let body: HashSet<Position> = snapshot.segments.iter().copied().collect();
        let body_style = Style::default().fg(to_color(settings.snake_color));
        let food_style = Style::default()
            .fg(to_color(settings.food_color))
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::with_capacity(snapshot.grid.height);

        for y in 0..snapshot.grid.height {
            let mut spans = Vec::with_capacity(snapshot.grid.width);

            for x in 0..snapshot.grid.width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    // Snake head - distinct color
                    Span::styled(
                        HEAD_GLYPH,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled(BODY_GLYPH, body_style)
                } else if pos == snapshot.food {
                    Span::styled(FOOD_GLYPH, food_style)
                } else {
                    Span::styled(EMPTY_GLYPH, Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_too_small(
        &self,
        area: Rect,
        need_width: usize,
        need_height: usize,
    ) -> Paragraph<'static> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "need {}x{}, have {}x{}",
                    need_width, need_height, area.width, area.height
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot,
        settings: &Settings,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.segments.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(settings.difficulty.as_str(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let reason = snapshot
            .game_over_reason
            .map(|reason| format!("The snake {}", reason.as_str()))
            .unwrap_or_default();

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "M",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for menu", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" for menu | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns and rows the bordered board takes: two columns per cell
fn board_size(snapshot: &Snapshot) -> (usize, usize) {
    (snapshot.grid.width * 2 + 2, snapshot.grid.height + 2)
}

/// Middle 80% of an area
fn centered_column(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area)[1]
}

fn color_preview(choice: ColorChoice, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled("██ ", Style::default().fg(to_color(choice))),
        Span::styled(choice.as_str(), style),
    ]
}
