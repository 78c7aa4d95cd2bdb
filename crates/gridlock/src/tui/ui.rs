//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::config::{AppConfig, MarkerColor};
use gridlock_core::{Cell, Marker};

const TITLE: &str = "Gridlock - Tic Tac Toe";
const BOARD_HINTS: &str = "Arrows: Move | Enter/1-9: Play | r: Restart | q: Quit";
const NAME_HINTS: &str = "Type name | Enter: Confirm | Backspace: Delete | Esc: Quit";

impl From<MarkerColor> for Color {
    fn from(color: MarkerColor) -> Self {
        match color {
            MarkerColor::Blue => Color::Blue,
            MarkerColor::Red => Color::Red,
            MarkerColor::Green => Color::Green,
            MarkerColor::Yellow => Color::Yellow,
            MarkerColor::Magenta => Color::Magenta,
            MarkerColor::Cyan => Color::Cyan,
            MarkerColor::White => Color::White,
        }
    }
}

/// Renders the board screen.
pub fn draw(frame: &mut Frame, app: &App<'_>, config: &AppConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_board(frame, chunks[1], app, config);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let notice = Paragraph::new(app.notice().unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(notice, chunks[3]);

    if *config.show_hints() {
        draw_hints(frame, chunks[4], BOARD_HINTS);
    }
}

/// Renders the name prompt for the player holding `marker`.
pub fn draw_name_entry(
    frame: &mut Frame,
    marker: Marker,
    input: &str,
    error: Option<&str>,
    config: &AppConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    let marker_style = Style::default()
        .fg(Color::from(config.color_for(marker)))
        .add_modifier(Modifier::BOLD);
    let title = Line::from(vec![
        Span::raw(" Name for player "),
        Span::styled(marker.to_string(), marker_style),
        Span::raw(" "),
    ]);
    let field = Paragraph::new(format!("{}_", input))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(field, center_rect(chunks[2], 40, 3));

    let error = Paragraph::new(error.unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error, chunks[3]);

    if *config.show_hints() {
        draw_hints(frame, chunks[5], NAME_HINTS);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, text: &str) {
    let hints = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App<'_>, config: &AppConfig) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, config, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App<'_>, config: &AppConfig, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, config, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App<'_>, config: &AppConfig, index: usize) {
    let game = app.game();
    let label = (index + 1).to_string();

    let (symbol, base_style) = match game.cells()[index] {
        Cell::Empty => (label, Style::default().fg(Color::DarkGray)),
        Cell::Occupied(marker) => (
            marker.to_string(),
            Style::default()
                .fg(Color::from(config.color_for(marker)))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = game
        .winning_line()
        .is_some_and(|line| line.contains(index));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == app.cursor() && !game.status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{MatchController, Player};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_screen_shows_status_line() {
        let x = Player::named(Marker::X, "Ada").unwrap();
        let o = Player::named(Marker::O, "Grace").unwrap();
        let mut game = MatchController::new(&x, &o).unwrap();
        game.play_turn(0).unwrap();
        let app = App::new(game);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, &app, &AppConfig::default()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Grace's turn"));
        assert!(text.contains(TITLE));
    }

    #[test]
    fn test_name_entry_shows_error() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                draw_name_entry(
                    frame,
                    Marker::O,
                    "Gra",
                    Some("Name cannot be empty"),
                    &AppConfig::default(),
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Name cannot be empty"));
        assert!(text.contains("Gra_"));
    }
}
