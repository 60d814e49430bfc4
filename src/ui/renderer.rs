use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::{Board, Cell, Game, GameState, PieceColor, Tetromino};

pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Cyan => Color::Cyan,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Purple => Color::Magenta,
        PieceColor::Green => Color::Green,
        PieceColor::Red => Color::Red,
        PieceColor::Blue => Color::Blue,
        PieceColor::Orange => Color::LightRed,
    }
}

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2; // rows + borders
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per block + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(18),          // Stats and controls
            Constraint::Length(board_width),
            Constraint::Length(14),          // Next piece
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let left_info_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let right_info_area = horizontal_chunks[3];

    render_board(f, game, board_area);
    render_left_info(f, game, left_info_area);
    render_next_piece(f, game.next_piece.as_ref(), right_info_area);

    match game.game_state {
        GameState::Idle => render_idle_overlay(f, board_area),
        GameState::Paused => render_paused_overlay(f, board_area),
        GameState::GameOver => render_game_over_overlay(f, game, board_area),
        GameState::Playing => {}
    }
}

/// Board with the falling piece drawn on top. Cells above row 0 are skipped.
pub fn compose_board(game: &Game) -> Board {
    let mut render_board = game.board;

    if let Some(piece) = &game.current_piece {
        for (x, y) in piece.blocks() {
            if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
                render_board[y as usize][x as usize] = Cell::Filled(piece.color);
            }
        }
    }

    render_board
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let render_board = compose_board(game);

    let board_lines: Vec<Line> = render_board
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Cell::Empty => {
                        if (x + y) % 2 == 0 {
                            Span::styled("░░", Style::default().fg(Color::DarkGray))
                        } else {
                            Span::raw("  ")
                        }
                    }
                    Cell::Filled(color) => {
                        Span::styled("██", Style::default().fg(piece_color(*color)))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("falltris"));

    f.render_widget(board_widget, area);
}

fn render_left_info(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Stats
            Constraint::Length(9),  // Controls
            Constraint::Min(1),
        ])
        .split(area);

    render_stats(f, game, chunks[0]);
    render_controls(f, chunks[1]);
}

fn stat_lines(label: &str, value: u32, color: Color) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(label.to_string(), Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ]
}

fn render_stats(f: &mut Frame, game: &Game, area: Rect) {
    let mut stats_text = Vec::new();
    stats_text.extend(stat_lines("SCORE", game.score, Color::Cyan));
    stats_text.push(Line::from(""));
    stats_text.extend(stat_lines("HIGH SCORE", game.high_score, Color::Yellow));
    stats_text.push(Line::from(""));
    stats_text.extend(stat_lines("LINES", game.lines_cleared, Color::White));
    stats_text.extend(stat_lines("LEVEL", game.level, Color::Green));

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let controls = [
        "←→/AD  Move",
        "↑/W    Rotate",
        "↓/S    Soft drop",
        "Space  Hard drop",
        "P      Pause",
        "R      Restart",
        "Q      Quit",
    ];
    let lines: Vec<Line> = controls.iter().map(|&text| Line::from(text)).collect();

    let controls_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    f.render_widget(controls_widget, area);
}

/// Rows of a 4×4 preview box with the piece centered in it.
pub fn preview_rows(piece: &Tetromino) -> Vec<Vec<bool>> {
    let size = piece.shape.len();
    let offset = (4 - size.min(4)) / 2;
    let mut rows = vec![vec![false; 4]; 4];

    for (i, row) in piece.shape.iter().enumerate().take(4) {
        for (j, &cell) in row.iter().enumerate().take(4) {
            if cell {
                rows[i + offset][j + offset] = true;
            }
        }
    }
    rows
}

fn render_next_piece(f: &mut Frame, next_piece: Option<&Tetromino>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let mut next_lines = vec![Line::from("")];

    if let Some(piece) = next_piece {
        let style = Style::default().fg(piece_color(piece.color));
        for row in preview_rows(piece) {
            let spans: Vec<Span> = row
                .iter()
                .map(|&filled| {
                    if filled {
                        Span::styled("██", style)
                    } else {
                        Span::raw("  ")
                    }
                })
                .collect();
            next_lines.push(Line::from(spans));
        }
    }

    let next_widget = Paragraph::new(next_lines)
        .block(Block::default().borders(Borders::ALL).title("Next"))
        .alignment(Alignment::Center);

    f.render_widget(next_widget, chunks[0]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_popup(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    f.render_widget(Clear, area);
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_idle_overlay(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("FALLTRIS", Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from("Press SPACE"),
        Line::from("to start"),
    ];
    render_popup(f, centered_rect(80, 35, area), "Ready", lines);
}

fn render_paused_overlay(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("PAUSED", Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from("Press P to resume"),
    ];
    render_popup(f, centered_rect(90, 30, area), "Paused", lines);
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let headline = if game.new_high_score {
        Span::styled("NEW HIGH SCORE!", Style::default().fg(Color::Green))
    } else {
        Span::raw(format!("High score: {}", game.high_score))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(format!("Score: {}", game.score)),
        Line::from(headline),
        Line::from(""),
        Line::from("R to restart"),
        Line::from("Q to quit"),
    ];
    render_popup(f, centered_rect(90, 45, area), "Game Over", lines);
}
