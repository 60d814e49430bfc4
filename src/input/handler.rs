use std::time::Instant;
use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::{Game, GameState};
use crate::input::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

pub fn map_key(key_code: KeyCode) -> Option<Command> {
    let command = match key_code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::SoftDrop,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Rotate,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Enter => Command::Start,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

pub fn apply_command(game: &mut Game, command: Command, now: Instant) -> InputOutcome {
    match command {
        Command::Quit => return InputOutcome::Quit,
        Command::Start => {
            if matches!(game.game_state, GameState::Idle | GameState::GameOver) {
                game.start(now);
            }
        }
        Command::Restart => {
            if game.game_state != GameState::Idle {
                game.restart(now);
            }
        }
        Command::TogglePause => game.toggle_pause(now),
        Command::Rotate => {
            game.rotate_piece();
        }
        Command::HardDrop => {
            // Space doubles as the start key on the title screen
            if game.game_state == GameState::Idle {
                game.start(now);
            } else {
                game.hard_drop();
            }
        }
        Command::MoveLeft | Command::MoveRight | Command::SoftDrop => {
            if let Some((dx, dy)) = command.offset() {
                game.move_piece(dx, dy);
            }
        }
    }
    InputOutcome::Continue
}

pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind, now: Instant) -> InputOutcome {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match map_key(key_code) {
            Some(command) => apply_command(game, command, now),
            None => InputOutcome::Continue,
        },
        KeyEventKind::Release => InputOutcome::Continue,
    }
}
