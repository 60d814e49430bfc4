/// Everything a player can ask of the game, independent of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    TogglePause,
    Start,
    Restart,
    Quit,
}

impl Command {
    /// `(dx, dy)` for the commands that translate the piece.
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, 1)),
            _ => None,
        }
    }
}
