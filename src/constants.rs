pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Points per clear, indexed by lines cleared at once (0-4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
pub const LINES_PER_LEVEL: u32 = 10;

// Gravity (in milliseconds)
pub const BASE_DROP_MS: u64 = 1000;  // Fall interval at level 1
pub const DROP_STEP_MS: u64 = 100;   // Removed per level
pub const MIN_DROP_MS: u64 = 100;    // Floor, reached at level 10

// Horizontal offsets tried in order when a rotation collides
pub const WALL_KICKS: [i32; 4] = [1, -1, 2, -2];

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const HIGH_SCORE_FILE: &str = ".falltris_highscore.json";
