// Tick and timing
pub const FRAME_RATE_HZ: u32 = 120;
pub const SPAWN_INTERVAL_MS: u64 = 1200;

// Play field (world units, y grows downward)
pub const FIELD_WIDTH: f64 = 576.0;
pub const FIELD_HEIGHT: f64 = 1024.0;
pub const FLOOR_Y: f64 = 900.0;
pub const CEILING_LIMIT: f64 = -100.0;

// Player body
pub const PLAYER_X: f64 = 100.0;
pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 40.0;
pub const GRAVITY: f64 = 0.25; // per tick²
pub const FLAP_IMPULSE: f64 = -6.0; // velocity override, negative = upward

// Obstacles
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 250.0;
pub const PIPE_SPEED: f64 = 3.0; // per tick
pub const GAP_CENTERS: [f64; 3] = [400.0, 500.0, 600.0];

// Overlay anchors (world y of each text line's center)
pub const SCORE_LABEL_Y: f64 = 100.0;
pub const GAME_OVER_LABEL_Y: f64 = 400.0;
pub const RESTART_BUTTON_Y: f64 = 550.0;
pub const HIGH_SCORE_LABEL_Y: f64 = 850.0;
pub const RESTART_BUTTON_PAD_X: f64 = 40.0;
pub const RESTART_BUTTON_PAD_Y: f64 = 20.0;
