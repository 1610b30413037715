// Canvas geometry (world units; the renderer scales these onto the terminal)
pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 30.0;

// Plane
pub const PLANE_X: f64 = 50.0;
pub const PLANE_WIDTH: f64 = 40.0;
pub const PLANE_HEIGHT: f64 = 30.0;
pub const GRAVITY: f64 = 0.3;
pub const JUMP_VELOCITY: f64 = -6.0;

// Tilt is cosmetic, in degrees (negative = nose up)
pub const TILT_GAIN: f64 = 3.0;
pub const MIN_TILT: f64 = -25.0;
pub const MAX_TILT: f64 = 90.0;

// Obstacles
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 140.0;
pub const PIPE_SPEED: f64 = 2.0;
pub const PIPE_MIN_TOP: u32 = 50;
pub const SPAWN_INTERVAL_FRAMES: u64 = 90;

// Frame pacing
pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

// Persistence keys
pub const GLOBAL_BEST_KEY: &str = "bestscore";
pub const PLAYER_BEST_KEY_PREFIX: &str = "bestscore:";
pub const PLAYER_NAME_KEY: &str = "playerName";
pub const DEFAULT_PLAYER_NAME: &str = "Pilot";
pub const MAX_PLAYER_NAME_LEN: usize = 16;

// Files under the data directory
pub const DATA_DIR_ENV: &str = "SKYGLIDER_HOME";
pub const DATA_DIR_NAME: &str = ".skyglider";
pub const CONFIG_FILE: &str = "config.json";
pub const STORE_FILE: &str = "store.json";
pub const LOG_FILE: &str = "skyglider.log";
