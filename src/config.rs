// All tunable sandbox constants in one place.

// Window
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

// Craft
pub const CRAFT_SPAWN_X: f32 = 100.0;
pub const CRAFT_SPAWN_Y: f32 = 300.0;
pub const CRAFT_RESET_X: f32 = 100.0;
pub const CRAFT_RESET_Y: f32 = 400.0;
pub const CRAFT_WIDTH: f32 = 40.0;
pub const CRAFT_HEIGHT: f32 = 40.0;
pub const CRAFT_MAX_SPEED: f32 = 40.0;
pub const CRAFT_TURN_RATE: f32 = 5.0; // degrees per normalized time-step
pub const CRAFT_ACCELERATION_RATE: f32 = 4.0;

// Target
pub const TARGET_SPAWN_X: f32 = 500.0;
pub const TARGET_SPAWN_Y: f32 = 100.0;
pub const TARGET_RADIUS: f32 = 16.0;

// Obstacle
pub const OBSTACLE_SPAWN_X: f32 = 400.0;
pub const OBSTACLE_SPAWN_Y: f32 = 300.0;
pub const OBSTACLE_WIDTH: f32 = 100.0;
pub const OBSTACLE_HEIGHT: f32 = 100.0;

// Whiskers
pub const WHISKER_LENGTH: f32 = 300.0;
pub const WHISKER_HALF_ANGLE: f32 = 45.0;
pub const WHISKER_HALF_ANGLE_MIN: f32 = 10.0;
pub const WHISKER_HALF_ANGLE_MAX: f32 = 60.0;
pub const WHISKER_TURN_SENSITIVITY: f32 = 3.0;

// Arrive bands (distances in world units)
pub const ARRIVE_OUTER_RADIUS: f32 = 200.0;
pub const ARRIVE_STOP_RADIUS: f32 = 40.0;
pub const ARRIVE_DEAD_RADIUS: f32 = 5.0;

// Heading control: the craft sprite faces up at heading 0, so steering
// carries a quarter-turn bias to compensate.
pub const SPRITE_FORWARD_BIAS_DEG: f32 = 90.0;

// QA
pub const QA_FIXED_DT: f32 = 1.0 / 60.0;
pub const QA_TICKS: u64 = 1200;
