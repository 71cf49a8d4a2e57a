// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const NEXT_TASK_DELAY_MS: u64 = 400;
pub const RESULT_BANNER_MS: u64 = 800;

// XP and leveling
pub const XP_PER_LEVEL_STEP: u64 = 100;
pub const XP_PER_CORRECT_ANSWER: u64 = 20;

// Capabilities
pub const LOGIC_BASIC_CAPABILITY: &str = "logic_basic";

// Minigame reveal timing
pub const REVEAL_CORRECT_MS: u64 = 400;
pub const REVEAL_WRONG_MS: u64 = 800;

// Diagnostics
pub const MAX_ERROR_ENTRIES: usize = 100;
pub const ERROR_PANEL_LIMIT: usize = 10;
/// Terminal draw/input failures in a row before the run loop gives up.
pub const MAX_CONSECUTIVE_IO_FAILURES: u32 = 5;
