// Storage keys shared with whatever persists device-level flags.
pub const SPIN_LIMIT_KEY: &str = "roulette-spin-used";
pub const THEME_KEY: &str = "roulette-theme";
pub const SPIN_USED_VALUE: &str = "true";

// Slice colors, assigned by slice position.
pub const PALETTE: [&str; 5] = ["#b91c1c", "#22c55e", "#f59e0b", "#0ea5e9", "#a855f7"];

pub const SLICE_STROKE_COLOR: &str = "#fef2f2";
pub const SLICE_STROKE_WIDTH: f64 = 2.0;
pub const LABEL_COLOR: &str = "#0f172a";
pub const LABEL_FONT: &str = "15px system-ui";
pub const PLACEHOLDER_FILL: &str = "#f1f5f9";
pub const PLACEHOLDER_TEXT_COLOR: &str = "#64748b";
pub const PLACEHOLDER_FONT: &str = "16px system-ui";

// Wheel geometry, in canvas pixels.
pub const WHEEL_MARGIN: f64 = 10.0;
pub const LABEL_RIM_INSET: f64 = 14.0;
pub const LABEL_BASELINE_OFFSET: f64 = 5.0;

pub const EMPTY_WHEEL_MESSAGE: &str = "Add names to get started";
pub const EMPTY_LIST_MESSAGE: &str = "No names yet. Start by adding one! ✨";
pub const SPIN_LIMIT_MESSAGE: &str = "This device has already used its only spin.";
pub const LOCKED_HINT: &str = "Actions are locked. Enter the key to enable the controls.";
pub const UNLOCKED_HINT: &str = "Controls unlocked. You can now add or clear names.";
pub const UNLOCKED_ALERT: &str = "Controls unlocked. Happy holidays!";
pub const CLEAR_CONFIRM: &str = "Are you sure you want to remove every name?";
