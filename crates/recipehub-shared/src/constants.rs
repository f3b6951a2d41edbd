//! Application-wide constants

pub const APP_NAME: &str = "RecipeHub";

pub const DEFAULT_SERVINGS: u32 = 4;
pub const MIN_SERVINGS: u32 = 1;

pub const DEFAULT_UNIT: &str = "cups";
pub const UNIT_SUGGESTIONS: [&str; 10] = [
    "cups", "tbsp", "tsp", "lbs", "oz", "g", "kg", "ml", "l", "pieces",
];

/// Display string stamped on a recipe when the editor saves it.
pub const JUST_NOW: &str = "Just now";

pub const DEFAULT_TICK_MS: u64 = 1000;
pub const DEFAULT_POLL_MS: u64 = 100;
