//! Pure recipe logic plus the tick source.

pub mod filter;
pub mod scaling;
pub mod step_cursor;
pub mod step_timer;
pub mod ticker;

pub use filter::{filter_recipes, RecipeFilter};
pub use scaling::{format_amount, scale_amount, scale_ingredients, ScaledIngredient};
pub use step_cursor::StepCursor;
pub use step_timer::{format_clock, ActiveTimer, StepTimer, TickOutcome, TimerState};
pub use ticker::{ManualTickScheduler, TickHandle, TickScheduler, TickerId, TokioTickScheduler};
