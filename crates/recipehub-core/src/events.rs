//! Application Events
//!
//! Events sent from background tasks to the UI loop.

use crate::services::ticker::TickerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// One period elapsed on the tick source with this id
    TimerTick(TickerId),
}
