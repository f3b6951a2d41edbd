//! ViewModel Module
//!
//! State and intents behind each screen. Views render these; the controller
//! owns them and routes between them.

pub mod dashboard_vm;
pub mod editor_vm;
pub mod login_vm;
pub mod navigation_vm;
pub mod viewer_vm;

pub use dashboard_vm::DashboardViewModel;
pub use editor_vm::{IngredientField, RecipeEditorViewModel, StepField};
pub use login_vm::LoginViewModel;
pub use navigation_vm::{visible_tabs, NavTab, ViewId};
pub use viewer_vm::RecipeViewerViewModel;
