// ============================================================================
// RecipeHub Core - Application Controller
// File: crates/recipehub-core/src/controller.rs
// Description: Session, current view and routing between screens
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{Recipe, RecipeBook, Session, Upsert, User};
use crate::error::{DomainError, LoginError};
use crate::events::AppEvent;
use crate::services::step_timer::TickOutcome;
use crate::services::ticker::TickScheduler;
use crate::viewmodel::{
    DashboardViewModel, LoginViewModel, NavTab, RecipeEditorViewModel, RecipeViewerViewModel,
    ViewId,
};

/// The mounted screen. Replacing it drops the old view model, and with it
/// any tick source a viewer was holding.
pub enum View {
    Dashboard(DashboardViewModel),
    Editor(RecipeEditorViewModel),
    Recipe(RecipeViewerViewModel),
    Collaborations,
}

impl View {
    pub fn id(&self) -> ViewId {
        match self {
            View::Dashboard(_) => ViewId::Dashboard,
            View::Editor(_) => ViewId::Create,
            View::Recipe(_) => ViewId::ViewRecipe,
            View::Collaborations => ViewId::Collaborations,
        }
    }

    fn dashboard() -> Self {
        View::Dashboard(DashboardViewModel::new())
    }
}

pub struct AppController {
    session: Option<Session>,
    view: View,
    selected: Option<Recipe>,
    editing: Option<Recipe>,
    login: Option<LoginViewModel>,
    book: RecipeBook,
    scheduler: Arc<dyn TickScheduler>,
    tick_period: Duration,
}

impl AppController {
    pub fn new(book: RecipeBook, scheduler: Arc<dyn TickScheduler>, tick_period: Duration) -> Self {
        Self {
            session: None,
            view: View::dashboard(),
            selected: None,
            editing: None,
            login: None,
            book,
            scheduler,
            tick_period,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user().map(|u| u.name.as_str())
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn view_id(&self) -> ViewId {
        self.view.id()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn editing(&self) -> Option<&Recipe> {
        self.editing.as_ref()
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    // ------------------------------------------------------------------
    // Login
    // ------------------------------------------------------------------

    pub fn login_form(&self) -> Option<&LoginViewModel> {
        self.login.as_ref()
    }

    pub fn login_form_mut(&mut self) -> Option<&mut LoginViewModel> {
        self.login.as_mut()
    }

    pub fn open_login(&mut self) {
        if self.login.is_none() {
            self.login = Some(LoginViewModel::new());
        }
    }

    pub fn close_login(&mut self) {
        self.login = None;
    }

    /// Submit the open login form. Errors leave the form open with its message.
    pub fn submit_login(&mut self) -> Result<(), LoginError> {
        let Some(form) = self.login.as_mut() else {
            return Ok(());
        };
        let user = form.submit()?;
        self.login(user);
        Ok(())
    }

    pub fn login(&mut self, user: User) {
        info!(name = %user.name, "Session started");
        self.session = Some(Session::start(user));
        self.login = None;
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                name = %session.user.name,
                minutes = session.duration().num_minutes(),
                "Session ended"
            );
        }
        self.view = View::dashboard();
        self.selected = None;
        self.editing = None;
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    pub fn select_recipe(&mut self, recipe: Recipe) {
        debug!(recipe_id = %recipe.id, "Opening recipe");
        self.selected = Some(recipe.clone());
        self.view = View::Recipe(self.viewer_for(recipe));
    }

    /// Open the recipe under the dashboard cursor. False when the dashboard is
    /// not mounted or the filtered list is empty.
    pub fn select_from_dashboard(&mut self) -> bool {
        let View::Dashboard(dashboard) = &self.view else {
            return false;
        };
        let Some(recipe) = dashboard.selected(&self.book, self.user_name()) else {
            return false;
        };
        self.select_recipe(recipe);
        true
    }

    pub fn create_new(&mut self) {
        self.editing = None;
        self.view = View::Editor(RecipeEditorViewModel::new(None));
    }

    pub fn edit_selected(&mut self) {
        self.editing = self.selected.clone();
        self.view = View::Editor(RecipeEditorViewModel::new(self.editing.as_ref()));
    }

    /// Validate the mounted editor and save what it produces.
    pub fn save_editor(&mut self) -> Result<Recipe, DomainError> {
        let View::Editor(editor) = &self.view else {
            return Err(DomainError::EditorNotOpen);
        };
        let recipe = editor.save(self.user_name().unwrap_or_default())?;
        self.save(recipe.clone());
        Ok(recipe)
    }

    pub fn save(&mut self, recipe: Recipe) -> Upsert {
        if self.selected.as_ref().is_some_and(|s| s.id == recipe.id) {
            self.selected = Some(recipe.clone());
        }
        let id = recipe.id;
        let title = recipe.title.clone();
        let outcome = self.book.upsert(recipe);
        info!(recipe_id = %id, %title, ?outcome, "Recipe saved");
        self.view = View::dashboard();
        self.editing = None;
        outcome
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.view = match self.selected.clone() {
            Some(recipe) => View::Recipe(self.viewer_for(recipe)),
            None => View::dashboard(),
        };
    }

    pub fn back_to_dashboard(&mut self) {
        self.view = View::dashboard();
        self.selected = None;
    }

    pub fn change_view(&mut self, tab: NavTab) {
        if tab.is_active(self.view_id()) {
            return;
        }
        self.view = match tab {
            NavTab::Dashboard => View::dashboard(),
            NavTab::CreateRecipe => View::Editor(RecipeEditorViewModel::new(self.editing.as_ref())),
            NavTab::Collaborations => View::Collaborations,
        };
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Route an event to the mounted view. Ticks only ever reach a viewer.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<TickOutcome> {
        match event {
            AppEvent::TimerTick(id) => match &mut self.view {
                View::Recipe(viewer) => Some(viewer.on_tick(id)),
                _ => {
                    debug!(ticker_id = id, "Tick with no viewer mounted");
                    None
                }
            },
        }
    }

    fn viewer_for(&self, recipe: Recipe) -> RecipeViewerViewModel {
        RecipeViewerViewModel::new(recipe, Arc::clone(&self.scheduler), self.tick_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{mock_recipes, COOKIES_ID, STIR_FRY_ID};
    use crate::services::ticker::ManualTickScheduler;
    use crate::viewmodel::StepField;

    fn controller() -> (AppController, Arc<ManualTickScheduler>) {
        let scheduler = ManualTickScheduler::new();
        let controller =
            AppController::new(RecipeBook::seeded(), scheduler.clone(), Duration::from_secs(1));
        (controller, scheduler)
    }

    fn signed_in() -> (AppController, Arc<ManualTickScheduler>) {
        let (mut c, s) = controller();
        c.login(User::new("Alice Johnson", "alice@email.com"));
        (c, s)
    }

    fn cookies() -> Recipe {
        mock_recipes().remove(0)
    }

    #[test]
    fn test_login_through_form() {
        let (mut c, _) = controller();
        assert!(c.user().is_none());
        c.open_login();
        {
            let form = c.login_form_mut().unwrap();
            form.email = "sarah@email.com".into();
            form.password = "pw".into();
        }
        c.submit_login().unwrap();
        assert_eq!(c.user_name(), Some("sarah"));
        assert!(c.login_form().is_none());
    }

    #[test]
    fn test_failed_login_keeps_form_open() {
        let (mut c, _) = controller();
        c.open_login();
        assert!(c.submit_login().is_err());
        assert!(c.login_form().is_some());
        assert!(c.user().is_none());
    }

    #[test]
    fn test_select_then_back() {
        let (mut c, _) = signed_in();
        c.select_recipe(cookies());
        assert_eq!(c.view_id(), ViewId::ViewRecipe);
        assert_eq!(c.selected().map(|r| r.id), Some(COOKIES_ID));

        c.back_to_dashboard();
        assert_eq!(c.view_id(), ViewId::Dashboard);
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_select_from_dashboard() {
        let (mut c, _) = signed_in();
        assert!(c.select_from_dashboard());
        assert_eq!(c.selected().map(|r| r.id), Some(COOKIES_ID));
        assert!(!c.select_from_dashboard());
    }

    #[test]
    fn test_edit_then_cancel_returns_to_viewer() {
        let (mut c, _) = signed_in();
        c.select_recipe(cookies());
        c.edit_selected();
        assert_eq!(c.view_id(), ViewId::Create);
        assert_eq!(c.editing().map(|r| r.id), Some(COOKIES_ID));

        c.cancel_edit();
        assert_eq!(c.view_id(), ViewId::ViewRecipe);
        assert!(c.editing().is_none());
    }

    #[test]
    fn test_cancel_without_selection_goes_to_dashboard() {
        let (mut c, _) = signed_in();
        c.create_new();
        c.cancel_edit();
        assert_eq!(c.view_id(), ViewId::Dashboard);
    }

    #[test]
    fn test_save_new_recipe_appends() {
        let (mut c, _) = signed_in();
        c.create_new();
        if let View::Editor(editor) = c.view_mut() {
            editor.title = "Pancakes".into();
            let step = editor.steps()[0].id;
            editor.update_step(step, StepField::Instruction("Whisk".into()));
        }
        let saved = c.save_editor().unwrap();
        assert_eq!(saved.author, "Alice Johnson");
        assert_eq!(c.book().len(), 4);
        assert_eq!(c.view_id(), ViewId::Dashboard);
        assert!(c.editing().is_none());
    }

    #[test]
    fn test_save_existing_recipe_replaces() {
        let (mut c, _) = signed_in();
        c.select_recipe(cookies());
        c.edit_selected();
        if let View::Editor(editor) = c.view_mut() {
            editor.title = "Cookies v2".into();
        }
        c.save_editor().unwrap();
        assert_eq!(c.book().len(), 3);
        assert_eq!(c.book().get(COOKIES_ID).unwrap().title, "Cookies v2");
        assert_eq!(c.selected().unwrap().title, "Cookies v2");
    }

    #[test]
    fn test_save_editor_requires_editor() {
        let (mut c, _) = signed_in();
        assert!(matches!(c.save_editor(), Err(DomainError::EditorNotOpen)));
    }

    #[test]
    fn test_logout_clears_state() {
        let (mut c, _) = signed_in();
        c.select_recipe(cookies());
        c.edit_selected();
        c.logout();
        assert!(c.user().is_none());
        assert!(c.selected().is_none());
        assert!(c.editing().is_none());
        assert_eq!(c.view_id(), ViewId::Dashboard);
    }

    #[test]
    fn test_change_view() {
        let (mut c, _) = signed_in();
        c.change_view(NavTab::Collaborations);
        assert_eq!(c.view_id(), ViewId::Collaborations);
        c.change_view(NavTab::CreateRecipe);
        assert_eq!(c.view_id(), ViewId::Create);
        c.change_view(NavTab::Dashboard);
        assert_eq!(c.view_id(), ViewId::Dashboard);
    }

    #[test]
    fn test_ticks_reach_viewer_only() {
        let (mut c, scheduler) = signed_in();
        let recipe = cookies();
        let step_id = recipe.steps[0].id;
        c.select_recipe(recipe);
        if let View::Recipe(viewer) = c.view_mut() {
            assert!(viewer.start_timer(step_id));
        }
        let id = scheduler.last_id().unwrap();
        assert_eq!(
            c.handle_event(AppEvent::TimerTick(id)),
            Some(TickOutcome::Ticked { remaining_seconds: 599 })
        );

        c.back_to_dashboard();
        assert_eq!(c.handle_event(AppEvent::TimerTick(id)), None);
    }

    #[test]
    fn test_reselecting_discards_timer() {
        let (mut c, scheduler) = signed_in();
        let recipe = cookies();
        let step_id = recipe.steps[0].id;
        c.select_recipe(recipe);
        if let View::Recipe(viewer) = c.view_mut() {
            viewer.start_timer(step_id);
        }
        let old = scheduler.last_id().unwrap();

        let other = c.book().get(STIR_FRY_ID).cloned().unwrap();
        c.select_recipe(other);
        assert_eq!(c.handle_event(AppEvent::TimerTick(old)), Some(TickOutcome::Ignored));
        if let View::Recipe(viewer) = c.view() {
            assert!(viewer.active_timer().is_none());
        }
    }
}
