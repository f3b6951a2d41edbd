//! Recipe Viewer ViewModel
//!
//! Owns the serving target, the current-step pointer, the active step timer
//! and the tick source driving it. All of it is discarded with the viewer.

use std::sync::Arc;
use std::time::Duration;

use recipehub_shared::constants::MIN_SERVINGS;
use recipehub_shared::EntityId;
use tracing::{debug, info};

use crate::domain::{Recipe, Step};
use crate::services::scaling::{scale_ingredients, ScaledIngredient};
use crate::services::step_cursor::StepCursor;
use crate::services::step_timer::{ActiveTimer, StepTimer, TickOutcome, TimerState};
use crate::services::ticker::{TickHandle, TickScheduler, TickerId};

pub struct RecipeViewerViewModel {
    recipe: Recipe,
    servings: u32,
    cursor: StepCursor,
    timer: StepTimer,
    scheduler: Arc<dyn TickScheduler>,
    tick_period: Duration,
    ticker: Option<TickHandle>,
    notification: Option<String>,
}

impl RecipeViewerViewModel {
    pub fn new(recipe: Recipe, scheduler: Arc<dyn TickScheduler>, tick_period: Duration) -> Self {
        Self {
            servings: recipe.servings.max(MIN_SERVINGS),
            cursor: StepCursor::new(recipe.steps.len()),
            recipe,
            timer: StepTimer::new(),
            scheduler,
            tick_period,
            ticker: None,
            notification: None,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    // ------------------------------------------------------------------
    // Servings
    // ------------------------------------------------------------------

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn increase_servings(&mut self) {
        self.servings = self.servings.saturating_add(1);
    }

    pub fn decrease_servings(&mut self) {
        self.servings = self.servings.saturating_sub(1).max(MIN_SERVINGS);
    }

    pub fn scaled_ingredients(&self) -> Vec<ScaledIngredient> {
        scale_ingredients(&self.recipe, self.servings)
    }

    // ------------------------------------------------------------------
    // Step navigation
    // ------------------------------------------------------------------

    pub fn cursor(&self) -> &StepCursor {
        &self.cursor
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.recipe.steps.get(self.cursor.current())
    }

    pub fn previous_step(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn next_step(&mut self) -> bool {
        self.cursor.next()
    }

    // ------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------

    /// Start the timer of `step_id`. Steps without a timer are ignored.
    pub fn start_timer(&mut self, step_id: EntityId) -> bool {
        let Some(minutes) = self.recipe.step(step_id).and_then(|s| s.timer_minutes) else {
            return false;
        };
        self.timer.start(step_id, minutes);
        debug!(%step_id, minutes, "Step timer started");
        self.restart_ticker();
        true
    }

    pub fn start_timer_for_current_step(&mut self) -> bool {
        match self.current_step().map(|s| s.id) {
            Some(id) => self.start_timer(id),
            None => false,
        }
    }

    pub fn toggle_timer(&mut self) -> Option<bool> {
        let running = self.timer.toggle()?;
        if running {
            self.restart_ticker();
        } else {
            self.stop_ticker();
        }
        Some(running)
    }

    /// Reset the active timer to its full duration, running.
    pub fn reset_timer(&mut self) -> bool {
        let Some(step_id) = self.timer.active().map(|t| t.step_id) else {
            return false;
        };
        let Some(minutes) = self.recipe.step(step_id).and_then(|s| s.timer_minutes) else {
            return false;
        };
        self.timer.reset(step_id, minutes);
        self.restart_ticker();
        true
    }

    /// Apply one tick from the source `ticker_id`. Ticks from any source but
    /// the current one are stale and ignored.
    pub fn on_tick(&mut self, ticker_id: TickerId) -> TickOutcome {
        if self.ticker.as_ref().map(|t| t.id()) != Some(ticker_id) {
            return TickOutcome::Ignored;
        }
        let outcome = self.timer.tick();
        match &outcome {
            TickOutcome::Elapsed { step_id } => {
                self.stop_ticker();
                let number = self.recipe.step_index(*step_id).map(|i| i + 1).unwrap_or(0);
                info!(recipe = %self.recipe.title, step = number, "Step timer finished");
                self.notification = Some(format!("Timer finished for step {}!", number));
            }
            TickOutcome::Ignored => self.stop_ticker(),
            TickOutcome::Ticked { .. } => {}
        }
        outcome
    }

    pub fn active_timer(&self) -> Option<&ActiveTimer> {
        self.timer.active()
    }

    pub fn timer_state_for(&self, step_id: EntityId) -> TimerState {
        self.timer.state_for(step_id)
    }

    pub fn has_tick_source(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn restart_ticker(&mut self) {
        self.stop_ticker();
        self.ticker = Some(self.scheduler.schedule(self.tick_period));
    }

    fn stop_ticker(&mut self) {
        // Dropping the handle aborts the task.
        self.ticker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::mock_recipes;
    use crate::domain::Step;
    use crate::services::ticker::ManualTickScheduler;

    fn viewer(recipe: Recipe) -> (RecipeViewerViewModel, Arc<ManualTickScheduler>) {
        let scheduler = ManualTickScheduler::new();
        let vm = RecipeViewerViewModel::new(recipe, scheduler.clone(), Duration::from_secs(1));
        (vm, scheduler)
    }

    fn five_steps() -> Recipe {
        let mut recipe = mock_recipes().remove(1);
        recipe.steps = (1..=5)
            .map(|n| Step::new(format!("step {}", n), if n == 3 { Some(2) } else { None }))
            .collect();
        recipe
    }

    fn tick(vm: &mut RecipeViewerViewModel, scheduler: &ManualTickScheduler, n: usize) {
        for _ in 0..n {
            let id = scheduler.last_id().unwrap();
            vm.on_tick(id);
        }
    }

    #[test]
    fn test_servings_floor_at_one() {
        let mut recipe = mock_recipes().remove(1);
        recipe.servings = 2;
        let (mut vm, _) = viewer(recipe);
        vm.decrease_servings();
        vm.decrease_servings();
        vm.decrease_servings();
        assert_eq!(vm.servings(), 1);
        vm.increase_servings();
        assert_eq!(vm.servings(), 2);
    }

    #[test]
    fn test_scaling_follows_servings() {
        let recipe = mock_recipes().remove(1);
        let base = recipe.ingredients[0].amount;
        let (mut vm, _) = viewer(recipe);
        for _ in 0..4 {
            vm.increase_servings();
        }
        assert_eq!(vm.servings(), 8);
        assert_eq!(vm.scaled_ingredients()[0].amount, base * 2.0);
        assert_eq!(vm.recipe().ingredients[0].amount, base);
    }

    #[test]
    fn test_step_navigation_on_five_steps() {
        let (mut vm, _) = viewer(five_steps());
        assert!(!vm.previous_step());
        assert_eq!(vm.cursor().current(), 0);

        vm.next_step();
        vm.next_step();
        assert_eq!(vm.cursor().label(), "Step 3 of 5");
        assert_eq!(vm.cursor().percent(), 60);

        vm.next_step();
        vm.next_step();
        assert!(!vm.next_step());
        assert_eq!(vm.cursor().current(), 4);
    }

    #[test]
    fn test_timer_lifecycle() {
        let (mut vm, scheduler) = viewer(five_steps());
        vm.next_step();
        vm.next_step();
        assert!(vm.start_timer_for_current_step());
        assert!(vm.has_tick_source());
        assert_eq!(vm.active_timer().unwrap().clock(), "2:00");

        tick(&mut vm, &scheduler, 65);
        assert_eq!(vm.active_timer().unwrap().remaining_seconds, 55);
        assert_eq!(vm.active_timer().unwrap().clock(), "0:55");

        assert_eq!(vm.toggle_timer(), Some(false));
        assert!(!vm.has_tick_source());
        assert_eq!(vm.active_timer().unwrap().remaining_seconds, 55);

        assert_eq!(vm.toggle_timer(), Some(true));
        tick(&mut vm, &scheduler, 55);
        assert!(vm.active_timer().is_none());
        assert!(!vm.has_tick_source());
        assert_eq!(vm.notification(), Some("Timer finished for step 3!"));
    }

    #[test]
    fn test_stale_ticks_are_ignored() {
        let (mut vm, scheduler) = viewer(five_steps());
        let step_id = vm.recipe().steps[2].id;
        vm.start_timer(step_id);
        let first = scheduler.last_id().unwrap();

        vm.toggle_timer();
        vm.toggle_timer();
        assert_ne!(scheduler.last_id(), Some(first));

        assert_eq!(vm.on_tick(first), TickOutcome::Ignored);
        assert_eq!(vm.active_timer().unwrap().remaining_seconds, 120);
    }

    #[test]
    fn test_untimed_step_cannot_start() {
        let (mut vm, scheduler) = viewer(five_steps());
        assert!(!vm.start_timer_for_current_step());
        assert!(vm.active_timer().is_none());
        assert_eq!(scheduler.scheduled_count(), 0);
    }

    #[test]
    fn test_reset_restarts_running() {
        let (mut vm, scheduler) = viewer(five_steps());
        let step_id = vm.recipe().steps[2].id;
        vm.start_timer(step_id);
        tick(&mut vm, &scheduler, 10);
        vm.toggle_timer();

        assert!(vm.reset_timer());
        let active = vm.active_timer().unwrap();
        assert_eq!(active.remaining_seconds, 120);
        assert!(active.is_running);
        assert!(vm.has_tick_source());
        assert_eq!(vm.timer_state_for(step_id), TimerState::Running);
    }

    #[test]
    fn test_recipe_without_steps() {
        let mut recipe = mock_recipes().remove(0);
        recipe.steps.clear();
        recipe.ingredients.clear();
        let (mut vm, _) = viewer(recipe);
        assert!(vm.current_step().is_none());
        assert!(!vm.next_step());
        assert!(!vm.start_timer_for_current_step());
        assert!(vm.scaled_ingredients().is_empty());
        assert_eq!(vm.cursor().label(), "No steps");
    }
}
