//! Dashboard ViewModel
//!
//! Search text, category filter and a cursor over the filtered list.

use crate::domain::{Recipe, RecipeBook};
use crate::services::filter::{filter_recipes, RecipeFilter};

#[derive(Debug, Default)]
pub struct DashboardViewModel {
    query: String,
    filter: RecipeFilter,
    cursor: usize,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> RecipeFilter {
        self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn visible<'a>(&self, book: &'a RecipeBook, current_user: Option<&str>) -> Vec<&'a Recipe> {
        filter_recipes(book.all(), &self.query, self.filter, current_user)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    pub fn set_filter(&mut self, filter: RecipeFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, visible_len: usize) {
        if self.cursor + 1 < visible_len {
            self.cursor += 1;
        }
    }

    /// The recipe under the cursor, if the filtered list is not empty.
    pub fn selected(&self, book: &RecipeBook, current_user: Option<&str>) -> Option<Recipe> {
        let visible = self.visible(book, current_user);
        visible
            .get(self.cursor.min(visible.len().saturating_sub(1)))
            .map(|r| (*r).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_range() {
        let book = RecipeBook::seeded();
        let mut vm = DashboardViewModel::new();
        let len = vm.visible(&book, None).len();

        vm.move_up();
        assert_eq!(vm.cursor(), 0);
        for _ in 0..10 {
            vm.move_down(len);
        }
        assert_eq!(vm.cursor(), 2);
        assert_eq!(vm.selected(&book, None).unwrap().title, "Rustic Sourdough Bread");
    }

    #[test]
    fn test_query_resets_cursor() {
        let book = RecipeBook::seeded();
        let mut vm = DashboardViewModel::new();
        vm.move_down(3);
        for c in "thai".chars() {
            vm.push_query_char(c);
        }
        assert_eq!(vm.cursor(), 0);
        assert_eq!(vm.selected(&book, None).unwrap().title, "Spicy Thai Basil Stir Fry");
    }

    #[test]
    fn test_empty_state_selects_nothing() {
        let book = RecipeBook::seeded();
        let mut vm = DashboardViewModel::new();
        vm.set_query("pavlova");
        assert!(vm.visible(&book, None).is_empty());
        assert!(vm.selected(&book, None).is_none());
    }

    #[test]
    fn test_cycle_filter() {
        let book = RecipeBook::seeded();
        let mut vm = DashboardViewModel::new();
        vm.cycle_filter();
        assert_eq!(vm.filter(), RecipeFilter::MyRecipes);
        let mine = vm.visible(&book, Some("Alice Johnson"));
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].author, "Alice Johnson");
    }
}
