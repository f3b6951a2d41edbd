use recipehub_core::viewmodel::editor_vm::{parse_amount, parse_timer_minutes};
use recipehub_core::viewmodel::{IngredientField, RecipeEditorViewModel, StepField};
use recipehub_core::{AppController, View};
use recipehub_shared::constants::UNIT_SUGGESTIONS;

/// Focusable fields of the recipe editor, by row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Description,
    Servings,
    Tags,
    IngredientName(usize),
    IngredientAmount(usize),
    IngredientUnit(usize),
    StepInstruction(usize),
    StepTimer(usize),
}

impl EditorFocus {
    /// Tab order for the current shape of the form.
    pub fn order(editor: &RecipeEditorViewModel) -> Vec<EditorFocus> {
        let mut fields = vec![
            EditorFocus::Title,
            EditorFocus::Description,
            EditorFocus::Servings,
            EditorFocus::Tags,
        ];
        for i in 0..editor.ingredients().len() {
            fields.push(EditorFocus::IngredientName(i));
            fields.push(EditorFocus::IngredientAmount(i));
            fields.push(EditorFocus::IngredientUnit(i));
        }
        for i in 0..editor.steps().len() {
            fields.push(EditorFocus::StepInstruction(i));
            fields.push(EditorFocus::StepTimer(i));
        }
        fields
    }

    fn row(&self) -> Option<usize> {
        match *self {
            EditorFocus::IngredientName(i)
            | EditorFocus::IngredientAmount(i)
            | EditorFocus::IngredientUnit(i)
            | EditorFocus::StepInstruction(i)
            | EditorFocus::StepTimer(i) => Some(i),
            _ => None,
        }
    }

    fn is_step(&self) -> bool {
        matches!(self, EditorFocus::StepInstruction(_) | EditorFocus::StepTimer(_))
    }

    fn with_row(&self, row: usize) -> EditorFocus {
        match self {
            EditorFocus::IngredientName(_) => EditorFocus::IngredientName(row),
            EditorFocus::IngredientAmount(_) => EditorFocus::IngredientAmount(row),
            EditorFocus::IngredientUnit(_) => EditorFocus::IngredientUnit(row),
            EditorFocus::StepInstruction(_) => EditorFocus::StepInstruction(row),
            EditorFocus::StepTimer(_) => EditorFocus::StepTimer(row),
            other => *other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginFocus {
    Name,
    Email,
    Password,
}

/// Application state
pub struct App {
    pub controller: AppController,
    pub should_quit: bool,

    // Dashboard search box has the keyboard
    pub searching: bool,

    // Editor state
    pub editor_focus: EditorFocus,
    pub number_input: String,

    // Login modal state
    pub login_focus: LoginFocus,

    // Last error shown in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller,
            should_quit: false,
            searching: false,
            editor_focus: EditorFocus::Title,
            number_input: String::new(),
            login_focus: LoginFocus::Email,
            status: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.controller.user().is_some()
    }

    /// Call after any transition that may have mounted a fresh editor.
    pub fn reset_editor_focus(&mut self) {
        self.editor_focus = EditorFocus::Title;
        self.number_input.clear();
        self.status = None;
    }

    // ------------------------------------------------------------------
    // Login form
    // ------------------------------------------------------------------

    pub fn open_login(&mut self) {
        self.controller.open_login();
        self.login_focus = LoginFocus::Email;
    }

    pub fn login_focus_next(&mut self) {
        let sign_up = self
            .controller
            .login_form()
            .is_some_and(|f| f.is_sign_up);
        self.login_focus = match (self.login_focus, sign_up) {
            (LoginFocus::Name, _) => LoginFocus::Email,
            (LoginFocus::Email, _) => LoginFocus::Password,
            (LoginFocus::Password, true) => LoginFocus::Name,
            (LoginFocus::Password, false) => LoginFocus::Email,
        };
    }

    pub fn toggle_login_mode(&mut self) {
        if let Some(form) = self.controller.login_form_mut() {
            form.toggle_mode();
            self.login_focus = if form.is_sign_up {
                LoginFocus::Name
            } else {
                LoginFocus::Email
            };
        }
    }

    pub fn login_type(&mut self, c: char) {
        let focus = self.login_focus;
        if let Some(form) = self.controller.login_form_mut() {
            match focus {
                LoginFocus::Name => form.name.push(c),
                LoginFocus::Email => form.email.push(c),
                LoginFocus::Password => form.password.push(c),
            }
        }
    }

    pub fn login_backspace(&mut self) {
        let focus = self.login_focus;
        if let Some(form) = self.controller.login_form_mut() {
            match focus {
                LoginFocus::Name => form.name.pop(),
                LoginFocus::Email => form.email.pop(),
                LoginFocus::Password => form.password.pop(),
            };
        }
    }

    // ------------------------------------------------------------------
    // Editor form
    // ------------------------------------------------------------------

    fn editor(&self) -> Option<&RecipeEditorViewModel> {
        match self.controller.view() {
            View::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn editor_focus_next(&mut self) {
        self.move_editor_focus(true);
    }

    pub fn editor_focus_prev(&mut self) {
        self.move_editor_focus(false);
    }

    fn move_editor_focus(&mut self, forward: bool) {
        let Some(editor) = self.editor() else {
            return;
        };
        let order = EditorFocus::order(editor);
        let len = order.len();
        let current = order.iter().position(|f| *f == self.editor_focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.editor_focus = order[next];
        self.load_number_input();
    }

    /// Seed the numeric input buffer from the focused field's value.
    fn load_number_input(&mut self) {
        let focus = self.editor_focus;
        let Some(editor) = self.editor() else {
            return;
        };
        let text = match focus {
            EditorFocus::IngredientAmount(i) => editor
                .ingredients()
                .get(i)
                .filter(|ing| ing.amount > 0.0)
                .map(|ing| ing.amount.to_string())
                .unwrap_or_default(),
            EditorFocus::StepTimer(i) => editor
                .steps()
                .get(i)
                .and_then(|s| s.timer_minutes)
                .map(|m| m.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        self.number_input = text;
    }

    /// Keep the focus on a row that still exists after a removal.
    fn clamp_editor_focus(&mut self) {
        let Some(editor) = self.editor() else {
            return;
        };
        let Some(row) = self.editor_focus.row() else {
            return;
        };
        let len = if self.editor_focus.is_step() {
            editor.steps().len()
        } else {
            editor.ingredients().len()
        };
        if row >= len {
            self.editor_focus = self.editor_focus.with_row(len.saturating_sub(1));
        }
        self.load_number_input();
    }

    pub fn editor_type(&mut self, c: char) {
        let focus = self.editor_focus;
        let View::Editor(editor) = self.controller.view_mut() else {
            return;
        };
        match focus {
            EditorFocus::Title => editor.title.push(c),
            EditorFocus::Description => editor.description.push(c),
            EditorFocus::Tags => editor.tag_input.push(c),
            EditorFocus::Servings => match c {
                '+' | '=' => editor.increase_servings(),
                '-' => editor.decrease_servings(),
                _ => {}
            },
            EditorFocus::IngredientName(i) => {
                if let Some(ing) = editor.ingredients().get(i) {
                    let (id, mut name) = (ing.id, ing.name.clone());
                    name.push(c);
                    editor.update_ingredient(id, IngredientField::Name(name));
                }
            }
            EditorFocus::IngredientUnit(i) => {
                if let Some(ing) = editor.ingredients().get(i) {
                    let (id, mut unit) = (ing.id, ing.unit.clone());
                    unit.push(c);
                    editor.update_ingredient(id, IngredientField::Unit(unit));
                }
            }
            EditorFocus::IngredientAmount(i) => {
                if c.is_ascii_digit() || c == '.' {
                    self.number_input.push(c);
                    if let Some(id) = editor.ingredients().get(i).map(|ing| ing.id) {
                        let amount = parse_amount(&self.number_input);
                        editor.update_ingredient(id, IngredientField::Amount(amount));
                    }
                }
            }
            EditorFocus::StepInstruction(i) => {
                if let Some(step) = editor.steps().get(i) {
                    let (id, mut text) = (step.id, step.instruction.clone());
                    text.push(c);
                    editor.update_step(id, StepField::Instruction(text));
                }
            }
            EditorFocus::StepTimer(i) => {
                if c.is_ascii_digit() {
                    self.number_input.push(c);
                    if let Some(id) = editor.steps().get(i).map(|s| s.id) {
                        let minutes = parse_timer_minutes(&self.number_input);
                        editor.update_step(id, StepField::TimerMinutes(minutes));
                    }
                }
            }
        }
    }

    pub fn editor_backspace(&mut self) {
        let focus = self.editor_focus;
        let View::Editor(editor) = self.controller.view_mut() else {
            return;
        };
        match focus {
            EditorFocus::Title => {
                editor.title.pop();
            }
            EditorFocus::Description => {
                editor.description.pop();
            }
            EditorFocus::Tags => {
                editor.tag_input.pop();
            }
            EditorFocus::Servings => {}
            EditorFocus::IngredientName(i) => {
                if let Some(ing) = editor.ingredients().get(i) {
                    let (id, mut name) = (ing.id, ing.name.clone());
                    name.pop();
                    editor.update_ingredient(id, IngredientField::Name(name));
                }
            }
            EditorFocus::IngredientUnit(i) => {
                if let Some(ing) = editor.ingredients().get(i) {
                    let (id, mut unit) = (ing.id, ing.unit.clone());
                    unit.pop();
                    editor.update_ingredient(id, IngredientField::Unit(unit));
                }
            }
            EditorFocus::IngredientAmount(i) => {
                self.number_input.pop();
                if let Some(id) = editor.ingredients().get(i).map(|ing| ing.id) {
                    let amount = parse_amount(&self.number_input);
                    editor.update_ingredient(id, IngredientField::Amount(amount));
                }
            }
            EditorFocus::StepInstruction(i) => {
                if let Some(step) = editor.steps().get(i) {
                    let (id, mut text) = (step.id, step.instruction.clone());
                    text.pop();
                    editor.update_step(id, StepField::Instruction(text));
                }
            }
            EditorFocus::StepTimer(i) => {
                self.number_input.pop();
                if let Some(id) = editor.steps().get(i).map(|s| s.id) {
                    let minutes = parse_timer_minutes(&self.number_input);
                    editor.update_step(id, StepField::TimerMinutes(minutes));
                }
            }
        }
    }

    /// Up/Down on the servings field, Left/Right on a unit field.
    pub fn editor_step_value(&mut self, forward: bool) {
        let focus = self.editor_focus;
        let View::Editor(editor) = self.controller.view_mut() else {
            return;
        };
        match focus {
            EditorFocus::Servings => {
                if forward {
                    editor.increase_servings();
                } else {
                    editor.decrease_servings();
                }
            }
            EditorFocus::IngredientUnit(i) => {
                if let Some(ing) = editor.ingredients().get(i) {
                    let id = ing.id;
                    let unit = cycle_unit(&ing.unit, forward);
                    editor.update_ingredient(id, IngredientField::Unit(unit.to_string()));
                }
            }
            _ => {}
        }
    }

    pub fn editor_commit_tag(&mut self) {
        if let View::Editor(editor) = self.controller.view_mut() {
            editor.commit_tag_input();
        }
    }

    /// Add a row to the section the focus is in; ingredients by default.
    pub fn editor_add_row(&mut self) {
        let focus = self.editor_focus;
        let View::Editor(editor) = self.controller.view_mut() else {
            return;
        };
        if focus.is_step() {
            editor.add_step();
            self.editor_focus = EditorFocus::StepInstruction(editor.steps().len() - 1);
        } else {
            editor.add_ingredient();
            self.editor_focus = EditorFocus::IngredientName(editor.ingredients().len() - 1);
        }
        self.number_input.clear();
    }

    /// Remove the focused row, or the last tag when the tag field has focus.
    pub fn editor_remove_row(&mut self) {
        let focus = self.editor_focus;
        let View::Editor(editor) = self.controller.view_mut() else {
            return;
        };
        match (focus, focus.row()) {
            (EditorFocus::Tags, _) => {
                if let Some(tag) = editor.tags().last().cloned() {
                    editor.remove_tag(&tag);
                }
            }
            (f, Some(row)) if f.is_step() => {
                if let Some(id) = editor.steps().get(row).map(|s| s.id) {
                    editor.remove_step(id);
                }
            }
            (_, Some(row)) => {
                if let Some(id) = editor.ingredients().get(row).map(|i| i.id) {
                    editor.remove_ingredient(id);
                }
            }
            _ => {}
        }
        self.clamp_editor_focus();
    }

    pub fn save_editor(&mut self) {
        match self.controller.save_editor() {
            Ok(_) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}

fn cycle_unit(current: &str, forward: bool) -> &'static str {
    let len = UNIT_SUGGESTIONS.len();
    let next = match UNIT_SUGGESTIONS.iter().position(|u| *u == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    UNIT_SUGGESTIONS[next]
}
