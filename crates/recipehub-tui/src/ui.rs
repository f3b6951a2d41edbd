use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use recipehub_core::services::filter::RecipeFilter;
use recipehub_core::services::scaling::format_amount;
use recipehub_core::services::step_timer::TimerState;
use recipehub_core::viewmodel::{
    visible_tabs, DashboardViewModel, LoginViewModel, RecipeEditorViewModel, RecipeViewerViewModel,
};
use recipehub_core::View;
use recipehub_shared::utils::initial;

use crate::app::{App, EditorFocus, LoginFocus};
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(5),    // Screen
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app, &theme);

    if !app.is_signed_in() {
        render_landing(frame, chunks[1], &theme);
    } else {
        match app.controller.view() {
            View::Dashboard(dashboard) => render_dashboard(frame, chunks[1], app, dashboard, &theme),
            View::Editor(editor) => render_editor(frame, chunks[1], app, editor, &theme),
            View::Recipe(viewer) => render_viewer(frame, chunks[1], viewer, &theme),
            View::Collaborations => render_collaborations(frame, chunks[1], &theme),
        }
    }

    render_footer(frame, chunks[2], app, &theme);

    if let Some(form) = app.controller.login_form() {
        render_login(frame, form, app.login_focus, &theme);
    }
    if let View::Recipe(viewer) = app.controller.view() {
        if let Some(msg) = viewer.notification() {
            render_notification(frame, msg, &theme);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" RecipeHub ")
        .title_style(theme.title);
    frame.render_widget(block, area);

    let inner = inner_rect(area, 1);
    let halves = Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).split(inner);

    let current = app.controller.view_id();
    let mut tabs = Vec::new();
    for (i, tab) in visible_tabs(app.is_signed_in()).into_iter().enumerate() {
        let style = if tab.is_active(current) {
            theme.selected
        } else {
            theme.normal
        };
        tabs.push(Span::styled(format!(" F{} {} ", i + 1, tab.label()), style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), halves[0]);

    let right = match app.controller.user() {
        Some(user) => Line::from(vec![
            Span::styled(" Chef ", theme.accent),
            Span::styled(format!("[{}] ", user.initial()), theme.title),
            Span::styled(user.name.clone(), theme.normal),
            Span::raw("  "),
            Span::styled(" F10 ", theme.key_hint),
            Span::styled("Logout", theme.muted),
        ]),
        None => Line::from(vec![
            Span::styled(" Enter ", theme.key_hint),
            Span::styled("Login", theme.muted),
        ]),
    };
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

fn render_landing(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("Welcome to RecipeHub", theme.title)),
        Line::raw(""),
        Line::from(Span::styled(
            "Create, share and cook recipes together.",
            theme.normal,
        )),
        Line::raw(""),
        Line::from(Span::styled("* Collaborate with other chefs", theme.muted)),
        Line::from(Span::styled("* Scale any recipe to your table", theme.muted)),
        Line::from(Span::styled("* Built-in step timers", theme.muted)),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Enter ", theme.key_hint),
            Span::styled("Get started", theme.muted),
            Span::raw("    "),
            Span::styled(" q ", theme.key_hint),
            Span::styled("Quit", theme.muted),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(text, area);
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    dashboard: &DashboardViewModel,
    theme: &Theme,
) {
    let layout = Layout::default()
        .constraints([
            Constraint::Length(1), // Search
            Constraint::Length(1), // Filters
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Cards
        ])
        .split(inner_rect(area, 1));

    let cursor = if app.searching { "_" } else { "" };
    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", theme.muted),
        Span::styled(format!("{}{}", dashboard.query(), cursor), theme.normal),
    ]));
    frame.render_widget(search, layout[0]);

    let mut filters = vec![Span::styled("Filter: ", theme.muted)];
    for filter in RecipeFilter::all() {
        let style = if filter == dashboard.filter() {
            theme.selected
        } else {
            theme.normal
        };
        filters.push(Span::styled(format!(" {} ", filter.label()), style));
        filters.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(filters)), layout[1]);

    let recipes = dashboard.visible(app.controller.book(), app.controller.user_name());
    if recipes.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No recipes found", theme.title)),
            Line::from(Span::styled(
                "Try a different search or create your first recipe.",
                theme.muted,
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" n ", theme.key_hint),
                Span::styled("Create Recipe", theme.muted),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, layout[3]);
        return;
    }

    let selected = dashboard.cursor().min(recipes.len() - 1);
    let items: Vec<ListItem> = recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let title_style = if i == selected {
                theme.selected
            } else {
                theme.title
            };
            let visibility = if recipe.is_public { "Public" } else { "Private" };

            let mut meta = vec![
                Span::styled(
                    format!("[{}] {}", initial(&recipe.author), recipe.author),
                    theme.normal,
                ),
                Span::styled(format!("  {}  ", recipe.cook_time_label()), theme.muted),
                Span::styled(format!("* {:.1}", recipe.rating), theme.accent),
                Span::styled(format!("  {}", visibility), theme.muted),
            ];
            if let Some(collab) = recipe.collaborator_summary() {
                meta.push(Span::styled(format!("  {}", collab), theme.muted));
            }

            let tags: Vec<Span> = recipe
                .tags
                .iter()
                .map(|t| Span::styled(format!("#{} ", t), theme.tag))
                .collect();

            ListItem::new(vec![
                Line::from(Span::styled(format!(" {} ", recipe.title), title_style)),
                Line::from(Span::styled(format!(" {}", recipe.description), theme.muted)),
                Line::from(tags),
                Line::from(meta),
                Line::raw(""),
            ])
        })
        .collect();

    // Scroll so the cursor card stays on screen
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(
        List::new(items).highlight_symbol("> "),
        layout[3],
        &mut state,
    );
}

fn render_editor(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    editor: &RecipeEditorViewModel,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" {} ", editor.heading()))
        .title_style(theme.title);
    frame.render_widget(block, area);

    let focus = app.editor_focus;
    let style_for = |field: EditorFocus| {
        if field == focus {
            theme.selected
        } else {
            theme.normal
        }
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0usize;
    let mut push = |lines: &mut Vec<Line<'static>>, line: Line<'static>, focused: bool| {
        if focused {
            focused_line = lines.len();
        }
        lines.push(line);
    };

    push(
        &mut lines,
        Line::from(vec![
            Span::styled("Title:       ", theme.muted),
            Span::styled(editor.title.clone(), style_for(EditorFocus::Title)),
        ]),
        focus == EditorFocus::Title,
    );
    push(
        &mut lines,
        Line::from(vec![
            Span::styled("Description: ", theme.muted),
            Span::styled(editor.description.clone(), style_for(EditorFocus::Description)),
        ]),
        focus == EditorFocus::Description,
    );
    push(
        &mut lines,
        Line::from(vec![
            Span::styled("Servings:    ", theme.muted),
            Span::styled(format!(" - {} + ", editor.servings()), style_for(EditorFocus::Servings)),
        ]),
        focus == EditorFocus::Servings,
    );

    let mut tag_spans = vec![Span::styled("Tags:        ", theme.muted)];
    for tag in editor.tags() {
        tag_spans.push(Span::styled(format!("#{} ", tag), theme.tag));
    }
    tag_spans.push(Span::styled(
        format!("+ {}", editor.tag_input),
        style_for(EditorFocus::Tags),
    ));
    push(&mut lines, Line::from(tag_spans), focus == EditorFocus::Tags);

    push(&mut lines, Line::raw(""), false);
    push(
        &mut lines,
        Line::from(Span::styled("Ingredients", theme.title)),
        false,
    );
    for (i, ing) in editor.ingredients().iter().enumerate() {
        let amount = if focus == EditorFocus::IngredientAmount(i) {
            app.number_input.clone()
        } else {
            format_amount(ing.amount)
        };
        let name = if ing.name.is_empty() {
            "(ingredient)".to_string()
        } else {
            ing.name.clone()
        };
        let focused = matches!(
            focus,
            EditorFocus::IngredientName(r) | EditorFocus::IngredientAmount(r) | EditorFocus::IngredientUnit(r) if r == i
        );
        push(
            &mut lines,
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:>6}", amount), style_for(EditorFocus::IngredientAmount(i))),
                Span::raw(" "),
                Span::styled(format!("{:<7}", ing.unit), style_for(EditorFocus::IngredientUnit(i))),
                Span::raw(" "),
                Span::styled(name, style_for(EditorFocus::IngredientName(i))),
            ]),
            focused,
        );
    }

    push(&mut lines, Line::raw(""), false);
    push(&mut lines, Line::from(Span::styled("Steps", theme.title)), false);
    for (i, step) in editor.steps().iter().enumerate() {
        let instruction = if step.instruction.is_empty() {
            "(instruction)".to_string()
        } else {
            step.instruction.clone()
        };
        let timer = if focus == EditorFocus::StepTimer(i) {
            format!("timer: {}_ min", app.number_input)
        } else {
            match step.timer_minutes {
                Some(m) => format!("timer: {} min", m),
                None => "no timer".to_string(),
            }
        };
        let focused = matches!(
            focus,
            EditorFocus::StepInstruction(r) | EditorFocus::StepTimer(r) if r == i
        );
        push(
            &mut lines,
            Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), theme.muted),
                Span::styled(instruction, style_for(EditorFocus::StepInstruction(i))),
                Span::raw("  "),
                Span::styled(timer, style_for(EditorFocus::StepTimer(i))),
            ]),
            focused,
        );
    }

    let inner = inner_rect(area, 1);
    let scroll = focused_line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let form = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(form, inner);
}

fn render_viewer(frame: &mut Frame, area: Rect, viewer: &RecipeViewerViewModel, theme: &Theme) {
    let recipe = viewer.recipe();

    let rows = Layout::default()
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(inner_rect(area, 1));

    let mut meta = vec![
        Span::styled(format!("by {}", recipe.author), theme.normal),
        Span::styled(format!("  Updated {}", recipe.last_modified), theme.muted),
        Span::styled(format!("  {}", recipe.cook_time_label()), theme.muted),
        Span::styled(format!("  * {:.1}", recipe.rating), theme.accent),
    ];
    if !recipe.collaborators.is_empty() {
        meta.push(Span::styled(
            format!("  with {}", recipe.collaborators.join(", ")),
            theme.muted,
        ));
    }
    let tags: Vec<Span> = recipe
        .tags
        .iter()
        .map(|t| Span::styled(format!("#{} ", t), theme.tag))
        .collect();
    let info = Paragraph::new(vec![
        Line::from(Span::styled(recipe.title.clone(), theme.title)),
        Line::from(Span::styled(recipe.description.clone(), theme.normal)),
        Line::from(meta),
        Line::from(tags),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(info, rows[0]);

    let cols = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    // Ingredients, scaled to the chosen servings
    let mut ingredient_lines = vec![
        Line::from(vec![
            Span::styled("Servings: ", theme.muted),
            Span::styled(format!(" - {} + ", viewer.servings()), theme.selected),
        ]),
        Line::raw(""),
    ];
    for ing in viewer.scaled_ingredients() {
        ingredient_lines.push(Line::from(vec![
            Span::styled("- ", theme.muted),
            Span::styled(format!("{} {}", ing.amount_label(), ing.unit), theme.accent),
            Span::styled(format!(" {}", ing.name), theme.normal),
        ]));
    }
    let ingredients = Paragraph::new(ingredient_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Ingredients ")
                .title_style(theme.title),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(ingredients, cols[0]);

    let right = Layout::default()
        .constraints([
            Constraint::Length(2), // Progress
            Constraint::Length(4), // Current step
            Constraint::Length(2), // Timer
            Constraint::Min(1),    // All steps
        ])
        .split(cols[1]);

    let cursor = viewer.cursor();
    let progress = Gauge::default()
        .block(Block::default().title("Progress").title_style(theme.normal))
        .gauge_style(theme.success)
        .ratio(cursor.progress().clamp(0.0, 1.0))
        .label(format!("{} ({}%)", cursor.label(), cursor.percent()));
    frame.render_widget(progress, right[0]);

    let current = match viewer.current_step() {
        Some(step) => Paragraph::new(vec![
            Line::from(Span::styled(format!("Step {}", cursor.current() + 1), theme.title)),
            Line::from(Span::styled(step.instruction.clone(), theme.normal)),
        ])
        .wrap(Wrap { trim: true }),
        None => Paragraph::new(Span::styled("This recipe has no steps yet.", theme.muted)),
    };
    frame.render_widget(current, right[1]);

    render_timer(frame, right[2], viewer, theme);

    let items: Vec<ListItem> = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let marker = if i < cursor.current() {
                "x"
            } else if i == cursor.current() {
                ">"
            } else {
                " "
            };
            let style = if i == cursor.current() {
                theme.title
            } else {
                theme.muted
            };
            let timer = step
                .timer_minutes
                .map(|m| format!("  ({} min)", m))
                .unwrap_or_default();
            ListItem::new(format!("{} {}. {}{}", marker, i + 1, step.instruction, timer)).style(style)
        })
        .collect();
    let mut state = ListState::default().with_selected(Some(cursor.current()));
    frame.render_stateful_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border)
                .title(" Steps ")
                .title_style(theme.title),
        ),
        right[3],
        &mut state,
    );
}

fn render_timer(frame: &mut Frame, area: Rect, viewer: &RecipeViewerViewModel, theme: &Theme) {
    let Some(step) = viewer.current_step() else {
        return;
    };

    let line = match (step.timer_minutes, viewer.timer_state_for(step.id)) {
        (Some(_), TimerState::Running | TimerState::Paused) => {
            if let Some(timer) = viewer.active_timer() {
                let state = if timer.is_running { "running" } else { "paused" };
                let gauge = Gauge::default()
                    .block(Block::default().title("Timer").title_style(theme.normal))
                    .gauge_style(if timer.is_running { theme.accent } else { theme.muted })
                    .ratio(timer.progress().clamp(0.0, 1.0))
                    .label(format!("{} {}", timer.clock(), state));
                frame.render_widget(gauge, area);
            }
            return;
        }
        (Some(minutes), TimerState::Idle) => Line::from(vec![
            Span::styled(format!("{} min timer  ", minutes), theme.normal),
            Span::styled(" t ", theme.key_hint),
            Span::styled("Start", theme.muted),
        ]),
        (None, _) => Line::from(Span::styled("No timer for this step", theme.muted)),
    };

    // A timer may still be counting on a step the user has moved away from
    let mut lines = vec![line];
    if let Some(timer) = viewer.active_timer().filter(|t| t.step_id != step.id) {
        let number = viewer
            .recipe()
            .step_index(timer.step_id)
            .map(|i| i + 1)
            .unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!("Step {} timer: {}", number, timer.clock()),
            theme.accent,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_collaborations(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("Collaborative Recipes", theme.title)),
        Line::raw(""),
        Line::from(Span::styled(
            "Work together with other chefs to create amazing recipes.",
            theme.normal,
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" c ", theme.key_hint),
            Span::styled("Create Collaborative Recipe", theme.muted),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(text, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if let Some(status) = &app.status {
        let p = Paragraph::new(Span::styled(status.clone(), theme.danger))
            .alignment(Alignment::Center);
        frame.render_widget(p, area);
        return;
    }

    let hints: &[(&str, &str)] = if app.controller.login_form().is_some() {
        &[("Tab", "Next field"), ("Ctrl-T", "Switch mode"), ("Enter", "Submit"), ("Esc", "Close")]
    } else if !app.is_signed_in() {
        &[("Enter", "Login"), ("q", "Quit")]
    } else {
        match app.controller.view() {
            View::Dashboard(_) if app.searching => &[("Enter/Esc", "Done")],
            View::Dashboard(_) => &[
                ("Up/Down", "Navigate"),
                ("Enter", "Open"),
                ("/", "Search"),
                ("Tab", "Filter"),
                ("n", "New"),
                ("q", "Quit"),
            ],
            View::Editor(_) if app.editor_focus == EditorFocus::Tags => &[
                ("Tab", "Next"),
                ("Enter", "Add tag"),
                ("Ctrl-D", "Remove last tag"),
                ("Ctrl-S", "Save"),
                ("Esc", "Cancel"),
            ],
            View::Editor(_) => &[
                ("Tab", "Next"),
                ("Left/Right", "Adjust"),
                ("Ctrl-A", "Add row"),
                ("Ctrl-D", "Remove"),
                ("Ctrl-S", "Save"),
                ("Esc", "Cancel"),
            ],
            View::Recipe(_) => &[
                ("-/+", "Servings"),
                ("Left/Right", "Step"),
                ("t", "Timer"),
                ("Space", "Pause"),
                ("r", "Reset"),
                ("e", "Edit"),
                ("Esc", "Back"),
            ],
            View::Collaborations => &[("c", "Create"), ("F1", "Dashboard")],
        }
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), theme.key_hint));
        spans.push(Span::styled(label.to_string(), theme.muted));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_login(frame: &mut Frame, form: &LoginViewModel, focus: LoginFocus, theme: &Theme) {
    let area = center_rect(frame.area(), 60, 13);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.title)
        .title(format!(" {} ", form.title()))
        .title_style(theme.title);
    frame.render_widget(block, area);

    let field = |label: &'static str, value: String, field: LoginFocus| {
        let style = if field == focus {
            theme.selected
        } else {
            theme.normal
        };
        Line::from(vec![
            Span::styled(label, theme.muted),
            Span::styled(format!("{} ", value), style),
        ])
    };

    let mut lines = vec![Line::raw("")];
    if form.is_sign_up {
        lines.push(field("Full name: ", form.name.clone(), LoginFocus::Name));
    }
    lines.push(field("Email:     ", form.email.clone(), LoginFocus::Email));
    lines.push(field(
        "Password:  ",
        "*".repeat(form.password.chars().count()),
        LoginFocus::Password,
    ));
    lines.push(Line::raw(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), theme.danger)));
    }
    lines.push(Line::from(vec![
        Span::styled(" Enter ", theme.key_hint),
        Span::styled(form.submit_label(), theme.muted),
    ]));
    let switch = if form.is_sign_up {
        "Already have an account? Sign in"
    } else {
        "Don't have an account? Sign up"
    };
    lines.push(Line::from(vec![
        Span::styled(" Ctrl-T ", theme.key_hint),
        Span::styled(switch, theme.muted),
    ]));

    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(text, inner_rect(area, 2));
}

fn render_notification(frame: &mut Frame, msg: &str, theme: &Theme) {
    let area = center_rect(frame.area(), 50, 6);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.success)
        .title(" Timer ")
        .title_style(theme.success);
    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw(msg.to_string()),
        Line::from(Span::styled("Press any key to continue", theme.muted)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(text, inner_rect(area, 1));
}

// Helper: shrink rect by margin
fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

// Helper: center a popup
fn center_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    let x = (area.width - width) / 2;
    let y = (area.height - height) / 2;
    Rect {
        x: area.x + x,
        y: area.y + y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use recipehub_core::services::ticker::ManualTickScheduler;
    use recipehub_core::{AppController, AppEvent, RecipeBook, Step, User};
    use recipehub_shared::types::new_id;

    fn app() -> (App, Arc<ManualTickScheduler>) {
        let scheduler = ManualTickScheduler::new();
        let controller = AppController::new(
            RecipeBook::seeded(),
            scheduler.clone(),
            Duration::from_secs(1),
        );
        (App::new(controller), scheduler)
    }

    fn signed_in() -> (App, Arc<ManualTickScheduler>) {
        let (mut app, scheduler) = app();
        app.controller.login(User::new("Alice Johnson", "alice@email.com"));
        (app, scheduler)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_landing_screen() {
        let (app, _) = app();
        let screen = draw(&app);
        assert!(screen.contains("Welcome to RecipeHub"));
        assert!(!screen.contains("Collaborations"));
    }

    #[test]
    fn test_login_modal() {
        let (mut app, _) = app();
        app.open_login();
        let screen = draw(&app);
        assert!(screen.contains("Welcome Back"));
        assert!(screen.contains("Sign In"));

        app.toggle_login_mode();
        let screen = draw(&app);
        assert!(screen.contains("Join RecipeHub"));
        assert!(screen.contains("Full name:"));
    }

    #[test]
    fn test_dashboard_lists_catalogue() {
        let (app, _) = signed_in();
        let screen = draw(&app);
        assert!(screen.contains("F1 Dashboard"));
        assert!(screen.contains("Chef"));
        assert!(screen.contains("Grandma's Chocolate Chip Cookies"));
        assert!(screen.contains("Spicy Thai Basil Stir Fry"));
        assert!(screen.contains("2 collaborators"));
    }

    #[test]
    fn test_dashboard_empty_state() {
        let (mut app, _) = signed_in();
        if let View::Dashboard(dashboard) = app.controller.view_mut() {
            dashboard.set_query("no such dish");
        }
        let screen = draw(&app);
        assert!(screen.contains("No recipes found"));
        assert!(screen.contains("Create Recipe"));
    }

    #[test]
    fn test_viewer_shows_progress_and_timer() {
        let (mut app, scheduler) = signed_in();
        app.controller.select_from_dashboard();
        let screen = draw(&app);
        assert!(screen.contains("Step 1 of 6"));
        assert!(screen.contains("10 min timer"));

        if let View::Recipe(viewer) = app.controller.view_mut() {
            viewer.start_timer_for_current_step();
        }
        let id = scheduler.last_id().unwrap();
        app.controller.handle_event(AppEvent::TimerTick(id));
        let screen = draw(&app);
        assert!(screen.contains("9:59 running"));
    }

    fn padded_book(extra: usize) -> RecipeBook {
        let mut recipes = RecipeBook::seeded().all().to_vec();
        let template = recipes[0].clone();
        for n in 0..extra {
            let mut recipe = template.clone();
            recipe.id = new_id();
            recipe.title = format!("Extra Dish Number {}", n);
            recipes.push(recipe);
        }
        RecipeBook::new(recipes)
    }

    #[test]
    fn test_dashboard_scrolls_to_cursor() {
        let scheduler = ManualTickScheduler::new();
        let controller = AppController::new(padded_book(6), scheduler, Duration::from_secs(1));
        let mut app = App::new(controller);
        app.controller.login(User::new("Alice Johnson", "alice@email.com"));

        let screen = draw(&app);
        assert!(screen.contains("Grandma's Chocolate Chip Cookies"));
        assert!(!screen.contains("Extra Dish Number 5"));

        let len = app.controller.book().len();
        if let View::Dashboard(dashboard) = app.controller.view_mut() {
            for _ in 0..20 {
                dashboard.move_down(len);
            }
        }
        let screen = draw(&app);
        assert!(screen.contains("Extra Dish Number 5"));
    }

    #[test]
    fn test_viewer_step_list_follows_cursor() {
        let (mut app, _) = signed_in();
        let mut recipe = app.controller.book().all()[0].clone();
        recipe.steps = (1..=30)
            .map(|n| Step {
                id: new_id(),
                instruction: format!("Stage {}", n),
                timer_minutes: None,
            })
            .collect();
        app.controller.select_recipe(recipe);
        if let View::Recipe(viewer) = app.controller.view_mut() {
            while viewer.next_step() {}
        }
        let screen = draw(&app);
        assert!(screen.contains("> 30. Stage 30"));
    }

    #[test]
    fn test_tag_focus_hint() {
        let (mut app, _) = signed_in();
        app.controller.create_new();
        app.editor_focus = EditorFocus::Tags;
        let screen = draw(&app);
        assert!(screen.contains("Remove last tag"));
    }

    #[test]
    fn test_editor_heading() {
        let (mut app, _) = signed_in();
        app.controller.create_new();
        let screen = draw(&app);
        assert!(screen.contains("Create New Recipe"));
        assert!(screen.contains("Ingredients"));
    }
}
