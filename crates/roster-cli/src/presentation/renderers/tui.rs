//! Interactive TUI renderer.
//!
//! ## Design:
//! - Renderer owns UI state (focus, selections, open modal)
//! - Renderer does NOT own data: every frame is presented from a fresh
//!   coordinator snapshot
//! - Actions run as local tasks on the current-thread runtime, so a slow
//!   request never freezes input and distinct actions can overlap
//! - Confirmation happens in a modal before the action task is spawned

use std::future::Future;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};
use roster_client::RemoteApi;
use roster_runtime::coordinator::{DELETE_DEPARTMENT_PROMPT, DELETE_EMPLOYEE_PROMPT};
use roster_runtime::{Coordinator, FixedAnswer, Snapshot};
use roster_types::RecordId;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use crate::presentation::presenters::{department_options, present_screen};
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{
    DashboardView, DepartmentPanelView, EmployeeFormView, EmployeeTableView, Focus, FormField,
    ModalView, StatusBarView,
};

const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Modal {
    DeleteEmployee(RecordId),
    DeleteDepartment(RecordId),
}

impl Modal {
    fn prompt(&self) -> &'static str {
        match self {
            Modal::DeleteEmployee(_) => DELETE_EMPLOYEE_PROMPT,
            Modal::DeleteDepartment(_) => DELETE_DEPARTMENT_PROMPT,
        }
    }
}

pub struct TuiRenderer<A> {
    coordinator: Rc<Coordinator<A>>,
    server: String,

    /// UI State: pane receiving keys
    focus: Focus,

    /// UI State: highlighted table row
    employee_row: usize,

    /// UI State: highlighted department chip
    department_item: usize,

    /// UI State: open confirmation prompt
    modal: Option<Modal>,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl<A> TuiRenderer<A>
where
    A: RemoteApi + 'static,
{
    pub fn new(coordinator: Coordinator<A>, server: impl Into<String>) -> Self {
        Self {
            coordinator: Rc::new(coordinator),
            server: server.into(),
            focus: Focus::Employees,
            employee_row: 0,
            department_item: 0,
            modal: None,
            should_quit: false,
        }
    }

    /// Set up the terminal, run the event loop on a `LocalSet`, and restore
    /// the terminal on every exit path.
    pub fn run(self, runtime: &Runtime) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let local = LocalSet::new();
        let result = local.block_on(runtime, self.event_loop(&mut terminal));

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.spawn(|coordinator| async move { coordinator.load().await });

        loop {
            let snapshot = self.coordinator.snapshot();
            let screen = present_screen(&snapshot, &self.server);
            self.clamp_selection(&snapshot);

            terminal.draw(|f| self.render(f, &screen))?;

            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key, &snapshot);
                }
            }

            if self.should_quit {
                break;
            }

            // Lets in-flight action tasks make progress
            tokio::time::sleep(TICK).await;
        }

        Ok(())
    }

    fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Coordinator<A>>) -> Fut,
        Fut: Future + 'static,
    {
        let future = action(Rc::clone(&self.coordinator));
        tokio::task::spawn_local(async move {
            future.await;
        });
    }

    fn clamp_selection(&mut self, snapshot: &Snapshot) {
        self.employee_row = self
            .employee_row
            .min(snapshot.visible_employees.len().saturating_sub(1));
        self.department_item = self
            .department_item
            .min(snapshot.departments.len().saturating_sub(1));
    }

    fn handle_key_event(&mut self, key: KeyEvent, snapshot: &Snapshot) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(modal) = self.modal.take() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.confirmed(modal);
            }
            return;
        }

        if snapshot.notice.is_some() {
            self.coordinator.dismiss_notice();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Employees => self.handle_table_key(key.code, snapshot),
            Focus::Form(field) => self.handle_form_key(key.code, field, snapshot),
            Focus::Departments => self.handle_departments_key(key.code, snapshot),
            Focus::DepartmentInput => self.handle_department_input_key(key.code),
        }
    }

    fn handle_table_key(&mut self, code: KeyCode, snapshot: &Snapshot) {
        let selected = snapshot.visible_employees.get(self.employee_row);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.employee_row = self.employee_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.employee_row = self.employee_row.saturating_add(1);
            }
            KeyCode::Home => self.employee_row = 0,
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(employee) = selected {
                    if self.coordinator.begin_edit(&employee.id).is_success() {
                        self.focus = Focus::Form(FormField::Name);
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(employee) = selected {
                    self.modal = Some(Modal::DeleteEmployee(employee.id.clone()));
                }
            }
            KeyCode::Char('n') => {
                self.coordinator.cancel_edit();
                self.focus = Focus::Form(FormField::Name);
            }
            KeyCode::Char('r') => {
                self.spawn(|coordinator| async move { coordinator.refresh().await });
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode, field: FormField, snapshot: &Snapshot) {
        match code {
            KeyCode::Up => self.focus = Focus::Form(field.previous()),
            KeyCode::Down => self.focus = Focus::Form(field.next()),
            KeyCode::Enter => {
                self.spawn(|coordinator| async move { coordinator.submit().await });
            }
            KeyCode::Esc => {
                if !self.coordinator.cancel_edit().is_success() {
                    self.focus = Focus::Employees;
                }
            }
            KeyCode::Left | KeyCode::Right if field == FormField::Department => {
                let values: Vec<String> = department_options(&snapshot.departments)
                    .into_iter()
                    .map(|option| option.value)
                    .collect();
                let current = values
                    .iter()
                    .position(|value| value == &snapshot.form.department)
                    .unwrap_or(0);
                let next = if code == KeyCode::Right {
                    (current + 1) % values.len()
                } else {
                    (current + values.len() - 1) % values.len()
                };
                let value = values[next].clone();
                self.coordinator.update_form(|form| form.department = value);
            }
            KeyCode::Backspace if field != FormField::Department => {
                self.coordinator.update_form(|form| {
                    text_field(form, field).pop();
                });
            }
            KeyCode::Char(c) if field != FormField::Department => {
                self.coordinator.update_form(|form| text_field(form, field).push(c));
            }
            _ => {}
        }
    }

    fn handle_departments_key(&mut self, code: KeyCode, snapshot: &Snapshot) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Up => {
                self.department_item = self.department_item.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                self.department_item = self.department_item.saturating_add(1);
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(department) = snapshot.departments.get(self.department_item) {
                    self.modal = Some(Modal::DeleteDepartment(department.id.clone()));
                }
            }
            _ => {}
        }
    }

    fn handle_department_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.spawn(|coordinator| async move { coordinator.add_department().await });
            }
            KeyCode::Esc => self.focus = Focus::Departments,
            KeyCode::Backspace => {
                let mut input = self.coordinator.snapshot().department_input;
                input.pop();
                self.coordinator.set_department_input(input);
            }
            KeyCode::Char(c) => {
                let mut input = self.coordinator.snapshot().department_input;
                input.push(c);
                self.coordinator.set_department_input(input);
            }
            _ => {}
        }
    }

    fn confirmed(&mut self, modal: Modal) {
        match modal {
            Modal::DeleteEmployee(id) => self.spawn(|coordinator| async move {
                coordinator
                    .delete_employee(&id, &mut FixedAnswer(true))
                    .await
            }),
            Modal::DeleteDepartment(id) => self.spawn(|coordinator| async move {
                coordinator
                    .delete_department(&id, &mut FixedAnswer(true))
                    .await
            }),
        }
    }

    fn render(&self, f: &mut Frame, screen: &ScreenViewModel) {
        let size = f.area();

        let main_chunks = Layout::vertical([
            Constraint::Length(3), // Dashboard
            Constraint::Min(10),   // Table + side panel
            Constraint::Length(1), // Key hints
        ])
        .split(size);

        f.render_widget(
            DashboardView::new(&screen.stats, &screen.server),
            main_chunks[0],
        );

        let content_chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(main_chunks[1]);

        f.render_widget(
            EmployeeTableView::new(
                &screen.employees,
                Some(self.employee_row),
                self.focus == Focus::Employees,
            ),
            content_chunks[0],
        );

        let side_chunks = Layout::vertical([Constraint::Length(10), Constraint::Min(7)])
            .split(content_chunks[1]);

        let active_field = match self.focus {
            Focus::Form(field) => Some(field),
            _ => None,
        };
        f.render_widget(
            EmployeeFormView::new(&screen.form, active_field),
            side_chunks[0],
        );
        f.render_widget(
            DepartmentPanelView::new(
                &screen.departments,
                Some(self.department_item),
                self.focus == Focus::Departments,
                self.focus == Focus::DepartmentInput,
            ),
            side_chunks[1],
        );

        f.render_widget(StatusBarView::new(self.focus), main_chunks[2]);

        if let Some(modal) = &self.modal {
            f.render_widget(ModalView::confirm(modal.prompt()), size);
        } else if let Some(notice) = &screen.notice {
            f.render_widget(ModalView::notice(notice), size);
        }
    }
}

fn text_field(form: &mut roster_types::EmployeeForm, field: FormField) -> &mut String {
    match field {
        FormField::Name => &mut form.name,
        FormField::Department => &mut form.department,
        FormField::Salary => &mut form.salary,
        FormField::HireDate => &mut form.hire_date,
    }
}
