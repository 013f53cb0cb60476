//! Application root: owns the UI state and drives the event loop.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::services::{ActivityLog, NotificationManager, ViewRegistry, ViewRouter};
use crate::application::use_cases::TaskReport;
use crate::domain::keybinding::{self, Keybind, confirm_keybinds, menu_keybinds};
use crate::domain::ports::CommandRunnerPort;
use crate::domain::{
    CommandResult, MenuAction, MenuItem, NavigationError, NotificationLevel, Task, TaskId,
    ViewKey,
};
use crate::infrastructure::AppConfig;
use crate::presentation::events::{self, EventResult};
use crate::presentation::ui::backend::{Action, Backend, BackendCommand};
use crate::presentation::ui::confirm_dialog::{ConfirmAnswer, ConfirmDialog};
use crate::presentation::ui::menu_screen::{MenuFocus, MenuKeyResult, MenuScreen, MenuScreenState};
use crate::presentation::ui::notification_popup::NotificationPopup;
use crate::presentation::widgets::{FocusContext, FooterBar, StatusBar};

const NOTIFICATION_TICK: Duration = Duration::from_millis(250);
const VERSION_INFO: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// A task waiting on the user's answer to its prerequisite prompt.
struct PendingConfirmation {
    id: TaskId,
    task: Task,
    dialog: ConfirmDialog,
}

/// Everything the screen shows.
pub struct UiState {
    router: ViewRouter,
    sidebar: Vec<MenuItem>,
    screen: MenuScreenState,
    modal: Option<PendingConfirmation>,
    notifications: NotificationManager,
    activity: ActivityLog,
    status: StatusBar,
    running: Option<TaskId>,
}

impl UiState {
    #[must_use]
    pub fn current_view(&self) -> Option<ViewKey> {
        self.router.current()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.modal.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> &StatusBar {
        &self.status
    }

    #[must_use]
    pub const fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}

pub struct App {
    state: AppState,
    ui: UiState,
    tasks: BTreeMap<TaskId, Task>,
    menu_keys: Vec<Keybind>,
    confirm_keys: Vec<Keybind>,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    backend: Option<Backend>,
}

impl App {
    /// Builds the application and mounts the main menu.
    ///
    /// # Errors
    /// Returns an error if the menu table is inconsistent.
    pub fn new(
        config: &AppConfig,
        runner: Arc<dyn CommandRunnerPort>,
    ) -> Result<Self, NavigationError> {
        let registry = Arc::new(ViewRegistry::from_table(&config.menu)?);
        info!(views = registry.len(), "View registry ready");

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            state: AppState::Running,
            ui: UiState {
                router: ViewRouter::new(registry),
                sidebar: config.menu.sidebar.clone(),
                screen: MenuScreenState::new(),
                modal: None,
                notifications: NotificationManager::new(Duration::from_secs(
                    config.ui.notification_duration,
                )),
                activity: ActivityLog::new(config.ui.activity_log_size),
                status: StatusBar::default(),
                running: None,
            },
            tasks: config.menu.tasks.clone(),
            menu_keys: menu_keybinds(),
            confirm_keys: confirm_keybinds(),
            command_tx,
            action_rx,
            backend: Some(Backend::new(runner, command_rx, action_tx)),
        };
        app.navigate(ViewKey::MainMenu)?;
        Ok(app)
    }

    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Shows a startup problem without stopping the application.
    pub fn report_startup_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.ui.activity.record(NotificationLevel::Warn, &message);
        self.ui.status = StatusBar::warning(&message);
        self.ui.notifications.warn("Startup", message);
    }

    /// # Errors
    /// Returns error if drawing fails, the terminal stream fails, or a menu
    /// item targets a view that is not registered.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if let Some(backend) = self.backend.take() {
            tokio::spawn(backend.run());
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.ui.notifications.tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event)? == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> Result<EventResult, NavigationError> {
        match events::key_press(event) {
            Some(key) => self.handle_key(key),
            None => Ok(EventResult::Continue),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult, NavigationError> {
        if self.ui.modal.is_some() {
            self.handle_confirmation_key(key);
            return Ok(EventResult::Continue);
        }

        let Some(action) = keybinding::resolve(&self.menu_keys, &key) else {
            return Ok(EventResult::Continue);
        };

        let container = self.ui.router.container();
        let result = self
            .ui
            .screen
            .apply(action, self.ui.sidebar.len(), container.len());

        let item = match result {
            MenuKeyResult::Quit => return Ok(EventResult::Exit),
            MenuKeyResult::Back => {
                self.navigate(ViewKey::MainMenu)?;
                return Ok(EventResult::Continue);
            }
            MenuKeyResult::ActivateSidebar(index) => self.ui.sidebar.get(index).cloned(),
            MenuKeyResult::ActivateContent(index) => container
                .handle(index)
                .and_then(|handle| container.resolve(handle))
                .cloned(),
            MenuKeyResult::Consumed | MenuKeyResult::Ignored => None,
        };

        match item {
            Some(item) => self.activate(item),
            None => Ok(EventResult::Continue),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        let Some(action) = keybinding::resolve(&self.confirm_keys, &key) else {
            return;
        };
        let Some(pending) = self.ui.modal.as_mut() else {
            return;
        };

        let confirmed = match pending.dialog.apply(action) {
            ConfirmAnswer::Pending => return,
            ConfirmAnswer::Yes => true,
            ConfirmAnswer::No => false,
        };

        if let Some(PendingConfirmation { id, task, .. }) = self.ui.modal.take() {
            debug!(task = %id, confirmed, "Prerequisite prompt answered");
            if confirmed {
                self.ui.status = StatusBar::info(format!("Installing prerequisite for {}...", task.label));
            }
            self.dispatch(BackendCommand::ResumeTask {
                id,
                task,
                confirmed,
            });
        }
    }

    fn activate(&mut self, item: MenuItem) -> Result<EventResult, NavigationError> {
        match item.action {
            MenuAction::Navigate(key) => self.navigate(key)?,
            MenuAction::Run(id) => self.start_task(id),
            MenuAction::Placeholder => {
                self.ui
                    .notifications
                    .info(item.label, "This option is not available yet.");
            }
            MenuAction::Quit => return Ok(EventResult::Exit),
        }
        Ok(EventResult::Continue)
    }

    fn navigate(&mut self, key: ViewKey) -> Result<(), NavigationError> {
        self.ui.router.navigate(key)?;
        let container = self.ui.router.container();
        self.ui.screen.on_navigate(container.len());
        if !self.ui.is_busy() {
            let title = container
                .content()
                .map_or_else(|| key.to_string(), |content| content.title.clone());
            self.ui.status = StatusBar::info(title);
        }
        Ok(())
    }

    fn start_task(&mut self, id: TaskId) {
        if let Some(running) = &self.ui.running {
            let label = self.task_label(running);
            warn!(requested = %id, running = %running, "Task already running");
            self.ui
                .notifications
                .warn("Busy", format!("{label} is still running."));
            return;
        }

        let Some(task) = self.tasks.get(&id).cloned() else {
            error!(task = %id, "Menu item references an unknown task");
            self.ui
                .notifications
                .error("Unknown task", format!("No task named {id}."));
            return;
        };

        info!(task = %id, "Starting task");
        self.ui.status = StatusBar::info(format!("Running {}...", task.label));
        self.ui.running = Some(id.clone());
        self.dispatch(BackendCommand::StartTask { id, task });
    }

    fn dispatch(&mut self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            error!("Backend worker is gone");
            self.ui.running = None;
            self.ui.status = StatusBar::error("Task runner stopped");
            self.ui
                .notifications
                .error("Task runner", "The background worker stopped; restart the toolbox.");
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::ConfirmationRequired {
                id,
                task,
                prompt,
                check,
            } => self.ask_for_prerequisite(id, task, prompt, &check),
            Action::TaskFinished(report) => self.finish_task(&report),
            Action::TaskDeclined(id) => {
                let label = self.task_label(&id);
                self.ui.running = None;
                self.ui
                    .activity
                    .record(NotificationLevel::Info, format!("{label}: cancelled"));
                self.ui.status = StatusBar::info(format!("{label} cancelled"));
            }
            Action::TaskAborted { id, error } => {
                let label = self.task_label(&id);
                self.ui.running = None;
                self.ui
                    .activity
                    .record(NotificationLevel::Error, format!("{label}: {error}"));
                self.ui.status = StatusBar::error(format!("{label} aborted"));
                self.ui.notifications.error(label, error);
            }
        }
    }

    fn ask_for_prerequisite(
        &mut self,
        id: TaskId,
        task: Task,
        prompt: String,
        check: &CommandResult,
    ) {
        self.ui.activity.record(
            NotificationLevel::Warn,
            format!(
                "{}: prerequisite check failed ({})",
                task.label,
                check.error_summary().unwrap_or("no details")
            ),
        );
        self.ui.status = StatusBar::warning("Prerequisite missing");
        self.ui.modal = Some(PendingConfirmation {
            dialog: ConfirmDialog::new(task.label.clone(), prompt),
            id,
            task,
        });
    }

    fn finish_task(&mut self, report: &TaskReport) {
        self.ui.running = None;

        if let Some(prerequisite) = &report.prerequisite
            && prerequisite.result.succeeded
        {
            self.ui.activity.record(
                NotificationLevel::Info,
                format!("{}: prerequisite installed", report.label),
            );
        }

        for failure in report.failures() {
            let summary = failure.result.error_summary().unwrap_or("unknown error");
            self.ui.activity.record(
                NotificationLevel::Error,
                format!("{}: `{}` failed: {summary}", report.label, failure.step),
            );
        }

        if report.succeeded() {
            self.ui.activity.record(
                NotificationLevel::Success,
                format!("{}: completed", report.label),
            );
            self.ui.status = StatusBar::success(format!("{} completed", report.label));
            self.ui
                .notifications
                .success(report.label.as_str(), "Completed successfully.");
        } else {
            let message = report
                .failures()
                .find_map(|failure| failure.result.error_summary())
                .unwrap_or("The task failed.")
                .to_string();
            self.ui.status = StatusBar::error(format!("{} failed", report.label));
            self.ui.notifications.error(report.label.as_str(), message);
        }
    }

    fn task_label(&self, id: &TaskId) -> String {
        self.tasks
            .get(id)
            .map_or_else(|| id.to_string(), |task| task.label.clone())
    }

    fn focus_context(&self) -> FocusContext {
        if self.ui.modal.is_some() {
            return FocusContext::Confirmation;
        }
        match self.ui.screen.focus() {
            MenuFocus::Sidebar => FocusContext::Sidebar,
            MenuFocus::Content => FocusContext::Content,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let running_label = self
            .ui
            .running
            .as_ref()
            .and_then(|id| self.tasks.get(id))
            .map(|task| task.label.as_str());
        let screen = MenuScreen::new(
            &self.ui.sidebar,
            self.ui.router.container().content(),
            &self.ui.activity,
        )
        .running(running_label);
        frame.render_stateful_widget(screen, body_area, &mut self.ui.screen);

        frame.render_widget(&self.ui.status, status_area);

        let keys = if self.ui.modal.is_some() {
            &self.confirm_keys
        } else {
            &self.menu_keys
        };
        frame.render_widget(
            FooterBar::new(keys)
                .focus_context(self.focus_context())
                .right_info(Some(VERSION_INFO)),
            footer_area,
        );

        if let Some(pending) = &self.ui.modal {
            frame.render_widget(&pending.dialog, body_area);
        }

        if let Some(notification) = self.ui.notifications.current() {
            frame.render_widget(NotificationPopup::new(notification), area);
        }
    }
}
