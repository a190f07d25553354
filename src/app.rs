use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{Action, Command, Context, NotifyLevel};
use crate::domain::dashboard::{
    DashboardStats, Messages, Notification, Page, QuickActionRequest, QuickActionResponse,
};
use crate::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use crate::modules::{Dashboard, QuickActionForm};
use crate::ui::widgets::TooltipRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Dashboard page controller state, owned by the UI thread
#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub page: Page,
    pub tooltips: TooltipRegistry,
    pub dashboard: Dashboard,
    pub form: QuickActionForm,
    pub input_mode: InputMode,
    pub command: CommandBar,
    /// Blocking notifications, shown one at a time in arrival order
    pub alerts: VecDeque<Notification>,
    pub status: Option<StatusMessage>,
    pub last_refresh: Option<DateTime<Local>>,
    pub auto_refresh: Option<Duration>,
    pub help_open: bool,
    pub should_quit: bool,
    pending_stats_refresh: bool,
    pending_quick_actions: Vec<QuickActionRequest>,
}

impl App {
    /// Page-ready initialization: build the page, attach tooltips, and queue
    /// the initial stats fetch when configured.
    pub fn new(config: &Config) -> Self {
        let messages = Messages::new(config.locale);
        let page = Page::dashboard(&messages);
        let tooltips = TooltipRegistry::init(&page);
        let settings = config.api_settings();

        Self {
            ctx: Context::new(messages, settings.base_url),
            page,
            tooltips,
            dashboard: Dashboard::new(),
            form: QuickActionForm::new(config.actions.clone()),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            alerts: VecDeque::new(),
            status: None,
            last_refresh: None,
            auto_refresh: config.stats_refresh_interval(),
            help_open: false,
            should_quit: false,
            pending_stats_refresh: config.refresh_on_start,
            pending_quick_actions: Vec::new(),
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.ctx.messages
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    // --- notifications ---

    pub fn alert(&mut self, notification: Notification) {
        info!(level = ?notification.level, text = %notification.text, "notification");
        self.alerts.push_back(notification);
    }

    pub fn current_alert(&self) -> Option<&Notification> {
        self.alerts.front()
    }

    pub fn queued_alerts(&self) -> usize {
        self.alerts.len().saturating_sub(1)
    }

    pub fn dismiss_alert(&mut self) -> Option<Notification> {
        self.alerts.pop_front()
    }

    // --- stats refresh ---

    pub fn request_stats_refresh(&mut self) {
        self.pending_stats_refresh = true;
    }

    /// Write every present field into its display element. Returns the
    /// number of elements updated.
    pub fn apply_stats(&mut self, stats: DashboardStats) -> usize {
        let updated = stats.apply_to(&mut self.page);
        debug!(updated, "dashboard stats applied");
        self.last_refresh = Some(Local::now());
        updated
    }

    // --- quick action ---

    /// Validate the form and queue the request. Each call queues its own
    /// request; repeated submissions are not merged.
    pub fn submit_quick_action(&mut self) {
        match self.form.to_request() {
            Ok(request) => {
                debug!(action = %request.action, lead_id = %request.lead_id, "quick action queued");
                self.pending_quick_actions.push(request);
            }
            Err(err) => {
                debug!(reason = %err, "quick action rejected by validation");
                let notification = Notification::validation(self.messages());
                self.alert(notification);
            }
        }
    }

    pub fn apply_quick_action_response(&mut self, response: QuickActionResponse) {
        let notification = Notification::from_response(&response, self.messages());
        if notification.is_success() {
            self.form.reset();
        } else {
            warn!(status = %response.status, mensagem = %response.mensagem, "quick action rejected by server");
        }
        self.alert(notification);
    }

    /// The request never completed or its body was unreadable. The worker
    /// has already logged the cause.
    pub fn apply_quick_action_failure(&mut self) {
        let notification = Notification::failure(self.messages());
        self.alert(notification);
    }

    pub fn apply_runtime_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::StatsReady { stats } => {
                self.apply_stats(stats);
            }
            RuntimeEvent::QuickActionCompleted { response, .. } => {
                self.apply_quick_action_response(response)
            }
            RuntimeEvent::QuickActionFailed { request, message } => {
                debug!(action = %request.action, lead_id = %request.lead_id, %message, "quick action failed");
                self.apply_quick_action_failure();
            }
        }
    }

    pub fn take_stats_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_stats_refresh)
    }

    pub fn take_quick_action_requests(&mut self) -> Vec<QuickActionRequest> {
        std::mem::take(&mut self.pending_quick_actions)
    }

    // --- command bar ---

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        self.command.last = Some(input.clone());
        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Refresh => Action::RefreshStats,
            Command::Submit => Action::SubmitQuickAction,
            Command::Action(Some(value)) => {
                if self.form.select_action(value) {
                    Action::None
                } else {
                    Action::Notify(format!("Unknown action: {}", value), NotifyLevel::Warn)
                }
            }
            Command::Action(None) => {
                let values: Vec<&str> = self
                    .form
                    .options()
                    .iter()
                    .map(|opt| opt.value.as_str())
                    .collect();
                Action::Notify(
                    format!("Usage: :action <{}>", values.join("|")),
                    NotifyLevel::Warn,
                )
            }
            Command::Lead(Some(lead_id)) => {
                self.form.set_lead_id(lead_id.clone());
                Action::None
            }
            Command::Lead(None) => Action::Notify("Usage: :lead <id>".into(), NotifyLevel::Warn),
            Command::Clear => {
                self.form.reset();
                Action::None
            }
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::RefreshStats => self.request_stats_refresh(),
            Action::SubmitQuickAction => self.submit_quick_action(),
            Action::FocusNext => self.ctx.focus_next(),
            Action::FocusPrev => self.ctx.focus_prev(),
            Action::Notify(msg, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                    NotifyLevel::Error => StatusLevel::Error,
                };
                self.set_status(msg, level);
            }
            Action::OpenCommand => self.enter_command(),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }
}

/// Exchange pending work and results with the runtime worker
pub fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        app.apply_runtime_event(event);
    }

    if app.take_stats_refresh_request() {
        if let Err(err) = runtime.send(RuntimeCommand::RefreshStats) {
            warn!(error = %err, "stats refresh not sent");
        }
    }
    for request in app.take_quick_action_requests() {
        if let Err(err) = runtime.send(RuntimeCommand::SubmitQuickAction { request }) {
            warn!(error = %err, "quick action not sent");
            app.apply_quick_action_failure();
        }
    }
}
