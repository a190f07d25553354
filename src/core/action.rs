//! Actions that modules can return to communicate with the app

/// Actions returned by modules and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Fetch the dashboard counters
    RefreshStats,

    /// Validate and submit the quick action form
    SubmitQuickAction,

    /// Move focus to the next/previous element
    FocusNext,
    FocusPrev,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open command bar
    OpenCommand,

    /// Toggle help popup
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
