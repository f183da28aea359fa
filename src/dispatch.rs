//! Confirmation gate for every mutating administrative action.
//!
//! Flow: request -> confirm -> execute -> reload owning panel. Nothing
//! destructive runs without an explicit confirm step.

use crate::panels::Panel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    KillProcess { pid: u32, name: String },
    StartContainer { id: String, name: String },
    StopContainer { id: String, name: String },
    RestartContainer { id: String, name: String },
    RemoveContainer { id: String, name: String, running: bool },
    RemoveImage { id: String, repository: String },
    Reboot,
    Shutdown,
}

impl AdminAction {
    /// Operator-facing confirmation prompt. Removing a running container
    /// announces the force-removal up front.
    pub fn prompt(&self) -> String {
        match self {
            AdminAction::KillProcess { pid, name } => {
                format!("Kill process {name} (pid {pid})?")
            }
            AdminAction::StartContainer { name, .. } => {
                format!("Start container {name}?")
            }
            AdminAction::StopContainer { name, .. } => {
                format!("Stop container {name}?")
            }
            AdminAction::RestartContainer { name, .. } => {
                format!("Restart container {name}?")
            }
            AdminAction::RemoveContainer { name, running, .. } => {
                if *running {
                    format!("Container {name} is RUNNING and will be force-removed. Continue?")
                } else {
                    format!("Remove stopped container {name}?")
                }
            }
            AdminAction::RemoveImage { repository, .. } => {
                format!("Delete image {repository}?")
            }
            AdminAction::Reboot => "Reboot the host? It will be unreachable until it comes back.".into(),
            AdminAction::Shutdown => "Power off the host? It will stay down until powered on manually.".into(),
        }
    }

    /// The panel to reload after a successful execution. Power actions have
    /// none: the host goes away.
    pub fn owning_panel(&self) -> Option<Panel> {
        match self {
            AdminAction::KillProcess { .. } => Some(Panel::Processes),
            AdminAction::StartContainer { .. }
            | AdminAction::StopContainer { .. }
            | AdminAction::RestartContainer { .. }
            | AdminAction::RemoveContainer { .. }
            | AdminAction::RemoveImage { .. } => Some(Panel::Containers),
            AdminAction::Reboot | AdminAction::Shutdown => None,
        }
    }

    /// Whether the DELETE must carry the force flag.
    pub fn force(&self) -> bool {
        matches!(self, AdminAction::RemoveContainer { running: true, .. })
    }

    /// Footer notice after the call succeeded.
    pub fn success_notice(&self) -> String {
        match self {
            AdminAction::KillProcess { pid, name } => format!("Killed {name} (pid {pid})"),
            AdminAction::StartContainer { name, .. } => format!("Started {name}"),
            AdminAction::StopContainer { name, .. } => format!("Stopped {name}"),
            AdminAction::RestartContainer { name, .. } => format!("Restarted {name}"),
            AdminAction::RemoveContainer { name, .. } => format!("Removed {name}"),
            AdminAction::RemoveImage { repository, .. } => format!("Deleted image {repository}"),
            AdminAction::Reboot => "Reboot requested".into(),
            AdminAction::Shutdown => "Shutdown requested".into(),
        }
    }
}

/// Holds at most one pending confirmation at a time.
#[derive(Debug, Default)]
pub struct Dispatcher {
    pending: Option<AdminAction>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&AdminAction> {
        self.pending.as_ref()
    }

    /// Stage an action for confirmation. A second request while one is
    /// pending replaces it; the displaced action is returned so the caller
    /// can log the discard instead of losing it silently.
    pub fn request(&mut self, action: AdminAction) -> Option<AdminAction> {
        self.pending.replace(action)
    }

    /// Take the pending action for execution. No-op when nothing is pending.
    /// Pending is cleared regardless of how the execution turns out.
    pub fn confirm(&mut self) -> Option<AdminAction> {
        self.pending.take()
    }

    /// Drop the pending action without any network call.
    pub fn cancel(&mut self) -> Option<AdminAction> {
        self.pending.take()
    }
}
