//! Administrative panels and the single-active-panel navigation machine.

/// A self-contained administrative view with its own load/render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Monitoring,
    Processes,
    Containers,
    Files,
    System,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Monitoring,
        Panel::Processes,
        Panel::Containers,
        Panel::Files,
        Panel::System,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Monitoring => "Monitoring",
            Panel::Processes => "Processes",
            Panel::Containers => "Containers",
            Panel::Files => "Files",
            Panel::System => "System",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Panel> {
        Self::ALL.get(i).copied()
    }
}

/// A panel refresh to run against the REST client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    Processes,
    Containers,
    Images,
    Files,
    Services,
}

impl LoadRequest {
    /// Which panel the loaded data belongs to. A completed load is discarded
    /// if this panel is no longer active when the response lands.
    pub fn owning_panel(self) -> Panel {
        match self {
            LoadRequest::Processes => Panel::Processes,
            LoadRequest::Containers | LoadRequest::Images => Panel::Containers,
            LoadRequest::Files => Panel::Files,
            LoadRequest::Services => Panel::System,
        }
    }
}

/// Tracks exactly one active panel. Activation yields the loads to issue;
/// re-activating the already-active panel yields none (no redundant reload —
/// the display still follows the active tag, and `g` forces a refresh).
#[derive(Debug)]
pub struct Nav {
    active: Panel,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            active: Panel::Monitoring,
        }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn activate(&mut self, panel: Panel) -> Vec<LoadRequest> {
        if panel == self.active {
            return Vec::new();
        }
        self.active = panel;
        Self::loads_for(panel)
    }

    pub fn next(&mut self) -> Vec<LoadRequest> {
        let i = (self.active.index() + 1) % Panel::ALL.len();
        self.activate(Panel::ALL[i])
    }

    pub fn prev(&mut self) -> Vec<LoadRequest> {
        let i = (self.active.index() + Panel::ALL.len() - 1) % Panel::ALL.len();
        self.activate(Panel::ALL[i])
    }

    /// The loads a panel issues on activation. Monitoring is stream-driven;
    /// Containers refreshes containers and images independently.
    pub fn loads_for(panel: Panel) -> Vec<LoadRequest> {
        match panel {
            Panel::Monitoring => Vec::new(),
            Panel::Processes => vec![LoadRequest::Processes],
            Panel::Containers => vec![LoadRequest::Containers, LoadRequest::Images],
            Panel::Files => vec![LoadRequest::Files],
            Panel::System => vec![LoadRequest::Services],
        }
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}
