//! App state and main loop: input handling, stream events, panel loads,
//! confirmations, and drawing.

use std::{
    collections::VecDeque,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::time::sleep;
use url::Url;

use crate::api::{ApiClient, ApiError, ContainerAction, DEFAULT_PROCESS_LIMIT};
use crate::dispatch::{AdminAction, Dispatcher};
use crate::files::FileBrowser;
use crate::history::{Sample, SeriesBuffer};
use crate::panels::{LoadRequest, Nav, Panel};
use crate::types::{
    Container, FileEntry, ImageInfo, MetricSnapshot, ProcessEntry, ServiceUnit, StatsSummary,
    SystemIdentity,
};
use crate::ws::{spawn_stream, ws_url, ConnectionState, StreamEvent};

pub const STATS_INTERVAL: Duration = Duration::from_secs(60);
pub const STATS_WINDOW_HOURS: u32 = 1;
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Work queued by input handlers and drained by the loop body, one command
/// at a time, each awaited to completion.
#[derive(Debug, PartialEq)]
pub enum Command {
    Load(LoadRequest),
    Execute(AdminAction),
    OpenFile(String),
    SaveFile,
}

/// Data fetched for a panel load, ready to apply to the view state.
#[derive(Debug)]
pub enum LoadData {
    Processes(Vec<ProcessEntry>),
    Containers(Vec<Container>),
    Images(Vec<ImageInfo>),
    Files(Vec<FileEntry>),
    Services(Vec<ServiceUnit>),
}

impl LoadData {
    fn request(&self) -> LoadRequest {
        match self {
            LoadData::Processes(_) => LoadRequest::Processes,
            LoadData::Containers(_) => LoadRequest::Containers,
            LoadData::Images(_) => LoadRequest::Images,
            LoadData::Files(_) => LoadRequest::Files,
            LoadData::Services(_) => LoadRequest::Services,
        }
    }
}

/// Which list has focus on the containers panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFocus {
    Containers,
    Images,
}

pub struct App {
    api: ApiClient,

    // Shared state machines
    pub nav: Nav,
    pub dispatcher: Dispatcher,
    pub files: FileBrowser,

    // Stream-fed monitoring state
    pub conn_state: ConnectionState,
    pub latest: Option<MetricSnapshot>,
    pub history: SeriesBuffer,

    // Panel view state
    pub identity: Option<SystemIdentity>,
    pub stats: Option<StatsSummary>,
    pub processes: Vec<ProcessEntry>,
    pub proc_selected: usize,
    pub containers: Vec<Container>,
    pub container_selected: usize,
    pub images: Vec<ImageInfo>,
    pub image_selected: usize,
    pub container_focus: ContainerFocus,
    pub services: Vec<ServiceUnit>,

    // One-shot operator notice (API outcome), expires after NOTICE_TTL
    notice: Option<(String, Instant)>,

    queue: VecDeque<Command>,
    last_stats_poll: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(base: Url) -> Self {
        Self {
            api: ApiClient::new(base),
            nav: Nav::new(),
            dispatcher: Dispatcher::new(),
            files: FileBrowser::new(),
            conn_state: ConnectionState::Connecting,
            latest: None,
            history: SeriesBuffer::default(),
            identity: None,
            stats: None,
            processes: Vec::new(),
            proc_selected: 0,
            containers: Vec::new(),
            container_selected: 0,
            images: Vec::new(),
            image_selected: 0,
            container_focus: ContainerFocus::Containers,
            services: Vec::new(),
            notice: None,
            queue: VecDeque::new(),
            // trigger the first stats poll immediately
            last_stats_poll: Instant::now()
                .checked_sub(STATS_INTERVAL)
                .unwrap_or_else(Instant::now),
            should_quit: false,
        }
    }

    /// Commands staged by input handlers, in execution order.
    pub fn queued(&self) -> &VecDeque<Command> {
        &self.queue
    }

    pub fn active_notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|(_, at)| at.elapsed() < NOTICE_TTL)
            .map(|(msg, _)| msg.as_str())
    }

    fn notify(&mut self, msg: String) {
        self.notice = Some((msg, Instant::now()));
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let stream = spawn_stream(ws_url(self.api.base()), tx);

        // Identity is static; fetch once, fall back to the URL host on failure
        match self.api.identity().await {
            Ok(id) => self.identity = Some(id),
            Err(e) => tracing::warn!(error = %e, "identity fetch failed"),
        }

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal, rx).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        stream.abort();

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut rx: mpsc::UnboundedReceiver<StreamEvent>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    self.handle_key(k);
                }
            }
            if self.should_quit {
                break;
            }

            // Stream events
            while let Ok(ev) = rx.try_recv() {
                self.on_stream_event(ev);
            }

            // Stats poller, independent of the stream
            if self.last_stats_poll.elapsed() >= STATS_INTERVAL {
                self.refresh_stats().await;
                self.last_stats_poll = Instant::now();
            }

            // Queued loads and confirmed actions
            while let Some(cmd) = self.queue.pop_front() {
                self.run_command(cmd).await;
            }

            terminal.draw(|f| crate::ui::draw(f, self))?;

            sleep(Duration::from_millis(100)).await;
        }
        Ok(())
    }

    // --- input ---

    pub fn handle_key(&mut self, k: KeyEvent) {
        // Confirmation modal swallows all input
        if self.dispatcher.pending().is_some() {
            match k.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    if let Some(action) = self.dispatcher.confirm() {
                        self.queue.push_back(Command::Execute(action));
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.dispatcher.cancel();
                }
                _ => {}
            }
            return;
        }

        // Editor overlay
        if self.files.is_editing() {
            match k.code {
                KeyCode::Char('s') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.queue.push_back(Command::SaveFile);
                }
                KeyCode::Esc => self.files.close(),
                KeyCode::Enter => self.files.insert_char('\n'),
                KeyCode::Backspace => self.files.backspace(),
                KeyCode::Left => self.files.cursor_left(),
                KeyCode::Right => self.files.cursor_right(),
                KeyCode::Char(c) => self.files.insert_char(c),
                _ => {}
            }
            return;
        }

        match k.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab => {
                let loads = self.nav.next();
                self.queue_loads(loads);
            }
            KeyCode::BackTab => {
                let loads = self.nav.prev();
                self.queue_loads(loads);
            }
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                    let loads = self.nav.activate(panel);
                    self.queue_loads(loads);
                }
            }
            KeyCode::Char('g') => {
                // manual refresh of the active panel
                self.queue_loads(Nav::loads_for(self.nav.active()));
            }
            _ => self.handle_panel_key(k),
        }
    }

    fn handle_panel_key(&mut self, k: KeyEvent) {
        match self.nav.active() {
            Panel::Monitoring => {}
            Panel::Processes => match k.code {
                KeyCode::Up => self.proc_selected = self.proc_selected.saturating_sub(1),
                KeyCode::Down => {
                    if self.proc_selected + 1 < self.processes.len() {
                        self.proc_selected += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Char('K') => {
                    if let Some(p) = self.processes.get(self.proc_selected) {
                        self.request_action(AdminAction::KillProcess {
                            pid: p.pid,
                            name: p.name.clone(),
                        });
                    }
                }
                _ => {}
            },
            Panel::Containers => self.handle_containers_key(k),
            Panel::Files => match k.code {
                KeyCode::Up => self.files.select_up(),
                KeyCode::Down => self.files.select_down(),
                KeyCode::Enter => {
                    if let Some(entry) = self.files.selected_entry().cloned() {
                        if entry.is_dir {
                            self.files.enter_dir(&entry.path);
                            self.queue.push_back(Command::Load(LoadRequest::Files));
                        } else {
                            self.queue.push_back(Command::OpenFile(entry.path));
                        }
                    }
                }
                KeyCode::Backspace => {
                    if self.files.up() {
                        self.queue.push_back(Command::Load(LoadRequest::Files));
                    }
                }
                _ => {}
            },
            Panel::System => match k.code {
                KeyCode::Char('R') => self.request_action(AdminAction::Reboot),
                KeyCode::Char('P') => self.request_action(AdminAction::Shutdown),
                _ => {}
            },
        }
    }

    fn handle_containers_key(&mut self, k: KeyEvent) {
        match k.code {
            KeyCode::Char('i') => {
                self.container_focus = match self.container_focus {
                    ContainerFocus::Containers => ContainerFocus::Images,
                    ContainerFocus::Images => ContainerFocus::Containers,
                };
                return;
            }
            KeyCode::Up => {
                match self.container_focus {
                    ContainerFocus::Containers => {
                        self.container_selected = self.container_selected.saturating_sub(1)
                    }
                    ContainerFocus::Images => {
                        self.image_selected = self.image_selected.saturating_sub(1)
                    }
                }
                return;
            }
            KeyCode::Down => {
                match self.container_focus {
                    ContainerFocus::Containers => {
                        if self.container_selected + 1 < self.containers.len() {
                            self.container_selected += 1;
                        }
                    }
                    ContainerFocus::Images => {
                        if self.image_selected + 1 < self.images.len() {
                            self.image_selected += 1;
                        }
                    }
                }
                return;
            }
            _ => {}
        }

        match self.container_focus {
            ContainerFocus::Containers => {
                let Some(c) = self.containers.get(self.container_selected).cloned() else {
                    return;
                };
                match k.code {
                    KeyCode::Char('s') => self.request_action(AdminAction::StartContainer {
                        id: c.id,
                        name: c.name,
                    }),
                    KeyCode::Char('x') => self.request_action(AdminAction::StopContainer {
                        id: c.id,
                        name: c.name,
                    }),
                    KeyCode::Char('r') => self.request_action(AdminAction::RestartContainer {
                        id: c.id,
                        name: c.name,
                    }),
                    KeyCode::Char('d') => self.request_action(AdminAction::RemoveContainer {
                        running: c.is_running(),
                        id: c.id,
                        name: c.name,
                    }),
                    _ => {}
                }
            }
            ContainerFocus::Images => {
                let Some(img) = self.images.get(self.image_selected).cloned() else {
                    return;
                };
                if let KeyCode::Char('d') = k.code {
                    self.request_action(AdminAction::RemoveImage {
                        id: img.id,
                        repository: img.repository,
                    });
                }
            }
        }
    }

    fn request_action(&mut self, action: AdminAction) {
        if let Some(displaced) = self.dispatcher.request(action) {
            tracing::info!(?displaced, "pending confirmation replaced");
        }
    }

    fn queue_loads(&mut self, loads: Vec<LoadRequest>) {
        for l in loads {
            self.queue.push_back(Command::Load(l));
        }
    }

    // --- stream ---

    pub fn on_stream_event(&mut self, ev: StreamEvent) {
        match ev {
            StreamEvent::State(s) => self.conn_state = s,
            StreamEvent::Snapshot(m) => {
                self.history.push(Sample::from_snapshot(&m, Sample::now_label()));
                self.latest = Some(m);
            }
        }
    }

    // --- commands ---

    async fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::Load(req) => self.run_load(req).await,
            Command::Execute(action) => self.execute(action).await,
            Command::OpenFile(path) => match self.api.read_file(&path).await {
                Ok(fc) => {
                    if self.nav.active() == Panel::Files {
                        self.files.open(fc.path, fc.content);
                    }
                }
                Err(e) => self.notify_error("open", e),
            },
            Command::SaveFile => {
                let Some((path, buf)) = self.files.save_target() else {
                    return;
                };
                let (path, buf) = (path.to_string(), buf.to_string());
                match self.api.write_file(&path, &buf).await {
                    // saving leaves the editor open and the buffer untouched
                    Ok(()) => self.notify(format!("Saved {path}")),
                    Err(e) => self.notify_error("save", e),
                }
            }
        }
    }

    /// Execute a panel load and hand the result to `apply_load`.
    async fn run_load(&mut self, req: LoadRequest) {
        let fetched = match req {
            LoadRequest::Processes => self
                .api
                .processes(DEFAULT_PROCESS_LIMIT)
                .await
                .map(LoadData::Processes),
            LoadRequest::Containers => self.api.containers().await.map(LoadData::Containers),
            LoadRequest::Images => self.api.images().await.map(LoadData::Images),
            LoadRequest::Files => {
                let path = self.files.current_path.clone();
                self.api.list_dir(&path).await.map(LoadData::Files)
            }
            LoadRequest::Services => self.api.services().await.map(LoadData::Services),
        };
        match fetched {
            Ok(data) => self.apply_load(data),
            Err(e) => {
                let context = match req {
                    LoadRequest::Processes => "processes",
                    LoadRequest::Containers => "containers",
                    LoadRequest::Images => "images",
                    LoadRequest::Files => "files",
                    LoadRequest::Services => "services",
                };
                self.notify_error(context, e);
            }
        }
    }

    /// Apply fetched panel data. The result is discarded if the owning panel
    /// is no longer active by the time the response lands.
    pub fn apply_load(&mut self, data: LoadData) {
        if self.nav.active() != data.request().owning_panel() {
            tracing::debug!(request = ?data.request(), "panel changed, load discarded");
            return;
        }
        match data {
            LoadData::Processes(list) => {
                self.proc_selected = self.proc_selected.min(list.len().saturating_sub(1));
                self.processes = list;
            }
            LoadData::Containers(list) => {
                self.container_selected = self.container_selected.min(list.len().saturating_sub(1));
                self.containers = list;
            }
            LoadData::Images(list) => {
                self.image_selected = self.image_selected.min(list.len().saturating_sub(1));
                self.images = list;
            }
            LoadData::Files(entries) => self.files.set_entries(entries),
            LoadData::Services(list) => self.services = list,
        }
    }

    /// One HTTP call per confirmed action; on success, reload the owning
    /// panel. Power actions have none — the host goes away.
    async fn execute(&mut self, action: AdminAction) {
        let result = match &action {
            AdminAction::KillProcess { pid, .. } => self.api.kill_process(*pid).await,
            AdminAction::StartContainer { id, .. } => {
                self.api.container_action(id, ContainerAction::Start).await
            }
            AdminAction::StopContainer { id, .. } => {
                self.api.container_action(id, ContainerAction::Stop).await
            }
            AdminAction::RestartContainer { id, .. } => {
                self.api.container_action(id, ContainerAction::Restart).await
            }
            AdminAction::RemoveContainer { id, .. } => {
                self.api.remove_container(id, action.force()).await
            }
            AdminAction::RemoveImage { id, .. } => self.api.remove_image(id).await,
            AdminAction::Reboot => self.api.reboot().await,
            AdminAction::Shutdown => self.api.shutdown().await,
        };
        match result {
            Ok(()) => {
                tracing::info!(?action, "action executed");
                self.notify(action.success_notice());
                if let Some(panel) = action.owning_panel() {
                    self.queue_loads(Nav::loads_for(panel));
                }
            }
            Err(e) => self.notify_error("action", e),
        }
    }

    async fn refresh_stats(&mut self) {
        match self.api.stats(STATS_WINDOW_HOURS).await {
            Ok(s) => self.stats = Some(s),
            // logged and retried at the next tick, no backoff
            Err(e) => tracing::warn!(error = %e, "stats poll failed"),
        }
    }

    fn notify_error(&mut self, context: &str, e: ApiError) {
        tracing::warn!(context, error = %e, "api call failed");
        self.notify(format!("{context}: {e}"));
    }
}
