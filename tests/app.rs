//! Controller-level tests: keyboard input through confirmation to the
//! command queue, and stream-event application. No network involved —
//! nothing here drains the queue.

use crossterm::event::{KeyCode, KeyEvent};
use dashtop::app::{App, Command, LoadData};
use dashtop::dispatch::AdminAction;
use dashtop::panels::{LoadRequest, Panel};
use dashtop::ws::{ConnectionState, StreamEvent};
use url::Url;

fn app() -> App {
    App::new(Url::parse("http://pi.local:8000").unwrap())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn proc(pid: u32, name: &str) -> dashtop::types::ProcessEntry {
    serde_json::from_value(serde_json::json!({
        "pid": pid, "name": name, "username": "pi",
        "cpu_percent": 1.0, "memory_percent": 2.0, "status": "running"
    }))
    .unwrap()
}

#[test]
fn switching_panels_queues_their_loads() {
    let mut a = app();
    a.handle_key(key(KeyCode::Char('2')));
    assert_eq!(a.queued().front(), Some(&Command::Load(LoadRequest::Processes)));

    a.handle_key(key(KeyCode::Char('3')));
    let cmds: Vec<&Command> = a.queued().iter().collect();
    assert_eq!(
        cmds,
        vec![
            &Command::Load(LoadRequest::Processes),
            &Command::Load(LoadRequest::Containers),
            &Command::Load(LoadRequest::Images),
        ]
    );
}

#[test]
fn pressing_the_active_panel_key_again_queues_nothing() {
    let mut a = app();
    a.handle_key(key(KeyCode::Char('2')));
    let before = a.queued().len();
    a.handle_key(key(KeyCode::Char('2')));
    assert_eq!(a.queued().len(), before);
}

#[test]
fn kill_flow_requires_confirmation_before_executing() {
    let mut a = app();
    a.nav.activate(Panel::Processes);
    a.processes = vec![proc(1234, "foo")];
    a.proc_selected = 0;

    a.handle_key(key(KeyCode::Char('k')));
    assert!(a.dispatcher.pending().is_some());
    assert!(
        a.queued().iter().all(|c| !matches!(c, Command::Execute(_))),
        "nothing executes before the confirm step"
    );

    a.handle_key(key(KeyCode::Char('y')));
    assert!(a.dispatcher.pending().is_none());
    assert!(a.queued().iter().any(|c| matches!(
        c,
        Command::Execute(AdminAction::KillProcess { pid: 1234, .. })
    )));
}

#[test]
fn cancel_clears_the_pending_action_and_queues_nothing() {
    let mut a = app();
    a.nav.activate(Panel::System);
    a.handle_key(key(KeyCode::Char('R')));
    assert_eq!(a.dispatcher.pending(), Some(&AdminAction::Reboot));

    a.handle_key(key(KeyCode::Char('n')));
    assert!(a.dispatcher.pending().is_none());
    assert!(a.queued().iter().all(|c| !matches!(c, Command::Execute(_))));
}

#[test]
fn confirmation_modal_swallows_panel_keys() {
    let mut a = app();
    a.nav.activate(Panel::System);
    a.handle_key(key(KeyCode::Char('R')));
    // '1' would normally switch panels; while confirming it must not
    a.handle_key(key(KeyCode::Char('1')));
    assert_eq!(a.nav.active(), Panel::System);
    assert!(a.dispatcher.pending().is_some());
}

#[test]
fn load_results_are_discarded_after_the_panel_changed() {
    let mut a = app();
    a.nav.activate(Panel::Processes);
    // the response lands after the operator has already moved on
    a.nav.activate(Panel::Monitoring);
    a.apply_load(LoadData::Processes(vec![proc(1, "late")]));
    assert!(a.processes.is_empty(), "stale load must be dropped");

    a.nav.activate(Panel::Processes);
    a.apply_load(LoadData::Processes(vec![proc(2, "fresh")]));
    assert_eq!(a.processes.len(), 1);

    // images belong to the containers panel, so they apply while it is active
    a.nav.activate(Panel::Containers);
    let img = serde_json::from_value(serde_json::json!({
        "id": "sha256:aa", "repository": "nginx", "tag": "latest",
        "size": "187MB", "created": "2 weeks ago"
    }))
    .unwrap();
    a.apply_load(LoadData::Images(vec![img]));
    assert_eq!(a.images.len(), 1);
}

#[test]
fn stream_events_update_connection_state_and_history() {
    let mut a = app();
    assert_eq!(a.conn_state, ConnectionState::Connecting);
    a.on_stream_event(StreamEvent::State(ConnectionState::Connected));
    assert_eq!(a.conn_state, ConnectionState::Connected);

    let m = serde_json::from_value(serde_json::json!({
        "cpu_percent": 10.0, "ram_percent": 20.0,
        "ram_used_gb": 1.0, "ram_total_gb": 4.0,
        "disk_percent": 30.0, "disk_used_gb": 3.0, "disk_total_gb": 10.0,
        "cpu_temp": 45.0
    }))
    .unwrap();
    a.on_stream_event(StreamEvent::Snapshot(m));
    assert_eq!(a.history.len(), 1);
    assert!(a.latest.is_some());

    a.on_stream_event(StreamEvent::State(ConnectionState::Disconnected));
    assert_eq!(a.conn_state, ConnectionState::Disconnected);
    // history survives a drop; only the indicator changes
    assert_eq!(a.history.len(), 1);
}

#[test]
fn editor_keys_are_routed_to_the_buffer_not_the_panels() {
    let mut a = app();
    a.nav.activate(Panel::Files);
    a.files.open("/tmp/x".into(), "hi".into());

    a.handle_key(key(KeyCode::Char('q'))); // must type, not quit
    assert_eq!(a.files.editor_buffer(), Some("hiq"));

    a.handle_key(key(KeyCode::Esc));
    assert!(!a.files.is_editing());
}
