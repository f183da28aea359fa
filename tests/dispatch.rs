//! Command dispatcher tests: confirmation workflow, replace policy,
//! prompts, and the force flag for running containers.

use dashtop::dispatch::{AdminAction, Dispatcher};
use dashtop::panels::Panel;

fn kill_foo() -> AdminAction {
    AdminAction::KillProcess {
        pid: 1234,
        name: "foo".into(),
    }
}

#[test]
fn confirm_hands_out_the_action_exactly_once() {
    let mut d = Dispatcher::new();
    assert!(d.request(kill_foo()).is_none());
    assert_eq!(d.pending(), Some(&kill_foo()));

    let action = d.confirm().expect("pending action taken");
    assert_eq!(action, kill_foo());
    assert!(d.pending().is_none());
    assert!(d.confirm().is_none(), "confirm with nothing pending is a no-op");
}

#[test]
fn cancel_clears_without_handing_out_work() {
    let mut d = Dispatcher::new();
    d.request(kill_foo());
    d.cancel();
    assert!(d.pending().is_none());
    assert!(d.confirm().is_none());
}

#[test]
fn second_request_replaces_the_first_and_returns_it() {
    let mut d = Dispatcher::new();
    d.request(kill_foo());
    let displaced = d.request(AdminAction::Reboot);
    assert_eq!(displaced, Some(kill_foo()));
    assert_eq!(d.pending(), Some(&AdminAction::Reboot));
}

#[test]
fn kill_prompt_names_the_target() {
    let p = kill_foo().prompt();
    assert!(p.contains("foo") && p.contains("1234"), "{p}");
}

#[test]
fn removing_a_running_container_forces_and_warns() {
    let running = AdminAction::RemoveContainer {
        id: "abc123".into(),
        name: "web".into(),
        running: true,
    };
    let stopped = AdminAction::RemoveContainer {
        id: "abc123".into(),
        name: "web".into(),
        running: false,
    };
    assert!(running.force());
    assert!(!stopped.force());
    assert!(running.prompt().contains("RUNNING"));
    assert!(!stopped.prompt().contains("RUNNING"));
}

#[test]
fn owning_panel_routes_reloads() {
    assert_eq!(kill_foo().owning_panel(), Some(Panel::Processes));
    assert_eq!(
        AdminAction::RemoveImage {
            id: "i".into(),
            repository: "nginx".into()
        }
        .owning_panel(),
        Some(Panel::Containers)
    );
    // power actions leave the host unreachable; nothing to reload
    assert_eq!(AdminAction::Reboot.owning_panel(), None);
    assert_eq!(AdminAction::Shutdown.owning_panel(), None);
}
