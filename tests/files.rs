//! File browser tests: path navigation and editor lifecycle.

use dashtop::files::{parent_path, FileBrowser};

#[test]
fn parent_path_strips_one_segment() {
    assert_eq!(parent_path("/var/log/syslog"), "/var/log");
    assert_eq!(parent_path("/var/log/"), "/var");
    assert_eq!(parent_path("/var"), "/");
}

#[test]
fn parent_path_is_stable_at_root() {
    assert_eq!(parent_path("/"), "/");
    assert_eq!(parent_path(""), "/");
}

#[test]
fn up_is_a_noop_at_root() {
    let mut fb = FileBrowser::new();
    assert_eq!(fb.current_path, "/");
    assert!(!fb.up(), "up at root must not trigger a re-list");
    assert_eq!(fb.current_path, "/");

    fb.enter_dir("/etc/ssh");
    assert!(fb.up());
    assert_eq!(fb.current_path, "/etc");
}

#[test]
fn open_populates_editor_and_close_discards_unconditionally() {
    let mut fb = FileBrowser::new();
    assert!(!fb.is_editing());

    fb.open("/etc/motd".into(), "hello".into());
    assert!(fb.is_editing());
    assert_eq!(fb.editing_file(), Some("/etc/motd"));
    assert_eq!(fb.editor_buffer(), Some("hello"));

    fb.insert_char('!');
    // close drops unsaved edits, no confirmation
    fb.close();
    assert!(!fb.is_editing());
    assert_eq!(fb.editor_buffer(), None);
    assert!(fb.save_target().is_none());
}

#[test]
fn save_target_pairs_path_with_current_buffer() {
    let mut fb = FileBrowser::new();
    fb.open("/tmp/note".into(), "abc".into());
    fb.insert_char('d');
    let (path, buf) = fb.save_target().unwrap();
    assert_eq!(path, "/tmp/note");
    assert_eq!(buf, "abcd");
}

#[test]
fn editor_handles_cursor_and_backspace_at_boundaries() {
    let mut fb = FileBrowser::new();
    fb.open("/tmp/note".into(), "ab".into());

    // cursor starts at the end
    fb.cursor_right();
    fb.insert_char('c');
    assert_eq!(fb.editor_buffer(), Some("abc"));

    fb.cursor_left();
    fb.cursor_left();
    fb.cursor_left();
    fb.cursor_left(); // already at 0
    fb.backspace(); // nothing before the cursor
    assert_eq!(fb.editor_buffer(), Some("abc"));

    fb.cursor_right();
    fb.backspace();
    assert_eq!(fb.editor_buffer(), Some("bc"));
}
