//! UI helper tests plus a TestBackend render of the System panel.

use dashtop::app::App;
use dashtop::panels::Panel;
use dashtop::types::ServiceUnit;
use dashtop::ui::util::{human, truncate_middle};
use ratatui::{backend::TestBackend, Terminal};
use url::Url;

#[test]
fn human_picks_the_right_unit() {
    assert_eq!(human(512), "512B");
    assert_eq!(human(1536), "1.5KB");
    assert_eq!(human(5 * 1024 * 1024), "5.0MB");
    assert_eq!(human(2 * 1024 * 1024 * 1024), "2.0GB");
    assert_eq!(human(3 * 1024 * 1024 * 1024 * 1024), "3.00TB");
}

#[test]
fn truncate_middle_keeps_both_ends() {
    assert_eq!(truncate_middle("abcdefghij", 20), "abcdefghij");
    assert_eq!(truncate_middle("abcdefghij", 7), "ab...ij");
    assert_eq!(truncate_middle("abcdefghij", 3), "...");
}

#[test]
fn truncate_middle_is_safe_on_multibyte_names() {
    // remote file and image names are arbitrary UTF-8; the split must land
    // on char boundaries, not raw byte offsets
    let path = "/héééééééééééééééééé.txt";
    let t = truncate_middle(path, 10);
    assert_eq!(t, "/hé....txt");
    assert_eq!(t.chars().count(), 10);

    assert_eq!(truncate_middle("ééééé", 5), "ééééé");
    assert_eq!(truncate_middle("日本語のファイル名.txt", 8), "日本...txt");
}

fn service(name: &str) -> ServiceUnit {
    serde_json::from_value(serde_json::json!({
        "name": name, "load": "loaded", "active": "active", "sub": "running"
    }))
    .unwrap()
}

fn rendered(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let width = buf.area.width as usize;
    buf.content
        .iter()
        .map(|c| c.symbol().to_string())
        .collect::<Vec<_>>()
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn system_panel_draws_at_most_ten_services() {
    let mut a = App::new(Url::parse("http://pi.local:8000").unwrap());
    a.nav.activate(Panel::System);
    a.services = (0..25)
        .map(|i| service(&format!("unit-{i:02}.service")))
        .collect();

    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| dashtop::ui::draw(f, &a)).unwrap();

    let text = rendered(&terminal);
    assert!(text.contains("showing 10 of 25"), "{text}");
    assert!(text.contains("unit-09.service"), "{text}");
    assert!(
        !text.contains("unit-10.service"),
        "services beyond the cap must not be drawn\n{text}"
    );
}
