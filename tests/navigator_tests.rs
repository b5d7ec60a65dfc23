use anyhow::{bail, Result};
use navhistory::config::Config;
use navhistory::history::location::Location;
use navhistory::history::registry::WindowId;
use navhistory::host::{EncodedPosition, Host, Navigator, SelectionEvent, Workspace};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Host whose files and open documents are listed up front.
#[derive(Default)]
struct FakeHost {
    window: Option<WindowId>,
    open: HashSet<String>,
    on_disk: HashSet<String>,
    opened: Vec<String>,
    fail_open: bool,
}

impl Host for FakeHost {
    fn active_window(&self) -> Option<WindowId> {
        self.window
    }

    fn is_open(&self, _window: WindowId, path: &str) -> bool {
        self.open.contains(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.on_disk.contains(path)
    }

    fn open_file(&mut self, _window: WindowId, position: &EncodedPosition) -> Result<()> {
        if self.fail_open {
            bail!("host refused to open {}", position);
        }
        self.opened.push(position.to_string());
        Ok(())
    }

    fn retarget(&mut self, _window: WindowId, _old: &str, _new: &str) -> bool {
        false
    }
}

fn select(window: u64, path: &str, row: usize) -> SelectionEvent {
    SelectionEvent {
        window: WindowId(window),
        path: Some(path.to_string()),
        row,
        col: 0,
    }
}

fn host_with(files: &[&str]) -> FakeHost {
    FakeHost {
        window: Some(WindowId(1)),
        on_disk: files.iter().map(|f| f.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_selection_converted_to_one_based() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&select(1, "a.txt", 0));

    let host = host_with(&[]);
    let history = nav.history(&host).unwrap();
    assert_eq!(history.current().map(|l| (l.line, l.col)), Some((1, 1)));
}

#[test]
fn test_unnamed_buffer_ignored() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&SelectionEvent {
        window: WindowId(1),
        path: None,
        row: 10,
        col: 0,
    });
    assert!(nav.registry().is_empty());
}

#[test]
fn test_no_active_window() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&select(1, "a.txt", 0));
    nav.on_selection_modified(&select(1, "a.txt", 40));

    let mut host = FakeHost::default();
    assert!(nav.history(&host).is_none());
    assert_eq!(nav.navigate_back(&mut host), None);
    assert!(host.opened.is_empty());
}

#[test]
fn test_back_opens_encoded_position() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&SelectionEvent {
        window: WindowId(1),
        path: Some("a.txt".to_string()),
        row: 4,
        col: 2,
    });
    nav.on_selection_modified(&select(1, "b.txt", 0));

    let mut host = host_with(&["a.txt", "b.txt"]);
    assert_eq!(
        nav.navigate_back(&mut host),
        Some(Location::new("a.txt", 5, 3))
    );
    assert_eq!(host.opened, vec!["a.txt:5:3"]);

    assert_eq!(
        nav.navigate_forward(&mut host),
        Some(Location::new("b.txt", 1, 1))
    );
    assert_eq!(host.opened, vec!["a.txt:5:3", "b.txt:1:1"]);
}

#[test]
fn test_back_skips_stale_entries() {
    let mut nav = Navigator::new();
    for path in ["a.txt", "gone1.txt", "gone2.txt", "d.txt"] {
        nav.on_selection_modified(&select(1, path, 0));
    }

    let mut host = host_with(&["a.txt", "d.txt"]);
    assert_eq!(
        nav.navigate_back(&mut host),
        Some(Location::new("a.txt", 1, 1))
    );
    assert_eq!(host.opened, vec!["a.txt:1:1"]);

    // Stale entries were stepped over, not removed
    let history = nav.history(&host).unwrap();
    let forward: Vec<&str> = history.forward_entries().map(|l| l.path.as_str()).collect();
    assert_eq!(forward, vec!["gone1.txt", "gone2.txt", "d.txt"]);
}

#[test]
fn test_open_document_is_usable_even_if_missing_on_disk() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&select(1, "unsaved-delete.txt", 0));
    nav.on_selection_modified(&select(1, "b.txt", 0));

    let mut host = host_with(&["b.txt"]);
    host.open.insert("unsaved-delete.txt".to_string());

    assert_eq!(
        nav.navigate_back(&mut host),
        Some(Location::new("unsaved-delete.txt", 1, 1))
    );
}

#[test]
fn test_all_stale_stops_silently() {
    let mut nav = Navigator::new();
    for path in ["gone1.txt", "gone2.txt", "here.txt"] {
        nav.on_selection_modified(&select(1, path, 0));
    }

    let mut host = host_with(&["here.txt"]);
    assert_eq!(nav.navigate_back(&mut host), None);
    assert!(host.opened.is_empty());

    // Everything was traversed; the history now sits at the oldest entry
    let history = nav.history(&host).unwrap();
    assert!(!history.can_go_back());
    assert_eq!(history.current().map(|l| l.path.as_str()), Some("gone1.txt"));
}

#[test]
fn test_forward_skips_stale_entries() {
    let mut nav = Navigator::new();
    for path in ["a.txt", "gone.txt", "c.txt"] {
        nav.on_selection_modified(&select(1, path, 0));
    }

    let mut host = host_with(&["a.txt", "c.txt"]);
    nav.navigate_back(&mut host);
    assert_eq!(
        nav.navigate_forward(&mut host),
        Some(Location::new("c.txt", 1, 1))
    );
}

#[test]
fn test_stale_entries_returned_when_skipping_disabled() {
    let config = Config {
        skip_stale: false,
        ..Config::default()
    };
    let mut nav = Navigator::from_config(&config);
    nav.on_selection_modified(&select(1, "gone.txt", 0));
    nav.on_selection_modified(&select(1, "b.txt", 0));

    let mut host = host_with(&["b.txt"]);
    assert_eq!(
        nav.navigate_back(&mut host),
        Some(Location::new("gone.txt", 1, 1))
    );
}

#[test]
fn test_open_failure_yields_none() {
    let mut nav = Navigator::new();
    nav.on_selection_modified(&select(1, "a.txt", 0));
    nav.on_selection_modified(&select(1, "b.txt", 0));

    let mut host = host_with(&["a.txt", "b.txt"]);
    host.fail_open = true;
    assert_eq!(nav.navigate_back(&mut host), None);
}

#[test]
fn test_empty_history_is_noop() {
    let mut nav = Navigator::new();
    let mut host = host_with(&[]);
    assert_eq!(nav.navigate_back(&mut host), None);
    assert_eq!(nav.navigate_forward(&mut host), None);
    assert!(host.opened.is_empty());
}

fn write_file(dir: &TempDir, name: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    fs::write(&path, "line\n").unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_workspace_round_trip_with_real_files() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt");
    let b = write_file(&dir, "b.txt");

    let mut ws = Workspace::new();
    let mut nav = Navigator::new();
    ws.focus_window(WindowId(1));

    ws.open_document(&a, 0, 0).unwrap();
    ws.open_document(&b, 9, 0).unwrap();
    ws.close_document(&a).unwrap();
    for event in ws.take_events() {
        nav.on_selection_modified(&event);
    }

    // a.txt is closed but still on disk
    assert_eq!(nav.navigate_back(&mut ws), Some(Location::new(a.clone(), 1, 1)));
    assert_eq!(ws.active_document().and_then(|d| d.path.clone()), Some(a.clone()));

    // The editor reports the jump; it must not be recorded again
    for event in ws.take_events() {
        nav.on_selection_modified(&event);
    }
    let history = nav.history(&ws).unwrap();
    assert!(!history.can_go_back());
    assert!(history.can_go_forward());

    assert_eq!(nav.navigate_forward(&mut ws), Some(Location::new(b, 10, 1)));
}

#[test]
fn test_workspace_skips_deleted_closed_file() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt");
    let doomed = write_file(&dir, "doomed.txt");
    let c = write_file(&dir, "c.txt");

    let mut ws = Workspace::new();
    let mut nav = Navigator::new();
    ws.focus_window(WindowId(1));
    for path in [&a, &doomed, &c] {
        ws.open_document(path, 0, 0).unwrap();
    }
    for event in ws.take_events() {
        nav.on_selection_modified(&event);
    }

    ws.close_document(&doomed).unwrap();
    fs::remove_file(&doomed).unwrap();

    assert_eq!(nav.navigate_back(&mut ws), Some(Location::new(a.clone(), 1, 1)));
    assert_eq!(ws.opened().len(), 1);
    assert_eq!(ws.opened()[0].path, a);
}
