use super::*;
use crate::models::NotificationLevel;
use crate::system::{ArchiveBuildRequest, ArchiveBuilder, ArchiveProgressEvent};
use crate::ui::components::InputPurpose;
use crate::utils::error::{BokslZipError, Result};
use ratatui::layout::Rect;
use std::fs;
use std::sync::mpsc;
use std::sync::Mutex;
use tempfile::TempDir;

/// temp/docs/{a.txt, sub/b.txt} 생성
///
/// 목록 순서: docs, docs/sub, docs/a.txt, docs/sub/b.txt
fn make_folder(temp: &TempDir) -> PathBuf {
    let folder = temp.path().join("docs");
    fs::create_dir_all(folder.join("sub")).unwrap();
    fs::write(folder.join("a.txt"), b"alpha").unwrap();
    fs::write(folder.join("sub").join("b.txt"), b"bravo").unwrap();
    folder
}

fn make_loaded_app(temp: &TempDir) -> App {
    let mut app = App::new_for_test(&temp.path().join("out"));
    app.load_folder(&make_folder(temp));
    app
}

fn app_with_builder(temp: &TempDir, builder: Arc<dyn ArchiveBuilder>) -> App {
    let orchestrator = Orchestrator::new(
        builder,
        Arc::new(DirectorySink::new(temp.path().join("out"))),
        Duration::ZERO,
    );
    let mut app = App::with_orchestrator(Config::default(), orchestrator);
    app.load_folder(&make_folder(temp));
    app
}

/// 작업이 끝날 때까지 틱 반복
fn tick_until_finished(app: &mut App) {
    let mut guard = 0usize;
    while app.orchestrator().is_running() && guard < 2_000 {
        app.tick(Instant::now());
        std::thread::sleep(Duration::from_millis(2));
        guard += 1;
    }
    assert!(guard < 2_000, "archive operation loop guard exceeded");
}

fn selected_paths(app: &App) -> Vec<&str> {
    app.listing()
        .entries()
        .iter()
        .filter(|e| e.selected)
        .map(|e| e.path.as_str())
        .collect()
}

fn select_path(app: &mut App, path: &str) {
    let index = app.listing().position(path).unwrap();
    app.cursor = index;
    app.execute_action(Action::ToggleSelection);
}

struct FailingBuilder;

impl ArchiveBuilder for FailingBuilder {
    fn build(
        &self,
        _request: &ArchiveBuildRequest,
        _progress: &mut dyn FnMut(ArchiveProgressEvent),
    ) -> Result<Vec<u8>> {
        Err(BokslZipError::ArchiveCreateFailed {
            path: PathBuf::from("docs.zip"),
            reason: "disk on fire".to_string(),
        })
    }
}

/// 테스트가 신호를 보낼 때까지 대기하는 빌더
struct GatedBuilder {
    release: Mutex<mpsc::Receiver<()>>,
}

impl ArchiveBuilder for GatedBuilder {
    fn build(
        &self,
        _request: &ArchiveBuildRequest,
        _progress: &mut dyn FnMut(ArchiveProgressEvent),
    ) -> Result<Vec<u8>> {
        let _ = self.release.lock().unwrap().recv();
        Ok(Vec::new())
    }
}

#[test]
fn test_load_folder_builds_listing_and_default_name() {
    let temp = TempDir::new().unwrap();
    let app = make_loaded_app(&temp);

    let paths: Vec<&str> = app
        .listing()
        .entries()
        .iter()
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(
        paths,
        vec!["docs", "docs/sub", "docs/a.txt", "docs/sub/b.txt"]
    );
    assert_eq!(app.archive_name, "docs");
    assert_eq!(app.archive_file_name_display(), "docs.zip");
    assert!(app.listing().entries().iter().all(|e| e.selected));
    assert_eq!(app.listing().selected_count(), 2);
}

#[test]
fn test_load_missing_folder_shows_error_and_keeps_state() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);

    app.load_folder(&temp.path().join("missing"));

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert_eq!(app.listing().len(), 4);
    assert_eq!(app.folder(), Some(temp.path().join("docs").as_path()));
}

#[test]
fn test_toggle_directory_cascades_to_subtree() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);

    select_path(&mut app, "docs/sub");
    assert_eq!(selected_paths(&app), vec!["docs", "docs/a.txt"]);

    select_path(&mut app, "docs/sub");
    assert_eq!(selected_paths(&app).len(), 4);

    select_path(&mut app, "docs");
    assert!(!app.listing().has_selection());
}

#[test]
fn test_select_all_and_none() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);

    app.execute_action(Action::SelectAll);
    assert_eq!(app.listing().selected_count(), 2);
    assert_eq!(app.listing().selected_bytes(), 10);

    app.execute_action(Action::DeselectAll);
    assert!(!app.listing().has_selection());
}

#[test]
fn test_level_actions_clamp() {
    let temp = TempDir::new().unwrap();
    let mut app = App::new_for_test(temp.path());
    assert_eq!(app.level().value(), 6);

    for _ in 0..10 {
        app.execute_action(Action::LevelUp);
    }
    assert_eq!(app.level().value(), 9);

    for _ in 0..12 {
        app.execute_action(Action::LevelDown);
    }
    assert_eq!(app.level().value(), 0);
}

#[test]
fn test_navigation_keeps_cursor_visible() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("many");
    fs::create_dir_all(&folder).unwrap();
    for i in 0..30 {
        fs::write(folder.join(format!("f{:02}.txt", i)), b"x").unwrap();
    }

    let mut app = App::new_for_test(&temp.path().join("out"));
    app.layout.update(Rect::new(0, 0, 80, 20));
    app.load_folder(&folder);
    let page = app.layout.list_page_size();
    assert_eq!(app.listing().len(), 31);

    app.execute_action(Action::GoToBottom);
    assert_eq!(app.cursor(), 30);
    assert_eq!(app.scroll_offset(), 31 - page);

    app.execute_action(Action::PageUp);
    assert_eq!(app.cursor(), 30 - page);
    assert!(app.scroll_offset() <= app.cursor());

    app.execute_action(Action::GoToTop);
    assert_eq!((app.cursor(), app.scroll_offset()), (0, 0));

    app.execute_action(Action::MoveUp);
    assert_eq!(app.cursor(), 0);
}

#[tokio::test]
async fn test_create_without_selection_shows_validation_toast() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);
    app.execute_action(Action::DeselectAll);

    app.execute_action(Action::CreateArchive);

    let toast = app.toast().expect("validation toast");
    assert_eq!(toast.level, NotificationLevel::Validation);
    assert_eq!(toast.message, "No files selected for archive.");
    assert!(!app.is_busy());
}

#[tokio::test]
async fn test_create_archive_success_clears_listing() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);
    select_path(&mut app, "docs/sub");

    app.execute_action(Action::CreateArchive);
    assert!(app.orchestrator().is_running());
    tick_until_finished(&mut app);

    let toast = app.toast().expect("success toast");
    assert_eq!(toast.level, NotificationLevel::Success);
    assert!(app.listing().is_empty());
    assert_eq!(app.orchestrator().progress().percentage(), 100);

    let saved = temp.path().join("out").join("docs.zip");
    let archive = zip::ZipArchive::new(fs::File::open(&saved).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert_eq!(names, vec!["docs/a.txt"]);

    // reset_delay 0: 다음 틱에 Idle
    app.tick(Instant::now());
    assert!(!app.is_busy());
    assert_eq!(app.orchestrator().progress().percentage(), 0);
}

#[tokio::test]
async fn test_archive_name_with_zip_extension_is_not_doubled() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);
    app.set_archive_name("backup.zip");
    app.execute_action(Action::SelectAll);

    app.execute_action(Action::CreateArchive);
    tick_until_finished(&mut app);

    assert!(temp.path().join("out").join("backup.zip").exists());
}

#[tokio::test]
async fn test_create_archive_failure_keeps_listing_for_retry() {
    let temp = TempDir::new().unwrap();
    let mut app = app_with_builder(&temp, Arc::new(FailingBuilder));
    app.execute_action(Action::SelectAll);

    app.execute_action(Action::CreateArchive);
    tick_until_finished(&mut app);

    match &app.dialog {
        Some(DialogKind::Error { message, .. }) => {
            assert_eq!(message, "Failed to create docs.zip.");
        }
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert_eq!(app.listing().selected_count(), 2);
    assert!(!temp.path().join("out").join("docs.zip").exists());
}

#[tokio::test]
async fn test_busy_blocks_edits_and_quit() {
    let temp = TempDir::new().unwrap();
    let (release_tx, release_rx) = mpsc::channel();
    let builder = GatedBuilder {
        release: Mutex::new(release_rx),
    };
    let mut app = app_with_builder(&temp, Arc::new(builder));
    app.execute_action(Action::SelectAll);

    app.execute_action(Action::CreateArchive);
    assert!(app.orchestrator().is_running());

    app.execute_action(Action::DeselectAll);
    assert_eq!(app.listing().selected_count(), 2);
    assert_eq!(
        app.toast().map(|t| t.level),
        Some(NotificationLevel::Validation)
    );

    app.execute_action(Action::Quit);
    assert!(!app.should_quit());

    // 탐색은 허용
    app.execute_action(Action::MoveDown);
    assert_eq!(app.cursor(), 1);

    release_tx.send(()).unwrap();
    tick_until_finished(&mut app);
    app.tick(Instant::now());
    assert!(!app.is_busy());

    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_archive_name_dialog_validates_input() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);

    app.execute_action(Action::EditArchiveName);
    assert!(matches!(
        app.dialog,
        Some(DialogKind::Input {
            purpose: InputPurpose::ArchiveName,
            ..
        })
    ));

    for _ in 0.."docs".len() {
        app.dialog_input_backspace();
    }
    app.confirm_input_dialog();
    assert!(app.is_dialog_active());
    assert_eq!(
        app.toast().map(|t| t.message.as_str()),
        Some("Archive name cannot be empty.")
    );

    for c in "  report ".chars() {
        app.dialog_input_char(c);
    }
    app.confirm_input_dialog();
    assert!(!app.is_dialog_active());
    assert_eq!(app.archive_name, "report");
}

#[test]
fn test_folder_dialog_loads_folder() {
    let temp = TempDir::new().unwrap();
    let folder = make_folder(&temp);
    let mut app = App::new_for_test(&temp.path().join("out"));

    app.open_folder_dialog();
    app.dialog = Some(DialogKind::folder_input(&folder.to_string_lossy()));
    app.confirm_input_dialog();

    assert!(!app.is_dialog_active());
    assert_eq!(app.folder(), Some(folder.as_path()));
    assert_eq!(app.listing().file_count(), 2);
}

#[test]
fn test_rescan_picks_up_new_files_and_keeps_name() {
    let temp = TempDir::new().unwrap();
    let mut app = make_loaded_app(&temp);
    app.set_archive_name("custom");
    fs::write(temp.path().join("docs").join("c.txt"), b"charlie").unwrap();

    app.execute_action(Action::Rescan);

    assert_eq!(app.listing().file_count(), 3);
    assert_eq!(app.archive_name, "custom");
}

#[test]
fn test_expand_home() {
    use super::dialogs::expand_home;

    assert_eq!(expand_home("/tmp/x"), PathBuf::from("/tmp/x"));
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/docs"), home.join("docs"));
    }
}

#[test]
fn test_help_dialog_scroll_is_bounded() {
    let temp = TempDir::new().unwrap();
    let mut app = App::new_for_test(temp.path());

    app.execute_action(Action::ShowHelp);
    app.dialog_help_scroll_up();
    assert!(matches!(app.dialog, Some(DialogKind::Help { scroll_offset: 0 })));

    for _ in 0..500 {
        app.dialog_help_scroll_down();
    }
    let Some(DialogKind::Help { scroll_offset }) = app.dialog else {
        panic!("help dialog closed");
    };
    assert!(scroll_offset < 500);
}
