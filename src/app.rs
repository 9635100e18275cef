use crate::config::Config;
use crate::core::actions::{is_allowed_while_busy, Action};
use crate::core::orchestrator::{Orchestrator, OrchestratorState};
use crate::models::{CompressionLevel, Listing, Notification};
use crate::system::{DirectorySink, ScanOptions, ZipArchiveBuilder};
use crate::ui::components::DialogKind;
use crate::ui::{LayoutManager, Theme};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod dialogs;
mod navigation;
mod operations;

/// 애플리케이션 상태
pub struct App {
    should_quit: bool,
    pub layout: LayoutManager,
    pub theme: Theme,
    config: Config,
    scan_options: ScanOptions,
    /// 현재 스캔한 폴더
    folder: Option<PathBuf>,
    /// 선택 목록 (압축 성공 후 비워짐)
    listing: Listing,
    /// 커서 위치 (listing 인덱스)
    cursor: usize,
    scroll_offset: usize,
    /// 사용자가 입력한 압축 파일 이름 (`.zip` 제외)
    archive_name: String,
    level: CompressionLevel,
    orchestrator: Orchestrator,
    pub dialog: Option<DialogKind>,
    toast: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let orchestrator = Orchestrator::new(
            Arc::new(ZipArchiveBuilder),
            Arc::new(DirectorySink::new(config.output_dir())),
            Duration::from_millis(config.archive.reset_delay_ms),
        );
        Self::with_orchestrator(config, orchestrator)
    }

    pub(crate) fn with_orchestrator(config: Config, orchestrator: Orchestrator) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_default();
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme,
            scan_options: ScanOptions {
                skip_hidden: config.scan.skip_hidden,
            },
            folder: None,
            listing: Listing::default(),
            cursor: 0,
            scroll_offset: 0,
            archive_name: config.archive.default_name.clone(),
            level: config.compression_level(),
            orchestrator,
            dialog: None,
            toast: None,
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(output_dir: &Path) -> Self {
        let mut config = Config::default();
        config.archive.output_dir = Some(output_dir.to_path_buf());
        config.archive.reset_delay_ms = 0;
        Self::new(config)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 종료 (압축 진행 중에는 거부)
    pub fn quit(&mut self) {
        if self.orchestrator.is_running() {
            self.set_toast(Notification::validation(
                "Archive in progress. Wait for it to finish before quitting.",
            ));
            return;
        }
        self.should_quit = true;
    }

    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        if self.is_busy() && !is_allowed_while_busy(action) {
            self.set_toast(Notification::validation(
                "Archive in progress. Please wait.",
            ));
            return;
        }

        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::PageUp => self.move_cursor_page_up(),
            Action::PageDown => self.move_cursor_page_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleSelection => self.toggle_at_cursor(),
            Action::SelectAll => self.set_all_selected(true),
            Action::DeselectAll => self.set_all_selected(false),
            Action::LevelUp => self.level = self.level.increase(),
            Action::LevelDown => self.level = self.level.decrease(),
            Action::EditArchiveName => {
                self.dialog = Some(DialogKind::archive_name_input(&self.archive_name));
            }
            Action::OpenFolder => self.open_folder_dialog(),
            Action::Rescan => self.rescan(),
            Action::CreateArchive => self.create_archive(),
            Action::ShowHelp => self.dialog = Some(DialogKind::help()),
        }
    }

    /// UI 틱: 작업 이벤트 반영, 토스트 만료
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = self.orchestrator.poll(now) {
            self.handle_notification(notification);
        }
        self.clear_expired_toast(now);
    }

    // === 조회 ===

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_archive_name(&mut self, name: &str) {
        self.archive_name = name.trim().to_string();
    }

    /// 헤더에 표시할 파일 이름
    pub fn archive_file_name_display(&self) -> String {
        Orchestrator::archive_file_name(&self.archive_name)
            .unwrap_or_else(|_| self.archive_name.clone())
    }

    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Running 또는 Settling
    pub fn is_busy(&self) -> bool {
        !self.orchestrator.is_idle()
    }

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 상태바 오른쪽 표시
    pub fn state_label(&self) -> String {
        match self.orchestrator.state() {
            OrchestratorState::Idle => "Ready".to_string(),
            OrchestratorState::Running => {
                format!("Zipping {}%", self.orchestrator.progress().percentage())
            }
            OrchestratorState::Settling { .. } => "Done".to_string(),
        }
    }

    pub fn toast(&self) -> Option<&Notification> {
        self.toast.as_ref().map(|(notification, _)| notification)
    }

    pub(crate) fn set_toast(&mut self, notification: Notification) {
        self.toast = Some((notification, Instant::now()));
    }

    fn clear_expired_toast(&mut self, now: Instant) {
        let ttl = Duration::from_secs(self.config.ui.toast_secs);
        if let Some((_, shown_at)) = &self.toast {
            if now.saturating_duration_since(*shown_at) >= ttl {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests;
