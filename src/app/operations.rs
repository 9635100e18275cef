use super::*;
use crate::models::{apply_toggle, build_listing, select_all, NotificationLevel};
use crate::system::scan_folder;
use crate::utils::error::BokslZipError;

impl App {
    /// 폴더를 스캔해 새 선택 목록으로 교체
    ///
    /// 실패하면 기존 상태를 유지하고 오류 다이얼로그를 띄운다.
    pub fn load_folder(&mut self, path: &Path) {
        match scan_folder(path, self.scan_options) {
            Ok(files) => {
                let listing = build_listing(&files);
                tracing::info!(
                    folder = %path.display(),
                    files = listing.file_count(),
                    dirs = listing.dir_count(),
                    "Folder loaded"
                );
                self.archive_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| self.config.archive.default_name.clone());
                self.folder = Some(path.to_path_buf());
                self.listing = listing;
                self.reset_cursor();
            }
            Err(err) => {
                tracing::error!(folder = %path.display(), error = %err, "Folder scan failed");
                self.dialog = Some(DialogKind::error("Scan Failed", err.to_string()));
            }
        }
    }

    /// 현재 폴더 다시 스캔 (선택 상태는 초기화)
    pub fn rescan(&mut self) {
        let Some(folder) = self.folder.clone() else {
            self.open_folder_dialog();
            return;
        };
        let archive_name = self.archive_name.clone();
        self.load_folder(&folder);
        self.archive_name = archive_name;
    }

    /// 커서 위치 엔트리 체크 토글 (디렉토리는 하위 전체)
    pub fn toggle_at_cursor(&mut self) {
        self.listing = apply_toggle(&self.listing, self.cursor);
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        self.listing = select_all(&self.listing, selected);
    }

    /// 압축 시작
    pub fn create_archive(&mut self) {
        match self
            .orchestrator
            .start(&self.listing, &self.archive_name, self.level)
        {
            Ok(()) => self.toast = None,
            Err(BokslZipError::Validation(err)) => {
                self.set_toast(Notification::validation(err.to_string()));
            }
            Err(BokslZipError::Busy) => {
                self.set_toast(Notification::validation("Archive in progress. Please wait."));
            }
            Err(err) => {
                self.dialog = Some(DialogKind::error("Archive Failed", err.to_string()));
            }
        }
    }

    /// 작업 결과 반영
    ///
    /// 성공하면 선택 목록을 비우고, 실패하면 다시 시도할 수 있도록 유지한다.
    pub(super) fn handle_notification(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                self.listing = Listing::default();
                self.reset_cursor();
                self.set_toast(notification);
            }
            NotificationLevel::Failure => {
                self.dialog = Some(DialogKind::error("Archive Failed", notification.message));
            }
            NotificationLevel::Validation => self.set_toast(notification),
        }
    }
}
