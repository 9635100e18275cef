use super::*;
use crate::ui::components::{InputPurpose, TextInput};

impl App {
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 폴더 입력 다이얼로그 (현재 폴더 또는 홈 디렉토리로 시작)
    pub fn open_folder_dialog(&mut self) {
        let initial = self
            .folder
            .clone()
            .or_else(dirs::home_dir)
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_default();
        self.dialog = Some(DialogKind::folder_input(&initial));
    }

    fn input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.dialog {
            Some(DialogKind::Input { input, .. }) => Some(input),
            _ => None,
        }
    }

    pub fn dialog_input_char(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.insert(c);
        }
    }

    pub fn dialog_input_backspace(&mut self) {
        if let Some(input) = self.input_mut() {
            input.backspace();
        }
    }

    pub fn dialog_input_delete(&mut self) {
        if let Some(input) = self.input_mut() {
            input.delete();
        }
    }

    pub fn dialog_input_delete_word(&mut self) {
        if let Some(input) = self.input_mut() {
            input.delete_prev_word();
        }
    }

    pub fn dialog_input_left(&mut self) {
        if let Some(input) = self.input_mut() {
            input.left();
        }
    }

    pub fn dialog_input_right(&mut self) {
        if let Some(input) = self.input_mut() {
            input.right();
        }
    }

    pub fn dialog_input_home(&mut self) {
        if let Some(input) = self.input_mut() {
            input.home();
        }
    }

    pub fn dialog_input_end(&mut self) {
        if let Some(input) = self.input_mut() {
            input.end();
        }
    }

    /// 입력 다이얼로그 확인 (Enter)
    ///
    /// 값이 유효하지 않으면 다이얼로그를 유지하고 토스트로 알린다.
    pub fn confirm_input_dialog(&mut self) {
        let Some(DialogKind::Input { purpose, input, .. }) = &self.dialog else {
            return;
        };
        let purpose = *purpose;
        let value = input.value().to_string();

        match purpose {
            InputPurpose::ArchiveName => match Orchestrator::archive_file_name(&value) {
                Ok(_) => {
                    self.archive_name = value.trim().to_string();
                    self.close_dialog();
                }
                Err(err) => self.set_toast(Notification::validation(err.to_string())),
            },
            InputPurpose::FolderPath => {
                let path = expand_home(value.trim());
                self.close_dialog();
                self.load_folder(&path);
            }
        }
    }
}

/// `~` 또는 `~/...` 를 홈 디렉토리로 확장
pub(crate) fn expand_home(input: &str) -> PathBuf {
    let rest = match input {
        "~" => Some(""),
        _ => input.strip_prefix("~/"),
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}
