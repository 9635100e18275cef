//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    // Selection
    ToggleSelection,
    SelectAll,
    DeselectAll,
    // Archive
    LevelUp,
    LevelDown,
    EditArchiveName,
    OpenFolder,
    Rescan,
    CreateArchive,
    // System
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Selection,
    Archive,
    System,
}

impl ActionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Selection => "Selection",
            ActionCategory::Archive => "Archive",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
    /// 압축 진행 중에도 실행 가능한지
    pub allowed_while_busy: bool,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        label: "Move up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Move",
            priority: 50,
        }),
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::MoveDown,
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::PageUp,
        label: "Page up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("PgUp / PgDn"),
        command_bar: None,
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::PageDown,
        label: "Page down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::GoToTop,
        label: "Top",
        category: ActionCategory::Navigation,
        shortcut_display: Some("g / Home"),
        command_bar: None,
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::GoToBottom,
        label: "Bottom",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
        allowed_while_busy: true,
    },
    // Selection
    ActionDef {
        action: Action::ToggleSelection,
        label: "Toggle entry (directories cascade)",
        category: ActionCategory::Selection,
        shortcut_display: Some("Space"),
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Toggle",
            priority: 10,
        }),
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::SelectAll,
        label: "Select all",
        category: ActionCategory::Selection,
        shortcut_display: Some("a"),
        command_bar: Some(CommandBarEntry {
            key: "a/n",
            label: "All/None",
            priority: 11,
        }),
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::DeselectAll,
        label: "Select none",
        category: ActionCategory::Selection,
        shortcut_display: Some("n"),
        command_bar: None,
        allowed_while_busy: false,
    },
    // Archive
    ActionDef {
        action: Action::LevelUp,
        label: "Compression level +1",
        category: ActionCategory::Archive,
        shortcut_display: Some("+ / →"),
        command_bar: Some(CommandBarEntry {
            key: "+/-",
            label: "Level",
            priority: 20,
        }),
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::LevelDown,
        label: "Compression level -1",
        category: ActionCategory::Archive,
        shortcut_display: Some("- / ←"),
        command_bar: None,
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::EditArchiveName,
        label: "Edit archive name",
        category: ActionCategory::Archive,
        shortcut_display: Some("r"),
        command_bar: Some(CommandBarEntry {
            key: "r",
            label: "Name",
            priority: 21,
        }),
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::OpenFolder,
        label: "Open folder",
        category: ActionCategory::Archive,
        shortcut_display: Some("o"),
        command_bar: Some(CommandBarEntry {
            key: "o",
            label: "Open",
            priority: 22,
        }),
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::Rescan,
        label: "Rescan folder",
        category: ActionCategory::Archive,
        shortcut_display: Some("^R"),
        command_bar: None,
        allowed_while_busy: false,
    },
    ActionDef {
        action: Action::CreateArchive,
        label: "Create archive",
        category: ActionCategory::Archive,
        shortcut_display: Some("Enter / c"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Zip",
            priority: 1,
        }),
        allowed_while_busy: false,
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 90,
        }),
        allowed_while_busy: true,
    },
    ActionDef {
        action: Action::Quit,
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
        }),
        allowed_while_busy: true,
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let bind = |code: KeyCode, modifiers: Option<KeyModifiers>, action: Action| KeyBinding {
        code,
        modifiers,
        action,
    };
    let plain = Some(KeyModifiers::NONE);

    vec![
        // 탐색
        bind(KeyCode::Char('j'), plain, Action::MoveDown),
        bind(KeyCode::Down, None, Action::MoveDown),
        bind(KeyCode::Char('k'), plain, Action::MoveUp),
        bind(KeyCode::Up, None, Action::MoveUp),
        bind(KeyCode::PageUp, None, Action::PageUp),
        bind(KeyCode::PageDown, None, Action::PageDown),
        bind(KeyCode::Char('g'), plain, Action::GoToTop),
        bind(KeyCode::Home, None, Action::GoToTop),
        bind(KeyCode::Char('G'), None, Action::GoToBottom),
        bind(KeyCode::End, None, Action::GoToBottom),
        // 선택
        bind(KeyCode::Char(' '), plain, Action::ToggleSelection),
        bind(KeyCode::Char('a'), plain, Action::SelectAll),
        bind(KeyCode::Char('n'), plain, Action::DeselectAll),
        // 압축
        bind(KeyCode::Char('+'), None, Action::LevelUp),
        bind(KeyCode::Char('='), plain, Action::LevelUp),
        bind(KeyCode::Right, None, Action::LevelUp),
        bind(KeyCode::Char('-'), None, Action::LevelDown),
        bind(KeyCode::Left, None, Action::LevelDown),
        bind(KeyCode::Char('r'), plain, Action::EditArchiveName),
        bind(KeyCode::Char('o'), plain, Action::OpenFolder),
        bind(
            KeyCode::Char('r'),
            Some(KeyModifiers::CONTROL),
            Action::Rescan,
        ),
        bind(KeyCode::Enter, None, Action::CreateArchive),
        bind(KeyCode::Char('c'), plain, Action::CreateArchive),
        // 시스템
        bind(KeyCode::Char('?'), None, Action::ShowHelp),
        bind(KeyCode::F(1), None, Action::ShowHelp),
        bind(KeyCode::Char('q'), plain, Action::Quit),
        bind(KeyCode::Esc, None, Action::Quit),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

pub fn action_def(action: Action) -> Option<&'static ActionDef> {
    ACTION_DEFS.iter().find(|d| d.action == action)
}

/// 압축 진행 중 실행 가능 여부
pub fn is_allowed_while_busy(action: Action) -> bool {
    action_def(action).is_some_and(|d| d.allowed_while_busy)
}

/// 커맨드바 항목 생성 (priority 순, 진행 중에는 불가 항목 비활성)
pub fn generate_command_bar_items(busy: bool) -> Vec<CommandItem> {
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| {
            CommandItem::new(cb.key, cb.label).enabled(!busy || def.allowed_while_busy)
        })
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Selection,
        ActionCategory::Archive,
        ActionCategory::System,
    ]
    .iter()
    .map(|cat| {
        let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
            .iter()
            .filter(|d| d.category == *cat)
            .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
            .collect();
        (cat.title(), items)
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}
