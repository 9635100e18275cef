use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// `config.toml`의 `ui.theme` 값(dark/light)으로 선택합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 선택 목록
    pub list_border: ColorDef,
    pub file_normal: ColorDef,
    pub cursor_fg: ColorDef,
    pub cursor_bg: ColorDef,
    pub directory: ColorDef,
    pub checked: ColorDef,
    pub unchecked: ColorDef,
    pub size_column: ColorDef,

    // UI 컴포넌트
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,
    pub progress_filled: ColorDef,
    pub progress_unfilled: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// `#rrggbb` 파싱 (형식이 맞지 않으면 Reset)
fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// 이름으로 테마 선택
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            list_border: "#0078d4".into(),
            file_normal: "#d4d4d4".into(),
            cursor_fg: "#ffffff".into(),
            cursor_bg: "#264f78".into(),
            directory: "#569cd6".into(),
            checked: "#4ec9b0".into(),
            unchecked: "#6a6a6a".into(),
            size_column: "#9e9e9e".into(),

            header_bg: "#2d2d30".into(),
            header_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),
            progress_filled: "#0078d4".into(),
            progress_unfilled: "#3c3c3c".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            list_border: "#0078d4".into(),
            file_normal: "#1e1e1e".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#add6ff".into(),
            directory: "#0066cc".into(),
            checked: "#107c10".into(),
            unchecked: "#a0a0a0".into(),
            size_column: "#5a5a5a".into(),

            header_bg: "#f3f3f3".into(),
            header_fg: "#1e1e1e".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),
            progress_filled: "#0078d4".into(),
            progress_unfilled: "#dddddd".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
