// Status bar component - 상태바 컴포넌트
//
// 목록 통계(파일/디렉토리 수, 선택 항목)와 압축 상태 표시

use crate::models::{Notification, NotificationLevel};
use crate::ui::Theme;
use crate::utils::formatter::{format_file_size, pluralize};
use crate::utils::path_display::truncate_middle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    file_count: usize,
    dir_count: usize,
    total_bytes: u64,
    /// 선택된 파일 수
    selected_count: usize,
    selected_bytes: u64,
    /// 오른쪽에 표시할 상태 (Ready, Zipping 42%, ...)
    state_label: &'a str,
    /// 표시 중인 토스트 (있으면 통계 대신 표시)
    toast: Option<&'a Notification>,
    bg_color: Color,
    fg_color: Color,
    highlight_color: Color,
    success_color: Color,
    error_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            file_count: 0,
            dir_count: 0,
            total_bytes: 0,
            selected_count: 0,
            selected_bytes: 0,
            state_label: "Ready",
            toast: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            highlight_color: Color::Yellow,
            success_color: Color::Green,
            error_color: Color::Red,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    pub fn total_bytes(mut self, bytes: u64) -> Self {
        self.total_bytes = bytes;
        self
    }

    /// 선택 정보 설정
    pub fn selection(mut self, count: usize, bytes: u64) -> Self {
        self.selected_count = count;
        self.selected_bytes = bytes;
        self
    }

    pub fn state_label(mut self, label: &'a str) -> Self {
        self.state_label = label;
        self
    }

    pub fn toast(mut self, toast: Option<&'a Notification>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.highlight_color = theme.warning.to_color();
        self.success_color = theme.success.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn toast_line(&self, toast: &Notification, width: u16) -> Line<'static> {
        let (icon, color) = match toast.level {
            NotificationLevel::Success => ("✔", self.success_color),
            NotificationLevel::Validation => ("!", self.highlight_color),
            NotificationLevel::Failure => ("✘", self.error_color),
        };
        let message = truncate_middle(&toast.message, (width as usize).saturating_sub(4));
        Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(self.fg_color)),
        ])
    }

    fn left_text(&self) -> String {
        format!(
            " {}, {} | {}",
            pluralize(self.file_count, "file", "files"),
            pluralize(self.dir_count, "dir", "dirs"),
            format_file_size(self.total_bytes)
        )
    }

    fn selection_text(&self) -> String {
        if self.selected_count == 0 {
            return String::new();
        }
        format!(
            " | {} selected ({})",
            self.selected_count,
            format_file_size(self.selected_bytes)
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        if let Some(toast) = self.toast {
            Paragraph::new(self.toast_line(toast, area.width)).render(area, buf);
            return;
        }

        let left = self.left_text();
        let selected = self.selection_text();
        let right = format!("[{}] ", self.state_label);

        let used = left.width() + selected.width() + right.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left, Style::default().fg(self.fg_color)),
            Span::styled(selected, Style::default().fg(self.highlight_color)),
            Span::raw(padding),
            Span::styled(right, Style::default().fg(self.fg_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
