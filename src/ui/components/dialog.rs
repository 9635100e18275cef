//! 다이얼로그 위젯
//!
//! 압축 파일 이름/폴더 경로 입력, 오류/메시지 표시, 단축키 도움말

use crate::core::actions::generate_help_entries;
use crate::ui::components::text_input::TextInput;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 압축 파일 이름
    ArchiveName,
    /// 스캔할 폴더 경로
    FolderPath,
}

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    Input {
        purpose: InputPurpose,
        title: String,
        prompt: String,
        input: TextInput,
    },
    Error {
        title: String,
        message: String,
    },
    Help {
        scroll_offset: usize,
    },
}

impl DialogKind {
    pub fn archive_name_input(current: &str) -> Self {
        DialogKind::Input {
            purpose: InputPurpose::ArchiveName,
            title: "Archive Name".to_string(),
            prompt: "Name for the zip file (.zip is added):".to_string(),
            input: TextInput::new(current),
        }
    }

    pub fn folder_input(initial: &str) -> Self {
        DialogKind::Input {
            purpose: InputPurpose::FolderPath,
            title: "Open Folder".to_string(),
            prompt: "Folder to archive:".to_string(),
            input: TextInput::new(initial),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    error_color: Color,
    input_bg: Color,
    key_color: Color,
    hint_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            error_color: Color::Rgb(244, 71, 71),
            input_bg: Color::Rgb(60, 60, 60),
            key_color: Color::Rgb(86, 156, 214),
            hint_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.list_border.to_color();
        self.title_color = theme.accent.to_color();
        self.error_color = theme.error.to_color();
        self.input_bg = theme.progress_unfilled.to_color();
        self.key_color = theme.directory.to_color();
        self.hint_color = theme.unchecked.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => (60u16.min(sw.saturating_sub(4)).max(30), 7u16),
            DialogKind::Error { message, .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(30);
                let inner_width = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                let lines: usize = message
                    .lines()
                    .map(|line| line.width().div_ceil(inner_width).max(1))
                    .sum::<usize>()
                    .max(1);
                (w, 5 + lines as u16)
            }
            DialogKind::Help { .. } => (60u16.min(sw.saturating_sub(4)).max(40), sh.saturating_sub(4)),
        };

        let width = width.min(sw);
        let height = height.min(sh);
        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn frame(&self, buf: &mut Buffer, area: Rect, title: &str, is_error: bool) -> Rect {
        let (title_color, border_color) = if is_error {
            (self.error_color, self.error_color)
        } else {
            (self.title_color, self.border_color)
        };
        Block::default()
            .title(format!(" {} ", title))
            .title_style(
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    fn render_hint(&self, buf: &mut Buffer, area: Rect, hint: &str) {
        let x = area.x + area.width.saturating_sub(hint.width() as u16) / 2;
        let y = area.y + area.height.saturating_sub(2);
        buf.set_string(x, y, hint, Style::default().fg(self.hint_color));
    }

    fn render_input(&self, buf: &mut Buffer, area: Rect, title: &str, prompt: &str, input: &TextInput) {
        let inner = self.frame(buf, area, title, false);
        if inner.width < 3 || inner.height < 2 {
            return;
        }
        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));

        let input_y = inner.y + 1;
        buf.set_style(
            Rect::new(inner.x, input_y, inner.width, 1),
            Style::default().bg(self.input_bg),
        );

        // 커서가 보이도록 앞부분을 건너뛴다
        let max_display = inner.width as usize - 2;
        let cursor_col = input.cursor_column();
        let skip_width = cursor_col.saturating_sub(max_display.saturating_sub(1));
        let mut skipped = 0;
        let visible: String = input
            .value()
            .chars()
            .skip_while(|c| {
                let keep_skipping = skipped < skip_width;
                if keep_skipping {
                    skipped += c.width().unwrap_or(0);
                }
                keep_skipping
            })
            .collect();

        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_stringn(inner.x + 1, input_y, &visible, max_display, value_style);

        let cursor_x = inner.x + 1 + cursor_col.saturating_sub(skipped) as u16;
        if cursor_x < inner.x + inner.width - 1 {
            if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                if input.cursor() < input.value().len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(value_style);
                }
            }
        }

        self.render_hint(buf, area, "Enter:OK  Esc:Cancel");
    }

    fn render_error(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str) {
        let inner = self.frame(buf, area, title, true);
        let text_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        self.render_hint(buf, area, "Enter:OK");
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let inner = self.frame(buf, area, "Keyboard Shortcuts", false);
        let visible_height = inner.height.saturating_sub(2) as usize;

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.key_color);
        let desc_style = Style::default().fg(self.fg_color);

        let rows = help_rows();
        let offset = scroll_offset.min(rows.len().saturating_sub(visible_height));
        let key_col_width = 14u16;

        for (i, row) in rows.iter().skip(offset).take(visible_height).enumerate() {
            let y = inner.y + i as u16;
            match row {
                HelpRow::Header(title) => {
                    buf.set_string(inner.x, y, title, header_style);
                }
                HelpRow::Binding(key, desc) => {
                    buf.set_string(inner.x + 2, y, key, key_style);
                    buf.set_string(inner.x + key_col_width, y, desc, desc_style);
                }
                HelpRow::Blank => {}
            }
        }

        self.render_hint(buf, area, "Esc/?:Close  j/k:Scroll");
    }
}

enum HelpRow {
    Header(&'static str),
    Binding(&'static str, &'static str),
    Blank,
}

fn help_rows() -> Vec<HelpRow> {
    let mut rows = Vec::new();
    for (category, items) in generate_help_entries() {
        rows.push(HelpRow::Header(category));
        rows.extend(items.into_iter().map(|(key, desc)| HelpRow::Binding(key, desc)));
        rows.push(HelpRow::Blank);
    }
    rows
}

/// 도움말 최대 스크롤 위치 계산용 전체 행 수
pub fn help_row_count() -> usize {
    help_rows().len()
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                input,
                ..
            } => self.render_input(buf, dialog_area, title, prompt, input),
            DialogKind::Error { title, message } => {
                self.render_error(buf, dialog_area, title, message)
            }
            DialogKind::Help { scroll_offset } => self.render_help(buf, dialog_area, *scroll_offset),
        }
    }
}
