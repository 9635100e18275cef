// Header component - 압축 설정 헤더
//
// 폴더, 압축 파일 이름, 압축 레벨 슬라이더 (3줄)

use crate::models::CompressionLevel;
use crate::ui::Theme;
use crate::utils::path_display::{truncate_folder, truncate_middle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::path::Path;

const LABEL_WIDTH: usize = 9;

pub struct ArchiveHeader<'a> {
    folder: Option<&'a Path>,
    /// `.zip`이 붙은 최종 파일 이름
    file_name: &'a str,
    level: CompressionLevel,
    bg_color: Color,
    fg_color: Color,
    label_color: Color,
    accent_color: Color,
    muted_color: Color,
}

impl<'a> ArchiveHeader<'a> {
    pub fn new(file_name: &'a str, level: CompressionLevel) -> Self {
        Self {
            folder: None,
            file_name,
            level,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::White,
            label_color: Color::Rgb(158, 158, 158),
            accent_color: Color::Rgb(0, 120, 212),
            muted_color: Color::Rgb(106, 106, 106),
        }
    }

    pub fn folder(mut self, folder: Option<&'a Path>) -> Self {
        self.folder = folder;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.header_fg.to_color();
        self.label_color = theme.size_column.to_color();
        self.accent_color = theme.accent.to_color();
        self.muted_color = theme.unchecked.to_color();
        self
    }

    /// 레벨 슬라이더 텍스트: `0 ━━━━━━●━━ 9`
    pub fn level_slider(level: CompressionLevel) -> (String, String, String) {
        let steps = usize::from(CompressionLevel::MAX) + 1;
        let position = usize::from(level.value());
        let before = "━".repeat(position);
        let after = "━".repeat(steps - position - 1);
        (before, "●".to_string(), after)
    }

    fn level_description(level: CompressionLevel) -> &'static str {
        match level.value() {
            0 => "store",
            1..=3 => "fast",
            4..=6 => "balanced",
            _ => "best",
        }
    }

    fn label(&self, text: &'static str) -> Span<'static> {
        Span::styled(
            format!(" {:<width$}", text, width = LABEL_WIDTH - 1),
            Style::default().fg(self.label_color),
        )
    }
}

impl Widget for ArchiveHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        let value_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 1);

        let folder = match self.folder {
            Some(path) => Span::styled(
                truncate_folder(path, value_width),
                Style::default().fg(self.fg_color),
            ),
            None => Span::styled("(none)", Style::default().fg(self.muted_color)),
        };

        let name = Span::styled(
            truncate_middle(self.file_name, value_width),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        );

        let (before, knob, after) = Self::level_slider(self.level);
        let slider_style = Style::default().fg(self.accent_color);
        let level_line = Line::from(vec![
            self.label("Level"),
            Span::styled("0 ", Style::default().fg(self.muted_color)),
            Span::styled(before, slider_style),
            Span::styled(
                knob,
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(after, Style::default().fg(self.muted_color)),
            Span::styled(" 9  ", Style::default().fg(self.muted_color)),
            Span::styled(
                format!(
                    "{} ({})",
                    self.level,
                    Self::level_description(self.level)
                ),
                Style::default().fg(self.fg_color),
            ),
        ]);

        let lines = vec![
            Line::from(vec![self.label("Folder"), folder]),
            Line::from(vec![self.label("Archive"), name]),
            level_line,
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_slider_positions() {
        let (before, knob, after) = ArchiveHeader::level_slider(CompressionLevel::clamped(0));
        assert_eq!(before, "");
        assert_eq!(knob, "●");
        assert_eq!(after.chars().count(), 9);

        let (before, _, after) = ArchiveHeader::level_slider(CompressionLevel::clamped(9));
        assert_eq!(before.chars().count(), 9);
        assert!(after.is_empty());
    }

    #[test]
    fn test_render_shows_name_and_level() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        ArchiveHeader::new("photos.zip", CompressionLevel::clamped(0)).render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..60u16)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).contains("(none)"));
        assert!(row(1).contains("photos.zip"));
        assert!(row(2).contains("0 (store)"));
    }
}
