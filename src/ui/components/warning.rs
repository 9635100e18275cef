// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 목록 대신 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    current_size: (u16, u16),
    /// 압축 진행 중이면 진행률을 함께 표시
    progress: Option<u8>,
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    error_color: Color,
    success_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            progress: None,
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
            success_color: Color::Green,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn progress(mut self, progress: Option<u8>) -> Self {
        self.progress = progress;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Terminal Too Small", bold(self.warning_color))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Style::default().fg(self.fg_color)),
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    bold(self.error_color),
                ),
            ]),
            Line::from(vec![
                Span::styled("Required: ", Style::default().fg(self.fg_color)),
                Span::styled(format!("{}x{}", MIN_WIDTH, MIN_HEIGHT), bold(self.success_color)),
            ]),
        ];

        if let Some(percent) = self.progress {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Zipping... {}%", percent),
                Style::default().fg(self.fg_color),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Resize the terminal or press q to quit",
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::DIM),
        )));
        lines
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_lines_include_sizes() {
        let screen = WarningScreen::new().current_size(30, 10);
        let text: Vec<String> = screen.lines().iter().map(|l| l.to_string()).collect();

        assert!(text.iter().any(|l| l == "Current: 30x10"));
        assert!(text.iter().any(|l| l == &format!("Required: {}x{}", MIN_WIDTH, MIN_HEIGHT)));
        assert!(!text.iter().any(|l| l.starts_with("Zipping")));
    }

    #[test]
    fn test_warning_shows_progress_while_running() {
        let screen = WarningScreen::new().current_size(30, 10).progress(Some(42));
        let text: Vec<String> = screen.lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l == "Zipping... 42%"));
    }
}
