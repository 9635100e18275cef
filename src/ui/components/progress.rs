// Progress component - 압축 진행률 게이지 (1줄)

use crate::models::OperationProgress;
use crate::ui::Theme;
use crate::utils::path_display::truncate_middle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Gauge, Widget},
};

pub struct ProgressLine<'a> {
    progress: &'a OperationProgress,
    /// Running/Settling 중에만 게이지를 그린다
    active: bool,
    filled_color: Color,
    unfilled_color: Color,
    fg_color: Color,
}

impl<'a> ProgressLine<'a> {
    pub fn new(progress: &'a OperationProgress) -> Self {
        Self {
            progress,
            active: false,
            filled_color: Color::Rgb(0, 120, 212),
            unfilled_color: Color::Rgb(60, 60, 60),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.filled_color = theme.progress_filled.to_color();
        self.unfilled_color = theme.progress_unfilled.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self
    }

    fn label(&self, width: usize) -> String {
        let percent = self.progress.percentage();
        if self.progress.current_file.is_empty() || percent >= 100 {
            return format!("{}%", percent);
        }
        let prefix = format!("{}% ", percent);
        let file = truncate_middle(
            &self.progress.current_file,
            width.saturating_sub(prefix.len() + 2),
        );
        format!("{}{}", prefix, file)
    }
}

impl Widget for ProgressLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.active {
            buf.set_style(area, Style::default().bg(self.unfilled_color));
            return;
        }

        let percent = self.progress.percentage();
        Gauge::default()
            .ratio(f64::from(percent) / 100.0)
            .gauge_style(
                Style::default()
                    .fg(self.filled_color)
                    .bg(self.unfilled_color),
            )
            .label(self.label(area.width as usize))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_includes_current_file() {
        let mut progress = OperationProgress::default();
        progress.current_file = "docs/a.txt".to_string();
        progress.advance_to(40);

        assert_eq!(ProgressLine::new(&progress).label(80), "40% docs/a.txt");
    }

    #[test]
    fn test_label_when_complete() {
        let mut progress = OperationProgress::default();
        progress.current_file = "a.txt".to_string();
        progress.complete();

        assert_eq!(ProgressLine::new(&progress).label(80), "100%");
    }
}
