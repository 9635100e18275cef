// Selection list component - 선택 목록 컴포넌트
//
// 체크박스 + 깊이별 들여쓰기 + 크기 컬럼, 커서 하이라이트, 스크롤바

use crate::models::{Entry, Listing};
use crate::ui::Theme;
use crate::utils::formatter::format_file_size;
use crate::utils::path_display::{fit_width, truncate_folder};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use std::path::Path;

/// 크기 컬럼 너비
const SIZE_WIDTH: usize = 10;
/// 깊이 한 단계당 들여쓰기
const INDENT: &str = "  ";

/// 선택 목록 컴포넌트
pub struct SelectionList<'a> {
    listing: &'a Listing,
    /// 목록 제목에 표시할 폴더
    folder: Option<&'a Path>,
    cursor: usize,
    scroll_offset: usize,
    /// 압축 중에는 테두리를 흐리게
    dimmed: bool,
    border_color: Color,
    bg_color: Color,
    normal_color: Color,
    cursor_fg: Color,
    cursor_bg: Color,
    directory_color: Color,
    checked_color: Color,
    unchecked_color: Color,
    size_color: Color,
}

impl<'a> SelectionList<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        Self {
            listing,
            folder: None,
            cursor: 0,
            scroll_offset: 0,
            dimmed: false,
            border_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Rgb(30, 30, 30),
            normal_color: Color::Rgb(212, 212, 212),
            cursor_fg: Color::White,
            cursor_bg: Color::Rgb(38, 79, 120),
            directory_color: Color::Rgb(86, 156, 214),
            checked_color: Color::Rgb(78, 201, 176),
            unchecked_color: Color::Rgb(106, 106, 106),
            size_color: Color::Rgb(158, 158, 158),
        }
    }

    pub fn folder(mut self, folder: Option<&'a Path>) -> Self {
        self.folder = folder;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.list_border.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.normal_color = theme.file_normal.to_color();
        self.cursor_fg = theme.cursor_fg.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self.directory_color = theme.directory.to_color();
        self.checked_color = theme.checked.to_color();
        self.unchecked_color = theme.unchecked.to_color();
        self.size_color = theme.size_column.to_color();
        self
    }

    /// 한 행의 텍스트 (체크박스, 들여쓰기, 이름, 크기)
    fn row_text(entry: &Entry, width: usize) -> (String, String, String) {
        let checkbox = if entry.selected { "[x] " } else { "[ ] " }.to_string();

        let mut name = INDENT.repeat(entry.depth());
        name.push_str(entry.name());
        if entry.is_directory() {
            name.push('/');
        }

        let size = if entry.is_directory() {
            String::new()
        } else {
            format_file_size(entry.size)
        };

        let name_width = width
            .saturating_sub(checkbox.len())
            .saturating_sub(SIZE_WIDTH + 1);
        (
            checkbox,
            fit_width(&name, name_width),
            format!(" {:>width$}", size, width = SIZE_WIDTH),
        )
    }

    fn render_row(&self, entry: &Entry, is_cursor: bool, area: Rect, y: u16, buf: &mut Buffer) {
        let (checkbox, name, size) = Self::row_text(entry, area.width as usize);

        let base = if is_cursor {
            Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
        } else {
            Style::default()
        };
        let check_style = base.fg(if entry.selected {
            self.checked_color
        } else {
            self.unchecked_color
        });
        let name_style = if is_cursor {
            base.add_modifier(Modifier::BOLD)
        } else if entry.is_directory() {
            base.fg(self.directory_color)
        } else {
            base.fg(self.normal_color)
        };
        let size_style = if is_cursor { base } else { base.fg(self.size_color) };

        let line = Line::from(vec![
            Span::styled(checkbox, check_style),
            Span::styled(name, name_style),
            Span::styled(size, size_style),
        ]);
        buf.set_line(area.x, y, &line, area.width);
    }

    fn render_scrollbar(&self, inner: Rect, buf: &mut Buffer) {
        let total_items = self.listing.len();
        let track_height = inner.height as usize;
        if track_height == 0 || total_items <= track_height {
            return;
        }

        let thumb_height = (track_height * track_height / total_items).max(1);
        let max_scroll = total_items - track_height;
        let thumb_pos =
            self.scroll_offset.min(max_scroll) * (track_height - thumb_height) / max_scroll;

        let x = inner.x + inner.width - 1;
        let track_style = Style::default().fg(self.unchecked_color);
        let thumb_style = Style::default().fg(self.size_color);
        for i in 0..track_height {
            let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", thumb_style)
            } else {
                ("│", track_style)
            };
            buf.set_string(x, inner.y + i as u16, symbol, style);
        }
    }
}

impl Widget for SelectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = match self.folder {
            Some(folder) => truncate_folder(folder, (area.width as usize).saturating_sub(4)),
            None => "No folder".to_string(),
        };
        let border_style = if self.dimmed {
            Style::default()
                .fg(self.border_color)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(self.border_color)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.normal_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        if self.listing.is_empty() {
            let hint = if self.folder.is_some() {
                " (No files)"
            } else {
                " Press o to choose a folder"
            };
            buf.set_line(
                inner.x,
                inner.y,
                &Line::from(Span::styled(hint, Style::default().fg(self.unchecked_color))),
                inner.width,
            );
            return;
        }

        let has_scrollbar = self.listing.len() > inner.height as usize;
        let row_area = Rect {
            width: inner.width.saturating_sub(u16::from(has_scrollbar)),
            ..inner
        };

        let visible = self
            .listing
            .entries()
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize);
        for (row, (index, entry)) in visible.enumerate() {
            self.render_row(entry, index == self.cursor, row_area, inner.y + row as u16, buf);
        }

        if has_scrollbar {
            self.render_scrollbar(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{apply_toggle, build_listing, SourceFile};
    use std::path::PathBuf;

    fn sample_listing() -> Listing {
        build_listing(&[
            SourceFile::new("docs/a.txt", PathBuf::from("/src/docs/a.txt"), 2048),
            SourceFile::new("b.txt", PathBuf::from("/src/b.txt"), 10),
        ])
    }

    fn row_string(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_row_text_indents_by_depth() {
        let listing = sample_listing();
        let file = listing
            .get(listing.position("docs/a.txt").expect("entry"))
            .expect("entry");

        let (checkbox, name, size) = SelectionList::row_text(file, 40);
        assert_eq!(checkbox, "[x] ");
        assert!(name.starts_with("  a.txt"));
        assert_eq!(size.trim(), "2 KB");
    }

    #[test]
    fn test_row_text_marks_cleared_directory() {
        let listing = apply_toggle(&sample_listing(), 0);
        let dir = listing.get(0).expect("entry");

        let (checkbox, name, size) = SelectionList::row_text(dir, 40);
        assert_eq!(checkbox, "[ ] ");
        assert!(name.starts_with("docs/"));
        assert!(size.trim().is_empty());
    }

    #[test]
    fn test_render_shows_rows_inside_border() {
        let listing = sample_listing();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        SelectionList::new(&listing).cursor(1).render(area, &mut buf);

        assert!(row_string(&buf, 1, 40).contains("[x] docs/"));
        assert!(row_string(&buf, 2, 40).contains("[x] b.txt"));
        assert!(row_string(&buf, 3, 40).contains("[x]   a.txt"));
    }

    #[test]
    fn test_render_empty_hint() {
        let listing = Listing::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        SelectionList::new(&listing).render(area, &mut buf);

        assert!(row_string(&buf, 1, 40).contains("Press o to choose a folder"));
    }
}
