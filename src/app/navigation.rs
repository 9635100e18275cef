use super::*;
use crate::ui::components::dialog::help_row_count;

impl App {
    fn max_index(&self) -> usize {
        self.listing.len().saturating_sub(1)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll_offset();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.max_index() {
            self.cursor += 1;
            self.adjust_scroll_offset();
        }
    }

    pub fn move_cursor_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.layout.list_page_size());
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_page_down(&mut self) {
        self.cursor = (self.cursor + self.layout.list_page_size()).min(self.max_index());
        self.adjust_scroll_offset();
    }

    /// 맨 위로 이동 (g / Home)
    pub fn go_to_top(&mut self) {
        self.cursor = 0;
        self.adjust_scroll_offset();
    }

    /// 맨 아래로 이동 (G / End)
    pub fn go_to_bottom(&mut self) {
        self.cursor = self.max_index();
        self.adjust_scroll_offset();
    }

    /// 커서가 화면 안에 들어오도록 스크롤 조정
    pub(super) fn adjust_scroll_offset(&mut self) {
        let page = self.layout.list_page_size();
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + page {
            self.scroll_offset = self.cursor + 1 - page;
        }
        let max_scroll = self.listing.len().saturating_sub(page);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// 목록 교체 후 커서/스크롤 초기화
    pub(super) fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn dialog_help_scroll_down(&mut self) {
        let max = help_row_count().saturating_sub(1);
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = (*scroll_offset + 1).min(max);
        }
    }

    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }
}
