// Text input - 한 줄 입력 버퍼
//
// cursor는 바이트 인덱스이며 항상 char 경계에 위치한다.

use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// 초기값을 넣고 커서를 끝에 둔다
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 커서 앞까지의 표시 너비
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary(self.cursor);
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary(self.cursor);
    }

    pub fn right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Ctrl+W: 커서 앞 단어 삭제 (앞쪽 구분자 포함)
    pub fn delete_prev_word(&mut self) {
        let end = self.cursor;
        let mut start = end;

        while start > 0 {
            let prev = self.prev_boundary(start);
            if !is_word_delimiter(&self.value[prev..start]) {
                break;
            }
            start = prev;
        }
        while start > 0 {
            let prev = self.prev_boundary(start);
            if is_word_delimiter(&self.value[prev..start]) {
                break;
            }
            start = prev;
        }

        self.value.replace_range(start..end, "");
        self.cursor = start;
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

fn is_word_delimiter(ch: &str) -> bool {
    ch.chars()
        .all(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '.' | '-' | '_' | ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_at_utf8_boundaries() {
        let mut input = TextInput::new("\u{AC00}\u{B098}");
        input.left();
        input.insert('\u{B2E4}');
        assert_eq!(input.value(), "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(input.cursor(), "\u{AC00}\u{B2E4}".len());
        assert_eq!(input.cursor_column(), 4);

        input.backspace();
        assert_eq!(input.value(), "\u{AC00}\u{B098}");

        input.home();
        input.delete();
        assert_eq!(input.value(), "\u{B098}");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let mut input = TextInput::new("ab");
        input.right();
        assert_eq!(input.cursor(), 2);
        input.home();
        input.left();
        assert_eq!(input.cursor(), 0);
        input.end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_prev_word() {
        let mut input = TextInput::new("/tmp/my photos/");
        input.delete_prev_word();
        assert_eq!(input.value(), "/tmp/my ");

        let mut input = TextInput::new("vacation-2024");
        input.delete_prev_word();
        assert_eq!(input.value(), "vacation-");
    }
}
