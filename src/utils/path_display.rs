use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const PATH_ELLIPSIS: &str = "/...";

/// 문자열을 최대 너비에 맞춰 중간 생략한다.
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width < 5 {
        return width_prefix(text, max_width);
    }

    let half = (max_width - ELLIPSIS.width()) / 2;
    [width_prefix(text, half), ELLIPSIS.to_string(), width_suffix(text, half)].concat()
}

/// 선택한 폴더 경로를 목록 제목 너비에 맞춰 축약한다.
///
/// 홈 디렉토리는 `~`로 줄이고, 그래도 길면 첫 구간과 뒤쪽 구간만 남겨
/// `/srv/.../photos/2024` 형태로 만든다.
pub fn truncate_folder(path: &Path, max_width: usize) -> String {
    let display = shorten_home(path);
    if display.width() <= max_width {
        return display;
    }

    let segments: Vec<&str> = display.split('/').filter(|s| !s.is_empty()).collect();
    let head = match display.chars().next() {
        Some('~') => "~".to_string(),
        Some('/') => format!("/{}", segments.first().copied().unwrap_or_default()),
        _ => segments.first().copied().unwrap_or_default().to_string(),
    };
    let budget = max_width.saturating_sub(head.width() + PATH_ELLIPSIS.width());
    if segments.len() <= 2 || budget == 0 {
        return ellipsis_prefix(&display, max_width);
    }

    // 뒤에서부터 들어가는 만큼 구간 유지 (첫 구간은 head가 대신함)
    let mut tail: Vec<&str> = Vec::new();
    let mut used = 0;
    for segment in segments[1..].iter().rev() {
        used += segment.width() + 1;
        if used > budget {
            break;
        }
        tail.push(segment);
    }
    if tail.is_empty() {
        return ellipsis_prefix(&display, max_width);
    }
    tail.reverse();

    format!("{}{}/{}", head, PATH_ELLIPSIS, tail.join("/"))
}

/// 표시 너비 기준 오른쪽 공백 채우기 (넘치면 중간 생략)
pub fn fit_width(text: &str, width: usize) -> String {
    let fitted = truncate_middle(text, width);
    let pad = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(pad))
}

fn shorten_home(path: &Path) -> String {
    let relative = dirs::home_dir().and_then(|home| {
        path.strip_prefix(home)
            .ok()
            .map(|rest| rest.to_string_lossy().to_string())
    });
    match relative {
        Some(rest) if rest.is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest),
        None => path.to_string_lossy().to_string(),
    }
}

/// 앞부분을 `...`로 바꿔 뒤쪽을 남긴다.
fn ellipsis_prefix(text: &str, max_width: usize) -> String {
    if max_width <= ELLIPSIS.width() {
        return width_prefix(text, max_width);
    }
    format!("{}{}", ELLIPSIS, width_suffix(text, max_width - ELLIPSIS.width()))
}

/// 누적 표시 너비가 `max_width`를 넘기 전까지의 문자 수
fn fitting_chars(chars: impl Iterator<Item = char>, max_width: usize) -> usize {
    let mut width = 0;
    chars
        .take_while(|ch| {
            width += UnicodeWidthChar::width(*ch).unwrap_or(1);
            width <= max_width
        })
        .count()
}

fn width_prefix(text: &str, max_width: usize) -> String {
    let count = fitting_chars(text.chars(), max_width);
    text.chars().take(count).collect()
}

fn width_suffix(text: &str, max_width: usize) -> String {
    let count = fitting_chars(text.chars().rev(), max_width);
    let skip = text.chars().count() - count;
    text.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("verylongstring", 10), "ver...ing");
        assert_eq!(truncate_middle("verylongstring", 4), "very");
        assert_eq!(truncate_middle("abc", 0), "");
    }

    #[test]
    fn test_truncate_middle_wide_chars() {
        let shortened = truncate_middle("사진첩_2024_여름휴가_바다", 14);
        assert!(shortened.contains(ELLIPSIS));
        assert!(shortened.width() <= 14);
    }

    #[test]
    fn test_truncate_folder_short() {
        assert_eq!(truncate_folder(Path::new("/tmp/docs"), 20), "/tmp/docs");
    }

    #[test]
    fn test_truncate_folder_long() {
        let path = Path::new("/srv/backup/projects/bokslzip/fixtures/photos/2024/summer");
        let truncated = truncate_folder(path, 30);
        assert_eq!(truncated, "/srv/.../photos/2024/summer");
    }

    #[test]
    fn test_fit_width_pads_and_truncates() {
        assert_eq!(fit_width("ab", 4), "ab  ");
        assert_eq!(fit_width("verylongstring", 10).width(), 10);
    }
}
