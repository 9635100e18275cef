// Formatters - 파일 크기, 개수 포맷팅

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// 1024 단위로 올라가며 소수점 둘째 자리에서 반올림하고 끝자리 0은 제거합니다.
///
/// ```text
/// format_file_size(0)         == "0 B"
/// format_file_size(1024)      == "1 KB"
/// format_file_size(1536)      == "1.5 KB"
/// format_file_size(1_048_576) == "1 MB"
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", trim_decimal(rounded), SIZE_UNITS[exponent])
}

/// 소수점 둘째 자리까지 표시하고 끝자리 0 제거 ("1.50" -> "1.5", "2.00" -> "2")
fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// 개수에 따라 단수/복수형 반환
///
/// ```text
/// pluralize(1, "file", "files") == "1 file"
/// pluralize(3, "file", "files") == "3 files"
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_format_file_size_kb() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1500), "1.46 KB");
        assert_eq!(format_file_size(2048), "2 KB");
    }

    #[test]
    fn test_format_file_size_mb_gb() {
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(3_670_016), "3.5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_largest_unit() {
        let petabyte = 1024u64.pow(5);
        assert_eq!(format_file_size(petabyte), "1024 TB");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "file", "files"), "0 files");
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(5, "dir", "dirs"), "5 dirs");
    }
}
