use std::path::PathBuf;

/// 엔트리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 파일 경로로부터 합성된 디렉토리 (내용 없음)
    Directory,
    /// 사용자가 고른 실제 파일
    File,
}

/// 선택 목록의 한 행
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// '/' 구분 논리 경로 (목록 내 유일)
    pub path: String,
    /// 엔트리 종류
    pub kind: EntryKind,
    /// 체크 여부
    pub selected: bool,
    /// 바이트 단위 크기 (디렉토리는 0)
    pub size: u64,
    /// 파일 내용을 읽어올 위치 (디렉토리는 None)
    pub source: Option<PathBuf>,
}

impl Entry {
    /// 합성 디렉토리 엔트리 생성
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            selected: true,
            size: 0,
            source: None,
        }
    }

    /// 파일 엔트리 생성
    pub fn file(path: impl Into<String>, size: u64, source: PathBuf) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            selected: true,
            size,
            source: Some(source),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// 경로 깊이 (렌더링 시 들여쓰기 단계)
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// 마지막 경로 요소
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// `dir_path/` 로 시작하는지 (자기 자신은 제외)
    pub fn is_descendant_of(&self, dir_path: &str) -> bool {
        self.path
            .strip_prefix(dir_path)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// 폴더 선택 결과로 들어오는 파일 한 개
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 선택 루트 기준 상대 경로 (파일명만 있을 수도 있음)
    pub relative_path: String,
    /// 실제 파일 위치
    pub source: PathBuf,
    /// 바이트 단위 크기
    pub size: u64,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, source: PathBuf, size: u64) -> Self {
        Self {
            relative_path: relative_path.into(),
            source,
            size,
        }
    }
}

/// 상대 경로 정규화: `\` -> `/`, 빈 요소와 `.` 제거
///
/// ```text
/// "./docs\\a.txt" -> "docs/a.txt"
/// "a//b/"         -> "a/b"
/// ```
pub fn normalize_relative_path(raw: &str) -> String {
    raw.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}
