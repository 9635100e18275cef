//! 선택 목록 (Listing)
//!
//! 폴더 선택 결과를 디렉토리/파일 엔트리 목록으로 만들고,
//! 체크박스 토글을 새 목록을 돌려주는 순수 함수로 처리한다.

use super::entry::{normalize_relative_path, Entry, SourceFile};
use std::collections::{BTreeSet, HashSet};

/// 엔트리 목록 (디렉토리 먼저, 각 그룹 안에서는 경로 사전순)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 경로로 인덱스 찾기
    pub fn position(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// 체크된 엔트리가 하나라도 있는지 (디렉토리 포함)
    pub fn has_selection(&self) -> bool {
        self.entries.iter().any(|e| e.selected)
    }

    /// 압축 대상: 체크된 파일만 (디렉토리 제외), 목록 순서 유지
    pub fn selected_files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.selected && e.is_file())
    }

    pub fn selected_count(&self) -> usize {
        self.selected_files().count()
    }

    pub fn selected_bytes(&self) -> u64 {
        self.selected_files().map(|e| e.size).sum()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// 파일 목록으로부터 선택 목록 생성
///
/// 모든 파일 경로의 진부분 접두사(1..len-1 요소)를 모아 디렉토리 엔트리로 합성한다.
/// 빈 입력은 빈 목록이 된다. 같은 경로가 여러 번 들어오면 첫 번째만 사용한다.
pub fn build_listing(files: &[SourceFile]) -> Listing {
    let mut seen = HashSet::new();
    let mut prefixes = BTreeSet::new();
    let mut file_entries = Vec::new();

    for file in files {
        let path = normalize_relative_path(&file.relative_path);
        if path.is_empty() || !seen.insert(path.clone()) {
            continue;
        }

        let segments: Vec<&str> = path.split('/').collect();
        for count in 1..segments.len() {
            prefixes.insert(segments[..count].join("/"));
        }

        file_entries.push(Entry::file(path, file.size, file.source.clone()));
    }

    // 다른 파일의 상위 경로와 같은 파일은 디렉토리로만 남긴다 (경로 중복 금지)
    file_entries.retain(|entry| !prefixes.contains(&entry.path));
    file_entries.sort_by(|a, b| a.path.cmp(&b.path));

    let mut entries: Vec<Entry> = prefixes.into_iter().map(Entry::directory).collect();
    entries.extend(file_entries);
    Listing { entries }
}

/// `index` 엔트리의 체크 상태를 뒤집은 새 목록 반환
///
/// 디렉토리라면 하위 엔트리 전체(`path/` 접두사)를 같은 값으로 덮어쓴다.
/// 범위를 벗어난 인덱스는 변경 없이 복사본을 돌려준다.
pub fn apply_toggle(listing: &Listing, index: usize) -> Listing {
    let Some(target) = listing.get(index) else {
        return listing.clone();
    };

    let new_value = !target.selected;
    let cascade_root = target.is_directory().then(|| target.path.clone());

    let entries = listing
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let affected = i == index
                || cascade_root
                    .as_deref()
                    .is_some_and(|root| entry.is_descendant_of(root));
            if affected {
                Entry {
                    selected: new_value,
                    ..entry.clone()
                }
            } else {
                entry.clone()
            }
        })
        .collect();

    Listing { entries }
}

/// 모든 엔트리를 같은 체크 상태로 만든 새 목록 반환
pub fn select_all(listing: &Listing, selected: bool) -> Listing {
    let entries = listing
        .entries
        .iter()
        .map(|entry| Entry {
            selected,
            ..entry.clone()
        })
        .collect();
    Listing { entries }
}
