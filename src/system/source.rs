//! 폴더 선택 -> 파일 목록
//!
//! 선택한 폴더 아래의 일반 파일을 모두 모은다. 상대 경로는 폴더 자신의 이름으로 시작한다
//! (`photos` 선택 시 `photos/2024/a.jpg`).

use crate::models::SourceFile;
use crate::utils::error::{BokslZipError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// 폴더 스캔 옵션
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// `.`으로 시작하는 파일/디렉토리 제외
    pub skip_hidden: bool,
}

/// `root` 아래의 파일 목록 수집 (심볼릭 링크는 따라가지 않음)
pub fn scan_folder(root: &Path, options: ScanOptions) -> Result<Vec<SourceFile>> {
    let meta = fs::metadata(root).map_err(|source| BokslZipError::ScanFailed {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(BokslZipError::ScanFailed {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    // `.`이나 `..`로 끝나는 경로도 실제 폴더 이름을 접두사로 사용
    let canonical = fs::canonicalize(root).map_err(|source| BokslZipError::ScanFailed {
        path: root.to_path_buf(),
        source,
    })?;
    let prefix = canonical
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut files = Vec::new();
    collect_recursive(root, &prefix, options, &mut files)?;
    tracing::debug!(root = %root.display(), files = files.len(), "Folder scanned");
    Ok(files)
}

fn collect_recursive(
    dir: &Path,
    relative: &str,
    options: ScanOptions,
    out: &mut Vec<SourceFile>,
) -> Result<()> {
    let read_dir = fs::read_dir(dir).map_err(|source| BokslZipError::ScanFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|source| BokslZipError::ScanFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        if options.skip_hidden && name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let child_relative = if relative.is_empty() {
            name
        } else {
            format!("{}/{}", relative, name)
        };

        let meta = fs::symlink_metadata(&path).map_err(|source| BokslZipError::ScanFailed {
            path: path.clone(),
            source,
        })?;
        if meta.is_dir() {
            collect_recursive(&path, &child_relative, options, out)?;
        } else if meta.is_file() {
            out.push(SourceFile::new(child_relative, path, meta.len()));
        }
    }
    Ok(())
}
