//! 완성된 압축 파일 저장

use crate::utils::error::{BokslZipError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// 완성된 압축 파일 바이트를 사용자 환경으로 전달
pub trait ArchiveSink: Send + Sync {
    /// 저장된 최종 경로 반환
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf>;
}

/// 지정한 디렉토리에 파일로 저장
///
/// 같은 이름이 있으면 `name_(1).zip`, `name_(2).zip` ... 순으로 비어 있는 이름을 고른다.
/// 임시 파일(`.part`)에 쓴 뒤 이름을 바꾸므로 최종 이름으로 불완전한 파일이 보이지 않는다.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArchiveSink for DirectorySink {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| BokslZipError::SaveFailed {
            path: self.dir.clone(),
            source,
        })?;

        let target = next_unique_archive_path(&self.dir, file_name);
        let mut part_name = target.as_os_str().to_owned();
        part_name.push(".part");
        let part = PathBuf::from(part_name);

        if let Err(source) = fs::write(&part, bytes) {
            let _ = fs::remove_file(&part);
            return Err(BokslZipError::SaveFailed {
                path: target,
                source,
            });
        }
        if let Err(source) = fs::rename(&part, &target) {
            let _ = fs::remove_file(&part);
            return Err(BokslZipError::SaveFailed {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), bytes = bytes.len(), "Archive saved");
        Ok(target)
    }
}

/// `base_dir` 안에서 아직 없는 파일 경로 선택
pub fn next_unique_archive_path(base_dir: &Path, desired_filename: &str) -> PathBuf {
    let desired = Path::new(desired_filename);
    let stem = desired
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("archive");
    let extension = desired.extension().and_then(OsStr::to_str);

    let make_name = |index: usize| -> String {
        let base = if index == 0 {
            stem.to_string()
        } else {
            format!("{}_({})", stem, index)
        };
        match extension {
            Some(ext) if !ext.is_empty() => format!("{}.{}", base, ext),
            _ => base,
        }
    };

    let mut index = 0usize;
    loop {
        let candidate = base_dir.join(make_name(index));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_writes_bytes() {
        let temp = tempdir().expect("create tempdir");
        let sink = DirectorySink::new(temp.path().join("out"));

        let saved = sink.save(b"PK-bytes", "backup.zip").expect("save archive");
        assert_eq!(saved, temp.path().join("out").join("backup.zip"));
        assert_eq!(fs::read(&saved).expect("read saved"), b"PK-bytes");
        assert!(!temp.path().join("out").join("backup.zip.part").exists());
    }

    #[test]
    fn test_save_does_not_overwrite_existing() {
        let temp = tempdir().expect("create tempdir");
        fs::write(temp.path().join("backup.zip"), b"old").expect("write existing");
        let sink = DirectorySink::new(temp.path());

        let first = sink.save(b"new", "backup.zip").expect("save archive");
        assert_eq!(first, temp.path().join("backup_(1).zip"));
        let second = sink.save(b"newer", "backup.zip").expect("save archive");
        assert_eq!(second, temp.path().join("backup_(2).zip"));
        assert_eq!(fs::read(temp.path().join("backup.zip")).expect("read"), b"old");
    }

    #[test]
    fn test_next_unique_archive_path_without_extension() {
        let temp = tempdir().expect("create tempdir");
        fs::write(temp.path().join("plain"), b"x").expect("write existing");
        assert_eq!(
            next_unique_archive_path(temp.path(), "plain"),
            temp.path().join("plain_(1)")
        );
    }
}
