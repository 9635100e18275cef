//! 헤드리스 모드 (`--batch`)
//!
//! 폴더 전체를 선택한 뒤 `--exclude` 항목을 해제하고, TUI와 같은
//! 오케스트레이터로 압축해 저장 경로를 돌려준다.

use crate::config::Config;
use crate::core::orchestrator::Orchestrator;
use crate::models::{apply_toggle, build_listing, select_all, Listing, NotificationLevel};
use crate::system::{scan_folder, DirectorySink, ScanOptions, ZipArchiveBuilder};
use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// `--exclude` 경로를 선택 해제 (디렉토리는 하위 전체)
///
/// 목록에 없는 경로는 오류. 이미 상위 디렉토리로 해제된 항목은 그대로 둔다.
pub fn apply_excludes(listing: Listing, excludes: &[String]) -> Result<Listing> {
    excludes.iter().try_fold(listing, |listing, raw| {
        let path = raw.trim().trim_end_matches('/');
        let index = listing
            .position(path)
            .ok_or_else(|| anyhow!("--exclude '{}' does not match any listed entry", raw))?;
        let already_cleared = listing.get(index).is_some_and(|entry| !entry.selected);
        Ok(if already_cleared {
            listing
        } else {
            apply_toggle(&listing, index)
        })
    })
}

/// 폴더를 스캔해 압축하고 저장된 경로를 반환
pub async fn run(
    folder: &Path,
    archive_name: Option<&str>,
    excludes: &[String],
    config: &Config,
) -> Result<PathBuf> {
    let options = ScanOptions {
        skip_hidden: config.scan.skip_hidden,
    };
    let files = scan_folder(folder, options)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    let listing = apply_excludes(select_all(&build_listing(&files), true), excludes)?;

    let name = match archive_name {
        Some(name) => name.to_string(),
        None => folder
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| config.archive.default_name.clone()),
    };

    let mut orchestrator = Orchestrator::new(
        Arc::new(ZipArchiveBuilder),
        Arc::new(DirectorySink::new(config.output_dir())),
        Duration::ZERO,
    );
    orchestrator.start(&listing, &name, config.compression_level())?;

    let notification = orchestrator
        .finished()
        .await
        .context("Archive worker produced no result")?;
    if notification.level != NotificationLevel::Success {
        bail!("{}", notification.message);
    }

    orchestrator
        .last_outcome()
        .map(|outcome| outcome.saved_path.clone())
        .context("Archive finished without a saved path")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceFile;
    use std::fs;
    use tempfile::tempdir;

    fn sample_listing() -> Listing {
        let files = [
            SourceFile::new("root/a.txt", PathBuf::from("/x/a.txt"), 1),
            SourceFile::new("root/raw/b.raw", PathBuf::from("/x/raw/b.raw"), 2),
            SourceFile::new("root/raw/c.raw", PathBuf::from("/x/raw/c.raw"), 3),
        ];
        select_all(&build_listing(&files), true)
    }

    #[test]
    fn test_exclude_directory_cascades() {
        let listing = apply_excludes(sample_listing(), &["root/raw/".to_string()]).expect("exclude");
        let selected: Vec<&str> = listing.selected_files().map(|e| e.path.as_str()).collect();
        assert_eq!(selected, vec!["root/a.txt"]);
    }

    #[test]
    fn test_exclude_inside_cleared_directory_is_kept_cleared() {
        let excludes = ["root/raw".to_string(), "root/raw/b.raw".to_string()];
        let listing = apply_excludes(sample_listing(), &excludes).expect("exclude");
        assert_eq!(listing.selected_count(), 1);
    }

    #[test]
    fn test_unknown_exclude_is_an_error() {
        assert!(apply_excludes(sample_listing(), &["root/nope".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_run_writes_archive_without_excluded_files() {
        let temp = tempdir().expect("create tempdir");
        let folder = temp.path().join("photos");
        fs::create_dir_all(folder.join("raw")).expect("create dirs");
        fs::write(folder.join("a.jpg"), b"jpeg").expect("write file");
        fs::write(folder.join("raw").join("b.raw"), b"raw").expect("write file");

        let mut config = Config::default();
        config.archive.output_dir = Some(temp.path().join("out"));

        let saved = run(&folder, None, &["photos/raw".to_string()], &config)
            .await
            .expect("batch run");
        assert_eq!(saved, temp.path().join("out").join("photos.zip"));

        let file = fs::File::open(&saved).expect("open archive");
        let archive = zip::ZipArchive::new(file).expect("read archive");
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names, vec!["photos/a.jpg"]);
    }

    #[tokio::test]
    async fn test_run_with_everything_excluded_fails_validation() {
        let temp = tempdir().expect("create tempdir");
        let folder = temp.path().join("docs");
        fs::create_dir_all(&folder).expect("create dir");
        fs::write(folder.join("a.txt"), b"a").expect("write file");

        let mut config = Config::default();
        config.archive.output_dir = Some(temp.path().join("out"));

        let err = run(&folder, None, &["docs".to_string()], &config)
            .await
            .expect_err("nothing selected");
        assert!(err.to_string().contains("No files selected"));
    }
}
