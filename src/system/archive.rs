use crate::models::{CompressionLevel, Listing};
use crate::utils::error::{BokslZipError, Result};
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use zip::write::SimpleFileOptions as ZipFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 진행률 보고 단위 (파일 내부 복사 청크)
const COPY_CHUNK_SIZE: usize = 64 * 1024;

/// zip 엔트리 크기가 이 값을 넘으면 zip64 헤더 사용
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// 압축 파일에 들어갈 항목 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveItem {
    /// 압축 파일 내부 경로
    pub archive_path: String,
    /// 내용을 읽을 원본 파일
    pub source: PathBuf,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct ArchiveBuildRequest {
    pub items: Vec<ArchiveItem>,
    pub level: CompressionLevel,
}

impl ArchiveBuildRequest {
    /// 선택된 파일만 목록 순서대로 모은다 (디렉토리는 내용이 없으므로 제외)
    pub fn from_listing(listing: &Listing, level: CompressionLevel) -> Self {
        let items = listing
            .selected_files()
            .filter_map(|entry| {
                entry.source.as_ref().map(|source| ArchiveItem {
                    archive_path: entry.path.clone(),
                    source: source.clone(),
                    size: entry.size,
                })
            })
            .collect();
        Self { items, level }
    }

    pub fn total_bytes(&self) -> u64 {
        self.items.iter().map(|i| i.size).sum()
    }
}

#[derive(Debug, Clone)]
pub struct ArchiveProgressEvent {
    pub current_file: String,
    pub files_completed: usize,
    pub total_files: usize,
    pub bytes_processed: u64,
    pub total_bytes: u64,
}

/// 압축 파일 생성기
///
/// 항목 목록과 압축 레벨을 받아 완성된 압축 파일 바이트를 돌려준다.
/// 진행 상황은 `progress` 콜백으로 순서대로 전달된다.
pub trait ArchiveBuilder: Send + Sync {
    fn build(
        &self,
        request: &ArchiveBuildRequest,
        progress: &mut dyn FnMut(ArchiveProgressEvent),
    ) -> Result<Vec<u8>>;
}

/// zip 크레이트 기반 메모리 내 zip 생성기
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveBuilder;

impl ArchiveBuilder for ZipArchiveBuilder {
    fn build(
        &self,
        request: &ArchiveBuildRequest,
        progress: &mut dyn FnMut(ArchiveProgressEvent),
    ) -> Result<Vec<u8>> {
        let total_files = request.items.len();
        let total_bytes = request.total_bytes();
        let mut files_completed = 0usize;
        let mut bytes_processed = 0u64;

        progress(ArchiveProgressEvent {
            current_file: String::new(),
            files_completed,
            total_files,
            bytes_processed,
            total_bytes,
        });

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let base_options = zip_file_options(request.level);

        for item in &request.items {
            let options = base_options.large_file(item.size >= ZIP64_THRESHOLD);
            writer
                .start_file(item.archive_path.clone(), options)
                .map_err(|e| create_failed(&item.archive_path, e))?;

            let mut src =
                File::open(&item.source).map_err(|e| BokslZipError::ArchiveCreateFailed {
                    path: item.source.clone(),
                    reason: e.to_string(),
                })?;

            let mut buf = vec![0u8; COPY_CHUNK_SIZE];
            loop {
                let read = src
                    .read(&mut buf)
                    .map_err(|e| BokslZipError::ArchiveCreateFailed {
                        path: item.source.clone(),
                        reason: e.to_string(),
                    })?;
                if read == 0 {
                    break;
                }
                writer
                    .write_all(&buf[..read])
                    .map_err(|e| create_failed(&item.archive_path, e))?;
                // 파일 크기가 스캔 이후 커졌으면 전체 크기를 넘지 않게 고정
                bytes_processed = bytes_processed.saturating_add(read as u64).min(total_bytes);
                progress(ArchiveProgressEvent {
                    current_file: item.archive_path.clone(),
                    files_completed,
                    total_files,
                    bytes_processed,
                    total_bytes,
                });
            }

            files_completed += 1;
            progress(ArchiveProgressEvent {
                current_file: item.archive_path.clone(),
                files_completed,
                total_files,
                bytes_processed,
                total_bytes,
            });
        }

        let cursor = writer
            .finish()
            .map_err(|e| create_failed("archive", e))?;

        progress(ArchiveProgressEvent {
            current_file: String::new(),
            files_completed: total_files,
            total_files,
            bytes_processed: total_bytes,
            total_bytes,
        });

        Ok(cursor.into_inner())
    }
}

/// 레벨 0은 Stored, 1-9는 Deflated(해당 레벨)
fn zip_file_options(level: CompressionLevel) -> ZipFileOptions {
    if level.is_store() {
        ZipFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        ZipFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level.value())))
    }
}

fn create_failed(name: &str, error: impl ToString) -> BokslZipError {
    BokslZipError::ArchiveCreateFailed {
        path: PathBuf::from(name),
        reason: error.to_string(),
    }
}
