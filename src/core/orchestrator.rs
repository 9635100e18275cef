//! 압축 작업 오케스트레이터
//!
//! 한 번에 하나의 압축 작업만 실행하는 상태 기계.
//!
//! ```text
//! Idle --start--> Running --완료/실패--> Settling --reset_delay 경과--> Idle
//! ```
//!
//! 압축은 tokio blocking 태스크에서 실행되고, 진행률과 최종 결과는
//! 채널을 통해 받은 순서대로 반영된다. 취소는 지원하지 않는다.

use crate::models::{CompressionLevel, Listing, Notification, OperationProgress};
use crate::system::{ArchiveBuildRequest, ArchiveBuilder, ArchiveProgressEvent, ArchiveSink};
use crate::utils::error::{BokslZipError, Result, ValidationError};
use crate::utils::formatter::{format_file_size, pluralize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

/// 작업 진행 중 표시할 수 있는 최대 진행률
const MAX_IN_FLIGHT_PERCENT: u8 = 99;

/// 오케스트레이터 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    /// 대기 (새 작업 시작 가능)
    Idle,
    /// 압축 진행 중
    Running,
    /// 완료/실패 후 진행 표시 유지 중 (`until` 이후 Idle)
    Settling { until: Instant },
}

/// 성공한 작업 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub saved_path: PathBuf,
    pub files: usize,
    pub archive_bytes: u64,
}

enum WorkerEvent {
    Progress(ArchiveProgressEvent),
    Finished(Result<ArchiveOutcome>),
}

struct RunningArchive {
    events_rx: UnboundedReceiver<WorkerEvent>,
    file_name: String,
    started: Instant,
}

pub struct Orchestrator {
    builder: Arc<dyn ArchiveBuilder>,
    sink: Arc<dyn ArchiveSink>,
    reset_delay: Duration,
    state: OrchestratorState,
    progress: OperationProgress,
    running: Option<RunningArchive>,
    last_outcome: Option<ArchiveOutcome>,
}

impl Orchestrator {
    pub fn new(
        builder: Arc<dyn ArchiveBuilder>,
        sink: Arc<dyn ArchiveSink>,
        reset_delay: Duration,
    ) -> Self {
        Self {
            builder,
            sink,
            reset_delay,
            state: OrchestratorState::Idle,
            progress: OperationProgress::default(),
            running: None,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == OrchestratorState::Idle
    }

    pub fn is_running(&self) -> bool {
        self.state == OrchestratorState::Running
    }

    pub fn progress(&self) -> &OperationProgress {
        &self.progress
    }

    pub fn last_outcome(&self) -> Option<&ArchiveOutcome> {
        self.last_outcome.as_ref()
    }

    /// 사용자가 입력한 이름으로 저장 파일 이름 결정
    ///
    /// 앞뒤 공백 제거, 끝의 `.zip`은 한 번만 붙인다. 경로 구분자는 허용하지 않는다.
    pub fn archive_file_name(archive_name: &str) -> std::result::Result<String, ValidationError> {
        let trimmed = archive_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyArchiveName);
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            return Err(ValidationError::InvalidArchiveName(trimmed.to_string()));
        }

        let stem = if trimmed.to_ascii_lowercase().ends_with(".zip") {
            trimmed[..trimmed.len() - 4].trim_end()
        } else {
            trimmed
        };
        if stem.is_empty() {
            return Err(ValidationError::EmptyArchiveName);
        }
        Ok(format!("{}.zip", stem))
    }

    /// 압축 작업 시작
    ///
    /// 진행 중(또는 초기화 대기 중)이면 `Busy`, 선택이 없거나 이름이 비어 있으면
    /// `Validation` 오류를 돌려주며 아무 작업도 시작하지 않는다.
    pub fn start(
        &mut self,
        listing: &Listing,
        archive_name: &str,
        level: CompressionLevel,
    ) -> Result<()> {
        if !self.is_idle() {
            tracing::warn!(state = ?self.state, "Archive request refused: operation in progress");
            return Err(BokslZipError::Busy);
        }
        if !listing.has_selection() {
            tracing::warn!("Archive request refused: empty selection");
            return Err(ValidationError::EmptySelection.into());
        }
        let file_name = Self::archive_file_name(archive_name).inspect_err(|err| {
            tracing::warn!(%err, "Archive request refused: invalid name");
        })?;

        let request = ArchiveBuildRequest::from_listing(listing, level);
        tracing::info!(
            file_name = %file_name,
            files = request.items.len(),
            bytes = request.total_bytes(),
            level = level.value(),
            "Archive operation started"
        );

        let (events_tx, events_rx) = mpsc::unbounded_channel::<WorkerEvent>();
        let builder = Arc::clone(&self.builder);
        let sink = Arc::clone(&self.sink);
        let worker_file_name = file_name.clone();

        tokio::task::spawn_blocking(move || {
            let progress_tx = events_tx.clone();
            let result = builder
                .build(&request, &mut |event| {
                    let _ = progress_tx.send(WorkerEvent::Progress(event));
                })
                .and_then(|bytes| {
                    let saved_path = sink.save(&bytes, &worker_file_name)?;
                    Ok(ArchiveOutcome {
                        saved_path,
                        files: request.items.len(),
                        archive_bytes: bytes.len() as u64,
                    })
                });
            let _ = events_tx.send(WorkerEvent::Finished(result));
        });

        self.progress = OperationProgress::default();
        self.last_outcome = None;
        self.running = Some(RunningArchive {
            events_rx,
            file_name,
            started: Instant::now(),
        });
        self.state = OrchestratorState::Running;
        Ok(())
    }

    /// 받은 이벤트 반영 및 시간 기반 상태 전이 (UI 틱마다 호출)
    ///
    /// 작업이 끝난 틱에 알림을 돌려준다.
    pub fn poll(&mut self, now: Instant) -> Option<Notification> {
        match self.state {
            OrchestratorState::Idle => None,
            OrchestratorState::Settling { until } => {
                if now >= until {
                    self.state = OrchestratorState::Idle;
                    self.progress = OperationProgress::default();
                }
                None
            }
            OrchestratorState::Running => loop {
                let Some(running) = self.running.as_mut() else {
                    self.state = OrchestratorState::Idle;
                    return None;
                };
                let event = match running.events_rx.try_recv() {
                    Ok(event) => event,
                    Err(TryRecvError::Empty) => return None,
                    Err(TryRecvError::Disconnected) => return Some(self.finish_without_result(now)),
                };
                if let Some(notification) = self.apply_event(event, now) {
                    return Some(notification);
                }
            },
        }
    }

    /// 진행 중인 작업이 끝날 때까지 대기 (배치 모드용)
    pub async fn finished(&mut self) -> Option<Notification> {
        loop {
            let running = self.running.as_mut()?;
            let event = running.events_rx.recv().await;
            let now = Instant::now();
            let notification = match event {
                Some(event) => self.apply_event(event, now),
                None => Some(self.finish_without_result(now)),
            };
            if notification.is_some() {
                return notification;
            }
        }
    }

    fn apply_event(&mut self, event: WorkerEvent, now: Instant) -> Option<Notification> {
        match event {
            WorkerEvent::Progress(event) => {
                self.progress.current_file = event.current_file;
                self.progress.files_completed = event.files_completed;
                self.progress.total_files = event.total_files;
                self.progress.bytes_processed = event.bytes_processed;
                self.progress.total_bytes = event.total_bytes;
                // 100은 저장까지 끝난 뒤 finish에서만
                let percent = self.progress.computed_percentage().min(MAX_IN_FLIGHT_PERCENT);
                self.progress.advance_to(percent);
                None
            }
            WorkerEvent::Finished(result) => Some(self.finish(result, now)),
        }
    }

    fn finish(&mut self, result: Result<ArchiveOutcome>, now: Instant) -> Notification {
        let running = self.running.take();
        let elapsed = running
            .as_ref()
            .map(|r| r.started.elapsed())
            .unwrap_or_default();
        let file_name = running.map(|r| r.file_name).unwrap_or_default();
        self.state = OrchestratorState::Settling {
            until: now + self.reset_delay,
        };

        match result {
            Ok(outcome) => {
                self.progress.complete();
                tracing::info!(
                    path = %outcome.saved_path.display(),
                    files = outcome.files,
                    archive_bytes = outcome.archive_bytes,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Archive operation completed"
                );
                let message = format!(
                    "Archive saved: {} ({}, {})",
                    outcome.saved_path.display(),
                    pluralize(outcome.files, "file", "files"),
                    format_file_size(outcome.archive_bytes)
                );
                self.last_outcome = Some(outcome);
                Notification::success(message)
            }
            Err(err) => {
                tracing::error!(file_name = %file_name, error = %err, "Archive operation failed");
                Notification::failure(format!("Failed to create {}.", file_name))
            }
        }
    }

    /// 결과 없이 작업 스레드가 사라진 경우 (패닉)
    fn finish_without_result(&mut self, now: Instant) -> Notification {
        self.finish(
            Err(BokslZipError::ArchiveCreateFailed {
                path: PathBuf::from("archive"),
                reason: "Archive worker stopped unexpectedly".to_string(),
            }),
            now,
        )
    }
}
