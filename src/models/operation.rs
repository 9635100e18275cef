//! 압축 작업 모델
//!
//! 압축 레벨, 진행률, 사용자 알림 정의

use std::fmt;

/// 압축 레벨 (0 = 가장 빠름/압축 없음, 9 = 가장 작음/느림)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    pub const MAX: u8 = 9;
    pub const DEFAULT: u8 = 6;

    /// 0-9 범위 밖이면 None
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(Self(level))
    }

    /// 범위 밖 값은 경계로 고정
    pub fn clamped(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn increase(self) -> Self {
        Self::clamped(self.0.saturating_add(1))
    }

    pub fn decrease(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// 압축 없이 저장하는 레벨인지
    pub fn is_store(self) -> bool {
        self.0 == 0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 작업 진행 상태
#[derive(Debug, Clone, Default)]
pub struct OperationProgress {
    /// 현재 처리 중인 파일
    pub current_file: String,
    /// 완료된 파일 수
    pub files_completed: usize,
    /// 전체 파일 수
    pub total_files: usize,
    /// 처리된 바이트 수
    pub bytes_processed: u64,
    /// 전체 바이트 수
    pub total_bytes: u64,
    /// 화면에 표시되는 진행률 (감소하지 않음)
    percent: u8,
}

impl OperationProgress {

    /// 바이트 기준 진행률 계산 (0-100), 바이트가 없으면 파일 수 기준
    pub fn computed_percentage(&self) -> u8 {
        let ratio = if self.total_bytes == 0 {
            if self.total_files == 0 {
                return 100;
            }
            self.files_completed as f64 / self.total_files as f64
        } else {
            self.bytes_processed as f64 / self.total_bytes as f64
        };
        (ratio * 100.0).clamp(0.0, 100.0) as u8
    }

    /// 표시용 진행률
    pub fn percentage(&self) -> u8 {
        self.percent
    }

    /// 새 진행률 반영 (이전 값보다 작으면 무시)
    pub fn advance_to(&mut self, percent: u8) {
        self.percent = self.percent.max(percent.min(100));
    }

    pub fn complete(&mut self) {
        self.percent = 100;
    }
}

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
    Validation,
}

/// 사용자 알림 (표시 전용)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Failure,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Validation,
            message: message.into(),
        }
    }
}
