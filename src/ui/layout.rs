// Layout system - 반응형 레이아웃 시스템
//
// 위에서 아래로: 헤더(폴더/이름/레벨) | 선택 목록 | 진행률 | 상태바 | 커맨드바
// 최소 크기보다 작으면 경고 화면을 표시한다.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;
/// 헤더 높이 (폴더, 압축 파일 이름, 압축 레벨)
pub const HEADER_HEIGHT: u16 = 3;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    pub header: Rect,
    pub list: Rect,
    pub progress: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // 헤더
                Constraint::Min(3),                // 선택 목록
                Constraint::Length(1),             // 진행률
                Constraint::Length(1),             // 상태바
                Constraint::Length(1),             // 커맨드바
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            list: chunks[1],
            progress: chunks[2],
            status_bar: chunks[3],
            command_bar: chunks[4],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 목록에 보이는 행 수 (테두리 제외)
    pub fn list_page_size(&self) -> usize {
        self.areas.list.height.saturating_sub(2).max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(40, 12), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 11), LayoutMode::TooSmall);
    }

    #[test]
    fn test_areas_stack_vertically() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30));
        let areas = manager.areas();

        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.progress.height, 1);
        assert_eq!(areas.command_bar.y, 29);
        assert_eq!(areas.list.height, 30 - HEADER_HEIGHT - 3);
        assert_eq!(manager.list_page_size(), (30 - HEADER_HEIGHT - 3 - 2) as usize);
    }

    #[test]
    fn test_too_small_uses_warning_area() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 10));
        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
    }
}
