use super::*;

impl App {
    // === 패널 탐색 ===

    /// 활성 패널과 파일 시스템을 동시에 빌림 (필드 단위 분리 차용)
    fn active_panel_with_fs(&mut self) -> (&mut PanelState, &FileSystem) {
        let panel = match self.layout.active_panel() {
            ActivePanel::Left => &mut self.left_panel,
            ActivePanel::Right => &mut self.right_panel,
        };
        (panel, &self.filesystem)
    }

    /// 선택 이동 (delta만큼, 경계에서 멈춤)
    pub fn move_selection(&mut self, delta: isize) {
        let panel = self.active_panel_state_mut();
        if panel.entries.is_empty() {
            return;
        }

        let len = panel.entries.len() as isize;
        let next = (panel.selected_index as isize + delta).clamp(0, len - 1);
        panel.selected_index = next as usize;
    }

    /// 맨 위로
    pub fn go_to_top(&mut self) {
        self.active_panel_state_mut().selected_index = 0;
    }

    /// 맨 아래로
    pub fn go_to_bottom(&mut self) {
        let panel = self.active_panel_state_mut();
        if !panel.entries.is_empty() {
            panel.selected_index = panel.entries.len() - 1;
        }
    }

    /// 상위 디렉토리로 이동
    pub fn go_to_parent(&mut self) {
        let current = self.active_panel_state().current_path.clone();
        let Some(parent) = current.parent().map(|p| p.to_path_buf()) else {
            return;
        };

        let (panel, filesystem) = self.active_panel_with_fs();
        if panel.change_directory(parent, filesystem).is_ok() {
            // 이동 전 디렉토리에 커서 위치
            if let Some(index) = panel.entries.iter().position(|e| e.path == current) {
                panel.selected_index = index;
            }
        }
    }

    /// 선택 항목 열기 (디렉토리만)
    pub fn enter_selected(&mut self) {
        let Some(entry) = self.active_panel_state().selected_entry() else {
            return;
        };
        if !entry.is_directory() {
            return;
        }

        let target = entry.path.clone();
        let (panel, filesystem) = self.active_panel_with_fs();
        let _ = panel.change_directory(target, filesystem);
    }

    /// 마킹 토글 후 아래로 이동
    pub fn toggle_mark_and_move_down(&mut self) {
        self.active_panel_state_mut().toggle_mark();
        self.move_selection(1);
    }

    /// 양쪽 패널 새로고침
    pub fn refresh_panels(&mut self) {
        let _ = self.left_panel.refresh(&self.filesystem);
        let _ = self.right_panel.refresh(&self.filesystem);
    }

    /// 숨김 파일 표시 토글
    pub fn toggle_hidden(&mut self) {
        let (panel, filesystem) = self.active_panel_with_fs();
        panel.show_hidden = !panel.show_hidden;
        let _ = panel.refresh(filesystem);
    }
}
