// Renderer - App 상태를 화면에 그린다

use crate::app::App;
use crate::core::actions::generate_command_bar_items;
use crate::ui::components::{
    ArchiveHeader, CommandBar, Dialog, ProgressLine, SelectionList, StatusBar, WarningScreen,
};
use crate::ui::LayoutMode;
use ratatui::Frame;

/// 프레임 렌더링 (레이아웃 갱신 포함)
pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.area();
    app.layout.update(size);

    match app.layout.mode() {
        LayoutMode::TooSmall => {
            let (width, height) = app.layout.terminal_size();
            let progress = app
                .orchestrator()
                .is_running()
                .then(|| app.orchestrator().progress().percentage());
            let warning = WarningScreen::new()
                .current_size(width, height)
                .progress(progress)
                .theme(&app.theme);
            f.render_widget(warning, app.layout.areas().warning);
        }
        LayoutMode::Normal => render_main_ui(f, app),
    }
}

fn render_main_ui(f: &mut Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = &app.theme;
    let busy = app.is_busy();

    let file_name = app.archive_file_name_display();
    let header = ArchiveHeader::new(&file_name, app.level())
        .folder(app.folder())
        .theme(theme);
    f.render_widget(header, areas.header);

    let list = SelectionList::new(app.listing())
        .folder(app.folder())
        .cursor(app.cursor())
        .scroll_offset(app.scroll_offset())
        .dimmed(busy)
        .theme(theme);
    f.render_widget(list, areas.list);

    let progress = ProgressLine::new(app.orchestrator().progress())
        .active(busy)
        .theme(theme);
    f.render_widget(progress, areas.progress);

    let listing = app.listing();
    let state_label = app.state_label();
    let status_bar = StatusBar::new()
        .file_count(listing.file_count())
        .dir_count(listing.dir_count())
        .total_bytes(listing.total_bytes())
        .selection(listing.selected_count(), listing.selected_bytes())
        .state_label(&state_label)
        .toast(app.toast())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items(busy))
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
