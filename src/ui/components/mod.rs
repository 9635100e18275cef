// UI Components
pub mod command_bar;
pub mod dialog;
pub mod header;
pub mod progress;
pub mod selection_list;
pub mod status_bar;
pub mod text_input;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use dialog::{Dialog, DialogKind, InputPurpose};
pub use header::ArchiveHeader;
pub use progress::ProgressLine;
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
pub use warning::WarningScreen;
