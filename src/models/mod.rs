// Data Models
pub mod entry;
pub mod listing;
pub mod operation;

pub use entry::{Entry, SourceFile};
pub use listing::{apply_toggle, build_listing, select_all, Listing};
pub use operation::{CompressionLevel, Notification, NotificationLevel, OperationProgress};
