// System Layer
pub mod archive;
pub mod sink;
pub mod source;

pub use archive::{ArchiveBuildRequest, ArchiveBuilder, ArchiveProgressEvent, ZipArchiveBuilder};
pub use sink::{ArchiveSink, DirectorySink};
pub use source::{scan_folder, ScanOptions};
