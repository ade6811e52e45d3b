pub mod backup_file;
pub mod report;
pub mod session;
pub mod shot;

pub use backup_file::BackupFile;
pub use report::{ScanReport, ShotReport};
pub use session::Session;
pub use shot::Shot;
