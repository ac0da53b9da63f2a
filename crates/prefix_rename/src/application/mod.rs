pub mod file_renamer_service;
pub mod prefix_rename_service;

pub use file_renamer_service::TokioFileRenamer;
pub use prefix_rename_service::{PrefixRenameService, RenameSummary};
