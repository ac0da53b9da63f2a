pub mod file_renamer;

pub use file_renamer::FileRenamer;
