//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod fs_result_repository;
pub mod fs_workspace_repository;
pub mod image_montage_repository;
