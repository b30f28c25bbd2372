//! # Data Transfer Objects
//!
//! レイヤー間で受け渡すデータ構造
//!
//! ## DTO
//!
//! - **UploadedFile**: multipartで受信した1ファイル分の内容

pub mod uploaded_file;
