//! # Montage Compositing
//!
//! imageクレートによるグリッド合成の実装

pub mod canvas;
