//! # Domain Services
//!
//! 複数のエンティティにまたがる純粋なビジネスルール
//!
//! ## サービス
//!
//! - **grid_layout**: グリッド配置の座標計算
//! - **naming**: ファイル名のサニタイズと命名規則

pub mod grid_layout;
pub mod naming;
