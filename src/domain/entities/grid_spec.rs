//! # GridSpec Value Object
//!
//! グリッド形状とスケールのバリューオブジェクト

use thiserror::Error;

/// グリッド形状の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridSpecError {
    /// 行数が1〜上限の範囲外
    #[error("rows must be between 1 and {max}", max = GridSpec::MAX_DIM)]
    InvalidRows,
    /// 列数が1〜上限の範囲外
    #[error("cols must be between 1 and {max}", max = GridSpec::MAX_DIM)]
    InvalidCols,
    /// スケールが正の有限値でない
    #[error("scale must be a positive finite number")]
    InvalidScale,
}

/// グリッド形状
///
/// 1リクエスト分のグリッド行数・列数と、各画像に適用する
/// スケール係数を保持するバリューオブジェクト
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
    scale: f32,
}

impl GridSpec {
    /// 行数・列数として受け付ける上限
    pub const MAX_DIM: u32 = 100;

    /// 新しいグリッド形状を作成
    ///
    /// # Arguments
    ///
    /// * `rows` - 行数（1以上[`Self::MAX_DIM`]以下）
    /// * `cols` - 列数（1以上[`Self::MAX_DIM`]以下）
    /// * `scale` - 各画像に適用するスケール係数（正の有限値）
    ///
    /// # Errors
    ///
    /// 行数・列数が範囲外、またはスケールが正の有限値でない場合にエラーを返す
    pub fn new(rows: u32, cols: u32, scale: f32) -> Result<Self, GridSpecError> {
        if rows == 0 || rows > Self::MAX_DIM {
            return Err(GridSpecError::InvalidRows);
        }
        if cols == 0 || cols > Self::MAX_DIM {
            return Err(GridSpecError::InvalidCols);
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GridSpecError::InvalidScale);
        }

        Ok(Self { rows, cols, scale })
    }

    /// 行数を返す
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// 列数を返す
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// スケール係数を返す
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// 1グループあたりのセル数（rows * cols）
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spec_new_valid() {
        let grid = GridSpec::new(2, 3, 1.0).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.scale(), 1.0);
    }

    #[test]
    fn test_grid_spec_zero_rows_rejected() {
        let result = GridSpec::new(0, 3, 1.0);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidRows);
    }

    #[test]
    fn test_grid_spec_zero_cols_rejected() {
        let result = GridSpec::new(2, 0, 1.0);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidCols);
    }

    #[test]
    fn test_grid_spec_rows_above_limit_rejected() {
        let result = GridSpec::new(GridSpec::MAX_DIM + 1, 3, 1.0);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidRows);
    }

    #[test]
    fn test_grid_spec_huge_cols_rejected() {
        // フォームから渡された巨大な列数はキャンバス計算に入る前に弾く
        let result = GridSpec::new(1, 50_000_000, 1.0);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidCols);
    }

    #[test]
    fn test_grid_spec_limit_dimensions_accepted() {
        let grid = GridSpec::new(GridSpec::MAX_DIM, GridSpec::MAX_DIM, 1.0).unwrap();
        assert_eq!(grid.cell_count(), 10_000);
    }

    #[test]
    fn test_grid_spec_zero_scale_rejected() {
        let result = GridSpec::new(2, 2, 0.0);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidScale);
    }

    #[test]
    fn test_grid_spec_negative_scale_rejected() {
        let result = GridSpec::new(2, 2, -0.5);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidScale);
    }

    #[test]
    fn test_grid_spec_nan_scale_rejected() {
        let result = GridSpec::new(2, 2, f32::NAN);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidScale);
    }

    #[test]
    fn test_grid_spec_infinite_scale_rejected() {
        let result = GridSpec::new(2, 2, f32::INFINITY);
        assert_eq!(result.unwrap_err(), GridSpecError::InvalidScale);
    }

    #[test]
    fn test_grid_spec_fractional_scale_accepted() {
        let grid = GridSpec::new(1, 1, 0.5).unwrap();
        assert_eq!(grid.scale(), 0.5);
    }

    #[test]
    fn test_grid_spec_cell_count() {
        let grid = GridSpec::new(2, 3, 1.0).unwrap();
        assert_eq!(grid.cell_count(), 6);

        let single = GridSpec::new(1, 1, 1.0).unwrap();
        assert_eq!(single.cell_count(), 1);
    }

    #[test]
    fn test_grid_spec_error_messages_name_the_field() {
        assert!(GridSpecError::InvalidRows.to_string().contains("rows"));
        assert!(GridSpecError::InvalidCols.to_string().contains("cols"));
        assert!(GridSpecError::InvalidScale.to_string().contains("scale"));
    }
}
