//! # Grid Layout Service
//!
//! グリッド配置の座標計算
//!
//! セル寸法と余白からキャンバス寸法と各セルの原点を導出する純粋なサービス

use crate::domain::entities::grid_spec::GridSpec;

/// グリッド配置
///
/// セル寸法（グループ内の最大画像サイズ）と余白が決まった
/// グリッドの配置計算を担当する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    cell_width: u32,
    cell_height: u32,
    gap: u32,
}

impl GridLayout {
    /// 新しい配置を作成
    ///
    /// # Arguments
    ///
    /// * `grid` - グリッド形状
    /// * `cell_width` - セル幅（グループ内の最大画像幅）
    /// * `cell_height` - セル高（グループ内の最大画像高）
    /// * `gap` - セル間の余白（ピクセル）
    pub fn new(grid: &GridSpec, cell_width: u32, cell_height: u32, gap: u32) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cell_width,
            cell_height,
            gap,
        }
    }

    /// キャンバス幅を返す
    ///
    /// 余白はセルの間にのみ入り、外周には入らない
    ///
    /// # Returns
    ///
    /// u32で表現できる幅なら `Some`、桁あふれする場合は `None`
    pub fn canvas_width(&self) -> Option<u32> {
        self.cell_width
            .checked_mul(self.cols)?
            .checked_add(self.gap.checked_mul(self.cols - 1)?)
    }

    /// キャンバス高を返す
    ///
    /// # Returns
    ///
    /// u32で表現できる高さなら `Some`、桁あふれする場合は `None`
    pub fn canvas_height(&self) -> Option<u32> {
        self.cell_height
            .checked_mul(self.rows)?
            .checked_add(self.gap.checked_mul(self.rows - 1)?)
    }

    /// グリッドのセル数を返す
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// スロットの原点座標を返す（行優先）
    ///
    /// # Arguments
    ///
    /// * `slot` - グループ内の位置（0始まり）
    ///
    /// # Returns
    ///
    /// グリッド内に収まるスロットなら `Some((x, y))`、
    /// rows*cols 以上の位置や座標がu32に収まらない場合は `None`
    pub fn cell_origin(&self, slot: usize) -> Option<(u32, u32)> {
        if slot >= self.slot_count() {
            return None;
        }

        let row = (slot / self.cols as usize) as u64;
        let col = (slot % self.cols as usize) as u64;
        let x = col * (self.cell_width as u64 + self.gap as u64);
        let y = row * (self.cell_height as u64 + self.gap as u64);
        Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
    }
}
