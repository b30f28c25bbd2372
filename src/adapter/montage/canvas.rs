//! # Canvas Compositing
//!
//! グリッド合成の同期処理
//!
//! スケール適用からキャンバスへの貼り付けまでを担当する

use anyhow::{anyhow, bail, Result};
use image::imageops::FilterType;
use image::{imageops, Rgb, RgbImage};

use crate::domain::entities::grid_spec::GridSpec;
use crate::domain::services::grid_layout::GridLayout;

/// 空きセルの背景色
const CANVAS_BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// 1枚のラスタとして扱う最大ピクセル数
///
/// スケール適用後の各画像と合成キャンバスの両方に適用する上限
const MAX_PIXELS: u64 = 100_000_000;

/// スケール適用後の寸法を計算する
///
/// 端数は切り捨て、各辺の最小値は1ピクセル
pub fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let w = (width as f32 * scale) as u32;
    let h = (height as f32 * scale) as u32;
    (w.max(1), h.max(1))
}

/// 各画像にスケールを適用する
///
/// scale が 1.0 の場合はリサイズせずそのまま返す
///
/// # Errors
///
/// スケール後の寸法が [`MAX_PIXELS`] を超える画像がある場合にエラーを返す
pub fn apply_scale(images: Vec<RgbImage>, scale: f32) -> Result<Vec<RgbImage>> {
    if (scale - 1.0).abs() < f32::EPSILON {
        return Ok(images);
    }

    images
        .into_iter()
        .map(|img| {
            let (w, h) = scaled_dimensions(img.width(), img.height(), scale);
            if w as u64 * h as u64 > MAX_PIXELS {
                bail!("Scaled image {}x{} exceeds the {} pixel limit", w, h, MAX_PIXELS);
            }
            Ok(imageops::resize(&img, w, h, FilterType::Lanczos3))
        })
        .collect()
}

/// 画像グループを1枚のグリッドキャンバスに合成する
///
/// セル寸法は全画像の最大幅・最大高。行優先で配置し、
/// rows*cols を超える画像は無視、不足セルは背景色のまま残る。
///
/// # Errors
///
/// 画像リストが空の場合、またはキャンバス寸法がu32に収まらないか
/// [`MAX_PIXELS`] を超える場合にエラーを返す
pub fn compose_grid(images: &[RgbImage], grid: &GridSpec, gap: u32) -> Result<RgbImage> {
    if images.is_empty() {
        bail!("Cannot compose an empty image group");
    }

    let cell_width = images.iter().map(|img| img.width()).max().unwrap_or(1);
    let cell_height = images.iter().map(|img| img.height()).max().unwrap_or(1);
    let layout = GridLayout::new(grid, cell_width, cell_height, gap);

    let (canvas_width, canvas_height) = layout
        .canvas_width()
        .zip(layout.canvas_height())
        .ok_or_else(|| {
            anyhow!(
                "Canvas dimensions overflow for a {}x{} grid of {}x{} cells",
                grid.rows(),
                grid.cols(),
                cell_width,
                cell_height
            )
        })?;
    if canvas_width as u64 * canvas_height as u64 > MAX_PIXELS {
        bail!(
            "Canvas {}x{} exceeds the {} pixel limit",
            canvas_width,
            canvas_height,
            MAX_PIXELS
        );
    }

    let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, CANVAS_BACKGROUND);

    for (slot, img) in images.iter().enumerate() {
        let Some((x, y)) = layout.cell_origin(slot) else {
            // rows*cols を超えた分は別グループとして処理済みのため描画しない
            break;
        };
        imageops::overlay(&mut canvas, img, x as i64, y as i64);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(width, height, color)
    }

    fn test_grid(rows: u32, cols: u32) -> GridSpec {
        GridSpec::new(rows, cols, 1.0).unwrap()
    }

    #[test]
    fn test_scaled_dimensions_half() {
        assert_eq!(scaled_dimensions(100, 100, 0.5), (50, 50));
    }

    #[test]
    fn test_scaled_dimensions_truncates() {
        assert_eq!(scaled_dimensions(99, 51, 0.5), (49, 25));
    }

    #[test]
    fn test_scaled_dimensions_minimum_one_pixel() {
        assert_eq!(scaled_dimensions(2, 3, 0.1), (1, 1));
    }

    #[test]
    fn test_scaled_dimensions_upscale() {
        assert_eq!(scaled_dimensions(100, 50, 2.0), (200, 100));
    }

    #[test]
    fn test_apply_scale_identity_keeps_dimensions() {
        let images = apply_scale(vec![solid_image(40, 30, Rgb([1, 2, 3]))], 1.0).unwrap();
        assert_eq!(images[0].dimensions(), (40, 30));
    }

    #[test]
    fn test_apply_scale_resizes_each_image() {
        let images = apply_scale(
            vec![
                solid_image(100, 60, Rgb([10, 20, 30])),
                solid_image(50, 50, Rgb([40, 50, 60])),
            ],
            0.5,
        )
        .unwrap();
        assert_eq!(images[0].dimensions(), (50, 30));
        assert_eq!(images[1].dimensions(), (25, 25));
    }

    #[test]
    fn test_apply_scale_rejects_oversized_result() {
        // 2000x2000を200倍にすると40万ピクセル四方になり上限を超える
        let result = apply_scale(vec![solid_image(2000, 2000, Rgb([1, 1, 1]))], 200.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_compose_grid_full_2x3() {
        // 100x100の画像6枚、余白5: キャンバスは 310x205
        let images: Vec<RgbImage> = (0..6).map(|_| solid_image(100, 100, Rgb([200, 0, 0]))).collect();

        let canvas = compose_grid(&images, &test_grid(2, 3), 5).unwrap();

        assert_eq!(canvas.dimensions(), (310, 205));
        // 各セルの原点が画像で塗られている
        for (x, y) in [(0, 0), (105, 0), (210, 0), (0, 105), (105, 105), (210, 105)] {
            assert_eq!(*canvas.get_pixel(x, y), Rgb([200, 0, 0]));
        }
        // セル間の余白は背景色のまま
        assert_eq!(*canvas.get_pixel(102, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(0, 102), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_compose_grid_short_group_leaves_background() {
        let images = vec![solid_image(50, 50, Rgb([0, 200, 0]))];

        let canvas = compose_grid(&images, &test_grid(2, 2), 5).unwrap();

        assert_eq!(canvas.dimensions(), (105, 105));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 200, 0]));
        // 残りの3セルは空きのまま
        assert_eq!(*canvas.get_pixel(55, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(0, 55), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(55, 55), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_compose_grid_cell_size_includes_overflow_images() {
        // セル寸法は溢れる分も含めた全画像の最大サイズ
        let images = vec![
            solid_image(10, 10, Rgb([1, 1, 1])),
            solid_image(90, 90, Rgb([2, 2, 2])),
        ];

        let canvas = compose_grid(&images, &test_grid(1, 1), 5).unwrap();

        assert_eq!(canvas.dimensions(), (90, 90));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([1, 1, 1]));
        // 溢れた2枚目は描画されない
        assert_eq!(*canvas.get_pixel(50, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_compose_grid_mixed_sizes_paste_at_cell_origin() {
        let images = vec![
            solid_image(100, 100, Rgb([10, 10, 10])),
            solid_image(40, 40, Rgb([20, 20, 20])),
        ];

        let canvas = compose_grid(&images, &test_grid(1, 2), 5).unwrap();

        assert_eq!(canvas.dimensions(), (205, 100));
        // 小さい画像は2つ目のセルの左上に原寸で貼られる
        assert_eq!(*canvas.get_pixel(105, 0), Rgb([20, 20, 20]));
        assert_eq!(*canvas.get_pixel(144, 39), Rgb([20, 20, 20]));
        // セル内の未使用領域は背景色
        assert_eq!(*canvas.get_pixel(150, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(105, 60), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_compose_grid_single_row_no_trailing_gap() {
        let images: Vec<RgbImage> = (0..3).map(|_| solid_image(10, 10, Rgb([5, 5, 5]))).collect();

        let canvas = compose_grid(&images, &test_grid(1, 3), 5).unwrap();

        assert_eq!(canvas.dimensions(), (40, 10));
    }

    #[test]
    fn test_compose_grid_empty_group_fails() {
        let result = compose_grid(&[], &test_grid(2, 2), 5);
        assert!(result.is_err());
    }

    #[test]
    fn test_compose_grid_rejects_oversized_canvas() {
        // 4000x4000セルの10x10グリッドは確保前にピクセル上限で弾く
        let images = vec![solid_image(4000, 4000, Rgb([1, 1, 1]))];
        let result = compose_grid(&images, &test_grid(10, 10), 5);
        assert!(result.is_err());
    }
}
