//! # UploadBatch Value Object
//!
//! アップロードバッチのバリューオブジェクト

use std::path::{Path, PathBuf};

/// 保存済みアップロード画像
///
/// 受信順に割り当てた連番と、ワークスペース内の保存先パスを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// 受信順の連番（0始まり）
    pub sequence: usize,
    /// ワークスペース内の保存先パス
    pub path: PathBuf,
    /// クライアントが送信した元のファイル名
    pub original_name: String,
}

/// アップロードバッチ
///
/// 1リクエスト分の保存済み画像の順序付きコレクション。
/// 画像はリクエスト専用のワークスペースディレクトリに保存される。
#[derive(Debug, Clone)]
pub struct UploadBatch {
    workspace: PathBuf,
    images: Vec<StoredImage>,
}

impl UploadBatch {
    /// 新しいアップロードバッチを作成
    ///
    /// # Arguments
    ///
    /// * `workspace` - このバッチのワークスペースディレクトリ
    /// * `images` - 保存済み画像のベクター（受信順）
    pub fn new(workspace: PathBuf, images: Vec<StoredImage>) -> Self {
        Self { workspace, images }
    }

    /// バッチ内の画像数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 画像への参照を返す
    pub fn images(&self) -> &[StoredImage] {
        &self.images
    }

    /// ワークスペースディレクトリを返す
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// 画像の所有権を移動して返す
    pub fn into_images(self) -> Vec<StoredImage> {
        self.images
    }

    /// バッチをグループに分割
    ///
    /// 受信順のままグループサイズごとに区切る。最後のグループは
    /// 端数分だけ小さくなることがある。空のバッチはグループを生まない。
    ///
    /// # Arguments
    ///
    /// * `group_size` - 1グループあたりの画像数（rows * cols）
    ///
    /// # Returns
    ///
    /// 1始まりのグループ番号を持つグループのベクター
    pub fn split_into_groups(&self, group_size: usize) -> Vec<ImageGroup> {
        if group_size == 0 {
            // サイズ0は分割不能なので全体を1グループとして扱う
            return vec![ImageGroup::new(1, self.images.clone())];
        }

        self.images
            .chunks(group_size)
            .enumerate()
            .map(|(i, chunk)| ImageGroup::new(i + 1, chunk.to_vec()))
            .collect()
    }
}

/// 画像グループ
///
/// 1枚の合成キャンバスになる最大 rows*cols 枚の画像
#[derive(Debug, Clone)]
pub struct ImageGroup {
    index: usize,
    images: Vec<StoredImage>,
}

impl ImageGroup {
    /// 新しいグループを作成
    ///
    /// # Arguments
    ///
    /// * `index` - グループ番号（1始まり）
    /// * `images` - グループ内の画像（受信順）
    pub fn new(index: usize, images: Vec<StoredImage>) -> Self {
        Self { index, images }
    }

    /// グループ番号を返す（1始まり）
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// グループ内の画像数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// グループが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 画像への参照を返す
    pub fn images(&self) -> &[StoredImage] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(sequence: usize) -> StoredImage {
        StoredImage {
            sequence,
            path: PathBuf::from(format!("/tmp/ws/{:03}_img.png", sequence)),
            original_name: format!("img-{}.png", sequence),
        }
    }

    fn create_test_batch(count: usize) -> UploadBatch {
        let images = (0..count).map(create_test_image).collect();
        UploadBatch::new(PathBuf::from("/tmp/ws"), images)
    }

    #[test]
    fn test_upload_batch_new() {
        let batch = create_test_batch(3);
        assert_eq!(batch.len(), 3);
        assert!(!batch.is_empty());
        assert_eq!(batch.workspace(), Path::new("/tmp/ws"));
    }

    #[test]
    fn test_upload_batch_empty() {
        let batch = create_test_batch(0);
        assert_eq!(batch.len(), 0);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_upload_batch_images_preserve_order() {
        let batch = create_test_batch(4);
        let sequences: Vec<usize> = batch.images().iter().map(|img| img.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_split_into_groups_with_remainder() {
        let batch = create_test_batch(5);
        let groups = batch.split_into_groups(4);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].index(), 1);
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[1].index(), 2);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_split_into_groups_exact_fit() {
        let batch = create_test_batch(6);
        let groups = batch.split_into_groups(3);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 3);
    }

    #[test]
    fn test_split_into_groups_smaller_than_group_size() {
        let batch = create_test_batch(2);
        let groups = batch.split_into_groups(4);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].index(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_split_into_groups_preserves_sequence_across_groups() {
        let batch = create_test_batch(5);
        let groups = batch.split_into_groups(2);

        let sequences: Vec<usize> = groups
            .iter()
            .flat_map(|group| group.images().iter().map(|img| img.sequence))
            .collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_split_into_groups_zero_size_keeps_whole_batch() {
        let batch = create_test_batch(3);
        let groups = batch.split_into_groups(0);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_split_into_groups_empty_batch() {
        let batch = create_test_batch(0);
        let groups = batch.split_into_groups(4);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_into_images() {
        let batch = create_test_batch(2);
        let images = batch.into_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].original_name, "img-0.png");
    }

    #[test]
    fn test_image_group_accessors() {
        let group = ImageGroup::new(1, vec![create_test_image(0)]);
        assert_eq!(group.index(), 1);
        assert_eq!(group.len(), 1);
        assert!(!group.is_empty());
        assert_eq!(group.images()[0].sequence, 0);
    }

    #[test]
    fn test_image_group_empty() {
        let group = ImageGroup::new(1, vec![]);
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }
}
