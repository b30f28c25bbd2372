//! # Uploaded File DTO
//!
//! 受信したアップロードファイルのData Transfer Object

/// アップロードファイル
///
/// multipartリクエストで受信した1ファイル分の内容。
/// ファイル名はサニタイズ前の生の値を保持する。
///
/// # Examples
///
/// ```
/// use tatami::application::dto::uploaded_file::UploadedFile;
///
/// let file = UploadedFile::new("photo.png".to_string(), vec![0x89, 0x50]);
/// assert_eq!(file.original_name, "photo.png");
/// assert_eq!(file.bytes.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// クライアントが送信したファイル名
    pub original_name: String,
    /// ファイル内容
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// 新しいアップロードファイルを作成
    ///
    /// # Arguments
    ///
    /// * `original_name` - クライアントが送信したファイル名
    /// * `bytes` - ファイル内容
    pub fn new(original_name: String, bytes: Vec<u8>) -> Self {
        Self {
            original_name,
            bytes,
        }
    }

    /// ファイルサイズ（バイト）を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// 内容が空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_new() {
        let file = UploadedFile::new("photo.png".to_string(), vec![1, 2, 3]);
        assert_eq!(file.original_name, "photo.png");
        assert_eq!(file.bytes, vec![1, 2, 3]);
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_uploaded_file_empty() {
        let file = UploadedFile::new("empty.png".to_string(), vec![]);
        assert!(file.is_empty());
        assert_eq!(file.len(), 0);
    }
}
