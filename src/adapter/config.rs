//! # Application Configuration
//!
//! JSONファイルから読み込むサーバー設定

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// サーバー設定
///
/// 全フィールドにデフォルト値があり、設定ファイルは一部の
/// フィールドだけを上書きできる
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// バインド先ホスト
    pub host: String,
    /// リッスンポート
    pub port: u16,
    /// アップロード作業ディレクトリ（チルダ展開対応）
    pub upload_dir: String,
    /// 合成結果ディレクトリ名（upload_dir配下）
    pub output_dir: String,
    /// セル間の余白（ピクセル）
    pub cell_gap: u32,
    /// ワークスペースを掃除対象とみなす経過秒数
    pub workspace_ttl_secs: u64,
    /// リクエストボディの上限バイト数
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upload_dir: "uploads".to_string(),
            output_dir: "output".to_string(),
            cell_gap: 5,
            workspace_ttl_secs: 3600,
            max_upload_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 設定ファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはJSONのパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_dir, "uploads");
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.cell_gap, 5);
        assert_eq!(config.workspace_ttl_secs, 3600);
        assert_eq!(config.max_upload_bytes, 64 * 1024 * 1024);
    }

    #[test]
    fn test_config_load_full() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "host": "127.0.0.1",
                "port": 3000,
                "upload_dir": "~/montage/uploads",
                "output_dir": "composites",
                "cell_gap": 10,
                "workspace_ttl_secs": 600,
                "max_upload_bytes": 1048576
            }"#,
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, "~/montage/uploads");
        assert_eq!(config.output_dir, "composites");
        assert_eq!(config.cell_gap, 10);
        assert_eq!(config.workspace_ttl_secs, 600);
        assert_eq!(config.max_upload_bytes, 1048576);
    }

    #[test]
    fn test_config_load_partial_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"port": 9999}"#).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cell_gap, 5);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = Config::load("/nonexistent/config.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let result = Config::load(path.to_str().unwrap());
        assert!(result.is_err());
    }
}
