//! # Naming Service
//!
//! ファイル名のサニタイズと命名規則
//!
//! アップロードファイルの保存名と合成結果の出力名を組み立てる

use chrono::{DateTime, Utc};

/// サニタイズ後に何も残らなかった場合の代替名
const FALLBACK_FILE_NAME: &str = "upload";

/// アップロードファイル名をサニタイズする
///
/// パス区切りを取り除いて最後の要素だけを残し、ASCII英数字と
/// `.` `-` `_` 以外の文字を落とす（空白は `_` に置き換える）。
/// 先頭・末尾に残った `.` `-` `_` も取り除く。
///
/// # Arguments
///
/// * `raw` - クライアントが送信したファイル名
///
/// # Returns
///
/// 保存に安全なファイル名。空になった場合は代替名
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(raw);

    let mut cleaned = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
            cleaned.push(c);
        } else if c.is_whitespace() {
            cleaned.push('_');
        }
    }

    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == '-' || c == '_');
    if trimmed.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 受信順の連番を付けた保存名を組み立てる
///
/// 連番はゼロ埋め3桁。ファイル名を辞書順に並べても受信順が保たれる
///
/// # Arguments
///
/// * `sequence` - 受信順の連番（0始まり）
/// * `file_name` - サニタイズ済みのファイル名
pub fn sequenced_file_name(sequence: usize, file_name: &str) -> String {
    format!("{:03}_{}", sequence, file_name)
}

/// 合成結果の出力ファイル名を組み立てる
///
/// `<YYYYmmdd_HHMMSS>_group_<n>.png` 形式。グループ番号は1始まり
///
/// # Arguments
///
/// * `timestamp` - バッチの処理日時（UTC）
/// * `group_index` - グループ番号（1始まり）
pub fn composite_file_name(timestamp: &DateTime<Utc>, group_index: usize) -> String {
    format!(
        "{}_group_{}.png",
        timestamp.format("%Y%m%d_%H%M%S"),
        group_index
    )
}

/// 合成結果ファイル名を一覧の並び替えキーに分解する
///
/// `<バッチ時刻>_group_<n>.png` をバッチ時刻プレフィックスと
/// グループ番号に分ける。プレフィックスは固定幅の時刻表記なので
/// 辞書順がそのまま時刻順になる
///
/// # Arguments
///
/// * `file_name` - 出力ディレクトリ内のファイル名
///
/// # Returns
///
/// `(プレフィックス, グループ番号)`。命名規則に合わない名前は
/// 名前全体をプレフィックスとし、番号は `u64::MAX` で最後尾に回す
pub fn composite_sort_key(file_name: &str) -> (&str, u64) {
    if let Some((prefix, rest)) = file_name.rsplit_once("_group_") {
        if let Some(number) = rest.strip_suffix(".png").and_then(|n| n.parse().ok()) {
            return (prefix, number);
        }
    }
    (file_name, u64::MAX)
}

/// 単一のパス要素として安全な名前かどうかを判定する
///
/// 結果取得ルートのパラメータ検証に使う。パス区切りや
/// 親ディレクトリ参照を含む名前を拒否する
pub fn is_safe_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
