//! Tatami - Image Grid Montage Server
//!
//! アップロードされた画像をグリッド状に合成してPNGを生成するWebサーバー

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// バイナリはライブラリと同じモジュール群を再宣言するため、
// ライブラリ向けのAPIの一部はこちらでは未使用になる
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use adapter::config::Config;
use driver::{Args, MontageServer};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // 設定ファイルが指定されなければ組み込みデフォルトを使う
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(upload_dir) = args.upload_dir {
        config.upload_dir = upload_dir;
    }

    let server = MontageServer::new(config);
    server.run().await
}
