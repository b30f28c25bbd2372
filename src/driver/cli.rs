//! # CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 画像をグリッド合成するWebサーバーのCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "tatami")]
#[command(about = "Tile uploaded images into grid composite PNGs over HTTP", long_about = None)]
pub struct Args {
    /// Config file path (built-in defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the listening port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the upload working directory
    #[arg(long)]
    pub upload_dir: Option<String>,
}
