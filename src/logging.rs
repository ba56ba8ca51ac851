//! ログ初期化（env_logger）
//!
//! 既定は warn。`--verbose` で info（platepal 自身は debug）。RUST_LOG があればそれを優先。

use log::LevelFilter;

pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose { LevelFilter::Info } else { LevelFilter::Warn });
    if verbose {
        builder.filter_module("platepal", LevelFilter::Debug);
    }
    builder.parse_default_env();
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
