//! tracing の初期化
//!
//! ログは stderr に出力する。`MBB_LOG` で `EnvFilter` の指定を上書きできる。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログレベル指定の環境変数
pub const LOG_ENV: &str = "MBB_LOG";

/// デフォルトのフィルタ指定
///
/// TUI 実行中は画面を崩さないよう `MBB_LOG` 未指定時は出力しない。
pub fn default_directive(verbose: bool, interactive: bool) -> &'static str {
    match (interactive, verbose) {
        (true, _) => "off",
        (false, true) => "mbb=debug",
        (false, false) => "warn",
    }
}

/// グローバル subscriber を登録（二重登録は無視）
pub fn init(verbose: bool, interactive: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, interactive)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_mode_is_silent_by_default() {
        assert_eq!(default_directive(true, true), "off");
        assert_eq!(default_directive(false, true), "off");
    }

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(true, false), "mbb=debug");
        assert_eq!(default_directive(false, false), "warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false, false);
        init(true, false);
    }
}
