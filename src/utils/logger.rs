use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 標準輸出保留給選單與資料，診斷訊息一律寫到 stderr
pub fn init_cli_logger(verbose: bool) {
    init_with_default(if verbose {
        "course_registry=debug"
    } else {
        "off"
    });
}

/// `level` 來自 TOML 的 `[logging] level`，`RUST_LOG` 仍然優先
pub fn init_with_level(level: &str) {
    init_with_default(&format!("course_registry={}", level));
}

fn init_with_default(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 重複初始化（例如測試中）時忽略錯誤
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
