//! # 扩展图标导出工具 — 应用入口
//!
//! 读取 `logo.jpg`，在 `assets/` 下生成 `icon16.png`、`icon48.png`、`icon128.png`。
//! 每写入一个文件打印一行确认信息；任何失败都以非零状态退出。

use std::io::Write;

use icon_exporter::error::AppError;
use icon_exporter::icon_export::{ExportConfig, IconExporter};

fn run() -> Result<(), AppError> {
    let exporter = IconExporter::new(ExportConfig::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // 确认行写失败不打断导出，剩余图标照常写入，结束后再返回该错误
    let mut print_error = None;

    exporter.export_with(|icon| {
        if print_error.is_none() {
            if let Err(err) = writeln!(out, "Saved {}", icon.path.display()) {
                print_error = Some(err);
            }
        }
    })?;

    if let Some(err) = print_error {
        return Err(err.into());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("图标导出失败: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
