//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconExporter` 只负责流程编排，单次导出的链路固定为：
//! 1. 读取并解码源图
//! 2. 确保输出目录存在
//! 3. 按尺寸顺序逐个重采样并写入 PNG
//!
//! ## 实现思路
//!
//! - 源图解码在目录创建之前完成，源图不可用时磁盘保持原样。
//! - 任一尺寸失败立即返回，已写入的文件保留，不做回滚。
//! - 记录 `load/resize/write/total` 阶段耗时，便于诊断。

use std::time::{Duration, Instant};

use super::source::ExportedIcon;
use super::{ExportConfig, ExportError};

/// 图标导出器。
pub struct IconExporter {
    pub(super) config: ExportConfig,
}

impl IconExporter {
    /// 校验配置并创建导出器。
    ///
    /// # 示例
    /// ```rust
    /// use icon_exporter::icon_export::{ExportConfig, IconExporter};
    ///
    /// let exporter = IconExporter::new(ExportConfig::default())?;
    /// assert_eq!(exporter.config().sizes, vec![16, 48, 128]);
    /// # Ok::<(), icon_exporter::icon_export::ExportError>(())
    /// ```
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// 执行导出，不关心逐个文件的回调。
    pub fn export(&self) -> Result<Vec<ExportedIcon>, ExportError> {
        self.export_with(|_| {})
    }

    /// 执行导出，每写入一个文件调用一次 `on_saved`。
    ///
    /// 回调按尺寸列表顺序触发；中途失败时，之前的回调已经发生。
    pub fn export_with<F>(&self, mut on_saved: F) -> Result<Vec<ExportedIcon>, ExportError>
    where
        F: FnMut(&ExportedIcon),
    {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.load_source()?;
        let load_elapsed = load_start.elapsed();

        self.ensure_output_dir()?;

        let mut resize_elapsed = Duration::ZERO;
        let mut write_elapsed = Duration::ZERO;
        let mut exported = Vec::with_capacity(self.config.sizes.len());

        for &edge in &self.config.sizes {
            let resize_start = Instant::now();
            let variant = self.render_variant(&source, edge)?;
            resize_elapsed += resize_start.elapsed();

            let write_start = Instant::now();
            let icon = self.write_variant(&variant)?;
            write_elapsed += write_start.elapsed();

            on_saved(&icon);
            exported.push(icon);
        }

        log::info!(
            "✅ 图标导出完成 - 数量={} load={}ms resize={}ms write={}ms total={}ms",
            exported.len(),
            load_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(exported)
    }
}
