//! # 配置模块
//!
//! ## 设计思路
//!
//! 所有可调参数集中到 `ExportConfig`。`Default` 即为扩展图标的固定产物：
//! 从 `logo.jpg` 导出 16 / 48 / 128 三个尺寸到 `assets` 目录。
//!
//! ## 实现思路
//!
//! - `with_*` 方法便于库调用方与测试替换单个字段。
//! - `validate` 在任何文件系统操作之前执行，非法配置直接拒绝。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::ExportError;

/// 默认源图路径（相对当前工作目录）。
pub const DEFAULT_SOURCE_PATH: &str = "logo.jpg";
/// 默认输出目录。
pub const DEFAULT_OUTPUT_DIR: &str = "assets";
/// 浏览器扩展需要的图标边长，按升序导出。
pub const DEFAULT_ICON_SIZES: [u32; 3] = [16, 48, 128];

/// 图标导出配置。
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// 源图文件路径。
    pub source_path: PathBuf,
    /// 输出目录，不存在时自动创建（含父目录）。
    pub output_dir: PathBuf,
    /// 目标边长列表，导出顺序与列表顺序一致。
    pub sizes: Vec<u32>,
    /// 重采样滤镜。
    pub resize_filter: FilterType,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl ExportConfig {
    /// 替换源图路径。
    ///
    /// # 示例
    /// ```rust
    /// use icon_exporter::icon_export::ExportConfig;
    ///
    /// let config = ExportConfig::default().with_source_path("pics/logo.png");
    /// assert_eq!(config.source_path.to_str(), Some("pics/logo.png"));
    /// ```
    pub fn with_source_path(mut self, path: impl AsRef<Path>) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_resize_filter(mut self, filter: FilterType) -> Self {
        self.resize_filter = filter;
        self
    }

    /// 校验尺寸列表：非空、边长为正、不重复。
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.sizes.is_empty() {
            return Err(ExportError::InvalidConfig("图标尺寸列表为空".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.sizes.len());
        for &edge in &self.sizes {
            if edge == 0 {
                return Err(ExportError::InvalidConfig("图标边长必须为正整数".to_string()));
            }
            if !seen.insert(edge) {
                return Err(ExportError::InvalidConfig(format!(
                    "图标边长重复：{}",
                    edge
                )));
            }
        }

        Ok(())
    }
}
