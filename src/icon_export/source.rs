//! # 中间数据模型
//!
//! - `SourceImage`：解码后的源图，统一为 RGBA8
//! - `IconVariant`：某个边长的正方形图标像素
//! - `ExportedIcon`：已写入磁盘的图标记录

use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};

/// 解码后的源图。只读，重采样时按需复制。
pub struct SourceImage {
    pub(crate) pixels: RgbaImage,
    /// 探测到的原始格式（仅用于日志与诊断）。
    pub(crate) format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 单个尺寸的图标像素，宽高均为 `edge`。
pub struct IconVariant {
    pub(crate) edge: u32,
    pub(crate) pixels: RgbaImage,
}

impl IconVariant {
    pub fn edge(&self) -> u32 {
        self.edge
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 写入成功的图标。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    /// 图标边长（像素）。
    pub edge: u32,
    /// 输出文件路径。
    pub path: PathBuf,
}
