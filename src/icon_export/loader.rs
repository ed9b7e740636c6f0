//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 尽早失败：先检查存在性，再做文件签名嗅探，最后才完整解码。
//! 任何一步失败都直接返回，调用侧此时尚未触碰输出目录。
//!
//! ## 实现思路
//!
//! - 签名嗅探使用 `infer`，只拒绝“明确识别为非图片”的内容；
//!   `infer` 不认识的格式交给 `image` 的格式猜测继续判断。
//! - 内容无法识别格式时，回退到扩展名推断的格式（TGA 等没有文件头魔数）。
//! - 解码后统一转为 RGBA8，源图没有 alpha 通道时补全为不透明。

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use super::source::SourceImage;
use super::{ExportError, IconExporter};

impl IconExporter {
    /// 读取并解码配置中的源图。
    pub fn load_source(&self) -> Result<SourceImage, ExportError> {
        Self::load_from_file(&self.config.source_path)
    }

    pub(super) fn load_from_file(path: &Path) -> Result<SourceImage, ExportError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(ExportError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ExportError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        let source = Self::decode_to_rgba(&bytes, ImageFormat::from_path(path).ok())?;

        log::info!(
            "✅ 源图解码成功 - 格式: {:?} 尺寸: {}x{}",
            source.format,
            source.width(),
            source.height()
        );

        Ok(source)
    }

    /// 将内存中的图片字节解码为 RGBA8 源图。
    ///
    /// `fallback` 仅在内容嗅探失败时生效。
    pub(super) fn decode_to_rgba(
        bytes: &[u8],
        fallback: Option<ImageFormat>,
    ) -> Result<SourceImage, ExportError> {
        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ExportError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        if reader.format().is_none() {
            match fallback {
                Some(format) => reader.set_format(format),
                None => {
                    return Err(ExportError::InvalidFormat("不支持的图片格式".to_string()));
                }
            }
        }
        let format = reader.format();

        let decoded = reader
            .decode()
            .map_err(|e| ExportError::Decode(format!("图片解码失败：{}", e)))?;

        Ok(SourceImage {
            pixels: decoded.to_rgba8(),
            format,
        })
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), ExportError> {
        if bytes.is_empty() {
            return Err(ExportError::InvalidFormat("图片内容为空".to_string()));
        }

        if let Some(kind) = infer::get(bytes) {
            if kind.matcher_type() != infer::MatcherType::Image {
                return Err(ExportError::InvalidFormat(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )));
            }
        }

        Ok(())
    }
}
