//! # PNG 写入模块
//!
//! 输出目录不存在时连同父目录一起创建；同名文件直接覆盖。
//! 先在内存中编码完成再一次性写盘，编码失败不会留下半个文件。

use std::fs;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use super::source::{ExportedIcon, IconVariant};
use super::{ExportError, IconExporter};

/// 根据边长生成图标文件名，例如 `icon48.png`。
///
/// # 示例
/// ```rust
/// use icon_exporter::icon_export::icon_file_name;
///
/// assert_eq!(icon_file_name(128), "icon128.png");
/// ```
pub fn icon_file_name(edge: u32) -> String {
    format!("icon{}.png", edge)
}

impl IconExporter {
    /// 确保输出目录存在。
    pub fn ensure_output_dir(&self) -> Result<(), ExportError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| {
            ExportError::FileSystem(format!("创建输出目录 '{}' 失败：{}", dir.display(), e))
        })
    }

    /// 将图标编码为 PNG 并写入输出目录。
    pub fn write_variant(&self, variant: &IconVariant) -> Result<ExportedIcon, ExportError> {
        let bytes = Self::encode_png(variant)?;
        let path = self.config.output_dir.join(icon_file_name(variant.edge));

        fs::write(&path, &bytes).map_err(|e| {
            ExportError::FileSystem(format!("写入图标 '{}' 失败：{}", path.display(), e))
        })?;

        log::info!(
            "💾 图标已写入 - {}x{} {}（{} 字节）",
            variant.edge,
            variant.edge,
            path.display(),
            bytes.len()
        );

        Ok(ExportedIcon {
            edge: variant.edge,
            path,
        })
    }

    fn encode_png(variant: &IconVariant) -> Result<Vec<u8>, ExportError> {
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(variant.pixels.clone())
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| ExportError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_export::ExportConfig;
    use image::{ColorType, ImageBuffer, Rgba};

    fn variant(edge: u32) -> IconVariant {
        IconVariant {
            edge,
            pixels: ImageBuffer::from_fn(edge, edge, |x, y| {
                Rgba([x as u8, y as u8, 100, (x + y) as u8])
            }),
        }
    }

    #[test]
    fn file_name_follows_edge() {
        assert_eq!(icon_file_name(16), "icon16.png");
        assert_eq!(icon_file_name(48), "icon48.png");
    }

    #[test]
    fn ensure_output_dir_creates_parents() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("a").join("b").join("assets");
        let exporter = IconExporter::new(ExportConfig::default().with_output_dir(&out))
            .expect("exporter init failed");

        exporter.ensure_output_dir().expect("create dir should succeed");
        assert!(out.is_dir());

        // 已存在时复用
        exporter.ensure_output_dir().expect("existing dir should be reused");
    }

    #[test]
    fn write_variant_produces_rgba_png() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let exporter = IconExporter::new(ExportConfig::default().with_output_dir(tmp.path()))
            .expect("exporter init failed");

        let exported = exporter.write_variant(&variant(16)).expect("write should succeed");

        assert_eq!(exported.edge, 16);
        assert_eq!(exported.path, tmp.path().join("icon16.png"));

        let decoded = image::open(&exported.path).expect("written file should decode");
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
        assert_eq!(decoded.color(), ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), *variant(16).pixels());
    }

    #[test]
    fn write_variant_overwrites_existing_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("icon48.png");
        fs::write(&target, b"stale").expect("seed stale file");

        let exporter = IconExporter::new(ExportConfig::default().with_output_dir(tmp.path()))
            .expect("exporter init failed");
        exporter.write_variant(&variant(48)).expect("write should succeed");

        let decoded = image::open(&target).expect("overwritten file should decode");
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let exporter = IconExporter::new(
            ExportConfig::default().with_output_dir(tmp.path().join("missing")),
        )
        .expect("exporter init failed");

        let result = exporter.write_variant(&variant(16));
        assert!(matches!(result, Err(ExportError::FileSystem(_))));
    }
}
