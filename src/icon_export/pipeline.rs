//! # 重采样流水线模块
//!
//! ## 设计思路
//!
//! 主路径使用 `fast_image_resize` 的卷积缩放，质量与 `image` 一致但速度更快；
//! 主路径失败时回退到 `image::imageops::resize`，保证一定能产出图标。
//!
//! ## 实现思路
//!
//! 1. 源图已是 RGBA8，直接构建 `U8x4` 缓冲
//! 2. 按配置滤镜映射到 `fast_image_resize` 的滤镜
//! 3. 缩放到 `edge × edge`（非正方形源图会被拉伸）
//! 4. 校验输出字节长度

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbaImage};

use super::source::{IconVariant, SourceImage};
use super::{ExportError, IconExporter};

impl IconExporter {
    /// 将源图重采样为 `edge × edge` 的图标。
    pub fn render_variant(&self, source: &SourceImage, edge: u32) -> Result<IconVariant, ExportError> {
        if edge == 0 {
            return Err(ExportError::InvalidConfig("图标边长必须为正整数".to_string()));
        }

        let filter = self.config.resize_filter;
        let pixels = match Self::resize_with_fast_image_resize(&source.pixels, edge, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                image::imageops::resize(&source.pixels, edge, edge, filter)
            }
        };

        let expected_len = (edge as usize)
            .checked_mul(edge as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ExportError::Decode("图标尺寸导致内存溢出风险".to_string()))?;

        if pixels.as_raw().len() != expected_len {
            return Err(ExportError::Decode("缩放后像素数据长度异常".to_string()));
        }

        log::debug!(
            "🧩 重采样：{}x{} -> {}x{}（filter={:?}）",
            source.width(),
            source.height(),
            edge,
            edge,
            filter
        );

        Ok(IconVariant { edge, pixels })
    }

    fn resize_with_fast_image_resize(
        src: &RgbaImage,
        edge: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, ExportError> {
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| ExportError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(edge, edge, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ExportError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(edge, edge, dst_image.into_vec())
            .ok_or_else(|| ExportError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
