//! # 图标导出模块（icon_export）
//!
//! ## 设计思路
//!
//! 将“读取源图 → 解码 → 逐尺寸重采样 → PNG 编码落盘”按职责拆分为多个子模块，
//! 每个阶段只关心自己的输入输出，便于单独测试。
//!
//! - `config`：导出参数（源路径、输出目录、尺寸列表、滤镜）
//! - `error`：阶段错误模型
//! - `source`：中间数据模型（源图、图标变体、导出结果）
//! - `handler`：编排整条流程并记录阶段耗时
//! - `loader`：读取文件、签名嗅探、解码为 RGBA
//! - `pipeline`：Lanczos 重采样
//! - `writer`：创建输出目录并写入 PNG
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（export_with：统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 签名校验 + 解码）
//!    ├─ pipeline.rs（重采样为 L×L）
//!    └─ writer.rs（建目录 + 编码 PNG + 覆盖写入）
//!    ↓
//! Vec<ExportedIcon>
//! ```
//!
//! 源图必须在创建输出目录之前完成解码：源文件缺失或损坏时，磁盘上不会产生任何改动。

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_ICON_SIZES, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_PATH, ExportConfig};
pub use error::ExportError;
pub use handler::IconExporter;
pub use source::{ExportedIcon, IconVariant, SourceImage};
pub use writer::icon_file_name;
