//! # 扩展图标导出工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  main.rs   日志初始化 · 打印确认行 · 退出码  │
//! └──────────────────────┬───────────────────────┘
//!                        ↓ Result<_, AppError>
//! ┌──────────────────────┴───────────────────────┐
//! │  ├─ error ─────── AppError (进程边界错误)    │
//! │  └─ icon_export   源图 → 16/48/128 PNG       │
//! │      ├─ loader    读取 · 签名嗅探 · 解码     │
//! │      ├─ pipeline  Lanczos3 重采样            │
//! │      └─ writer    建目录 · PNG 覆盖写入      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`icon_export`] | 从单张源图导出多尺寸正方形 PNG 图标 |

pub mod error;
pub mod icon_export;
