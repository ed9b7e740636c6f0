//! 统一错误类型模块
//!
//! # 设计思路
//!
//! `AppError` 是进程边界上的错误类型：导出链路的 `ExportError`
//! 与零散的 I/O 错误都汇总到这里，由 `main` 记录日志并以非零状态退出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ExportError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。

use crate::icon_export::ExportError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标导出流水线错误（读取 / 解码 / 缩放 / 写入）
    #[error("{0}")]
    Export(#[from] ExportError),

    /// 标准输出等 I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_message_is_passed_through() {
        let err: AppError = ExportError::FileSystem("文件不存在：logo.jpg".to_string()).into();
        assert_eq!(err.to_string(), "文件错误：文件不存在：logo.jpg");
    }

    #[test]
    fn io_error_is_wrapped() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
