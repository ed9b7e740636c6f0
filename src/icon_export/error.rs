//! # 错误模型模块
//!
//! 导出链路只有两类致命失败：读源图失败、写输出失败。
//! 用单一枚举承载，保留可读信息的同时让调用侧可以按分支匹配。

/// 图标导出统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

