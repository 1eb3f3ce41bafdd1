//! 游戏错误处理模块
//!
//! 处理终端界面运行过程中可能出现的错误：IO、配置与输入。
//! 战斗核心本身不产生可恢复错误。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误（终端读写、日志文件）
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 启动参数无效
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 用户输入错误
    #[error("Input error: {0}")]
    InputError(String),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "File not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            _ => format!("Terminal I/O failed: {}", e),
        },
        GameError::InvalidConfig(msg) => format!("Cannot start battle: {}", msg),
        _ => error.to_string(),
    }
}
