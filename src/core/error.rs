//! Agent 错误类型
//!
//! 文本层面的流水线不会失败；错误只出现在边界：非 UTF-8 输入、配置加载、报告序列化。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    /// 输入不是合法文本，在任何步骤执行前拒绝
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
