//! Coding Agent - 自我改进的代码改写流水线
//!
//! 模块划分：
//! - **agent**: 流水线编排（分析 → 建议 → 优化 → 模式提取 → 改进日志）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型
//! - **evolution**: 分析器、优化器、模式提取、改进日志与数据模型
//! - **observability**: 日志初始化

pub mod agent;
pub mod config;
pub mod core;
pub mod evolution;
pub mod observability;

pub use agent::CodingAgent;
pub use evolution::{ImprovementReport, PerformanceReport};
