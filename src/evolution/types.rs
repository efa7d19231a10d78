use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::AgentError;

/// 单次分析得到的指标（每次调用重新计算，不跨调用累积）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metrics {
    /// 含 "if" 或 "for" 子串的行数
    pub complexity: usize,
    /// 非空且不以注释符开头的行数
    pub readability: usize,
}

/// 词频表：仅保留出现次数 > 1 的 token
pub type PatternTable = BTreeMap<String, usize>;

/// 一次改进记录（只追加，不修改）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementRecord {
    pub id: String,
    pub timestamp: DateTime<Local>,
    #[serde(rename = "type")]
    pub improvement_type: String,
    pub before_lines: usize,
    pub after_lines: usize,
}

impl ImprovementRecord {
    /// before - after，可为负（代码变长）
    pub fn line_delta(&self) -> i64 {
        self.before_lines as i64 - self.after_lines as i64
    }
}

/// 学习统计：由历史记录按需推导
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct LearningStats {
    pub total_improvements: usize,
    pub pattern_count: usize,
    pub avg_reduction: f64,
}

/// 一次完整改进流程的输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub improved_code: String,
    pub analysis: Metrics,
    pub suggestions: Vec<String>,
    pub patterns: PatternTable,
    pub learning_stats: LearningStats,
}

impl ImprovementReport {
    pub fn to_json_pretty(&self) -> Result<String, AgentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Agent 自述信息 + 当前学习统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub name: String,
    pub version: String,
    pub capabilities: Vec<String>,
    pub learning_stats: LearningStats,
}

impl PerformanceReport {
    pub fn to_json_pretty(&self) -> Result<String, AgentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 分隔 token 的空白：Unicode 空白外加 U+001C..=U+001F 信息分隔符
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// 按 '\n' 切分计数行数；空串算一行
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
