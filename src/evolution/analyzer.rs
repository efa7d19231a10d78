//! 代码分析：基于行的浅层指标 + 固定顺序的改进建议
//!
//! 纯文本启发式，不做语法解析；"if"/"for" 按子串匹配（`forward` 也计入）。

use crate::evolution::types::{is_separator, Metrics};

pub const SUGGEST_WILDCARD_IMPORT: &str = "Replace 'import *' with specific imports";
pub const SUGGEST_INDENTATION: &str = "Use consistent indentation";
pub const SUGGEST_MARKERS: &str = "Address TODO/FIXME comments";

/// 建议检查表：按此顺序逐项检查，互不短路
const SUGGESTION_CHECKS: [(fn(&str) -> bool, &str); 3] = [
    (has_wildcard_import, SUGGEST_WILDCARD_IMPORT),
    (has_double_space, SUGGEST_INDENTATION),
    (has_pending_marker, SUGGEST_MARKERS),
];

fn has_wildcard_import(code: &str) -> bool {
    code.contains("import *")
}

fn has_double_space(code: &str) -> bool {
    code.contains("  ")
}

fn has_pending_marker(code: &str) -> bool {
    code.contains("TODO") || code.contains("FIXME")
}

pub struct CodeAnalyzer {
    comment_marker: String,
    last_metrics: Metrics,
}

impl Default for CodeAnalyzer {
    fn default() -> Self {
        Self::new("#")
    }
}

impl CodeAnalyzer {
    pub fn new(comment_marker: impl Into<String>) -> Self {
        Self {
            comment_marker: comment_marker.into(),
            last_metrics: Metrics::default(),
        }
    }

    /// 计算指标；结果每次重新计算，同时覆盖 `last_metrics`（不做平均）
    pub fn analyze(&mut self, code: &str) -> Metrics {
        let metrics = self.calculate_metrics(code);
        self.last_metrics = metrics;
        metrics
    }

    /// 最近一次 analyze 的结果；从未分析过时全为 0
    pub fn last_metrics(&self) -> Metrics {
        self.last_metrics
    }

    fn calculate_metrics(&self, code: &str) -> Metrics {
        let lines: Vec<&str> = code.split('\n').collect();

        let complexity = lines
            .iter()
            .filter(|l| l.contains("if") || l.contains("for"))
            .count();

        let readability = lines
            .iter()
            .map(|l| l.trim_matches(is_separator))
            .filter(|l| !l.is_empty() && !self.is_comment(l))
            .count();

        Metrics { complexity, readability }
    }

    fn is_comment(&self, trimmed: &str) -> bool {
        !self.comment_marker.is_empty() && trimmed.starts_with(self.comment_marker.as_str())
    }

    /// 生成建议：0~3 条，顺序固定为 通配导入 → 缩进 → TODO/FIXME
    pub fn suggest_improvements(&self, code: &str) -> Vec<String> {
        SUGGESTION_CHECKS
            .iter()
            .filter(|(check, _)| check(code))
            .map(|(_, message)| message.to_string())
            .collect()
    }
}
