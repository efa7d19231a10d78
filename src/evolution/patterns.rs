//! 模式提取：按空白切分 token 并统计重复出现的词
//!
//! 不做大小写或标点归一化，`x+y` 与 `x` 是不同 token。

use crate::evolution::types::{is_separator, PatternTable};

/// 统计词频，只保留出现 2 次及以上的 token
pub fn extract_patterns(code: &str) -> PatternTable {
    let mut counts = PatternTable::new();
    for token in code.split(is_separator).filter(|t| !t.is_empty()) {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count > 1);
    counts
}
