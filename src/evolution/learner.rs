//! 改进日志：记录每次改进前后的行数，推导学习统计
//!
//! 历史只追加、不去重、不回滚；默认不设上限，配置 `history_limit` 后按先进先出淘汰最旧记录。

use chrono::Local;
use uuid::Uuid;

use crate::evolution::types::{line_count, ImprovementRecord, LearningStats, PatternTable};

#[derive(Debug, Default)]
pub struct ImprovementLogger {
    history: Vec<ImprovementRecord>,
    /// 最近一次提取到的模式数（与历史分开跟踪）
    pattern_count: usize,
    history_limit: Option<usize>,
}

impl ImprovementLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(history_limit: Option<usize>) -> Self {
        Self {
            history_limit,
            ..Self::default()
        }
    }

    pub fn log_improvement(&mut self, before: &str, after: &str, improvement_type: &str) {
        let record = ImprovementRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now(),
            improvement_type: improvement_type.to_string(),
            before_lines: line_count(before),
            after_lines: line_count(after),
        };
        tracing::debug!(
            "Logged {} improvement: {} -> {} lines",
            record.improvement_type,
            record.before_lines,
            record.after_lines
        );
        self.history.push(record);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.history_limit else {
            return;
        };
        if self.history.len() > limit {
            let evicted = self.history.len() - limit;
            self.history.drain(..evicted);
            tracing::warn!(
                "Improvement history over limit {}, evicted {} oldest records",
                limit,
                evicted
            );
        }
    }

    /// 记录最近一次提取结果的大小，供 `pattern_count` 使用
    pub fn track_patterns(&mut self, patterns: &PatternTable) {
        self.pattern_count = patterns.len();
    }

    pub fn history(&self) -> &[ImprovementRecord] {
        &self.history
    }

    pub fn last_record(&self) -> Option<&ImprovementRecord> {
        self.history.last()
    }

    pub fn learning_stats(&self) -> LearningStats {
        LearningStats {
            total_improvements: self.history.len(),
            pattern_count: self.pattern_count,
            avg_reduction: self.calculate_avg_reduction(),
        }
    }

    fn calculate_avg_reduction(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: i64 = self.history.iter().map(ImprovementRecord::line_delta).sum();
        total as f64 / self.history.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let logger = ImprovementLogger::new();
        let stats = logger.learning_stats();
        assert_eq!(stats.total_improvements, 0);
        assert_eq!(stats.pattern_count, 0);
        assert_eq!(stats.avg_reduction, 0.0);
    }

    #[test]
    fn test_log_counts_lines() {
        let mut logger = ImprovementLogger::new();
        logger.log_improvement("a\nb\nc", "", "full_improvement");
        let record = logger.last_record().unwrap();
        assert_eq!(record.before_lines, 3);
        assert_eq!(record.after_lines, 1);
        assert_eq!(record.improvement_type, "full_improvement");
    }

    #[test]
    fn test_avg_reduction_mean_of_deltas() {
        let mut logger = ImprovementLogger::new();
        logger.log_improvement("a\nb\nc\nd", "a", "full_improvement");
        logger.log_improvement("a", "a\nb", "full_improvement");
        // (3 + -1) / 2
        assert_eq!(logger.learning_stats().avg_reduction, 1.0);
        assert_eq!(logger.learning_stats().total_improvements, 2);
    }

    #[test]
    fn test_no_dedup() {
        let mut logger = ImprovementLogger::new();
        logger.log_improvement("x", "x", "full_improvement");
        logger.log_improvement("x", "x", "full_improvement");
        assert_eq!(logger.history().len(), 2);
        assert_ne!(logger.history()[0].id, logger.history()[1].id);
    }

    #[test]
    fn test_pattern_count_tracks_latest_table() {
        let mut logger = ImprovementLogger::new();
        let mut table = PatternTable::new();
        table.insert("x".to_string(), 2);
        table.insert("y".to_string(), 3);
        logger.track_patterns(&table);
        assert_eq!(logger.learning_stats().pattern_count, 2);
        logger.track_patterns(&PatternTable::new());
        assert_eq!(logger.learning_stats().pattern_count, 0);
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let mut logger = ImprovementLogger::with_history_limit(Some(2));
        logger.log_improvement("a", "a", "first");
        logger.log_improvement("a", "a", "second");
        logger.log_improvement("a", "a", "third");
        let kinds: Vec<&str> = logger
            .history()
            .iter()
            .map(|r| r.improvement_type.as_str())
            .collect();
        assert_eq!(kinds, vec!["second", "third"]);
    }
}
