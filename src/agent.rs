//! 编码 Agent：串联 分析 → 建议 → 优化 → 模式提取 → 改进日志
//!
//! 单线程、同步、单次线性流程；跨调用保留的状态只有 ImprovementLogger 中的历史。
//! 分析与建议基于原始代码，模式提取基于优化后的代码。

use std::path::PathBuf;

use crate::config::{load_config, AppConfig};
use crate::core::AgentError;
use crate::evolution::{
    extract_patterns, CodeAnalyzer, CodeOptimizer, ImprovementLogger, ImprovementReport,
    LearningStats, PerformanceReport,
};

/// 每次 improve_code 写入历史的改进类型标签
pub const FULL_IMPROVEMENT: &str = "full_improvement";

pub struct CodingAgent {
    analyzer: CodeAnalyzer,
    optimizer: CodeOptimizer,
    learner: ImprovementLogger,
    name: String,
    version: String,
    capabilities: Vec<String>,
}

impl Default for CodingAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl CodingAgent {
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            analyzer: CodeAnalyzer::new(cfg.analyzer.comment_marker.clone()),
            optimizer: CodeOptimizer::new(),
            learner: ImprovementLogger::with_history_limit(cfg.learner.history_limit),
            name: cfg.agent.name.clone(),
            version: cfg.agent.version.clone(),
            capabilities: cfg.agent.capabilities.clone(),
        }
    }

    /// 加载配置（默认文件 + 可选文件 + AGENT__* 环境变量）后构建
    pub fn from_config_path(config_path: Option<PathBuf>) -> Result<Self, AgentError> {
        let cfg = load_config(config_path)?;
        Ok(Self::from_config(&cfg))
    }

    pub fn improve_code(&mut self, code: &str) -> ImprovementReport {
        let original_code = code;

        let analysis = self.analyzer.analyze(original_code);
        tracing::debug!(
            "Analyzed: complexity={}, readability={}",
            analysis.complexity,
            analysis.readability
        );

        let suggestions = self.analyzer.suggest_improvements(original_code);
        tracing::debug!("Generated {} suggestions", suggestions.len());

        let optimized = self.optimizer.optimize_loops(original_code);
        let optimized = self.optimizer.optimize_imports(&optimized);

        let patterns = extract_patterns(&optimized);
        self.learner.track_patterns(&patterns);
        tracing::debug!("Extracted {} repeated tokens", patterns.len());

        self.learner.log_improvement(original_code, &optimized, FULL_IMPROVEMENT);

        let learning_stats = self.learner.learning_stats();
        tracing::info!(
            "Improvement run complete ({} total, avg reduction {:.2})",
            learning_stats.total_improvements,
            learning_stats.avg_reduction
        );

        ImprovementReport {
            improved_code: optimized,
            analysis,
            suggestions,
            patterns,
            learning_stats,
        }
    }

    /// 字节输入边界：非 UTF-8 直接拒绝，不执行任何步骤也不写历史
    pub fn improve_bytes(&mut self, source: &[u8]) -> Result<ImprovementReport, AgentError> {
        let code = std::str::from_utf8(source).map_err(|e| {
            AgentError::InvalidInput(format!("source is not valid UTF-8: {e}"))
        })?;
        Ok(self.improve_code(code))
    }

    pub fn learning_stats(&self) -> LearningStats {
        self.learner.learning_stats()
    }

    pub fn learner(&self) -> &ImprovementLogger {
        &self.learner
    }

    pub fn analyzer(&self) -> &CodeAnalyzer {
        &self.analyzer
    }

    pub fn performance_report(&self) -> PerformanceReport {
        PerformanceReport {
            name: self.name.clone(),
            version: self.version.clone(),
            capabilities: self.capabilities.clone(),
            learning_stats: self.learner.learning_stats(),
        }
    }
}
