pub mod analyzer;
pub mod learner;
pub mod optimizer;
pub mod patterns;
pub mod types;

pub use analyzer::CodeAnalyzer;
pub use learner::ImprovementLogger;
pub use optimizer::CodeOptimizer;
pub use patterns::extract_patterns;
pub use types::{
    ImprovementRecord, ImprovementReport, LearningStats, Metrics, PatternTable,
    PerformanceReport,
};
