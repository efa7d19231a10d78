//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `AGENT__*` 覆盖（双下划线表示嵌套，如 `AGENT__ANALYZER__COMMENT_MARKER=//`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub agent: AgentSection,
    #[serde(default)]
    pub analyzer: AnalyzerSection,
    #[serde(default)]
    pub learner: LearnerSection,
}

/// [agent] 段：performance_report 中的身份信息
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_capabilities")]
    pub capabilities: Vec<String>,
}

fn default_name() -> String {
    "Self-Improving Coding Agent".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_capabilities() -> Vec<String> {
    vec!["analyze".into(), "optimize".into(), "learn".into()]
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            capabilities: default_capabilities(),
        }
    }
}

/// [analyzer] 段：readability 统计时识别的注释前缀
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerSection {
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
}

fn default_comment_marker() -> String {
    "#".to_string()
}

impl Default for AnalyzerSection {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
        }
    }
}

/// [learner] 段：改进历史保留条数，未设置时不限
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LearnerSection {
    pub history_limit: Option<usize>,
}

/// 从 config 目录加载配置，环境变量 AGENT__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 AGENT__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

/// 重新从磁盘与环境变量加载配置
pub fn reload_config() -> Result<AppConfig, config::ConfigError> {
    load_config(None)
}
