//! Coding Agent 演示入口
//!
//! 用法：`coding-agent [FILE|-]`。不带参数时处理内置示例，`-` 表示从 stdin 读取。

use std::io::Read;

use anyhow::Context;
use coding_agent::{observability, CodingAgent};

const SAMPLE_CODE: &str = "
def calc(x,y):
    if x>0:
        return x+y
    else:
        return x-y
";

fn read_source(arg: Option<String>) -> anyhow::Result<Vec<u8>> {
    match arg.as_deref() {
        None => Ok(SAMPLE_CODE.as_bytes().to_vec()),
        Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read {}", path)),
    }
}

fn main() -> anyhow::Result<()> {
    observability::init();

    let mut agent = CodingAgent::from_config_path(None).unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        CodingAgent::new()
    });

    let source = read_source(std::env::args().nth(1))?;
    let report = agent
        .improve_bytes(&source)
        .context("Improvement run failed")?;

    println!("{}", report.to_json_pretty().context("Failed to render report")?);
    println!(
        "{}",
        agent
            .performance_report()
            .to_json_pretty()
            .context("Failed to render performance report")?
    );

    Ok(())
}
