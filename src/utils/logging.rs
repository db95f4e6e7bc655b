/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数。日志只写到 stderr，stdout 留给生成的文档。
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// `LOG_FILTER` 优先；否则默认 `warn`，详细模式为 `debug`。
/// 重复初始化时静默忽略。
pub fn init(config: &Config) {
    init_with_default(config, "warn");
}

/// 以指定的默认级别初始化日志（HTTP 服务默认 `info`）
pub fn init_with_default(config: &Config, default_level: &str) {
    let directive = match &config.log_filter {
        Some(filter) => filter.clone(),
        None if config.verbose_logging => "debug".to_string(),
        None => default_level.to_string(),
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录命令启动信息
///
/// # 参数
/// - `program`: 命令名
/// - `args`: 位置参数
pub fn log_startup(program: &str, args: &[String]) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} 启动", program);
    info!("📄 参数: {:?}", args);
    info!("{}", "=".repeat(60));
}

/// 记录题目文档生成结果
///
/// # 参数
/// - `test_cases`: 测试用例数量
/// - `total_score`: 总分
pub fn log_document_ready(test_cases: usize, total_score: u32) {
    info!("✅ 文档生成完成: {} 个测试用例，总分 {}", test_cases, total_score);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("题目描述很长", 2), "题目...");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = Config::default();
        init(&config);
        init(&config);
    }
}
