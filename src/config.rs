use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 权重分配使用的随机种子，未设置时由系统熵初始化
    pub weight_seed: Option<u64>,
    /// 完整的日志过滤指令，优先于 verbose_logging
    pub log_filter: Option<String>,
    /// HTTP 服务监听地址
    pub server_host: String,
    /// HTTP 服务监听端口
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            weight_seed: None,
            log_filter: None,
            server_host: "0.0.0.0".to_string(),
            server_port: 3001,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，解析失败的值回退到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            weight_seed: lookup("WEIGHT_SEED").and_then(|v| v.trim().parse().ok()).or(default.weight_seed),
            log_filter: lookup("LOG_FILTER").filter(|v| !v.trim().is_empty()).or(default.log_filter),
            server_host: lookup("SERVER_HOST")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default.server_host),
            server_port: lookup("SERVER_PORT").and_then(|v| v.trim().parse().ok()).unwrap_or(default.server_port),
        }
    }

    /// `host:port` 形式的监听地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// 权重分配使用的随机源
    pub fn weight_rng(&self) -> StdRng {
        match self.weight_seed {
            Some(seed) => {
                info!("🎲 使用固定随机种子: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}
