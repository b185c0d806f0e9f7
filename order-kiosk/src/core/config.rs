use crate::cart::TaxRate;
use crate::checkout::CheckoutSettings;
use std::time::Duration;

/// 点餐终端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | TAX_RATE_PERCENT | 5 | 税率(百分比) |
/// | SUBMISSION_LATENCY_MS | 2000 | 模拟下单耗时(毫秒) |
/// | READY_MIN_MINUTES | 15 | 预计出餐时间下限(分钟) |
/// | READY_MAX_MINUTES | 20 | 预计出餐时间上限(分钟) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后写入滚动日志文件 |
/// | CATALOG_PATH | (未设置) | 菜单 JSON 路径，未设置时使用内置菜单 |
///
/// # 示例
///
/// ```ignore
/// TAX_RATE_PERCENT=12 SUBMISSION_LATENCY_MS=500 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 税率 (百分比, 5 = 5%)
    pub tax_rate_percent: u32,
    /// 模拟下单耗时 (毫秒)
    pub submission_latency_ms: u64,
    /// 预计出餐时间下限 (分钟)
    pub ready_min_minutes: u32,
    /// 预计出餐时间上限 (分钟)
    pub ready_max_minutes: u32,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 菜单 JSON 文件路径
    pub catalog_path: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            tax_rate_percent: std::env::var("TAX_RATE_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            submission_latency_ms: std::env::var("SUBMISSION_LATENCY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            ready_min_minutes: std::env::var("READY_MIN_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15),
            ready_max_minutes: std::env::var("READY_MAX_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(20),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(tax_rate_percent: u32, submission_latency_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.tax_rate_percent = tax_rate_percent;
        config.submission_latency_ms = submission_latency_ms;
        config
    }

    /// 税率
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_percent(self.tax_rate_percent)
    }

    /// 模拟下单耗时
    pub fn submission_latency(&self) -> Duration {
        Duration::from_millis(self.submission_latency_ms)
    }

    /// 结账阶段参数
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            tax_rate: self.tax_rate(),
            ready_min_minutes: self.ready_min_minutes,
            ready_max_minutes: self.ready_max_minutes,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
