//! Order Kiosk - 餐厅自助点餐引擎
//!
//! # 架构概述
//!
//! 菜单浏览与结账两个阶段的核心逻辑，与界面无关：
//!
//! - **菜单** (`catalog`): 固定菜单 + 搜索/分组/分类/素食过滤
//! - **购物车** (`cart`): 商品数量账本 + 小计/税/合计
//! - **菜单阶段** (`menu`): 过滤状态与购物车，生成结账交接
//! - **结账阶段** (`checkout`): `Editing → Processing → Placed` 状态机
//!
//! # 模块结构
//!
//! ```text
//! order-kiosk/src/
//! ├── core/          # 配置
//! ├── catalog/       # 菜单与过滤引擎
//! ├── cart/          # 购物车账本与金额
//! ├── menu.rs        # 菜单阶段
//! ├── checkout/      # 结账状态机与下单网关
//! └── utils/         # 日志
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod menu;
pub mod utils;

// Re-export 公共类型
pub use cart::{CartLedger, CartTotals, TaxRate};
pub use catalog::{Catalog, CatalogError, CategorySelection, FilterState};
pub use checkout::{
    CheckoutError, CheckoutSession, CheckoutSettings, OrderSubmitter, SimulatedSubmitter,
};
pub use crate::core::Config;
pub use menu::{CheckoutHandoff, MenuSession};

// Re-export logger functions
pub use utils::logger::{LogFormat, LogSettings, init_logger};

/// 设置运行环境: 加载 .env、读取配置、初始化日志
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&LogSettings::from_config(&config));
    config
}

/// 加载菜单: 配置了 CATALOG_PATH 时读取文件，否则使用内置菜单
pub fn load_catalog(config: &Config) -> Result<Catalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Ok(catalog::sample_catalog()),
    }
}

pub fn print_banner() {
    println!(
        r#"
  ___          _           _  ___         _
 / _ \ _ _ __| |___ _ _  | |/ (_)___ ___| |__
| (_) | '_/ _` / -_) '_| | ' <| / _ (_-<| / /
 \___/|_| \__,_\___|_|   |_|\_\_\___/__/|_\_\
    "#
    );
}
