//! 核心模块 - 终端配置
//!
//! # 模块结构
//!
//! - [`Config`] - 终端配置 (环境变量)

pub mod config;

pub use config::Config;
