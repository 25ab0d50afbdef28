//! 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责把各能力串成完整流程：
//!
//! 1. **收集**：遍历全部笔记本的文档树，汇总去重后的文档 ID（`collect`）
//! 2. **批量调度**：定长批次 + 批间暂停地驱动远程请求（`batch`）
//! 3. **两种排版流程**：正文（`body_processor`）与标题（`title_processor`）
//!
//! ## 失败语义
//!
//! 单个笔记本、单篇文档的失败都在各自粒度被捕获并跳过；只有逃出这些
//! 保护范围的错误（例如笔记本列表本身拉不下来）才算致命，由 `App::run`
//! 记入日志后结束本次运行。无论结果如何，结尾都会打出处理结束标记。

pub mod batch;
pub mod body_processor;
pub mod collect;
pub mod title_processor;

use crate::clients::SiyuanClient;
use crate::config::{Config, FormatMode};
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    client: SiyuanClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let client = SiyuanClient::new(&config);
        Self { config, client }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) {
        log_startup(&self.config);

        let result = match self.config.format_mode {
            FormatMode::Body => body_processor::run(&self.client, &self.config).await,
            FormatMode::Title => title_processor::run(&self.client, &self.config).await,
        };

        if let Err(e) = result {
            error!("--- 主程序执行过程中发生致命错误 ---");
            error!("{:#}", e);
        }

        info!("--- 处理结束 ---");
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("--- 开始处理 ---");
    info!("目标地址: {}", config.base_url);
    match config.format_mode {
        FormatMode::Body => info!("排版对象: 正文 (autoSpace)"),
        FormatMode::Title => info!("排版对象: 标题 (renameDoc)"),
    }
    info!("{}", "=".repeat(60));
}
