//! # SiYuan Auto Space
//!
//! 批量优化思源笔记所有文档排版的小工具：在中文和英文、数字之间加空格。
//! 支持正文排版（由思源的 autoSpace 接口完成）和标题排版（本地优化标题
//! 后调用 renameDoc 重命名）两种模式。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - `SiyuanClient`，唯一发起 HTTP 请求的模块；`NoteApi`
//!   抽象出五个内核接口能力
//!
//! ### ② 业务能力层（Services）
//! - `services/doc_tree` - 文档树展开能力
//! - `services/title_format` - 标题排版优化能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/collect` - 收集去重后的文档 ID
//! - `orchestrator/batch` - 分批并发与顺序限流
//! - `orchestrator/body_processor` / `orchestrator/title_processor` -
//!   两种完整排版流程
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// 重新导出常用类型
pub use clients::{NoteApi, SiyuanClient};
pub use config::{Config, FormatMode};
pub use error::ApiError;
pub use models::{BlockInfo, DocDetail, DocTreeNode, Notebook};
pub use orchestrator::App;
