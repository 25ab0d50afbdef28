//! 正文排版流程
//!
//! 收集全部文档 ID 后，对每篇文档调用思源的 autoSpace 接口。
//! autoSpace 由思源内核在文档正文里补空格，这边只负责分批并发地驱动。

use crate::clients::NoteApi;
use crate::config::Config;
use crate::orchestrator::{batch, collect};
use anyhow::Result;
use tracing::info;

/// 执行正文排版
pub async fn run<A: NoteApi>(api: &A, config: &Config) -> Result<()> {
    let doc_ids = collect::collect_document_ids(api).await?;

    if doc_ids.is_empty() {
        info!("没有文档 ID 需要处理。");
        return Ok(());
    }

    info!("--- 4. 对每个文档 ID 发送 autoSpace 请求 (分批处理) ---");

    let stats = batch::run_in_chunks(&doc_ids, config.batch_size, config.pause(), |doc_id| async move {
        info!("正在发送 autoSpace 请求，文档 ID: {}", doc_id);
        api.auto_space(doc_id).await?;
        info!("文档 ID: {} 的 autoSpace 请求完成。", doc_id);
        Ok(())
    })
    .await;

    info!(
        "--- 所有 autoSpace 请求已发送完毕 (成功 {}, 失败 {}) ---",
        stats.success, stats.failed
    );

    Ok(())
}
