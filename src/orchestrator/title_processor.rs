//! 标题排版流程
//!
//! 收集全部文档 ID 后分两个阶段：先逐个获取文档详情（所属笔记本、路径、
//! 当前标题），再对标题做本地排版优化，有变化的调用 renameDoc 重命名。
//! 两个阶段都是一次一个地发请求，按累计请求数限流。

use crate::clients::NoteApi;
use crate::config::Config;
use crate::models::DocDetail;
use crate::orchestrator::{batch::RequestPacer, collect};
use crate::services::title_format;
use anyhow::Result;
use tracing::{error, info, warn};

/// 执行标题排版
pub async fn run<A: NoteApi>(api: &A, config: &Config) -> Result<()> {
    let doc_ids = collect::collect_document_ids(api).await?;

    if doc_ids.is_empty() {
        info!("没有文档 ID 需要处理。");
        return Ok(());
    }

    let details = fetch_details(api, config, &doc_ids).await;
    let rename_count = rename_documents(api, config, &details).await;

    info!("--- 6. 处理结果总结 ---");
    info!("总共发现 {} 篇唯一文档。", doc_ids.len());
    info!("其中 {} 篇文档的标题被优化并重命名。", rename_count);

    Ok(())
}

/// 逐个获取文档详情；信息不完整的文档告警后排除在重命名阶段之外
async fn fetch_details<A: NoteApi>(
    api: &A,
    config: &Config,
    doc_ids: &[String],
) -> Vec<(String, DocDetail)> {
    info!("--- 4. 获取每个文档的详细信息 ---");

    let mut details = Vec::new();
    let mut pacer = RequestPacer::new(config.request_batch_size, config.pause(), "请求");

    for doc_id in doc_ids {
        match api.block_info(doc_id).await {
            Ok(block) => match block.into_detail() {
                Some(detail) => {
                    info!(
                        "获取文档 ID: {} 的信息成功。标题: \"{}\"",
                        doc_id, detail.root_title
                    );
                    details.push((doc_id.clone(), detail));
                }
                None => {
                    warn!("文档 ID: {} 的信息不完整，跳过。", doc_id);
                }
            },
            Err(e) => {
                error!("获取文档 ID: {} 的信息失败，跳过。({:#})", doc_id, e);
            }
        }

        pacer.tick(doc_ids.len()).await;
    }

    info!("所有文档详细信息获取完毕。");
    details
}

/// 优化标题并重命名有变化的文档，返回重命名成功的数量
async fn rename_documents<A: NoteApi>(
    api: &A,
    config: &Config,
    details: &[(String, DocDetail)],
) -> usize {
    info!("--- 5. 遍历文档，优化标题并重命名 ---");

    let mut rename_count = 0;
    let mut pacer = RequestPacer::new(config.request_batch_size, config.pause(), "重命名请求");

    for (doc_id, detail) in details {
        let original_title = &detail.root_title;
        let optimized_title = title_format::optimize_title(original_title);

        if *original_title != optimized_title {
            info!("文档 ID: {}", doc_id);
            info!("  原标题: \"{}\"", original_title);
            info!("  新标题: \"{}\"", optimized_title);

            match api.rename_doc(&detail.box_id, &detail.path, &optimized_title).await {
                Ok(()) => {
                    info!("  文档 ID: {} 重命名成功。", doc_id);
                    rename_count += 1;
                }
                Err(e) => {
                    error!("  文档 ID: {} 重命名失败。({:#})", doc_id, e);
                }
            }
        } else {
            info!("文档 ID: {} 标题无需优化: \"{}\"", doc_id, original_title);
        }

        pacer.tick(details.len()).await;
    }

    rename_count
}
