//! 文档 ID 收集
//!
//! 两种排版流程共用的前半段：列出全部笔记本，逐个拉取文档树并展开，
//! 汇总成一份按首次出现顺序去重的文档 ID 列表。

use crate::clients::NoteApi;
use crate::services::doc_tree;
use anyhow::Result;
use std::collections::HashSet;
use tracing::{error, info};

/// 收集所有笔记本中的全部文档 ID
///
/// 文档 ID 全局唯一，跨笔记本去重。笔记本列表获取失败向上传播（致命）；
/// 单个笔记本的文档树获取失败只记录日志并跳过该笔记本。
pub async fn collect_document_ids<A: NoteApi>(api: &A) -> Result<Vec<String>> {
    info!("--- 1. 获取所有笔记本信息 ---");
    let notebooks = api.ls_notebooks().await?;

    if notebooks.is_empty() {
        info!("没有找到任何笔记本。");
        return Ok(Vec::new());
    }
    info!("找到 {} 个笔记本。", notebooks.len());

    let mut seen = HashSet::new();
    let mut all_doc_ids = Vec::new();

    for notebook in &notebooks {
        info!("--- 2. 处理笔记本: {} (ID: {}) ---", notebook.name, notebook.id);

        match api.list_doc_tree(&notebook.id).await {
            Ok(tree) if !tree.is_empty() => {
                let mut notebook_doc_ids = Vec::new();
                doc_tree::extract_doc_ids(&tree, &mut notebook_doc_ids);
                info!(
                    "笔记本 \"{}\" 中找到 {} 篇文档 ID。",
                    notebook.name,
                    notebook_doc_ids.len()
                );

                for id in notebook_doc_ids {
                    if seen.insert(id.clone()) {
                        all_doc_ids.push(id);
                    }
                }
            }
            Ok(_) => {
                info!("笔记本 \"{}\" 没有找到文档树数据或为空。", notebook.name);
            }
            Err(e) => {
                error!(
                    "处理笔记本 \"{}\" (ID: {}) 的文档树时发生错误，跳过此笔记本。({:#})",
                    notebook.name, notebook.id, e
                );
            }
        }
    }

    info!("--- 3. 所有文档 ID 收集完毕 ---");
    info!("总共收集到 {} 个唯一文档 ID。", all_doc_ids.len());

    Ok(all_doc_ids)
}
