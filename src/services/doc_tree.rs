//! 文档树展开
//!
//! 思源的文档树深度和分叉都不固定，这里递归走一遍，把全部文档 ID
//! 抽到一个平铺列表里

use crate::models::DocTreeNode;

/// 递归提取所有文档 ID
///
/// 只要节点带有非空 id 字段，就认为是文档 ID（含子文档的父文档同样计入），
/// 然后继续深入其 children。追加顺序为先序、兄弟顺序；去重交给调用方。
pub fn extract_doc_ids(nodes: &[DocTreeNode], id_list: &mut Vec<String>) {
    for node in nodes {
        if !node.id.is_empty() {
            id_list.push(node.id.clone());
        }

        if let Some(children) = &node.children {
            extract_doc_ids(children, id_list);
        }
    }
}
