//! 思源 API 数据模型
//!
//! 所有结构都在反序列化边界做显式校验：缺字段的响应走软失败路径，
//! 而不是在后续流程里才发现字段不存在

use serde::Deserialize;

/// 笔记本
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub name: String,
}

/// 文档树节点（任意深度、任意分叉）
///
/// 带有非空 id 的节点视为一篇文档；含子文档的父文档同样是文档
#[derive(Debug, Clone, Deserialize)]
pub struct DocTreeNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub children: Option<Vec<DocTreeNode>>,
}

/// 思源 API 统一响应包装
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// lsNotebooks 的响应数据
#[derive(Debug, Deserialize)]
pub struct NotebooksPayload {
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
}

/// listDocTree 的响应数据
#[derive(Debug, Deserialize)]
pub struct DocTreePayload {
    #[serde(default)]
    pub tree: Vec<DocTreeNode>,
}

/// getBlockInfo 的原始响应（字段可能缺失）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockInfo {
    #[serde(rename = "box")]
    pub box_id: Option<String>,
    pub path: Option<String>,
    #[serde(rename = "rootTitle")]
    pub root_title: Option<String>,
}

/// 校验通过的文档详情
#[derive(Debug, Clone)]
pub struct DocDetail {
    /// 所属笔记本 ID
    pub box_id: String,
    /// 笔记本内的文档路径
    pub path: String,
    /// 当前文档标题
    pub root_title: String,
}

impl BlockInfo {
    /// 三个字段齐全才算有效详情，否则调用方按信息不完整跳过
    pub fn into_detail(self) -> Option<DocDetail> {
        Some(DocDetail {
            box_id: self.box_id?,
            path: self.path?,
            root_title: self.root_title?,
        })
    }
}
