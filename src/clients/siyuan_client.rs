/// 思源笔记 API 客户端
///
/// 封装所有与思源内核 API 相关的调用逻辑
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{ApiEnvelope, BlockInfo, DocTreeNode, DocTreePayload, Notebook, NotebooksPayload};
use anyhow::Result;
use serde_json::{json, Value};
use tracing::{error, info};

/// 思源 API 能力抽象
///
/// 编排层只依赖这组能力，测试中可以替换为假实现
#[allow(async_fn_in_trait)]
pub trait NoteApi {
    /// 获取所有笔记本信息
    async fn ls_notebooks(&self) -> Result<Vec<Notebook>>;
    /// 获取笔记本的文档树
    async fn list_doc_tree(&self, notebook_id: &str) -> Result<Vec<DocTreeNode>>;
    /// 获取文档详细信息
    async fn block_info(&self, doc_id: &str) -> Result<BlockInfo>;
    /// 对文档正文执行中西文之间加空格
    async fn auto_space(&self, doc_id: &str) -> Result<()>;
    /// 重命名文档
    async fn rename_doc(&self, notebook_id: &str, path: &str, title: &str) -> Result<()>;
}

/// 思源 API 客户端
pub struct SiyuanClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl SiyuanClient {
    /// 创建新的思源客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// 发送带认证的 POST 请求
    ///
    /// 记录请求与响应两条日志；失败时记录错误详情后向调用方传播，
    /// 不做内部重试
    pub async fn post(&self, endpoint: &str, payload: Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        info!("请求 {} - 数据: {}", endpoint, payload);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Token {}", self.auth_token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("请求 {} 失败: {}", endpoint, e);
                ApiError::RequestFailed {
                    endpoint: endpoint.to_string(),
                    source: e,
                }
            })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| {
            error!("请求 {} 失败: {}", endpoint, e);
            ApiError::RequestFailed {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })?;

        if !status.is_success() {
            error!(
                "请求 {} 失败 - 状态码: {}, 数据: {}",
                endpoint,
                status.as_u16(),
                body_text
            );
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: body_text,
            }
            .into());
        }

        info!("响应 {} - 状态: {} - 数据: {}", endpoint, status.as_u16(), body_text);

        let body: Value = serde_json::from_str(&body_text).map_err(|e| ApiError::BadPayload {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        Ok(body)
    }

    /// 剥开思源的 { code, msg, data } 包装，业务码非 0 视为失败
    fn unwrap_envelope(endpoint: &str, body: Value) -> Result<Value, ApiError> {
        let envelope: ApiEnvelope =
            serde_json::from_value(body).map_err(|e| ApiError::BadPayload {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        if envelope.code != 0 {
            return Err(ApiError::BadEnvelope {
                endpoint: endpoint.to_string(),
                code: envelope.code,
                msg: envelope.msg,
            });
        }

        Ok(envelope.data)
    }
}

impl NoteApi for SiyuanClient {
    async fn ls_notebooks(&self) -> Result<Vec<Notebook>> {
        let endpoint = "/api/notebook/lsNotebooks";
        let body = self.post(endpoint, json!({})).await?;
        let data = Self::unwrap_envelope(endpoint, body)?;
        let payload: NotebooksPayload =
            serde_json::from_value(data).map_err(|e| ApiError::BadPayload {
                endpoint: endpoint.to_string(),
                source: e,
            })?;
        Ok(payload.notebooks)
    }

    async fn list_doc_tree(&self, notebook_id: &str) -> Result<Vec<DocTreeNode>> {
        let endpoint = "/api/filetree/listDocTree";
        let body = self
            .post(endpoint, json!({ "notebook": notebook_id, "path": "/" }))
            .await?;
        let data = Self::unwrap_envelope(endpoint, body)?;
        let payload: DocTreePayload =
            serde_json::from_value(data).map_err(|e| ApiError::BadPayload {
                endpoint: endpoint.to_string(),
                source: e,
            })?;
        Ok(payload.tree)
    }

    async fn block_info(&self, doc_id: &str) -> Result<BlockInfo> {
        let endpoint = "/api/block/getBlockInfo";
        let body = self.post(endpoint, json!({ "id": doc_id })).await?;
        let data = Self::unwrap_envelope(endpoint, body)?;
        let info: BlockInfo = serde_json::from_value(data).map_err(|e| ApiError::BadPayload {
            endpoint: endpoint.to_string(),
            source: e,
        })?;
        Ok(info)
    }

    async fn auto_space(&self, doc_id: &str) -> Result<()> {
        let endpoint = "/api/format/autoSpace";
        let body = self.post(endpoint, json!({ "id": doc_id })).await?;
        Self::unwrap_envelope(endpoint, body)?;
        Ok(())
    }

    async fn rename_doc(&self, notebook_id: &str, path: &str, title: &str) -> Result<()> {
        let endpoint = "/api/filetree/renameDoc";
        let body = self
            .post(
                endpoint,
                json!({ "notebook": notebook_id, "path": path, "title": title }),
            )
            .await?;
        Self::unwrap_envelope(endpoint, body)?;
        Ok(())
    }
}
