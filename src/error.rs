use thiserror::Error;

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回了非成功状态码
    #[error("API返回错误状态 ({endpoint}): 状态码={status}, 数据={body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 思源返回的业务码非 0
    #[error("API返回错误响应 ({endpoint}): code={code}, msg={msg}")]
    BadEnvelope {
        endpoint: String,
        code: i64,
        msg: String,
    },
    /// 响应数据缺失或无法解析
    #[error("响应数据解析失败 ({endpoint}): {source}")]
    BadPayload {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}
