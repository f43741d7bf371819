//! 定义了整个 `ytmusic-helper` 库的错误类型 `YtMusicError`。

use thiserror::Error;

/// `ytmusic-helper` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum YtMusicError {
    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 在响应中找不到预期的容器节点。
    ///
    /// 通常意味着上游的响应结构发生了变动，或者请求的 ID 类型不对
    /// （例如把视频 ID 当作专辑 ID 去 browse）。
    #[error("响应结构不匹配: {0}")]
    StructuralMismatch(String),

    /// 单个列表项不符合对应实体的最小结构。
    ///
    /// 这个错误只会在 Resolver 内部被捕获并跳过，不会向上传播。
    #[error("列表项解析失败: {0}")]
    ItemParse(String),

    /// API 返回错误或空数据
    #[error("API 为 `{0}` 返回了错误或空数据")]
    ApiError(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `YtMusicError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, YtMusicError>;
