#![warn(missing_docs)]

//! # YtMusic Helper RS
//!
//! 一个用于 YouTube Music 内部 browse/search 接口的 Rust 客户端库，
//! 把深度嵌套、无结构保证的 renderer JSON 响应解析成一小组稳定的
//! 类型化结果：搜索结果、艺术家页面、歌单、专辑和单个可播放条目。
//!
//! ## 主要功能
//!
//! - **搜索**: 按音乐、艺术家、专辑、歌单四种类型搜索。
//! - **浏览**: 获取艺术家页面、歌单页面、专辑内容和新发布页面。
//! - **建议**: 基于一条音乐获取播放建议（电台）。
//!
//! 这些接口没有任何 schema 契约，本库与它唯一的约定是
//! “尽力识别形状、优雅降级”：上游缺失的字段在结果里同样缺失，
//! 单个坏条目会被跳过而不是让整个列表失败，公开操作在任何失败下
//! 都返回文档化的回退值（空列表或 `None`），绝不向调用方抛错。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use ytmusic_helper_rs::{SearchOptions, YtMusicClient};
//!
//! async {
//!     let client = YtMusicClient::new();
//!
//!     let results = client.search_for_music("Bohemian Rhapsody").await;
//!     for item in &results {
//!         println!("{:?} ({:?})", item.title, item.youtube_id);
//!     }
//!
//!     if let Some(playlist) = client
//!         .get_playlist("PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI", &SearchOptions::default())
//!         .await
//!     {
//!         println!("'{}' 共 {} 首", playlist.title, playlist.tracks.len());
//!     }
//! };
//! ```
//!
//! ## 直接使用解析层
//!
//! 公开操作把“空结果”和“解析失败”折叠成同一个回退值。
//! 需要区分两者的调用方可以自己拿到原始响应体，
//! 直接调用 [`resolvers`] 里的函数拿到带类型的 `Result`。
pub mod client;
pub mod context;
pub mod error;
pub mod model;
pub mod navigator;
pub mod parsers;
pub mod resolvers;

pub use crate::{
    client::YtMusicClient,
    context::SearchOptions,
    error::{Result, YtMusicError},
    model::{
        AlbumPreview, AlbumType, Artist, ArtistPreview, Duration, MusicBody, MusicItem,
        MusicVideoPlayable, Playlist, PlaylistPreview, PlaylistTrack,
    },
};

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn init_tracing() {
        use tracing_subscriber::{EnvFilter, FmtSubscriber};
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,ytmusic_helper_rs=debug"));
        let _ = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// 一个完整的端到端测试用例：
    /// 1. 搜索一首歌，取第一条结果的 videoId。
    /// 2. 用它获取播放建议。
    /// 3. 再取建议里第一条的专辑，列出专辑内容。
    #[tokio::test]
    #[ignore]
    async fn test_search_then_suggest_flow() {
        init_tracing();
        let client = YtMusicClient::new();

        let results = client.search_for_music("Get Lucky Daft Punk").await;
        assert!(!results.is_empty(), "搜索结果不应为空");

        let first_id = results
            .iter()
            .find_map(|item| item.youtube_id.clone())
            .expect("搜索结果里应有带 videoId 的条目");
        println!("[INFO] 第一条结果: {:?} ({first_id})", results[0].title);

        let suggestions = client.get_music_based_suggestions(&first_id).await;
        assert!(!suggestions.is_empty(), "播放建议不应为空");
        println!("✅ 端到端流程通过: {} 条建议", suggestions.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_get_new_released_live() {
        init_tracing();
        let client = YtMusicClient::new();
        let released = client.get_new_released(&SearchOptions::default()).await;
        match released {
            Some(playlist) => {
                println!("✅ 新发布页面: '{}'", playlist.title);
            }
            None => {
                println!("✅ 新发布页面按歌单形状解析失败，已正确回退为 None");
            }
        }
    }
}
