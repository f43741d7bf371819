//! 定义了与艺术家、专辑和歌单页面相关的数据模型。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::model::item::MusicVideoPlayable;

/// 对一位艺术家的轻量引用，嵌在条目的 byline 里。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// 艺术家姓名。
    pub name: String,
    /// 艺术家的 browse ID（不总是存在）。
    pub id: Option<String>,
}

/// 对一张专辑的轻量引用，嵌在条目的 byline 里。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    /// 专辑名。
    pub name: String,
    /// 专辑的 browse ID（不总是存在）。
    pub id: Option<String>,
}

/// 专辑的类型，上游以字符串形式渲染。
///
/// 这是一个封闭枚举：无法识别的上游字符串一律回退为 [`AlbumType::Album`]，
/// 绝不因此报错。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
pub enum AlbumType {
    /// EP。
    #[strum(serialize = "EP")]
    Ep,
    /// 专辑。
    #[default]
    #[strum(serialize = "Album")]
    Album,
    /// 单曲。
    #[strum(serialize = "Single")]
    Single,
}

/// 导航端点里用于区分目标页面类型的字符串常量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum PageType {
    /// 艺术家页面。
    #[strum(serialize = "MUSIC_PAGE_TYPE_ARTIST")]
    Artist,
    /// 专辑页面。
    #[strum(serialize = "MUSIC_PAGE_TYPE_ALBUM")]
    Album,
    /// 歌单页面。
    #[strum(serialize = "MUSIC_PAGE_TYPE_PLAYLIST")]
    Playlist,
}

/// 专辑的预览信息，出现在搜索结果和艺术家页面的轮播里。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumPreview {
    /// 专辑的 browse ID。
    pub album_id: Option<String>,
    /// 专辑名。
    pub title: Option<String>,
    /// 专辑类型。
    pub album_type: Option<AlbumType>,
    /// 封面缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 主艺术家姓名。
    pub artist: Option<String>,
    /// 主艺术家的 browse ID。
    pub artist_id: Option<String>,
    /// 发行年份（上游以文本渲染）。
    pub year: Option<String>,
    /// 是否带有 Explicit 标记。
    pub is_explicit: bool,
}

/// 艺术家的最小投影，既用于搜索结果，也作为嵌套引用出现在
/// [`Artist`] 和 [`PlaylistTrack`] 里。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistPreview {
    /// 艺术家姓名。
    pub name: Option<String>,
    /// 艺术家的 browse ID。
    pub artist_id: Option<String>,
    /// 头像缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 订阅数（上游以文本渲染，例如 `"1.2M"`）。
    pub subscribers: Option<String>,
}

/// 艺术家页面的聚合结果。
///
/// 由多个相互独立的子树解析组装而成，允许部分成功：
/// 某个区块缺失时对应列表为空，而不是整个调用失败。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    /// 艺术家的 browse ID。
    pub artist_id: Option<String>,
    /// 姓名。
    pub name: Option<String>,
    /// 简介。
    pub description: Option<String>,
    /// 头图的各尺寸缩略图，保持上游顺序。
    pub thumbnails: Vec<Value>,
    /// “热门歌曲”区块对应的歌单 ID。
    pub songs_playlist_id: Option<String>,
    /// 热门歌曲，保持上游顺序。
    pub songs: Vec<MusicVideoPlayable>,
    /// 专辑轮播，保持上游顺序。
    pub albums: Vec<AlbumPreview>,
    /// 单曲轮播，保持上游顺序。
    pub singles: Vec<AlbumPreview>,
    /// 相似艺术家轮播，保持上游顺序。
    pub suggested_artists: Vec<ArtistPreview>,
    /// 订阅数。
    pub subscribers: Option<String>,
}

/// 歌单的预览信息，出现在歌单搜索结果里。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistPreview {
    /// 歌单 ID（已剥掉 `VL` 前缀）。
    pub playlist_id: Option<String>,
    /// 标题。
    pub title: Option<String>,
    /// 封面缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 歌曲总数。
    pub total_songs: Option<u64>,
}

/// 歌单的创建者。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistAuthor {
    /// 创建者的 browse ID。
    pub id: Option<String>,
    /// 创建者姓名。
    pub name: String,
    /// 创建者头像 URL。
    pub thumbnail_url: Option<String>,
}

/// 一个完整的歌单页面。
///
/// `id` 由 Orchestrator 在解析完成后写入（解析器并不知道请求的是哪个 ID）。
/// `tracks` 的顺序与上游渲染顺序一致，即播放顺序。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    /// 请求方使用的歌单 ID。
    pub id: String,
    /// 标题。
    pub title: String,
    /// 上游标注的歌单类型文本（例如 `"Playlist"`、`"Album"`）。
    pub playlist_type: String,
    /// 年份文本。
    pub year: String,
    /// 封面 URL。
    pub thumbnail_url: String,
    /// 总时长文本（例如 `"2 hours, 8 minutes"`）。
    pub duration_str: String,
    /// 歌单内的曲目，顺序即播放顺序。
    pub tracks: Vec<PlaylistTrack>,
    /// 创建者。
    pub author: PlaylistAuthor,
}

/// 歌单页面内的一条曲目。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// 视频 ID。
    pub id: String,
    /// 标题。
    pub title: String,
    /// 时长文本。
    pub duration_str: String,
    /// 封面缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 主艺术家。
    pub artist: Option<ArtistPreview>,
    /// 所属专辑。
    pub album: Option<AlbumPreview>,
}

/// 专辑页面的头部，只在专辑 Resolver 内部使用：
/// 用它给专辑里的每首歌补上艺术家、专辑名和封面。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AlbumHeader {
    /// 专辑标题。
    pub title: String,
    /// 副标题，通常是主艺术家姓名。
    pub subtitle: String,
    /// 封面 URL。
    pub thumbnail: String,
}
