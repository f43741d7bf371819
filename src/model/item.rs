//! 定义了与单个可播放条目相关的数据模型。

use serde::{Deserialize, Serialize};

use crate::model::page::{AlbumRef, ArtistRef};

/// 代表一个从时长文本解析出来的时长。
///
/// `label` 保留上游渲染的原始文本（例如 `"3:45"`），
/// `total_seconds` 是按 时:分:秒 位置解释出的总秒数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    /// 上游渲染的时长文本。
    pub label: String,
    /// 解析出的总秒数，非负。
    pub total_seconds: u64,
}

/// 代表一条音乐条目，来自搜索结果、专辑或歌单的列表行。
///
/// 所有字段都是可选的：上游数据本身就可能缺失某个字段，
/// 缺失不是错误，解析层也不会用默认值去填补。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MusicItem {
    /// 条目的视频 ID。
    pub youtube_id: Option<String>,
    /// 标题。
    pub title: Option<String>,
    /// 封面缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 艺术家列表，保持上游渲染顺序。
    pub artists: Vec<ArtistRef>,
    /// 所属专辑。
    pub album: Option<AlbumRef>,
    /// 是否带有 Explicit 标记。
    ///
    /// 只有当标记在结构上存在时才为 `true`；标记缺失即为 `false`。
    pub is_explicit: bool,
    /// 时长。文本无法解析时整个字段缺失。
    pub duration: Option<Duration>,
}

/// 代表一个单独获取的可播放条目。
///
/// 与 [`MusicItem`] 的区别在于时长是数字（秒）而不是文本标签：
/// 它代表一次单独抓取的播放对象，而不是列表中的一行。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MusicVideoPlayable {
    /// 条目的视频 ID。
    pub id: Option<String>,
    /// 标题。
    pub title: Option<String>,
    /// 封面缩略图 URL。
    pub thumbnail_url: Option<String>,
    /// 主艺术家。
    pub artist: Option<ArtistRef>,
    /// 所属专辑。
    pub album: Option<AlbumRef>,
    /// 上游标注的条目类型。
    pub playable_type: Option<String>,
    /// 时长（秒）。
    pub duration_secs: Option<u64>,
}

/// `list_music_from_album` 的返回值：专辑封面加专辑内的条目列表。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MusicBody {
    /// 专辑封面 URL。
    pub album_thumbnail: String,
    /// 专辑内的条目，保持上游渲染顺序。
    pub album_items: Vec<MusicItem>,
}
