//! 解析各种列表行形态的音乐条目。
//!
//! 同一个事实在上游有多种等价编码：搜索结果行、专辑内行、歌单内行
//! 和播放队列里的建议项各有一套 renderer，这里每种一个解析函数。

use serde_json::Value;

use crate::{
    error::{Result, YtMusicError},
    model::{
        item::{Duration, MusicItem, MusicVideoPlayable},
        page::{AlbumRef, ArtistRef, PageType},
    },
    navigator::{
        Step::{Index, Key},
        navigate, navigate_array, navigate_str,
    },
    parsers::{
        duration::parse_duration_label, fixed_column_text, flex_column_runs, flex_column_text,
        is_explicit, last_thumbnail_of, run_browse_id, runs_of_page_type, thumbnail_url,
    },
};

/// 从一组 byline run 里收集所有艺术家引用，保持顺序。
pub(crate) fn collect_artist_refs(runs: &[Value]) -> Vec<ArtistRef> {
    runs_of_page_type(runs, PageType::Artist)
        .filter_map(|run| {
            let name = navigate_str(run, &[Key("text")])?;
            Some(ArtistRef {
                name: name.to_string(),
                id: run_browse_id(run).map(str::to_string),
            })
        })
        .collect()
}

/// 从一组 byline run 里取第一个专辑引用。
pub(crate) fn first_album_ref(runs: &[Value]) -> Option<AlbumRef> {
    let run = runs_of_page_type(runs, PageType::Album).next()?;
    Some(AlbumRef {
        name: navigate_str(run, &[Key("text")])?.to_string(),
        id: run_browse_id(run).map(str::to_string),
    })
}

/// 在一组 run 里从后往前找第一个时长标签。
fn last_duration_run(runs: &[Value]) -> Option<Duration> {
    runs.iter().rev().find_map(|run| {
        let text = navigate_str(run, &[Key("text")])?;
        let total_seconds = parse_duration_label(text)?;
        Some(Duration {
            label: text.to_string(),
            total_seconds,
        })
    })
}

fn list_item_renderer(content: &Value) -> Result<&Value> {
    navigate(content, &[Key("musicResponsiveListItemRenderer")]).ok_or_else(|| {
        YtMusicError::ItemParse("条目缺少 musicResponsiveListItemRenderer".to_string())
    })
}

/// 解析一条音乐搜索结果行。
///
/// 行内信息全部来自 flex 列：第 0 列是标题，第 1 列的 run 混排着
/// 艺术家、专辑和时长，靠导航端点的页面类型区分。
pub fn parse_music_item(content: &Value) -> Result<MusicItem> {
    let renderer = list_item_renderer(content)?;
    let byline = flex_column_runs(renderer, 1);

    Ok(MusicItem {
        youtube_id: navigate_str(renderer, &[Key("playlistItemData"), Key("videoId")])
            .map(str::to_string),
        title: flex_column_text(renderer, 0).map(str::to_string),
        thumbnail_url: thumbnail_url(renderer),
        artists: byline.map(|runs| collect_artist_refs(runs)).unwrap_or_default(),
        album: byline.and_then(|runs| first_album_ref(runs)),
        is_explicit: is_explicit(renderer),
        duration: byline.and_then(|runs| last_duration_run(runs)),
    })
}

/// 解析专辑页面里的一行。
///
/// 专辑行没有自己的封面和专辑引用，时长在 fixed 列里；
/// 缺的部分由专辑 Resolver 用头部信息补齐。
pub fn parse_music_in_album_item(content: &Value) -> Result<MusicItem> {
    let renderer = list_item_renderer(content)?;

    Ok(MusicItem {
        youtube_id: navigate_str(renderer, &[Key("playlistItemData"), Key("videoId")])
            .map(str::to_string),
        title: flex_column_text(renderer, 0).map(str::to_string),
        thumbnail_url: None,
        artists: flex_column_runs(renderer, 1)
            .map(|runs| collect_artist_refs(runs))
            .unwrap_or_default(),
        album: None,
        is_explicit: is_explicit(renderer),
        duration: fixed_column_text(renderer).and_then(|label| {
            Some(Duration {
                label: label.to_string(),
                total_seconds: parse_duration_label(label)?,
            })
        }),
    })
}

/// 解析歌单列表接口返回的一行。
pub fn parse_music_in_playlist_item(content: &Value) -> Result<MusicItem> {
    let renderer = list_item_renderer(content)?;

    let album = flex_column_runs(renderer, 2)
        .and_then(|runs| first_album_ref(runs))
        .or_else(|| {
            // 部分客户端版本把专辑挤进第 1 列
            flex_column_runs(renderer, 1).and_then(|runs| first_album_ref(runs))
        });

    Ok(MusicItem {
        youtube_id: navigate_str(renderer, &[Key("playlistItemData"), Key("videoId")])
            .map(str::to_string),
        title: flex_column_text(renderer, 0).map(str::to_string),
        thumbnail_url: thumbnail_url(renderer),
        artists: flex_column_runs(renderer, 1)
            .map(|runs| collect_artist_refs(runs))
            .unwrap_or_default(),
        album,
        is_explicit: is_explicit(renderer),
        duration: fixed_column_text(renderer)
            .and_then(|label| {
                Some(Duration {
                    label: label.to_string(),
                    total_seconds: parse_duration_label(label)?,
                })
            })
            .or_else(|| flex_column_runs(renderer, 1).and_then(|runs| last_duration_run(runs))),
    })
}

fn panel_video_renderer(content: &Value) -> Result<&Value> {
    navigate(content, &[Key("playlistPanelVideoRenderer")])
        .ok_or_else(|| YtMusicError::ItemParse("条目缺少 playlistPanelVideoRenderer".to_string()))
}

/// 解析播放队列（next 接口）里的一条建议项。
pub fn parse_suggestion_item(content: &Value) -> Result<MusicItem> {
    let renderer = panel_video_renderer(content)?;
    let byline = navigate_array(renderer, &[Key("longBylineText"), Key("runs")]);

    Ok(MusicItem {
        youtube_id: navigate_str(renderer, &[Key("videoId")]).map(str::to_string),
        title: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .map(str::to_string),
        thumbnail_url: navigate_array(renderer, &[Key("thumbnail"), Key("thumbnails")])
            .and_then(|thumbnails| last_thumbnail_of(thumbnails)),
        artists: byline.map(|runs| collect_artist_refs(runs)).unwrap_or_default(),
        album: byline.and_then(|runs| first_album_ref(runs)),
        is_explicit: is_explicit(renderer),
        duration: navigate_str(
            renderer,
            &[Key("lengthText"), Key("runs"), Index(0), Key("text")],
        )
        .and_then(|label| {
            Some(Duration {
                label: label.to_string(),
                total_seconds: parse_duration_label(label)?,
            })
        }),
    })
}

/// 解析单独抓取的可播放条目。
///
/// 与列表行不同，它的时长是数字（秒），类型来自 watch 端点的标注。
pub fn parse_playable_item(content: &Value) -> Result<MusicVideoPlayable> {
    let renderer = panel_video_renderer(content)?;
    let byline = navigate_array(renderer, &[Key("longBylineText"), Key("runs")]);

    Ok(MusicVideoPlayable {
        id: navigate_str(renderer, &[Key("videoId")]).map(str::to_string),
        title: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .map(str::to_string),
        thumbnail_url: navigate_array(renderer, &[Key("thumbnail"), Key("thumbnails")])
            .and_then(|thumbnails| last_thumbnail_of(thumbnails)),
        artist: byline.and_then(|runs| collect_artist_refs(runs).into_iter().next()),
        album: byline.and_then(|runs| first_album_ref(runs)),
        playable_type: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("watchEndpoint"),
                Key("watchEndpointMusicSupportedConfigs"),
                Key("watchEndpointMusicConfig"),
                Key("musicVideoType"),
            ],
        )
        .map(str::to_string),
        duration_secs: navigate_str(
            renderer,
            &[Key("lengthText"), Key("runs"), Index(0), Key("text")],
        )
        .and_then(parse_duration_label),
    })
}
