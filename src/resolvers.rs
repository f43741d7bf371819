//! 容器定位层：在整页响应里找到正确的内容容器并逐项解析。
//!
//! 每个公开的结果类型对应一个 Resolver。容器的定位按固定的偏好顺序
//! 检查键是否存在（每个函数的文档里写明了顺序），首个命中即采用。
//! 迭代子节点时逐项隔离失败：单个坏条目只会被记录并跳过，
//! 绝不让整个列表的解析失败。
//!
//! 只有当容器本身无法定位（上游改版、ID 类型不对）时才返回
//! [`YtMusicError::StructuralMismatch`]，它与“容器存在但为空”
//! （`Ok` 且列表为空）是两种不同的结果。

use serde_json::Value;

use crate::{
    error::{Result, YtMusicError},
    model::{
        item::{MusicBody, MusicItem, MusicVideoPlayable},
        page::{
            AlbumPreview, AlbumRef, AlbumType, Artist, ArtistPreview, ArtistRef, PageType,
            Playlist, PlaylistPreview,
        },
    },
    navigator::{
        Step::{Index, Key},
        navigate, navigate_array, navigate_str,
    },
    parsers::{
        album::{parse_album_header, parse_album_item, parse_album_preview},
        artist::{parse_artist_search_result, parse_suggested_artist},
        item::{
            parse_music_in_album_item, parse_music_in_playlist_item, parse_music_item,
            parse_playable_item, parse_suggestion_item,
        },
        playlist::{parse_playlist_header, parse_playlist_search_result, parse_playlist_track},
        run_page_type,
    },
};

/// 逐项解析容器的子节点，失败的条目记录后跳过，顺序保持不变。
fn parse_each<T>(
    container: &'static str,
    contents: &[Value],
    parse: impl Fn(&Value) -> Result<T>,
) -> Vec<T> {
    let mut results = Vec::with_capacity(contents.len());
    for (index, content) in contents.iter().enumerate() {
        match parse(content) {
            Ok(item) => results.push(item),
            Err(e) => {
                tracing::warn!(container, index, error = %e, "跳过无法解析的列表项");
            }
        }
    }
    results
}

/// 在一组 section 里按偏好顺序找内容容器，返回它的子节点。
///
/// 容器存在但没有 `contents` 时视为空容器，返回空切片。
fn shelf_contents<'a>(sections: &'a [Value], preference: &[&str]) -> Option<&'a [Value]> {
    for &key in preference {
        for section in sections {
            if let Some(shelf) = navigate(section, &[Key(key)]) {
                let contents = navigate_array(shelf, &[Key("contents")])
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                return Some(contents);
            }
        }
    }
    None
}

/// 定位搜索响应里的结果列表。
///
/// 偏好顺序：`musicShelfRenderer` → `musicCarouselShelfRenderer`。
fn search_contents(body: &Value) -> Result<&[Value]> {
    let sections = navigate_array(
        body,
        &[
            Key("contents"),
            Key("tabbedSearchResultsRenderer"),
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("sectionListRenderer"),
            Key("contents"),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("搜索响应里找不到 sectionListRenderer".to_string())
    })?;

    shelf_contents(
        sections,
        &["musicShelfRenderer", "musicCarouselShelfRenderer"],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("搜索响应里没有任何已知的结果容器".to_string())
    })
}

/// 解析音乐搜索响应。
pub fn resolve_search_music(body: &Value) -> Result<Vec<MusicItem>> {
    Ok(parse_each("search_music", search_contents(body)?, parse_music_item))
}

/// 解析专辑搜索响应。
pub fn resolve_search_albums(body: &Value) -> Result<Vec<AlbumPreview>> {
    Ok(parse_each("search_albums", search_contents(body)?, parse_album_item))
}

/// 解析艺术家搜索响应。
pub fn resolve_search_artists(body: &Value) -> Result<Vec<ArtistPreview>> {
    Ok(parse_each(
        "search_artists",
        search_contents(body)?,
        parse_artist_search_result,
    ))
}

/// 解析歌单搜索响应。
pub fn resolve_search_playlists(body: &Value) -> Result<Vec<PlaylistPreview>> {
    Ok(parse_each(
        "search_playlists",
        search_contents(body)?,
        parse_playlist_search_result,
    ))
}

/// 定位 next 响应里的播放队列面板。
fn queue_panel_contents(body: &Value) -> Result<&[Value]> {
    navigate_array(
        body,
        &[
            Key("contents"),
            Key("singleColumnMusicWatchNextResultsRenderer"),
            Key("tabbedRenderer"),
            Key("watchNextTabbedResultsRenderer"),
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("musicQueueRenderer"),
            Key("content"),
            Key("playlistPanelRenderer"),
            Key("contents"),
        ],
    )
    .map(Vec::as_slice)
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("next 响应里找不到 playlistPanelRenderer".to_string())
    })
}

/// 解析播放建议响应。
///
/// 队列的第一项是种子曲目本身，跳过它，只保留建议。
pub fn resolve_suggestions(body: &Value) -> Result<Vec<MusicItem>> {
    let contents = queue_panel_contents(body)?;
    let suggestions = contents.get(1..).unwrap_or(&[]);
    Ok(parse_each("suggestions", suggestions, parse_suggestion_item))
}

/// 解析单个可播放条目：取播放队列里的第一项。
pub fn resolve_playable_item(body: &Value) -> Result<MusicVideoPlayable> {
    let contents = queue_panel_contents(body)?;
    let first = contents.first().ok_or_else(|| {
        YtMusicError::StructuralMismatch("播放队列为空".to_string())
    })?;
    parse_playable_item(first)
}

/// 解析专辑页面响应（两栏布局）。
///
/// 头部取自 `tabs[0]` 下的首个 section，条目取自 `secondaryContents`
/// 下的 `musicShelfRenderer`。专辑行缺少的艺术家、专辑引用和封面
/// 用头部信息补齐。
pub fn resolve_album_body(body: &Value) -> Result<MusicBody> {
    let two_column = navigate(body, &[Key("contents"), Key("twoColumnBrowseResultsRenderer")])
        .ok_or_else(|| {
            YtMusicError::StructuralMismatch(
                "专辑响应里找不到 twoColumnBrowseResultsRenderer".to_string(),
            )
        })?;

    let header_section = navigate(
        two_column,
        &[
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("sectionListRenderer"),
            Key("contents"),
            Index(0),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("专辑响应里找不到头部 section".to_string())
    })?;
    let header = parse_album_header(header_section)?;

    let sections = navigate_array(
        two_column,
        &[
            Key("secondaryContents"),
            Key("sectionListRenderer"),
            Key("contents"),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("专辑响应里找不到 secondaryContents".to_string())
    })?;
    let contents = shelf_contents(sections, &["musicShelfRenderer"]).ok_or_else(|| {
        YtMusicError::StructuralMismatch("专辑响应里没有 musicShelfRenderer".to_string())
    })?;

    let mut items = parse_each("album_items", contents, parse_music_in_album_item);
    for item in &mut items {
        item.album = Some(AlbumRef {
            name: header.title.clone(),
            id: None,
        });
        if item.artists.is_empty() && !header.subtitle.is_empty() {
            item.artists = vec![ArtistRef {
                name: header.subtitle.clone(),
                id: None,
            }];
        }
        if !header.thumbnail.is_empty() {
            item.thumbnail_url = Some(header.thumbnail.clone());
        }
    }

    Ok(MusicBody {
        album_thumbnail: header.thumbnail,
        album_items: items,
    })
}

/// 解析歌单列表响应（单栏布局）。
///
/// 偏好顺序：`musicPlaylistShelfRenderer` → `musicCarouselShelfRenderer`。
pub fn resolve_playlist_items(body: &Value) -> Result<Vec<MusicItem>> {
    let sections = navigate_array(
        body,
        &[
            Key("contents"),
            Key("singleColumnBrowseResultsRenderer"),
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("sectionListRenderer"),
            Key("contents"),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("歌单响应里找不到 sectionListRenderer".to_string())
    })?;

    let contents = shelf_contents(
        sections,
        &["musicPlaylistShelfRenderer", "musicCarouselShelfRenderer"],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("歌单响应里没有任何已知的内容容器".to_string())
    })?;

    Ok(parse_each("playlist_items", contents, parse_music_in_playlist_item))
}

/// 解析完整的歌单页面响应（两栏布局）。
///
/// 头部取自 `tabs[0]` 下的首个 section；曲目偏好顺序：
/// `musicPlaylistShelfRenderer` → `musicShelfRenderer`。
/// 返回的 `Playlist.id` 为空，由 Orchestrator 写入请求时用的 ID。
pub fn resolve_playlist_page(body: &Value) -> Result<Playlist> {
    let two_column = navigate(body, &[Key("contents"), Key("twoColumnBrowseResultsRenderer")])
        .ok_or_else(|| {
            YtMusicError::StructuralMismatch(
                "歌单页面响应里找不到 twoColumnBrowseResultsRenderer".to_string(),
            )
        })?;

    let header_section = navigate(
        two_column,
        &[
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("sectionListRenderer"),
            Key("contents"),
            Index(0),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("歌单页面响应里找不到头部 section".to_string())
    })?;
    let mut playlist = parse_playlist_header(header_section)?;

    let sections = navigate_array(
        two_column,
        &[
            Key("secondaryContents"),
            Key("sectionListRenderer"),
            Key("contents"),
        ],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("歌单页面响应里找不到 secondaryContents".to_string())
    })?;
    let contents = shelf_contents(
        sections,
        &["musicPlaylistShelfRenderer", "musicShelfRenderer"],
    )
    .ok_or_else(|| {
        YtMusicError::StructuralMismatch("歌单页面响应里没有曲目容器".to_string())
    })?;

    playlist.tracks = parse_each("playlist_tracks", contents, parse_playlist_track);
    Ok(playlist)
}

/// 解析艺术家页面响应。
///
/// 聚合结果由多个相互独立的子树组装：头部、热门歌曲 shelf 和若干
/// 轮播。某个区块缺失或解析失败时对应字段为空，不影响其余区块。
/// 轮播的归类不依赖标题文案：卡片导航到艺术家页面的进
/// `suggested_artists`；导航到专辑页面的按专辑类型拆成
/// `albums` 和 `singles`。
pub fn resolve_artist_page(body: &Value) -> Result<Artist> {
    let mut artist = Artist::default();

    let header = navigate(body, &[Key("header"), Key("musicImmersiveHeaderRenderer")])
        .or_else(|| navigate(body, &[Key("header"), Key("musicVisualHeaderRenderer")]));
    let sections = navigate_array(
        body,
        &[
            Key("contents"),
            Key("singleColumnBrowseResultsRenderer"),
            Key("tabs"),
            Index(0),
            Key("tabRenderer"),
            Key("content"),
            Key("sectionListRenderer"),
            Key("contents"),
        ],
    );

    if header.is_none() && sections.is_none() {
        return Err(YtMusicError::StructuralMismatch(
            "艺术家响应里既没有头部也没有内容区".to_string(),
        ));
    }

    if let Some(header) = header {
        artist.name =
            navigate_str(header, &[Key("title"), Key("runs"), Index(0), Key("text")])
                .map(str::to_string);
        artist.description = navigate_str(
            header,
            &[Key("description"), Key("runs"), Index(0), Key("text")],
        )
        .map(str::to_string);
        artist.subscribers = navigate_str(
            header,
            &[
                Key("subscriptionButton"),
                Key("subscribeButtonRenderer"),
                Key("subscriberCountText"),
                Key("runs"),
                Index(0),
                Key("text"),
            ],
        )
        .map(str::to_string);
        artist.thumbnails = navigate_array(
            header,
            &[
                Key("thumbnail"),
                Key("musicThumbnailRenderer"),
                Key("thumbnail"),
                Key("thumbnails"),
            ],
        )
        .cloned()
        .unwrap_or_default();
    }

    let Some(sections) = sections else {
        return Ok(artist);
    };

    for section in sections {
        if let Some(shelf) = navigate(section, &[Key("musicShelfRenderer")]) {
            // 热门歌曲 shelf，只取第一个
            if artist.songs.is_empty() {
                artist.songs_playlist_id = navigate_str(
                    shelf,
                    &[
                        Key("title"),
                        Key("runs"),
                        Index(0),
                        Key("navigationEndpoint"),
                        Key("browseEndpoint"),
                        Key("browseId"),
                    ],
                )
                .map(|id| id.strip_prefix("VL").unwrap_or(id).to_string());

                let contents = navigate_array(shelf, &[Key("contents")])
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                artist.songs = parse_each("artist_songs", contents, |content| {
                    let item = parse_music_in_playlist_item(content)?;
                    Ok(MusicVideoPlayable {
                        id: item.youtube_id,
                        title: item.title,
                        thumbnail_url: item.thumbnail_url,
                        artist: item.artists.into_iter().next(),
                        album: item.album,
                        playable_type: None,
                        duration_secs: item.duration.map(|d| d.total_seconds),
                    })
                });
            }
            continue;
        }

        let Some(carousel) = navigate(section, &[Key("musicCarouselShelfRenderer")]) else {
            continue;
        };
        let contents = navigate_array(carousel, &[Key("contents")])
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        match carousel_kind(contents) {
            Some(PageType::Artist) => {
                artist.suggested_artists =
                    parse_each("suggested_artists", contents, parse_suggested_artist);
            }
            Some(PageType::Album) => {
                let previews = parse_each("artist_albums", contents, parse_album_preview);
                for preview in previews {
                    if preview.album_type == Some(AlbumType::Single) {
                        artist.singles.push(preview);
                    } else {
                        artist.albums.push(preview);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(artist)
}

/// 判断一个轮播承载的是哪类卡片：取第一张卡片导航端点的页面类型。
fn carousel_kind(contents: &[Value]) -> Option<PageType> {
    let first = navigate(contents.first()?, &[Key("musicTwoRowItemRenderer")])?;
    run_page_type(first)
}
