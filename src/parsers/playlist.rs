//! 解析歌单相关的 renderer：搜索结果行、页面头部和页面内的曲目行。

use serde_json::Value;

use crate::{
    error::{Result, YtMusicError},
    model::page::{
        AlbumPreview, ArtistPreview, PageType, Playlist, PlaylistAuthor, PlaylistPreview,
        PlaylistTrack,
    },
    navigator::{
        Step::{Index, Key},
        navigate, navigate_str,
    },
    parsers::{
        fixed_column_text, flex_column_runs, flex_column_text, run_browse_id, runs_of_page_type,
        thumbnail_url,
    },
};

/// 解析一条歌单搜索结果行。
///
/// 行上的 browse ID 带着 `VL` 前缀，返回前剥掉，
/// 让调用方拿到的 ID 可以直接再传回 `get_playlist`。
pub fn parse_playlist_search_result(content: &Value) -> Result<PlaylistPreview> {
    let renderer = navigate(content, &[Key("musicResponsiveListItemRenderer")]).ok_or_else(
        || YtMusicError::ItemParse("条目缺少 musicResponsiveListItemRenderer".to_string()),
    )?;

    Ok(PlaylistPreview {
        playlist_id: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("browseEndpoint"),
                Key("browseId"),
            ],
        )
        .map(|id| id.strip_prefix("VL").unwrap_or(id).to_string()),
        title: flex_column_text(renderer, 0).map(str::to_string),
        thumbnail_url: thumbnail_url(renderer),
        total_songs: flex_column_runs(renderer, 1).and_then(|runs| {
            runs.iter().find_map(|run| {
                let text = navigate_str(run, &[Key("text")])?;
                let count = text.strip_suffix(" songs").or_else(|| text.strip_suffix(" song"))?;
                count.parse().ok()
            })
        }),
    })
}

/// 解析歌单页面里的一行曲目。
///
/// 与列表行解析不同，曲目的 `id` 和标题是这条实体的最小结构：
/// 缺了任何一个都说明这行根本不是曲目。
pub fn parse_playlist_track(content: &Value) -> Result<PlaylistTrack> {
    let renderer = navigate(content, &[Key("musicResponsiveListItemRenderer")]).ok_or_else(
        || YtMusicError::ItemParse("条目缺少 musicResponsiveListItemRenderer".to_string()),
    )?;

    let id = navigate_str(renderer, &[Key("playlistItemData"), Key("videoId")])
        .ok_or_else(|| YtMusicError::ItemParse("曲目缺少 videoId".to_string()))?;
    let title = flex_column_text(renderer, 0)
        .ok_or_else(|| YtMusicError::ItemParse("曲目缺少标题".to_string()))?;

    let artist = flex_column_runs(renderer, 1).and_then(|runs| {
        let run = runs_of_page_type(runs, PageType::Artist).next()?;
        Some(ArtistPreview {
            name: navigate_str(run, &[Key("text")]).map(str::to_string),
            artist_id: run_browse_id(run).map(str::to_string),
            thumbnail_url: None,
            subscribers: None,
        })
    });

    let album = flex_column_runs(renderer, 2).and_then(|runs| {
        let run = runs_of_page_type(runs, PageType::Album).next()?;
        Some(AlbumPreview {
            album_id: run_browse_id(run).map(str::to_string),
            title: navigate_str(run, &[Key("text")]).map(str::to_string),
            ..Default::default()
        })
    });

    Ok(PlaylistTrack {
        id: id.to_string(),
        title: title.to_string(),
        duration_str: fixed_column_text(renderer).unwrap_or_default().to_string(),
        thumbnail_url: thumbnail_url(renderer),
        artist,
        album,
    })
}

/// 解析歌单页面的头部，产出除 `id` 和 `tracks` 之外的全部字段。
///
/// `id` 由 Orchestrator 在解析完成后写入，`tracks` 由 Resolver 填充。
pub(crate) fn parse_playlist_header(section: &Value) -> Result<Playlist> {
    let renderer = navigate(section, &[Key("musicResponsiveHeaderRenderer")]).ok_or_else(
        || YtMusicError::StructuralMismatch("缺少 musicResponsiveHeaderRenderer".to_string()),
    )?;

    let subtitle_runs = navigate(renderer, &[Key("subtitle"), Key("runs")])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let second_subtitle_runs = navigate(renderer, &[Key("secondSubtitle"), Key("runs")])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let author_run = navigate(renderer, &[Key("straplineTextOne"), Key("runs"), Index(0)]);

    Ok(Playlist {
        id: String::new(),
        title: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .unwrap_or_default()
            .to_string(),
        playlist_type: subtitle_runs
            .first()
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .unwrap_or_default()
            .to_string(),
        year: subtitle_runs
            .last()
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .filter(|text| text.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or_default()
            .to_string(),
        thumbnail_url: thumbnail_url(renderer).unwrap_or_default(),
        duration_str: second_subtitle_runs
            .last()
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .unwrap_or_default()
            .to_string(),
        tracks: Vec::new(),
        author: PlaylistAuthor {
            id: author_run.and_then(run_browse_id).map(str::to_string),
            name: author_run
                .and_then(|run| navigate_str(run, &[Key("text")]))
                .unwrap_or_default()
                .to_string(),
            thumbnail_url: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_playlist_search_result_strips_prefix() {
        let row = json!({"musicResponsiveListItemRenderer": {
            "navigationEndpoint": {"browseEndpoint": {"browseId": "VLPL123"}},
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "My Mix"}]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [
                    {"text": "Playlist"}, {"text": " • "}, {"text": "54 songs"}
                ]}}}
            ],
            "thumbnail": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "m.jpg"}]}}}
        }});
        let preview = parse_playlist_search_result(&row).unwrap();
        assert_eq!(preview.playlist_id.as_deref(), Some("PL123"));
        assert_eq!(preview.title.as_deref(), Some("My Mix"));
        assert_eq!(preview.total_songs, Some(54));
    }

    #[test]
    fn test_parse_playlist_track_minimum_shape() {
        let missing_id = json!({"musicResponsiveListItemRenderer": {
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "T"}]}}}
            ]
        }});
        assert!(matches!(
            parse_playlist_track(&missing_id),
            Err(YtMusicError::ItemParse(_))
        ));
    }

    #[test]
    fn test_parse_playlist_track_full() {
        let row = json!({"musicResponsiveListItemRenderer": {
            "playlistItemData": {"videoId": "track1"},
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "Track Title"}]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [
                    {"text": "Track Artist", "navigationEndpoint": {"browseEndpoint": {
                        "browseId": "UCta",
                        "browseEndpointContextSupportedConfigs": {
                            "browseEndpointContextMusicConfig": {"pageType": "MUSIC_PAGE_TYPE_ARTIST"}
                        }
                    }}}
                ]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [
                    {"text": "Track Album", "navigationEndpoint": {"browseEndpoint": {
                        "browseId": "MPREb_ta",
                        "browseEndpointContextSupportedConfigs": {
                            "browseEndpointContextMusicConfig": {"pageType": "MUSIC_PAGE_TYPE_ALBUM"}
                        }
                    }}}
                ]}}}
            ],
            "fixedColumns": [
                {"musicResponsiveListItemFixedColumnRenderer": {"text": {"runs": [{"text": "3:03"}]}}}
            ]
        }});
        let track = parse_playlist_track(&row).unwrap();
        assert_eq!(track.id, "track1");
        assert_eq!(track.title, "Track Title");
        assert_eq!(track.duration_str, "3:03");
        assert_eq!(track.artist.unwrap().artist_id.as_deref(), Some("UCta"));
        assert_eq!(track.album.unwrap().album_id.as_deref(), Some("MPREb_ta"));
    }

    #[test]
    fn test_parse_playlist_header() {
        let section = json!({"musicResponsiveHeaderRenderer": {
            "title": {"runs": [{"text": "Focus Mix"}]},
            "subtitle": {"runs": [{"text": "Playlist"}, {"text": " • "}, {"text": "2024"}]},
            "secondSubtitle": {"runs": [{"text": "54 songs"}, {"text": " • "}, {"text": "3 hours"}]},
            "straplineTextOne": {"runs": [{"text": "YouTube Music", "navigationEndpoint": {"browseEndpoint": {"browseId": "UCauthor"}}}]},
            "thumbnail": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "cover.jpg"}]}}}
        }});
        let playlist = parse_playlist_header(&section).unwrap();
        assert_eq!(playlist.title, "Focus Mix");
        assert_eq!(playlist.playlist_type, "Playlist");
        assert_eq!(playlist.year, "2024");
        assert_eq!(playlist.duration_str, "3 hours");
        assert_eq!(playlist.author.name, "YouTube Music");
        assert_eq!(playlist.author.id.as_deref(), Some("UCauthor"));
        assert!(playlist.id.is_empty());
        assert!(playlist.tracks.is_empty());
    }
}
