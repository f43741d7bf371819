//! 解析艺术家相关的 renderer：搜索结果行和“相似艺术家”轮播卡片。

use serde_json::Value;

use crate::{
    error::{Result, YtMusicError},
    model::page::ArtistPreview,
    navigator::{
        Step::{Index, Key},
        navigate, navigate_str,
    },
    parsers::{flex_column_runs, flex_column_text, thumbnail_url},
};

/// 从 `"1.2M subscribers"` 这样的文本里取出数量部分。
fn subscribers_from_label(label: &str) -> Option<String> {
    label
        .strip_suffix(" subscribers")
        .or_else(|| label.strip_suffix(" subscriber"))
        .map(str::to_string)
}

/// 解析一条艺术家搜索结果行。
pub fn parse_artist_search_result(content: &Value) -> Result<ArtistPreview> {
    let renderer = navigate(content, &[Key("musicResponsiveListItemRenderer")]).ok_or_else(
        || YtMusicError::ItemParse("条目缺少 musicResponsiveListItemRenderer".to_string()),
    )?;

    Ok(ArtistPreview {
        name: flex_column_text(renderer, 0).map(str::to_string),
        artist_id: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("browseEndpoint"),
                Key("browseId"),
            ],
        )
        .map(str::to_string),
        thumbnail_url: thumbnail_url(renderer),
        subscribers: flex_column_runs(renderer, 1).and_then(|runs| {
            runs.iter().find_map(|run| {
                subscribers_from_label(navigate_str(run, &[Key("text")])?)
            })
        }),
    })
}

/// 解析“相似艺术家”轮播里的一张卡片（`musicTwoRowItemRenderer`）。
pub fn parse_suggested_artist(content: &Value) -> Result<ArtistPreview> {
    let renderer = navigate(content, &[Key("musicTwoRowItemRenderer")])
        .ok_or_else(|| YtMusicError::ItemParse("条目缺少 musicTwoRowItemRenderer".to_string()))?;

    Ok(ArtistPreview {
        name: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .map(str::to_string),
        artist_id: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("browseEndpoint"),
                Key("browseId"),
            ],
        )
        .map(str::to_string),
        thumbnail_url: navigate(
            renderer,
            &[
                Key("thumbnailRenderer"),
                Key("musicThumbnailRenderer"),
                Key("thumbnail"),
                Key("thumbnails"),
            ],
        )
        .and_then(Value::as_array)
        .and_then(|thumbnails| super::last_thumbnail_of(thumbnails)),
        subscribers: navigate_str(
            renderer,
            &[Key("subtitle"), Key("runs"), Index(0), Key("text")],
        )
        .and_then(subscribers_from_label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_artist_search_result() {
        let row = json!({"musicResponsiveListItemRenderer": {
            "navigationEndpoint": {"browseEndpoint": {"browseId": "UCxyz"}},
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "The Artist"}]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [
                    {"text": "Artist"}, {"text": " • "}, {"text": "1.2M subscribers"}
                ]}}}
            ],
            "thumbnail": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "a.jpg"}]}}}
        }});
        let artist = parse_artist_search_result(&row).unwrap();
        assert_eq!(artist.name.as_deref(), Some("The Artist"));
        assert_eq!(artist.artist_id.as_deref(), Some("UCxyz"));
        assert_eq!(artist.thumbnail_url.as_deref(), Some("a.jpg"));
        assert_eq!(artist.subscribers.as_deref(), Some("1.2M"));
    }

    #[test]
    fn test_parse_artist_without_subscribers() {
        let row = json!({"musicResponsiveListItemRenderer": {
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "Nobody"}]}}}
            ]
        }});
        let artist = parse_artist_search_result(&row).unwrap();
        assert_eq!(artist.name.as_deref(), Some("Nobody"));
        assert!(artist.subscribers.is_none());
        assert!(artist.artist_id.is_none());
    }

    #[test]
    fn test_parse_suggested_artist_card() {
        let card = json!({"musicTwoRowItemRenderer": {
            "title": {"runs": [{"text": "Similar Artist"}]},
            "subtitle": {"runs": [{"text": "830K subscribers"}]},
            "navigationEndpoint": {"browseEndpoint": {"browseId": "UCsim"}},
            "thumbnailRenderer": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "sim.jpg"}]}}}
        }});
        let artist = parse_suggested_artist(&card).unwrap();
        assert_eq!(artist.name.as_deref(), Some("Similar Artist"));
        assert_eq!(artist.artist_id.as_deref(), Some("UCsim"));
        assert_eq!(artist.subscribers.as_deref(), Some("830K"));
        assert_eq!(artist.thumbnail_url.as_deref(), Some("sim.jpg"));
    }
}
