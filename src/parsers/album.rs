//! 解析专辑相关的 renderer：搜索结果行、轮播卡片和专辑页头部。

use std::str::FromStr;

use serde_json::Value;

use crate::{
    error::{Result, YtMusicError},
    model::page::{AlbumHeader, AlbumPreview, AlbumType, PageType},
    navigator::{
        Step::{Index, Key},
        navigate, navigate_str,
    },
    parsers::{
        flex_column_runs, flex_column_text, is_explicit, run_browse_id, runs_of_page_type,
        thumbnail_url,
    },
};

/// 把上游的类型文本映射进封闭枚举；无法识别的字符串回退为 `Album`。
fn album_type_from_label(label: &str) -> AlbumType {
    AlbumType::from_str(label).unwrap_or_default()
}

/// 解析一条专辑搜索结果行。
///
/// 第 1 列的 run 依次是类型文本、艺术家和年份；专辑自己的 browse ID
/// 挂在 renderer 的导航端点上。
pub fn parse_album_item(content: &Value) -> Result<AlbumPreview> {
    let renderer = navigate(content, &[Key("musicResponsiveListItemRenderer")]).ok_or_else(
        || YtMusicError::ItemParse("条目缺少 musicResponsiveListItemRenderer".to_string()),
    )?;

    let byline = flex_column_runs(renderer, 1);
    let artist_run = byline.and_then(|runs| runs_of_page_type(runs, PageType::Artist).next());

    Ok(AlbumPreview {
        album_id: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("browseEndpoint"),
                Key("browseId"),
            ],
        )
        .map(str::to_string),
        title: flex_column_text(renderer, 0).map(str::to_string),
        album_type: byline
            .and_then(|runs| navigate_str(runs.first()?, &[Key("text")]))
            .filter(|text| !text.chars().all(|c| c.is_ascii_digit()))
            .map(album_type_from_label),
        thumbnail_url: thumbnail_url(renderer),
        artist: artist_run
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .map(str::to_string),
        artist_id: artist_run
            .and_then(run_browse_id)
            .map(str::to_string),
        year: byline
            .and_then(|runs| navigate_str(runs.last()?, &[Key("text")]))
            .filter(|text| text.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string),
        is_explicit: is_explicit(renderer),
    })
}

/// 解析艺术家页面轮播里的一张专辑卡片（`musicTwoRowItemRenderer`）。
pub fn parse_album_preview(content: &Value) -> Result<AlbumPreview> {
    let renderer = navigate(content, &[Key("musicTwoRowItemRenderer")])
        .ok_or_else(|| YtMusicError::ItemParse("条目缺少 musicTwoRowItemRenderer".to_string()))?;

    let subtitle_runs = navigate(renderer, &[Key("subtitle"), Key("runs")])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    Ok(AlbumPreview {
        album_id: navigate_str(
            renderer,
            &[
                Key("navigationEndpoint"),
                Key("browseEndpoint"),
                Key("browseId"),
            ],
        )
        .map(str::to_string),
        title: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .map(str::to_string),
        // 单曲卡片的副标题可能只有年份，年份不是类型标签
        album_type: subtitle_runs
            .first()
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .filter(|text| !text.chars().all(|c| c.is_ascii_digit()))
            .map(album_type_from_label),
        thumbnail_url: navigate(renderer, &[Key("thumbnailRenderer")])
            .and_then(thumbnail_url_of_two_row),
        artist: None,
        artist_id: None,
        year: subtitle_runs
            .last()
            .and_then(|run| navigate_str(run, &[Key("text")]))
            .filter(|text| text.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string),
        is_explicit: is_explicit(renderer),
    })
}

fn thumbnail_url_of_two_row(renderer: &Value) -> Option<String> {
    let thumbnails = navigate(
        renderer,
        &[
            Key("musicThumbnailRenderer"),
            Key("thumbnail"),
            Key("thumbnails"),
        ],
    )?
    .as_array()?;
    super::last_thumbnail_of(thumbnails)
}

/// 解析专辑页面的头部（`musicResponsiveHeaderRenderer`）。
///
/// 头部只在专辑 Resolver 内部使用：专辑行缺少的艺术家、专辑名
/// 和封面都从这里补。
pub(crate) fn parse_album_header(section: &Value) -> Result<AlbumHeader> {
    let renderer = navigate(section, &[Key("musicResponsiveHeaderRenderer")]).ok_or_else(
        || YtMusicError::StructuralMismatch("缺少 musicResponsiveHeaderRenderer".to_string()),
    )?;

    Ok(AlbumHeader {
        title: navigate_str(renderer, &[Key("title"), Key("runs"), Index(0), Key("text")])
            .unwrap_or_default()
            .to_string(),
        subtitle: navigate_str(
            renderer,
            &[Key("straplineTextOne"), Key("runs"), Index(0), Key("text")],
        )
        .unwrap_or_default()
        .to_string(),
        thumbnail: thumbnail_url(renderer).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_album_type_fallback_never_fails() {
        assert_eq!(album_type_from_label("EP"), AlbumType::Ep);
        assert_eq!(album_type_from_label("Single"), AlbumType::Single);
        assert_eq!(album_type_from_label("Album"), AlbumType::Album);
        assert_eq!(album_type_from_label("Mixtape?"), AlbumType::Album);
    }

    #[test]
    fn test_parse_album_item() {
        let row = json!({"musicResponsiveListItemRenderer": {
            "navigationEndpoint": {"browseEndpoint": {"browseId": "MPREb_abc"}},
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": "Great Album"}]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [
                    {"text": "EP"},
                    {"text": " • "},
                    {"text": "Some Artist", "navigationEndpoint": {"browseEndpoint": {
                        "browseId": "UCart",
                        "browseEndpointContextSupportedConfigs": {
                            "browseEndpointContextMusicConfig": {"pageType": "MUSIC_PAGE_TYPE_ARTIST"}
                        }
                    }}},
                    {"text": " • "},
                    {"text": "2019"}
                ]}}}
            ],
            "thumbnail": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "cover.jpg"}]}}}
        }});
        let album = parse_album_item(&row).unwrap();
        assert_eq!(album.album_id.as_deref(), Some("MPREb_abc"));
        assert_eq!(album.title.as_deref(), Some("Great Album"));
        assert_eq!(album.album_type, Some(AlbumType::Ep));
        assert_eq!(album.artist.as_deref(), Some("Some Artist"));
        assert_eq!(album.artist_id.as_deref(), Some("UCart"));
        assert_eq!(album.year.as_deref(), Some("2019"));
        assert!(!album.is_explicit);
    }

    #[test]
    fn test_parse_album_preview_two_row() {
        let card = json!({"musicTwoRowItemRenderer": {
            "title": {"runs": [{"text": "Carousel Album"}]},
            "subtitle": {"runs": [{"text": "Single"}, {"text": " • "}, {"text": "2021"}]},
            "navigationEndpoint": {"browseEndpoint": {"browseId": "MPREb_two"}},
            "thumbnailRenderer": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [
                {"url": "small.jpg"}, {"url": "big.jpg"}
            ]}}},
            "subtitleBadges": [{"musicInlineBadgeRenderer": {"icon": {"iconType": "MUSIC_EXPLICIT_BADGE"}}}]
        }});
        let preview = parse_album_preview(&card).unwrap();
        assert_eq!(preview.album_id.as_deref(), Some("MPREb_two"));
        assert_eq!(preview.album_type, Some(AlbumType::Single));
        assert_eq!(preview.year.as_deref(), Some("2021"));
        assert_eq!(preview.thumbnail_url.as_deref(), Some("big.jpg"));
        assert!(preview.is_explicit);
    }

    #[test]
    fn test_parse_album_header() {
        let section = json!({"musicResponsiveHeaderRenderer": {
            "title": {"runs": [{"text": "Header Album"}]},
            "straplineTextOne": {"runs": [{"text": "Header Artist"}]},
            "thumbnail": {"musicThumbnailRenderer": {"thumbnail": {"thumbnails": [{"url": "h.jpg"}]}}}
        }});
        let header = parse_album_header(&section).unwrap();
        assert_eq!(header.title, "Header Album");
        assert_eq!(header.subtitle, "Header Artist");
        assert_eq!(header.thumbnail, "h.jpg");
    }

    #[test]
    fn test_parse_album_header_wrong_shape() {
        let section = json!({"somethingElse": {}});
        assert!(matches!(
            parse_album_header(&section),
            Err(YtMusicError::StructuralMismatch(_))
        ));
    }
}
