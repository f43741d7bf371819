//! 实体解析层：每个领域概念一个纯函数。
//!
//! 每个解析函数接收一个（由调用方确认过的）renderer 子树，
//! 输出对应的实体。上游缺失的可选字段在输出里同样缺失，绝不捏造；
//! 只有当子树连实体的最小结构都不满足时才返回错误，由外层的
//! Resolver 负责隔离。

use std::str::FromStr;

use serde_json::Value;

use crate::{
    model::page::PageType,
    navigator::{
        Step::{Index, Key},
        navigate, navigate_array, navigate_str,
    },
};

pub mod album;
pub mod artist;
pub mod duration;
pub mod item;
pub mod playlist;

/// 取第 `column` 个 flex 列的首个 run 文本。
pub(crate) fn flex_column_text(renderer: &Value, column: usize) -> Option<&str> {
    navigate_str(
        renderer,
        &[
            Key("flexColumns"),
            Index(column),
            Key("musicResponsiveListItemFlexColumnRenderer"),
            Key("text"),
            Key("runs"),
            Index(0),
            Key("text"),
        ],
    )
}

/// 取第 `column` 个 flex 列的全部 run。
pub(crate) fn flex_column_runs(renderer: &Value, column: usize) -> Option<&Vec<Value>> {
    navigate_array(
        renderer,
        &[
            Key("flexColumns"),
            Index(column),
            Key("musicResponsiveListItemFlexColumnRenderer"),
            Key("text"),
            Key("runs"),
        ],
    )
}

/// 取首个 fixed 列的首个 run 文本，一般是时长标签。
pub(crate) fn fixed_column_text(renderer: &Value) -> Option<&str> {
    navigate_str(
        renderer,
        &[
            Key("fixedColumns"),
            Index(0),
            Key("musicResponsiveListItemFixedColumnRenderer"),
            Key("text"),
            Key("runs"),
            Index(0),
            Key("text"),
        ],
    )
}

/// 取 run 上导航端点的 browse ID。
pub(crate) fn run_browse_id(run: &Value) -> Option<&str> {
    navigate_str(
        run,
        &[
            Key("navigationEndpoint"),
            Key("browseEndpoint"),
            Key("browseId"),
        ],
    )
}

/// 取 run 导航端点标注的目标页面类型。
pub(crate) fn run_page_type(run: &Value) -> Option<PageType> {
    let raw = navigate_str(
        run,
        &[
            Key("navigationEndpoint"),
            Key("browseEndpoint"),
            Key("browseEndpointContextSupportedConfigs"),
            Key("browseEndpointContextMusicConfig"),
            Key("pageType"),
        ],
    )?;
    PageType::from_str(raw).ok()
}

/// 在一组 run 里找出所有指向 `page_type` 页面的 run。
pub(crate) fn runs_of_page_type<'a>(
    runs: &'a [Value],
    page_type: PageType,
) -> impl Iterator<Item = &'a Value> {
    runs.iter()
        .filter(move |run| run_page_type(run) == Some(page_type))
}

/// 取 `musicThumbnailRenderer` 里最大的一张缩略图 URL。
///
/// `thumbnails` 按尺寸从小到大排列，取最后一张。
pub(crate) fn thumbnail_url(renderer: &Value) -> Option<String> {
    let thumbnails = navigate_array(
        renderer,
        &[
            Key("thumbnail"),
            Key("musicThumbnailRenderer"),
            Key("thumbnail"),
            Key("thumbnails"),
        ],
    )?;
    last_thumbnail_of(thumbnails)
}

/// 从一个裸的 `thumbnails` 数组里取最后一张的 URL。
pub(crate) fn last_thumbnail_of(thumbnails: &[Value]) -> Option<String> {
    navigate_str(thumbnails.last()?, &[Key("url")]).map(str::to_string)
}

/// Explicit 标记只有在结构上出现时才算存在：
/// 任意一个 badge 的 iconType 为 `MUSIC_EXPLICIT_BADGE` 即为 true。
pub(crate) fn has_explicit_badge(renderer: &Value, badges_key: &str) -> bool {
    navigate_array(renderer, &[Key(badges_key)])
        .map(|badges| {
            badges.iter().any(|badge| {
                navigate(
                    badge,
                    &[Key("musicInlineBadgeRenderer"), Key("icon"), Key("iconType")],
                ) == Some(&Value::String("MUSIC_EXPLICIT_BADGE".to_string()))
            })
        })
        .unwrap_or(false)
}

/// 搜索结果行和专辑行都可能把 Explicit 标记放在 `badges` 或
/// `subtitleBadges` 下，两处都查。
pub(crate) fn is_explicit(renderer: &Value) -> bool {
    has_explicit_badge(renderer, "badges") || has_explicit_badge(renderer, "subtitleBadges")
}
