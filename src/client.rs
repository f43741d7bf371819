//! YouTube Music 客户端：每个公开操作一个方法。
//!
//! 每个方法做的事情完全一致：用外部提供的上下文拼出请求体，发一次
//! POST，把原始响应体交给对应的 Resolver，最后做少量收尾处理
//! （例如把请求用的 ID 盖回解析结果上）。
//!
//! 对外的契约是“绝不向调用方抛错”：传输失败和结构不匹配都会被
//! 记录日志并映射成该操作文档化的回退值（空列表或 `None`）。
//! 需要区分“空结果”和“解析失败”的调用方可以直接拿原始响应体
//! 调用 [`crate::resolvers`] 里的函数。

use reqwest::{
    Client,
    header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT},
};
use serde_json::{Value, json};

use crate::{
    context::{
        ANDROID_BROWSE_URL, ANDROID_CLIENT_NAME, ANDROID_CLIENT_VERSION,
        ANDROID_MUSIC_USER_AGENT, BROWSE_URL, GOOGLEBOT_USER_AGENT, MUSIC_ORIGIN, NEXT_URL,
        NEW_RELEASES_BROWSE_ID, PARAMS_ALBUMS, PARAMS_ARTISTS, PARAMS_COMMUNITY_PLAYLISTS,
        PARAMS_MUSIC, PARAMS_OFFICIAL_PLAYLISTS, PARAMS_SUGGESTIONS, PLAYLIST_BROWSE_PREFIX,
        RADIO_PLAYLIST_PREFIX, SEARCH_URL, SearchOptions, base_body, playback_context_stub,
        scraper_proxy_url,
    },
    error::{Result, YtMusicError},
    model::{
        item::{MusicBody, MusicItem, MusicVideoPlayable},
        page::{AlbumPreview, Artist, ArtistPreview, Playlist, PlaylistPreview},
    },
    resolvers,
};

/// YouTube Music 的客户端实现。
///
/// 客户端本身不持有任何可变状态，可以被克隆后在任意多个任务里
/// 并发使用；每次调用只有一个挂起点（那次 POST），其余全是纯计算。
#[derive(Debug, Clone, Default)]
pub struct YtMusicClient {
    http_client: Client,
}

/// 给歌单 ID 补上 browse 要求的 `VL` 前缀；已经带了就原样保留。
pub(crate) fn normalize_playlist_browse_id(playlist_id: &str) -> String {
    if playlist_id.starts_with(PLAYLIST_BROWSE_PREFIX) {
        playlist_id.to_string()
    } else {
        format!("{PLAYLIST_BROWSE_PREFIX}{playlist_id}")
    }
}

/// 歌单页面解析后的收尾：把请求时用的 ID 盖回结果上，
/// 失败记录日志并映射为 `None`。
pub(crate) fn stamp_playlist_id(
    result: Result<Playlist>,
    playlist_id: &str,
) -> Option<Playlist> {
    match result {
        Ok(mut playlist) => {
            playlist.id = playlist_id.to_string();
            Some(playlist)
        }
        Err(e) => {
            tracing::error!(playlist_id, error = %e, "获取歌单页面失败");
            None
        }
    }
}

impl YtMusicClient {
    /// 创建一个新的 `YtMusicClient` 实例。
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// 浏览器形态调用使用的请求头。
    fn web_headers(&self, options: &SearchOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(GOOGLEBOT_USER_AGENT));
        headers.insert(ORIGIN, HeaderValue::from_static(MUSIC_ORIGIN));
        headers.insert(
            ACCEPT_LANGUAGE,
            options
                .lang_or_default()
                .parse::<HeaderValue>()
                .map_err(|e| YtMusicError::ApiError(format!("无法解析语言代码: {e}")))?,
        );
        Ok(headers)
    }

    /// 走代理的调用使用 Android Music 客户端的请求头。
    fn android_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(ANDROID_MUSIC_USER_AGENT),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            "X-Youtube-Client-Name",
            HeaderValue::from_static(ANDROID_CLIENT_NAME),
        );
        headers.insert(
            "X-Youtube-Client-Version",
            HeaderValue::from_static(ANDROID_CLIENT_VERSION),
        );
        headers
    }

    /// 辅助函数，发送一次 POST 并把响应体解析成未加类型的 JSON 树。
    async fn post_json(&self, url: &str, body: &Value, headers: HeaderMap) -> Result<Value> {
        let response_text = self
            .http_client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?
            .text()
            .await?;

        if response_text.is_empty() {
            return Err(YtMusicError::ApiError("接口返回了空响应。".to_string()));
        }

        serde_json::from_str(&response_text).map_err(YtMusicError::from)
    }

    /// 辅助函数，发送一次搜索请求。
    async fn post_search(
        &self,
        query: &str,
        params: &str,
        options: &SearchOptions,
    ) -> Result<Value> {
        let mut body = base_body(options);
        body["query"] = json!(query);
        body["params"] = json!(params);
        self.post_json(SEARCH_URL, &body, self.web_headers(options)?)
            .await
    }

    /// 辅助函数，发送一次 browse 请求。
    async fn post_browse(
        &self,
        browse_id: &str,
        options: &SearchOptions,
        with_playback_context: bool,
    ) -> Result<Value> {
        let mut body = base_body(options);
        body["browseId"] = json!(browse_id);
        if with_playback_context {
            body["playbackContext"] = playback_context_stub();
        }
        let mut headers = self.web_headers(options)?;
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://music.youtube.com/new_releases"),
        );
        self.post_json(BROWSE_URL, &body, headers).await
    }

    /// 辅助函数，经 ScraperAPI 代理发送一次 browse 请求。
    async fn post_proxied_browse(&self, browse_id: &str, api_key: &str) -> Result<Value> {
        let mut body = base_body(&SearchOptions::default());
        body["browseId"] = json!(browse_id);
        let url = scraper_proxy_url(api_key, ANDROID_BROWSE_URL);
        self.post_json(&url, &body, self.android_headers()).await
    }

    /// 根据关键词搜索音乐。
    ///
    /// 任何失败都映射为空列表。
    pub async fn search_for_music(&self, query: &str) -> Vec<MusicItem> {
        let result = self
            .post_search(query, PARAMS_MUSIC, &SearchOptions::default())
            .await
            .and_then(|body| resolvers::resolve_search_music(&body));
        match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(query, error = %e, "搜索音乐失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 根据关键词搜索艺术家。
    pub async fn search_for_artists(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Vec<ArtistPreview> {
        let result = self
            .post_search(query, PARAMS_ARTISTS, options)
            .await
            .and_then(|body| resolvers::resolve_search_artists(&body));
        match result {
            Ok(artists) => artists,
            Err(e) => {
                tracing::error!(query, error = %e, "搜索艺术家失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 根据关键词搜索专辑。
    pub async fn search_for_albums(&self, query: &str) -> Vec<AlbumPreview> {
        let result = self
            .post_search(query, PARAMS_ALBUMS, &SearchOptions::default())
            .await
            .and_then(|body| resolvers::resolve_search_albums(&body));
        match result {
            Ok(albums) => albums,
            Err(e) => {
                tracing::error!(query, error = %e, "搜索专辑失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 根据关键词搜索歌单。
    ///
    /// `only_official` 为 true 时只搜官方歌单，否则搜社区歌单。
    pub async fn search_for_playlists(
        &self,
        query: &str,
        only_official: bool,
    ) -> Vec<PlaylistPreview> {
        let params = if only_official {
            PARAMS_OFFICIAL_PLAYLISTS
        } else {
            PARAMS_COMMUNITY_PLAYLISTS
        };
        let result = self
            .post_search(query, params, &SearchOptions::default())
            .await
            .and_then(|body| resolvers::resolve_search_playlists(&body));
        match result {
            Ok(playlists) => playlists,
            Err(e) => {
                tracing::error!(query, error = %e, "搜索歌单失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 基于一条音乐获取播放建议（相当于它的电台）。
    pub async fn get_music_based_suggestions(&self, music_id: &str) -> Vec<MusicItem> {
        let mut body = base_body(&SearchOptions::default());
        body["videoId"] = json!(music_id);
        body["playlistId"] = json!(format!("{RADIO_PLAYLIST_PREFIX}{music_id}"));
        body["params"] = json!(PARAMS_SUGGESTIONS);
        body["isAudioOnly"] = json!(true);

        let result = async {
            let headers = self.web_headers(&SearchOptions::default())?;
            let response = self.post_json(NEXT_URL, &body, headers).await?;
            resolvers::resolve_suggestions(&response)
        }
        .await;
        match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(music_id, error = %e, "获取播放建议失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 列出一张专辑里的全部条目，附带专辑封面。
    ///
    /// 这个接口必须经 ScraperAPI 代理调用才能稳定返回 videoId，
    /// `scraper_api_key` 是代理服务的调用密钥。
    pub async fn list_music_from_album(&self, album_id: &str, scraper_api_key: &str) -> MusicBody {
        let result = self
            .post_proxied_browse(album_id, scraper_api_key)
            .await
            .and_then(|body| resolvers::resolve_album_body(&body));
        match result {
            Ok(music_body) => music_body,
            Err(e) => {
                tracing::error!(album_id, error = %e, "获取专辑内容失败，返回空结果");
                MusicBody::default()
            }
        }
    }

    /// 列出一个歌单里的全部条目。
    ///
    /// 歌单 ID 带不带 `VL` 前缀都可以，内部会归一化。
    pub async fn list_music_from_playlist(
        &self,
        playlist_id: &str,
        scraper_api_key: &str,
    ) -> Vec<MusicItem> {
        let browse_id = normalize_playlist_browse_id(playlist_id);
        let result = self
            .post_proxied_browse(&browse_id, scraper_api_key)
            .await
            .and_then(|body| resolvers::resolve_playlist_items(&body));
        match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(playlist_id, error = %e, "获取歌单内容失败，返回空列表");
                Vec::new()
            }
        }
    }

    /// 获取一位艺术家的页面数据。
    ///
    /// 失败时返回空的 [`Artist`]，与其余操作同样遵守“绝不抛错”的契约。
    pub async fn get_artist(&self, artist_id: &str, options: &SearchOptions) -> Artist {
        let result = self
            .post_browse(artist_id, options, false)
            .await
            .and_then(|body| resolvers::resolve_artist_page(&body));
        match result {
            Ok(mut artist) => {
                artist.artist_id = Some(artist_id.to_string());
                artist
            }
            Err(e) => {
                tracing::error!(artist_id, error = %e, "获取艺术家页面失败，返回空结果");
                Artist::default()
            }
        }
    }

    /// 获取一个完整的歌单页面。
    ///
    /// 返回的 `Playlist.id` 恒等于传入的 `playlist_id`，
    /// 不管响应体里怎么编码。
    pub async fn get_playlist(
        &self,
        playlist_id: &str,
        options: &SearchOptions,
    ) -> Option<Playlist> {
        let result = self
            .post_browse(playlist_id, options, true)
            .await
            .and_then(|body| resolvers::resolve_playlist_page(&body));
        stamp_playlist_id(result, playlist_id)
    }

    /// 获取单个可播放条目。
    pub async fn get_music(
        &self,
        music_id: &str,
        options: &SearchOptions,
    ) -> Option<MusicVideoPlayable> {
        let mut body = base_body(options);
        body["videoId"] = json!(music_id);
        body["isAudioOnly"] = json!(true);

        let result = async {
            let headers = self.web_headers(options)?;
            let response = self.post_json(NEXT_URL, &body, headers).await?;
            resolvers::resolve_playable_item(&response)
        }
        .await;
        match result {
            Ok(playable) => Some(playable),
            Err(e) => {
                tracing::error!(music_id, error = %e, "获取可播放条目失败");
                None
            }
        }
    }

    /// 获取新发布页面，按歌单的形状解析。
    pub async fn get_new_released(&self, options: &SearchOptions) -> Option<Playlist> {
        let result = self
            .post_browse(NEW_RELEASES_BROWSE_ID, options, true)
            .await
            .and_then(|body| resolvers::resolve_playlist_page(&body));
        stamp_playlist_id(result, NEW_RELEASES_BROWSE_ID)
    }
}
