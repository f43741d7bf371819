//! 定义了本库对外暴露的核心数据模型。
//!
//! 所有实体都是一次调用产生的只读快照：在 Resolver 或解析函数中
//! 构造一次，返回给调用方之后不再被修改，也不会被缓存或索引。

pub mod item;
pub mod page;

pub use item::{Duration, MusicBody, MusicItem, MusicVideoPlayable};
pub use page::{
    AlbumPreview, AlbumRef, AlbumType, Artist, ArtistPreview, ArtistRef, PageType, Playlist,
    PlaylistAuthor, PlaylistPreview, PlaylistTrack,
};
