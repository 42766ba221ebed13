use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::video::Video;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDto {
    pub id: i32,
    pub youtube_id: String,
    pub title: String,
    pub author: String,
    pub view_count: i64,
    pub created_at: NaiveDateTime,
    pub thumbnail_url: String,
    pub embed_url: String,
}

impl From<Video> for VideoDto {
    fn from(value: Video) -> Self {
        let youtube_id = value.youtube_id.into_inner();
        Self {
            id: value.id.get(),
            thumbnail_url: format!("https://i.ytimg.com/vi/{youtube_id}/hqdefault.jpg"),
            embed_url: format!("https://www.youtube.com/embed/{youtube_id}"),
            youtube_id,
            title: value.title.into_inner(),
            author: value.author.into_inner(),
            view_count: value.view_count.get(),
            created_at: value.created_at,
        }
    }
}
