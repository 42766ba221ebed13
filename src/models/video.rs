use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{
    TypeConstraintError, VideoAuthor, VideoTitle, ViewCount, YoutubeId,
};
use crate::domain::video::{NewVideo as DomainNewVideo, Video as DomainVideo};

/// Diesel model representing a row in the `videos` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: i32,
    pub youtube_id: String,
    pub title: String,
    pub author: String,
    pub view_count: i64,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Video`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideo<'a> {
    pub youtube_id: &'a str,
    pub title: &'a str,
    pub author: &'a str,
    pub view_count: i64,
    pub created_at: NaiveDateTime,
}

/// Row of the `video_categories` association table.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::video_categories)]
pub struct VideoCategory {
    pub video_id: i32,
    pub category_id: i32,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            youtube_id: YoutubeId::new(video.youtube_id)?,
            title: VideoTitle::new(video.title)?,
            author: VideoAuthor::new(video.author)?,
            view_count: ViewCount::new(video.view_count)?,
            created_at: video.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewVideo> for NewVideo<'a> {
    fn from(video: &'a DomainNewVideo) -> Self {
        Self {
            youtube_id: video.youtube_id.as_str(),
            title: video.title.as_str(),
            author: video.author.as_str(),
            view_count: video.view_count.get(),
            created_at: video.created_at,
        }
    }
}
