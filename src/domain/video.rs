use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{VideoAuthor, VideoId, VideoTitle, ViewCount, YoutubeId};

/// A video hosted on an external platform and listed in one or more categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Video`].
///
/// The category link is supplied separately when the video is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVideo {
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
    pub created_at: NaiveDateTime,
}
