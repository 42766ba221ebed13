use serde::Serialize;

use crate::dto::videos::VideoDto;
use crate::repository::{VideoListQuery, VideoReader};
use crate::search::SearchTerms;

use super::{ServiceError, ServiceResult};

/// Result of the search page.
///
/// `videos` is `None` when no search was performed and `Some` (possibly
/// empty) when the text contained at least one term.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchPage {
    pub search_text: String,
    pub videos: Option<Vec<VideoDto>>,
}

impl SearchPage {
    pub fn performed(&self) -> bool {
        self.videos.is_some()
    }
}

/// Percent-decode and trim the raw `search_text` parameter.
///
/// Input that does not decode to valid UTF-8 is kept as received.
pub fn normalize_search_text(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
        .trim()
        .to_string()
}

/// Core business logic for the search page.
pub fn search_videos<R>(search_text: Option<&str>, repo: &R) -> ServiceResult<SearchPage>
where
    R: VideoReader,
{
    let search_text = normalize_search_text(search_text.unwrap_or_default());

    let Some(terms) = SearchTerms::parse(&search_text) else {
        return Ok(SearchPage {
            search_text,
            videos: None,
        });
    };

    match repo.list_videos(VideoListQuery::default().search(terms)) {
        Ok((_total, videos)) => Ok(SearchPage {
            search_text,
            videos: Some(videos.into_iter().map(VideoDto::from).collect()),
        }),
        Err(e) => {
            log::error!("Failed to search videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}
