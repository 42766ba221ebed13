use std::num::IntErrorKind;

use crate::domain::types::VideoId;
use crate::domain::video::Video;
use crate::dto::videos::VideoDto;
use crate::pagination::{Paginated, clamp_page, total_pages};
use crate::repository::{VideoListQuery, VideoReader};

use super::{ServiceError, ServiceResult};

/// Number of videos loaded per feed page.
pub const FEED_PAGE_SIZE: usize = 2;

/// Core business logic for the single video page.
pub fn show_video<R>(video_id: i32, repo: &R) -> ServiceResult<VideoDto>
where
    R: VideoReader,
{
    let video_id = VideoId::new(video_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_video_by_id(video_id) {
        Ok(Some(video)) => Ok(video.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Parses the `page` query parameter; a missing parameter means page 1.
///
/// Anything that is not an integer is rejected rather than defaulted.
/// Integers too large for `i64` saturate so they still clamp to a real page.
pub fn parse_page_number(raw: Option<&str>) -> ServiceResult<i64> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    match raw.trim().parse::<i64>() {
        Ok(page) => Ok(page),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ServiceError::MalformedInput(format!(
                "invalid page number: {raw:?}"
            ))),
        },
    }
}

fn list_feed_page<R>(page: usize, repo: &R) -> ServiceResult<(usize, Vec<Video>)>
where
    R: VideoReader,
{
    repo.list_videos(VideoListQuery::default().paginate(page, FEED_PAGE_SIZE))
        .map_err(|e| {
            log::error!("Failed to list feed videos: {e}");
            ServiceError::Internal
        })
}

/// Core business logic for the infinite-scroll feed.
///
/// Pages below 1 resolve to the first page and pages past the end resolve to
/// the last one, so any integer yields a renderable page.
pub fn show_feed<R>(page: Option<&str>, repo: &R) -> ServiceResult<Paginated<VideoDto>>
where
    R: VideoReader,
{
    let requested = parse_page_number(page)?;

    let mut page = clamp_page(requested, usize::MAX);
    let (total, mut videos) = list_feed_page(page, repo)?;
    let pages = total_pages(total, FEED_PAGE_SIZE);
    if page > pages {
        page = pages;
        (_, videos) = list_feed_page(page, repo)?;
    }

    Ok(Paginated::new(videos, page, pages).map(VideoDto::from))
}
