use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{HtmxRequest, base_context, render_template, service_error_response};
use crate::services::search::search_videos;
use crate::services::videos::{show_feed, show_video};

#[derive(Deserialize)]
struct FeedQueryParams {
    // Kept as text so a non-numeric page is reported instead of rejected
    // by the extractor with a generic message.
    page: Option<String>,
}

#[derive(Deserialize)]
struct SearchQueryParams {
    search_text: Option<String>,
}

#[get("/video/{video_id}")]
pub async fn play_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_video(video_id.into_inner(), repo.get_ref()) {
        Ok(video) => {
            let mut context = base_context("video");
            context.insert("video", &video);
            render_template(&tera, "play_video.html", &context)
        }
        Err(err) => service_error_response(err, "render video page"),
    }
}

#[get("/feed")]
pub async fn feed(
    params: web::Query<FeedQueryParams>,
    htmx: HtmxRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_feed(params.page.as_deref(), repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context("feed");
            context.insert("videos", &page.items);
            context.insert("has_more", &page.has_next);
            context.insert("next_page", &page.next_page);
            context.insert("page", &page.page);
            context.insert("total_pages", &page.total_pages);
            let template = if htmx.is_fragment() {
                "partials/feed_results.html"
            } else {
                "feed.html"
            };
            render_template(&tera, template, &context)
        }
        Err(err) => service_error_response(err, "render feed"),
    }
}

#[get("/search")]
pub async fn search(
    params: web::Query<SearchQueryParams>,
    htmx: HtmxRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match search_videos(params.search_text.as_deref(), repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context("search");
            context.insert("search_performed", &page.performed());
            context.insert("search_text", &page.search_text);
            context.insert("videos", &page.videos);
            let template = if htmx.is_fragment() {
                "partials/search_results.html"
            } else {
                "search.html"
            };
            render_template(&tera, template, &context)
        }
        Err(err) => service_error_response(err, "render search results"),
    }
}
