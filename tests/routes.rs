use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use tera::Tera;
use video_collector::repository::{DieselRepository, VideoListQuery, VideoReader};
use video_collector::routes;

mod common;

use common::{create_category, create_video};

fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse")
}

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .app_data(web::Data::new(templates()))
                .configure(routes::configure),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (
            status,
            String::from_utf8(body.to_vec()).expect("body should be utf-8"),
        )
    }};
}

fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get().uri(uri)
}

fn htmx_get(uri: &str) -> test::TestRequest {
    get(uri).insert_header(("HX-Request", "true"))
}

fn video_count(repo: &DieselRepository) -> usize {
    repo.list_videos(VideoListQuery::default())
        .expect("should list videos")
        .0
}

#[actix_web::test]
async fn home_lists_categories() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    for name in ["Comedy", "Music", "Science", "Sports"] {
        create_category(&repo, name);
    }
    let app = init_app!(repo);

    let (status, body) = send!(app, get("/"));

    assert_eq!(status, StatusCode::OK);
    for name in ["Comedy", "Music", "Science", "Sports"] {
        assert!(body.contains(name), "home page should list {name}");
    }
    assert_eq!(body.matches("class=\"row\"").count(), 2);
}

#[actix_web::test]
async fn category_page_ignores_case() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    create_category(&repo, "Comedy");
    let app = init_app!(repo);

    for uri in ["/category/Comedy", "/category/comedy", "/category/COMEDY"] {
        let (status, body) = send!(app, get(uri));
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("<h1>Comedy</h1>"), "{uri}");
    }

    let (status, _) = send!(app, get("/category/Drama"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn add_video_controls_require_exact_case() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    create_category(&repo, "Comedy");
    let app = init_app!(repo);

    let (status, body) = send!(app, get("/category/Comedy/add-video-form"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"youtube_id\""));
    assert!(!body.contains("<html"));

    let (status, body) = send!(app, get("/category/Comedy/add-video-link"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("add-video-form"));

    for uri in [
        "/category/comedy/add-video-form",
        "/category/comedy/add-video-link",
        "/category/Drama/add-video-form",
    ] {
        let (status, _) = send!(app, get(uri));
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn valid_submission_creates_one_linked_video() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let comedy = create_category(&repo, "Comedy");
    let app = init_app!(repo);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/category/comedy")
            .set_form([
                ("youtube_id", "abc123"),
                ("title", "Funny Cats"),
                ("author", "A"),
                ("view_count", "5"),
            ])
    );

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Funny Cats"));
    assert!(!body.contains("class=\"error\""));

    let (total, videos) = repo
        .list_videos(VideoListQuery::default().category(comedy.id))
        .expect("should list videos");
    assert_eq!(total, 1);
    assert_eq!(videos[0].youtube_id, "abc123");
    assert_eq!(videos[0].view_count, 5);
}

#[actix_web::test]
async fn invalid_submission_persists_nothing() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    create_category(&repo, "Comedy");
    let app = init_app!(repo);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/category/Comedy")
            .set_form([("youtube_id", "abc123"), ("author", "A"), ("view_count", "5")])
    );

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This field is required."));
    assert!(body.contains("value=\"abc123\""));
    assert_eq!(video_count(&repo), 0);
}

#[actix_web::test]
async fn submission_to_unknown_category_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let app = init_app!(repo);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/category/Comedy")
            .set_form([
                ("youtube_id", "abc123"),
                ("title", "T"),
                ("author", "A"),
                ("view_count", "5"),
            ])
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(video_count(&repo), 0);
}

#[actix_web::test]
async fn play_video_renders_embed() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let comedy = create_category(&repo, "Comedy");
    let video = create_video(&repo, comedy.id, "Sketch", "Troupe");
    let app = init_app!(repo);

    let (status, body) = send!(app, get(&format!("/video/{}", video.id)));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Sketch</h1>"));
    assert!(body.contains("<iframe"));

    for uri in ["/video/999", "/video/0", "/video/abc"] {
        let (status, _) = send!(app, get(uri));
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn feed_pages_through_videos() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let category = create_category(&repo, "Feed");
    for n in 1..=5 {
        create_video(&repo, category.id, &format!("Video {n}"), "Author");
    }
    let app = init_app!(repo);

    let (status, body) = send!(app, htmx_get("/feed?page=1"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Video 1") && body.contains("Video 2"));
    assert!(!body.contains("Video 3"));
    assert!(body.contains("/feed?page=2"));
    assert!(!body.contains("<html"));

    let (_, body) = send!(app, htmx_get("/feed?page=3"));
    assert!(body.contains("Video 5"));
    assert!(!body.contains("Video 4"));
    assert!(!body.contains("hx-trigger=\"revealed\""));

    let (_, body) = send!(app, htmx_get("/feed?page=0"));
    assert!(body.contains("Video 1") && body.contains("/feed?page=2"));

    let (status, body) = send!(app, htmx_get("/feed?page=999"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Video 5"));
    assert!(!body.contains("hx-trigger=\"revealed\""));

    let (status, body) = send!(app, htmx_get("/feed?page=99999999999999999999"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Video 5"));
    assert!(!body.contains("Video 4"));

    let (status, _) = send!(app, htmx_get("/feed?page=abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn feed_without_htmx_renders_full_page() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let app = init_app!(repo);

    let (status, body) = send!(app, get("/feed"));

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
    assert!(body.contains("id=\"feed\""));
}

#[actix_web::test]
async fn search_matches_any_term() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let category = create_category(&repo, "Mixed");
    create_video(&repo, category.id, "Foobar Show", "Host");
    create_video(&repo, category.id, "Barstool", "Someone");
    create_video(&repo, category.id, "Nothing", "Nobody");
    let app = init_app!(repo);

    let (status, body) = send!(app, htmx_get("/search?search_text=foo%20bar"));
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert!(body.contains("Foobar Show") && body.contains("Barstool"));
    assert!(!body.contains("Nothing"));

    // Double-encoded input is decoded once more.
    let (_, body) = send!(app, htmx_get("/search?search_text=foo%2520bar"));
    assert!(body.contains("Foobar Show") && body.contains("Barstool"));

    let (_, body) = send!(app, htmx_get("/search?search_text=zzz"));
    assert!(body.contains("No videos match"));

    let (_, body) = send!(app, htmx_get("/search?search_text=%20%20"));
    assert!(!body.contains("No videos match"));
    assert!(!body.contains("class=\"result\""));
}

#[actix_web::test]
async fn search_without_htmx_renders_full_page() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let app = init_app!(repo);

    let (status, body) = send!(app, get("/search"));

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
    assert!(body.contains("name=\"search_text\""));
}

#[actix_web::test]
async fn about_is_a_fragment() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();
    let app = init_app!(repo);

    let (status, body) = send!(app, get("/about"));

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("About"));
    assert!(!body.contains("<html"));
}
