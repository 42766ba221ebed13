//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::Utc;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;
use video_collector::db::{DbPool, establish_connection_pool};
use video_collector::domain::category::{Category, NewCategory};
use video_collector::domain::types::{
    CategoryId, CategoryName, VideoAuthor, VideoTitle, ViewCount, YoutubeId,
};
use video_collector::domain::video::{NewVideo, Video};
use video_collector::repository::{CategoryWriter, DieselRepository, VideoWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn create_category(repo: &DieselRepository, name: &str) -> Category {
    repo.create_category(&NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
        description: None,
    })
    .expect("should create category")
}

pub fn create_video(
    repo: &DieselRepository,
    category_id: CategoryId,
    title: &str,
    author: &str,
) -> Video {
    let video = NewVideo {
        youtube_id: YoutubeId::new(format!("yt-{}", title.len())).expect("valid youtube id"),
        title: VideoTitle::new(title).expect("valid title"),
        author: VideoAuthor::new(author).expect("valid author"),
        view_count: ViewCount::new(1).expect("valid view count"),
        created_at: Utc::now().naive_utc(),
    };
    repo.create_video(&video, category_id)
        .expect("should create video")
}
