use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};
use crate::pagination::Pagination;
use crate::search::SearchTerms;

pub mod category;
pub mod errors;
pub mod video;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// How a requested category name is compared with stored names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Whole-name equality ignoring ASCII case.
    CaseInsensitive,
}

/// Query parameters used when listing videos.
#[derive(Debug, Clone, Default)]
pub struct VideoListQuery {
    /// Restrict to videos linked to a category.
    pub category_id: Option<CategoryId>,
    /// Keep only videos whose title or author contains any term.
    pub search: Option<SearchTerms>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl VideoListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn search(mut self, terms: SearchTerms) -> Self {
        self.search = Some(terms);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in insertion order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Find a category by name. When several names match case-insensitively
    /// the oldest one wins.
    fn get_category_by_name(
        &self,
        name: &str,
        matching: NameMatch,
    ) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// List videos in insertion order, returning the total number of matches
    /// before pagination together with the requested window.
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<(usize, Vec<Video>)>;
    /// Retrieve a video by its identifier.
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
}

/// Write operations for video entities.
pub trait VideoWriter {
    /// Persist a video and link it to `category_id` atomically.
    fn create_video(&self, video: &NewVideo, category_id: CategoryId) -> RepositoryResult<Video>;
}
