use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};
use crate::models::video::{NewVideo as DbNewVideo, Video as DbVideo, VideoCategory};
use crate::repository::{
    DieselRepository, RepositoryResult, VideoListQuery, VideoReader, VideoWriter,
};
use crate::schema::videos;
use crate::search::{LIKE_ESCAPE, SearchTerms};

type VideoFilter = Box<dyn BoxableExpression<videos::table, Sqlite, SqlType = Bool>>;

/// `title LIKE p OR author LIKE p` for every term, joined with `OR`.
fn search_filter(terms: &SearchTerms) -> Option<VideoFilter> {
    terms
        .like_patterns()
        .map(|pattern| -> VideoFilter {
            Box::new(
                videos::title
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(videos::author.like(pattern).escape(LIKE_ESCAPE)),
            )
        })
        .reduce(|acc, term| -> VideoFilter { Box::new(acc.or(term)) })
}

impl VideoReader for DieselRepository {
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<(usize, Vec<Video>)> {
        use crate::schema::video_categories;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = videos::table.into_boxed::<Sqlite>();

            if let Some(category_id) = query.category_id {
                items = items.filter(
                    videos::id.eq_any(
                        video_categories::table
                            .filter(video_categories::category_id.eq(category_id.get()))
                            .select(video_categories::video_id),
                    ),
                );
            }

            if let Some(filter) = query.search.as_ref().and_then(search_filter) {
                items = items.filter(filter);
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
                .limit(pagination.per_page as i64);
        }

        let items = items
            .order(videos::id.asc())
            .load::<DbVideo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Video>, _>>()?;

        Ok((total, items))
    }

    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        let mut conn = self.conn()?;

        let video = videos::table
            .filter(videos::id.eq(id.get()))
            .first::<DbVideo>(&mut conn)
            .optional()?;

        Ok(video.map(TryInto::try_into).transpose()?)
    }
}

impl VideoWriter for DieselRepository {
    fn create_video(&self, video: &NewVideo, category_id: CategoryId) -> RepositoryResult<Video> {
        use crate::schema::video_categories;

        let mut conn = self.conn()?;
        let db_video: DbNewVideo = video.into();

        let created = conn.transaction(|conn| {
            let created = diesel::insert_into(videos::table)
                .values(&db_video)
                .get_result::<DbVideo>(conn)?;

            diesel::insert_into(video_categories::table)
                .values(VideoCategory {
                    video_id: created.id,
                    category_id: category_id.get(),
                })
                .execute(conn)?;

            Ok::<_, diesel::result::Error>(created)
        })?;

        Ok(created.try_into()?)
    }
}
