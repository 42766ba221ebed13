use serde::Serialize;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName};
use crate::dto::categories::CategoryDto;
use crate::dto::videos::VideoDto;
use crate::dto::{ROW_SIZE, chunked};
use crate::forms::videos::{AddVideoForm, AddVideoFormPayload, FormErrors};
use crate::repository::{
    CategoryReader, CategoryWriter, NameMatch, VideoListQuery, VideoReader, VideoWriter,
};

use super::{ServiceError, ServiceResult};

/// Everything the category page template renders.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub category: CategoryDto,
    pub form: AddVideoForm,
    pub errors: FormErrors,
    pub rows: Vec<Vec<VideoDto>>,
}

fn find_category<R>(name: &str, matching: NameMatch, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_name(name, matching) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn video_rows<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Vec<Vec<VideoDto>>>
where
    R: VideoReader,
{
    match repo.list_videos(VideoListQuery::default().category(category_id)) {
        Ok((_total, videos)) => Ok(chunked(videos.into_iter().map(VideoDto::from), ROW_SIZE)),
        Err(e) => {
            log::error!("Failed to list category videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for rendering a category page with an empty form.
///
/// The category name is matched ignoring case.
pub fn show_category<R>(name: &str, repo: &R) -> ServiceResult<CategoryPage>
where
    R: CategoryReader + VideoReader,
{
    let category = find_category(name, NameMatch::CaseInsensitive, repo)?;
    let rows = video_rows(category.id, repo)?;

    Ok(CategoryPage {
        category: category.into(),
        form: AddVideoForm::default(),
        errors: FormErrors::default(),
        rows,
    })
}

/// Validates a submitted video and, when valid, stores it in the category.
///
/// Invalid submissions persist nothing and come back with the submitted
/// values and per-field errors. A valid submission resets the form. Either
/// way the video list is read again so a new video shows up immediately.
pub fn submit_video<R>(name: &str, form: AddVideoForm, repo: &R) -> ServiceResult<CategoryPage>
where
    R: CategoryReader + VideoReader + VideoWriter,
{
    let category = find_category(name, NameMatch::CaseInsensitive, repo)?;

    let (form, errors) = match AddVideoFormPayload::try_from(&form) {
        Ok(payload) => {
            let video = payload.into_new_video();
            match repo.create_video(&video, category.id) {
                Ok(created) => log::info!(
                    "Added video {} ({}) to category {}",
                    created.id,
                    created.youtube_id,
                    category.name
                ),
                Err(e) => {
                    log::error!("Failed to create video: {e}");
                    return Err(ServiceError::Internal);
                }
            }
            (AddVideoForm::default(), FormErrors::default())
        }
        Err(errors) => (form, errors),
    };

    let rows = video_rows(category.id, repo)?;

    Ok(CategoryPage {
        category: category.into(),
        form,
        errors,
        rows,
    })
}

/// Resolves the category targeted by the add-video form and link fragments.
///
/// Unlike the category page, the name must match exactly, including case.
pub fn show_add_video_control<R>(name: &str, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    find_category(name, NameMatch::Exact, repo).map(CategoryDto::from)
}

/// Creates every category from `names` that does not exist yet.
///
/// Names are compared ignoring case, matching how the category page resolves
/// them, so "comedy" is not added next to an existing "Comedy".
///
/// Returns how many categories were created.
pub fn seed_categories<R>(names: &[String], repo: &R) -> ServiceResult<usize>
where
    R: CategoryReader + CategoryWriter,
{
    let mut created = 0;
    for name in names {
        let name = CategoryName::new(name.as_str())
            .map_err(|e| ServiceError::MalformedInput(e.to_string()))?;

        match find_category(name.as_str(), NameMatch::CaseInsensitive, repo) {
            Ok(_) => continue,
            Err(ServiceError::NotFound) => {}
            Err(err) => return Err(err),
        }

        let category = NewCategory {
            name,
            description: None,
        };
        match repo.create_category(&category) {
            Ok(category) => {
                log::info!("Created category {}", category.name);
                created += 1;
            }
            Err(e) => {
                log::error!("Failed to create category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }
    Ok(created)
}
