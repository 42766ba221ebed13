use crate::dto::categories::CategoryDto;
use crate::dto::{ROW_SIZE, chunked};
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the home page.
///
/// Returns every category, in insertion order, grouped into rows of
/// [`ROW_SIZE`].
pub fn show_home<R>(repo: &R) -> ServiceResult<Vec<Vec<CategoryDto>>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(chunked(
            categories.into_iter().map(CategoryDto::from),
            ROW_SIZE,
        )),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}
