use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, NameMatch, RepositoryResult,
};
use crate::search::{LIKE_ESCAPE, escape_like};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_name(
        &self,
        name: &str,
        matching: NameMatch,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let query = categories::table.into_boxed::<diesel::sqlite::Sqlite>();
        // SQLite `=` is case-sensitive, `LIKE` folds ASCII case.
        let query = match matching {
            NameMatch::Exact => query.filter(categories::name.eq(name)),
            NameMatch::CaseInsensitive => query.filter(
                categories::name
                    .like(escape_like(name))
                    .escape(LIKE_ESCAPE),
            ),
        };

        let category = query
            .order(categories::id.asc())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(TryInto::try_into).transpose()?)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.into();

        let created = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
