use super::error::{ServiceError, ServiceResult, is_unique_violation};
use crate::entities::genre;
use log::info;
use models::{catalog::GenreInput, validation::FieldErrors};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct GenreService;

impl GenreService {
    const RESOURCE: &'static str = "genre";

    /// All genres, ordered by id
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<genre::Model>> {
        Ok(genre::Entity::find()
            .order_by_asc(genre::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<genre::Model> {
        genre::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    pub async fn create(db: &DatabaseConnection, input: GenreInput) -> ServiceResult<genre::Model> {
        input.validate(false)?;
        let name = input.name.unwrap_or_default();
        Self::ensure_unique_name(db, &name, None).await?;

        let genre = genre::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(Self::classify)?;

        info!("Created genre {} ({})", genre.id, genre.name);
        Ok(genre)
    }

    /// Applies the given fields; with `partial` unset every field is required
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: GenreInput,
        partial: bool,
    ) -> ServiceResult<genre::Model> {
        let existing = Self::get(db, id).await?;
        input.validate(partial)?;

        let mut genre: genre::ActiveModel = existing.into();
        if let Some(name) = input.name {
            Self::ensure_unique_name(db, &name, Some(id)).await?;
            genre.name = Set(name);
        }

        Ok(genre.update(db).await.map_err(Self::classify)?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = genre::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        info!("Deleted genre {id}");
        Ok(())
    }

    async fn ensure_unique_name(
        db: &DatabaseConnection,
        name: &str,
        exclude_id: Option<i32>,
    ) -> ServiceResult<()> {
        let mut query = genre::Entity::find().filter(genre::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(genre::Column::Id.ne(id));
        }

        if query.count(db).await? > 0 {
            return Err(Self::duplicate_name().into());
        }
        Ok(())
    }

    fn duplicate_name() -> FieldErrors {
        FieldErrors::single("name", "genre with this name already exists.")
    }

    // A concurrent insert of the same name surfaces as a unique violation
    fn classify(err: DbErr) -> ServiceError {
        if is_unique_violation(&err) {
            ServiceError::Validation(Self::duplicate_name())
        } else {
            ServiceError::Database(err)
        }
    }
}
