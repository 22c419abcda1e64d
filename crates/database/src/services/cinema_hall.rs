use super::error::{ServiceError, ServiceResult};
use crate::entities::cinema_hall;
use log::info;
use models::catalog::CinemaHallInput;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};

pub struct CinemaHallService;

impl CinemaHallService {
    const RESOURCE: &'static str = "cinema hall";

    /// All cinema halls, ordered by id
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<cinema_hall::Model>> {
        Ok(cinema_hall::Entity::find()
            .order_by_asc(cinema_hall::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<cinema_hall::Model> {
        cinema_hall::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: CinemaHallInput,
    ) -> ServiceResult<cinema_hall::Model> {
        input.validate(false)?;

        let hall = cinema_hall::ActiveModel {
            name: Set(input.name.unwrap_or_default()),
            rows: Set(input.rows.unwrap_or_default()),
            seats_in_row: Set(input.seats_in_row.unwrap_or_default()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Created cinema hall {} ({}, {} seats)",
            hall.id,
            hall.name,
            hall.capacity()
        );
        Ok(hall)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: CinemaHallInput,
        partial: bool,
    ) -> ServiceResult<cinema_hall::Model> {
        let existing = Self::get(db, id).await?;
        input.validate(partial)?;

        let mut hall: cinema_hall::ActiveModel = existing.into();
        if let Some(name) = input.name {
            hall.name = Set(name);
        }
        if let Some(rows) = input.rows {
            hall.rows = Set(rows);
        }
        if let Some(seats_in_row) = input.seats_in_row {
            hall.seats_in_row = Set(seats_in_row);
        }

        Ok(hall.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = cinema_hall::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        info!("Deleted cinema hall {id}");
        Ok(())
    }
}
