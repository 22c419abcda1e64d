use super::error::{ServiceError, ServiceResult};
use crate::entities::actor;
use log::info;
use models::catalog::ActorInput;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};

pub struct ActorService;

impl ActorService {
    const RESOURCE: &'static str = "actor";

    /// All actors, ordered by id
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<actor::Model>> {
        Ok(actor::Entity::find()
            .order_by_asc(actor::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<actor::Model> {
        actor::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    pub async fn create(db: &DatabaseConnection, input: ActorInput) -> ServiceResult<actor::Model> {
        input.validate(false)?;

        let actor = actor::ActiveModel {
            first_name: Set(input.first_name.unwrap_or_default()),
            last_name: Set(input.last_name.unwrap_or_default()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created actor {} ({})", actor.id, actor.full_name());
        Ok(actor)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: ActorInput,
        partial: bool,
    ) -> ServiceResult<actor::Model> {
        let existing = Self::get(db, id).await?;
        input.validate(partial)?;

        let mut actor: actor::ActiveModel = existing.into();
        if let Some(first_name) = input.first_name {
            actor.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            actor.last_name = Set(last_name);
        }

        Ok(actor.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = actor::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        info!("Deleted actor {id}");
        Ok(())
    }
}
