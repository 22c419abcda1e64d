use super::error::{ServiceError, ServiceResult};
use crate::entities::{actor, genre, movie, movie_actor, movie_genre};
use log::info;
use models::{
    movie::{MovieFilter, MovieInput},
    validation::{FieldErrors, missing_reference},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, Func, LikeExpr, Query},
};
use std::collections::{HashMap, HashSet};

/// A movie with its genres and actors resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieWithRelations {
    pub movie: movie::Model,
    pub genres: Vec<genre::Model>,
    pub actors: Vec<actor::Model>,
}

pub struct MovieService;

impl MovieService {
    const RESOURCE: &'static str = "movie";

    /// Movies matching the filter, ordered by id
    pub async fn list(
        db: &DatabaseConnection,
        filter: &MovieFilter,
    ) -> ServiceResult<Vec<MovieWithRelations>> {
        let mut query = movie::Entity::find();

        // Case-insensitive on every backend; `%` and `_` in the title match literally
        if let Some(pattern) = filter.title_pattern() {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        if !filter.genres.is_empty() {
            query = query.filter(
                movie::Column::Id.in_subquery(
                    Query::select()
                        .column(movie_genre::Column::MovieId)
                        .from(movie_genre::Entity)
                        .and_where(movie_genre::Column::GenreId.is_in(filter.genres.clone()))
                        .to_owned(),
                ),
            );
        }

        if !filter.actors.is_empty() {
            query = query.filter(
                movie::Column::Id.in_subquery(
                    Query::select()
                        .column(movie_actor::Column::MovieId)
                        .from(movie_actor::Entity)
                        .and_where(movie_actor::Column::ActorId.is_in(filter.actors.clone()))
                        .to_owned(),
                ),
            );
        }

        let movies = query.order_by_asc(movie::Column::Id).all(db).await?;
        Ok(Self::with_relations(db, movies).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<MovieWithRelations> {
        Self::find_with_relations(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    /// Creates the movie and its genre/actor links in one transaction
    pub async fn create(
        db: &DatabaseConnection,
        input: MovieInput,
    ) -> ServiceResult<MovieWithRelations> {
        input.validate(false)?;

        let txn = db.begin().await?;
        Self::check_references(&txn, &input).await?;

        let movie = movie::ActiveModel {
            title: Set(input.title.unwrap_or_default()),
            description: Set(input.description.unwrap_or_default()),
            duration: Set(input.duration.unwrap_or_default()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::link_genres(&txn, movie.id, input.genres.unwrap_or_default()).await?;
        Self::link_actors(&txn, movie.id, input.actors.unwrap_or_default()).await?;
        txn.commit().await?;

        info!("Created movie {} ({})", movie.id, movie.title);
        Self::get(db, movie.id).await
    }

    /// Updates scalar fields and replaces whichever association lists are given
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: MovieInput,
        partial: bool,
    ) -> ServiceResult<MovieWithRelations> {
        let txn = db.begin().await?;
        let existing = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))?;

        input.validate(partial)?;
        Self::check_references(&txn, &input).await?;

        let mut movie: movie::ActiveModel = existing.into();
        if let Some(title) = input.title {
            movie.title = Set(title);
        }
        if let Some(description) = input.description {
            movie.description = Set(description);
        }
        if let Some(duration) = input.duration {
            movie.duration = Set(duration);
        }
        movie.update(&txn).await?;

        if let Some(genres) = input.genres {
            movie_genre::Entity::delete_many()
                .filter(movie_genre::Column::MovieId.eq(id))
                .exec(&txn)
                .await?;
            Self::link_genres(&txn, id, genres).await?;
        }
        if let Some(actors) = input.actors {
            movie_actor::Entity::delete_many()
                .filter(movie_actor::Column::MovieId.eq(id))
                .exec(&txn)
                .await?;
            Self::link_actors(&txn, id, actors).await?;
        }
        txn.commit().await?;

        Self::get(db, id).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        info!("Deleted movie {id}");
        Ok(())
    }

    pub(crate) async fn find_with_relations<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Option<MovieWithRelations>, DbErr> {
        let Some(movie) = movie::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        Ok(Self::with_relations(db, vec![movie]).await?.pop())
    }

    /// Batch-loads genres and actors for the given movies, preserving their order
    async fn with_relations<C: ConnectionTrait>(
        db: &C,
        movies: Vec<movie::Model>,
    ) -> Result<Vec<MovieWithRelations>, DbErr> {
        if movies.is_empty() {
            return Ok(vec![]);
        }

        let movie_ids: Vec<i32> = movies.iter().map(|m| m.id).collect();

        let genre_links: Vec<(movie_genre::Model, Option<genre::Model>)> =
            movie_genre::Entity::find()
                .filter(movie_genre::Column::MovieId.is_in(movie_ids.clone()))
                .find_also_related(genre::Entity)
                .order_by_asc(genre::Column::Id)
                .all(db)
                .await?;

        let actor_links: Vec<(movie_actor::Model, Option<actor::Model>)> =
            movie_actor::Entity::find()
                .filter(movie_actor::Column::MovieId.is_in(movie_ids))
                .find_also_related(actor::Entity)
                .order_by_asc(actor::Column::Id)
                .all(db)
                .await?;

        // Build lookup maps
        let mut genres_by_movie: HashMap<i32, Vec<genre::Model>> = HashMap::new();
        for (link, genre) in genre_links {
            if let Some(genre) = genre {
                genres_by_movie.entry(link.movie_id).or_default().push(genre);
            }
        }

        let mut actors_by_movie: HashMap<i32, Vec<actor::Model>> = HashMap::new();
        for (link, actor) in actor_links {
            if let Some(actor) = actor {
                actors_by_movie.entry(link.movie_id).or_default().push(actor);
            }
        }

        Ok(movies
            .into_iter()
            .map(|movie| MovieWithRelations {
                genres: genres_by_movie.remove(&movie.id).unwrap_or_default(),
                actors: actors_by_movie.remove(&movie.id).unwrap_or_default(),
                movie,
            })
            .collect())
    }

    /// Every referenced genre and actor must exist before anything is linked
    async fn check_references<C: ConnectionTrait>(
        db: &C,
        input: &MovieInput,
    ) -> ServiceResult<()> {
        let mut errors = FieldErrors::new();

        if let Some(ids) = input.genres.as_ref().filter(|ids| !ids.is_empty()) {
            let found: HashSet<i32> = genre::Entity::find()
                .select_only()
                .column(genre::Column::Id)
                .filter(genre::Column::Id.is_in(ids.clone()))
                .into_tuple::<i32>()
                .all(db)
                .await?
                .into_iter()
                .collect();

            for id in ids.iter().filter(|id| !found.contains(id)) {
                errors.add("genres", missing_reference(*id));
            }
        }

        if let Some(ids) = input.actors.as_ref().filter(|ids| !ids.is_empty()) {
            let found: HashSet<i32> = actor::Entity::find()
                .select_only()
                .column(actor::Column::Id)
                .filter(actor::Column::Id.is_in(ids.clone()))
                .into_tuple::<i32>()
                .all(db)
                .await?
                .into_iter()
                .collect();

            for id in ids.iter().filter(|id| !found.contains(id)) {
                errors.add("actors", missing_reference(*id));
            }
        }

        Ok(errors.into_result()?)
    }

    async fn link_genres<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        mut genre_ids: Vec<i32>,
    ) -> Result<(), DbErr> {
        genre_ids.sort_unstable();
        genre_ids.dedup();
        if genre_ids.is_empty() {
            return Ok(());
        }

        movie_genre::Entity::insert_many(genre_ids.into_iter().map(|genre_id| {
            movie_genre::ActiveModel {
                movie_id: Set(movie_id),
                genre_id: Set(genre_id),
            }
        }))
        .exec(db)
        .await?;
        Ok(())
    }

    async fn link_actors<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        mut actor_ids: Vec<i32>,
    ) -> Result<(), DbErr> {
        actor_ids.sort_unstable();
        actor_ids.dedup();
        if actor_ids.is_empty() {
            return Ok(());
        }

        movie_actor::Entity::insert_many(actor_ids.into_iter().map(|actor_id| {
            movie_actor::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(actor_id),
            }
        }))
        .exec(db)
        .await?;
        Ok(())
    }
}
