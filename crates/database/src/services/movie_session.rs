use super::{
    error::{ServiceError, ServiceResult},
    movie::{MovieService, MovieWithRelations},
};
use crate::entities::{cinema_hall, movie, movie_session, ticket};
use log::info;
use models::{
    movie_session::{MovieSessionFilter, MovieSessionInput},
    seat::Seat,
    validation::{FieldErrors, missing_reference},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

/// A session together with the catalog data its list view surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session: movie_session::Model,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub capacity: i64,
    pub tickets_available: i64,
}

/// Everything needed to render a seat map for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAvailability {
    pub session: movie_session::Model,
    pub movie: MovieWithRelations,
    pub cinema_hall: cinema_hall::Model,
    /// Seats already sold, ordered by row then seat
    pub taken_places: Vec<Seat>,
}

pub struct MovieSessionService;

impl MovieSessionService {
    const RESOURCE: &'static str = "movie session";

    /// Sessions matching the filter, ordered by show time
    pub async fn list(
        db: &DatabaseConnection,
        filter: &MovieSessionFilter,
    ) -> ServiceResult<Vec<SessionSummary>> {
        let mut query = movie_session::Entity::find();

        if let Some((start, end)) = filter.day_bounds() {
            query = query.filter(movie_session::Column::ShowTime.gte(start));
            if let Some(end) = end {
                query = query.filter(movie_session::Column::ShowTime.lt(end));
            }
        }

        if let Some(movie_id) = filter.movie {
            query = query.filter(movie_session::Column::MovieId.eq(movie_id));
        }

        let sessions = query
            .order_by_asc(movie_session::Column::ShowTime)
            .order_by_asc(movie_session::Column::Id)
            .all(db)
            .await?;

        Ok(Self::summarize(db, sessions).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<movie_session::Model> {
        movie_session::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    /// Session details plus every seat currently sold for it
    ///
    /// Always read from current ticket state; nothing here is cached.
    pub async fn availability(
        db: &DatabaseConnection,
        id: i32,
    ) -> ServiceResult<SessionAvailability> {
        let (session, cinema_hall) = movie_session::Entity::find_by_id(id)
            .find_also_related(cinema_hall::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))?;

        let cinema_hall = cinema_hall.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "cinema hall {} of session {id}",
                session.cinema_hall_id
            ))
        })?;

        let movie = MovieService::find_with_relations(db, session.movie_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("movie {} of session {id}", session.movie_id))
            })?;

        let taken_places = Self::taken_seats(db, id).await?;

        Ok(SessionAvailability {
            session,
            movie,
            cinema_hall,
            taken_places,
        })
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: MovieSessionInput,
    ) -> ServiceResult<movie_session::Model> {
        input.validate(false)?;
        Self::check_references(db, &input).await?;

        let session = movie_session::ActiveModel {
            show_time: Set(input.show_time.unwrap_or_default()),
            movie_id: Set(input.movie.unwrap_or_default()),
            cinema_hall_id: Set(input.cinema_hall.unwrap_or_default()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Created movie session {} (movie {}, hall {}, {})",
            session.id, session.movie_id, session.cinema_hall_id, session.show_time
        );
        Ok(session)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: MovieSessionInput,
        partial: bool,
    ) -> ServiceResult<movie_session::Model> {
        let existing = Self::get(db, id).await?;
        input.validate(partial)?;
        Self::check_references(db, &input).await?;

        let mut session: movie_session::ActiveModel = existing.into();
        if let Some(show_time) = input.show_time {
            session.show_time = Set(show_time);
        }
        if let Some(movie_id) = input.movie {
            session.movie_id = Set(movie_id);
        }
        if let Some(cinema_hall_id) = input.cinema_hall {
            session.cinema_hall_id = Set(cinema_hall_id);
        }

        Ok(session.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = movie_session::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        info!("Deleted movie session {id}");
        Ok(())
    }

    /// Seats sold for a session, ordered by row then seat
    pub async fn taken_seats<C: ConnectionTrait>(
        db: &C,
        session_id: i32,
    ) -> Result<Vec<Seat>, DbErr> {
        let seats = ticket::Entity::find()
            .select_only()
            .column(ticket::Column::RowNumber)
            .column(ticket::Column::SeatNumber)
            .filter(ticket::Column::MovieSessionId.eq(session_id))
            .order_by_asc(ticket::Column::RowNumber)
            .order_by_asc(ticket::Column::SeatNumber)
            .into_tuple::<(i32, i32)>()
            .all(db)
            .await?;

        Ok(seats.into_iter().map(Seat::from).collect())
    }

    /// Batch-loads movie titles, hall capacities and sold-ticket counts
    pub(crate) async fn summarize<C: ConnectionTrait>(
        db: &C,
        sessions: Vec<movie_session::Model>,
    ) -> Result<Vec<SessionSummary>, DbErr> {
        if sessions.is_empty() {
            return Ok(vec![]);
        }

        let session_ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
        let movie_ids: Vec<i32> = sessions.iter().map(|s| s.movie_id).collect();
        let hall_ids: Vec<i32> = sessions.iter().map(|s| s.cinema_hall_id).collect();

        let titles: HashMap<i32, String> = movie::Entity::find()
            .select_only()
            .column(movie::Column::Id)
            .column(movie::Column::Title)
            .filter(movie::Column::Id.is_in(movie_ids))
            .into_tuple::<(i32, String)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let halls: HashMap<i32, cinema_hall::Model> = cinema_hall::Entity::find()
            .filter(cinema_hall::Column::Id.is_in(hall_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|hall| (hall.id, hall))
            .collect();

        let sold: HashMap<i32, i64> = ticket::Entity::find()
            .select_only()
            .column(ticket::Column::MovieSessionId)
            .column_as(ticket::Column::Id.count(), "sold")
            .filter(ticket::Column::MovieSessionId.is_in(session_ids))
            .group_by(ticket::Column::MovieSessionId)
            .into_tuple::<(i32, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        Ok(sessions
            .into_iter()
            .map(|session| {
                let movie_title = titles.get(&session.movie_id).cloned().unwrap_or_default();
                let (cinema_hall_name, capacity) = halls
                    .get(&session.cinema_hall_id)
                    .map(|hall| (hall.name.clone(), hall.capacity()))
                    .unwrap_or_default();
                let tickets_available = capacity - sold.get(&session.id).copied().unwrap_or(0);

                SessionSummary {
                    session,
                    movie_title,
                    cinema_hall_name,
                    capacity,
                    tickets_available,
                }
            })
            .collect())
    }

    async fn check_references(
        db: &DatabaseConnection,
        input: &MovieSessionInput,
    ) -> ServiceResult<()> {
        let mut errors = FieldErrors::new();

        if let Some(movie_id) = input.movie
            && movie::Entity::find_by_id(movie_id).count(db).await? == 0
        {
            errors.add("movie", missing_reference(movie_id));
        }

        if let Some(hall_id) = input.cinema_hall
            && cinema_hall::Entity::find_by_id(hall_id).count(db).await? == 0
        {
            errors.add("cinema_hall", missing_reference(hall_id));
        }

        Ok(errors.into_result()?)
    }
}
