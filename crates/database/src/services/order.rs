use super::{
    error::{ServiceError, ServiceResult, is_unique_violation},
    movie_session::{MovieSessionService, SessionSummary},
};
use crate::entities::{cinema_hall, movie_session, order, ticket};
use chrono::Utc;
use log::{info, warn};
use models::{
    order::{PageRequest, TicketRequest},
    seat::{HallLayout, Seat, SeatOutOfRange},
    validation::{FieldErrors, missing_reference},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use std::collections::{HashMap, HashSet};

/// A sold ticket with the session it admits to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithSession {
    pub ticket: ticket::Model,
    pub session: SessionSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWithTickets {
    pub order: order::Model,
    pub tickets: Vec<TicketWithSession>,
}

pub struct OrderService;

impl OrderService {
    const RESOURCE: &'static str = "order";

    /// One page of the user's orders, newest first, plus the user's total order count
    pub async fn list(
        db: &DatabaseConnection,
        user_id: &str,
        page: PageRequest,
    ) -> ServiceResult<(Vec<OrderWithTickets>, u64)> {
        let query = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .order_by_desc(order::Column::Id);

        let total_items = query.clone().count(db).await?;

        // Pages past the end are empty, however far past
        match page.offset() {
            Some(offset) if offset < total_items => {}
            _ => return Ok((vec![], total_items)),
        }

        let paginator = query.paginate(db, page.per_page);
        let orders = paginator.fetch_page(page.page - 1).await?; // SeaORM uses 0-based pages

        Ok((Self::with_tickets(db, orders).await?, total_items))
    }

    /// Orders belonging to other users are reported as missing
    pub async fn get(
        db: &DatabaseConnection,
        user_id: &str,
        id: i32,
    ) -> ServiceResult<OrderWithTickets> {
        let order = order::Entity::find_by_id(id)
            .filter(order::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))?;

        Self::with_tickets(db, vec![order])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, id))
    }

    /// Places an order for the given seats
    ///
    /// Every line item is validated before anything is written, and the order
    /// row and its tickets are committed in a single transaction. A seat sold to
    /// a concurrent order between validation and commit trips the unique index
    /// on `(movie_session_id, row, seat)` and is reported as a conflict.
    pub async fn create(
        db: &DatabaseConnection,
        user_id: &str,
        requests: Vec<TicketRequest>,
    ) -> ServiceResult<OrderWithTickets> {
        if requests.is_empty() {
            return Err(
                FieldErrors::single("tickets", "An order needs at least one ticket.").into(),
            );
        }

        let txn = db.begin().await?;
        Self::validate_tickets(&txn, &requests).await?;
        let order = Self::persist(&txn, user_id, &requests).await?;
        txn.commit().await.map_err(Self::classify)?;

        info!(
            "Created order {} for user {} with {} tickets",
            order.id,
            user_id,
            requests.len()
        );

        let order_id = order.id;
        Self::with_tickets(db, vec![order])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found(Self::RESOURCE, order_id))
    }

    /// Writes the order row and its tickets without checking availability
    ///
    /// The unique seat index still applies, so a seat sold since validation
    /// comes back as `Conflict`.
    async fn persist(
        txn: &DatabaseTransaction,
        user_id: &str,
        requests: &[TicketRequest],
    ) -> ServiceResult<order::Model> {
        let order = order::ActiveModel {
            user_id: Set(user_id.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Self::insert_tickets(txn, order.id, requests)
            .await
            .map_err(Self::classify)?;
        Ok(order)
    }

    async fn insert_tickets(
        txn: &DatabaseTransaction,
        order_id: i32,
        requests: &[TicketRequest],
    ) -> Result<(), DbErr> {
        for request in requests {
            ticket::ActiveModel {
                row_number: Set(request.row),
                seat_number: Set(request.seat),
                movie_session_id: Set(request.movie_session),
                order_id: Set(order_id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }
        Ok(())
    }

    /// Checks session existence, hall bounds and seat availability for every line item
    ///
    /// Malformed items yield `Validation`; if the only problems are seats already
    /// sold (or requested twice) the result is `Conflict`.
    async fn validate_tickets<C: ConnectionTrait>(
        db: &C,
        requests: &[TicketRequest],
    ) -> ServiceResult<()> {
        let mut session_ids: Vec<i32> = requests.iter().map(|r| r.movie_session).collect();
        session_ids.sort_unstable();
        session_ids.dedup();

        let layouts: HashMap<i32, HallLayout> = movie_session::Entity::find()
            .filter(movie_session::Column::Id.is_in(session_ids.clone()))
            .find_also_related(cinema_hall::Entity)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(session, hall)| hall.map(|hall| (session.id, hall.layout())))
            .collect();

        let taken: HashSet<(i32, Seat)> = ticket::Entity::find()
            .select_only()
            .column(ticket::Column::MovieSessionId)
            .column(ticket::Column::RowNumber)
            .column(ticket::Column::SeatNumber)
            .filter(ticket::Column::MovieSessionId.is_in(session_ids))
            .into_tuple::<(i32, i32, i32)>()
            .all(db)
            .await?
            .into_iter()
            .map(|(session_id, row, seat)| (session_id, Seat::new(row, seat)))
            .collect();

        let mut invalid = FieldErrors::new();
        let mut conflicts = FieldErrors::new();
        let mut requested: HashSet<(i32, Seat)> = HashSet::new();

        for (idx, request) in requests.iter().enumerate() {
            let Some(layout) = layouts.get(&request.movie_session) else {
                invalid.add(
                    format!("tickets.{idx}.movie_session"),
                    missing_reference(request.movie_session),
                );
                continue;
            };

            let seat = request.seat();
            let problems = layout.check(seat);
            if !problems.is_empty() {
                for problem in problems {
                    let field = match problem {
                        SeatOutOfRange::Row { .. } => "row",
                        SeatOutOfRange::Seat { .. } => "seat",
                    };
                    invalid.add(format!("tickets.{idx}.{field}"), problem.to_string());
                }
                continue;
            }

            let key = (request.movie_session, seat);
            if taken.contains(&key) {
                conflicts.add(
                    format!("tickets.{idx}.seat"),
                    format!(
                        "Seat ({seat}) is already taken for movie session {}.",
                        request.movie_session
                    ),
                );
            } else if !requested.insert(key) {
                conflicts.add(
                    format!("tickets.{idx}.seat"),
                    format!("Seat ({seat}) is requested more than once in this order."),
                );
            }
        }

        if !invalid.is_empty() {
            invalid.merge(conflicts);
            return Err(ServiceError::Validation(invalid));
        }
        if !conflicts.is_empty() {
            warn!("Rejected order: {conflicts}");
            return Err(ServiceError::Conflict(conflicts));
        }
        Ok(())
    }

    // Losing a race for a seat is the caller's problem, not a server error
    fn classify(err: DbErr) -> ServiceError {
        if is_unique_violation(&err) {
            warn!("Seat booked concurrently: {err}");
            ServiceError::Conflict(FieldErrors::single(
                "tickets",
                "One or more seats were booked by another order. Please choose again.",
            ))
        } else {
            ServiceError::Database(err)
        }
    }

    async fn with_tickets<C: ConnectionTrait>(
        db: &C,
        orders: Vec<order::Model>,
    ) -> Result<Vec<OrderWithTickets>, DbErr> {
        if orders.is_empty() {
            return Ok(vec![]);
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let tickets = ticket::Entity::find()
            .filter(ticket::Column::OrderId.is_in(order_ids))
            .order_by_asc(ticket::Column::Id)
            .all(db)
            .await?;

        let mut session_ids: Vec<i32> = tickets.iter().map(|t| t.movie_session_id).collect();
        session_ids.sort_unstable();
        session_ids.dedup();

        let sessions = movie_session::Entity::find()
            .filter(movie_session::Column::Id.is_in(session_ids))
            .all(db)
            .await?;
        let summaries: HashMap<i32, SessionSummary> =
            MovieSessionService::summarize(db, sessions)
                .await?
                .into_iter()
                .map(|summary| (summary.session.id, summary))
                .collect();

        let mut tickets_by_order: HashMap<i32, Vec<TicketWithSession>> = HashMap::new();
        for ticket in tickets {
            // Tickets cascade with their session, so the summary is always present
            if let Some(session) = summaries.get(&ticket.movie_session_id) {
                tickets_by_order
                    .entry(ticket.order_id)
                    .or_default()
                    .push(TicketWithSession {
                        session: session.clone(),
                        ticket,
                    });
            }
        }

        Ok(orders
            .into_iter()
            .map(|order| OrderWithTickets {
                tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
                order,
            })
            .collect())
    }
}
