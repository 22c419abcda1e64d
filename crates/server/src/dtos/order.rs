use super::movie_session::MovieSessionListItem;
use chrono::NaiveDateTime;
use database::services::order::{OrderWithTickets, TicketWithSession};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketResponse {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub movie_session: MovieSessionListItem,
}

impl From<TicketWithSession> for TicketResponse {
    fn from(data: TicketWithSession) -> Self {
        Self {
            id: data.ticket.id,
            row: data.ticket.row_number,
            seat: data.ticket.seat_number,
            movie_session: data.session.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub tickets: Vec<TicketResponse>,
}

impl From<OrderWithTickets> for OrderResponse {
    fn from(data: OrderWithTickets) -> Self {
        Self {
            id: data.order.id,
            created_at: data.order.created_at,
            tickets: data.tickets.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(per_page);
        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderQueryParams {
    /// 1-based page number, ten orders per page
    pub page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 10, 21);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        let last = PaginationMeta::new(3, 10, 21);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let empty = PaginationMeta::new(1, 10, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
    }
}
