use crate::{seat::Seat, validation::FieldErrors};
use serde::Deserialize;

/// Orders are listed ten to a page
pub const ORDER_PAGE_SIZE: u64 = 10;

/// One seat the caller wants to book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TicketRequest {
    /// Movie session id
    pub movie_session: i32,
    pub row: i32,
    pub seat: i32,
}

impl TicketRequest {
    pub fn seat(&self) -> Seat {
        Seat::new(self.row, self.seat)
    }
}

/// Order creation body, accepted either as a bare list of tickets or wrapped
/// in a `tickets` field
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum OrderRequest {
    Wrapped { tickets: Vec<TicketRequest> },
    Bare(Vec<TicketRequest>),
}

impl OrderRequest {
    pub fn into_tickets(self) -> Vec<TicketRequest> {
        match self {
            Self::Wrapped { tickets } | Self::Bare(tickets) => tickets,
        }
    }
}

/// 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn orders(page: Option<u64>) -> Result<Self, FieldErrors> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(FieldErrors::single("page", "Page numbers start at 1."));
        }
        Ok(Self {
            page,
            per_page: ORDER_PAGE_SIZE,
        })
    }

    /// Rows skipped before this page, or `None` if that does not fit in a `u64`
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1).checked_mul(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_body_shapes() {
        let bare: OrderRequest =
            serde_json::from_str(r#"[{"movie_session": 1, "row": 2, "seat": 3}]"#).unwrap();
        let wrapped: OrderRequest =
            serde_json::from_str(r#"{"tickets": [{"movie_session": 1, "row": 2, "seat": 3}]}"#)
                .unwrap();

        let expected = vec![TicketRequest {
            movie_session: 1,
            row: 2,
            seat: 3,
        }];
        assert_eq!(bare.into_tickets(), expected);
        assert_eq!(wrapped.into_tickets(), expected);
    }

    #[test]
    fn test_page_request() {
        assert_eq!(PageRequest::orders(None).unwrap().page, 1);
        assert_eq!(PageRequest::orders(Some(3)).unwrap().per_page, 10);
        assert!(PageRequest::orders(Some(0)).is_err());
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(PageRequest::orders(None).unwrap().offset(), Some(0));
        assert_eq!(PageRequest::orders(Some(3)).unwrap().offset(), Some(20));
        assert_eq!(PageRequest::orders(Some(u64::MAX)).unwrap().offset(), None);
        assert_eq!(PageRequest::orders(Some(1 << 62)).unwrap().offset(), None);
    }
}
