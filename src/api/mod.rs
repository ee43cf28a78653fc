//! HTTP API module for the stay pricing service.
//!
//! This module provides the REST endpoints that resolve catalog ids and
//! return priced quotes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddonChoice, MAX_ROOMS_PER_QUOTE, MAX_STAY_NIGHTS, MultiRoomQuoteRequest, QuoteRequest,
    RoomRequest,
};
pub use response::{ApiError, ApiErrorResponse, QuoteResponse, QuoteWarning};
pub use state::AppState;
