//! HTTP adapter for dialogue endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, EventRequest, EventResponse, MessageRequest, MessageResponse, TransportUser,
};
pub use handlers::DialogueAppState;
pub use routes::dialogue_router;
