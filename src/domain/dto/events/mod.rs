pub mod event_dto;

pub use event_dto::{CreateEventRequest, EventResponse, UpdateEventRequest};
