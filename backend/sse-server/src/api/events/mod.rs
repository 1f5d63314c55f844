pub mod event_stream;
pub mod events;
pub mod membership_guard;
pub mod publish_request;
pub mod publish_response;
