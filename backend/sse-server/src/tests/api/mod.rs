mod channels;
mod error;
mod event_stream;
mod events;
