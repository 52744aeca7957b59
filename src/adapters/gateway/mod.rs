//! Transport-neutral gateway adapters.

mod recording_gateway;

pub use recording_gateway::{RecordingGateway, SentMessage};
