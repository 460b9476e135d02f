//! Event records returned by `apply`, and their log notation.

pub mod record;
pub mod notation;

pub use record::{EventDetail, EventRecord, SmallLosses};
pub use notation::{event_notation, square_name};
