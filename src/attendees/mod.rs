//! Event attendee listing integration module.
//!
//! Provides the client for the paged attendee listing endpoint and its models.

pub mod client;
pub mod models;

pub use client::{AttendeeClient, FetchError, PageRequest};
pub use models::{Attendee, AttendeeId, AttendeePage};
