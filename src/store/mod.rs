pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Booking, BookingRequest};

pub use memory::MemStore;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Assign the next id, default the status to pending and persist the
    /// record. Callers hand over an already-validated request.
    async fn create_booking(&self, request: BookingRequest) -> anyhow::Result<Booking>;

    /// All bookings, in insertion order.
    async fn bookings(&self) -> anyhow::Result<Vec<Booking>>;

    /// Bookings whose date falls on the given calendar day, in insertion
    /// order. The day is already parsed; raw input is the caller's problem.
    async fn bookings_on(&self, day: NaiveDate) -> anyhow::Result<Vec<Booking>>;
}
