use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Booking, BookingRequest, BookingStatus};

use super::BookingStore;

/// Process-lifetime booking storage. Keyed by id; ids increase monotonically,
/// so iterating the map yields insertion order.
pub struct MemStore {
    inner: Mutex<Inner>,
}

struct Inner {
    bookings: BTreeMap<i64, Booking>,
    next_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                bookings: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for MemStore {
    async fn create_booking(&self, request: BookingRequest) -> anyhow::Result<Booking> {
        // id allocation and insertion must stay under the same lock
        // acquisition, or concurrent creates could reuse an id
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;

        let booking = Booking {
            id,
            name: request.name,
            email: request.email,
            service: request.service,
            date: request.date,
            status: BookingStatus::Pending,
        };
        inner.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.bookings.values().cloned().collect())
    }

    async fn bookings_on(&self, day: NaiveDate) -> anyhow::Result<Vec<Booking>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .bookings
            .values()
            .filter(|b| b.date.date() == day)
            .cloned()
            .collect())
    }
}
