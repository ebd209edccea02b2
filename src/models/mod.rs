pub mod booking;

pub use booking::{parse_date_time, Booking, BookingRequest, BookingStatus, ValidationError};
