use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Every booking request starts out pending; staff confirm it out-of-band.
pub const STATUS_PENDING: &str = "pending";

/// An appointment request as stored. `date` and `time` are kept exactly as
/// the client submitted them; the API validates presence, not format.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: i32,
    pub date: String,
    pub time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
