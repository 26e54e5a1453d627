pub mod manager;
pub mod models;

pub use models::{Booking, ContactMessage, Localized, MembershipTier, MembershipTierRow};
