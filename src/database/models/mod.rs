pub mod booking;
pub mod contact;
pub mod membership;

pub use booking::Booking;
pub use contact::ContactMessage;
pub use membership::{Localized, MembershipTier, MembershipTierRow};
