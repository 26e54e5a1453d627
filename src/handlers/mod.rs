// Two security tiers, mirroring the route table:
// public (no auth) and protected (session cookie required).
pub mod protected;
pub mod public;
pub mod utils;
