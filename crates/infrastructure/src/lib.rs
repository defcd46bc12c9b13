pub mod repositories;
pub mod seed;

pub use repositories::*;
pub use seed::seed_users;
