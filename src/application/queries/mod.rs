pub mod categories;
pub mod desserts;
pub mod profiles;
