pub mod categories;
pub mod comments;
pub mod desserts;
pub mod profiles;
pub mod users;
