pub mod category;
pub mod comment;
pub mod dessert;
pub mod errors;
pub mod profile;
pub mod slug;
pub mod user;
