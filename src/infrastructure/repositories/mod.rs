mod error;
mod postgres_category;
mod postgres_comment;
mod postgres_dessert;
mod postgres_profile;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_dessert::PostgresDessertRepository;
pub use postgres_profile::PostgresProfileRepository;
pub use postgres_user::PostgresUserRepository;
