pub mod auth;
pub mod categories;
pub mod comments;
pub mod desserts;
pub mod pagination;
pub mod users;

pub use auth::{AuthenticatedUser, SessionDto};
pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use desserts::{DessertDetailDto, DessertDto, RecipeStepDto};
pub use pagination::Page;
pub use users::{ProfileDto, UserDto};
