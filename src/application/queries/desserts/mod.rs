mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetDessertBySlugQuery;
pub use list::ListDessertsQuery;
pub use service::DessertQueryService;
