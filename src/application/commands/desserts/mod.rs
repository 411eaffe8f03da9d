mod create;
mod delete;
mod service;
mod update;

pub use create::CreateDessertCommand;
pub use delete::DeleteDessertCommand;
pub use service::{DessertCommandService, RecipeStepInput};
pub use update::UpdateDessertCommand;
