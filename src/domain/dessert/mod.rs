pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Dessert, DessertUpdate, NewDessert, NewRecipeStep, RecipeStep};
pub use repository::{DessertListFilter, DessertReadRepository, DessertWriteRepository};
pub use value_objects::{CookingTime, DessertId, DessertTitle, RecipeStepId};
