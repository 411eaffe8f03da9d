// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
        guard,
    },
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    /// Staff only; the public site never offers this form.
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        guard::ensure_staff(actor)?;

        let name = CategoryName::new(command.name)?;
        let slug = self.slug_service.generate(name.as_str(), "category")?;

        // A duplicate name comes back from the store as a validation
        // error on the name field.
        let created = self.category_repo.insert(NewCategory { name, slug }).await?;

        Ok(CategoryDto::from(created))
    }
}
