// tests/support/memory.rs
//
// In-memory store standing in for Postgres. One struct implements every
// repository trait so a single Arc can be shared across the service graph,
// and tests can reach in to tweak rows (e.g. grant staff) between requests.
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use sweetrecipe::application::error::{ApplicationError, ApplicationResult};
use sweetrecipe::application::ports::security::PasswordHasher;
use sweetrecipe::domain::category::{
    Category, CategoryId, CategoryRepository, NewCategory,
};
use sweetrecipe::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use sweetrecipe::domain::dessert::{
    Dessert, DessertId, DessertListFilter, DessertReadRepository, DessertUpdate,
    DessertWriteRepository, NewDessert, NewRecipeStep, RecipeStep, RecipeStepId,
};
use sweetrecipe::domain::errors::{DomainError, DomainResult};
use sweetrecipe::domain::profile::{NewProfile, Profile, ProfileId, ProfileRepository, ProfileUpdate};
use sweetrecipe::domain::slug::Slug;
use sweetrecipe::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, Username,
};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    profiles: Mutex<Vec<Profile>>,
    desserts: Mutex<Vec<Dessert>>,
    steps: Mutex<Vec<RecipeStep>>,
    categories: Mutex<Vec<Category>>,
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Flip the staff flag on an existing user, the way an operator would
    /// in the admin console.
    pub fn set_staff(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users
            .iter_mut()
            .find(|u| u.username.as_str() == username)
        {
            user.is_staff = true;
        }
    }

    pub fn dessert_count(&self) -> usize {
        self.desserts.lock().unwrap().len()
    }

    pub fn step_count(&self) -> usize {
        self.steps.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_with_profile(
        &self,
        user: NewUser,
        profile: NewProfile,
    ) -> DomainResult<(User, Profile)> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username.as_str() == user.username.as_str())
        {
            return Err(DomainError::validation(
                "username",
                "username already exists",
            ));
        }
        if users.iter().any(|u| u.email.as_str() == user.email.as_str()) {
            return Err(DomainError::validation("email", "email already registered"));
        }

        let stored = User {
            id: UserId::new(self.next_id())?,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_staff: user.is_staff,
            created_at: user.created_at,
        };
        users.push(stored.clone());

        let stored_profile = Profile {
            id: ProfileId::new(self.next_id())?,
            user_id: stored.id,
            slug: profile.slug,
            display_name: None,
            photo: None,
            date_of_birth: None,
            sex: None,
            phone: None,
            password_changed_at: None,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        };
        self.profiles.lock().unwrap().push(stored_profile.clone());

        Ok((stored, stored_profile))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn email_exists(&self, email: &Email) -> DomainResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email.as_str() == email.as_str()))
    }

    async fn update_password(
        &self,
        id: UserId,
        password_hash: PasswordHash,
        profile_slug: Slug,
        changed_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.password_hash = password_hash;

        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.user_id == id)
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;
        profile.slug = profile_slug;
        profile.password_changed_at = Some(changed_at);
        profile.updated_at = changed_at;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == *slug)
            .cloned())
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile> {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;

        profile.slug = update.slug;
        profile.updated_at = update.updated_at;
        if let Some(display_name) = update.display_name {
            profile.display_name = Some(display_name);
        }
        if let Some(photo) = update.photo {
            profile.photo = Some(photo);
        }
        if let Some(date_of_birth) = update.date_of_birth {
            profile.date_of_birth = Some(date_of_birth);
        }
        if let Some(sex) = update.sex {
            profile.sex = Some(sex);
        }
        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }

        Ok(profile.clone())
    }
}

#[async_trait]
impl DessertWriteRepository for MemoryStore {
    async fn insert(
        &self,
        dessert: NewDessert,
        steps: Vec<NewRecipeStep>,
    ) -> DomainResult<Dessert> {
        let mut desserts = self.desserts.lock().unwrap();
        if desserts.iter().any(|d| d.slug == dessert.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let stored = Dessert {
            id: DessertId::new(self.next_id())?,
            title: dessert.title,
            slug: dessert.slug,
            ingredients: dessert.ingredients,
            description: dessert.description,
            photo: dessert.photo,
            cooking_time: dessert.cooking_time,
            published: dessert.published,
            profile_id: dessert.profile_id,
            categories: dessert.categories,
            created_at: dessert.created_at,
            updated_at: dessert.updated_at,
        };
        desserts.push(stored.clone());

        let mut stored_steps = self.steps.lock().unwrap();
        for step in steps {
            stored_steps.push(RecipeStep {
                id: RecipeStepId(self.next_id()),
                dessert_id: stored.id,
                text: step.text,
                image: step.image,
            });
        }

        Ok(stored)
    }

    async fn update(
        &self,
        update: DessertUpdate,
        steps: Vec<NewRecipeStep>,
    ) -> DomainResult<Dessert> {
        let mut desserts = self.desserts.lock().unwrap();
        let dessert = desserts
            .iter_mut()
            .find(|d| d.id == update.id)
            .ok_or_else(|| DomainError::NotFound("dessert not found".into()))?;

        dessert.title = update.title;
        dessert.slug = update.slug;
        dessert.ingredients = update.ingredients;
        dessert.description = update.description;
        dessert.photo = update.photo;
        dessert.cooking_time = update.cooking_time;
        dessert.categories = update.categories;
        dessert.updated_at = update.updated_at;
        let updated = dessert.clone();

        let mut stored_steps = self.steps.lock().unwrap();
        stored_steps.retain(|s| s.dessert_id != updated.id);
        for step in steps {
            stored_steps.push(RecipeStep {
                id: RecipeStepId(self.next_id()),
                dessert_id: updated.id,
                text: step.text,
                image: step.image,
            });
        }

        Ok(updated)
    }

    async fn delete(&self, id: DessertId) -> DomainResult<()> {
        let mut desserts = self.desserts.lock().unwrap();
        let before = desserts.len();
        desserts.retain(|d| d.id != id);
        if desserts.len() == before {
            return Err(DomainError::NotFound("dessert not found".into()));
        }
        self.steps.lock().unwrap().retain(|s| s.dessert_id != id);
        self.comments.lock().unwrap().retain(|c| c.dessert_id != id);
        Ok(())
    }
}

#[async_trait]
impl DessertReadRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Dessert>> {
        Ok(self
            .desserts
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.slug == *slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: &DessertListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Dessert>, u64)> {
        // Unknown category slug matches nothing; callers pre-validate.
        let category_id = filter.category_slug.as_ref().map(|slug| {
            self.categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.slug == *slug)
                .map(|c| c.id)
        });

        let mut rows: Vec<Dessert> = self
            .desserts
            .lock()
            .unwrap()
            .iter()
            .filter(|d| !filter.published_only || d.published)
            .filter(|d| filter.author.is_none_or(|author| d.profile_id == author))
            .filter(|d| match category_id {
                None => true,
                Some(None) => false,
                Some(Some(id)) => d.categories.contains(&id),
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.id.0.cmp(&a.id.0));
        let total = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn list_steps(&self, id: DessertId) -> DomainResult<Vec<RecipeStep>> {
        let mut steps: Vec<RecipeStep> = self
            .steps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.dessert_id == id)
            .cloned()
            .collect();
        steps.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(steps)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        if categories
            .iter()
            .any(|c| c.name.as_str() == category.name.as_str())
        {
            return Err(DomainError::validation(
                "name",
                "category name already exists",
            ));
        }

        let stored = Category {
            id: CategoryId::new(self.next_id())?,
            name: category.name,
            slug: category.slug,
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let stored = Comment {
            id: CommentId(self.next_id()),
            text: comment.text,
            profile_id: comment.profile_id,
            dessert_id: comment.dessert_id,
            created_at: comment.created_at,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_for_dessert(&self, dessert_id: DessertId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.dessert_id == dessert_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(comments)
    }
}

/// Deterministic hasher so tests never pay the Argon2 cost.
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
