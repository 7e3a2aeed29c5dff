//! Category and tag management service.

use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory, NewTag, Tag};
use crate::domain::repositories::{CategoryRepository, TagRepository};
use crate::error::AppError;
use crate::utils::slug::slugify;
use serde_json::json;

/// Service for creating and updating categories and tags.
///
/// Slugs are derived from names; a taken slug is a conflict rather than
/// being silently suffixed, since taxonomy names are expected to be unique.
pub struct TaxonomyService<C: CategoryRepository, T: TagRepository> {
    category_repository: Arc<C>,
    tag_repository: Arc<T>,
}

impl<C: CategoryRepository, T: TagRepository> TaxonomyService<C, T> {
    pub fn new(category_repository: Arc<C>, tag_repository: Arc<T>) -> Self {
        Self {
            category_repository,
            tag_repository,
        }
    }

    /// Creates a category named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name produces no valid slug,
    /// [`AppError::Conflict`] if a category with the same slug exists.
    pub async fn create_category(&self, name: &str) -> Result<Category, AppError> {
        let slug = derive_slug(name)?;

        if self.category_repository.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Category already exists",
                json!({ "slug": slug }),
            ));
        }

        self.category_repository
            .create(NewCategory {
                name: name.to_string(),
                slug,
            })
            .await
    }

    /// Renames the category identified by `slug`. The slug stays stable.
    pub async fn update_category(&self, slug: &str, name: &str) -> Result<Category, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::bad_request(
                "Category name must not be empty",
                json!({ "name": name }),
            ));
        }

        self.category_repository.update_name(slug, name).await
    }

    /// Retrieves a category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category matches.
    pub async fn get_category(&self, slug: &str) -> Result<Category, AppError> {
        self.category_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "slug": slug })))
    }

    /// Creates a tag named `name`.
    ///
    /// # Errors
    ///
    /// Same cases as [`Self::create_category`].
    pub async fn create_tag(&self, name: &str) -> Result<Tag, AppError> {
        let slug = derive_slug(name)?;

        if self.tag_repository.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Tag already exists",
                json!({ "slug": slug }),
            ));
        }

        self.tag_repository
            .create(NewTag {
                name: name.to_string(),
                slug,
            })
            .await
    }

    /// Retrieves a tag by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tag matches.
    pub async fn get_tag(&self, slug: &str) -> Result<Tag, AppError> {
        self.tag_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "slug": slug })))
    }

    /// All categories, for the post form's category selector.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repository.list().await
    }

    /// All tags, for the post form's tag selector.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tag_repository.list().await
    }
}

fn derive_slug(name: &str) -> Result<String, AppError> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(AppError::bad_request(
            "Name does not produce a valid slug",
            json!({ "name": name }),
        ));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCategoryRepository, MockTagRepository};
    use chrono::Utc;

    fn test_category(id: i64, name: &str, slug: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_tag(id: i64, name: &str, slug: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_category_derives_slug() {
        let mut mock_categories = MockCategoryRepository::new();
        let mock_tags = MockTagRepository::new();

        mock_categories
            .expect_find_by_slug()
            .withf(|slug| slug == "web-development")
            .times(1)
            .returning(|_| Ok(None));
        mock_categories
            .expect_create()
            .withf(|nc| nc.slug == "web-development" && nc.name == "Web Development")
            .times(1)
            .returning(|nc| Ok(test_category(1, &nc.name, &nc.slug)));

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let category = service.create_category("Web Development").await.unwrap();

        assert_eq!(category.slug, "web-development");
    }

    #[tokio::test]
    async fn test_create_category_conflict() {
        let mut mock_categories = MockCategoryRepository::new();
        let mock_tags = MockTagRepository::new();

        mock_categories
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(test_category(1, "Rust", "rust"))));

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let result = service.create_category("Rust").await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_tag_invalid_name() {
        let mock_categories = MockCategoryRepository::new();
        let mock_tags = MockTagRepository::new();

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let result = service.create_tag("***").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_category_rejects_empty_name() {
        let mock_categories = MockCategoryRepository::new();
        let mock_tags = MockTagRepository::new();

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let result = service.update_category("rust", "   ").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_tag_not_found() {
        let mock_categories = MockCategoryRepository::new();
        let mut mock_tags = MockTagRepository::new();

        mock_tags
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let result = service.get_tag("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_tag_success() {
        let mock_categories = MockCategoryRepository::new();
        let mut mock_tags = MockTagRepository::new();

        mock_tags
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));
        mock_tags
            .expect_create()
            .withf(|nt| nt.slug == "async-rust")
            .times(1)
            .returning(|nt| Ok(test_tag(1, &nt.name, &nt.slug)));

        let service = TaxonomyService::new(Arc::new(mock_categories), Arc::new(mock_tags));
        let tag = service.create_tag("Async Rust").await.unwrap();

        assert_eq!(tag.slug, "async-rust");
    }
}
