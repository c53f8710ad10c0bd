use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::Category;

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        let category = self.find_by_id(id).await?;
        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    /// Raw lookup used by the workflow read-through cache
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Create a new category
    pub async fn create(&self, data: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let query = format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&data.name)
            .bind(&data.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }
}
