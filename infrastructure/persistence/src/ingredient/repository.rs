use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;
use crate::db::map_sqlx_error;

const SELECT_INGREDIENT: &str =
    "SELECT id, name, category, unit, created_at, updated_at FROM ingredients";

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            "{SELECT_INGREDIENT} ORDER BY category, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Listing ingredients", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(&format!(
            "{SELECT_INGREDIENT} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Loading ingredient", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, ingredient: &Ingredient) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO ingredients (id, name, category, unit, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(ingredient.id)
        .bind(&ingredient.name)
        .bind(&ingredient.category)
        .bind(&ingredient.unit)
        .bind(ingredient.created_at)
        .bind(ingredient.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Saving ingredient", e))?;

        Ok(())
    }
}
