//! Postgres-backed `CatalogReader`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use foodieai_common::{FoodieError, RegisteredRestaurant, StoredDeal, StoredMenuItem};

use crate::traits::CatalogReader;

/// Cap on menu items returned from a keyword/budget search.
pub const MENU_MATCH_LIMIT: i64 = 15;

#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn restaurant_from_row(
    name: Option<String>,
    cuisine: Option<String>,
    location: Option<String>,
) -> Option<RegisteredRestaurant> {
    Some(RegisteredRestaurant {
        business_name: name?,
        cuisine: cuisine?,
        location: location?,
    })
}

#[async_trait]
impl CatalogReader for PgCatalog {
    async fn verified_restaurants(&self) -> Result<Vec<RegisteredRestaurant>> {
        let rows = sqlx::query(
            "SELECT business_name, cuisine, location
             FROM restaurants
             WHERE is_verified = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FoodieError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| RegisteredRestaurant {
                business_name: row.get("business_name"),
                cuisine: row.get("cuisine"),
                location: row.get("location"),
            })
            .collect())
    }

    async fn active_deals(&self) -> Result<Vec<StoredDeal>> {
        let rows = sqlx::query(
            "SELECT d.title, d.deal_price, d.original_price, d.description,
                    r.business_name, r.cuisine, r.location
             FROM deals d
             LEFT JOIN restaurants r ON r.id = d.restaurant_id AND r.is_verified = TRUE
             WHERE d.is_active = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FoodieError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDeal {
                title: row.get("title"),
                deal_price: row.get("deal_price"),
                original_price: row.get("original_price"),
                description: row.get("description"),
                restaurant: restaurant_from_row(
                    row.get("business_name"),
                    row.get("cuisine"),
                    row.get("location"),
                ),
            })
            .collect())
    }

    async fn search_menu_items(
        &self,
        keywords: &[String],
        budget: Option<i64>,
    ) -> Result<Vec<StoredMenuItem>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT m.id, m.name, m.description, m.price, m.category,
                    r.business_name, r.cuisine, r.location
             FROM menu_items m
             LEFT JOIN restaurants r ON r.id = m.restaurant_id AND r.is_verified = TRUE
             WHERE m.is_available = TRUE",
        );

        // Keyword clauses and the budget clause are ORed together at the
        // top level: an item matching on price alone still qualifies.
        if !keywords.is_empty() || budget.is_some() {
            qb.push(" AND (");
            let mut first = true;
            for kw in keywords {
                if !first {
                    qb.push(" OR ");
                }
                first = false;
                let pattern = format!("%{kw}%");
                qb.push("(m.name ILIKE ");
                qb.push_bind(pattern.clone());
                qb.push(" OR m.description ILIKE ");
                qb.push_bind(pattern.clone());
                qb.push(" OR m.category ILIKE ");
                qb.push_bind(pattern);
                qb.push(")");
            }
            if let Some(b) = budget {
                if !first {
                    qb.push(" OR ");
                }
                qb.push("m.price <= ");
                qb.push_bind(b);
            }
            qb.push(")");
        }

        qb.push(" LIMIT ");
        qb.push_bind(MENU_MATCH_LIMIT);

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| FoodieError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| StoredMenuItem {
                id: row.get::<Uuid, _>("id"),
                name: row.get("name"),
                description: row.get("description"),
                price: row.get("price"),
                category: row.get("category"),
                restaurant: restaurant_from_row(
                    row.get("business_name"),
                    row.get("cuisine"),
                    row.get("location"),
                ),
            })
            .collect())
    }
}
