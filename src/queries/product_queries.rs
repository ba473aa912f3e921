use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductChanges, ProductFilter, SortBy, SortOrder},
};

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock_quantity, category, is_active";

pub async fn insert_product(pool: &PgPool, product: &NewProduct) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO products (name, description, price, stock_quantity, category, is_active)
         VALUES ($1, $2, $3, $4, $5, TRUE)
         RETURNING id",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock_quantity)
    .bind(&product.category)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn find_active_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Escapes LIKE wildcards so the term matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Active-only, then category, then search, then sort, then the page window.
pub fn build_list_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE"
    ));

    if let Some(ref category) = filter.category {
        query.push(" AND category = ");
        query.push_bind(category.clone());
    }

    if let Some(ref term) = filter.search {
        let pattern = like_pattern(term);
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    match filter.sort_by {
        Some(SortBy::Price(SortOrder::Asc)) => {
            query.push(" ORDER BY price ASC, id ASC");
        }
        Some(SortBy::Price(SortOrder::Desc)) => {
            query.push(" ORDER BY price DESC, id ASC");
        }
        None => {
            query.push(" ORDER BY id ASC");
        }
    }

    query.push(" LIMIT ");
    query.push_bind(filter.limit);
    query.push(" OFFSET ");
    query.push_bind(filter.offset());

    query
}

pub async fn list_products(pool: &PgPool, filter: &ProductFilter) -> Result<Vec<Product>> {
    let mut query = build_list_query(filter);
    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

/// Writes the supplied fields of an active product inside a transaction.
/// Returns `None` when no active product has this id.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    changes: &ProductChanges,
) -> Result<Option<Product>> {
    let mut tx = pool.begin().await?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products
         SET
             name = COALESCE($1, name),
             description = COALESCE($2, description),
             price = COALESCE($3, price),
             stock_quantity = COALESCE($4, stock_quantity),
             category = COALESCE($5, category)
         WHERE id = $6 AND is_active = TRUE
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(changes.price)
    .bind(changes.stock_quantity)
    .bind(&changes.category)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(product)
}

pub async fn soft_delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let result =
        sqlx::query("UPDATE products SET is_active = FALSE WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .execute(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
