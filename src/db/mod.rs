use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::NewProduct;

/// Open the pool used for the startup bootstrap. The pool is held for the
/// process lifetime; the service issues no further queries after startup.
pub async fn connect(database_url: &str) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Idempotent: safe to run on every startup.
pub async fn ensure_product_table(pool: &PgPool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            price_cents BIGINT NOT NULL,
            available BOOLEAN,
            created TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Parameterized insert returning the server-generated primary key.
pub async fn insert_product(pool: &PgPool, product: &NewProduct) -> AppResult<i32> {
    let pk: i32 = sqlx::query_scalar(
        "INSERT INTO product (name, price_cents, available)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&product.name)
    .bind(product.price_cents)
    .bind(product.available)
    .fetch_one(pool)
    .await?;

    Ok(pk)
}
