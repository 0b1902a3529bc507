use storefront_api::db::{create_orm_conn, create_pool, run_migrations};

// Only DATABASE_URL is needed here, so the full AppConfig is not loaded.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")?;
    let pool = create_pool(&database_url).await?;
    run_migrations(&create_orm_conn(&pool)).await?;
    println!("Migrations applied");
    Ok(())
}
