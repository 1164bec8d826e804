//! Bootstrap binary: initializes the database schema and logs a stock summary.

use atlas_ledger::config::{database, settings};
use atlas_ledger::core::report;
use atlas_ledger::errors::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load deployment settings (referential policy etc.)
    let settings = settings::load_default_settings()?;
    info!(policy = ?settings.referential_policy, "loaded settings");

    // 4. Connect and make sure the schema exists
    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!(url = %database::get_database_url(), "database ready");

    // 5. Log the current stock position
    let stock = report::stock_report(&db).await?;
    for line in &stock {
        info!(
            product = %line.product.name,
            purchased = line.purchased,
            sold = line.sold,
            on_hand = line.on_hand,
            "stock"
        );
    }
    info!(products = stock.len(), "stock summary complete");

    Ok(())
}
