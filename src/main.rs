use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grubdash=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;

    let seed = match &config.seed_file {
        Some(path) => {
            let seed = SeedData::from_yaml_file(path)?;
            tracing::info!(
                path = %path.display(),
                dishes = seed.dishes.len(),
                orders = seed.orders.len(),
                "loaded seed data"
            );
            seed
        }
        None => SeedData::default(),
    };
    let (dishes, orders) = seed.into_stores()?;

    ServerBuilder::new()
        .with_config(config)
        .with_dish_repository(dishes)
        .with_order_repository(orders)
        .serve()
        .await
}
