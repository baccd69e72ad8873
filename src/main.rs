use anyhow::Context;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderlust::config::Config;
use wanderlust::db::{init_db, reviews, Database};
use wanderlust::router::respond;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wanderlust=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    // 1️⃣ Database handle + schema
    let db = Database::new(config.db_path.clone());
    init_db(&db, &config.schema_path).context("database initialization failed")?;

    // 2️⃣ Finish any review deletes a previous run could not complete
    db.with_conn(|conn| reviews::sweep_review_cleanups(conn))
        .context("review cleanup sweep failed")?;

    // 3️⃣ Serve
    tracing::info!(addr = %config.addr, workers = config.max_workers, "server is listening");

    Server::bind(config.addr)
        .max_workers(config.max_workers)
        .serve(move |req: astra::Request, _info| respond(req, &db))
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
