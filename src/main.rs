use directory_search::config::{
    DEFAULT_BIND_ADDR, DEFAULT_RECORDS_PATH, DEFAULT_RESULT_LIMIT, ServerConfig,
};
use directory_search::directory::loader;
use directory_search::directory::store::SnapshotStore;
use directory_search::search::handlers;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND_ADDR.parse()?;
    let mut records_path = PathBuf::from(DEFAULT_RECORDS_PATH);
    let mut result_limit = DEFAULT_RESULT_LIMIT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--records" => {
                records_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--limit" => {
                result_limit = args[i + 1].parse()?;
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--records <path>] [--limit <n>]",
                    args[0]
                );
                eprintln!("Example: {} --bind 127.0.0.1:8080 --records data/people.sample.json", args[0]);
                std::process::exit(1);
            }
        }
    }

    // 1. Build the first snapshot. The listener only binds after this
    //    succeeds, so the service never answers before the index exists.
    tracing::info!("Loading directory from {}", records_path.display());
    let records = loader::load_records(&records_path)?;
    let store = Arc::new(SnapshotStore::new(records)?);
    let snapshot = store.current();
    tracing::info!(
        "Indexed {} records (snapshot v{})",
        snapshot.len(),
        snapshot.version()
    );

    // 2. HTTP router:
    let config = Arc::new(ServerConfig {
        records_path,
        result_limit,
    });
    let app = handlers::router(store, config);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
