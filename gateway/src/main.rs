use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_gateway::client::HttpRestClient;
use todo_gateway::config::Config;
use todo_gateway::schema::build_schema;
use todo_gateway::server;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let client = Arc::new(HttpRestClient::new(&config.todoservice_url));
    let schema = build_schema(client);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, todoservice = %config.todoservice_url, "gateway listening");
    server::run(listener, schema).await
}
