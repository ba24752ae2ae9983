//! Axum surface for the gateway: GraphiQL on GET, execution on POST.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::schema::GatewaySchema;

pub fn app(schema: GatewaySchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
}

pub async fn run(listener: TcpListener, schema: GatewaySchema) -> Result<(), std::io::Error> {
    axum::serve(listener, app(schema)).await
}

async fn graphql_handler(
    State(schema): State<GatewaySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
