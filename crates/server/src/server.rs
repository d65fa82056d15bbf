use std::{net::SocketAddr, sync::Arc};

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use gamedex_graphql::GamedexSchema;
use gamedex_store::RecordStore;
use tower_http::cors::CorsLayer;

pub(crate) async fn serve(listen_address: SocketAddr) -> anyhow::Result<()> {
    let store = Arc::new(RecordStore::seeded());
    let schema = gamedex_graphql::build(store);

    let router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/", get(root))
        .layer(CorsLayer::permissive())
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(listen_address).await?;
    tracing::info!("listening on {listen_address}");

    axum::serve(listener, router).await?;

    Ok(())
}

async fn graphql_handler(State(schema): State<GamedexSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn root() -> &'static str {
    "gamedex GraphQL server. POST your operations to /graphql."
}
