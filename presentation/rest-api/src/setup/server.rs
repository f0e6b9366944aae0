use poem::endpoint::StaticFilesEndpoint;
use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::images::IMAGES_PATH;
use crate::{
    config::app_config::AppConfig, setup::dependency_injection::DependencyContainer, web,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        tokio::fs::create_dir_all(&config.storage.images_dir).await?;

        let app = build_app(&config, container);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Product pages at http://{}/products", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!(
            "Images served from {}",
            config.storage.images_dir.display()
        );
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Composes every route and middleware served by the binary.
pub fn build_app(config: &AppConfig, container: DependencyContainer) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api),
        "Best Store API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", config.server.public_url()));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    let route = Route::new()
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .nest(
            IMAGES_PATH,
            StaticFilesEndpoint::new(&config.storage.images_dir),
        );

    web::products::handlers::mount(route, config.storage.max_upload_bytes)
        .data(container.product_pages)
        .with(Tracing)
}
