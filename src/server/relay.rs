use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use warp::Filter;

use crate::config::Config;
use crate::handlers::RelayContext;
use crate::http::HttpBackend;
use crate::logging::LogConfig;
use crate::server::handle_rejection;
use crate::server::routes::create_routes;

pub struct RelayServer {
    pub backend: HttpBackend,
    pub config: Config,
}

impl RelayServer {
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let backend = HttpBackend::new(
            config.upstream_url.clone(),
            Duration::from_secs(config.request_timeout_seconds),
        )?;

        Ok(Self { backend, config })
    }

    pub fn context(&self) -> RelayContext<'_, HttpBackend> {
        RelayContext {
            backend: &self.backend,
            api_key: self.config.api_key(),
            model: &self.config.model,
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr = self.config.listen.parse()?;
        let server = Arc::new(self);

        let routes = create_routes(server.clone()).recover(handle_rejection);

        let cors = warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["Content-Type", "Authorization", "Accept", "Origin"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]);

        let routes_with_cors = routes.with(cors);

        if LogConfig::get().debug_enabled {
            log::info!("starting note relay on {} (debug mode)", addr);
        } else {
            log::info!("starting note relay on {}", addr);
        }
        log::info!(
            "upstream: {} (model: {})",
            server.backend.url(),
            server.config.model
        );
        if server.config.api_key().is_none() {
            log::warn!("OPENAI_API_KEY is not set; note requests will fail with 500");
        }

        warp::serve(routes_with_cors).run(addr).await;

        Ok(())
    }
}
