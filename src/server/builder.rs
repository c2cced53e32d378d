//! ServerBuilder for fluent API to build the grubdash HTTP server

use super::entity_registry::EntityRegistry;
use super::handlers::route_not_found;
use crate::config::AppConfig;
use crate::core::error::Fault;
use crate::core::id::{IdGenerator, RandomIdGenerator};
use crate::core::service::{EntityService, Repository};
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor};
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the grubdash router
///
/// Every collaborator has a default: empty in-memory stores, random ids and
/// the default [`AppConfig`].
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::load()?)
///     .with_dish_repository(dishes)
///     .with_order_repository(orders)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    dishes: Option<Arc<dyn Repository<Dish>>>,
    orders: Option<Arc<dyn Repository<Order>>>,
    ids: Arc<dyn IdGenerator>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            dishes: None,
            orders: None,
            ids: Arc::new(RandomIdGenerator),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Storage for the dish collection
    pub fn with_dish_repository(mut self, repository: impl Repository<Dish> + 'static) -> Self {
        self.dishes = Some(Arc::new(repository));
        self
    }

    /// Storage for the order collection
    pub fn with_order_repository(mut self, repository: impl Repository<Order> + 'static) -> Self {
        self.orders = Some(Arc::new(repository));
        self
    }

    /// Id source shared by both collections
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Add routes outside the dish and order resources
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Unknown paths answer 404 and panics inside handlers answer the generic
    /// 500 envelope.
    pub fn build(self) -> Result<Router> {
        let dishes: Arc<dyn Repository<Dish>> = match self.dishes {
            Some(repository) => repository,
            None => Arc::new(InMemoryStore::<Dish>::new()),
        };
        let orders: Arc<dyn Repository<Order>> = match self.orders {
            Some(repository) => repository,
            None => Arc::new(InMemoryStore::<Order>::new()),
        };

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(EntityService::new(
            dishes,
            self.ids.clone(),
        ))));
        registry.register(Box::new(OrderDescriptor::new(EntityService::new(
            orders, self.ids,
        ))));

        let mut app = health_routes().merge(registry.build_routes());
        for custom in self.custom_routes {
            app = app.merge(custom);
        }

        let app = app.fallback(route_not_found).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        );

        if self.config.server.cors {
            Ok(app.layer(CorsLayer::permissive()))
        } else {
            Ok(app)
        }
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured `host:port` and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    Fault::Internal(detail).into_response()
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
