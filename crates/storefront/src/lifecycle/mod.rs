//! # System Lifecycle
//!
//! Starts the product collection, wires the layers above it, and shuts everything down.
//!
//! ```text
//! Collection<ProductRecord>  (tokio task)
//!         ↑ mpsc
//! CollectionProductStore ──→ ProductService ──→ StorefrontController
//! ```
//!
//! ## Graceful Shutdown
//!
//! The controller owns the only client of the collection. [`StorefrontSystem::shutdown`]
//! drops it, which closes the request channel; the collection logs `Shutdown` and its task
//! ends. Clones of the service or store kept elsewhere delay that until they are dropped
//! too.

use crate::config::StorefrontConfig;
use crate::controller::StorefrontController;
use crate::error::SystemError;
use crate::service::ProductService;
use crate::session::Session;
use crate::store;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct StorefrontSystem {
    pub controller: StorefrontController,
    handle: JoinHandle<()>,
}

impl StorefrontSystem {
    /// Spawns the product collection and returns a controller acting as `session`.
    ///
    /// Must be called inside a Tokio runtime. The config is validated first. The product
    /// list starts empty; call [`StorefrontController::reload`] to fetch it.
    pub fn start(config: &StorefrontConfig, session: Session) -> Result<Self, SystemError> {
        config.validate()?;
        let (collection, product_store) =
            store::new(&config.collection, config.channel_capacity, config.access);
        let handle = tokio::spawn(collection.run(()));

        let service = ProductService::new(Arc::new(product_store));
        let controller = StorefrontController::new(service, session);

        info!(
            collection = %config.collection,
            access = ?config.access,
            user = controller.session_label(),
            "Storefront started"
        );
        Ok(Self { controller, handle })
    }

    /// Drops the controller and waits for the collection task to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront");
        drop(self.controller);
        self.handle.await?;
        info!("Storefront stopped");
        Ok(())
    }
}
