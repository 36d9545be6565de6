//! # View State Controller
//!
//! Holds what the storefront screen shows: the product list, the signed-in session and a
//! stream of one-shot [`Notice`]s. Views subscribe to the list through a
//! [`watch`] channel and get the whole list again after every reload.
//!
//! ## Flow
//!
//! ```text
//! view ──add/remove/reload──→ StorefrontController ──→ ProductService ──→ ProductStore
//!   ↑                                 │
//!   └──── watch<Vec<Product>> ────────┤
//!   └──── broadcast<Notice> ──────────┘
//! ```
//!
//! The list is replaced only by [`StorefrontController::reload`]. A successful add or
//! remove reloads once; a failed one leaves the list as it was.
//!
//! Screen-local state lives in pure reducers:
//! - [`form`] - the add-product form
//! - [`delete`] - the delete confirmation dialog

pub mod delete;
pub mod form;
pub mod mvi;

pub use delete::*;
pub use form::*;
pub use mvi::*;

use crate::error::StorefrontError;
use crate::model::{Product, ProductDraft};
use crate::service::ProductService;
use crate::session::Session;
use std::fmt;
use tokio::sync::{broadcast, watch};
use tracing::{info, instrument, warn};

pub const SAVE_FAILED: &str = "could not save product";
pub const DELETE_FAILED: &str = "could not delete product";
pub const FETCH_FAILED: &str = "failed to fetch products";

const NOTICE_CAPACITY: usize = 16;

/// Short messages for the user, shown once and then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ProductSaved,
    ProductDeleted,
    DeleteFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ProductSaved => f.write_str("Product saved"),
            Notice::ProductDeleted => f.write_str("Product deleted"),
            Notice::DeleteFailed(message) => f.write_str(message),
        }
    }
}

pub struct StorefrontController {
    service: ProductService,
    session: Session,
    products: watch::Sender<Vec<Product>>,
    notices: broadcast::Sender<Notice>,
}

impl StorefrontController {
    /// Starts with an empty list. Call [`reload`](Self::reload) to fetch the catalogue.
    pub fn new(service: ProductService, session: Session) -> Self {
        let (products, _) = watch::channel(Vec::new());
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            service,
            session,
            products,
            notices,
        }
    }

    /// Receiver that observes every replacement of the product list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    /// The list as of the last reload.
    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Notices sent after the call; earlier ones are not replayed.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_label(&self) -> &str {
        self.session.label()
    }

    /// Drops the credentials. Later store calls go out anonymously.
    pub fn sign_out(&mut self) {
        info!(user = self.session.label(), "Signing out");
        self.session.sign_out();
    }

    /// Replaces the held list with a fresh listing, or with an empty list if listing fails.
    #[instrument(skip(self), fields(user = self.session.label()))]
    pub async fn reload(&self) {
        let products = match self.service.list_products(&self.session).await {
            Ok(products) => products,
            Err(e) => {
                let message = e.display_message(FETCH_FAILED);
                warn!(error = %message, "Reload failed, clearing list");
                Vec::new()
            }
        };
        self.products.send_replace(products);
    }

    /// Validates the raw input and creates the product.
    ///
    /// Invalid input is rejected before the store is contacted. On success the list is
    /// reloaded once and the new id returned.
    pub async fn add(
        &self,
        name: &str,
        description: &str,
        price_text: &str,
    ) -> Result<String, StorefrontError> {
        let draft = ProductDraft::parse(name, description, price_text)?;
        self.create(draft).await
    }

    /// Deletes the product. On success the list is reloaded; on failure it is left alone.
    #[instrument(skip(self), fields(user = self.session.label()))]
    pub async fn remove(&self, id: &str) -> Result<(), StorefrontError> {
        self.service.delete_product(&self.session, id).await?;
        self.reload().await;
        Ok(())
    }

    /// Runs a submit of the add-product form through validation and the store.
    ///
    /// A form that is already busy is returned unchanged.
    pub async fn submit_form(&self, form: AddProductForm) -> AddProductForm {
        if form.is_busy() {
            return form;
        }
        let form = FormReducer::reduce(form, FormIntent::Submit);

        let draft = match ProductDraft::parse(&form.name, &form.description, &form.price) {
            Ok(draft) => draft,
            Err(error) => return FormReducer::reduce(form, FormIntent::Rejected(error)),
        };

        let form = FormReducer::reduce(form, FormIntent::Validated);
        match self.create(draft).await {
            Ok(id) => {
                self.notify(Notice::ProductSaved);
                FormReducer::reduce(form, FormIntent::Saved { id })
            }
            Err(e) => FormReducer::reduce(
                form,
                FormIntent::Failed {
                    message: e.display_message(SAVE_FAILED),
                },
            ),
        }
    }

    /// Deletes the pending target, if any, and closes the dialog.
    pub async fn confirm_delete(&self, state: DeleteDialogState) -> DeleteDialogState {
        let Some(id) = state.target_id().map(str::to_owned) else {
            return DeleteReducer::reduce(state, DeleteIntent::Confirm);
        };
        let next = DeleteReducer::reduce(state, DeleteIntent::Confirm);

        match self.remove(&id).await {
            Ok(()) => self.notify(Notice::ProductDeleted),
            Err(e) => self.notify(Notice::DeleteFailed(e.display_message(DELETE_FAILED))),
        }
        next
    }

    async fn create(&self, draft: ProductDraft) -> Result<String, StorefrontError> {
        let id = self.service.create_product(&self.session, draft).await?;
        self.reload().await;
        Ok(id)
    }

    fn notify(&self, notice: Notice) {
        // No receivers is fine; nobody is looking at the screen.
        let _ = self.notices.send(notice);
    }
}
