//! # Storefront demo
//!
//! Scripted walkthrough of the catalogue screen against an in-process collection:
//! 1. Load [`StorefrontConfig`] and set up tracing.
//! 2. Start a [`StorefrontSystem`] for a signed-in user.
//! 3. Submit an invalid form, then a valid one.
//! 4. Select, confirm and delete the product.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p storefront
//! ```

use document_store::telemetry::setup_tracing;
use storefront::config::StorefrontConfig;
use storefront::controller::{
    AddProductForm, DeleteDialogState, DeleteIntent, DeleteReducer, FormIntent, FormReducer,
    Reducer,
};
use storefront::lifecycle::StorefrontSystem;
use storefront::session::Session;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    let session = Session::signed_in("uid_demo", "demo@example.com");
    let system = StorefrontSystem::start(&config, session).map_err(|e| e.to_string())?;
    let controller = &system.controller;
    let mut notices = controller.notices();

    info!(user = controller.session_label(), "Loading catalogue");
    controller.reload().await;
    info!(count = controller.products().len(), "Catalogue loaded");

    let span = tracing::info_span!("add_product");
    async {
        let form = [
            FormIntent::EditName("Pen".into()),
            FormIntent::EditPrice("-1".into()),
        ]
        .into_iter()
        .fold(AddProductForm::new(), FormReducer::reduce);
        let form = controller.submit_form(form).await;
        warn!(error = ?form.error, "Form rejected");

        let form = [
            FormIntent::EditDescription("Blue ink".into()),
            FormIntent::EditPrice("1.50".into()),
        ]
        .into_iter()
        .fold(form, FormReducer::reduce);
        let form = controller.submit_form(form).await;
        info!(outcome = ?form.last_outcome, "Form submitted");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("delete_product");
    async {
        let Some(product) = controller.products().into_iter().next() else {
            warn!("Nothing to delete");
            return;
        };
        let dialog = DeleteReducer::reduce(DeleteDialogState::Idle, DeleteIntent::Select(product));
        if let Some(prompt) = dialog.prompt() {
            info!(%prompt, "Asking for confirmation");
        }
        controller.confirm_delete(dialog).await;
    }
    .instrument(span)
    .await;

    while let Ok(notice) = notices.try_recv() {
        info!(%notice, "Notice");
    }
    info!(count = controller.products().len(), "Catalogue after walkthrough");

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Demo completed");
    Ok(())
}
