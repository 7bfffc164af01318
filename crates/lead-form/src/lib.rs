//! Lead Capture Form
//!
//! Form state for the healthcare and restaurant landing pages, and the
//! client used to hand captured leads to the Lead Store service.
//!
//! A page session obtains one store handle with [`open_form`] and every
//! submission from that form goes through it.

pub mod agency;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod store;

use std::sync::Arc;

pub use agency::Agency;
pub use client::StoreClient;
pub use config::Config;
pub use error::{FormError, Result};
pub use form::{FormPhase, FormView, LeadDraft, LeadForm, PendingSubmission};
pub use notify::{Toast, ToastKind};
pub use store::LeadStore;

/// Connect to the lead store once and build the page's form around that handle.
///
/// When the store cannot be reached the form is still usable; submitting it
/// raises the connection error toast.
pub async fn open_form(config: &Config) -> LeadForm<StoreClient> {
    let store = StoreClient::connect(config.store_url.as_str()).await.map(Arc::new);
    LeadForm::new(config.agency, store)
}
