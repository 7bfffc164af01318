//! End-to-end tests: lead form -> StoreClient -> Lead Store service

use lead_common::{Challenge, Field};
use lead_form::{
    open_form, Agency, Config, FormError, FormPhase, FormView, LeadForm, LeadStore, StoreClient,
    Toast, ToastKind,
};
use lead_store::{create_router, AppState, MemoryStorage};
use std::sync::Arc;

/// Start a lead store on an ephemeral port and return its base URL
async fn spawn_store() -> String {
    let app = create_router(AppState::new(Box::new(MemoryStorage::new())));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn fill_acme_clinic(form: &mut LeadForm<StoreClient>) {
    form.update_field(Field::BusinessName, "Acme Clinic");
    form.update_field(Field::Name, "Dr. Rao");
    form.update_field(Field::Phone, "9876543210");
    form.update_field(Field::Email, "rao@acme.com");
    form.update_field(Field::City, "Pune");
    form.select_challenge(Some(Challenge::LowInquiryVolume));
}

#[tokio::test]
async fn test_form_submits_to_store() {
    let url = spawn_store().await;
    let config = Config {
        store_url: url.clone(),
        agency: Agency::Healthcare,
    };

    let mut form = open_form(&config).await;
    fill_acme_clinic(&mut form);

    form.submit().await.expect("submit failed");

    assert_eq!(form.phase(), FormPhase::Submitted);
    assert!(matches!(form.view(), FormView::Success(_)));

    let store = StoreClient::new(url);
    assert_eq!(store.get_lead_count().await.unwrap(), 1);

    let leads = store.get_all_leads().await.unwrap();
    assert_eq!(leads[0].business_name, "Acme Clinic");
    assert_eq!(leads[0].name, "Dr. Rao");
    assert_eq!(leads[0].challenge, "Low inquiry volume");
    assert!(leads[0].timestamp > 0);
}

#[tokio::test]
async fn test_client_lists_in_submission_order() {
    let url = spawn_store().await;
    let store = Arc::new(StoreClient::connect(url).await.expect("store not reachable"));

    for business in ["First Bistro", "Second Bistro"] {
        let mut form = LeadForm::new(Agency::Restaurant, Some(store.clone()));
        form.update_field(Field::BusinessName, business);
        form.update_field(Field::Name, "Meera");
        form.update_field(Field::Phone, "+91 98765 43210");
        form.update_field(Field::Email, "meera@bistro.in");
        form.update_field(Field::City, "Mumbai");
        form.submit().await.unwrap();
    }

    let names: Vec<String> = store
        .get_all_leads()
        .await
        .unwrap()
        .into_iter()
        .map(|lead| lead.business_name)
        .collect();
    assert_eq!(names, vec!["First Bistro", "Second Bistro"]);
}

#[tokio::test]
async fn test_unreachable_store_surfaces_connection_error() {
    // Nothing listens on the discard port
    let config = Config {
        store_url: "http://127.0.0.1:9".to_string(),
        agency: Agency::Healthcare,
    };

    let mut form = open_form(&config).await;
    fill_acme_clinic(&mut form);

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::ConnectionUnavailable));
    assert_eq!(
        form.take_notifications(),
        vec![Toast::error("Connection error. Please try again.")]
    );
    assert_eq!(form.draft().business_name, "Acme Clinic");
}

#[tokio::test]
async fn test_store_going_away_fails_submission() {
    let url = spawn_store().await;
    let store = Arc::new(StoreClient::connect(url).await.expect("store not reachable"));

    // A handle that points nowhere stands in for a store that dropped
    let dead = Arc::new(StoreClient::new("http://127.0.0.1:9"));
    let mut form = LeadForm::new(Agency::Healthcare, Some(dead));
    fill_acme_clinic(&mut form);

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::SubmissionFailed(_)));
    assert_eq!(form.phase(), FormPhase::Editing);

    let toasts = form.take_notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);

    assert_eq!(store.get_lead_count().await.unwrap(), 0);
}
