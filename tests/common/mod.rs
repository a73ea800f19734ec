#![allow(dead_code)]

use payment_processor::acquirer::{AcquirerEndpoint, Cielo, Rede, Stone};
use payment_processor::application::dispatch::AcquirerService;
use payment_processor::application::process_payment::ProcessPaymentInput;
use payment_processor::domain::card::Card;
use payment_processor::domain::purchase::Purchase;
use payment_processor::domain::store::Store;
use payment_processor::domain::transaction::{AcquirerSelector, Transaction};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const PAYMENT_ID: &str = "5f8d1c9e-2b7a-4c1e-9a0d-3e6f7b8c9d10";

/// Stands in for an acquirer that refuses purchases above `limit`.
pub struct LimitedAcquirer {
    pub limit: u32,
}

impl Respond for LimitedAcquirer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let value = serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| body["purchase_value"].as_f64());

        match value {
            None => ResponseTemplate::new(400)
                .set_body_json(json!({"code": 400, "message": "invalid request"})),
            Some(value) if value > f64::from(self.limit) => {
                ResponseTemplate::new(422).set_body_json(json!({
                    "code": 422,
                    "message": format!("the maximum purchase value should not exceed {}", self.limit),
                }))
            }
            Some(_) => {
                ResponseTemplate::new(200).set_body_json(json!({"code": 200, "message": PAYMENT_ID}))
            }
        }
    }
}

/// Serves `/stone`, `/cielo` and `/rede` with limits 100, 500 and 1000.
/// Each route only answers requests carrying `<brand>-key` in `Api-Key`.
pub async fn acquirer_server() -> MockServer {
    let server = MockServer::start().await;
    for (brand, limit) in [("stone", 100), ("cielo", 500), ("rede", 1000)] {
        Mock::given(method("POST"))
            .and(path(format!("/{brand}")))
            .and(header("Api-Key", format!("{brand}-key").as_str()))
            .respond_with(LimitedAcquirer { limit })
            .mount(&server)
            .await;
    }
    server
}

pub fn endpoint(server: &MockServer, brand: &str) -> AcquirerEndpoint {
    AcquirerEndpoint::new(
        Url::parse(&format!("{}/{brand}", server.uri())).unwrap(),
        format!("{brand}-key"),
    )
}

pub fn acquirer_service(server: &MockServer) -> AcquirerService {
    AcquirerService::builder()
        .acquirer(Stone::new(endpoint(server, "stone")))
        .acquirer(Cielo::new(endpoint(server, "cielo")))
        .acquirer(Rede::new(endpoint(server, "rede")))
        .build()
}

pub fn card() -> Card {
    Card::new("T1", "Holder", "01/2030", "Brand")
}

pub fn transaction(acquirer: &str, value: Decimal) -> Transaction {
    Transaction::new(
        card(),
        Purchase::new(value, vec!["Item 1".into(), "Item 2".into()], 2),
        Store::new("S1", "A1", "C1"),
        AcquirerSelector::new(acquirer),
    )
}

pub fn input(token: &str, acquirer: &str, value: Decimal) -> ProcessPaymentInput {
    ProcessPaymentInput {
        card_token: token.to_string(),
        purchase_value: value,
        purchase_items: vec!["Item 1".into(), "Item 2".into()],
        purchase_installments: 2,
        store_identification: "S1".into(),
        store_address: "A1".into(),
        store_cep: "C1".into(),
        acquirer_name: acquirer.to_string(),
    }
}
