//! End-to-end tests for the expense HTTP surface over the in-memory store.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use spendwise_backend::Trace;
use spendwise_backend::domain::ExpenseService;
use spendwise_backend::inbound::http::expenses::{self, ExpenseBody};
use spendwise_backend::inbound::http::state::HttpState;
use spendwise_backend::outbound::memory::InMemoryExpenseRepository;

fn state_over(repository: InMemoryExpenseRepository) -> HttpState {
    let service = Arc::new(ExpenseService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ));
    HttpState::new(service.clone(), service)
}

fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(expenses::configure)
}

#[fixture]
fn seeded() -> HttpState {
    state_over(InMemoryExpenseRepository::seeded().expect("sample expenses are valid"))
}

#[fixture]
fn coffee() -> Value {
    json!({
        "title": "Coffee",
        "amount": 5,
        "category": "food",
        "date": "2026-03-01",
        "description": "",
        "payment_method": "cash"
    })
}

#[rstest]
#[actix_web::test]
async fn created_expense_is_listed_and_fetchable(seeded: HttpState, coffee: Value) {
    let app = test::init_service(app(seeded)).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/expenses")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: ExpenseBody = test::read_body_json(created).await;
    assert_eq!(created.id, 6);
    assert_eq!(created.category, "Food");
    assert_eq!(created.payment_method, "Cash");

    let fetched: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses/6").to_request(),
    )
    .await;
    assert_eq!(fetched, created);

    let listed: Vec<ExpenseBody> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses").to_request(),
    )
    .await;
    assert_eq!(listed.len(), 6);
    assert_eq!(listed.last(), Some(&created));
}

#[rstest]
#[actix_web::test]
async fn identifiers_keep_growing_across_creates(seeded: HttpState, coffee: Value) {
    let app = test::init_service(app(seeded)).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let body: ExpenseBody = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/expenses")
                .set_json(&coffee)
                .to_request(),
        )
        .await;
        ids.push(body.id);
    }

    assert_eq!(ids, [6, 7, 8]);
}

#[rstest]
#[actix_web::test]
async fn empty_store_assigns_first_identifier(coffee: Value) {
    let app = test::init_service(app(state_over(InMemoryExpenseRepository::new()))).await;

    let listed: Vec<ExpenseBody> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses").to_request(),
    )
    .await;
    assert!(listed.is_empty());

    let created: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/expenses")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(created.id, 1);
}

#[rstest]
#[actix_web::test]
async fn rejected_create_leaves_store_untouched(seeded: HttpState, mut coffee: Value) {
    let app = test::init_service(app(seeded)).await;
    coffee["payment_method"] = json!("Cheque");

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/expenses")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let trace_header = res
        .headers()
        .get("trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "validation_failed");
    assert_eq!(body["details"]["field"], "payment_method");
    assert_eq!(body["trace_id"].as_str(), trace_header.as_deref());

    let listed: Vec<ExpenseBody> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses").to_request(),
    )
    .await;
    assert_eq!(listed.len(), 5);
}

#[rstest]
#[actix_web::test]
async fn update_replaces_every_field_in_place(seeded: HttpState) {
    let app = test::init_service(app(seeded)).await;
    let replacement = json!({
        "title": "Taxi Home",
        "amount": 18,
        "category": "TRANSPORT",
        "expense_date": "2026-02-06",
        "description": "Late train",
        "payment_method": "card"
    });

    let updated: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri("/expenses?id=3")
            .set_json(&replacement)
            .to_request(),
    )
    .await;
    let fetched: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses/3").to_request(),
    )
    .await;

    assert_eq!(
        fetched,
        ExpenseBody {
            id: 3,
            title: "Taxi Home".to_owned(),
            amount: 18,
            category: "Transport".to_owned(),
            expense_date: "2026-02-06".to_owned(),
            description: "Late train".to_owned(),
            payment_method: "Card".to_owned(),
        }
    );
    assert_eq!(updated, fetched);
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_expense_is_not_found(seeded: HttpState, coffee: Value) {
    let app = test::init_service(app(seeded)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/expenses/42")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let listed: Vec<ExpenseBody> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses").to_request(),
    )
    .await;
    assert!(listed.iter().all(|expense| expense.id != 42));
}

#[rstest]
#[actix_web::test]
async fn summaries_follow_new_records(seeded: HttpState, coffee: Value) {
    let app = test::init_service(app(seeded)).await;
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/expenses")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let categories: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/expenses/summary/category")
            .to_request(),
    )
    .await;
    let months: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/expenses/summary/monthly")
            .to_request(),
    )
    .await;

    let food = categories
        .iter()
        .find(|entry| entry["category"] == "Food")
        .expect("food summary");
    assert_eq!(food["total"], 115);
    assert_eq!(food["count"], 3);
    assert_eq!(
        months,
        vec![
            json!({ "month": "2026-02", "total": 295, "count": 5 }),
            json!({ "month": "2026-03", "total": 5, "count": 1 }),
        ]
    );
}

#[rstest]
#[case::query_string("/expenses?id=1")]
#[case::path_segment("/expenses/1")]
#[actix_web::test]
async fn update_without_description_keeps_stored_record(
    seeded: HttpState,
    #[case] uri: &str,
) {
    let app = test::init_service(app(seeded)).await;
    let before: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses/1").to_request(),
    )
    .await;
    let sparse = json!({
        "title": "Grocery Shopping",
        "amount": 55,
        "category": "Food",
        "expense_date": "2026-02-11",
        "payment_method": "Card"
    });

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(uri)
            .set_json(&sparse)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "missing_field");
    assert_eq!(body["details"]["field"], "description");

    let after: ExpenseBody = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/expenses/1").to_request(),
    )
    .await;
    assert_eq!(after, before);
    assert!(!after.description.is_empty());
}

#[rstest]
#[case::unpadded("2026-3-1")]
#[case::plus_signed_year("+2026-03-01")]
#[case::negative_year("-0001-03-01")]
#[actix_web::test]
async fn loosely_shaped_dates_are_rejected(
    seeded: HttpState,
    mut coffee: Value,
    #[case] raw: &str,
) {
    let app = test::init_service(app(seeded)).await;
    coffee["date"] = json!(raw);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/expenses")
            .set_json(&coffee)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_date");

    let months: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/expenses/summary/monthly")
            .to_request(),
    )
    .await;
    assert_eq!(
        months,
        vec![json!({ "month": "2026-02", "total": 295, "count": 5 })]
    );
}
