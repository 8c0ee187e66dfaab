//! Tests for outcome to response mapping.

use super::*;
use crate::LOCATION;
use rstest::{fixture, rstest};
use serde_json::json;
use std::cell::Cell;

#[fixture]
fn mapper() -> Mapper {
    Mapper::default()
}

#[rstest]
fn every_rejection_has_a_client_error_status() {
    let cases = [
        (Classification::NotFound, Status::NOT_FOUND, "Not Found"),
        (Classification::Failed, Status::BAD_REQUEST, "Bad Request"),
        (Classification::Unauthorized, Status::FORBIDDEN, "Forbidden"),
    ];
    for (classification, status, title) in cases {
        assert_eq!(rejection(classification), Some((status, title)));
    }
    assert_eq!(rejection(Classification::Success), None);
}

#[rstest]
fn success_with_value_is_ok(mapper: Mapper) {
    let response = mapper.ok(Outcome::success("v"));
    assert_eq!(response.status(), Status::OK);
    assert_eq!(response.payload(), Some(&"v"));
}

#[rstest]
#[case(Outcome::success_empty())]
#[case(Outcome::success(0))]
fn success_without_value_is_no_content(mapper: Mapper, #[case] outcome: Outcome<i32>) {
    let response = mapper.ok(outcome);
    assert_eq!(response.status(), Status::NO_CONTENT);
    assert!(response.body().is_none());
}

#[rstest]
fn nul_character_is_no_content(mapper: Mapper) {
    assert_eq!(mapper.ok(Outcome::success('\0')).status(), Status::NO_CONTENT);
    assert_eq!(mapper.ok(Outcome::success('x')).status(), Status::OK);
}

#[rstest]
fn payload_to_response_is_not_called_for_sentinels(mapper: Mapper) {
    let called = Cell::new(false);
    let response = mapper.map(Outcome::success(None::<u8>), |value| {
        called.set(true);
        Response::ok(value)
    });
    assert_eq!(response.status(), Status::NO_CONTENT);
    assert!(!called.get());
}

#[rstest]
fn not_found_joins_messages(mapper: Mapper) {
    let response = mapper.ok(Outcome::<u8>::not_found_with_messages(["a", "b"]));
    let problem = response.problem().expect("problem body");
    assert_eq!(response.status(), Status::NOT_FOUND);
    assert_eq!(problem.title(), "Not Found");
    assert_eq!(problem.status(), Status::NOT_FOUND);
    assert_eq!(problem.detail(), Some("a, b"));
}

#[rstest]
#[case(Outcome::not_found(), Status::NOT_FOUND)]
#[case(Outcome::error(), Status::BAD_REQUEST)]
#[case(Outcome::unauthorized(), Status::FORBIDDEN)]
fn missing_messages_omit_detail(
    mapper: Mapper,
    #[case] outcome: Outcome<u8>,
    #[case] status: Status,
) {
    let response = mapper.ok(outcome);
    assert_eq!(response.status(), status);
    let problem = response.problem().expect("problem body");
    assert_eq!(problem.detail(), None);
    let value = serde_json::to_value(problem).expect("serialises");
    assert!(value.get("detail").is_none());
}

#[rstest]
fn error_action_cannot_change_the_status(mapper: Mapper) {
    let response = mapper.map_with(
        Outcome::<u8>::error_with_messages(["x"]),
        Response::ok,
        |problem, outcome| {
            problem.set_title("Teapot");
            problem
                .insert_extension("messageCount", json!(outcome.messages().len()))
                .expect("messageCount is not reserved");
            let _ = problem.insert_extension("status", json!(200));
        },
    );

    assert_eq!(response.status(), Status::BAD_REQUEST);
    let problem = response.problem().expect("problem body");
    assert_eq!(problem.status(), Status::BAD_REQUEST);
    assert_eq!(problem.title(), "Teapot");
    assert_eq!(problem.extension("messageCount"), Some(&json!(1)));
    assert!(problem.extension("status").is_none());
}

#[rstest]
fn error_action_is_not_called_on_success(mapper: Mapper) {
    let called = Cell::new(false);
    let response = mapper.ok_with(Outcome::success(1_u8), |_problem, _outcome| {
        called.set(true);
    });
    assert_eq!(response.status(), Status::OK);
    assert!(!called.get());
}

#[rstest]
fn error_action_sees_the_original_outcome(mapper: Mapper) {
    let seen = Cell::new(None);
    let _ = mapper.ok_with(Outcome::<u8>::unauthorized(), |_problem, outcome| {
        seen.set(Some(outcome.classification()));
    });
    assert_eq!(seen.get(), Some(Classification::Unauthorized));
}

#[rstest]
fn failed_and_not_found_stay_distinct_without_messages(mapper: Mapper) {
    let failed = mapper.ok(Outcome::<u8>::error());
    let missing = mapper.ok(Outcome::<u8>::not_found());
    assert_ne!(failed.status(), missing.status());
    assert_ne!(
        failed.problem().map(ProblemDetails::title),
        missing.problem().map(ProblemDetails::title)
    );
}

#[rstest]
fn created_sets_location(mapper: Mapper) {
    let response = mapper.created(("v", Outcome::<()>::success_empty()), "http://x/1");
    assert_eq!(response.status(), Status::CREATED);
    assert_eq!(response.payload(), Some(&"v"));
    assert_eq!(response.header(LOCATION), Some("http://x/1"));
}

#[rstest]
fn created_ignores_location_on_failure(mapper: Mapper) {
    let response = mapper.created(("v", Outcome::<()>::not_found()), "http://x/1");
    assert_eq!(response.status(), Status::NOT_FOUND);
    assert!(response.headers().is_empty());
    assert!(response.payload().is_none());
}

#[rstest]
fn created_with_derives_location_from_payload(mapper: Mapper) {
    let response = mapper.created_with((12_u32, Outcome::<()>::success_empty()), |id| {
        format!("/widgets/{id}")
    });
    assert_eq!(response.header(LOCATION), Some("/widgets/12"));
}

#[rstest]
fn locate_is_not_called_for_failures(mapper: Mapper) {
    let called = Cell::new(false);
    let response = mapper.created_with((12_u32, Outcome::<()>::error()), |id| {
        called.set(true);
        format!("/widgets/{id}")
    });
    assert_eq!(response.status(), Status::BAD_REQUEST);
    assert!(!called.get());
}

#[rstest]
fn created_with_sentinel_payload_is_no_content(mapper: Mapper) {
    let response = mapper.created(((), Outcome::<()>::success_empty()), "/ignored");
    assert_eq!(response.status(), Status::NO_CONTENT);
    assert!(response.header(LOCATION).is_none());
}

#[rstest]
fn created_with_action_enriches_failures(mapper: Mapper) {
    let response = mapper.created_with_action(
        ("v", Outcome::<()>::unauthorized_with_message("nope")),
        "/ignored",
        |problem, _outcome| problem.set_instance("/widgets"),
    );
    let problem = response.problem().expect("problem body");
    assert_eq!(response.status(), Status::FORBIDDEN);
    assert_eq!(problem.instance(), Some("/widgets"));
    assert_eq!(problem.detail(), Some("nope"));
}

#[rstest]
fn pair_uses_the_outcome_classification(mapper: Mapper) {
    let response = mapper.map_pair((5_u8, Outcome::<()>::success_empty()), Response::ok);
    assert_eq!(response.status(), Status::OK);
    assert_eq!(response.payload(), Some(&5));
}

#[rstest]
fn settings_change_separator_and_type() {
    let settings = ProblemSettings {
        detail_separator: " | ".to_owned(),
        problem_type: Some("https://errors.example.test/domain".to_owned()),
    };
    let mapper = Mapper::from_settings(&settings);
    let response = mapper.ok(Outcome::<u8>::error_with_messages(["a", "b"]));
    let problem = response.problem().expect("problem body");
    assert_eq!(problem.detail(), Some("a | b"));
    assert_eq!(
        problem.problem_type(),
        Some("https://errors.example.test/domain")
    );
}

#[rstest]
fn into_response_uses_the_default_mapper() {
    assert_eq!(
        Outcome::success(3_u8).into_response(),
        Mapper::default().ok(Outcome::success(3_u8))
    );
}
