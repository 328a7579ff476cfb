use crate::HttpStatusCode;

#[test]
fn given_registry_constants_when_compared_then_match_wire_codes() {
    assert_eq!(HttpStatusCode::OK.as_u16(), 200);
    assert_eq!(HttpStatusCode::CREATED.as_u16(), 201);
    assert_eq!(HttpStatusCode::NO_CONTENT.as_u16(), 204);
    assert_eq!(HttpStatusCode::PARTIAL_CONTENT.as_u16(), 206);
    assert_eq!(HttpStatusCode::MULTIPLE_CHOICES.as_u16(), 300);
    assert_eq!(HttpStatusCode::MOVED_PERMANENTLY.as_u16(), 301);
    assert_eq!(HttpStatusCode::BAD_REQUEST.as_u16(), 400);
    assert_eq!(HttpStatusCode::PAYMENT_REQUIRED.as_u16(), 402);
    assert_eq!(HttpStatusCode::FORBIDDEN.as_u16(), 403);
    assert_eq!(HttpStatusCode::NOT_FOUND.as_u16(), 404);
    assert_eq!(HttpStatusCode::CONFLICT.as_u16(), 409);
    assert_eq!(HttpStatusCode::GONE.as_u16(), 410);
    assert_eq!(HttpStatusCode::INTERNAL_SERVER_ERROR.as_u16(), 500);
    assert_eq!(HttpStatusCode::NOT_IMPLEMENTED.as_u16(), 501);
}

#[test]
fn given_success_codes_when_classified_then_only_2xx_is_success() {
    assert!(HttpStatusCode::OK.is_success());
    assert!(HttpStatusCode::PARTIAL_CONTENT.is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode::MULTIPLE_CHOICES.is_success());
    assert!(!HttpStatusCode(199).is_success());
}

#[test]
fn given_error_codes_when_classified_then_families_are_disjoint() {
    assert!(HttpStatusCode::BAD_REQUEST.is_client_error());
    assert!(!HttpStatusCode::BAD_REQUEST.is_server_error());
    assert!(HttpStatusCode::INTERNAL_SERVER_ERROR.is_server_error());
    assert!(!HttpStatusCode::INTERNAL_SERVER_ERROR.is_client_error());
    assert!(!HttpStatusCode::MOVED_PERMANENTLY.is_client_error());
}

#[test]
fn given_u16_when_converted_then_round_trips() {
    let code = HttpStatusCode::from(418u16);
    assert_eq!(code.as_u16(), 418);
    assert_eq!(format!("{code}"), "418");
}
