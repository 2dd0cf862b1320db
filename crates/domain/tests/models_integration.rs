//! Integration tests for marketplace models
//!
//! Decodes backend-shaped payloads the way the gateway does: the envelope
//! first, then the payload into the requested model.

use serde_json::{json, Value};
use tudofresco_domain::{
    AccessLevel, DemandStatus, Envelope, PostResponse, ProductType, StoreResponse, StoreType,
    UnitType, UserResponse,
};

// ============================================================================
// Fixtures
// ============================================================================

fn user_json(uuid: &str, access: &str) -> Value {
    json!({
        "uuid": uuid,
        "created_at": "2025-01-10T10:00:00",
        "updated_at": "2025-01-10T10:00:00",
        "name": "Ana Souza",
        "email": "ana@example.com",
        "date_of_birth": "1990-05-17",
        "gender": "FEMALE",
        "phone_number": "41999990000",
        "profile_picture": "",
        "user_access": access,
        "verification_status": "EMAIL_AND_PHONE"
    })
}

fn post_json() -> Value {
    json!({
        "uuid": "d-1",
        "store": {
            "uuid": "s-1",
            "trade_name": "Hortifruti Central",
            "store_type": "RETAILER",
            "reputation": 4.5,
            "address": { "uuid": "a-1", "city": "Curitiba", "province": "PR" },
            "owner": user_json("u-1", "STORE_OWNER")
        },
        "product": {
            "uuid": "p-1",
            "name": "Tomate",
            "unit_type": "KILOGRAM",
            "type": "VEGETABLE",
            "images": ["https://cdn.example.com/tomate.png"],
            "search_name": "tomate"
        },
        "responsible": user_json("u-2", "EMPLOYEE"),
        "needed_count": 120,
        "minimum_count": 20,
        "description": "Tomates para molho",
        "deadline": "2026-11-01T12:00:00",
        "status": "OPENED"
    })
}

fn decode_payload<T: serde::de::DeserializeOwned>(body: Value) -> T {
    let envelope: Envelope = serde_json::from_value(body).unwrap();
    serde_json::from_value(envelope.payload.unwrap_or(Value::Null)).unwrap()
}

// ============================================================================
// Reel feed
// ============================================================================

/// Scenario: a retailer opens the reel and receives one nested post
#[test]
fn test_reel_post_decodes_nested_resources() {
    let posts: Vec<PostResponse> =
        decode_payload(json!({ "payload": [post_json()], "message": null }));

    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.meta.uuid, "d-1");
    assert_eq!(post.status, DemandStatus::Opened);
    assert_eq!(post.store.store_type, StoreType::Retailer);
    assert_eq!(post.store.display_name(), "Hortifruti Central");
    assert_eq!(post.store.address.as_ref().map(|a| a.summary()).as_deref(), Some("Curitiba/PR"));
    assert_eq!(post.product.unit_type, UnitType::Kilogram);
    assert_eq!(post.product.product_type, ProductType::Vegetable);
    assert_eq!(post.responsible.as_ref().map(|u| u.user_access), Some(AccessLevel::Employee));
}

/// Scenario: the edit screen turns a loaded demand back into a request body
#[test]
fn test_demand_round_trips_into_request() {
    let post: PostResponse = serde_json::from_value(post_json()).unwrap();
    let request = post.to_request();

    assert_eq!(request.store_uuid, "s-1");
    assert_eq!(request.product_uuid, "p-1");
    assert_eq!(request.responsible_uuid.as_deref(), Some("u-2"));
    assert_eq!(request.minimum_count, Some(20));
    assert_eq!(request.status, DemandStatus::Opened);
}

// ============================================================================
// Users and stores
// ============================================================================

#[test]
fn test_user_with_unknown_access_is_guest() {
    let user: UserResponse =
        decode_payload(json!({ "payload": user_json("u-3", "ROOT"), "message": null }));
    assert_eq!(user.user_access, AccessLevel::Guest);
    assert_eq!(user.user_access.label(), "Convidado");
}

#[test]
fn test_store_list_tolerates_sparse_entries() {
    let stores: Vec<StoreResponse> = decode_payload(json!({
        "payload": [{ "uuid": "s-1" }, { "uuid": "s-2", "legal_name": "Sitio Verde" }],
        "message": "ok"
    }));
    let names: Vec<&str> = stores.iter().map(StoreResponse::display_name).collect();
    assert_eq!(names, vec!["Desconhecido", "Sitio Verde"]);
}
