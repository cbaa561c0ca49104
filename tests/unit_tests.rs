// Unit tests for lrc-proxy

use actix_web::{http::StatusCode, ResponseError};
use lrc_proxy::{parse_query, ApiKeys, Envelope, ProxyError, SearchQuery};
use serde_json::json;

#[test]
fn test_parse_bohemian_rhapsody() {
    let query = parse_query(Some("Bohemian Rhapsody - Queen")).unwrap();

    assert_eq!(
        query,
        SearchQuery {
            raw: "Bohemian Rhapsody - Queen".to_string(),
            track_name: "Bohemian Rhapsody".to_string(),
            artist_name: "Queen".to_string(),
        }
    );
    assert_eq!(
        query.upstream_params(),
        vec![("track_name", "Bohemian Rhapsody"), ("artist_name", "Queen")]
    );
}

#[test]
fn test_parse_without_delimiter() {
    let query = parse_query(Some("Imagine")).unwrap();

    assert_eq!(query.track_name, "Imagine");
    assert_eq!(query.artist_name, "");
    assert_eq!(query.upstream_params(), vec![("track_name", "Imagine")]);
}

#[test]
fn test_parse_extra_parts_are_dropped() {
    let query = parse_query(Some("A - B - C")).unwrap();

    assert_eq!(query.track_name, "A");
    assert_eq!(query.artist_name, "B");
}

#[test]
fn test_parse_keeps_raw_query() {
    let query = parse_query(Some("  Hey Jude -The Beatles  ")).unwrap();

    assert_eq!(query.raw, "  Hey Jude -The Beatles  ");
    assert_eq!(query.track_name, "Hey Jude");
    assert_eq!(query.artist_name, "The Beatles");
}

#[test]
fn test_parse_missing_query_status() {
    let err = parse_query(None).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_key_validation_statuses() {
    let keys = ApiKeys::new(["apikey1", "apikey2"]);

    assert_eq!(
        keys.validate(None).unwrap_err().status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        keys.validate(Some("riicode")).unwrap_err().status_code(),
        StatusCode::FORBIDDEN
    );
    assert!(keys.validate(Some("apikey1")).is_ok());
}

#[test]
fn test_upstream_error_envelope() {
    let body = json!({"code": 404, "name": "TrackNotFound"});
    let err = ProxyError::Upstream { status: 404, body: body.clone() };

    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        err.envelope(),
        Envelope::upstream_failure("Error from LRCLIB API", body)
    );
}

#[test]
fn test_every_envelope_carries_creator() {
    let envelopes = vec![
        Envelope::success("Imagine", json!([])),
        Envelope::failure("Endpoint not found"),
        ProxyError::Unauthorized.envelope(),
        ProxyError::Internal("boom".to_string()).envelope(),
    ];

    for envelope in envelopes {
        assert_eq!(envelope.creator, "RiiCODE");
    }
}
