// tests/normalize_and_link.rs
//
// URL box text → normalized URL → Search Console deep link.
//
use gsc_inspect::core::{ValidationError, deeplink::gsc_inspect_link, normalize};

#[test]
fn scheme_is_added_exactly_once() {
    for raw in ["example.com", "www.example.com/a/b", "sub.example.co.uk?q=1", "localhost:8080/x"] {
        let u = normalize(raw).unwrap();
        assert!(u.as_str().starts_with("https://"), "{raw}");
        assert_eq!(u.as_str().matches("://").count(), 1, "{raw}");
        assert!(!u.host().is_empty(), "{raw}");
    }
}

#[test]
fn example_com_scenario() {
    let u = normalize("example.com").unwrap();
    assert_eq!(u.as_str(), "https://example.com");
    assert_eq!(u.host(), "example.com");
    assert_eq!(u.to_string(), "https://example.com");
}

#[test]
fn blank_input_is_validation_error() {
    for raw in ["", " ", "\t", "\r\n  "] {
        assert_eq!(normalize(raw), Err(ValidationError::Empty), "{raw:?}");
    }
}

#[test]
fn slashes_without_authority_are_missing_host() {
    for raw in ["https:///path", "//example.com", "HTTP:///"] {
        assert!(
            matches!(normalize(raw), Err(ValidationError::MissingHost { .. })),
            "{raw}: {:?}",
            normalize(raw)
        );
    }
}

#[test]
fn http_scheme_is_left_alone() {
    let u = normalize("http://example.com/page").unwrap();
    assert_eq!(u.as_str(), "http://example.com/page");
}

#[test]
fn deep_link_escapes_query_characters() {
    let u = normalize("https://example.com/page?x=1").unwrap();
    let link = gsc_inspect_link(&u);

    let (base, query) = link.split_once('?').unwrap();
    assert_eq!(base, "https://search.google.com/search-console/inspect");
    assert_eq!(query, "resource_id=https%3A%2F%2Fexample.com%2Fpage%3Fx%3D1");

    let u = normalize("https://example.com/page?x=1&y=2").unwrap();
    let link = gsc_inspect_link(&u);
    let (_, query) = link.split_once('?').unwrap();
    assert!(!query.contains('&') && !query.contains('?'));
    assert!(query.contains("%26y%3D2"));
}

#[test]
fn deep_link_round_trips() {
    let original = "https://example.com/a b/ü?q=\"x\"&z=1#frag";
    let u = normalize(original).unwrap();
    let link = gsc_inspect_link(&u);
    let parsed = url::Url::parse(&link).unwrap();
    let (k, v) = parsed.query_pairs().next().unwrap();
    assert_eq!(k, "resource_id");
    assert_eq!(v, original);
    assert!(link.contains("%20") && !link.contains('+'), "{link}");
}
