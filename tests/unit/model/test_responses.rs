use serde_json::json;
use ticker_snapshot::model::responses::PageResponse;

#[test]
fn test_page_with_results_and_next_url() {
    let page = PageResponse::from_value(json!({
        "results": [{ "ticker": "A" }, { "ticker": "B" }],
        "next_url": "https://api.polygon.io/v3/reference/tickers?cursor=abc"
    }));

    assert!(page.results.is_some());
    assert_eq!(page.results.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        page.next_url.as_deref(),
        Some("https://api.polygon.io/v3/reference/tickers?cursor=abc")
    );
}

#[test]
fn test_page_without_results_is_malformed() {
    let page = PageResponse::from_value(json!({ "status": "OK" }));
    assert!(page.results.is_none());
    assert_eq!(page.next_url, None);
}

#[test]
fn test_page_with_non_list_results_is_malformed() {
    for results in [json!({ "ticker": "A" }), json!("A"), json!(null), json!(3)] {
        let page = PageResponse::from_value(json!({ "results": results }));
        assert!(page.results.is_none());
    }
}

#[test]
fn test_page_with_empty_results_is_well_formed() {
    let page = PageResponse::from_value(json!({ "results": [] }));
    assert_eq!(page.results, Some(Vec::new()));
}

#[test]
fn test_non_object_entries_are_dropped() {
    let page = PageResponse::from_value(json!({
        "results": [{ "ticker": "A" }, "junk", 42, { "ticker": "B" }]
    }));
    let tickers: Vec<&str> = page
        .results
        .as_ref()
        .unwrap()
        .iter()
        .filter_map(|r| r.get("ticker").and_then(|t| t.as_str()))
        .collect();
    assert_eq!(tickers, vec!["A", "B"]);
}

#[test]
fn test_blank_or_non_string_next_url_is_absent() {
    for next_url in [json!(""), json!("   "), json!(null), json!(5)] {
        let page = PageResponse::from_value(json!({ "results": [], "next_url": next_url }));
        assert_eq!(page.next_url, None);
    }
}

#[test]
fn test_non_object_body_is_malformed() {
    let page = PageResponse::from_value(json!([1, 2, 3]));
    assert!(page.results.is_none());
}
