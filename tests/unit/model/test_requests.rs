use ticker_snapshot::constants::PAGE_SIZE;
use ticker_snapshot::model::requests::ListingQuery;

#[test]
fn test_listing_query_defaults() {
    let query = ListingQuery::default();
    assert_eq!(query.market, "stocks");
    assert!(query.active);
    assert_eq!(query.order, "asc");
    assert_eq!(query.limit, PAGE_SIZE);
    assert_eq!(query.limit, 1000);
    assert_eq!(query.sort, "ticker");
}

#[test]
fn test_listing_query_serialization() {
    let json = serde_json::to_value(ListingQuery::default()).unwrap();
    assert_eq!(json["market"], "stocks");
    assert_eq!(json["active"], true);
    assert_eq!(json["limit"], 1000);
    assert!(json.get("apiKey").is_none());
}
