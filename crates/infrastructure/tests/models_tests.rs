use linode_records_infrastructure::linode::{ApiErrors, RecordsPage};

#[test]
fn test_records_page_envelope() {
    let page: RecordsPage = serde_json::from_str(
        r#"{
            "data": [{"id": 1, "type": "TXT", "name": "_acme-challenge", "target": "abc",
                      "priority": 0, "weight": 0, "port": 0, "service": null,
                      "protocol": null, "ttl_sec": 0, "tag": null}],
            "page": 1,
            "pages": 2,
            "results": 120
        }"#,
    )
    .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pages, 2);
    assert_eq!(page.results, 120);
}

#[test]
fn test_api_errors_without_reasons() {
    let errors: ApiErrors = serde_json::from_str(r#"{"errors": []}"#).unwrap();
    assert!(errors.reason().is_none());

    let errors: ApiErrors = serde_json::from_str("{}").unwrap();
    assert!(errors.reason().is_none());
}
