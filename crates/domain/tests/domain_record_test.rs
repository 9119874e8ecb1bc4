use linode_records_domain::{DomainRecord, DomainRecordResult, RecordType};

#[test]
fn test_record_type_round_trips_through_str() {
    for name in ["A", "AAAA", "NS", "MX", "CNAME", "TXT", "SRV", "PTR", "CAA"] {
        let parsed: RecordType = name.parse().unwrap();
        assert_eq!(parsed.as_str(), name);
    }
    assert_eq!(
        "SOA".parse::<RecordType>().unwrap(),
        RecordType::Other("SOA".to_string())
    );
}

#[test]
fn test_unlisted_record_type_is_kept_verbatim() {
    for name in ["SVCB", "aaaa", "a", "Https"] {
        let parsed: RecordType = name.parse().unwrap();
        assert_eq!(parsed, RecordType::Other(name.to_string()));
        assert_eq!(parsed.as_str(), name);
        assert!(!parsed.is_known());
    }
    assert!(RecordType::MX.is_known());
}

#[test]
fn test_deserialize_api_record_with_nulls() {
    let json = r#"{
        "id": 41022342,
        "type": "A",
        "name": "www",
        "target": "1.1.1.1",
        "priority": 0,
        "weight": 0,
        "port": 0,
        "service": null,
        "protocol": null,
        "ttl_sec": 300,
        "tag": null,
        "created": "2025-09-23T19:41:38",
        "updated": "2025-09-23T19:41:38"
    }"#;

    let record: DomainRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, 41022342);
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(record.name, "www");
    assert_eq!(record.ttl_sec, 300);
    assert!(record.service.is_none());
    assert!(record.protocol.is_none());
    assert!(record.tag.is_none());
    assert_eq!(record.created.as_deref(), Some("2025-09-23T19:41:38"));
}

#[test]
fn test_deserialize_passes_unlisted_type_through() {
    let json = r#"{"id": 5, "type": "SVCB", "name": "www", "target": "1 . alpn=h2"}"#;

    let record: DomainRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.record_type, RecordType::Other("SVCB".to_string()));
    assert_eq!(DomainRecordResult::from(&record).record_type, "SVCB");
    assert_eq!(serde_json::to_value(&record).unwrap()["type"], "SVCB");
}

#[test]
fn test_deserialize_keeps_type_case() {
    let json = r#"{"id": 6, "type": "a", "name": "www"}"#;

    let record: DomainRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.record_type.as_str(), "a");
    assert_eq!(DomainRecordResult::from(record).record_type, "a");
}

#[test]
fn test_projection_of_a_record() {
    let record = DomainRecord::new(5, "www", RecordType::A)
        .with_ttl(300)
        .with_target("1.2.3.4");

    let result = DomainRecordResult::from(&record);

    assert_eq!(
        result,
        DomainRecordResult {
            id: 5,
            name: "www".to_string(),
            record_type: "A".to_string(),
            ttl_sec: 300,
            target: "1.2.3.4".to_string(),
            priority: 0,
            weight: 0,
            port: 0,
            protocol: String::new(),
            service: String::new(),
            tag: String::new(),
        }
    );
    assert_eq!(result.identity(), "5");
}

#[test]
fn test_projection_of_srv_record() {
    let record = DomainRecord::new(11, "_sip._tcp", RecordType::SRV)
        .with_target("sip.example.com")
        .with_priority(10)
        .with_service("_sip", "_tcp", 5, 5060);

    let result = DomainRecordResult::from(record);

    assert_eq!(result.record_type, "SRV");
    assert_eq!(result.priority, 10);
    assert_eq!(result.weight, 5);
    assert_eq!(result.port, 5060);
    assert_eq!(result.service, "_sip");
    assert_eq!(result.protocol, "_tcp");
}

#[test]
fn test_projection_of_caa_tag() {
    let record = DomainRecord::new(12, "", RecordType::CAA)
        .with_target("letsencrypt.org")
        .with_tag("issue");

    assert_eq!(DomainRecordResult::from(&record).tag, "issue");
}

#[test]
fn test_attributes_follow_schema_order() {
    let result = DomainRecordResult::from(DomainRecord::new(5, "www", RecordType::A));
    let keys: Vec<&str> = result.attributes().into_iter().map(|(k, _)| k).collect();

    assert_eq!(
        keys,
        vec![
            "id", "name", "type", "ttl_sec", "target", "priority", "weight", "port", "protocol",
            "service", "tag"
        ]
    );
}

#[test]
fn test_result_serializes_type_key() {
    let result = DomainRecordResult::from(DomainRecord::new(5, "www", RecordType::MX));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["type"], "MX");
    assert_eq!(value["id"], 5);
}
