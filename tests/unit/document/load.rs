use super::*;

#[test]
fn parse_keeps_key_order() {
    let doc = parse_document(r#"{"type":"Feature","z":1,"a":2,"properties":{"count":3}}"#.as_bytes())
        .unwrap();
    assert_eq!(
        serde_json::to_string(&doc).unwrap(),
        r#"{"type":"Feature","z":1,"a":2,"properties":{"count":3}}"#
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_document(Path::new("target/load_unit/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, CheckError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = std::path::PathBuf::from("target").join("load_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, r#"{"type":"FeatureCollection","features":["#).unwrap();

    let err = load_document(&path).unwrap_err();
    let CheckError::Parse { path: p, source } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(p, path);
    assert!(source.is_eof());
}
