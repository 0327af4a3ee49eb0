use super::*;
use serde_json::json;

#[test]
fn collection_exposes_children_in_order() {
    let v = json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "count": 1 } },
            { "type": "Feature", "properties": { "count": 2 } }
        ]
    });
    let Node::Collection(children) = Node::classify(&v, &NodePath::root()).unwrap() else {
        panic!("expected a collection");
    };
    assert_eq!(children.len(), 2);
    assert_eq!(children[1]["properties"]["count"], json!(2));
}

#[test]
fn feature_exposes_count_and_raw_node() {
    let v = json!({ "type": "Feature", "properties": { "count": 7, "name": "x" } });
    let Node::Feature(f) = Node::classify(&v, &NodePath::root()).unwrap() else {
        panic!("expected a feature");
    };
    assert_eq!(f.count().and_then(|n| n.as_i64()), Some(7));
    assert!(std::ptr::eq(f.raw(), &v));
}

#[test]
fn feature_without_count_has_none() {
    let v = json!({ "type": "Feature", "properties": { "name": "x" } });
    let Node::Feature(f) = Node::classify(&v, &NodePath::root()).unwrap() else {
        panic!("expected a feature");
    };
    assert!(f.count().is_none());
}

#[test]
fn other_values_are_unrecognized() {
    for v in [
        json!({ "type": "Point", "coordinates": [0, 0] }),
        json!({ "features": [] }),
        json!({ "type": 3 }),
        json!([1, 2, 3]),
        json!("Feature"),
        json!(null),
    ] {
        assert!(matches!(
            Node::classify(&v, &NodePath::root()).unwrap(),
            Node::Unrecognized
        ));
    }
}

#[test]
fn collection_without_features_array_is_rejected() {
    let mut path = NodePath::root();
    path.push_feature(4);
    let v = json!({ "type": "FeatureCollection", "features": {} });
    let err = Node::classify(&v, &path).unwrap_err();
    assert!(matches!(err, CheckError::Structure { ref path, .. } if path.to_string() == "$.features[4]"));
}

#[test]
fn feature_without_properties_is_rejected() {
    let v = json!({ "type": "Feature", "geometry": null });
    let err = Node::classify(&v, &NodePath::root()).unwrap_err();
    assert!(err.to_string().contains("no `properties` object"));
}

#[test]
fn non_numeric_count_is_rejected() {
    let v = json!({ "type": "Feature", "properties": { "count": "5" } });
    let err = Node::classify(&v, &NodePath::root()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "structure error at $: `properties.count` must be a number, found a string"
    );

    let v = json!({ "type": "Feature", "properties": { "count": null } });
    let err = Node::classify(&v, &NodePath::root()).unwrap_err();
    assert!(err.to_string().ends_with("found null"));
}

#[test]
fn path_renders_nested_steps() {
    let mut path = NodePath::root();
    assert_eq!(path.to_string(), "$");
    path.push_feature(0);
    path.push_feature(3);
    assert_eq!(path.to_string(), "$.features[0].features[3]");
    assert_eq!(path.depth(), 2);
    assert_eq!(path.elems().len(), 4);
    path.pop_feature();
    assert_eq!(path.to_string(), "$.features[0]");
}
