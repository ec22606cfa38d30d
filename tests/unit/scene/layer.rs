use super::*;

#[test]
fn class_names_roundtrip() {
    for id in LayerId::ALL {
        assert_eq!(LayerId::from_class_name(id.class_name()), Some(id));
    }
    assert_eq!(LayerId::from_class_name("layer-ocean"), None);
}

#[test]
fn class_list_picks_known_layer() {
    assert_eq!(
        LayerId::from_class_list("layer layer-hill parallax"),
        Some(LayerId::Hill)
    );
    assert_eq!(LayerId::from_class_list("layer"), None);
    assert_eq!(LayerId::from_class_list(""), None);
}

#[test]
fn class_list_with_several_layers_uses_fixed_precedence() {
    assert_eq!(
        LayerId::from_class_list("layer layer-hill layer-black"),
        Some(LayerId::Black)
    );
    assert_eq!(
        LayerId::from_class_list("layer-sky layer-atmosphere"),
        Some(LayerId::Atmosphere)
    );
    assert_eq!(
        LayerId::from_class_list("layer-hill layer-sky"),
        Some(LayerId::Sky)
    );
}

#[test]
fn missing_depth_defaults_to_zero() {
    let depths = LayerDepths::new().with(LayerId::Sky, 0.4);
    assert_eq!(depths.depth(LayerId::Sky), 0.4);
    assert_eq!(depths.depth(LayerId::Hill), 0.0);
}

#[test]
fn depths_iterate_in_layer_order() {
    let depths: LayerDepths = [(LayerId::Hill, 1.0), (LayerId::Black, 0.1)]
        .into_iter()
        .collect();
    let ids: Vec<_> = depths.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![LayerId::Black, LayerId::Hill]);
}

#[test]
fn depth_attr_parses_float_prefix() {
    assert_eq!(parse_depth_attr(Some("0.35")), 0.35);
    assert_eq!(parse_depth_attr(Some("  -1.5")), -1.5);
    assert_eq!(parse_depth_attr(Some("2e-1")), 0.2);
    assert_eq!(parse_depth_attr(Some("0.6px")), 0.6);
    assert_eq!(parse_depth_attr(Some(".5")), 0.5);
}

#[test]
fn depth_attr_falls_back_to_zero() {
    assert_eq!(parse_depth_attr(None), 0.0);
    assert_eq!(parse_depth_attr(Some("")), 0.0);
    assert_eq!(parse_depth_attr(Some("deep")), 0.0);
    assert_eq!(parse_depth_attr(Some("-")), 0.0);
}

#[test]
fn serde_uses_snake_case_keys() {
    let depths = LayerDepths::new().with(LayerId::Atmosphere, 0.25);
    let json = serde_json::to_string(&depths).unwrap();
    assert_eq!(json, r#"{"atmosphere":0.25}"#);
}
