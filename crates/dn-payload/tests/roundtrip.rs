//! Abridged payload round-trips.

use std::sync::Arc;

use dn_catalog::{Catalog, Phase, PowerLine, TransformerProperties, Wire};
use dn_geometry::{LineSegment2D, Point2D, Polygon2D, Polyline2D};
use dn_network::{
    ElectricalConnector, ElectricalNetwork, GheThermalLoop, GroundHeatExchanger, RouteGeometry,
    Substation, ThermalConnector, Transformer,
};
use dn_payload::{
    from_abridged, from_json_str, load_json, save_json, to_abridged, to_json_string, Network,
    NetworkPayload,
};

fn pt(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> RouteGeometry {
    RouteGeometry::Segment(LineSegment2D::from_end_points(pt(x1, y1), pt(x2, y2)).unwrap())
}

fn sample_electrical() -> ElectricalNetwork {
    let mut wires = Catalog::new();
    wires.register(Wire::new("OH AL 2/0 A")).unwrap();
    wires.register(Wire::new("OH AL 2/0 N")).unwrap();

    let line = Arc::new(
        PowerLine::new(
            "3P_OH_AL",
            vec![
                "OH AL 2/0 A".into(),
                "OH AL 2/0 A".into(),
                "OH AL 2/0 A".into(),
                "OH AL 2/0 N".into(),
            ],
            vec![16.0, 16.0, 16.0, 14.0],
            vec![0.0, 0.3, 0.6, 0.3],
            vec![Phase::A, Phase::B, Phase::C, Phase::N],
        )
        .unwrap(),
    );
    let props = Arc::new(TransformerProperties::new("50KVA", 50.0));

    let substation = Substation::new(
        "sub_1",
        Polygon2D::from_rectangle(pt(0.0, 0.0), 10.0, 10.0).unwrap(),
    );
    let transformers = vec![
        Transformer::new(
            "tr_1",
            Polygon2D::from_rectangle(pt(30.0, 0.0), 5.0, 5.0).unwrap(),
            Arc::clone(&props),
        ),
        Transformer::new(
            "tr_2",
            Polygon2D::from_rectangle(pt(30.0, 30.0), 5.0, 5.0).unwrap(),
            props,
        ),
    ];
    let connectors = vec![
        ElectricalConnector::new("c_1", segment(10.0, 5.0, 30.0, 2.5), Arc::clone(&line)),
        ElectricalConnector::new(
            "c_2",
            RouteGeometry::Polyline(
                Polyline2D::new(vec![pt(10.0, 5.0), pt(20.0, 20.0), pt(30.0, 32.5)]).unwrap(),
            ),
            line,
        ),
    ];

    let mut network =
        ElectricalNetwork::new("district_net", substation, transformers, connectors, wires)
            .unwrap();
    network.set_display_name("District Network");
    network
}

fn sample_loop() -> GheThermalLoop {
    let field = GroundHeatExchanger::new(
        "field_1",
        Polygon2D::from_rectangle(pt(-20.0, -20.0), 20.0, 20.0).unwrap(),
    );
    let connectors = vec![
        ThermalConnector::new("t_1", segment(0.0, 0.0, 60.0, 0.0)),
        ThermalConnector::new("t_2", segment(60.0, 0.0, 60.0, 60.0)),
        ThermalConnector::new("t_3", segment(60.0, 60.0, 0.0, 60.0)),
        ThermalConnector::new("t_4", segment(0.0, 60.0, 0.0, 0.0)),
    ];
    GheThermalLoop::new("loop_1", vec![field], connectors).unwrap()
}

#[test]
fn electrical_payload_round_trip() {
    let network = sample_electrical();
    let payload = to_abridged(&Network::Electrical(network));

    let json = to_json_string(&payload).unwrap();
    let parsed = from_json_str(&json).unwrap();
    assert_eq!(payload, parsed);

    let resolved = from_abridged(&parsed).unwrap();
    let payload_again = to_abridged(&resolved);
    assert_eq!(payload, payload_again);
}

#[test]
fn electrical_catalogs_are_emitted_once() {
    let network = sample_electrical();
    let payload = to_abridged(&Network::Electrical(network));
    let NetworkPayload::ElectricalNetwork(def) = payload else {
        panic!("wrong payload kind");
    };
    // Two connectors share one template; two transformers one record
    assert_eq!(def.power_lines.len(), 1);
    assert_eq!(def.transformer_properties.len(), 1);
    assert_eq!(def.wires.len(), 2);
    // Identifier-sorted emission
    assert_eq!(def.wires[0].identifier, "OH AL 2/0 A");
    assert_eq!(def.wires[1].identifier, "OH AL 2/0 N");
}

#[test]
fn thermal_payload_round_trip() {
    let mut loop_model = sample_loop();
    loop_model.set_clockwise_flow(false);
    loop_model.set_display_name("Campus Loop");
    let payload = to_abridged(&Network::Thermal(loop_model));

    let json = to_json_string(&payload).unwrap();
    let parsed = from_json_str(&json).unwrap();
    assert_eq!(payload, parsed);

    let resolved = from_abridged(&parsed).unwrap();
    let payload_again = to_abridged(&resolved);
    assert_eq!(payload, payload_again);
}

#[test]
fn geometry_survives_serialization_exactly() {
    // Serialization must not degrade numeric precision beyond the
    // format's own float representation: awkward decimals included.
    let field = GroundHeatExchanger::new(
        "field_1",
        Polygon2D::new(vec![
            pt(0.123456789012345, -7.000000000000001),
            pt(31.999999999999996, 0.1),
            pt(15.5, 42.424242424242426),
        ])
        .unwrap(),
    );
    let connectors = vec![ThermalConnector::new(
        "t_1",
        segment(0.123456789012345, -7.000000000000001, 15.5, 42.424242424242426),
    )];
    let loop_model = GheThermalLoop::new("loop_p", vec![field], connectors).unwrap();

    let payload = to_abridged(&Network::Thermal(loop_model));
    let json = to_json_string(&payload).unwrap();
    let parsed = from_json_str(&json).unwrap();
    assert_eq!(payload, parsed);
}

#[test]
fn file_round_trip() {
    let network = Network::Electrical(sample_electrical());
    let payload = to_abridged(&network);

    let path = std::env::temp_dir().join("dn_payload_roundtrip_net.json");
    save_json(&path, &network).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(payload, to_abridged(&loaded));
    std::fs::remove_file(&path).ok();
}

#[test]
fn resolved_references_are_shared_after_load() {
    let network = sample_electrical();
    let payload = to_abridged(&Network::Electrical(network));
    let Network::Electrical(loaded) = from_abridged(&payload).unwrap() else {
        panic!("wrong network kind");
    };
    let connectors = loaded.connectors();
    assert!(Arc::ptr_eq(
        &connectors[0].power_line,
        &connectors[1].power_line
    ));
    let transformers = loaded.transformers();
    assert!(Arc::ptr_eq(
        &transformers[0].properties,
        &transformers[1].properties
    ));
}
