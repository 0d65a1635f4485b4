//! Thermal loop payload loading and graph resolution.

use dn_payload::{from_abridged, from_json_str, to_abridged, Network, PayloadError};

/// A district loop: one bore field and seven connectors chaining from
/// one side of the field, around the served buildings, and back.
const DISTRICT_LOOP: &str = r#"{
    "type": "GHEThermalLoop",
    "identifier": "district_loop",
    "display_name": "District Loop",
    "clockwise_flow": false,
    "ground_heat_exchangers": [{
        "type": "GroundHeatExchanger",
        "identifier": "ghe_1",
        "geometry": {
            "type": "Polygon2D",
            "vertices": [[0.0, 0.0], [20.0, 0.0], [20.0, 20.0], [0.0, 20.0]]
        }
    }],
    "connectors": [
        {
            "type": "ThermalConnector",
            "identifier": "tc_1",
            "geometry": {"type": "LineSegment2D", "p": [20.0, 10.0], "v": [40.0, 0.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_2",
            "geometry": {"type": "LineSegment2D", "p": [60.0, 10.0], "v": [0.0, 40.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_3",
            "geometry": {"type": "LineSegment2D", "p": [60.0, 50.0], "v": [-20.0, 20.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_4",
            "geometry": {"type": "LineSegment2D", "p": [40.0, 70.0], "v": [-30.0, 0.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_5",
            "geometry": {"type": "LineSegment2D", "p": [10.0, 70.0], "v": [-40.0, 0.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_6",
            "geometry": {"type": "LineSegment2D", "p": [-30.0, 70.0], "v": [0.0, -30.0]}
        },
        {
            "type": "ThermalConnector",
            "identifier": "tc_7",
            "geometry": {"type": "LineSegment2D", "p": [-30.0, 40.0], "v": [40.0, -20.0]}
        }
    ],
    "soil_parameters": {
        "type": "SoilParameter",
        "conductivity": 2.3,
        "heat_capacity": 2343500.0,
        "undisturbed_temperature": 18.0
    },
    "borehole_parameters": {
        "type": "BoreholeParameter",
        "length": 96.0,
        "buried_depth": 2.0,
        "diameter": 0.15
    },
    "pipe_parameters": {
        "type": "PipeParameter",
        "inner_diameter": 0.0216,
        "outer_diameter": 0.0266,
        "shank_spacing": 0.0323,
        "roughness": 1e-6,
        "conductivity": 0.4,
        "heat_capacity": 1542000.0
    }
}"#;

#[test]
fn district_loop_resolves_to_one_connected_component() {
    let payload = from_json_str(DISTRICT_LOOP).unwrap();
    let Network::Thermal(loop_model) = from_abridged(&payload).unwrap() else {
        panic!("wrong network kind");
    };

    assert_eq!(loop_model.connectors().len(), 7);
    assert_eq!(loop_model.ground_heat_exchangers().len(), 1);
    assert_eq!(loop_model.display_name(), "District Loop");
    assert_eq!(loop_model.soil_parameters().undisturbed_temperature, Some(18.0));

    let (graph, report) = loop_model.build_graph(0.01).unwrap();
    // Seven chained connectors resolve to eight junctions
    assert_eq!(graph.junctions().len(), 8);
    assert_eq!(graph.edges().len(), 7);
    // One connected component, zero dangling ends: both chain ends sit
    // on the bore-field boundary
    assert_eq!(report.unreachable().count(), 0);
    assert_eq!(report.dangling().count(), 0);
    assert!(report.is_clean(), "defects: {:?}", report.defects());

    let ends: Vec<_> = graph
        .junctions()
        .iter()
        .filter(|j| graph.degree(j.id) == 1)
        .collect();
    assert_eq!(ends.len(), 2);
    assert!(ends.iter().all(|j| j.terminal.as_deref() == Some("ghe_1")));
}

#[test]
fn district_loop_payload_round_trips() {
    let payload = from_json_str(DISTRICT_LOOP).unwrap();
    let resolved = from_abridged(&payload).unwrap();
    assert_eq!(to_abridged(&resolved), payload);
}

#[test]
fn loop_without_exchangers_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(DISTRICT_LOOP).unwrap();
    value["ground_heat_exchangers"] = serde_json::json!([]);
    let payload = from_json_str(&value.to_string()).unwrap();
    let err = from_abridged(&payload).unwrap_err();
    assert!(matches!(err, PayloadError::Network(_)));
}

#[test]
fn absent_parameter_records_fall_back_to_defaults() {
    let mut value: serde_json::Value = serde_json::from_str(DISTRICT_LOOP).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("soil_parameters");
    object.remove("borehole_parameters");
    object.remove("pipe_parameters");
    object.remove("clockwise_flow");

    let payload = from_json_str(&value.to_string()).unwrap();
    let Network::Thermal(loop_model) = from_abridged(&payload).unwrap() else {
        panic!("wrong network kind");
    };
    assert_eq!(loop_model.soil_parameters().conductivity, 2.3);
    assert_eq!(loop_model.borehole_parameters().length, 96.0);
    assert_eq!(loop_model.pipe_parameters().roughness, 1e-6);
    assert!(!loop_model.clockwise_flow());
}

#[test]
fn split_loop_reports_unreachable_but_still_loads() {
    let mut value: serde_json::Value = serde_json::from_str(DISTRICT_LOOP).unwrap();
    // Move one mid-chain connector far away: the chain splits
    value["connectors"][3]["geometry"] =
        serde_json::json!({"type": "LineSegment2D", "p": [500.0, 500.0], "v": [10.0, 0.0]});
    let payload = from_json_str(&value.to_string()).unwrap();
    let Network::Thermal(loop_model) = from_abridged(&payload).unwrap() else {
        panic!("wrong network kind");
    };

    let (graph, report) = loop_model.build_graph(0.01).unwrap();
    assert_eq!(graph.edges().len(), 7);
    assert!(!report.is_clean());
    assert!(report.unreachable().count() > 0);
    assert!(report.dangling().count() > 0);
}
