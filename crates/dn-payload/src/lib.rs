//! dn-payload: abridged interchange form and JSON round-trip.
//!
//! The abridged form replaces embedded specification records with
//! identifier references into catalogs emitted once at the top level.
//! `to_abridged` / `from_abridged` convert between the in-memory model
//! and that form; the JSON helpers parse and emit the payloads consumed
//! by external load-flow and bore-field sizing engines.

pub mod abridge;
pub mod error;
pub mod schema;

pub use abridge::{
    electrical_from_abridged, electrical_to_abridged, loop_from_abridged, loop_to_abridged,
};
pub use error::{PayloadError, PayloadResult};
pub use schema::*;

use dn_network::{ElectricalNetwork, GheThermalLoop};

/// Either of the two network models the payloads describe.
#[derive(Debug, Clone)]
pub enum Network {
    Electrical(ElectricalNetwork),
    Thermal(GheThermalLoop),
}

/// Abridge a network into its interchange form.
pub fn to_abridged(network: &Network) -> NetworkPayload {
    match network {
        Network::Electrical(n) => NetworkPayload::ElectricalNetwork(electrical_to_abridged(n)),
        Network::Thermal(l) => NetworkPayload::GHEThermalLoop(loop_to_abridged(l)),
    }
}

/// Resolve an abridged payload into the in-memory model.
pub fn from_abridged(payload: &NetworkPayload) -> PayloadResult<Network> {
    match payload {
        NetworkPayload::ElectricalNetwork(def) => {
            Ok(Network::Electrical(electrical_from_abridged(def)?))
        }
        NetworkPayload::GHEThermalLoop(def) => Ok(Network::Thermal(loop_from_abridged(def)?)),
    }
}

/// Parse a payload from JSON text. Parse failures (missing required
/// fields, wrong `type` discriminators, malformed JSON) are reported as
/// schema mismatches.
pub fn from_json_str(json: &str) -> PayloadResult<NetworkPayload> {
    serde_json::from_str(json).map_err(|e| PayloadError::SchemaMismatch {
        what: e.to_string(),
    })
}

/// Serialize a payload to pretty-printed JSON text.
pub fn to_json_string(payload: &NetworkPayload) -> PayloadResult<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

/// Load and resolve a network from a JSON payload file.
pub fn load_json(path: &std::path::Path) -> PayloadResult<Network> {
    let content = std::fs::read_to_string(path)?;
    let payload = from_json_str(&content)?;
    from_abridged(&payload)
}

/// Abridge and write a network to a JSON payload file.
pub fn save_json(path: &std::path::Path, network: &Network) -> PayloadResult<()> {
    let payload = to_abridged(network);
    let content = to_json_string(&payload)?;
    std::fs::write(path, content)?;
    Ok(())
}
