pub const PORT: u16 = 8082;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform message wrapper for both directions of the connection. The payload
/// travels under the legacy `date` key, not `data`; existing clients depend
/// on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub state: String,
    #[serde(rename = "date", default)]
    pub data: Value,
}

/// Messages sent back to the client, serialized into the envelope shape.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "state", content = "date", rename_all = "lowercase")]
pub enum ServerMessage {
    Set { count: usize, variation: Vec<u8> },
    Result { message: String },
}

/// Payload of an inbound `start` envelope.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StartData {
    pub path: String,
}

/// Payload of an inbound `finish` envelope.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct FinishData {
    pub clicks: u32,
    pub time: u32,
}
