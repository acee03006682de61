use lldp_core::{AppendError, EncodeError, ValueError};
use lldp_datalink::DataLinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("datalink error: {0}")]
    DataLink(#[from] DataLinkError),
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("invalid value: {0}")]
    Value(#[from] ValueError),
    #[error("lldpdu rejected tlv: {0}")]
    Append(#[from] AppendError),
    #[error("invalid configuration: {0}")]
    Config(String),
}
