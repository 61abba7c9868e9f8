use thiserror::Error;

use crate::cable::{CableId, Endpoint};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CableError {
    /// An explicit id collided with a cable the registry already holds, removed ones included.
    #[error("cable id '{0}' is already in use")]
    DuplicateId(CableId),

    /// The id was never created in this registry.
    #[error("invalid cable id '{0}': no such cable")]
    NotFound(String),

    /// The cable existed but has been removed.
    #[error("cable '{0}' has been removed")]
    InvalidState(CableId),

    #[error("invalid endpoint {0}: expected 1 or 2")]
    InvalidEndpoint(u8),

    #[error("no free cable id left between {prefix}{start} and {prefix}{end}")]
    IdSpaceExhausted {
        prefix: String,
        start: u32,
        end: u32,
    },

    #[error("cable '{0}' is not connected at both ends")]
    NotConnected(CableId),

    #[error("component '{component}' is not attached to cable '{cable}'")]
    UnknownEndpoint { cable: CableId, component: String },

    #[error("no receiver attached at endpoint {endpoint} of cable '{cable}'")]
    NoReceiver { cable: CableId, endpoint: Endpoint },
}
