//! Domain layer: the self-validating payment entities and the ports the
//! application layer depends on.

pub mod card;
pub mod payment;
pub mod ports;
pub mod purchase;
pub mod store;
pub mod transaction;
pub mod validation;
