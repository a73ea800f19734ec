//! Application layer: the process-payment use case and the acquirer dispatch
//! service it submits transactions through.

pub mod dispatch;
pub mod process_payment;
