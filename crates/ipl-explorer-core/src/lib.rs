// Library root: the auction/stats reconciliation pipeline and everything the
// dashboard needs to render it. No terminal code lives here.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod export;
pub mod pipeline;
