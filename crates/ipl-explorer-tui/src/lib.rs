// Library root: re-exports the terminal front end's modules so the binary and
// the tests share one public API.

pub mod app;
pub mod protocol;
pub mod tui;
