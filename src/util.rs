/// Logging setup for the command-line front end.
///
/// The library only emits `tracing` events; installing a subscriber is left
/// to the binary, which does it through this module.
pub mod logger;
