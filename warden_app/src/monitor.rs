//! Liveness reporting towards the external monitoring contract.
//!
//! The monitor has no internal state and no failure mode. It exists so an
//! outside watcher has a fixed call to probe.

/// Reports the process as alive.
///
/// Always succeeds.
pub fn send_heartbeat() -> bool {
    true
}
