//! Read-only FIPS status exposure
//!
//! The runtime-inspection node registered under `crypto/fips_status`: an
//! integer that reads `0` while the module is healthy and `1` once the
//! latch has tripped. The node holds no state of its own; every read goes
//! to the latch.

use log::debug;

use crate::latch;

/// Inspection path of the status node
pub const FIPS_STATUS_PATH: &str = "crypto/fips_status";

/// Handle for the registered status node; dropping it unregisters
#[derive(Debug)]
pub struct FipsStatusNode(());

impl FipsStatusNode {
    /// Registers the node. Typically done once at start-up, alongside the
    /// POST run.
    pub fn register() -> Self {
        debug!("FIPS: status node registered at {}", FIPS_STATUS_PATH);
        FipsStatusNode(())
    }

    /// Inspection path this node answers under
    pub fn path(&self) -> &'static str {
        FIPS_STATUS_PATH
    }

    /// Current value: `0` for no error, `1` for error latched
    pub fn read(&self) -> u8 {
        u8::from(latch::in_fips_err())
    }
}

impl Drop for FipsStatusNode {
    fn drop(&mut self) {
        debug!("FIPS: status node unregistered");
    }
}
