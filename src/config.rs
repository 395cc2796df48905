//! Startup configuration of the bridge.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::radio::NodeAddress;

/// Radio channel used when the configuration does not name one.
pub const DEFAULT_CHANNEL: u8 = 97;

/// Name the TUN device is created under by default.
pub const DEFAULT_DEVICE: &str = "radiotun0";

/// The two node addresses a bridge runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressProfile {
    pub this_node: NodeAddress,
    pub peer_node: NodeAddress,
}

impl AddressProfile {
    /// Maps the interactive startup choice onto the fixed address pairs
    /// of the radio deployment: `0` master, `1` child, `2` master behind
    /// routing node `012`, `3` child behind routing node `012`. Anything
    /// else is a fatal startup error.
    pub fn from_choice(input: &str) -> Result<Self, BridgeError> {
        match input.trim().chars().next() {
            Some('0') => Ok(Self {
                this_node: 0o00,
                peer_node: 0o01,
            }),
            Some('1') => Ok(Self {
                this_node: 0o01,
                peer_node: 0o00,
            }),
            Some('2') => Ok(Self {
                this_node: 0o00,
                peer_node: 0o12,
            }),
            Some('3') => Ok(Self {
                this_node: 0o12,
                peer_node: 0o00,
            }),
            _ => Err(BridgeError::InvalidAddressChoice(input.trim().to_string())),
        }
    }
}

/// Everything [`crate::bridge::Bridge::start`] needs to come up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub device: String,
    pub channel: u8,
    pub addresses: AddressProfile,
}

impl BridgeConfig {
    pub fn new(addresses: AddressProfile) -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            channel: DEFAULT_CHANNEL,
            addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_choices_map_to_their_address_pairs() {
        let master = AddressProfile::from_choice("0").unwrap();
        assert_eq!(master.this_node, 0o00);
        assert_eq!(master.peer_node, 0o01);

        let child = AddressProfile::from_choice("1").unwrap();
        assert_eq!(child.this_node, 0o01);
        assert_eq!(child.peer_node, 0o00);

        let routed_master = AddressProfile::from_choice("2").unwrap();
        assert_eq!(routed_master.this_node, 0o00);
        assert_eq!(routed_master.peer_node, 0o12);

        let routed_child = AddressProfile::from_choice("3").unwrap();
        assert_eq!(routed_child.this_node, 0o12);
        assert_eq!(routed_child.peer_node, 0o00);
    }

    #[test]
    fn only_the_leading_character_counts() {
        let profile = AddressProfile::from_choice(" 1 whatever follows").unwrap();
        assert_eq!(profile.this_node, 0o01);
    }

    #[test]
    fn unknown_or_empty_choices_are_rejected() {
        assert!(AddressProfile::from_choice("4").is_err());
        assert!(AddressProfile::from_choice("").is_err());
        assert!(AddressProfile::from_choice("master").is_err());
    }
}
