//! Bridge a TUN virtual network interface to a long-range, low-bandwidth
//! packet radio link.
//!
//! IP packets read from the TUN device travel over the radio network to a
//! peer node, and frames arriving from the radio come back out of the TUN
//! device, so the hosts on both ends talk plain IP without knowing a
//! radio sits in the middle. The radio protocol itself (addressing,
//! fragmentation of payloads beyond the 32 byte link MTU, link-layer
//! retries) stays in an external radio library driven through the
//! [`radio::RadioNetwork`] trait.
//!
//! # A tour of this crate
//!
//! The engine is three workers around two FIFO hand-off queues, owned by
//! the [`bridge::Bridge`] supervisor:
//!
//! * a TUN reader wrapping each datagram in a [`frame::Frame`] and
//!   pushing it onto the radio-bound queue,
//! * a radio worker draining every available inbound radio frame, then
//!   transmitting at most one outbound frame per poll cycle,
//! * a TUN writer popping radio-origin frames and writing them back into
//!   the device.
//!
//! [`queue::HandoffQueue`] is the hand-off between workers: unbounded,
//! FIFO, with an awaitable `pop` that a cancellation token can interrupt
//! for shutdown. Delivery is best effort end to end; a frame that fails
//! an I/O step is logged and dropped, never retried at this layer.
//!
//! [`tun::open`] allocates the production TUN device and splits it into
//! the [`tun::TunRx`] and [`tun::TunTx`] halves the workers own. Tests
//! and demos substitute their own implementations of the same traits,
//! and [`radio::LoopbackRadio`] stands in for a real radio library.
//!
//! ## Running a bridge
//!
//! ```no_run
//! use radiotun::bridge::Bridge;
//! use radiotun::config::{AddressProfile, BridgeConfig};
//! use radiotun::radio::LoopbackRadio;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BridgeConfig::new(AddressProfile::from_choice("0")?);
//!
//!     let (tun_rx, tun_tx) = radiotun::tun::open(&config.device)?;
//!     let bridge = Bridge::start(&config, tun_rx, tun_tx, LoopbackRadio::new())?;
//!
//!     tokio::signal::ctrl_c().await?;
//!     bridge.shutdown().await;
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod frame;
pub mod queue;
pub mod radio;
pub mod tun;
