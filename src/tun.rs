//! TUN device access, split into a receive half and a transmit half.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt, ReadHalf, WriteHalf};
use tun::AsyncDevice;

use crate::error::BridgeError;
use crate::frame::MAX_PAYLOAD_SIZE;

/// Receive half of a TUN device. `recv` parks until the interface hands
/// out a datagram and delivers exactly one of them per call.
#[async_trait]
pub trait TunRx: Send {
    async fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Transmit half of a TUN device.
///
/// `send` reports the number of bytes the OS accepted; short writes are
/// the caller's to deal with.
#[async_trait]
pub trait TunTx: Send {
    async fn send(&mut self, buf: &[u8]) -> io::Result<usize>;
}

pub struct TunReader(ReadHalf<AsyncDevice>);

pub struct TunWriter(WriteHalf<AsyncDevice>);

/// Opens the TUN device and splits it into its two halves.
///
/// The interface comes up as a point-to-point device without packet
/// information, with its MTU at the radio payload cap. An allocation
/// failure here is fatal to startup; there is nothing to bridge without
/// the device.
pub fn open(name: &str) -> Result<(TunReader, TunWriter), BridgeError> {
    let mut config = tun::Configuration::default();
    config.name(name).mtu(MAX_PAYLOAD_SIZE as i32).up();

    #[cfg(target_os = "linux")]
    config.platform(|config| {
        config.packet_information(false);
    });

    let device = tun::create_as_async(&config)?;

    log::info!("tun: attached to device <{}>", name);

    let (rx, tx) = tokio::io::split(device);
    Ok((TunReader(rx), TunWriter(tx)))
}

#[async_trait]
impl TunRx for TunReader {
    async fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf).await
    }
}

#[async_trait]
impl TunTx for TunWriter {
    async fn send(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf).await
    }
}
