use std::io;

use crate::tun::TunTx;

use super::BridgeContext;

/// Pops one frame per iteration from the radio-origin queue and writes
/// its payload to the TUN device.
///
/// Delivery is best effort: a frame that fails to write is logged and
/// dropped, never re-queued. Zero-length frames are skipped.
pub(crate) async fn run<W: TunTx + 'static>(mut tun: W, context: BridgeContext) {
    loop {
        let frame = tokio::select! {
            _ = context.cancel.cancelled() => {
                break;
            }

            frame = context.tun_bound.pop() => frame,
        };

        if frame.is_empty() {
            continue;
        }

        match write_frame(&mut tun, frame.payload()).await {
            Ok(written) if written == frame.len() => {
                log::debug!("tun_writer: wrote <{}> bytes to tun device", written);
                log::trace!("tun_writer: payload {:02x?}", frame.payload());
            }
            Ok(written) => {
                log::error!(
                    "tun_writer: short write to tun device, <{}> of <{}> bytes",
                    written,
                    frame.len()
                );
            }
            Err(err) => {
                log::error!("tun_writer: error writing to tun device: {}", err);
            }
        }
    }

    log::debug!("tun_writer: stopped");
}

/// One write, retried a single time if the OS takes no bytes at all.
async fn write_frame<W: TunTx>(tun: &mut W, payload: &[u8]) -> io::Result<usize> {
    let written = tun.send(payload).await?;

    if written == 0 {
        return tun.send(payload).await;
    }

    Ok(written)
}
