use std::time::Duration;

use tokio::time;

use crate::frame::{Frame, MAX_TUN_BUF_SIZE};
use crate::tun::TunRx;

use super::BridgeContext;

/// How long a single readiness wait may park the worker. Keeps
/// cancellation responsive on an idle interface.
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Reads one datagram per wake-up from the TUN device and queues it for
/// the radio.
///
/// Frames are queued whatever their size; payloads beyond the radio cap
/// are the radio layer's to refuse.
pub(crate) async fn run<R: TunRx + 'static>(mut tun: R, context: BridgeContext) {
    let mut buf = vec![0u8; MAX_TUN_BUF_SIZE];

    loop {
        if context.cancel.is_cancelled() {
            break;
        }

        tokio::select! {
            _ = context.cancel.cancelled() => {
                break;
            }

            result = time::timeout(READ_TIMEOUT, tun.recv(&mut buf)) => {
                match result {
                    // No traffic within the interval, go around and
                    // re-check for cancellation.
                    Err(_) => {}
                    Ok(Ok(n)) if n > 0 => {
                        log::debug!("tun_reader: read <{}> bytes from tun device", n);
                        log::trace!("tun_reader: payload {:02x?}", &buf[..n]);
                        context.radio_bound.push(Frame::new_from_slice(&buf[..n]));
                    }
                    Ok(Ok(_)) => {
                        log::error!("tun_reader: empty read from tun device");
                    }
                    Ok(Err(err)) => {
                        log::error!("tun_reader: error reading from tun device: {}", err);
                    }
                }
            }
        }
    }

    log::debug!("tun_reader: stopped");
}
