use std::time::Duration;

use tokio::time;

use crate::frame::{Frame, MAX_PAYLOAD_SIZE};
use crate::radio::{RadioHeader, RadioNetwork};

use super::BridgeContext;

/// Pause between poll iterations. Matches the turnaround time of slow
/// radio hardware while keeping an empty loop off the CPU.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Drives the radio: drains every available inbound frame to the TUN
/// side, then transmits at most one outbound frame per iteration, only
/// while the link is idle.
///
/// The radio layer has two independent readiness conditions (an inbound
/// frame waiting, the outbound channel idle) and its contract is
/// poll-style, so the loop polls on a short interval instead of parking
/// on either queue.
pub(crate) async fn run<N: RadioNetwork + 'static>(mut radio: N, context: BridgeContext) {
    let mut buf = [0u8; MAX_PAYLOAD_SIZE];

    loop {
        if context.cancel.is_cancelled() {
            break;
        }

        radio.update();

        // Drain the inbound backlog completely so frames do not sit in
        // the radio library's internal buffers.
        while radio.available() {
            let mut header = RadioHeader::default();
            let n = radio.read(&mut header, &mut buf);

            if n > 0 {
                log::debug!(
                    "radio: received <{}> bytes from node <{:o}>",
                    n,
                    header.from_node
                );
                log::trace!("radio: payload {:02x?}", &buf[..n]);
                context.tun_bound.push(Frame::new_from_slice(&buf[..n]));
            } else {
                log::error!("radio: error reading data from radio, read <{}> bytes", n);
            }
        }

        radio.update();

        // At most one outbound frame per iteration, and only while
        // nothing is arriving. A failed transmit drops the frame.
        if !context.radio_bound.is_empty() && radio.is_idle() {
            if let Some(frame) = context.radio_bound.try_pop() {
                log::debug!(
                    "radio: sending <{}> bytes to node <{:o}>",
                    frame.len(),
                    context.peer_node
                );
                log::trace!("radio: payload {:02x?}", frame.payload());

                let header = RadioHeader::new(context.peer_node);
                if !radio.write(header, frame.payload()) {
                    log::error!("radio: transmit of <{}> bytes failed", frame.len());
                }
            }
        }

        tokio::select! {
            _ = context.cancel.cancelled() => {
                break;
            }

            _ = time::sleep(POLL_INTERVAL) => {}
        }
    }

    log::debug!("radio: stopped");
}
