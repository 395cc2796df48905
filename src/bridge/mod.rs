//! The bridging engine: two hand-off queues, three workers and the
//! supervisor owning their lifecycles.

mod radio_worker;
mod tun_reader;
mod tun_writer;

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::queue::FrameQueue;
use crate::radio::{NodeAddress, RadioNetwork};
use crate::tun::{TunRx, TunTx};

/// Everything a worker needs, bundled once at startup.
///
/// The two queues share no state; traffic in the two directions
/// interleaves independently.
#[derive(Clone)]
pub struct BridgeContext {
    /// TUN → radio direction.
    pub radio_bound: Arc<FrameQueue>,
    /// Radio → TUN direction.
    pub tun_bound: Arc<FrameQueue>,
    /// Set once by the supervisor; each worker stops at its next
    /// suspension point.
    pub cancel: CancellationToken,
    /// Radio address outbound frames are sent to.
    pub peer_node: NodeAddress,
}

impl BridgeContext {
    fn new(peer_node: NodeAddress) -> Self {
        Self {
            radio_bound: Arc::new(FrameQueue::new()),
            tun_bound: Arc::new(FrameQueue::new()),
            cancel: CancellationToken::new(),
            peer_node,
        }
    }
}

/// Supervisor of the three bridge workers.
///
/// Startup order is fixed: the caller opens the TUN device first (an
/// allocation failure is fatal before anything else runs), [`Bridge::start`]
/// brings the radio up and then spawns the workers. [`Bridge::shutdown`]
/// reverses it: request cancellation, join every worker in a fixed order,
/// and let the TUN halves close with the worker tasks that own them.
pub struct Bridge {
    context: BridgeContext,
    tun_reader: Option<JoinHandle<()>>,
    tun_writer: Option<JoinHandle<()>>,
    radio_worker: Option<JoinHandle<()>>,
}

impl Bridge {
    /// Brings the radio up and spawns the three workers.
    pub fn start<R, W, N>(
        config: &BridgeConfig,
        tun_rx: R,
        tun_tx: W,
        mut radio: N,
    ) -> Result<Self, BridgeError>
    where
        R: TunRx + 'static,
        W: TunTx + 'static,
        N: RadioNetwork + 'static,
    {
        radio.begin(config.channel, config.addresses.this_node)?;

        let context = BridgeContext::new(config.addresses.peer_node);

        log::info!(
            "bridge: starting as node <{:o}>, peer <{:o}>, channel <{}>",
            config.addresses.this_node,
            config.addresses.peer_node,
            config.channel
        );

        let tun_reader = tokio::spawn(tun_reader::run(tun_rx, context.clone()));
        let tun_writer = tokio::spawn(tun_writer::run(tun_tx, context.clone()));
        let radio_worker = tokio::spawn(radio_worker::run(radio, context.clone()));

        Ok(Self {
            context,
            tun_reader: Some(tun_reader),
            tun_writer: Some(tun_writer),
            radio_worker: Some(radio_worker),
        })
    }

    pub fn context(&self) -> &BridgeContext {
        &self.context
    }

    /// Waits for the workers to finish. They only do so after a
    /// cancellation, so this is mostly useful raced against a shutdown
    /// signal. A worker that never started is skipped.
    pub async fn join(&mut self) {
        if let Some(handle) = self.tun_reader.take() {
            let _ = handle.await;
        }
        if let Some(handle) = self.tun_writer.take() {
            let _ = handle.await;
        }
        if let Some(handle) = self.radio_worker.take() {
            let _ = handle.await;
        }
    }

    /// Requests cancellation and joins the workers in a fixed order:
    /// TUN reader, TUN writer, radio worker. Dropping the joined TUN
    /// halves closes the device.
    pub async fn shutdown(mut self) {
        log::info!("bridge: shutting down");

        self.context.cancel.cancel();
        self.join().await;

        log::info!("bridge: stopped");
    }
}
