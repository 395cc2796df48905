mod config;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use config::FileConfig;
use radiotun::bridge::Bridge;
use radiotun::config::{AddressProfile, BridgeConfig};
use radiotun::error::BridgeError;
use radiotun::radio::LoopbackRadio;
use tokio::signal;

/// Interactive selection between the four fixed address pairs of the
/// radio deployment. Anything else exits non-zero.
fn prompt_addresses() -> Result<AddressProfile, BridgeError> {
    println!();
    println!(" ************ Address Setup ***********");
    println!(
        "Choose an address: 0 for master, 1 for child, 2 for master with \
         routing node (012), 3 for child with routing node (012). CTRL+C to exit."
    );
    print!("> ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;

    let profile = AddressProfile::from_choice(&input)?;

    println!("This node address: {:o}", profile.this_node);
    println!("Peer node address: {:o}", profile.peer_node);
    println!(" **************************************");

    Ok(profile)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let custom_path = std::env::args().nth(1).map(PathBuf::from);
    let (file, config_path) = FileConfig::load(custom_path.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(file.logging.log_filter()),
    )
    .init();

    log::info!("radiotun daemon starting");
    if let Some(path) = &config_path {
        log::info!("configuration loaded from <{}>", path.display());
    }

    let addresses = match (file.bridge.this_node, file.bridge.peer_node) {
        (Some(this_node), Some(peer_node)) => AddressProfile {
            this_node,
            peer_node,
        },
        _ => prompt_addresses()?,
    };

    let config = BridgeConfig {
        device: file.bridge.device.clone(),
        channel: file.bridge.channel,
        addresses,
    };

    // TUN device first: nothing else is worth starting without it.
    let (tun_rx, tun_tx) = radiotun::tun::open(&config.device)?;

    // A real deployment hands its radio library in here; the loopback
    // radio echoes every transmitted frame back out of the TUN device.
    let bridge = Bridge::start(&config, tun_rx, tun_tx, LoopbackRadio::new())?;

    signal::ctrl_c().await?;

    log::info!("shutdown signal received, cleaning up");
    bridge.shutdown().await;

    Ok(())
}
