//! Display UART transmit task
//!
//! Sends queued widget updates to the round display panel.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::PANEL_CHANNEL;

/// Display TX task - writes frames to the panel in queue order
#[embassy_executor::task]
pub async fn display_tx_task(mut tx: BufferedUartTx) {
    info!("Display TX task started");

    loop {
        let frame = PANEL_CHANNEL.receive().await;
        if let Err(e) = tx.write_all(&frame).await {
            warn!("Failed to send panel frame: {:?}", e);
        } else {
            trace!("Panel frame sent ({} bytes)", frame.len());
        }
    }
}
