//! OLED refresh task

use defmt::*;

use crate::board::Oled;
use crate::channels::{SCREEN, SCREEN_UPDATE};

/// Copy the shared screen to the panel whenever it changes
#[embassy_executor::task]
pub async fn oled_task(mut oled: Oled) {
    info!("OLED task started");

    loop {
        SCREEN_UPDATE.wait().await;

        // Snapshot so the flush does not hold up the activities
        let screen = SCREEN.lock().await.clone();

        if let Err(e) = screen.replay(&mut oled) {
            warn!("Failed to render screen: {:?}", e);
            continue;
        }
        if oled.target_mut().flush().is_err() {
            warn!("Failed to flush OLED");
        } else {
            trace!("Screen update sent");
        }
    }
}
