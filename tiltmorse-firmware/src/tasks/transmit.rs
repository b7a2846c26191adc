//! Host transmit task

use defmt::*;
use embassy_time::{Duration, Ticker};

use tiltmorse_core::activity::TransmitActivity;
use tiltmorse_core::state::Activity;

use crate::board::HostTx;
use crate::channels::MESSENGER;
use super::report::log_report;

/// Send the finished message to the host
#[embassy_executor::task]
pub async fn transmit_task(mut tx: HostTx, mut activity: TransmitActivity, period: Duration) {
    info!("Transmit task started");

    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        let report = {
            let mut messenger = MESSENGER.lock().await;
            activity.tick(&mut *messenger, &mut tx)
        };

        log_report(Activity::Transmit, &report);
    }
}
