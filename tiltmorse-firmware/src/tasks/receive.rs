//! Host receive task

use defmt::*;
use embassy_time::{Duration, Ticker};

use tiltmorse_core::activity::ReceiveActivity;
use tiltmorse_core::state::Activity;

use crate::board::HostRx;
use crate::channels::MESSENGER;
use super::report::log_report;

/// Collect the host's reply line
#[embassy_executor::task]
pub async fn receive_task(mut rx: HostRx, mut activity: ReceiveActivity, period: Duration) {
    info!("Receive task started");

    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        let report = {
            let mut messenger = MESSENGER.lock().await;
            activity.tick(&mut *messenger, &mut rx)
        };

        log_report(Activity::Receive, &report);
    }
}
