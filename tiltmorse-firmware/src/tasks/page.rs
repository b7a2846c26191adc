//! Reply paging task

use defmt::*;
use embassy_time::{Duration, Ticker};

use tiltmorse_core::activity::DisplayActivity;
use tiltmorse_core::state::Activity;

use crate::channels::{MESSENGER, SCREEN, SCREEN_UPDATE};
use super::report::log_report;
use super::FeedbackQueue;

/// Show the reply one window per tick
#[embassy_executor::task]
pub async fn page_task(mut activity: DisplayActivity, period: Duration) {
    info!("Page task started");

    let mut ticker = Ticker::every(period);
    let mut audio = FeedbackQueue;
    let mut led = FeedbackQueue;

    loop {
        ticker.next().await;

        let report = {
            let mut messenger = MESSENGER.lock().await;
            let mut screen = SCREEN.lock().await;
            let report = activity.tick(&mut *messenger, &mut *screen, &mut audio, &mut led);
            if screen.take_dirty() {
                SCREEN_UPDATE.signal(());
            }
            report
        };

        log_report(Activity::Display, &report);
    }
}
