//! Composition task

use defmt::*;
use embassy_time::{Duration, Ticker};

use tiltmorse_core::activity::InputActivity;
use tiltmorse_core::state::Activity;

use crate::board::Imu;
use crate::channels::{BUTTONS, MESSENGER, SCREEN, SCREEN_UPDATE};
use super::report::log_report;
use super::FeedbackQueue;

/// Service latched button presses while composing
#[embassy_executor::task]
pub async fn input_task(mut imu: Imu, mut activity: InputActivity, period: Duration) {
    info!("Input task started");

    let mut ticker = Ticker::every(period);
    let mut audio = FeedbackQueue;

    loop {
        ticker.next().await;

        let report = {
            let mut messenger = MESSENGER.lock().await;
            let mut screen = SCREEN.lock().await;
            let report = activity.tick(
                &mut *messenger,
                &BUTTONS,
                &mut imu,
                &mut audio,
                &mut *screen,
            );
            if screen.take_dirty() {
                SCREEN_UPDATE.signal(());
            }
            report
        };

        log_report(Activity::Input, &report);
    }
}
