//! Button edge task
//!
//! Only raises a latch; the input tick does the actual work.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use tiltmorse_core::buttons::Button;

use crate::channels::BUTTONS;

/// Contact bounce settles well within this
const DEBOUNCE: Duration = Duration::from_millis(50);

/// Watch one button and latch each press
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    loop {
        pin.wait_for_rising_edge().await;
        BUTTONS.notify(button);
        trace!("{:?} pressed", button);

        Timer::after(DEBOUNCE).await;
        pin.wait_for_low().await;
        Timer::after(DEBOUNCE).await;
    }
}
