//! Inter-task shared state
//!
//! The message buffer and phase live in one mutex-guarded [`Messenger`];
//! whichever activity owns the phase does its work while holding the lock.
//! Everything else crosses tasks through embassy-sync primitives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use tiltmorse_core::buttons::ButtonLatches;
use tiltmorse_core::state::Messenger;
use tiltmorse_core::traits::Tone;
use tiltmorse_core::MESSAGE_CAPACITY;
use tiltmorse_drivers::display::Screen;

/// Channel capacity for feedback cues
const FEEDBACK_CHANNEL_SIZE: usize = 16;

/// Buzzer or LED request queued by an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Cue {
    Tone(Tone),
    Led(bool),
}

/// Phase plus message buffer, shared by the four activities
pub static MESSENGER: Mutex<CriticalSectionRawMutex, Messenger<MESSAGE_CAPACITY>> =
    Mutex::new(Messenger::new());

/// Set by the button tasks, consumed by the input tick
pub static BUTTONS: ButtonLatches = ButtonLatches::new();

/// Tones and LED changes, played in order by the feedback task
pub static FEEDBACK: Channel<CriticalSectionRawMutex, Cue, FEEDBACK_CHANNEL_SIZE> = Channel::new();

/// Latest screen content produced by the activities
pub static SCREEN: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Signal that the screen changed and the OLED needs a flush
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
