//! Activity report logging

use defmt::*;

use tiltmorse_core::activity::{Note, Report};
use tiltmorse_core::morse::Validation;
use tiltmorse_core::state::Activity;

/// Forward the notes of one tick to defmt
pub fn log_report(activity: Activity, report: &Report) {
    for note in report.notes() {
        match note {
            Note::Transition(phase) => info!("{:?}: phase -> {:?}", activity, phase),
            Note::Transmitted { len } => info!("{:?}: sent {} bytes", activity, len),
            Note::ReceivedLine { len } => info!("{:?}: reply of {} bytes", activity, len),
            Note::Completed => info!("{:?}: reply fully shown", activity),
            Note::Primed { len } => debug!("{:?}: primed {} bytes", activity, len),
            Note::Appended(symbol) => debug!("{:?}: appended {:?}", activity, symbol),
            Note::Validated(Validation::Kept(verdict)) => {
                debug!("{:?}: group {:?}", activity, verdict)
            }
            Note::Validated(Validation::RolledBack { reason, removed }) => warn!(
                "{:?}: invalid group {:?}, removed {} symbols",
                activity, reason, removed
            ),
            Note::Page { start, len } => trace!("{:?}: page {}+{}", activity, start, len),
            Note::TransmitSkipped { symbols } => {
                warn!("{:?}: only {} symbols, nothing sent", activity, symbols)
            }
            Note::StaleInput => debug!("{:?}: dropped presses outside composing", activity),
            Note::SensorFailed(e) => warn!("{:?}: sensor read failed: {:?}", activity, e),
            Note::DisplayFailed(e) => warn!("{:?}: display failed: {:?}", activity, e),
            Note::LinkFailed(e) => warn!("{:?}: link failed: {:?}", activity, e),
            Note::Rejected(reason) => warn!("{:?}: append rejected: {:?}", activity, reason),
            Note::PrimerRejected(outcome) => {
                error!("{:?}: primer rejected: {:?}", activity, outcome)
            }
            Note::Ownership(e) => error!("{:?}: {:?}", activity, e),
        }
    }
    if report.dropped() > 0 {
        warn!("{:?}: {} notes dropped", activity, report.dropped());
    }
}
