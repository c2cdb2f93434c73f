use crate::{layout::Geometry, paint, Surface};
use batnotify_core::PowerSource;
use std::time::Duration;
use tracing::{debug, info};

/// What happened while the popup was up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupSummary {
    /// Poll ticks that found the AC still unplugged.
    pub ticks:   u64,
    /// Redraw requests serviced.
    pub redraws: u64,
}

/// Keep the warning on screen until AC power comes back.
///
/// Computes the first message, maps the window and paints it, then on every tick: services pending redraw
/// requests, checks the AC flag, refreshes the message, repaints and sleeps
/// for `interval`.  The sleep is not cut short by redraw requests; those
/// wait for the next tick.  Returns as soon as AC is seen online, leaving
/// resource release to the caller.
pub async fn run_popup<S, P>(
    surface:  &mut S,
    source:   &P,
    geometry: Geometry,
    interval: Duration,
) -> PopupSummary
where
    S: Surface + ?Sized,
    P: PowerSource + ?Sized,
{
    let mut summary = PopupSummary::default();
    let mut message = source.percentage_message();
    surface.show();
    paint(surface, &geometry, &message);

    loop {
        for _ in 0..surface.drain_redraws() {
            paint(surface, &geometry, &message);
            summary.redraws += 1;
        }

        if source.ac_online() {
            info!("AC power detected after {} ticks; closing popup", summary.ticks);
            break;
        }

        message = source.percentage_message();
        debug!("{message}");
        paint(surface, &geometry, &message);
        summary.ticks += 1;

        tokio::time::sleep(interval).await;
    }

    summary
}
