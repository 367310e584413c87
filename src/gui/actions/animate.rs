// src/gui/actions/animate.rs
use tracing::debug;

use crate::gui::app::{App, ResultsView};

/// Replay the staggered entrance over whatever cards currently exist.
/// Idempotent: replaying mid-flight just resets the pose and starts
/// over. With no cards on screen this is a no-op.
pub fn animate(app: &mut App) {
    if let ResultsView::Cards(slots) = &mut app.view {
        debug!("Animate: entrance replay over {} card(s)", slots.len());
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.motion.begin_entrance(i);
        }
    }
}
