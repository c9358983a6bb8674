//! Per-floor call state and countdown.

use lift_core::FloorId;

/// One building level: at most one outstanding call, plus a display countdown
/// until the assigned car arrives.
///
/// Invariant: `!is_calling ⇒ timer_secs == 0`.  The timer is a best-effort
/// display value — never authoritative for dispatch — refreshed by the
/// building from the assigned car's real state and clamped so it only ever
/// decreases while a call is armed.
pub struct Floor {
    id:         FloorId,
    timer_secs: f64,
    is_calling: bool,
}

/// Read-only copy of a floor's observable state.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorSnapshot {
    pub number:     FloorId,
    pub timer_secs: f64,
    pub is_calling: bool,
}

impl Floor {
    pub fn new(id: FloorId) -> Self {
        Self {
            id,
            timer_secs: 0.0,
            is_calling: false,
        }
    }

    #[inline]
    pub fn id(&self) -> FloorId {
        self.id
    }

    /// Seconds remaining until the assigned car arrives, `0` when idle.
    #[inline]
    pub fn timer_secs(&self) -> f64 {
        self.timer_secs
    }

    #[inline]
    pub fn is_calling(&self) -> bool {
        self.is_calling
    }

    /// Arm the call with the dispatcher's ETA.
    pub fn arm(&mut self, eta_secs: f64) {
        self.timer_secs = eta_secs.max(0.0);
        self.is_calling = true;
    }

    /// Clear the call and zero the countdown.
    pub fn clear(&mut self) {
        self.is_calling = false;
        self.timer_secs = 0.0;
    }

    /// Refresh the countdown from a re-derived remaining time.
    ///
    /// Clamped into `[0, current]`: the displayed value never goes negative
    /// and never increases while the call is armed.  No-op on idle floors.
    pub fn refresh(&mut self, remaining_secs: f64) {
        if self.is_calling {
            self.timer_secs = remaining_secs.clamp(0.0, self.timer_secs);
        }
    }

    pub fn snapshot(&self) -> FloorSnapshot {
        FloorSnapshot {
            number:     self.id,
            timer_secs: self.timer_secs,
            is_calling: self.is_calling,
        }
    }
}
