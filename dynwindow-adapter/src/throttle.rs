/// Leading-plus-trailing throttle driven by caller-supplied timestamps.
///
/// The first call in a window runs immediately; calls inside the window are coalesced into a
/// single deferred run that fires once the window elapses (observed via [`Throttle::poll`], which
/// the engine calls from its tick). Deferred calls are never dropped, only coalesced.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: u64,
    last_run_ms: Option<u64>,
    deferred: bool,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_run_ms: None,
            deferred: false,
        }
    }

    /// Returns `true` when the call should run now; otherwise records a deferred run.
    pub fn should_run(&mut self, now_ms: u64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => {
                self.deferred = true;
                false
            }
            _ => {
                self.last_run_ms = Some(now_ms);
                self.deferred = false;
                true
            }
        }
    }

    /// Fires the trailing edge: returns `true` exactly once per deferred run, after the window
    /// has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.deferred {
            return false;
        }
        let last = self.last_run_ms.unwrap_or(0);
        if now_ms.saturating_sub(last) < self.window_ms {
            return false;
        }
        self.deferred = false;
        self.last_run_ms = Some(now_ms);
        true
    }

    pub fn has_deferred(&self) -> bool {
        self.deferred
    }
}
