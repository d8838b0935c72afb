use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

use super::{confetti, CelebrationConfig, Schedule};

/// A running celebration. Dropping it cancels both timers.
pub struct Celebration {
    interval: Rc<RefCell<Option<Interval>>>,
    _timeout: Timeout,
    finished: Rc<Cell<bool>>,
}

impl Celebration {
    /// Fires the first tick right away, then one every `tick_ms` until the
    /// window closes. `on_complete` is emitted once, `duration_ms` after start.
    pub fn start(config: CelebrationConfig, on_complete: Callback<()>) -> Self {
        let tick_ms = config.tick_ms;
        let duration_ms = config.duration_ms;
        let schedule = Rc::new(Schedule::new(config, confetti::now_ms()));
        console::debug!(format!("celebration: starting {duration_ms}ms burst loop"));

        let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        if run_tick(&schedule) {
            let schedule = schedule.clone();
            let interval_handle = interval.clone();
            let repeating = Interval::new(tick_ms, move || {
                if !run_tick(&schedule) {
                    interval_handle.borrow_mut().take();
                }
            });
            *interval.borrow_mut() = Some(repeating);
        }

        let finished = Rc::new(Cell::new(false));
        let timeout = {
            let finished = finished.clone();
            Timeout::new(duration_ms, move || {
                finished.set(true);
                console::debug!("celebration: finished");
                on_complete.emit(());
            })
        };

        Self {
            interval,
            _timeout: timeout,
            finished,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    fn is_ticking(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        // The interval closure holds a handle to this slot; break the cycle.
        self.interval.borrow_mut().take();
    }
}

/// Returns whether the loop should keep going.
fn run_tick(schedule: &Schedule) -> bool {
    match schedule.tick(confetti::now_ms(), confetti::random_unit) {
        Some(bursts) => {
            for burst in &bursts {
                confetti::fire(burst);
            }
            true
        }
        None => false,
    }
}

/// Celebrations owned by a mounted page. Overlapping ones are kept side by
/// side, not merged.
#[derive(Default)]
pub struct CelebrationRegistry {
    running: Vec<Celebration>,
}

impl CelebrationRegistry {
    pub fn launch(&mut self, celebration: Celebration) {
        self.running.retain(|c| !c.is_finished());
        self.running.push(celebration);
    }

    pub fn cancel_all(&mut self) {
        if !self.running.is_empty() {
            console::debug!(format!("celebration: cancelling {} on teardown", self.running.len()));
        }
        self.running.clear();
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    fn len(&self) -> usize {
        self.running.len()
    }
}
