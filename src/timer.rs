use std::time::Duration;

pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Armed,
}

/// Deferred one-shot flag for the hero entrance. It can be armed exactly once;
/// later calls to [`EntranceTimer::arm`] are ignored.
#[derive(Debug)]
pub struct EntranceTimer {
    delay: Duration,
    state: TimerState,
}

impl EntranceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: TimerState::Idle,
        }
    }

    /// Returns false if the timer was already armed.
    pub fn arm(&mut self, scheduler: &impl Scheduler, on_fire: impl FnOnce() + 'static) -> bool {
        if self.state == TimerState::Armed {
            return false;
        }
        self.state = TimerState::Armed;
        scheduler.defer(self.delay, Box::new(on_fire));
        true
    }

    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct ManualScheduler {
        pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        fn run_all(&self) {
            let tasks = self.pending.borrow_mut().drain(..).collect::<Vec<_>>();
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay, task));
        }
    }

    #[test]
    fn test_fires_once_after_delay() {
        let scheduler = ManualScheduler::default();
        let ready = Rc::new(Cell::new(false));
        let mut timer = EntranceTimer::new(Duration::from_millis(200));

        let flag = Rc::clone(&ready);
        assert!(timer.arm(&scheduler, move || flag.set(true)));
        assert!(!ready.get());
        assert_eq!(scheduler.pending.borrow()[0].0, Duration::from_millis(200));

        scheduler.run_all();
        assert!(ready.get());
    }

    #[test]
    fn test_cannot_rearm() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let mut timer = EntranceTimer::new(Duration::from_millis(200));

        for _ in 0..3 {
            let fired = Rc::clone(&fired);
            timer.arm(&scheduler, move || fired.set(fired.get() + 1));
        }
        assert!(timer.is_armed());
        assert_eq!(scheduler.pending.borrow().len(), 1);

        scheduler.run_all();
        scheduler.run_all();
        assert_eq!(fired.get(), 1);
    }
}
