// Host-side tests for the frame scheduler.

use fx_core::{FrameSignal, FrameTask, FxError, FxResult, TaskHandle, Ticker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Counts its steps and finishes after `limit` of them (never if `None`).
struct Counting {
    steps: Rc<Cell<u32>>,
    limit: Option<u32>,
}

impl Counting {
    fn new(limit: Option<u32>) -> (Self, Rc<Cell<u32>>) {
        let steps = Rc::new(Cell::new(0));
        (
            Self {
                steps: steps.clone(),
                limit,
            },
            steps,
        )
    }
}

impl FrameTask for Counting {
    fn step(&mut self) -> FxResult<FrameSignal> {
        self.steps.set(self.steps.get() + 1);
        match self.limit {
            Some(limit) if self.steps.get() >= limit => Ok(FrameSignal::Done),
            _ => Ok(FrameSignal::Continue),
        }
    }
}

struct Failing;

impl FrameTask for Failing {
    fn step(&mut self) -> FxResult<FrameSignal> {
        Err(FxError::surface("clear", "context lost"))
    }
}

/// Runs `f` with the ticker on its first step, then keeps going.
struct OnFirstStep<F: FnMut(&Ticker)> {
    ticker: Ticker,
    f: Option<F>,
    steps: Rc<Cell<u32>>,
}

impl<F: FnMut(&Ticker)> FrameTask for OnFirstStep<F> {
    fn step(&mut self) -> FxResult<FrameSignal> {
        self.steps.set(self.steps.get() + 1);
        if let Some(mut f) = self.f.take() {
            f(&self.ticker);
        }
        Ok(FrameSignal::Continue)
    }
}

#[test]
fn finished_tasks_leave_the_schedule() {
    let ticker = Ticker::new();
    let (task, steps) = Counting::new(Some(3));
    let handle = ticker.spawn("counting", task);
    assert!(ticker.is_active(handle));

    assert_eq!(ticker.run_until_idle(100), 3);
    assert_eq!(steps.get(), 3);
    assert!(!ticker.is_active(handle));
    assert_eq!(ticker.frame(), 3);
}

#[test]
fn run_until_idle_stops_at_the_frame_cap() {
    let ticker = Ticker::new();
    let (task, steps) = Counting::new(None);
    ticker.spawn("forever", task);
    assert_eq!(ticker.run_until_idle(10), 10);
    assert_eq!(steps.get(), 10);
    assert_eq!(ticker.active_count(), 1);
}

#[test]
fn failing_task_is_dropped_without_stopping_others() {
    let ticker = Ticker::new();
    let (before, before_steps) = Counting::new(None);
    let (after, after_steps) = Counting::new(None);
    ticker.spawn("before", before);
    let bad = ticker.spawn("failing", Failing);
    ticker.spawn("after", after);

    assert_eq!(ticker.tick(), 2);
    assert!(!ticker.is_active(bad));
    ticker.tick();
    assert_eq!(before_steps.get(), 2);
    assert_eq!(after_steps.get(), 2);
}

#[test]
fn task_spawned_mid_tick_starts_next_frame() {
    let ticker = Ticker::new();
    let (child, child_steps) = Counting::new(None);
    let mut child = Some(child);
    let parent_steps = Rc::new(Cell::new(0));
    ticker.spawn(
        "parent",
        OnFirstStep {
            ticker: ticker.clone(),
            f: Some(move |t: &Ticker| {
                if let Some(c) = child.take() {
                    t.spawn("child", c);
                }
            }),
            steps: parent_steps.clone(),
        },
    );

    ticker.tick();
    assert_eq!(ticker.active_count(), 2);
    assert_eq!(child_steps.get(), 0);
    ticker.tick();
    assert_eq!(child_steps.get(), 1);
    assert_eq!(parent_steps.get(), 2);
}

#[test]
fn task_cancelling_itself_is_never_stepped_again() {
    let ticker = Ticker::new();
    let me: Rc<Cell<Option<TaskHandle>>> = Rc::new(Cell::new(None));
    let steps = Rc::new(Cell::new(0));
    let slot = me.clone();
    let handle = ticker.spawn(
        "self-cancel",
        OnFirstStep {
            ticker: ticker.clone(),
            f: Some(move |t: &Ticker| {
                if let Some(h) = slot.get() {
                    assert!(t.cancel(h));
                }
            }),
            steps: steps.clone(),
        },
    );
    me.set(Some(handle));

    ticker.tick();
    assert!(!ticker.is_active(handle));
    ticker.tick();
    assert_eq!(steps.get(), 1);
}

#[test]
fn task_cancelled_mid_tick_is_skipped_that_frame() {
    let ticker = Ticker::new();
    let victim_handle: Rc<Cell<Option<TaskHandle>>> = Rc::new(Cell::new(None));
    let slot = victim_handle.clone();
    ticker.spawn(
        "canceller",
        OnFirstStep {
            ticker: ticker.clone(),
            f: Some(move |t: &Ticker| {
                if let Some(h) = slot.get() {
                    t.cancel(h);
                }
            }),
            steps: Rc::new(Cell::new(0)),
        },
    );
    let (victim, victim_steps) = Counting::new(None);
    victim_handle.set(Some(ticker.spawn("victim", victim)));

    ticker.tick();
    ticker.tick();
    assert_eq!(victim_steps.get(), 0);
    assert_eq!(ticker.active_count(), 1);
}

#[test]
fn stale_handles_are_harmless() {
    let ticker = Ticker::new();
    let (task, _) = Counting::new(Some(1));
    let handle = ticker.spawn("once", task);
    ticker.tick();
    assert!(!ticker.cancel(handle));
    assert!(!ticker.cancel(handle));
}

#[test]
fn shared_tasks_stay_observable() {
    let ticker = Ticker::new();
    let (task, _) = Counting::new(Some(5));
    let shared = Rc::new(RefCell::new(task));
    ticker.spawn("shared", shared.clone());
    ticker.tick();
    ticker.tick();
    assert_eq!(shared.borrow().steps.get(), 2);
}

struct Panicking;

impl FrameTask for Panicking {
    fn step(&mut self) -> FxResult<FrameSignal> {
        panic!("task blew up");
    }
}

#[test]
fn next_frame_is_booked_before_tasks_step() {
    let ticker = Ticker::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let o = order.clone();
    ticker.spawn(
        "recorder",
        OnFirstStep {
            ticker: ticker.clone(),
            f: Some(move |_: &Ticker| o.borrow_mut().push("step")),
            steps: Rc::new(Cell::new(0)),
        },
    );

    ticker.run_frame(|| order.borrow_mut().push("book"));
    assert_eq!(*order.borrow(), ["book", "step"]);
}

#[test]
fn panicking_task_does_not_stop_the_loop() {
    let ticker = Ticker::new();
    let booked = Cell::new(0);
    let (task, steps) = Counting::new(None);
    ticker.spawn("panicking", Panicking);
    ticker.spawn("survivor", task);

    let frame = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        ticker.run_frame(|| booked.set(booked.get() + 1))
    }));
    assert!(frame.is_err());
    assert_eq!(booked.get(), 1);

    ticker.run_frame(|| booked.set(booked.get() + 1));
    ticker.run_frame(|| booked.set(booked.get() + 1));
    assert_eq!(booked.get(), 3);
    assert_eq!(steps.get(), 2);
}
