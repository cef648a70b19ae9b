//! Cooperative, single-threaded frame scheduler.
//!
//! The host (requestAnimationFrame on the web, a plain loop in tests) calls
//! [`Ticker::tick`] once per display frame. Each live task gets exactly one
//! [`FrameTask::step`] per tick and reports whether it wants another frame.
//!
//! Tasks spawned or cancelled while a tick is running take effect at the
//! next frame boundary: a task spawned mid-tick first runs on the following
//! tick, and a task cancelled mid-tick is never stepped again.

use crate::error::FxResult;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSignal {
    Continue,
    Done,
}

pub trait FrameTask {
    fn step(&mut self) -> FxResult<FrameSignal>;
}

impl<T: FrameTask + ?Sized> FrameTask for Rc<RefCell<T>> {
    fn step(&mut self) -> FxResult<FrameSignal> {
        self.borrow_mut().step()
    }
}

/// Opaque id of a spawned task. Stale handles are harmless: cancelling a
/// finished task is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Slot {
    handle: TaskHandle,
    label: &'static str,
    // `None` while the task is being stepped
    task: Option<Box<dyn FrameTask>>,
}

#[derive(Default)]
struct TickerState {
    next_id: u64,
    frame: u64,
    slots: Vec<Slot>,
}

#[derive(Clone, Default)]
pub struct Ticker {
    state: Rc<RefCell<TickerState>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&self, label: &'static str, task: impl FrameTask + 'static) -> TaskHandle {
        let mut s = self.state.borrow_mut();
        s.next_id += 1;
        let handle = TaskHandle(s.next_id);
        s.slots.push(Slot {
            handle,
            label,
            task: Some(Box::new(task)),
        });
        log::debug!("[ticker] spawn '{}' {:?}", label, handle);
        handle
    }

    /// Remove a task. Returns `true` if it was still scheduled.
    pub fn cancel(&self, handle: TaskHandle) -> bool {
        let removed = {
            let mut s = self.state.borrow_mut();
            s.slots
                .iter()
                .position(|slot| slot.handle == handle)
                .map(|pos| s.slots.remove(pos))
        };
        match removed {
            Some(slot) => {
                log::debug!("[ticker] cancel '{}' {:?}", slot.label, handle);
                drop(slot);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.state
            .borrow()
            .slots
            .iter()
            .any(|slot| slot.handle == handle)
    }

    pub fn active_count(&self) -> usize {
        self.state.borrow().slots.len()
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.state.borrow().frame
    }

    /// Run one frame: step every task that was live when the tick began.
    /// A task that errors is logged and dropped; the others are unaffected.
    /// Returns the number of tasks still scheduled.
    pub fn tick(&self) -> usize {
        let handles: Vec<TaskHandle> = {
            let mut s = self.state.borrow_mut();
            s.frame += 1;
            s.slots.iter().map(|slot| slot.handle).collect()
        };

        for handle in handles {
            let taken = {
                let mut s = self.state.borrow_mut();
                s.slots
                    .iter_mut()
                    .find(|slot| slot.handle == handle)
                    .and_then(|slot| slot.task.take().map(|task| (task, slot.label)))
            };
            let Some((mut task, label)) = taken else {
                continue;
            };

            // No borrow is held while the task runs, so it may spawn or cancel.
            let result = task.step();

            let finished = {
                let mut s = self.state.borrow_mut();
                let Some(pos) = s.slots.iter().position(|slot| slot.handle == handle) else {
                    // cancelled from inside its own step
                    drop(s);
                    drop(task);
                    continue;
                };
                match result {
                    Ok(FrameSignal::Continue) => {
                        s.slots[pos].task = Some(task);
                        None
                    }
                    Ok(FrameSignal::Done) => {
                        s.slots.remove(pos);
                        log::debug!("[ticker] '{}' {:?} done", label, handle);
                        Some(task)
                    }
                    Err(e) => {
                        s.slots.remove(pos);
                        log::error!("[ticker] '{}' {:?} failed: {}", label, handle, e);
                        Some(task)
                    }
                }
            };
            drop(finished);
        }

        self.active_count()
    }

    /// Host frame callback: book the next frame first, then tick. A task
    /// that panics mid-tick still leaves the following frame scheduled.
    pub fn run_frame(&self, schedule_next: impl FnOnce()) -> usize {
        schedule_next();
        self.tick()
    }

    /// Tick until nothing is scheduled or `max_frames` ticks have run.
    /// Returns the number of ticks performed.
    pub fn run_until_idle(&self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.active_count() > 0 {
            self.tick();
            frames += 1;
        }
        frames
    }
}
