//! Single-resolution completion signal for a scramble transition.
//!
//! A [`Resolver`] settles its [`Completion`] at most once, either as
//! [`Outcome::Completed`] (every unit resolved) or [`Outcome::Superseded`]
//! (the run was cancelled by a newer transition, or dropped). Callers of a
//! superseded run therefore never observe a completion for text that was
//! never fully displayed.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Superseded,
}

#[derive(Default)]
struct Inner {
    outcome: Option<Outcome>,
    waker: Option<Waker>,
    callbacks: Vec<Box<dyn FnOnce(Outcome)>>,
}

/// Host timer. The returned completion settles as `Completed` once `ms`
/// milliseconds have passed, or as `Superseded` if the timer can never fire.
pub trait Delay {
    fn delay(&self, ms: i32) -> Completion;
}

pub fn channel() -> (Resolver, Completion) {
    let inner = Rc::new(RefCell::new(Inner::default()));
    (
        Resolver {
            inner: Some(inner.clone()),
        },
        Completion { inner },
    )
}

pub struct Resolver {
    inner: Option<Rc<RefCell<Inner>>>,
}

impl Resolver {
    pub fn complete(mut self) {
        self.settle(Outcome::Completed);
    }

    pub fn supersede(mut self) {
        self.settle(Outcome::Superseded);
    }

    fn settle(&mut self, outcome: Outcome) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let (callbacks, waker) = {
            let mut i = inner.borrow_mut();
            if i.outcome.is_some() {
                return;
            }
            i.outcome = Some(outcome);
            (std::mem::take(&mut i.callbacks), i.waker.take())
        };
        for cb in callbacks {
            cb(outcome);
        }
        if let Some(w) = waker {
            w.wake();
        }
    }
}

impl Drop for Resolver {
    fn drop(&mut self) {
        self.settle(Outcome::Superseded);
    }
}

#[derive(Clone)]
pub struct Completion {
    inner: Rc<RefCell<Inner>>,
}

impl Completion {
    pub fn outcome(&self) -> Option<Outcome> {
        self.inner.borrow().outcome
    }

    pub fn is_settled(&self) -> bool {
        self.outcome().is_some()
    }

    /// Run `f` once the signal settles (immediately if it already has).
    pub fn on_settle(&self, f: impl FnOnce(Outcome) + 'static) {
        let settled = self.inner.borrow().outcome;
        match settled {
            Some(outcome) => f(outcome),
            None => self.inner.borrow_mut().callbacks.push(Box::new(f)),
        }
    }
}

impl Future for Completion {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome> {
        let mut i = self.inner.borrow_mut();
        match i.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                i.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}
