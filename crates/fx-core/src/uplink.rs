//! The contact form's "secure uplink" submit sequence.
//!
//! The button label is scrambled through a fixed list of phrases, each one
//! awaited before the next, with a cue after every phrase. Only then are the
//! form fields checked: an incomplete form gets an error notice and the
//! button back straight away, a complete one gets a success notice, a reset,
//! and the button back after a pause.

use crate::completion::{Delay, Outcome};
use crate::config::ScrambleConfig;
use crate::constants::{
    UPLINK_INCOMPLETE_MESSAGE, UPLINK_PAUSE_MS, UPLINK_PHRASES, UPLINK_RESTORE_MS,
    UPLINK_SUCCESS_MESSAGE,
};
use crate::cues::{Cue, CueSink};
use crate::error::FxResult;
use crate::scramble::{ScrambleEngine, TextTarget};
use crate::ticker::Ticker;
use std::future::Future;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: UPLINK_SUCCESS_MESSAGE,
        }
    }

    pub fn incomplete() -> Self {
        Self {
            kind: NoticeKind::Error,
            message: UPLINK_INCOMPLETE_MESSAGE,
        }
    }

    pub fn modifier_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notification-success",
            NoticeKind::Error => "notification-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UplinkOutcome {
    /// All phrases played and the form was complete.
    Sent,
    /// All phrases played but a field was empty; the form is left as is.
    Incomplete,
    /// A phrase or pause was cut short; nothing was reported or reset.
    Interrupted,
}

/// The page side of the sequence: the form, its button and the notice area.
pub trait UplinkHost {
    type Label: TextTarget + 'static;

    /// A fresh handle on the button's text.
    fn label(&self) -> Self::Label;
    fn is_locked(&self) -> bool;
    fn set_locked(&self, locked: bool);
    /// Plain text write, used to put the original label back.
    fn set_label_text(&self, text: &str);
    fn fields_complete(&self) -> bool;
    fn reset_form(&self);
    fn notify(&self, notice: Notice);
}

pub struct Uplink<H, C, D> {
    host: Rc<H>,
    cues: Rc<C>,
    delay: Rc<D>,
    ticker: Ticker,
    config: ScrambleConfig,
}

impl<H, C, D> Uplink<H, C, D>
where
    H: UplinkHost + 'static,
    C: CueSink + 'static,
    D: Delay + 'static,
{
    pub fn new(
        host: H,
        cues: C,
        delay: D,
        ticker: Ticker,
        config: ScrambleConfig,
    ) -> FxResult<Self> {
        config.validate()?;
        Ok(Self {
            host: Rc::new(host),
            cues: Rc::new(cues),
            delay: Rc::new(delay),
            ticker,
            config,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Lock the button and return the sequence to drive. `None` while an
    /// earlier sequence still holds the button.
    pub fn submit(&self, seed: u64) -> Option<impl Future<Output = UplinkOutcome> + 'static> {
        if self.host.is_locked() {
            log::debug!("[uplink] submit ignored, sequence in flight");
            return None;
        }
        let mut engine = match ScrambleEngine::new(
            self.host.label(),
            self.config.clone(),
            self.ticker.clone(),
            seed,
        ) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("[uplink] {}", e);
                return None;
            }
        };
        self.host.set_locked(true);

        let host = self.host.clone();
        let cues = self.cues.clone();
        let delay = self.delay.clone();
        Some(async move {
            let original = engine.resting_text().to_string();
            for (i, phrase) in UPLINK_PHRASES.iter().enumerate() {
                if i > 0 && delay.delay(UPLINK_PAUSE_MS).await == Outcome::Superseded {
                    return interrupted(&*host, &original);
                }
                if engine.set_text(phrase).await == Outcome::Superseded {
                    return interrupted(&*host, &original);
                }
                cues.play(if i % 2 == 0 { Cue::Click } else { Cue::Tick });
            }

            if !host.fields_complete() {
                host.notify(Notice::incomplete());
                restore(&*host, &original);
                log::info!("[uplink] incomplete form");
                return UplinkOutcome::Incomplete;
            }

            host.notify(Notice::success());
            host.reset_form();
            // the button comes back whether or not the pause ran its course
            let _ = delay.delay(UPLINK_RESTORE_MS).await;
            restore(&*host, &original);
            log::info!("[uplink] sent");
            UplinkOutcome::Sent
        })
    }
}

fn restore<H: UplinkHost>(host: &H, original: &str) {
    host.set_label_text(original);
    host.set_locked(false);
}

fn interrupted<H: UplinkHost>(host: &H, original: &str) -> UplinkOutcome {
    log::warn!("[uplink] sequence interrupted");
    restore(host, original);
    UplinkOutcome::Interrupted
}
