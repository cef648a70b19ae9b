use crate::completion::{self, Completion, Resolver};
use crate::config::ScrambleConfig;
use crate::context::Hooks;
use crate::error::FxResult;
use crate::ticker::{FrameSignal, FrameTask, TaskHandle, Ticker};
use rand::prelude::*;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Element whose text is animated. `text` is what the user currently sees;
/// `set_markup` replaces the element's inner markup.
pub trait TextTarget {
    fn text(&self) -> String;
    fn set_markup(&mut self, markup: &str);
}

/// Transition record for one character position.
///
/// `None` stands for the empty glyph used to pad the shorter of the two texts.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleUnit {
    pub from: Option<char>,
    pub to: Option<char>,
    pub start_frame: u32,
    pub end_frame: u32,
    pub glyph: Option<char>,
}

impl ScrambleUnit {
    #[inline]
    pub fn is_resolved(&self, frame: u32) -> bool {
        frame >= self.end_frame
    }

    #[inline]
    pub fn is_glitching(&self, frame: u32) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }
}

/// Build the per-position units for a transition from `old` to `new`.
pub fn build_units<R: Rng>(
    old: &str,
    new: &str,
    window: u32,
    rng: &mut R,
) -> SmallVec<[ScrambleUnit; 32]> {
    let from: Vec<char> = old.chars().collect();
    let to: Vec<char> = new.chars().collect();
    let len = from.len().max(to.len());
    (0..len)
        .map(|i| {
            let start_frame = rng.gen_range(0..window);
            let end_frame = start_frame + rng.gen_range(0..window);
            ScrambleUnit {
                from: from.get(i).copied(),
                to: to.get(i).copied(),
                start_frame,
                end_frame,
                glyph: None,
            }
        })
        .collect()
}

pub fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

struct ScrambleState<T: TextTarget> {
    target: T,
    config: ScrambleConfig,
    rng: StdRng,
    units: SmallVec<[ScrambleUnit; 32]>,
    frame: u32,
    resolver: Option<Resolver>,
}

impl<T: TextTarget> ScrambleState<T> {
    /// Replace the unit set. Returns the resolver of the run being replaced.
    fn retarget(&mut self, new_text: &str, resolver: Resolver) -> Option<Resolver> {
        let old_text = self.target.text();
        self.units = build_units(&old_text, new_text, self.config.window_frames, &mut self.rng);
        self.frame = 0;
        self.resolver.replace(resolver)
    }

    /// Render the current frame into the target. Returns the resolver once
    /// every unit has resolved, so the caller can fire it outside any borrow.
    fn advance(&mut self) -> (FrameSignal, Option<Resolver>) {
        let frame = self.frame;
        let mut out = String::with_capacity(self.units.len() * 2);
        let mut complete = 0usize;
        for unit in self.units.iter_mut() {
            if unit.is_resolved(frame) {
                complete += 1;
                if let Some(c) = unit.to {
                    push_escaped(&mut out, c);
                }
            } else if frame >= unit.start_frame {
                let glyph = match unit.glyph {
                    Some(g) if !self.rng.gen_bool(self.config.reroll_probability) => g,
                    _ => *self
                        .config
                        .glyphs
                        .choose(&mut self.rng)
                        .unwrap_or(&'_'),
                };
                unit.glyph = Some(glyph);
                out.push_str("<span class=\"");
                out.push_str(&self.config.active_class);
                out.push_str("\">");
                push_escaped(&mut out, glyph);
                out.push_str("</span>");
            } else if let Some(c) = unit.from {
                push_escaped(&mut out, c);
            }
        }
        self.target.set_markup(&out);

        if complete == self.units.len() {
            (FrameSignal::Done, self.resolver.take())
        } else {
            self.frame += 1;
            (FrameSignal::Continue, None)
        }
    }
}

struct ScrambleTask<T: TextTarget>(Rc<RefCell<ScrambleState<T>>>);

impl<T: TextTarget> FrameTask for ScrambleTask<T> {
    fn step(&mut self) -> FxResult<FrameSignal> {
        let (signal, resolver) = self.0.borrow_mut().advance();
        // fired after the borrow ends so a completion callback may start the next transition
        if let Some(r) = resolver {
            r.complete();
        }
        Ok(signal)
    }
}

/// Character-level "decryption" transition for a single element.
///
/// At most one transition runs per engine: [`ScrambleEngine::set_text`]
/// cancels the scheduled frame task of the previous run before installing the
/// new one, and settles the previous run's completion as superseded.
pub struct ScrambleEngine<T: TextTarget> {
    state: Rc<RefCell<ScrambleState<T>>>,
    ticker: Ticker,
    active: Option<TaskHandle>,
    resting_text: String,
}

impl<T: TextTarget + 'static> ScrambleEngine<T> {
    /// The element's text at construction becomes the text replayed by
    /// [`Hooks::on_activate`].
    pub fn new(target: T, config: ScrambleConfig, ticker: Ticker, seed: u64) -> FxResult<Self> {
        config.validate()?;
        let resting_text = target.text();
        Ok(Self {
            state: Rc::new(RefCell::new(ScrambleState {
                target,
                config,
                rng: StdRng::seed_from_u64(seed),
                units: SmallVec::new(),
                frame: 0,
                resolver: None,
            })),
            ticker,
            active: None,
            resting_text,
        })
    }

    pub fn set_text(&mut self, new_text: &str) -> Completion {
        if let Some(handle) = self.active.take() {
            self.ticker.cancel(handle);
        }
        let (resolver, completion) = completion::channel();
        let stale = self.state.borrow_mut().retarget(new_text, resolver);
        if let Some(stale) = stale {
            log::debug!("[scramble] superseding transition for {:?}", new_text);
            stale.supersede();
        }
        self.active = Some(self.ticker.spawn("scramble", ScrambleTask(self.state.clone())));
        completion
    }

    /// Scramble back to the resting text.
    pub fn replay(&mut self) -> Completion {
        let text = self.resting_text.clone();
        self.set_text(&text)
    }

    pub fn resting_text(&self) -> &str {
        &self.resting_text
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some_and(|h| self.ticker.is_active(h))
    }

    /// Frame counter of the current transition.
    pub fn frame(&self) -> u32 {
        self.state.borrow().frame
    }

    pub fn units(&self) -> Vec<ScrambleUnit> {
        self.state.borrow().units.to_vec()
    }
}

impl<T: TextTarget + 'static> Hooks for ScrambleEngine<T> {
    fn on_activate(&mut self) {
        let _ = self.replay();
    }
}
