// Host-side tests for the text scramble engine, driven by a manual ticker.

mod common;

use common::{segments, FakeText, Segment};
use fx_core::scramble::{build_units, ScrambleUnit};
use fx_core::{FxError, Hooks, Outcome, ScrambleConfig, ScrambleEngine, Ticker};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

fn setup(
    text: &str,
    config: ScrambleConfig,
    seed: u64,
) -> (ScrambleEngine<FakeText>, FakeText, Ticker) {
    let ticker = Ticker::new();
    let target = FakeText::with_text(text);
    let engine = ScrambleEngine::new(target.clone(), config, ticker.clone(), seed).unwrap();
    (engine, target, ticker)
}

/// What the markup must look like at `frame` given the unit set.
fn expected_segments(units: &[ScrambleUnit], frame: u32) -> Vec<Segment> {
    units
        .iter()
        .filter_map(|u| {
            if u.is_resolved(frame) {
                u.to.map(|glyph| Segment {
                    glyph,
                    active: false,
                })
            } else if frame >= u.start_frame {
                u.glyph.map(|glyph| Segment {
                    glyph,
                    active: true,
                })
            } else {
                u.from.map(|glyph| Segment {
                    glyph,
                    active: false,
                })
            }
        })
        .collect()
}

#[test]
fn hello_settles_within_the_frame_bound() {
    let config = ScrambleConfig::default();
    let bound = config.frames_to_settle() as u64;
    assert_eq!(bound, 79);

    let (mut engine, target, ticker) = setup("", config, 42);
    let done = engine.set_text("HELLO");
    assert!(engine.is_running());
    assert!(!done.is_settled());

    let ticks = ticker.run_until_idle(1_000);
    assert!((1..=bound).contains(&ticks), "took {ticks} ticks");
    assert_eq!(target.markup(), "HELLO");
    assert_eq!(done.outcome(), Some(Outcome::Completed));
    assert!(!engine.is_running());
}

#[test]
fn every_frame_matches_the_unit_schedule() {
    let config = ScrambleConfig::default();
    let alphabet = config.glyphs.clone();
    for seed in 0..8 {
        let (mut engine, target, ticker) = setup("ABOUT US", config.clone(), seed);
        let _done = engine.set_text("OUR WORK & IDEAS");
        let units = engine.units();
        assert_eq!(units.len(), 16);
        for u in &units {
            assert!(u.start_frame < 40);
            assert!(u.end_frame >= u.start_frame && u.end_frame - u.start_frame < 40);
        }

        while ticker.active_count() > 0 {
            let frame = engine.frame();
            ticker.tick();
            let units = engine.units();
            let rendered = segments(&target.markup());
            assert_eq!(rendered, expected_segments(&units, frame), "seed {seed} frame {frame}");
            for s in rendered.iter().filter(|s| s.active) {
                assert!(alphabet.contains(&s.glyph));
            }
        }
        assert_eq!(target.markup(), "OUR WORK &amp; IDEAS");
    }
}

#[test]
fn first_render_waits_for_the_next_tick() {
    let (mut engine, target, ticker) = setup("Services", ScrambleConfig::default(), 1);
    let _done = engine.set_text("Portfolio");
    assert_eq!(target.writes.get(), 0);
    assert_eq!(target.markup(), "Services");
    ticker.tick();
    assert_eq!(target.writes.get(), 1);
}

#[test]
fn completion_fires_once_and_only_at_the_end() {
    let (mut engine, _target, ticker) = setup("", ScrambleConfig::default(), 9);
    let fired = Rc::new(Cell::new(0));
    let done = engine.set_text("HELLO");
    let counter = fired.clone();
    done.on_settle(move |outcome| {
        assert_eq!(outcome, Outcome::Completed);
        counter.set(counter.get() + 1);
    });

    while ticker.active_count() > 0 {
        assert_eq!(fired.get(), 0);
        ticker.tick();
    }
    assert_eq!(fired.get(), 1);

    for _ in 0..10 {
        ticker.tick();
    }
    assert_eq!(fired.get(), 1);
}

#[test]
fn back_to_back_calls_leave_one_transition() {
    let (mut engine, target, ticker) = setup("", ScrambleConfig::default(), 3);
    let first = engine.set_text("A");
    let second = engine.set_text("B");
    assert_eq!(ticker.active_count(), 1);
    assert_eq!(first.outcome(), Some(Outcome::Superseded));

    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "B");
    assert_eq!(second.outcome(), Some(Outcome::Completed));
    assert_eq!(first.outcome(), Some(Outcome::Superseded));
}

#[test]
fn interruption_scrambles_from_what_is_on_screen() {
    let (mut engine, target, ticker) = setup("", ScrambleConfig::default(), 5);
    let first = engine.set_text("ALPHA CENTAURI");
    for _ in 0..12 {
        ticker.tick();
    }
    let on_screen: Vec<char> = segments(&target.markup()).iter().map(|s| s.glyph).collect();

    let second = engine.set_text("OMEGA");
    assert_eq!(first.outcome(), Some(Outcome::Superseded));
    assert_eq!(ticker.active_count(), 1);
    let units = engine.units();
    assert_eq!(units.len(), on_screen.len().max(5));
    for (u, c) in units.iter().zip(&on_screen) {
        assert_eq!(u.from, Some(*c));
    }

    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "OMEGA");
    assert_eq!(second.outcome(), Some(Outcome::Completed));
}

#[test]
fn settle_callback_may_start_the_next_transition() {
    let ticker = Ticker::new();
    let target = FakeText::with_text("");
    let engine = Rc::new(RefCell::new(
        ScrambleEngine::new(target.clone(), ScrambleConfig::default(), ticker.clone(), 8)
            .unwrap(),
    ));
    let next = Rc::new(RefCell::new(None));

    let first = engine.borrow_mut().set_text("ENCRYPTING");
    let (chained, slot) = (engine.clone(), next.clone());
    first.on_settle(move |_| {
        *slot.borrow_mut() = Some(chained.borrow_mut().set_text("ROUTING"));
    });

    ticker.run_until_idle(1_000);
    assert_eq!(first.outcome(), Some(Outcome::Completed));
    let second = next.borrow_mut().take().unwrap();
    assert_eq!(second.outcome(), Some(Outcome::Completed));
    assert_eq!(target.markup(), "ROUTING");
}

#[test]
fn empty_to_empty_completes_on_first_frame() {
    let (mut engine, target, ticker) = setup("", ScrambleConfig::default(), 0);
    let done = engine.set_text("");
    assert_eq!(ticker.run_until_idle(10), 1);
    assert_eq!(target.markup(), "");
    assert_eq!(done.outcome(), Some(Outcome::Completed));
}

#[test]
fn clearing_text_ends_empty() {
    let (mut engine, target, ticker) = setup("HELLO", ScrambleConfig::default(), 4);
    let done = engine.set_text("");
    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "");
    assert_eq!(done.outcome(), Some(Outcome::Completed));
}

#[test]
fn markup_is_escaped() {
    let (mut engine, target, ticker) = setup("", ScrambleConfig::default(), 6);
    let _done = engine.set_text("<b>&\"'");
    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "&lt;b&gt;&amp;&quot;&#39;");
}

#[test]
fn one_frame_window_resolves_immediately() {
    let config = ScrambleConfig {
        window_frames: 1,
        ..ScrambleConfig::default()
    };
    let (mut engine, target, ticker) = setup("old", config, 2);
    let done = engine.set_text("new");
    assert_eq!(ticker.run_until_idle(10), 1);
    assert_eq!(target.markup(), "new");
    assert_eq!(done.outcome(), Some(Outcome::Completed));
}

#[test]
fn zero_reroll_holds_each_glitch_glyph() {
    let config = ScrambleConfig {
        reroll_probability: 0.0,
        ..ScrambleConfig::default()
    };
    let (mut engine, _target, ticker) = setup("", config, 12);
    let _done = engine.set_text("STEADY GLYPHS");
    let mut first_seen: HashMap<usize, char> = HashMap::new();
    while ticker.active_count() > 0 {
        ticker.tick();
        for (i, u) in engine.units().iter().enumerate() {
            if let Some(g) = u.glyph {
                assert_eq!(*first_seen.entry(i).or_insert(g), g, "unit {i} re-rolled");
            }
        }
    }
}

#[test]
fn activation_replays_the_resting_text() {
    let (mut engine, target, ticker) = setup("Contact", ScrambleConfig::default(), 21);
    assert_eq!(engine.resting_text(), "Contact");

    let _done = engine.set_text("Elsewhere");
    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "Elsewhere");

    engine.on_activate();
    assert!(engine.is_running());
    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "Contact");
}

#[test]
fn hover_during_a_run_restarts_it() {
    let (mut engine, target, ticker) = setup("Team", ScrambleConfig::default(), 30);
    let first = engine.replay();
    ticker.tick();
    engine.on_activate();
    assert_eq!(first.outcome(), Some(Outcome::Superseded));
    assert_eq!(ticker.active_count(), 1);
    ticker.run_until_idle(1_000);
    assert_eq!(target.markup(), "Team");
}

#[test]
fn empty_alphabet_is_rejected() {
    let config = ScrambleConfig {
        glyphs: Vec::new(),
        ..ScrambleConfig::default()
    };
    let result = ScrambleEngine::new(FakeText::default(), config, Ticker::new(), 0);
    assert!(matches!(
        result,
        Err(FxError::InvalidConfig { field: "glyphs", .. })
    ));
}

#[test]
fn units_pad_the_shorter_text() {
    let mut rng = StdRng::seed_from_u64(77);
    let units = build_units("ab", "wxyz", 40, &mut rng);
    assert_eq!(units.len(), 4);
    assert_eq!(units[1].from, Some('b'));
    assert_eq!(units[2].from, None);
    assert_eq!(units[3].to, Some('z'));
    assert!(units.iter().all(|u| u.glyph.is_none()));
}
