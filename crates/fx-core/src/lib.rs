//! Engines behind the studio-fx page effects.
//!
//! Everything here is platform-neutral: the browser is reached only through
//! [`surface::DrawSurface`], [`scramble::TextTarget`] and a host that calls
//! [`ticker::Ticker::tick`] once per display frame.

pub mod completion;
pub mod config;
pub mod constants;
pub mod context;
pub mod cues;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod hover;
pub mod particles;
pub mod reveal;
pub mod scramble;
pub mod surface;
pub mod ticker;
pub mod uplink;

pub use completion::{Completion, Delay, Outcome};
pub use config::{CursorConfig, FieldConfig, HoverConfig, ScrambleConfig};
pub use context::{Hooks, SharedContext, Viewport};
pub use error::{FxError, FxResult};
pub use particles::{FieldHandle, Particle, ParticleField};
pub use scramble::{ScrambleEngine, TextTarget};
pub use surface::{DrawSurface, Rgba};
pub use ticker::{FrameSignal, FrameTask, TaskHandle, Ticker};
pub use uplink::{Notice, NoticeKind, Uplink, UplinkHost, UplinkOutcome};
