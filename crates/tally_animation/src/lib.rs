//! Tally Animation Engine
//!
//! Frame-driven numeric tweening for animated counters.
//!
//! # Features
//!
//! - **Easing curves**: linear, cubic, and bounce shaping over [0, 1]
//! - **Tween driver**: wall-clock sampling with per-tick value sinks
//! - **Batching**: delayed entries sharing one duration and one origin
//! - **Injected clock**: deterministic `ManualClock` in tests,
//!   `SystemClock` in production

pub mod batch;
pub mod clock;
pub mod driver;
pub mod easing;
pub mod error;
pub mod tween;

pub use batch::TweenBatch;
pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{TweenDriver, TweenId};
pub use easing::Easing;
pub use error::TweenError;
pub use tween::Tween;
