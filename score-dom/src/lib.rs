//! In-memory document object model for musical scores.
//!
//! A voice tree (segments → measures → tuplets/chords → notes) is built
//! by a front end, browsed depth-first through a statically-typed
//! visitor, and re-synthesised into a master voice ready for rendering
//! to a *.ly source file. Durations and positions stay exact fractions
//! of a whole note throughout.

pub mod dom;
pub mod notation;
pub mod primitives;
pub mod rebuild;
pub mod settings;
pub mod visitor;

pub use rebuild::{rebuild_master_voice, MasterVoiceBuilder, RebuildError};
pub use settings::{ScoreSettings, TraceSettings};
