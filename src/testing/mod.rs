//! Headless testing framework: a scriptable window, a recording renderer, the
//! [`Pilot`] that drives whole frames, and snapshot helpers.
//!
//! Use the [`Pilot`] to run an application deterministically without a
//! terminal. Use [`frame_to_string`] and [`commands_to_string`] to capture a
//! frame as plain text for snapshot-style assertions.

pub mod pilot;
pub mod recorder;
pub mod snapshot;
pub mod window;

pub use pilot::Pilot;
pub use recorder::{DrawCommand, RecordingRenderer};
pub use snapshot::{commands_to_string, frame_to_string, tree_to_string};
pub use window::HeadlessWindow;
