//! Loopline track layer: the editing and progress state that sits around the
//! stateless curve engine.

pub mod cursor;
pub mod editor;
pub mod follower;
pub mod shared;

pub use cursor::SelectionCursor;
pub use editor::{Direction, TrackEditor};
pub use follower::{Pose, TrackFollower};
pub use shared::SharedTrack;
