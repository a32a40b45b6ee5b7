#![warn(missing_docs)]
//! AR session contract: presentation state and the tracked viewer pose.

mod scripted;

pub use scripted::{
    pose_script_from_file, pose_script_from_str, PoseKeyframe, PoseScript, PoseScriptError,
    ScriptedSession,
};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tracked viewpoint of the user, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerPose {
    /// World-space position of the viewer.
    pub position: Vec3,
    /// World-space facing direction (unit length when tracked).
    pub direction: Vec3,
}

impl Default for ViewerPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}

impl ViewerPose {
    /// Create a pose from a position and facing direction.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// An augmented-reality session providing real-time viewer tracking.
///
/// Implementations are polled from the frame callback; none of these calls
/// may block.
pub trait ArSession {
    /// Whether the session is currently presenting to the display.
    fn is_presenting(&self) -> bool;

    /// World position of the viewer camera.
    fn world_position(&self) -> Vec3;

    /// World facing direction of the viewer camera.
    fn world_direction(&self) -> Vec3;

    /// Sample position and direction together.
    fn viewer_pose(&self) -> ViewerPose {
        ViewerPose::new(self.world_position(), self.world_direction())
    }

    /// Called at the start of every frame callback with its timestamp in milliseconds.
    fn begin_frame(&mut self, _timestamp_ms: f64) {}

    /// Whether the session has ended and the frame callback should be unregistered.
    fn is_ended(&self) -> bool {
        false
    }
}
