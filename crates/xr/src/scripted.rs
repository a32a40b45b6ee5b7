//! Keyframed AR session for headless runs and tests.
//!
//! A [`PoseScript`] is a list of keyframes ordered by time. Before the first
//! keyframe the session is idle (not presenting). Between two keyframes the
//! pose is interpolated linearly and the presenting flag of the earlier
//! keyframe applies. After the last keyframe its pose is held until
//! `end_ms`, at which point the session ends.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ArSession, ViewerPose};

/// Errors emitted while loading a pose script.
#[derive(Debug, Error)]
pub enum PoseScriptError {
    /// Wrap IO errors when reading scripts.
    #[error("failed to read pose script: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse pose script: {0}")]
    Parse(#[from] serde_json::Error),
    /// Keyframe timestamps must be non-decreasing.
    #[error("keyframe {index} at {time_ms}ms is earlier than the keyframe before it")]
    Unordered {
        /// Index of the offending keyframe.
        index: usize,
        /// Its timestamp.
        time_ms: f64,
    },
}

fn default_presenting() -> bool {
    true
}

fn default_direction() -> Vec3 {
    Vec3::NEG_Z
}

/// One sample of the scripted viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseKeyframe {
    /// Timestamp in milliseconds.
    pub time_ms: f64,
    /// Whether the session presents from this keyframe on.
    #[serde(default = "default_presenting")]
    pub presenting: bool,
    /// Viewer position.
    pub position: Vec3,
    /// Viewer facing direction.
    #[serde(default = "default_direction")]
    pub direction: Vec3,
}

impl PoseKeyframe {
    /// A presenting keyframe facing -Z.
    pub fn at(time_ms: f64, position: Vec3) -> Self {
        Self {
            time_ms,
            presenting: true,
            position,
            direction: Vec3::NEG_Z,
        }
    }

    /// Builder: set the presenting flag.
    pub fn with_presenting(mut self, presenting: bool) -> Self {
        self.presenting = presenting;
        self
    }

    /// Builder: set the facing direction.
    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }
}

/// Ordered keyframes plus an optional end time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseScript {
    /// Keyframes ordered by `time_ms`.
    #[serde(default)]
    pub keyframes: Vec<PoseKeyframe>,
    /// Time at which the session ends, if any.
    #[serde(default)]
    pub end_ms: Option<f64>,
}

impl PoseScript {
    /// Check keyframe ordering.
    pub fn validate(&self) -> Result<(), PoseScriptError> {
        for (index, pair) in self.keyframes.windows(2).enumerate() {
            if pair[1].time_ms < pair[0].time_ms {
                return Err(PoseScriptError::Unordered {
                    index: index + 1,
                    time_ms: pair[1].time_ms,
                });
            }
        }
        Ok(())
    }

    /// Sample the script. Returns `None` before the first keyframe.
    pub fn sample(&self, time_ms: f64) -> Option<(bool, ViewerPose)> {
        let first = self.keyframes.first()?;
        if time_ms < first.time_ms {
            return None;
        }

        let next = self.keyframes.partition_point(|k| k.time_ms <= time_ms);
        let current = &self.keyframes[next - 1];
        let Some(following) = self.keyframes.get(next) else {
            return Some((
                current.presenting,
                ViewerPose::new(current.position, current.direction),
            ));
        };

        let span = following.time_ms - current.time_ms;
        let t = if span > 0.0 {
            ((time_ms - current.time_ms) / span) as f32
        } else {
            0.0
        };
        let position = current.position.lerp(following.position, t);
        let direction = current
            .direction
            .lerp(following.direction, t)
            .try_normalize()
            .unwrap_or(current.direction);
        Some((current.presenting, ViewerPose::new(position, direction)))
    }
}

/// Parse a pose script from JSON and validate it.
pub fn pose_script_from_str(input: &str) -> Result<PoseScript, PoseScriptError> {
    let script: PoseScript = serde_json::from_str(input)?;
    script.validate()?;
    Ok(script)
}

/// Load a pose script from a JSON file.
pub fn pose_script_from_file(path: &Path) -> Result<PoseScript, PoseScriptError> {
    let data = fs::read_to_string(path)?;
    pose_script_from_str(&data)
}

/// AR session driven by a [`PoseScript`] or by direct manipulation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSession {
    script: PoseScript,
    pose: ViewerPose,
    presenting: bool,
    ended: bool,
}

impl ScriptedSession {
    /// Session that follows `script` as frames advance.
    pub fn new(script: PoseScript) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Session that presents forever at a fixed pose, with no script.
    pub fn stationary(pose: ViewerPose) -> Self {
        Self {
            script: PoseScript::default(),
            pose,
            presenting: true,
            ended: false,
        }
    }

    /// Override the presenting flag.
    pub fn set_presenting(&mut self, presenting: bool) {
        self.presenting = presenting;
    }

    /// Override the tracked pose.
    pub fn set_pose(&mut self, pose: ViewerPose) {
        self.pose = pose;
    }

    /// End the session.
    pub fn end(&mut self) {
        self.ended = true;
        self.presenting = false;
    }
}

impl ArSession for ScriptedSession {
    fn is_presenting(&self) -> bool {
        self.presenting && !self.ended
    }

    fn world_position(&self) -> Vec3 {
        self.pose.position
    }

    fn world_direction(&self) -> Vec3 {
        self.pose.direction
    }

    fn begin_frame(&mut self, timestamp_ms: f64) {
        if self.ended {
            return;
        }
        if let Some(end_ms) = self.script.end_ms {
            if timestamp_ms >= end_ms {
                tracing::info!(timestamp_ms, "scripted AR session ended");
                self.end();
                return;
            }
        }
        if self.script.keyframes.is_empty() {
            return;
        }
        match self.script.sample(timestamp_ms) {
            Some((presenting, pose)) => {
                if presenting != self.presenting {
                    tracing::debug!(timestamp_ms, presenting, "AR presentation changed");
                }
                self.presenting = presenting;
                self.pose = pose;
            }
            None => self.presenting = false,
        }
    }

    fn is_ended(&self) -> bool {
        self.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> PoseScript {
        PoseScript {
            keyframes: vec![
                PoseKeyframe::at(100.0, Vec3::new(0.0, 1.6, 0.0)),
                PoseKeyframe::at(200.0, Vec3::new(2.0, 1.6, -4.0)),
                PoseKeyframe::at(300.0, Vec3::new(2.0, 1.6, -4.0)).with_presenting(false),
            ],
            end_ms: Some(400.0),
        }
    }

    #[test]
    fn idle_before_first_keyframe() {
        let mut session = ScriptedSession::new(walk());
        session.begin_frame(50.0);
        assert!(!session.is_presenting());
        assert!(!session.is_ended());
    }

    #[test]
    fn interpolates_between_keyframes() {
        let mut session = ScriptedSession::new(walk());
        session.begin_frame(150.0);
        assert!(session.is_presenting());
        assert_eq!(session.world_position(), Vec3::new(1.0, 1.6, -2.0));
        assert_eq!(session.world_direction(), Vec3::NEG_Z);
    }

    #[test]
    fn holds_last_keyframe_and_its_presenting_flag() {
        let mut session = ScriptedSession::new(walk());
        session.begin_frame(350.0);
        assert!(!session.is_presenting());
        assert_eq!(session.world_position(), Vec3::new(2.0, 1.6, -4.0));
    }

    #[test]
    fn ends_at_end_time() {
        let mut session = ScriptedSession::new(walk());
        session.begin_frame(150.0);
        session.begin_frame(400.0);
        assert!(session.is_ended());
        assert!(!session.is_presenting());
        session.begin_frame(150.0);
        assert!(session.is_ended());
    }

    #[test]
    fn stationary_session_presents_without_script() {
        let pose = ViewerPose::new(Vec3::new(3.0, 0.0, 1.0), Vec3::X);
        let mut session = ScriptedSession::stationary(pose);
        session.begin_frame(0.0);
        assert!(session.is_presenting());
        assert_eq!(session.viewer_pose(), pose);
    }

    #[test]
    fn unordered_keyframes_are_rejected() {
        let err = pose_script_from_str(
            r#"{ "keyframes": [
                { "time_ms": 10.0, "position": [0.0, 0.0, 0.0] },
                { "time_ms": 5.0, "position": [1.0, 0.0, 0.0] }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PoseScriptError::Unordered { index: 1, .. }));
    }

    #[test]
    fn json_defaults_fill_presenting_and_direction() {
        let script = pose_script_from_str(
            r#"{ "keyframes": [ { "time_ms": 0.0, "position": [0.0, 1.0, 0.0] } ] }"#,
        )
        .expect("valid script");
        assert!(script.keyframes[0].presenting);
        assert_eq!(script.keyframes[0].direction, Vec3::NEG_Z);
        assert_eq!(script.end_ms, None);
    }
}
