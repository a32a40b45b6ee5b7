use anyhow::Result;
use archecklist_camera::{Camera, DEFAULT_EYE_HEIGHT};
use archecklist_render::RendererConfig;
use archecklist_ui3d::{ItemStyle, Lighting, VerticalStack};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/archecklist.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Slot spacing of the floating list.
    pub layout: VerticalStack,
    /// Panel dimensions and color.
    pub item: ItemStyle,
    pub camera: CameraConfig,
    pub lights: Lighting,
    pub window: RendererConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera height before the AR session supplies a pose.
    pub eye_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 70.0,
            near: 0.01,
            far: 20.0,
            eye_height: DEFAULT_EYE_HEIGHT,
        }
    }
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, self.eye_height, 0.0))
            .with_fov_degrees(self.fov_degrees)
            .with_clip_planes(self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Frame callbacks per second of simulated time.
    pub fps: u32,
    /// Hard stop for the headless loop.
    pub max_frames: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            max_frames: 600,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    AppConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    tracing::debug!("No config at {}. Using defaults", path.display());
                }
                AppConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
