//! Scene parameters with the cube program's literals as defaults.
//!
//! Every field is optional in a YAML file; missing fields fall back to the
//! defaults below.
//!
//! ```yaml
//! camera:
//!   fov: 75.0
//!   position: [0.0, 0.0, 5.0]
//! cube:
//!   color: "#FFDB99"
//! rotation_step: 0.04
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tumble_common::Color;

/// Errors from loading or validating a scene config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 5.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub size: Vec3,
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: Vec3::ONE,
            color: Color::from_hex(0xFFDB99),
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub color: Color,
    pub intensity: f32,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    /// Range of the light; 0 means unbounded.
    pub distance: f32,
    pub decay: f32,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::new(25.0, 50.0, 25.0),
            distance: 0.0,
            decay: 0.0,
        }
    }
}

/// Everything the bootstrap needs to build the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub cube: CubeConfig,
    pub ambient_light: AmbientLightConfig,
    pub point_light: PointLightConfig,
    /// Radians added to the cube's x and y rotation every frame.
    pub rotation_step: f32,
    pub background: Color,
    /// Multisample the rendered frame.
    pub antialias: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            cube: CubeConfig::default(),
            ambient_light: AmbientLightConfig::default(),
            point_light: PointLightConfig::default(),
            rotation_step: 0.04,
            background: Color::BLACK,
            antialias: true,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Defaults, or the file at `path` when one is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !positive(cam.fov) || cam.fov >= 180.0 {
            return Err(invalid("camera.fov", format!("{} is not in (0, 180)", cam.fov)));
        }
        if !positive(cam.near) {
            return Err(invalid("camera.near", format!("{} must be positive", cam.near)));
        }
        if !positive(cam.far) || cam.far <= cam.near {
            return Err(invalid(
                "camera.far",
                format!("{} must exceed near plane {}", cam.far, cam.near),
            ));
        }
        if !cam.position.is_finite() {
            return Err(invalid("camera.position", "must be finite"));
        }
        if !self.cube.size.to_array().into_iter().all(positive) {
            return Err(invalid(
                "cube.size",
                format!("{:?} must be positive and finite", self.cube.size),
            ));
        }
        if !(0.0..=1.0).contains(&self.cube.roughness) {
            return Err(invalid("cube.roughness", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.cube.metalness) {
            return Err(invalid("cube.metalness", "must be in [0, 1]"));
        }
        if !non_negative(self.ambient_light.intensity) {
            return Err(invalid("ambient_light.intensity", "must not be negative"));
        }
        let point = &self.point_light;
        if !non_negative(point.intensity) {
            return Err(invalid("point_light.intensity", "must not be negative"));
        }
        if !non_negative(point.distance) || !non_negative(point.decay) {
            return Err(invalid("point_light", "distance and decay must not be negative"));
        }
        if !point.position.is_finite() {
            return Err(invalid("point_light.position", "must be finite"));
        }
        if !positive(self.rotation_step) {
            return Err(invalid("rotation_step", "must be positive"));
        }
        Ok(())
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
