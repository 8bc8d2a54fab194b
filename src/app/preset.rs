use std::fmt;
use std::str::FromStr;

use crate::error::OrbitError;
use crate::options::{CameraOptions, ControlOptions, Options};

/// Camera setups of the individual demos, from a fixed look-at view up to
/// the fully interactive orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoPreset {
    /// Flat shape viewed head-on through a fixed projection.
    Pvm,
    /// Pyramid viewed from above and in front.
    Pyramid,
    /// Pyramid whose projection follows the window aspect ratio.
    Resizing,
    /// Pyramid with scroll-wheel zoom.
    Zoom,
    /// Meshes with materials and a full orbit camera.
    #[default]
    MeshesMaterials,
    /// Diffuse-lit scene seen from high above, with +X as up.
    PhongDiffuse,
    /// Textured quad seen from below.
    Textures,
}

impl DemoPreset {
    /// Every preset, in teaching order.
    pub const ALL: [Self; 7] = [
        Self::Pvm,
        Self::Pyramid,
        Self::Resizing,
        Self::Zoom,
        Self::MeshesMaterials,
        Self::PhongDiffuse,
        Self::Textures,
    ];

    /// Kebab-case name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pvm => "pvm",
            Self::Pyramid => "pyramid",
            Self::Resizing => "resizing",
            Self::Zoom => "zoom",
            Self::MeshesMaterials => "meshes-materials",
            Self::PhongDiffuse => "phong-diffuse",
            Self::Textures => "textures",
        }
    }

    /// Options reproducing this demo's camera and enabled interactions.
    #[must_use]
    pub fn options(self) -> Options {
        let (eye, target, up) = match self {
            Self::Pvm => ([0.0, 0.0, 2.0], [0.0; 3], [0.0, 1.0, 0.0]),
            Self::Pyramid | Self::Resizing | Self::Zoom => {
                ([0.0, 2.0, 2.0], [0.0; 3], [0.0, 1.0, 0.0])
            }
            Self::MeshesMaterials => ([5.0; 3], [0.0; 3], [0.0, 1.0, 0.0]),
            Self::PhongDiffuse => {
                ([5.0, 10.0, 5.0], [0.0, 0.5, 0.0], [1.0, 0.0, 0.0])
            }
            Self::Textures => ([0.0, -2.0, 1.0], [0.0; 3], [0.0, 1.0, 0.0]),
        };

        let orbit = matches!(
            self,
            Self::MeshesMaterials | Self::PhongDiffuse | Self::Textures
        );

        Options {
            camera: CameraOptions {
                eye,
                target,
                up,
                ..CameraOptions::default()
            },
            controls: ControlOptions {
                orbit,
                zoom: orbit || self == Self::Zoom,
                track_resize: !matches!(self, Self::Pvm | Self::Pyramid),
                ..ControlOptions::default()
            },
        }
    }
}

impl fmt::Display for DemoPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoPreset {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| OrbitError::UnknownPreset(s.to_owned()))
    }
}
