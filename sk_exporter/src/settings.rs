use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExportSettings {
    pub target_ticks_per_second: u16,
    pub fixed_point_scale: f32,
    pub model_scale: f32,
    pub model_rotation: glam::Quat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            target_ticks_per_second: 30,
            fixed_point_scale: 256.0,
            model_scale: 1.0,
            model_rotation: glam::Quat::IDENTITY,
        }
    }
}

impl ExportSettings {
    pub fn global_correction(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            glam::Vec3::splat(self.model_scale),
            self.model_rotation,
            glam::Vec3::ZERO,
        )
    }
}
