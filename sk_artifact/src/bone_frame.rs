use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuantizedBoneFrame {
    pub position: [i16; 3],
    pub rotation: [i16; 3],
}

impl QuantizedBoneFrame {
    pub const ENCODED_SIZE: usize = 12;

    pub fn quantize(position: glam::Vec3, rotation: glam::Quat) -> QuantizedBoneFrame {
        // w is never stored, playback reconstructs it with a non-negative sign
        let rotation = if rotation.w < 0.0 { -rotation } else { rotation };
        let scale = i16::MAX as f32;
        QuantizedBoneFrame {
            position: [
                position.x as i16,
                position.y as i16,
                position.z as i16,
            ],
            rotation: [
                (rotation.x * scale) as i16,
                (rotation.y * scale) as i16,
                (rotation.z * scale) as i16,
            ],
        }
    }

    pub fn rotation_quat(&self) -> glam::Quat {
        let scale = i16::MAX as f32;
        let x = self.rotation[0] as f32 / scale;
        let y = self.rotation[1] as f32 / scale;
        let z = self.rotation[2] as f32 / scale;
        let w = (1.0 - x * x - y * y - z * z).max(0.0).sqrt();
        glam::quat(x, y, z, w)
    }

    pub fn to_le_bytes(&self) -> [u8; Self::ENCODED_SIZE] {
        let mut data = [0; Self::ENCODED_SIZE];
        for (index, value) in self
            .position
            .iter()
            .chain(self.rotation.iter())
            .enumerate()
        {
            data[index * 2..index * 2 + 2].copy_from_slice(&value.to_le_bytes());
        }
        data
    }
}
