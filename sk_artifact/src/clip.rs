use crate::{
    asset::Asset, bone_frame::QuantizedBoneFrame, default_url, resource_type::EResourceType,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnimationClip {
    pub name: String,
    pub id: uuid::Uuid,
    pub url: url::Url,
    pub frame_count: u16,
    pub bone_count: u16,
    pub ticks_per_second: u16,
    pub frames: Vec<QuantizedBoneFrame>,
}

impl AnimationClip {
    pub fn frame_size_in_bytes(&self) -> usize {
        self.bone_count as usize * QuantizedBoneFrame::ENCODED_SIZE
    }

    pub fn bone_frame(&self, frame: usize, bone: usize) -> Option<&QuantizedBoneFrame> {
        if bone >= self.bone_count as usize {
            return None;
        }
        self.frames.get(frame * self.bone_count as usize + bone)
    }
}

impl Asset for AnimationClip {
    fn get_url(&self) -> url::Url {
        self.url.clone()
    }

    fn get_resource_type(&self) -> EResourceType {
        EResourceType::AnimationClip
    }
}

impl Default for AnimationClip {
    fn default() -> Self {
        Self {
            name: Default::default(),
            id: Default::default(),
            url: default_url().clone(),
            frame_count: 0,
            bone_count: 0,
            ticks_per_second: 0,
            frames: vec![],
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RestPose {
    pub name: String,
    pub id: uuid::Uuid,
    pub url: url::Url,
    pub frames: Vec<QuantizedBoneFrame>,
}

impl Asset for RestPose {
    fn get_url(&self) -> url::Url {
        self.url.clone()
    }

    fn get_resource_type(&self) -> EResourceType {
        EResourceType::RestPose
    }
}

impl Default for RestPose {
    fn default() -> Self {
        Self {
            name: Default::default(),
            id: Default::default(),
            url: default_url().clone(),
            frames: vec![],
        }
    }
}
