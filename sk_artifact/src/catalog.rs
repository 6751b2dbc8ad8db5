use crate::{asset::Asset, default_url, resource_type::EResourceType};
use serde::{Deserialize, Serialize};

pub const BONE_NONE: u16 = 0xFFFF;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnimationClipMeta {
    pub name: String,
    pub first_chunk_size: u16,
    pub ticks_per_second: u16,
    pub max_ticks: u16,
    pub frame_data: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnimationCatalog {
    pub name: String,
    pub id: uuid::Uuid,
    pub url: url::Url,
    pub clips: Vec<AnimationClipMeta>,
    pub bone_parents: Vec<u16>,
}

impl Asset for AnimationCatalog {
    fn get_url(&self) -> url::Url {
        self.url.clone()
    }

    fn get_resource_type(&self) -> EResourceType {
        EResourceType::AnimationCatalog
    }
}

impl Default for AnimationCatalog {
    fn default() -> Self {
        Self {
            name: Default::default(),
            id: Default::default(),
            url: default_url().clone(),
            clips: vec![],
            bone_parents: vec![],
        }
    }
}
