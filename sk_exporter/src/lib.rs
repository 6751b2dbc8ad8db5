pub mod catalog;
pub mod encode;
pub mod error;
pub mod keyframe;
pub mod node_collapse;
pub mod resample;
pub mod settings;
pub mod skeleton;

use crate::{catalog::AnimationCatalogResult, error::Result, settings::ExportSettings};
use sk_artifact::emission::EmissionSink;
use sk_scene::scene::Scene;

pub fn export_scene(
    scene: &Scene,
    used_meshes: &[usize],
    settings: &ExportSettings,
    sink: &mut dyn EmissionSink,
) -> Result<AnimationCatalogResult> {
    let skeleton = skeleton::Skeleton::from_scene(scene, used_meshes, false);
    catalog::generate_animation_catalog(scene, &skeleton, settings, sink)
}
