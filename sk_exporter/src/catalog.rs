use crate::{
    encode::{self, EncodedAnimation},
    error::{Error, Result},
    settings::ExportSettings,
    skeleton::Skeleton,
};
use sk_artifact::{
    bone_frame::QuantizedBoneFrame,
    catalog::{AnimationCatalog, AnimationClipMeta, BONE_NONE},
    clip::{AnimationClip, RestPose},
    emission::{macro_case, DataChunk, EPrimitive, EmissionSink, RecordDefinition},
};
use sk_scene::scene::Scene;

pub const ATTACHMENT_PREFIX: &str = "attachment ";
pub const CATALOG_TYPE_NAME: &str = "AnimationHeader";
pub const BONE_PARENT_TYPE_NAME: &str = "u16";

pub struct AnimationCatalogResult {
    pub catalog: AnimationCatalog,
    pub clips: Vec<AnimationClip>,
    pub rest_pose: RestPose,
    pub initial_pose_reference: String,
    pub bone_parent_reference: String,
    pub bone_count_macro: String,
    pub attachment_count_macro: String,
}

pub fn generate_animation_catalog(
    scene: &Scene,
    skeleton: &Skeleton,
    settings: &ExportSettings,
    sink: &mut dyn EmissionSink,
) -> Result<AnimationCatalogResult> {
    let bones_name = sink.get_unique_name("default_bones");
    let bone_parent_name = sink.get_unique_name("bone_parent");

    let mut rest_frames: Vec<QuantizedBoneFrame> = Vec::with_capacity(skeleton.bone_count());
    let mut rest_chunk = DataChunk::structure();
    for bone in skeleton.bones() {
        let (_, rotation, translation) = bone.transformation.to_scale_rotation_translation();
        let mut origin = translation;
        let mut rotation = rotation;
        if bone.parent_index.is_none() {
            origin = settings.model_rotation * origin * settings.model_scale;
            rotation = settings.model_rotation * rotation;
        }
        let quantized =
            QuantizedBoneFrame::quantize(origin * settings.fixed_point_scale, rotation);
        rest_chunk.add(encode::bone_frame_chunk(&quantized));
        rest_frames.push(quantized);
    }
    sink.add_record(RecordDefinition {
        name: bones_name.clone(),
        type_name: encode::BONE_FRAME_TYPE_NAME.to_string(),
        is_array: true,
        chunk: rest_chunk,
    });
    let bone_count_macro = macro_case(&format!("{}_COUNT", bones_name));
    sink.add_macro(&bone_count_macro, skeleton.bone_count() as u32);

    let mut clips: Vec<AnimationClip> = vec![];
    let mut metas: Vec<AnimationClipMeta> = vec![];
    let mut index: u32 = 0;
    for animation in &scene.animations {
        let has_usable_channel = animation
            .channels
            .iter()
            .any(|x| skeleton.bone_by_name(&x.node).is_some());
        if !has_usable_channel {
            log::trace!(
                "Animation `{}` has no channel targeting a bone, skipping.",
                animation.name
            );
            continue;
        }

        let EncodedAnimation { clip, meta } =
            encode::encode_animation(animation, skeleton, settings, sink);
        sink.add_macro(&macro_case(&format!("{}_INDEX", meta.name)), index);
        index += 1;
        clips.push(clip);
        metas.push(meta);
    }

    let animations_name = sink.get_unique_name("animations");
    let mut animations_chunk = DataChunk::structure();
    for meta in &metas {
        let mut animation_chunk = DataChunk::structure();
        animation_chunk.add_primitive(EPrimitive::U16(meta.first_chunk_size));
        animation_chunk.add_primitive(EPrimitive::U16(meta.ticks_per_second));
        animation_chunk.add_primitive(EPrimitive::U16(meta.max_ticks));
        animation_chunk.add_primitive(EPrimitive::Reference(meta.frame_data.clone()));
        animations_chunk.add(animation_chunk);
    }
    sink.add_record(RecordDefinition {
        name: animations_name.clone(),
        type_name: CATALOG_TYPE_NAME.to_string(),
        is_array: true,
        chunk: animations_chunk,
    });

    let mut bone_parents: Vec<u16> = Vec::with_capacity(skeleton.bone_count());
    let mut bone_parent_chunk = DataChunk::structure();
    for bone in skeleton.bones() {
        let parent = match bone.parent_index {
            Some(parent_index) => {
                if parent_index >= bone.index {
                    return Err(Error::BoneOrderViolation(Some(format!(
                        "Bone `{}` at index {} has parent index {}.",
                        bone.name, bone.index, parent_index
                    ))));
                }
                parent_index as u16
            }
            None => BONE_NONE,
        };
        bone_parent_chunk.add_primitive(EPrimitive::U16(parent));
        bone_parents.push(parent);
    }
    sink.add_record(RecordDefinition {
        name: bone_parent_name.clone(),
        type_name: BONE_PARENT_TYPE_NAME.to_string(),
        is_array: true,
        chunk: bone_parent_chunk,
    });

    let mut attachment_count: u32 = 0;
    for bone in skeleton.bones() {
        if let Some(suffix) = bone.name.strip_prefix(ATTACHMENT_PREFIX) {
            sink.add_macro(
                &macro_case(&format!("ATTACHMENT_{}", suffix)),
                attachment_count,
            );
            attachment_count += 1;
        }
    }
    let attachment_count_macro = String::from("ATTACHMENT_COUNT");
    sink.add_macro(&attachment_count_macro, attachment_count);

    let catalog = AnimationCatalog {
        name: animations_name.clone(),
        id: uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, animations_name.as_bytes()),
        url: sk_artifact::build_asset_url("animation_catalog", &animations_name),
        clips: metas,
        bone_parents,
    };
    let rest_pose = RestPose {
        name: bones_name.clone(),
        id: uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, bones_name.as_bytes()),
        url: sk_artifact::build_asset_url("rest_pose", &bones_name),
        frames: rest_frames,
    };

    Ok(AnimationCatalogResult {
        catalog,
        clips,
        rest_pose,
        initial_pose_reference: bones_name,
        bone_parent_reference: bone_parent_name,
        bone_count_macro,
        attachment_count_macro,
    })
}
