use crate::{resample, settings::ExportSettings, skeleton::Skeleton};
use sk_artifact::{
    bone_frame::QuantizedBoneFrame,
    catalog::AnimationClipMeta,
    clip::AnimationClip,
    emission::{DataChunk, EPrimitive, EmissionSink, RecordDefinition},
};
use sk_scene::animation::Animation;

pub const BONE_FRAME_TYPE_NAME: &str = "AnimationBoneFrame";
pub const CLIP_TYPE_NAME: &str = "AnimationClip";

pub struct EncodedAnimation {
    pub clip: AnimationClip,
    pub meta: AnimationClipMeta,
}

pub fn bone_frame_chunk(frame: &QuantizedBoneFrame) -> DataChunk {
    let mut position_data = DataChunk::structure();
    position_data.add_primitive(EPrimitive::I16(frame.position[0]));
    position_data.add_primitive(EPrimitive::I16(frame.position[1]));
    position_data.add_primitive(EPrimitive::I16(frame.position[2]));

    let mut rotation_data = DataChunk::structure();
    rotation_data.add_primitive(EPrimitive::I16(frame.rotation[0]));
    rotation_data.add_primitive(EPrimitive::I16(frame.rotation[1]));
    rotation_data.add_primitive(EPrimitive::I16(frame.rotation[2]));

    let mut frame_data = DataChunk::structure();
    frame_data.add(position_data);
    frame_data.add(rotation_data);
    frame_data
}

pub fn encode_animation(
    animation: &Animation,
    skeleton: &Skeleton,
    settings: &ExportSettings,
    sink: &mut dyn EmissionSink,
) -> EncodedAnimation {
    let all_frame_data = resample::resample_animation(animation, skeleton, settings);
    let frame_count = all_frame_data.len();
    let bone_count = skeleton.bone_count();

    let mut frames: Vec<QuantizedBoneFrame> = Vec::with_capacity(frame_count * bone_count);
    let mut frames_chunk = DataChunk::structure();
    for frame in &all_frame_data {
        for frame_bone in frame {
            let quantized =
                QuantizedBoneFrame::quantize(frame_bone.position, frame_bone.rotation);
            frames_chunk.add(bone_frame_chunk(&quantized));
            frames.push(quantized);
        }
    }

    let name = sink.get_unique_name(&animation.name);
    let frames_name = sink.get_unique_name(&format!("{}_data", name));
    sink.add_record(RecordDefinition {
        name: frames_name.clone(),
        type_name: BONE_FRAME_TYPE_NAME.to_string(),
        is_array: true,
        chunk: frames_chunk,
    });

    let mut clip_chunk = DataChunk::structure();
    clip_chunk.add_primitive(EPrimitive::U16(frame_count as u16));
    clip_chunk.add_primitive(EPrimitive::U16(bone_count as u16));
    clip_chunk.add_primitive(EPrimitive::Reference(frames_name.clone()));
    clip_chunk.add_primitive(EPrimitive::U16(settings.target_ticks_per_second));
    let clip_name = sink.get_unique_name(&format!("{}_clip", name));
    sink.add_record(RecordDefinition {
        name: clip_name,
        type_name: CLIP_TYPE_NAME.to_string(),
        is_array: false,
        chunk: clip_chunk,
    });

    let clip = AnimationClip {
        name: name.clone(),
        id: uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, name.as_bytes()),
        url: sk_artifact::build_asset_url("animation_clip", &name),
        frame_count: frame_count as u16,
        bone_count: bone_count as u16,
        ticks_per_second: settings.target_ticks_per_second,
        frames,
    };
    let meta = AnimationClipMeta {
        name,
        first_chunk_size: clip.frame_size_in_bytes() as u16,
        ticks_per_second: settings.target_ticks_per_second,
        max_ticks: frame_count as u16,
        frame_data: frames_name,
    };
    EncodedAnimation { clip, meta }
}
