use crate::{keyframe, settings::ExportSettings, skeleton::Skeleton};
use sk_scene::animation::Animation;

#[derive(Clone, Copy, Debug)]
pub struct FrameData {
    pub position: glam::Vec3,
    pub rotation: glam::Quat,
}

impl Default for FrameData {
    fn default() -> Self {
        Self {
            position: glam::Vec3::ZERO,
            rotation: glam::Quat::IDENTITY,
        }
    }
}

pub fn frame_count(
    duration: f64,
    source_ticks_per_second: f64,
    target_ticks_per_second: u16,
) -> usize {
    (duration * target_ticks_per_second as f64 / source_ticks_per_second).ceil() as usize
}

pub fn resample_animation(
    animation: &Animation,
    skeleton: &Skeleton,
    settings: &ExportSettings,
) -> Vec<Vec<FrameData>> {
    let n_frames = frame_count(
        animation.duration,
        animation.ticks_per_second,
        settings.target_ticks_per_second,
    );
    let mut all_frame_data: Vec<Vec<FrameData>> =
        vec![vec![FrameData::default(); skeleton.bone_count()]; n_frames];

    for bone in skeleton.bones() {
        // find the animation channel for the given bone
        let Some(node_anim) = animation.channels.iter().find(|x| x.node == bone.name) else {
            log::trace!(
                "No channel for bone `{}` in animation `{}`, keeping identity.",
                bone.name,
                animation.name
            );
            continue;
        };

        for frame in 0..n_frames {
            let at =
                frame as f64 * animation.ticks_per_second / settings.target_ticks_per_second as f64;

            let mut origin = keyframe::evaluate_position(&node_anim.position_keys, at);
            let mut rotation = keyframe::evaluate_rotation(&node_anim.rotation_keys, at);

            if bone.parent_index.is_none() {
                origin = settings.model_rotation * origin * settings.model_scale;
                rotation = settings.model_rotation * rotation;
            }

            let frame_data = &mut all_frame_data[frame][bone.index];
            frame_data.position = origin * settings.fixed_point_scale;
            frame_data.rotation = rotation;
        }
    }

    all_frame_data
}

#[cfg(test)]
mod test {
    use super::{frame_count, resample_animation};
    use crate::{settings::ExportSettings, skeleton::Skeleton};
    use sk_scene::{
        animation::Animation, bone::Bone, mesh::Mesh, node::Node, node_anim::NodeAnim,
        quat_key::QuatKey, scene::Scene, vector_key::VectorKey,
    };

    fn build_scene() -> Scene {
        let mut scene = Scene::new("test");
        let root = scene.add_node(None, Node::new("root", glam::Mat4::IDENTITY));
        let hip = scene.add_node(Some(&root), Node::new("hip", glam::Mat4::IDENTITY));
        let _ = scene.add_node(Some(&hip), Node::new("arm", glam::Mat4::IDENTITY));

        let mut mesh = Mesh::new("body");
        mesh.bones.push(Bone::new("hip", glam::Mat4::IDENTITY));
        mesh.bones.push(Bone::new("arm", glam::Mat4::IDENTITY));
        scene.meshes.push(mesh);
        scene
    }

    #[test]
    fn test_case_frame_count() {
        assert_eq!(frame_count(10.0, 24.0, 30), 13);
        assert_eq!(frame_count(24.0, 24.0, 24), 24);
        assert_eq!(frame_count(0.0, 24.0, 30), 0);
    }

    #[test]
    fn test_case_missing_channel_keeps_identity() {
        let mut scene = build_scene();
        let mut animation = Animation::new("idle", 2.0, 1.0);
        let mut channel = NodeAnim::new("hip");
        channel
            .position_keys
            .push(VectorKey::new(0.0, glam::vec3(1.0, 0.0, 0.0)));
        animation.channels.push(channel);
        scene.animations.push(animation);

        let skeleton = Skeleton::from_scene(&scene, &[0], false);
        let settings = ExportSettings {
            target_ticks_per_second: 1,
            fixed_point_scale: 1.0,
            ..Default::default()
        };
        let frames = resample_animation(&scene.animations[0], &skeleton, &settings);
        assert_eq!(frames.len(), 2);
        for frame in &frames {
            assert_eq!(frame[1].position, glam::Vec3::ZERO);
            assert_eq!(frame[1].rotation, glam::Quat::IDENTITY);
        }
    }

    #[test]
    fn test_case_root_correction_applies_per_frame() {
        let mut scene = build_scene();
        let mut animation = Animation::new("turn", 2.0, 1.0);
        let mut channel = NodeAnim::new("hip");
        channel
            .position_keys
            .push(VectorKey::new(0.0, glam::vec3(1.0, 0.0, 0.0)));
        channel
            .rotation_keys
            .push(QuatKey::new(0.0, glam::Quat::IDENTITY));
        channel.rotation_keys.push(QuatKey::new(
            1.0,
            glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        ));
        animation.channels.push(channel);
        scene.animations.push(animation);

        let skeleton = Skeleton::from_scene(&scene, &[0], false);
        let model_rotation = glam::Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let settings = ExportSettings {
            target_ticks_per_second: 1,
            fixed_point_scale: 1.0,
            model_scale: 2.0,
            model_rotation,
        };
        let frames = resample_animation(&scene.animations[0], &skeleton, &settings);
        assert_eq!(frames.len(), 2);

        // the correction is composed with the evaluated value on every frame
        let expected_position = model_rotation * glam::vec3(1.0, 0.0, 0.0) * 2.0;
        assert!(frames[0][0].position.abs_diff_eq(expected_position, 1.0e-5));
        assert!(frames[1][0].position.abs_diff_eq(expected_position, 1.0e-5));

        assert!(frames[0][0].rotation.dot(model_rotation).abs() > 0.9999);
        let expected_frame_1 =
            model_rotation * glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        assert!(frames[1][0].rotation.dot(expected_frame_1).abs() > 0.9999);
    }

    #[test]
    fn test_case_fixed_point_scale_applies_to_all_bones() {
        let mut scene = build_scene();
        let mut animation = Animation::new("shift", 1.0, 1.0);
        let mut channel = NodeAnim::new("arm");
        channel
            .position_keys
            .push(VectorKey::new(0.0, glam::vec3(1.5, -2.25, 3.0)));
        animation.channels.push(channel);
        scene.animations.push(animation);

        let skeleton = Skeleton::from_scene(&scene, &[0], false);
        let settings = ExportSettings {
            target_ticks_per_second: 1,
            fixed_point_scale: 256.0,
            ..Default::default()
        };
        let frames = resample_animation(&scene.animations[0], &skeleton, &settings);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][1].position, glam::vec3(384.0, -576.0, 768.0));
    }
}
