use crate::settings::ExportSettings;
use sk_scene::{
    node::Node,
    scene::{walk_node, Scene},
};
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

pub struct AnimatedNodeInfo {
    pub node: Rc<RefCell<Node>>,
    pub parent: Option<Rc<RefCell<Node>>>,
    pub relative_transform: glam::Mat4,
}

pub fn find_animated_nodes(
    scene: &Scene,
    used_meshes: &[usize],
    settings: &ExportSettings,
) -> Vec<AnimatedNodeInfo> {
    let mut animated_names: HashSet<String> = HashSet::new();
    for animation in &scene.animations {
        for channel in &animation.channels {
            animated_names.insert(channel.node.clone());
        }
    }
    for mesh_index in used_meshes {
        let Some(mesh) = scene.meshes.get(*mesh_index) else {
            log::warn!("Mesh index {} is out of range.", mesh_index);
            continue;
        };
        for bone in &mesh.bones {
            animated_names.insert(bone.name.clone());
        }
    }

    let mut node_order: HashMap<String, usize> = HashMap::new();
    let mut animated_paths: HashSet<String> = HashSet::new();
    let mut animated_nodes: Vec<Rc<RefCell<Node>>> = vec![];
    if let Some(root_node) = &scene.root_node {
        walk_node(root_node, &mut |node| {
            let path = node.borrow().path.clone();
            if animated_names.contains(&node.borrow().name) {
                animated_paths.insert(path.clone());
                animated_nodes.push(node.clone());
            }
            let order = node_order.len();
            node_order.insert(path, order);
        });
    }

    let mut result: Vec<AnimatedNodeInfo> = vec![];
    for node in &animated_nodes {
        let mut relative_transform = glam::Mat4::IDENTITY;
        let mut current = node.clone();
        loop {
            let parent = current.borrow().parent.as_ref().and_then(|x| x.upgrade());
            match parent {
                Some(parent) if !animated_paths.contains(&parent.borrow().path) => {
                    relative_transform = parent.borrow().transformation * relative_transform;
                    current = parent;
                }
                _ => break,
            }
        }
        let parent = current.borrow().parent.as_ref().and_then(|x| x.upgrade());
        if parent.is_none() {
            relative_transform = settings.global_correction() * relative_transform;
        }
        result.push(AnimatedNodeInfo {
            node: node.clone(),
            parent,
            relative_transform,
        });
    }

    result.sort_by_key(|x| {
        node_order
            .get(x.node.borrow().path.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });
    result
}

#[cfg(test)]
mod test {
    use super::find_animated_nodes;
    use crate::settings::ExportSettings;
    use sk_scene::{animation::Animation, node::Node, node_anim::NodeAnim, scene::Scene};

    fn translation(x: f32, y: f32, z: f32) -> glam::Mat4 {
        glam::Mat4::from_translation(glam::vec3(x, y, z))
    }

    #[test]
    fn test_case_collapse_intermediate_nodes() {
        let mut scene = Scene::new("test");
        let root = scene.add_node(None, Node::new("root", glam::Mat4::IDENTITY));
        let skip_0 = scene.add_node(Some(&root), Node::new("skip_0", translation(1.0, 0.0, 0.0)));
        let skip_1 = scene.add_node(Some(&skip_0), Node::new("skip_1", translation(0.0, 2.0, 0.0)));
        let _ = scene.add_node(Some(&skip_1), Node::new("leaf", translation(5.0, 5.0, 5.0)));

        let mut animation = Animation::new("move", 1.0, 24.0);
        animation.channels.push(NodeAnim::new("leaf"));
        scene.animations.push(animation);

        let infos = find_animated_nodes(&scene, &[], &ExportSettings::default());
        assert_eq!(infos.len(), 1);
        let info = &infos[0];
        assert!(info.parent.is_none());

        // the leaf's own transform is not part of the relative transform
        let expected = translation(1.0, 2.0, 0.0);
        assert!(info
            .relative_transform
            .abs_diff_eq(expected, f32::EPSILON * 4.0));
    }

    #[test]
    fn test_case_stops_at_animated_ancestor() {
        let mut scene = Scene::new("test");
        let root = scene.add_node(None, Node::new("root", glam::Mat4::IDENTITY));
        let hip = scene.add_node(Some(&root), Node::new("hip", translation(0.0, 1.0, 0.0)));
        let skip = scene.add_node(Some(&hip), Node::new("skip", translation(3.0, 0.0, 0.0)));
        let _ = scene.add_node(Some(&skip), Node::new("leaf", glam::Mat4::IDENTITY));

        let mut animation = Animation::new("move", 1.0, 24.0);
        animation.channels.push(NodeAnim::new("hip"));
        animation.channels.push(NodeAnim::new("leaf"));
        scene.animations.push(animation);

        let infos = find_animated_nodes(&scene, &[], &ExportSettings::default());
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].node.borrow().name, "hip");
        assert_eq!(infos[1].node.borrow().name, "leaf");

        let leaf = &infos[1];
        let parent = leaf.parent.as_ref().unwrap();
        assert_eq!(parent.borrow().name, "hip");
        assert!(leaf
            .relative_transform
            .abs_diff_eq(translation(3.0, 0.0, 0.0), f32::EPSILON * 4.0));
    }

    #[test]
    fn test_case_root_correction() {
        let mut scene = Scene::new("test");
        let _ = scene.add_node(None, Node::new("root", translation(0.0, 0.0, 4.0)));

        let mut animation = Animation::new("move", 1.0, 24.0);
        animation.channels.push(NodeAnim::new("root"));
        scene.animations.push(animation);

        let settings = ExportSettings {
            model_scale: 2.0,
            ..Default::default()
        };
        let infos = find_animated_nodes(&scene, &[], &settings);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].parent.is_none());
        assert!(infos[0]
            .relative_transform
            .abs_diff_eq(glam::Mat4::from_scale(glam::Vec3::splat(2.0)), f32::EPSILON * 4.0));
    }
}
