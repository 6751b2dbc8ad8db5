use sk_scene::{node::Node, scene::Scene};
use std::{cell::RefCell, collections::HashSet, rc::Rc};

#[derive(Clone, Debug)]
pub struct SkeletonBone {
    pub name: String,
    pub index: usize,
    pub parent_index: Option<usize>,
    pub transformation: glam::Mat4,
}

pub struct Skeleton {
    bones: Vec<SkeletonBone>,
}

impl Skeleton {
    pub fn from_scene(scene: &Scene, used_meshes: &[usize], include_animated: bool) -> Skeleton {
        let mut skin_names: HashSet<String> = HashSet::new();
        for mesh_index in used_meshes {
            let Some(mesh) = scene.meshes.get(*mesh_index) else {
                log::warn!("Mesh index {} is out of range.", mesh_index);
                continue;
            };
            for bone in &mesh.bones {
                skin_names.insert(bone.name.clone());
            }
        }

        let mut animated_names: HashSet<String> = HashSet::new();
        for animation in &scene.animations {
            for channel in &animation.channels {
                animated_names.insert(channel.node.clone());
            }
        }

        let mut bones: Vec<SkeletonBone> = vec![];
        if let Some(root_node) = &scene.root_node {
            Self::search_nodes(
                root_node,
                &skin_names,
                &animated_names,
                include_animated,
                None,
                false,
                &mut bones,
            );
        }
        Skeleton { bones }
    }

    fn search_nodes(
        node: &Rc<RefCell<Node>>,
        skin_names: &HashSet<String>,
        animated_names: &HashSet<String>,
        include_animated: bool,
        parent_bone: Option<usize>,
        parent_animated: bool,
        bones: &mut Vec<SkeletonBone>,
    ) {
        let name = node.borrow().name.clone();
        let is_animated = parent_animated || animated_names.contains(&name);
        let is_bone = skin_names.contains(&name) || (include_animated && is_animated);

        let mut nearest_bone = parent_bone;
        if is_bone {
            let index = bones.len();
            bones.push(SkeletonBone {
                name,
                index,
                parent_index: parent_bone,
                transformation: node.borrow().transformation,
            });
            nearest_bone = Some(index);
        }

        let children = node.borrow().children.clone();
        for child in &children {
            Self::search_nodes(
                child,
                skin_names,
                animated_names,
                include_animated,
                nearest_bone,
                is_animated,
                bones,
            );
        }
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn bones(&self) -> &[SkeletonBone] {
        &self.bones
    }

    pub fn bone_by_index(&self, index: usize) -> Option<&SkeletonBone> {
        self.bones.get(index)
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&SkeletonBone> {
        self.bones.iter().find(|x| x.name == name)
    }
}
