use crate::{quat_key::QuatKey, vector_key::VectorKey};

#[derive(Clone, Debug)]
pub struct NodeAnim {
    pub node: String,
    pub position_keys: Vec<VectorKey>,
    pub rotation_keys: Vec<QuatKey>,
}

impl NodeAnim {
    pub fn new(node: &str) -> NodeAnim {
        NodeAnim {
            node: node.to_string(),
            position_keys: vec![],
            rotation_keys: vec![],
        }
    }
}
