use crate::vertex_weight::VertexWeight;

#[derive(Clone, Debug)]
pub struct Bone {
    pub name: String,
    pub offset_matrix: glam::Mat4,
    pub weights: Vec<VertexWeight>,
}

impl Bone {
    pub fn new(name: &str, offset_matrix: glam::Mat4) -> Bone {
        Bone {
            name: name.to_string(),
            offset_matrix,
            weights: vec![],
        }
    }
}
