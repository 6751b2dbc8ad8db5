use crate::bone::Bone;

#[derive(Clone, Debug)]
pub struct Mesh {
    pub name: String,
    pub bones: Vec<Bone>,
}

impl Mesh {
    pub fn new(name: &str) -> Mesh {
        Mesh {
            name: name.to_string(),
            bones: vec![],
        }
    }
}
