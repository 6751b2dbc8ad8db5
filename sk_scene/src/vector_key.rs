#[derive(Clone, Copy, Debug)]
pub struct VectorKey {
    pub time: f64,
    pub value: glam::Vec3,
}

impl VectorKey {
    pub fn new(time: f64, value: glam::Vec3) -> VectorKey {
        VectorKey { time, value }
    }
}
