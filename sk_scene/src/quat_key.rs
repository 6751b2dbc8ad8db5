#[derive(Clone, Copy, Debug)]
pub struct QuatKey {
    pub time: f64,
    pub value: glam::Quat,
}

impl QuatKey {
    pub fn new(time: f64, value: glam::Quat) -> QuatKey {
        QuatKey { time, value }
    }
}
