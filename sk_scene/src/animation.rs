use crate::node_anim::NodeAnim;

#[derive(Clone, Debug)]
pub struct Animation {
    pub name: String,
    pub duration: f64,
    pub ticks_per_second: f64,
    pub channels: Vec<NodeAnim>,
}

impl Animation {
    pub fn new(name: &str, duration: f64, ticks_per_second: f64) -> Animation {
        Animation {
            name: name.to_string(),
            duration,
            ticks_per_second,
            channels: vec![],
        }
    }
}
