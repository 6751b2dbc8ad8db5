use sk_scene::{quat_key::QuatKey, vector_key::VectorKey};

trait KeyTime {
    fn time(&self) -> f64;
}

impl KeyTime for VectorKey {
    fn time(&self) -> f64 {
        self.time
    }
}

impl KeyTime for QuatKey {
    fn time(&self) -> f64 {
        self.time
    }
}

fn find_start_value<K>(keys: &[K], at: f64) -> Option<(usize, f32)>
where
    K: KeyTime,
{
    for (index, key) in keys.iter().enumerate() {
        if key.time() >= at {
            if index == 0 {
                return Some((0, 0.0));
            }
            let start_value = index - 1;
            let delta_time = keys[index].time() - keys[start_value].time();
            if delta_time == 0.0 {
                return Some((start_value, 0.0));
            }
            let lerp = (at - keys[start_value].time()) / delta_time;
            return Some((start_value, lerp as f32));
        }
    }
    None
}

pub fn evaluate_position(keys: &[VectorKey], at: f64) -> glam::Vec3 {
    if keys.is_empty() {
        return glam::Vec3::ZERO;
    }
    if keys.len() == 1 {
        return keys[0].value;
    }
    let Some((start_value, lerp)) = find_start_value(keys, at) else {
        return keys[keys.len() - 1].value;
    };
    let from = keys[start_value].value;
    let to = keys[start_value + 1].value;
    from.lerp(to, lerp)
}

pub fn evaluate_rotation(keys: &[QuatKey], at: f64) -> glam::Quat {
    if keys.is_empty() {
        return glam::Quat::IDENTITY;
    }
    if keys.len() == 1 {
        return keys[0].value;
    }
    let Some((start_value, lerp)) = find_start_value(keys, at) else {
        return keys[keys.len() - 1].value;
    };
    interpolate_rotation(keys[start_value].value, keys[start_value + 1].value, lerp)
}

// component blend with hemisphere alignment, not a great circle interpolation
fn interpolate_rotation(from: glam::Quat, to: glam::Quat, alpha: f32) -> glam::Quat {
    let to = if from.dot(to) < 0.0 { -to } else { to };
    glam::quat(
        from.x + (to.x - from.x) * alpha,
        from.y + (to.y - from.y) * alpha,
        from.z + (to.z - from.z) * alpha,
        from.w + (to.w - from.w) * alpha,
    )
    .normalize()
}
