use glam::Vec2;

/// Per-element transform record shared by the tilt and magnetic effects.
///
/// Each effect owns one component; the CSS `transform` value is always
/// rebuilt from the whole record so neither effect clobbers the other.
/// Components that were never enabled are left out of the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformState {
    perspective_px: Option<f32>,
    translate: Option<Vec2>,
    rotate: Option<Vec2>,
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the tilt component with a neutral rotation.
    pub fn enable_tilt(&mut self, perspective_px: f32) {
        self.perspective_px = Some(perspective_px);
        self.rotate.get_or_insert(Vec2::ZERO);
    }

    /// Enable the magnetic component with zero translation.
    pub fn enable_translate(&mut self) {
        self.translate.get_or_insert(Vec2::ZERO);
    }

    pub fn set_translation(&mut self, offset: Vec2) {
        self.translate = Some(offset);
    }

    /// `angles` is `(rotate_x, rotate_y)` in degrees.
    pub fn set_rotation(&mut self, angles: Vec2) {
        self.rotate = Some(angles);
    }

    pub fn reset_translation(&mut self) {
        if self.translate.is_some() {
            self.translate = Some(Vec2::ZERO);
        }
    }

    pub fn reset_rotation(&mut self) {
        if self.rotate.is_some() {
            self.rotate = Some(Vec2::ZERO);
        }
    }

    pub fn translation(&self) -> Option<Vec2> {
        self.translate
    }

    pub fn rotation(&self) -> Option<Vec2> {
        self.rotate
    }

    pub fn css(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if let Some(p) = self.perspective_px {
            parts.push(format!("perspective({}px)", fmt_num(p)));
        }
        if let Some(t) = self.translate {
            parts.push(format!("translate({}px, {}px)", fmt_num(t.x), fmt_num(t.y)));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotateX({}deg)", fmt_num(r.x)));
            parts.push(format!("rotateY({}deg)", fmt_num(r.y)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

// Two decimals is below a visible pixel/degree; trailing zeros are dropped.
fn fmt_num(v: f32) -> String {
    let v = if v.abs() < 0.005 { 0.0 } else { v };
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
