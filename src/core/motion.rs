use glam::Vec2;

#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Eased cursor position: `target` follows the pointer, `current` chases it
/// a fixed fraction per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
}

impl PointerState {
    pub fn at(pos: Vec2) -> Self {
        Self {
            current: pos,
            target: pos,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one frame and return the new current position.
    pub fn step(&mut self, factor: f32) -> Vec2 {
        self.current = Vec2::new(
            lerp(self.current.x, self.target.x, factor),
            lerp(self.current.y, self.target.y, factor),
        );
        self.current
    }
}

/// Axis-aligned element bounds in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Pointer position relative to the top-left corner.
    #[inline]
    pub fn local(&self, client: Vec2) -> Vec2 {
        client - self.origin
    }

    /// Pointer offset from the center, scaled so the edges map to -1 and 1.
    /// Degenerate (zero-sized) axes report 0.
    pub fn normalized_offset(&self, client: Vec2) -> Vec2 {
        let half = self.size * 0.5;
        let d = client - self.center();
        let nx = if half.x > 0.0 { d.x / half.x } else { 0.0 };
        let ny = if half.y > 0.0 { d.y / half.y } else { 0.0 };
        Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
    }
}

/// Tilt rotation in degrees as `(rotate_x, rotate_y)`.
/// Pointer below center tips the top edge toward the viewer.
pub fn tilt_angles(bounds: &Bounds, client: Vec2, max_deg: f32) -> Vec2 {
    let n = bounds.normalized_offset(client);
    Vec2::new(-n.y * max_deg, n.x * max_deg)
}

/// Translation pulling an element toward the pointer.
#[inline]
pub fn magnetic_offset(bounds: &Bounds, client: Vec2, strength: f32) -> Vec2 {
    (client - bounds.center()) * strength
}

#[inline]
pub fn parallax_offset(scroll_y: f64, factor: f32) -> f32 {
    scroll_y as f32 * factor
}

#[inline]
pub fn is_mobile_viewport(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Placement of a ripple element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f32,
    pub left: f32,
    pub top: f32,
    pub mobile: bool,
}

impl RippleGeometry {
    /// Center a ripple on a click. `client` is viewport-relative, so the
    /// vertical scroll offset is added to land in document space.
    pub fn centered_at(client: Vec2, scroll_y: f64, mobile: bool, sizes: (f32, f32)) -> Self {
        let (desktop, phone) = sizes;
        let size = if mobile { phone } else { desktop };
        let y = client.y + scroll_y as f32;
        Self {
            size,
            left: client.x - size / 2.0,
            top: y - size / 2.0,
            mobile,
        }
    }
}
