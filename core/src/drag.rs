pub const ROTATION_LIMIT_DEG: f64 = 45.0;
pub const CLICK_SLOP_PX: f64 = 5.0;
pub const TORQUE_GAIN: f64 = 0.06;

// Pointer position relative to the element center, normalized to [-1, 1]
// per axis.
pub fn grab_offset(
    pointer_x: f64,
    pointer_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> (f64, f64) {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return (0.0, 0.0);
    }
    let cx = rect_left + rect_width / 2.0;
    let cy = rect_top + rect_height / 2.0;
    (
        (pointer_x - cx) / (rect_width / 2.0),
        (pointer_y - cy) / (rect_height / 2.0),
    )
}

// Grabs near a corner twist more than grabs near the center.
pub fn drag_rotation(grab_nx: f64, grab_ny: f64, dx: f64, dy: f64) -> f64 {
    let corner = (grab_nx * grab_nx + grab_ny * grab_ny).sqrt() / std::f64::consts::SQRT_2;
    let torque = dx * -grab_ny + dy * grab_nx;
    corner * torque * TORQUE_GAIN
}

pub fn clamp_rotation(deg: f64) -> f64 {
    deg.clamp(-ROTATION_LIMIT_DEG, ROTATION_LIMIT_DEG)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Pinned,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    pub tap: bool,
}

// Position and rotation always hold the free values: pinning never
// overwrites them, so leaving pinned mode returns the element to wherever
// it was last dragged.
#[derive(Clone, Debug)]
pub struct DragModel {
    phase: DragPhase,
    x: f64,
    y: f64,
    rotation: f64,
    offset_x: f64,
    offset_y: f64,
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
    grab_nx: f64,
    grab_ny: f64,
}

impl DragModel {
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            x,
            y,
            rotation: clamp_rotation(rotation),
            offset_x: 0.0,
            offset_y: 0.0,
            start_x: 0.0,
            start_y: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            grab_nx: 0.0,
            grab_ny: 0.0,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn begin(&mut self, pointer_x: f64, pointer_y: f64, grab_nx: f64, grab_ny: f64) -> bool {
        if self.phase != DragPhase::Idle {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.offset_x = pointer_x - self.x;
        self.offset_y = pointer_y - self.y;
        self.start_x = pointer_x;
        self.start_y = pointer_y;
        self.last_x = pointer_x;
        self.last_y = pointer_y;
        self.grab_nx = grab_nx;
        self.grab_ny = grab_ny;
        true
    }

    pub fn update(&mut self, pointer_x: f64, pointer_y: f64) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        self.x = pointer_x - self.offset_x;
        self.y = pointer_y - self.offset_y;

        let dx = pointer_x - self.last_x;
        let dy = pointer_y - self.last_y;
        self.last_x = pointer_x;
        self.last_y = pointer_y;

        let dr = drag_rotation(self.grab_nx, self.grab_ny, dx, dy);
        self.rotation = clamp_rotation(self.rotation + dr);
        true
    }

    // While pinned the gesture is always a tap; drag tracking is disabled.
    pub fn release(&mut self, pointer_x: f64, pointer_y: f64) -> Option<DragEnd> {
        match self.phase {
            DragPhase::Pinned => Some(DragEnd { tap: true }),
            DragPhase::Idle => None,
            DragPhase::Dragging => {
                self.phase = DragPhase::Idle;
                let dx = pointer_x - self.start_x;
                let dy = pointer_y - self.start_y;
                let tap = (dx * dx + dy * dy).sqrt() < CLICK_SLOP_PX;
                Some(DragEnd { tap })
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == DragPhase::Dragging {
            self.phase = DragPhase::Idle;
        }
    }

    pub fn pin(&mut self) {
        self.phase = DragPhase::Pinned;
    }

    pub fn unpin(&mut self) {
        if self.phase == DragPhase::Pinned {
            self.phase = DragPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_release_is_a_tap() {
        let mut model = DragModel::new(100.0, 100.0, 0.0);
        assert!(model.begin(110.0, 110.0, 0.2, 0.2));
        model.update(112.0, 111.0);
        let end = model.release(112.0, 111.0).unwrap();
        assert!(end.tap);
        assert_eq!(model.phase(), DragPhase::Idle);
    }

    #[test]
    fn long_release_is_a_drag() {
        let mut model = DragModel::new(100.0, 100.0, 0.0);
        assert!(model.begin(110.0, 110.0, 0.0, 0.0));
        model.update(140.0, 150.0);
        let end = model.release(140.0, 150.0).unwrap();
        assert!(!end.tap);
        assert_eq!(model.position(), (130.0, 140.0));
    }

    #[test]
    fn displacement_just_under_slop_still_taps() {
        let mut model = DragModel::new(0.0, 0.0, 0.0);
        model.begin(0.0, 0.0, 0.0, 0.0);
        model.update(3.0, 3.0);
        assert!(model.release(3.0, 3.0).unwrap().tap);

        let mut model = DragModel::new(0.0, 0.0, 0.0);
        model.begin(0.0, 0.0, 0.0, 0.0);
        model.update(4.0, 3.0);
        assert!(!model.release(4.0, 3.0).unwrap().tap);
    }

    #[test]
    fn rotation_never_exceeds_limit() {
        let mut model = DragModel::new(0.0, 0.0, 40.0);
        model.begin(0.0, 0.0, 1.0, 1.0);
        for step in 1..100 {
            model.update(step as f64 * 500.0, -(step as f64) * 500.0);
            assert!(model.rotation().abs() <= ROTATION_LIMIT_DEG);
        }
        assert_eq!(model.rotation(), ROTATION_LIMIT_DEG);
    }

    #[test]
    fn torque_scales_with_grab_distance_from_center() {
        assert_eq!(drag_rotation(0.0, 0.0, 300.0, -200.0), 0.0);
        let near_edge = drag_rotation(1.0, 0.0, 0.0, 10.0);
        let near_center = drag_rotation(0.25, 0.0, 0.0, 10.0);
        assert!(near_center > 0.0);
        assert!(near_edge > near_center);
    }

    #[test]
    fn pinned_rejects_drag_and_always_taps() {
        let mut model = DragModel::new(50.0, 60.0, 5.0);
        model.pin();
        assert!(!model.begin(0.0, 0.0, 0.0, 0.0));
        assert!(model.release(400.0, 400.0).unwrap().tap);
        assert_eq!(model.phase(), DragPhase::Pinned);
    }

    #[test]
    fn unpin_restores_last_free_position() {
        let mut model = DragModel::new(50.0, 60.0, 5.0);
        model.begin(50.0, 60.0, 0.0, 0.0);
        model.update(200.0, 220.0);
        model.release(200.0, 220.0);
        model.pin();
        model.unpin();
        assert_eq!(model.phase(), DragPhase::Idle);
        assert_eq!(model.position(), (200.0, 220.0));
    }

    #[test]
    fn cancel_aborts_without_tap() {
        let mut model = DragModel::new(0.0, 0.0, 0.0);
        model.begin(0.0, 0.0, 0.0, 0.0);
        model.cancel();
        assert_eq!(model.phase(), DragPhase::Idle);
        assert_eq!(model.release(0.0, 0.0), None);
    }

    #[test]
    fn grab_offset_normalizes_to_unit_square() {
        let (nx, ny) = grab_offset(10.0, 10.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!((nx, ny), (-0.8, -0.8));
        let (nx, ny) = grab_offset(50.0, 50.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!((nx, ny), (0.0, 0.0));
        assert_eq!(grab_offset(5.0, 5.0, 0.0, 0.0, 0.0, 10.0), (0.0, 0.0));
    }
}
