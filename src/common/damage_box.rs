use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel coordinates, serialized as `[x1, y1, x2, y2]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct DamageBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl From<[f32; 4]> for DamageBox {
    fn from(xyxy: [f32; 4]) -> Self {
        Self::new(xyxy[0], xyxy[1], xyxy[2], xyxy[3])
    }
}

impl From<DamageBox> for [f32; 4] {
    fn from(bbox: DamageBox) -> Self {
        [bbox.x1, bbox.y1, bbox.x2, bbox.y2]
    }
}

impl DamageBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Returns the bounding box coordinates as `(x1, y1, x2, y2)`.
    pub fn xy1_xy2(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        box_area(self)
    }

    /// Area in double precision, for the metrics that get summed and compared
    /// against severity limits.
    pub fn area_f64(&self) -> f64 {
        (f64::from(self.x2) - f64::from(self.x1)) * (f64::from(self.y2) - f64::from(self.y1))
    }

    /// Computes the intersection area between this bounding box and another.
    ///
    /// Each side is clamped at zero before multiplying, so two disjoint boxes
    /// never produce a positive area from two negative extents.
    pub fn intersect(&self, other: &DamageBox) -> f32 {
        let left = self.x1.max(other.x1);
        let top = self.y1.max(other.y1);
        let right = self.x2.min(other.x2);
        let bottom = self.y2.min(other.y2);
        (right - left).max(0.) * (bottom - top).max(0.)
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &DamageBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Computes the intersection over union (IoU) between this bounding box and another.
    pub fn iou(&self, other: &DamageBox) -> f32 {
        overlap_ratio(self, other)
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn enclose(&self, other: &DamageBox) -> DamageBox {
        DamageBox::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn as_xy_wh_i32(&self) -> (i32, i32, i32, i32) {
        (self.x1.round() as i32,
         self.y1.round() as i32,
         self.width().round() as i32,
         self.height().round() as i32)
    }
}

/// Intersection over union of two boxes, in `[0, 1]`.
///
/// Degenerate input (both boxes zero-sized, so the union is zero) yields `0.0`.
pub fn overlap_ratio(box_a: &DamageBox, box_b: &DamageBox) -> f32 {
    let inter = box_a.intersect(box_b);
    let union = box_a.area() + box_b.area() - inter;
    if union == 0. {
        return 0.;
    }
    inter / union
}

pub fn box_area(bbox: &DamageBox) -> f32 {
    (bbox.x2 - bbox.x1) * (bbox.y2 - bbox.y1)
}

/// Area as a percentage of the full image area.
///
/// A zero-sized image has no meaningful percentage; `0.0` is returned and a
/// warning logged rather than producing `inf`/`NaN`.
pub fn relative_area(area: f64, img_width: u32, img_height: u32) -> f64 {
    let img_area = f64::from(img_width) * f64::from(img_height);
    if img_area == 0. {
        log::warn!("Relative area requested for a zero-sized image ({}x{})", img_width, img_height);
        return 0.;
    }
    area / img_area * 100.
}
