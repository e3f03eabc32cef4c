use std::ops::{Index, IndexMut};

use derive_more::{Constructor, Neg};

use crate::vec3::Vec3;

pub const PITCH: usize = 0;
pub const YAW: usize = 1;
pub const ROLL: usize = 2;

// First-person camera limits, in degrees. Pitch stops short of straight
// up/down, roll is restricted to a narrow banking range.
const PITCH_CLAMP_DEG: (f32, f32) = (-89.0, 89.0);
const YAW_CLAMP_DEG: (f32, f32) = (-180.0, 180.0);
const ROLL_CLAMP_DEG: (f32, f32) = (-50.0, 50.0);

/// Wrap an angle in degrees into [-180, 180). Values already in range are
/// fixed points, and any whole number of extra turns is discarded, so
/// `wrap_degrees(x + 360.0 * k) == wrap_degrees(x)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Euler view angles in degrees: pitch, yaw, roll.
///
/// Any float triple is a valid value. No range invariant is maintained
/// automatically; `normalize` and `clamp` are explicit operations applied
/// when the caller wants one. Equality is exact component-wise float
/// equality, with the usual IEEE-754 consequences (NaN != NaN).
#[derive(Constructor, Neg, Default, Debug, Copy, Clone, PartialEq)]
pub struct ViewAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

// sin/cos of all three angles, evaluated once per basis extraction and
// shared by every output component.
struct SinCos {
    sp: f32,
    sy: f32,
    sr: f32,
    cp: f32,
    cy: f32,
    cr: f32,
}

impl ViewAngles {
    pub const ZERO: ViewAngles = ViewAngles {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn set(&mut self, pitch: f32, yaw: f32, roll: f32) {
        *self = ViewAngles::new(pitch, yaw, roll);
    }

    /// Component by index: 0 = pitch, 1 = yaw, 2 = roll. Reads and writes
    /// through an index touch the same storage as the named field.
    /// Panics for index > 2.
    pub fn at(&self, index: usize) -> f32 {
        self[index]
    }
    pub fn at_mut(&mut self, index: usize) -> &mut f32 {
        &mut self[index]
    }
    pub fn to_array(self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }

    // Plain 3-vector algebra over the triple. Not rotation-aware; an angle
    // triple here is just three numbers.
    pub fn dot(&self, other: ViewAngles) -> f32 {
        self.pitch * other.pitch + self.yaw * other.yaw + self.roll * other.roll
    }
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }
    pub fn distance_squared(&self, other: ViewAngles) -> f32 {
        (*self - other).length_squared()
    }
    pub fn distance(&self, other: ViewAngles) -> f32 {
        (*self - other).length()
    }
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Wrap every component into [-180, 180). Idempotent.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
    pub fn normalized(&self) -> ViewAngles {
        ViewAngles::new(
            wrap_degrees(self.pitch),
            wrap_degrees(self.yaw),
            wrap_degrees(self.roll),
        )
    }

    /// Hard-clamp to first-person camera limits: pitch to [-89, 89], yaw to
    /// [-180, 180], roll to [-50, 50]. Distinct from `normalize`: clamping
    /// saturates at the bounds instead of wrapping.
    pub fn clamp(&mut self) {
        *self = self.clamped();
    }
    pub fn clamped(&self) -> ViewAngles {
        ViewAngles::new(
            self.pitch.clamp(PITCH_CLAMP_DEG.0, PITCH_CLAMP_DEG.1),
            self.yaw.clamp(YAW_CLAMP_DEG.0, YAW_CLAMP_DEG.1),
            self.roll.clamp(ROLL_CLAMP_DEG.0, ROLL_CLAMP_DEG.1),
        )
    }

    fn sin_cos(&self) -> SinCos {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();
        SinCos {
            sp,
            sy,
            sr,
            cp,
            cy,
            cr,
        }
    }

    /// Basis vectors of the rotation these angles describe. Returns the
    /// forward direction; the side and up directions are written into the
    /// supplied vectors when given. The trig work happens once either way.
    ///
    /// At (0, 0, 0): forward = +x, side = -y, up = +z.
    pub fn to_vectors(&self, side: Option<&mut Vec3>, up: Option<&mut Vec3>) -> Vec3 {
        let t = self.sin_cos();

        if let Some(side) = side {
            *side.at_mut(0) = -t.sr * t.sp * t.cy - t.cr * -t.sy;
            *side.at_mut(1) = -t.sr * t.sp * t.sy - t.cr * t.cy;
            *side.at_mut(2) = -t.sr * t.cp;
        }
        if let Some(up) = up {
            *up.at_mut(0) = t.cr * t.sp * t.cy + -t.sr * -t.sy;
            *up.at_mut(1) = t.cr * t.sp * t.sy + -t.sr * t.cy;
            *up.at_mut(2) = t.cr * t.cp;
        }

        Vec3::new(t.cp * t.cy, t.cp * t.sy, -t.sp)
    }

    /// Transposed-matrix variant of [`to_vectors`](Self::to_vectors) with
    /// the rows and columns of the rotation swapped. The sign placement in
    /// both variants is load-bearing; downstream consumers depend on these
    /// exact conventions, so neither formula should be "simplified".
    ///
    /// At (0, 0, 0): forward = +x, side = +y, up = +z.
    pub fn to_vectors_transposed(&self, side: Option<&mut Vec3>, up: Option<&mut Vec3>) -> Vec3 {
        let t = self.sin_cos();

        if let Some(side) = side {
            *side.at_mut(0) = t.cp * t.sy;
            *side.at_mut(1) = t.sr * t.sp * t.sy + t.cr * t.cy;
            *side.at_mut(2) = t.cr * t.sp * t.sy + -t.sr * t.cy;
        }
        if let Some(up) = up {
            *up.at_mut(0) = -t.sp;
            *up.at_mut(1) = t.sr * t.cp;
            *up.at_mut(2) = t.cr * t.cp;
        }

        Vec3::new(
            t.cp * t.cy,
            t.sr * t.sp * t.cy + t.cr * -t.sy,
            t.cr * t.sp * t.cy + -t.sr * -t.sy,
        )
    }

    pub fn forward(&self) -> Vec3 {
        self.to_vectors(None, None)
    }
}

impl Index<usize> for ViewAngles {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            PITCH => &self.pitch,
            YAW => &self.yaw,
            ROLL => &self.roll,
            _ => panic!("angle component index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for ViewAngles {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            PITCH => &mut self.pitch,
            YAW => &mut self.yaw,
            ROLL => &mut self.roll,
            _ => panic!("angle component index out of range: {}", index),
        }
    }
}

impl From<[f32; 3]> for ViewAngles {
    fn from(components: [f32; 3]) -> Self {
        ViewAngles::new(components[PITCH], components[YAW], components[ROLL])
    }
}

// Component-wise arithmetic. Each operator takes either another angle triple
// or a bare f32 applied to all three components; the assign forms reuse the
// pure ones. Division by zero is left to float semantics.
macro_rules! impl_componentwise_ops {
    ($($OpTrait:ident::$op_fn:ident, $AssignTrait:ident::$assign_fn:ident, $op:tt;)+) => {
        $(
            impl std::ops::$OpTrait for ViewAngles {
                type Output = Self;
                fn $op_fn(self, rhs: Self) -> Self {
                    Self::new(
                        self.pitch $op rhs.pitch,
                        self.yaw $op rhs.yaw,
                        self.roll $op rhs.roll,
                    )
                }
            }
            impl std::ops::$OpTrait<f32> for ViewAngles {
                type Output = Self;
                fn $op_fn(self, rhs: f32) -> Self {
                    Self::new(self.pitch $op rhs, self.yaw $op rhs, self.roll $op rhs)
                }
            }
            impl std::ops::$AssignTrait for ViewAngles {
                fn $assign_fn(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
            impl std::ops::$AssignTrait<f32> for ViewAngles {
                fn $assign_fn(&mut self, rhs: f32) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

impl_componentwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}
