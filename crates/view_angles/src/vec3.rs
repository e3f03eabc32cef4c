use std::ops::{Index, IndexMut};

use derive_more::Constructor;

/// World-space direction/position vector. The angle code only ever builds one
/// through `new` or writes components through indexed access.
#[derive(Constructor, Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn at(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
    pub fn at_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        self.at_mut(index)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(components: [f32; 3]) -> Self {
        Vec3::new(components[0], components[1], components[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indexed_access_aliases_fields() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);

        *v.at_mut(2) = 9.5;
        assert_eq!(v.z, 9.5);
        v[0] = -4.0;
        assert_eq!(v.x, -4.0);
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert_eq!(Vec3::ZERO, Vec3::default());
        assert_eq!(Vec3::ZERO, Vec3::from([0.0; 3]));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let v = Vec3::ZERO;
        v.at(3);
    }
}
