//! Elementary active rotations on `nalgebra` matrices, generic over the scalar.

use nalgebra::{Matrix3, Vector3};

use crate::math::Real;

/// Rotation by `angle` about the z axis.
pub fn rot_z<T: Real>(angle: T) -> Matrix3<T> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(c, -s, o, s, c, o, o, o, l)
}

/// Rotation by `angle` about the y axis.
pub fn rot_y<T: Real>(angle: T) -> Matrix3<T> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(c, o, s, o, l, o, -s, o, c)
}

/// Euclidean length; `Vector3::norm` needs a real-field bound the dual scalar lacks.
pub fn norm<T: Real>(v: &Vector3<T>) -> T {
    v.dot(v).sqrt()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::math::Dual;

    #[test]
    fn quarter_turns_move_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = rot_z(FRAC_PI_2) * x;
        assert!((y - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-15);

        let z = Vector3::new(0.0, 0.0, 1.0);
        let to_x = rot_y(FRAC_PI_2) * z;
        assert!((to_x - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn product_matches_sequential_application() {
        let v = Vector3::new(0.3, -0.4, 0.8);
        let (a, b) = (rot_z(0.7), rot_y(-1.1));
        let seq = a * (b * v);
        let once = (a * b) * v;
        assert!((seq - once).norm() < 1e-14);
        assert!((norm(&once) - v.norm()).abs() < 1e-14);
    }

    #[test]
    fn rotations_compose_on_dual_scalars() {
        let angle = Dual::new(0.4, 1.0);
        let v = Vector3::new(Dual::from_real(1.0), Dual::from_real(0.0), Dual::from_real(0.0));
        let turned = (rot_y(Dual::from_real(0.0)) * rot_z(angle)) * v;
        // d/dθ (cos θ, sin θ, 0) = (-sin θ, cos θ, 0)
        assert!((turned[0].dual() + 0.4_f64.sin()).abs() < 1e-14);
        assert!((turned[1].dual() - 0.4_f64.cos()).abs() < 1e-14);
        assert!((norm(&turned).real() - 1.0).abs() < 1e-14);
        assert!(norm(&turned).dual().abs() < 1e-14);
    }
}
