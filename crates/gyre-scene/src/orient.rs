//! Placement orientation for satellite visuals.

use glam::{DMat3, DQuat, DVec3};

/// Rotation that orients a visual at `position` to face the sphere center.
///
/// The returned quaternion maps the object's local +Z axis onto the outward
/// radial direction (so the face pointing down local −Z looks at the
/// center), with local +Y chosen as close to world +Y as the geometry
/// allows. Near the poles, where world +Y is (anti)parallel to the radial
/// direction, world +Z is used as the reference instead.
///
/// A zero `position` has no defined outward direction and yields the
/// identity rotation.
pub fn face_center(position: DVec3) -> DQuat {
    let outward = position.normalize_or_zero();
    if outward == DVec3::ZERO {
        return DQuat::IDENTITY;
    }

    let reference = if outward.y.abs() > 0.999 {
        DVec3::Z
    } else {
        DVec3::Y
    };
    let right = reference.cross(outward).normalize();
    let up = outward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, up, outward))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn local_z_points_outward() {
        for &p in &[
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -7.0),
            DVec3::new(3.0, 4.0, 5.0),
        ] {
            let q = face_center(p);
            assert!(close(q * DVec3::Z, p.normalize()));
        }
    }

    #[test]
    fn rotation_is_orthonormal() {
        let q = face_center(DVec3::new(1.0, 2.0, 3.0));
        assert!((q.length() - 1.0).abs() < 1e-12);
        let x = q * DVec3::X;
        let y = q * DVec3::Y;
        assert!(x.dot(y).abs() < 1e-12);
    }

    #[test]
    fn poles_use_fallback_reference() {
        let north = face_center(DVec3::new(0.0, 5.0, 0.0));
        let south = face_center(DVec3::new(0.0, -5.0, 0.0));
        assert!(close(north * DVec3::Z, DVec3::Y));
        assert!(close(south * DVec3::Z, DVec3::NEG_Y));
        // Quaternions at the poles are still finite and unit length.
        assert!((north.length() - 1.0).abs() < 1e-12);
        assert!((south.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_position_yields_identity() {
        assert_eq!(face_center(DVec3::ZERO), DQuat::IDENTITY);
    }
}
