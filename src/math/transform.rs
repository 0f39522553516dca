use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Principal axis a rotation is taken about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Homogeneous translation by `(x, y, z)`.
pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(x, y, z, 1.0),
    )
}

pub fn translation_vec(offset: Vec3) -> Mat4 {
    translation(offset.x, offset.y, offset.z)
}

/// Right-handed rotation of `angle_degrees` about `axis`.
///
/// Matrices are column-major, so each `Vec4` below is a column; the row
/// layout is the usual textbook one (e.g. about Z: `[c -s; s c]`).
pub fn rotation(angle_degrees: f32, axis: Axis) -> Mat4 {
    let (s, c) = angle_degrees.to_radians().sin_cos();

    match axis {
        Axis::X => Mat4::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, c, s, 0.0),
            Vec4::new(0.0, -s, c, 0.0),
            Vec4::W,
        ),
        Axis::Y => Mat4::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::W,
        ),
        Axis::Z => Mat4::from_cols(
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::W,
        ),
    }
}

/// Applies `matrix` to `point` as the homogeneous vector `(x, y, z, 1)` and
/// drops the resulting w.
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    (*matrix * point.extend(1.0)).truncate()
}

/// Yaw in degrees that turns the +Z forward axis towards `displacement`.
pub fn heading_degrees(displacement: Vec3) -> f32 {
    displacement.x.atan2(displacement.z).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_parameters_build_identity() {
        assert_eq!(translation(0.0, 0.0, 0.0), Mat4::IDENTITY);
        for axis in Axis::ALL {
            assert_eq!(rotation(0.0, axis), Mat4::IDENTITY);
        }
    }

    #[test]
    fn translation_moves_points() {
        let m = translation(1.0, -2.0, 3.5);
        let p = transform_point(&m, Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(p, Vec3::new(1.5, -1.5, 4.0));
    }

    #[test]
    fn rotation_matches_glam_conventions() {
        let angle = 37.0_f32;
        let expected = [
            Mat4::from_rotation_x(angle.to_radians()),
            Mat4::from_rotation_y(angle.to_radians()),
            Mat4::from_rotation_z(angle.to_radians()),
        ];
        for (axis, expected) in Axis::ALL.into_iter().zip(expected) {
            assert!(rotation(angle, axis).abs_diff_eq(expected, EPS), "{axis:?}");
        }
    }

    #[test]
    fn quarter_turns_map_basis_vectors() {
        let z = transform_point(&rotation(90.0, Axis::Z), Vec3::X);
        assert!(z.abs_diff_eq(Vec3::Y, EPS));

        let x = transform_point(&rotation(90.0, Axis::X), Vec3::Y);
        assert!(x.abs_diff_eq(Vec3::Z, EPS));

        let y = transform_point(&rotation(90.0, Axis::Y), Vec3::Z);
        assert!(y.abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn rotation_leaves_its_axis_fixed() {
        for axis in Axis::ALL {
            let p = transform_point(&rotation(123.0, axis), axis.unit() * 2.0);
            assert!(p.abs_diff_eq(axis.unit() * 2.0, EPS));
        }
    }

    #[test]
    fn translate_then_rotate_differs_from_rotate_then_translate() {
        let t = translation(1.0, 0.0, 0.0);
        let r = rotation(90.0, Axis::Z);

        let tr = transform_point(&(t * r), Vec3::X);
        let rt = transform_point(&(r * t), Vec3::X);

        assert!(tr.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), EPS));
        assert!(rt.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn heading_follows_displacement_direction() {
        assert_eq!(heading_degrees(Vec3::Z), 0.0);
        assert!((heading_degrees(Vec3::X) - 90.0).abs() < EPS);
        assert!((heading_degrees(Vec3::new(1.0, 5.0, 1.0)) - 45.0).abs() < EPS);
        assert!((heading_degrees(Vec3::NEG_Z).abs() - 180.0).abs() < EPS);
    }

    #[test]
    fn heading_rotation_points_forward_along_travel() {
        let travel = Vec3::new(3.0, 0.0, -4.0);
        let forward = transform_point(&rotation(heading_degrees(travel), Axis::Y), Vec3::Z);
        assert!(forward.abs_diff_eq(travel.normalize(), EPS));
    }
}
