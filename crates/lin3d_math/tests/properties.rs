//! Cross-type properties of the math crate, exercised through the public API

use approx::assert_relative_eq;
use lin3d_math::{
    to_radian, Matrix4, Matrix4D, Plane, Quaternion, QuaternionD, Vector3, Vector3D, Vector4,
};

fn sample_vectors() -> Vec<Vector3D> {
    vec![
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 8.0),
        Vector3::new(1e-3, -7.0, 0.0),
        Vector3::new(100.0, 100.0, -100.0),
    ]
}

fn sample_matrices() -> Vec<Matrix4D> {
    vec![
        Matrix4::translation(1.0, -2.0, 3.0),
        Matrix4::rotation_yaw_pitch_roll(0.3, 1.2, -0.8) * Matrix4::scaling(2.0, 0.5, 3.0),
        Matrix4::from_rows([
            [4.0, 7.0, 2.0, 0.0],
            [3.0, 6.0, 1.0, 0.0],
            [2.0, 5.0, 3.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    ]
}

#[test]
fn test_length_squared_is_norm() {
    for v in sample_vectors() {
        assert_relative_eq!(v.length() * v.length(), v.norm(), max_relative = 1e-12);
    }
}

#[test]
fn test_normalized_vectors_have_unit_length() {
    for v in sample_vectors() {
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(Vector3D::zero().normalize(), Vector3::zero());
}

#[test]
fn test_identity_is_neutral() {
    for m in sample_matrices() {
        assert_eq!(Matrix4::identity() * m, m);
        assert_eq!(m * Matrix4::identity(), m);
    }
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    for m in sample_matrices() {
        let (inv, det) = m.inverse_and_determinant();
        assert!(det != 0.0);
        let inv = inv.unwrap();
        assert_relative_eq!(inv * m, Matrix4::identity(), epsilon = 1e-9);
    }

    let (inv, det) = Matrix4D::zero().inverse_and_determinant();
    assert!(inv.is_none());
    assert_eq!(det, 0.0);
}

#[test]
fn test_transpose_twice() {
    for m in sample_matrices() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn test_determinants() {
    assert_eq!(Matrix4D::identity().determinant(), 1.0);
    assert_eq!(Matrix4D::zero().determinant(), 0.0);
}

#[test]
fn test_identity_quaternion_matrix() {
    assert_eq!(QuaternionD::identity().to_matrix(), Matrix4::identity());
}

#[test]
fn test_axis_rotation_fixes_axis() {
    let axes = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(3.0, 4.0, 12.0).normalize(),
    ];
    for axis in axes {
        for deg in [15.0, 90.0, 200.0] {
            let m = Matrix4::rotation_axis(axis, to_radian(deg));
            let p = axis * 4.0;
            assert_relative_eq!(p.transform(&m).unwrap(), p, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_cross_of_unit_axes() {
    let x = Vector3::new(1, 0, 0);
    let y = Vector3::new(0, 1, 0);
    assert_eq!(x.cross(y), Vector3::new(0, 0, 1));
}

#[test]
fn test_ray_hits_ground_plane() {
    let plane = Plane::from_points([
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ]);
    let hit = plane
        .intersect_line(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0))
        .unwrap();
    assert_eq!(hit.pos, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(hit.dist, 5.0);
}

#[test]
fn test_slerp_of_equal_quaternions() {
    let q = Quaternion::new(0.0, 0.6, 0.0, 0.8);
    assert_relative_eq!(Quaternion::slerp(q, q, 0.5), q, epsilon = 1e-12);
    let id = QuaternionD::identity();
    assert_eq!(Quaternion::slerp(id, id, 0.5), id);
}

#[test]
fn test_quaternion_and_matrix_rotations_agree() {
    let q = Quaternion::rotation(0.5, -0.25, 1.0);
    let m = Matrix4::rotation_quaternion(q);
    let euler = Matrix4::rotation_yaw_pitch_roll(0.5, -0.25, 1.0);
    for v in sample_vectors() {
        let by_quaternion = v.transform(&m).unwrap();
        let by_euler = Vector4::new(v.x, v.y, v.z, 1.0) * euler;
        assert_relative_eq!(by_quaternion, by_euler.xyz(), epsilon = 1e-9);
    }
}

#[test]
fn test_types_are_pod() {
    let verts = [Vector3::new(1.0f32, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&verts);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let m = Matrix4::<f32>::identity();
    assert_eq!(bytemuck::bytes_of(&m).len(), 64);
}
