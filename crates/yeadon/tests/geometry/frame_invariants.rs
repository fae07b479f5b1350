use approx::assert_relative_eq;
use na::{Matrix3, Point3, Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use yeadon::shape::{Alignment, Stadium, StadiumInput};
use yeadon::solid::Solid;
use yeadon::utils::{rotate_inertia, rotate_space_123};

fn random_rotation(rng: &mut StdRng) -> Rotation3<f64> {
    let angles = Vector3::new(
        rng.gen_range(-PI..PI),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-PI..PI),
    );
    rotate_space_123(&angles)
}

fn torso() -> Solid {
    let umbilicus = Stadium::new(
        "Ls1: umbilicus".parse().unwrap(),
        StadiumInput::PerimeterWidth {
            perimeter: 0.82,
            width: 0.3,
        },
        Alignment::MedioLateral,
    )
    .unwrap();
    let nipple = Stadium::new(
        "Ls3: nipple".parse().unwrap(),
        StadiumInput::DepthWidth {
            depth: 0.21,
            width: 0.32,
        },
        Alignment::MedioLateral,
    )
    .unwrap();
    Solid::stadium_solid("s1: abdomen-thorax", 1000.0, umbilicus, nipple, 0.25).unwrap()
}

#[test]
fn rotation_preserves_trace_and_symmetry() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut solid = torso();
    let local = solid.relative_inertia();

    for _ in 0..50 {
        let rot = random_rotation(&mut rng);
        solid.set_orientation(Point3::origin(), rot);
        let world = solid.absolute_inertia().unwrap();

        assert_relative_eq!(world.trace(), local.trace(), max_relative = 1.0e-9);
        assert_relative_eq!(world, world.transpose(), epsilon = 1.0e-12);
        assert_relative_eq!(
            rotate_inertia(&rot.inverse(), &world),
            local,
            epsilon = 1.0e-12
        );
    }
}

fn sorted_eigenvalues(inertia: &Matrix3<f64>) -> Vec<f64> {
    let mut eigenvalues = inertia.symmetric_eigenvalues().as_slice().to_vec();
    eigenvalues.sort_by(|a, b| a.total_cmp(b));
    eigenvalues
}

#[test]
fn rotation_preserves_principal_moments() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut solid = torso();
    let principal = sorted_eigenvalues(&solid.relative_inertia());

    for _ in 0..50 {
        let rot: Rotation3<f64> = rng.gen();
        solid.set_orientation(Point3::origin(), rot);
        let world = sorted_eigenvalues(&solid.absolute_inertia().unwrap());

        for (w, p) in world.iter().zip(&principal) {
            assert_relative_eq!(*w, *p, max_relative = 1.0e-9);
        }
    }
}

#[test]
fn com_distance_to_base_is_preserved() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut solid = torso();
    let local_com = solid.relative_com();

    for _ in 0..50 {
        let position = Point3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        solid.set_orientation(position, random_rotation(&mut rng));
        let com = solid.absolute_com().unwrap();
        let end = solid.end_position().unwrap();

        assert_relative_eq!(
            (com - position).norm(),
            local_com.coords.norm(),
            max_relative = 1.0e-9
        );
        assert_relative_eq!((end - position).norm(), solid.height(), max_relative = 1.0e-9);
        // The center of mass lies on the segment joining the base and the top.
        let axis = (end - position).normalize();
        assert_relative_eq!((com - position).cross(&axis).norm(), 0.0, epsilon = 1.0e-12);
    }
}
