use approx::assert_relative_eq;
use na::{Point3, Rotation3, Vector3};
use std::f64::consts::PI;
use yeadon::shape::{Alignment, SolidShape, Stadium, StadiumInput};
use yeadon::solid::{Solid, SolidError};

fn stadium(label: &str, input: StadiumInput, alignment: Alignment) -> Stadium {
    Stadium::new(label.parse().unwrap(), input, alignment).unwrap()
}

#[test]
fn cylinder_solid() {
    let (radius, height, density) = (0.05, 0.3, 1000.0);
    let circle = stadium("Lb1: mid-arm", StadiumInput::Radius(radius), Alignment::MedioLateral);
    let solid = Solid::stadium_solid("b1: upper-arm", density, circle, circle, height).unwrap();
    let shape = solid.shape().as_stadium_solid().unwrap();

    assert_eq!(shape.taper_ratios(), (0.0, 1.0));
    assert_relative_eq!(
        solid.mass(),
        density * height * PI * radius * radius,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(solid.relative_com().z, height / 2.0, max_relative = 1.0e-9);
}

#[test]
fn unit_semiellipsoid_solid() {
    let solid = Solid::semiellipsoid("s7: head", 1.0, 2.0 * PI, 1.0).unwrap();

    assert_relative_eq!(solid.mass(), 2.0 * PI / 3.0, max_relative = 1.0e-9);
    assert_relative_eq!(solid.relative_com().z, 3.0 / 8.0, max_relative = 1.0e-9);
    assert_relative_eq!(solid.relative_inertia().m33, 4.0 * PI / 15.0, max_relative = 1.0e-9);
    assert!(matches!(solid.shape(), SolidShape::Semiellipsoid(_)));
}

#[test]
fn absolute_properties_require_an_orientation() {
    let solid = Solid::semiellipsoid("s7: head", 1050.0, 0.57, 0.11).unwrap();

    assert!(matches!(
        solid.absolute_com(),
        Err(SolidError::OrientationNotSet { .. })
    ));
    assert!(matches!(
        solid.absolute_inertia(),
        Err(SolidError::OrientationNotSet { .. })
    ));
}

#[test]
fn heel_solid_is_aligned_anterior_posteriorly() {
    let ankle = stadium(
        "Lj5: ankle joint centre",
        StadiumInput::ThicknessRadius {
            thickness: 0.01,
            radius: 0.03,
        },
        Alignment::MedioLateral,
    );
    let heel_ml = stadium(
        "Lj6: heel",
        StadiumInput::PerimeterWidth {
            perimeter: 0.33,
            width: 0.12,
        },
        Alignment::MedioLateral,
    );
    let heel_ap = stadium(
        "Lj6: heel",
        StadiumInput::PerimeterWidth {
            perimeter: 0.33,
            width: 0.12,
        },
        Alignment::AnteriorPosterior,
    );

    let ml = Solid::stadium_solid("j5: foot", 1100.0, ankle, heel_ml, 0.07).unwrap();
    let ap = Solid::stadium_solid("j5: foot", 1100.0, ankle, heel_ap, 0.07).unwrap();
    let (ml, ap) = (ml.relative_inertia(), ap.relative_inertia());

    assert!((ml.m11 - ml.m22).abs() > 1.0e-3 * ml.m22);

    assert_relative_eq!(ap.m11, ml.m22, max_relative = 1.0e-9);
    assert_relative_eq!(ap.m22, ml.m11, max_relative = 1.0e-9);
    assert_relative_eq!(ap.m33, ml.m33, max_relative = 1.0e-9);
    assert_relative_eq!(ap.m12, 0.0, epsilon = 1.0e-12);
    assert_relative_eq!(ap.m13, 0.0, epsilon = 1.0e-12);
    assert_relative_eq!(ap.m23, 0.0, epsilon = 1.0e-12);
}

#[test]
fn posture_change_moves_absolute_properties_only() {
    let hip = stadium(
        "Lj0: hip joint centre",
        StadiumInput::PerimeterWidth {
            perimeter: 0.6,
            width: 0.2,
        },
        Alignment::MedioLateral,
    );
    let knee = stadium(
        "Lj3: knee joint centre",
        StadiumInput::PerimeterWidth {
            perimeter: 0.37,
            width: 0.12,
        },
        Alignment::MedioLateral,
    );
    let mut thigh = Solid::stadium_solid("j0: thigh", 1050.0, hip, knee, 0.42).unwrap();
    let local = *thigh.local_mass_properties();

    // Standing: the thigh hangs down from the hip.
    let hip_position = Point3::new(0.09, 0.0, 0.0);
    thigh.set_orientation(hip_position, Rotation3::from_axis_angle(&Vector3::x_axis(), PI));
    let standing_com = thigh.absolute_com().unwrap();
    assert!(standing_com.z < 0.0);
    assert_relative_eq!(thigh.end_position().unwrap().z, -0.42, epsilon = 1.0e-12);

    // Sitting: the thigh points forward.
    let sitting = Rotation3::from_axis_angle(&Vector3::y_axis(), PI / 2.0);
    thigh.set_orientation(hip_position, sitting);
    let sitting_com = thigh.absolute_com().unwrap();
    assert_relative_eq!(sitting_com.z, 0.0, epsilon = 1.0e-12);
    assert_relative_eq!(
        sitting_com,
        hip_position + Vector3::x() * local.local_com.z,
        epsilon = 1.0e-12
    );
    assert_relative_eq!(
        thigh.absolute_inertia().unwrap().m11,
        local.local_inertia.m33,
        max_relative = 1.0e-9
    );
    assert_eq!(*thigh.local_mass_properties(), local);
}
