use approx::assert_relative_eq;
use yeadon::shape::{Alignment, Stadium, StadiumInput, StadiumLabel};

fn label() -> StadiumLabel {
    "Ls3: nipple".parse().unwrap()
}

#[test]
fn thickness_radius_round_trips_through_perimeter_width() {
    for (thickness, radius) in [(0.01, 0.05), (0.08, 0.06), (0.15, 0.02), (0.0001, 0.1)] {
        let direct = Stadium::new(
            label(),
            StadiumInput::ThicknessRadius { thickness, radius },
            Alignment::MedioLateral,
        )
        .unwrap();
        let measured = Stadium::new(
            label(),
            StadiumInput::PerimeterWidth {
                perimeter: direct.perimeter(),
                width: direct.width(),
            },
            Alignment::MedioLateral,
        )
        .unwrap();

        assert!(!measured.was_corrected());
        assert_relative_eq!(measured.thickness(), thickness, max_relative = 1.0e-9);
        assert_relative_eq!(measured.radius(), radius, max_relative = 1.0e-9);
    }
}

#[test]
fn proper_stadia_have_ratio_between_two_and_pi() {
    let stadium = Stadium::new(
        label(),
        StadiumInput::ThicknessRadius {
            thickness: 0.07,
            radius: 0.04,
        },
        Alignment::MedioLateral,
    )
    .unwrap();
    let ratio = stadium.perimeter_width_ratio();

    assert!(ratio > 2.0 && ratio < std::f64::consts::PI);
}

#[test]
fn unit_perimeter_and_width_is_corrected_to_a_circle() {
    let stadium =
        Stadium::from_measurements("Ls3: nipple", "perimwidth", 1.0, Some(1.0), "ML").unwrap();

    assert!(stadium.was_corrected());
    assert!(stadium.is_circle());
    assert_relative_eq!(
        stadium.radius(),
        1.0 / (2.0 * std::f64::consts::PI),
        max_relative = 1.0e-9
    );
    assert_eq!(stadium.thickness(), 0.0);
}
