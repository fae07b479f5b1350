//! The stadium cross-section.

use crate::math::Real;
use crate::shape::StadiumLabel;
use na::RealField;
use std::fmt;
use std::str::FromStr;

/// Errors raised while defining a stadium.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum StadiumError {
    /// The label is not one of the catalog's `"<code>: <description>"` names.
    #[error("'{0}' is not a valid stadium label.")]
    InvalidLabel(String),
    /// The measurement mode is not one of `perimwidth`, `depthwidth`, `perimeter`,
    /// `radius` or `thicknessradius`.
    #[error("'{0}' is not a valid input mode. You must use perimwidth, depthwidth, perimeter, radius or thicknessradius.")]
    InvalidInputMode(String),
    /// A measurement mode that needs two values was given only one.
    #[error("the {mode} input mode needs a second measurement.")]
    MissingInput {
        /// The mode that was requested.
        mode: InputMode,
    },
    /// The alignment is neither `ML` nor `AP`.
    #[error("'{0}' is not a valid alignment, must be either AP or ML.")]
    InvalidAlignment(String),
    /// The measurements describe an impossible stadium and the input mode has no rule to
    /// reduce it to a circle.
    #[error("stadium '{label}' is defined incorrectly: r must be positive and t must be nonnegative, but r = {radius} and t = {thickness}.")]
    UncorrectableGeometry {
        /// The stadium's label.
        label: StadiumLabel,
        /// The radius derived from the measurements.
        radius: Real,
        /// The thickness derived from the measurements.
        thickness: Real,
    },
}

/// The direction of a stadium's long axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Medio-lateral (`"ML"`): the long axis goes from side to side of the body.
    #[default]
    MedioLateral,
    /// Anterior-posterior (`"AP"`): the long axis goes from front to back. Only the
    /// stadia at the heels are aligned this way.
    AnteriorPosterior,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::MedioLateral => f.write_str("ML"),
            Alignment::AnteriorPosterior => f.write_str("AP"),
        }
    }
}

impl FromStr for Alignment {
    type Err = StadiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ML" => Ok(Alignment::MedioLateral),
            "AP" => Ok(Alignment::AnteriorPosterior),
            _ => Err(StadiumError::InvalidAlignment(s.to_string())),
        }
    }
}

/// The kind of measurements a stadium is defined from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum InputMode {
    /// Perimeter and width (`"perimwidth"`).
    PerimeterWidth,
    /// Depth and width (`"depthwidth"`).
    DepthWidth,
    /// Perimeter of a circle (`"perimeter"`).
    Perimeter,
    /// Radius of a circle (`"radius"`).
    Radius,
    /// Thickness and radius (`"thicknessradius"`).
    ThicknessRadius,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputMode::PerimeterWidth => "perimwidth",
            InputMode::DepthWidth => "depthwidth",
            InputMode::Perimeter => "perimeter",
            InputMode::Radius => "radius",
            InputMode::ThicknessRadius => "thicknessradius",
        };
        f.write_str(name)
    }
}

impl FromStr for InputMode {
    type Err = StadiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perimwidth" => Ok(InputMode::PerimeterWidth),
            "depthwidth" => Ok(InputMode::DepthWidth),
            "perimeter" => Ok(InputMode::Perimeter),
            "radius" => Ok(InputMode::Radius),
            "thicknessradius" => Ok(InputMode::ThicknessRadius),
            _ => Err(StadiumError::InvalidInputMode(s.to_string())),
        }
    }
}

/// The measurements a stadium is defined from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum StadiumInput {
    /// A measured perimeter and width.
    PerimeterWidth {
        /// The perimeter of the cross-section.
        perimeter: Real,
        /// The width of the cross-section along its long axis.
        width: Real,
    },
    /// A measured depth and width.
    DepthWidth {
        /// The depth of the cross-section across its long axis.
        depth: Real,
        /// The width of the cross-section along its long axis.
        width: Real,
    },
    /// The perimeter of a circular cross-section.
    Perimeter(Real),
    /// The radius of a circular cross-section.
    Radius(Real),
    /// The thickness and radius of the stadium directly.
    ThicknessRadius {
        /// Half the length of the stadium's straight sides.
        thickness: Real,
        /// The radius of the stadium's semicircular caps.
        radius: Real,
    },
}

impl StadiumInput {
    /// Pairs one or two raw measurements with their meaning.
    ///
    /// `in1` is the perimeter, depth, thickness or radius, and `in2` the width or radius,
    /// as determined by `mode`.
    pub fn from_mode(mode: InputMode, in1: Real, in2: Option<Real>) -> Result<Self, StadiumError> {
        let second = || in2.ok_or(StadiumError::MissingInput { mode });

        Ok(match mode {
            InputMode::PerimeterWidth => StadiumInput::PerimeterWidth {
                perimeter: in1,
                width: second()?,
            },
            InputMode::DepthWidth => StadiumInput::DepthWidth {
                depth: in1,
                width: second()?,
            },
            InputMode::Perimeter => StadiumInput::Perimeter(in1),
            InputMode::Radius => StadiumInput::Radius(in1),
            InputMode::ThicknessRadius => StadiumInput::ThicknessRadius {
                thickness: in1,
                radius: second()?,
            },
        })
    }

    /// The kind of these measurements.
    pub fn mode(&self) -> InputMode {
        match self {
            StadiumInput::PerimeterWidth { .. } => InputMode::PerimeterWidth,
            StadiumInput::DepthWidth { .. } => InputMode::DepthWidth,
            StadiumInput::Perimeter(_) => InputMode::Perimeter,
            StadiumInput::Radius(_) => InputMode::Radius,
            StadiumInput::ThicknessRadius { .. } => InputMode::ThicknessRadius,
        }
    }
}

/// How an impossible stadium was turned into a circle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CircleReduction {
    /// The circle keeps the measured perimeter.
    PerimeterAsGiven,
    /// The circle's radius is the measured width.
    RadiusFromWidth,
}

/// Record of the automatic correction of a stadium whose measurements gave a
/// non-positive radius or a negative thickness.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DegenerateCorrection {
    /// The measurements the stadium was defined from.
    pub input: StadiumInput,
    /// The radius derived from the measurements, before correction.
    pub nominal_radius: Real,
    /// The thickness derived from the measurements, before correction.
    pub nominal_thickness: Real,
    /// The rule used to turn the stadium into a circle.
    pub reduction: CircleReduction,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Dimensions {
    radius: Real,
    thickness: Real,
    perimeter: Real,
    width: Real,
}

impl Dimensions {
    fn circle(radius: Real) -> Self {
        let perimeter = Real::two_pi() * radius;
        Self {
            radius,
            thickness: 0.0,
            perimeter,
            width: perimeter / Real::pi(),
        }
    }

    fn from_perimeter_width(perimeter: Real, width: Real) -> Self {
        let denom = Real::two_pi() - 4.0;
        Self {
            radius: (perimeter - 2.0 * width) / denom,
            thickness: (Real::pi() * width - perimeter) / denom,
            perimeter,
            width,
        }
    }

    fn from_thickness_radius(thickness: Real, radius: Real) -> Self {
        Self {
            radius,
            thickness,
            perimeter: 4.0 * thickness + Real::two_pi() * radius,
            width: 2.0 * thickness + 2.0 * radius,
        }
    }

    fn from_input(input: &StadiumInput) -> Self {
        match *input {
            StadiumInput::PerimeterWidth { perimeter, width } => {
                Self::from_perimeter_width(perimeter, width)
            }
            StadiumInput::DepthWidth { depth, width } => {
                Self::from_perimeter_width(2.0 * width + (Real::pi() - 2.0) * depth, width)
            }
            StadiumInput::Perimeter(perimeter) => Self::circle(perimeter / Real::two_pi()),
            StadiumInput::Radius(radius) => Self::circle(radius),
            StadiumInput::ThicknessRadius { thickness, radius } => {
                Self::from_thickness_radius(thickness, radius)
            }
        }
    }

    /// NaN and infinite dimensions are degenerate too.
    fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite())
            || !(self.thickness >= 0.0 && self.thickness.is_finite())
    }

    fn uncorrectable(&self, label: StadiumLabel) -> StadiumError {
        StadiumError::UncorrectableGeometry {
            label,
            radius: self.radius,
            thickness: self.thickness,
        }
    }
}

/// A 2D stadium: a rectangle capped on two opposite sides by semicircles.
///
/// The stadium is described by the `radius` of its caps and by its `thickness`, half the
/// length of its straight sides. A stadium with a zero thickness is a circle. Its
/// `perimeter` is `4 t + 2 π r` and its `width`, measured along the long axis, is
/// `2 t + 2 r`; for a proper stadium `2 < perimeter / width < π`.
///
/// A stadium is fully determined at construction and cannot be modified afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "StadiumMeasurements", into = "StadiumMeasurements")
)]
pub struct Stadium {
    label: StadiumLabel,
    input: StadiumInput,
    radius: Real,
    thickness: Real,
    perimeter: Real,
    width: Real,
    alignment: Alignment,
    correction: Option<DegenerateCorrection>,
}

impl Stadium {
    /// Defines a stadium from measurements.
    ///
    /// If the measurements yield a non-positive radius or a negative thickness (that is,
    /// the perimeter/width ratio is outside of `(2, π)`), perimeter-width measurements are
    /// reduced to a circle of the measured perimeter, and depth-width measurements to a
    /// circle whose radius is the measured width. A warning is logged and the correction
    /// is recorded; see [`Stadium::correction`]. Other measurement modes have no such rule
    /// and fail with [`StadiumError::UncorrectableGeometry`], as do measurements whose
    /// circle would itself have a non-positive, infinite or NaN radius.
    pub fn new(
        label: StadiumLabel,
        input: StadiumInput,
        alignment: Alignment,
    ) -> Result<Self, StadiumError> {
        let nominal = Dimensions::from_input(&input);
        let mut dims = nominal;
        let mut correction = None;

        if nominal.is_degenerate() {
            let (reduction, radius) = match input {
                StadiumInput::PerimeterWidth { perimeter, .. } => {
                    (CircleReduction::PerimeterAsGiven, perimeter / Real::two_pi())
                }
                StadiumInput::DepthWidth { width, .. } => {
                    (CircleReduction::RadiusFromWidth, width)
                }
                _ => return Err(nominal.uncorrectable(label)),
            };

            // Non-positive or NaN measurements give a circle that is just as wrong.
            let circle = Dimensions::circle(radius);
            if circle.is_degenerate() {
                return Err(nominal.uncorrectable(label));
            }

            log::warn!(
                "stadium '{}' is defined incorrectly, r must be positive and t must be nonnegative. \
                 r = {} and t = {}. This means that 2 < perimeter/width < pi, but this ratio is {}. \
                 Setting it as a circle ({:?}).",
                label,
                nominal.radius,
                nominal.thickness,
                nominal.perimeter / nominal.width,
                reduction
            );

            dims = circle;
            correction = Some(DegenerateCorrection {
                input,
                nominal_radius: nominal.radius,
                nominal_thickness: nominal.thickness,
                reduction,
            });
        }

        Ok(Self {
            label,
            input,
            radius: dims.radius,
            thickness: dims.thickness,
            perimeter: dims.perimeter,
            width: dims.width,
            alignment,
            correction,
        })
    }

    /// Defines a stadium from textual label, input mode and alignment.
    ///
    /// `mode` is one of `"perimwidth"`, `"depthwidth"`, `"perimeter"`, `"radius"` or
    /// `"thicknessradius"`, and `alignment` is `"ML"` or `"AP"`.
    ///
    /// # Example
    ///
    /// ```
    /// use yeadon::shape::Stadium;
    ///
    /// let stadium = Stadium::from_measurements("Ls1: umbilicus", "perimwidth", 0.8, Some(0.3), "ML")
    ///     .unwrap();
    /// let expected_perimeter =
    ///     4.0 * stadium.thickness() + 2.0 * std::f64::consts::PI * stadium.radius();
    /// assert!((stadium.perimeter() - expected_perimeter).abs() < 1.0e-12);
    /// assert!(!stadium.was_corrected());
    /// ```
    pub fn from_measurements(
        label: &str,
        mode: &str,
        in1: Real,
        in2: Option<Real>,
        alignment: &str,
    ) -> Result<Self, StadiumError> {
        let label = label.parse()?;
        let input = StadiumInput::from_mode(mode.parse()?, in1, in2)?;
        let alignment = alignment.parse()?;
        Self::new(label, input, alignment)
    }

    /// The landmark this cross-section is measured at.
    pub fn label(&self) -> StadiumLabel {
        self.label
    }

    /// The measurements this stadium was defined from.
    pub fn input(&self) -> StadiumInput {
        self.input
    }

    /// The radius of the semicircular caps.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Half the length of the straight sides; zero for a circle.
    pub fn thickness(&self) -> Real {
        self.thickness
    }

    /// The length of the stadium's boundary.
    pub fn perimeter(&self) -> Real {
        self.perimeter
    }

    /// The extent of the stadium along its long axis.
    pub fn width(&self) -> Real {
        self.width
    }

    /// The direction of the stadium's long axis.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// `perimeter / width`: `π` for a circle, between 2 and `π` for any other stadium.
    pub fn perimeter_width_ratio(&self) -> Real {
        self.perimeter / self.width
    }

    /// Is this stadium a circle?
    pub fn is_circle(&self) -> bool {
        self.thickness == 0.0
    }

    /// The correction applied to the measurements, if they described an impossible stadium.
    pub fn correction(&self) -> Option<&DegenerateCorrection> {
        self.correction.as_ref()
    }

    /// Were the measurements corrected into a circle?
    pub fn was_corrected(&self) -> bool {
        self.correction.is_some()
    }
}

/// The serialized form of a stadium: its dimensions are derived again, and checked, when
/// it is read back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub(crate) struct StadiumMeasurements {
    label: StadiumLabel,
    input: StadiumInput,
    alignment: Alignment,
}

impl From<Stadium> for StadiumMeasurements {
    fn from(stadium: Stadium) -> Self {
        Self {
            label: stadium.label,
            input: stadium.input,
            alignment: stadium.alignment,
        }
    }
}

impl TryFrom<StadiumMeasurements> for Stadium {
    type Error = StadiumError;

    fn try_from(measurements: StadiumMeasurements) -> Result<Self, Self::Error> {
        Stadium::new(
            measurements.label,
            measurements.input,
            measurements.alignment,
        )
    }
}
