use crate::shape::StadiumError;
use std::fmt;
use std::str::FromStr;

/// An anatomical landmark at which a stadium cross-section is measured.
///
/// Labels are drawn from a fixed catalog and are written as `"<code>: <description>"`,
/// e.g. `"Ls1: umbilicus"`. The first letters of the code identify the body part
/// (`Ls` torso, `La`/`Lb` left/right arm, `Lj`/`Lk` left/right leg) and the digit the
/// level along it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StadiumLabel {
    code: &'static str,
    description: &'static str,
}

macro_rules! labels(
    ($($code: literal => $description: literal),* $(,)?) => {
        [$(StadiumLabel { code: $code, description: $description }),*]
    }
);

/// Every landmark of the catalog.
pub const STADIUM_LABELS: [StadiumLabel; 44] = labels![
    "Ls0" => "hip joint centre",
    "Ls1" => "umbilicus",
    "Ls2" => "lowest front rib",
    "Ls3" => "nipple",
    "Ls4" => "shoulder joint centre",
    "Ls5" => "acromion",
    "Ls6" => "beneath nose",
    "Ls7" => "above ear",
    "La0" => "shoulder joint centre",
    "La1" => "mid-arm",
    "La2" => "lowest front rib",
    "La3" => "nipple",
    "La4" => "wrist joint centre",
    "La5" => "acromion",
    "La6" => "knuckles",
    "La7" => "fingernails",
    "Lb0" => "shoulder joint centre",
    "Lb1" => "mid-arm",
    "Lb2" => "lowest front rib",
    "Lb3" => "nipple",
    "Lb4" => "wrist joint centre",
    "Lb5" => "acromion",
    "Lb6" => "knuckles",
    "Lb7" => "fingernails",
    "Lj0" => "hip joint centre",
    "Lj1" => "crotch",
    "Lj2" => "mid-thigh",
    "Lj3" => "knee joint centre",
    "Lj4" => "maximum calf perimeter",
    "Lj5" => "ankle joint centre",
    "Lj6" => "heel",
    "Lj7" => "arch",
    "Lj8" => "ball",
    "Lj9" => "toe nails",
    "Lk0" => "hip joint centre",
    "Lk1" => "crotch",
    "Lk2" => "mid-thigh",
    "Lk3" => "knee joint centre",
    "Lk4" => "maximum calf perimeter",
    "Lk5" => "ankle joint centre",
    "Lk6" => "heel",
    "Lk7" => "arch",
    "Lk8" => "ball",
    "Lk9" => "toe nails",
];

/// The torso's acromion level, as named by the body assembly when it closes off the neck.
pub const ACROMION_BOTTOM_OF_NECK: StadiumLabel = StadiumLabel {
    code: "Ls5",
    description: "acromion/bottom of neck",
};

impl StadiumLabel {
    /// Looks up the catalog entry with the given code and description.
    pub fn find(code: &str, description: &str) -> Option<Self> {
        STADIUM_LABELS
            .iter()
            .chain(std::iter::once(&ACROMION_BOTTOM_OF_NECK))
            .find(|label| label.code == code && label.description == description)
            .copied()
    }

    /// The short landmark code, e.g. `"Ls1"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The landmark description, e.g. `"umbilicus"`.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for StadiumLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl FromStr for StadiumLabel {
    type Err = StadiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once(": ")
            .and_then(|(code, description)| Self::find(code, description))
            .ok_or_else(|| StadiumError::InvalidLabel(s.to_string()))
    }
}

impl TryFrom<String> for StadiumLabel {
    type Error = StadiumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StadiumLabel> for String {
    fn from(label: StadiumLabel) -> String {
        label.to_string()
    }
}
