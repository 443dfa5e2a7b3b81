//! Size label classification

/// Points assigned to an issue without any recognized size label.
///
/// Large on purpose, so an unsized issue stands out in every sum.
pub const UNSIZED_POINTS: u32 = 500;

/// T-shirt size carried by an issue label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Recognize a size label in either the `size-s` or the `size/S` spelling
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "size-s" | "size/S" => Some(Size::Small),
            "size-m" | "size/M" => Some(Size::Medium),
            "size-l" | "size/L" => Some(Size::Large),
            _ => None,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Size::Small => 1,
            Size::Medium => 5,
            Size::Large => 10,
        }
    }
}

/// Point value for a set of labels.
///
/// Labels are scanned in order and the first recognized size label wins.
/// Returns [`UNSIZED_POINTS`] when none is recognized.
pub fn classify<I, S>(labels: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .find_map(|label| Size::from_label(label.as_ref()))
        .map(Size::points)
        .unwrap_or(UNSIZED_POINTS)
}
