use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Unit system in which loads are expressed.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl Unit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
