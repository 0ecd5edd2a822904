/// The colour of a taiko note.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitType {
    /// Centre hit (don).
    Center,
    /// Rim hit (kat).
    Rim,
    /// Drumrolls and swells.
    NonHit,
}

impl HitType {
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::NonHit)
    }
}
