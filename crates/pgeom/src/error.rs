use thiserror::Error;

/// Errors reported by the checked geometric operations.
///
/// Most operations in pgeom are exception-free: degenerate input produces
/// the all-zero NaN object or a [Fraction](crate::fraction::Fraction) sentinel.
/// The checked variants (e.g. [join](crate::primitives::join),
/// [checked_harm_conj](crate::proj_plane::checked_harm_conj))
/// surface those cases as a `GeomError` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Joining coincident points, or meeting coincident lines,
    /// leaves no unique result.
    #[error("degenerate join or meet of coincident objects")]
    Degenerate,

    /// A harmonic conjugate was requested for a point
    /// that does not lie on the line through the other two.
    #[error("third point is not on the line through the first two")]
    NotCollinear,
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = core::result::Result<T, GeomError>;
