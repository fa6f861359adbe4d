use crate::domain::model::{Brick, BrickVariant};
use crate::utils::error::Result;

/// Stateless dispatcher from a brick-type label to a constructed [`Brick`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrickFactory;

impl BrickFactory {
    /// Resolves `type_label` (case-sensitive) and builds the matching brick.
    ///
    /// Unknown labels fail with `BrickError::InvalidVariant` and nothing is
    /// constructed.
    pub fn create(columns: i32, rows: i32, type_label: &str) -> Result<Brick> {
        let variant: BrickVariant = type_label.parse()?;
        tracing::debug!(
            "Resolved brick type '{}' to scale factor {}",
            variant,
            variant.scale_factor()
        );
        Ok(Self::create_variant(columns, rows, variant))
    }

    pub fn create_variant(columns: i32, rows: i32, variant: BrickVariant) -> Brick {
        Brick::new(columns, rows, variant)
    }

    pub fn supported_labels() -> impl Iterator<Item = &'static str> {
        BrickVariant::ALL.into_iter().map(BrickVariant::as_str)
    }
}
