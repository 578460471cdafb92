use crate::error::CoreError;

/// Silhouette binaire extraite de l'image source. Row-major, immuable
/// une fois construite.
///
/// Chaque cellule vraie marque une région "remplie" de l'image, destinée
/// à être extrudée en voxels.
///
/// # Example
/// ```
/// use sp_core::mask::Mask;
/// let mask = Mask::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
/// assert_eq!(mask.width, 2);
/// assert!(mask.filled(0, 0));
/// assert!(!mask.filled(1, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Mask {
    /// Flat array of cells, row-major.
    pub cells: Vec<bool>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Mask {
    /// Construit un masque depuis des lignes de booléens.
    ///
    /// Un masque vide (zéro ligne) est valide : il produit simplement un
    /// nuage de voxels vide en aval.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if the rows have unequal
    /// lengths.
    ///
    /// # Example
    /// ```
    /// use sp_core::mask::Mask;
    /// let mask = Mask::from_rows(vec![vec![true; 3]; 2]).unwrap();
    /// assert_eq!((mask.width, mask.height), (3, 2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, CoreError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len() as u32);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in &rows {
            if row.len() as u32 != width {
                return Err(CoreError::InvalidDimensions {
                    width: row.len() as u32,
                    height,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Masque entièrement vide aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use sp_core::mask::Mask;
    /// let mask = Mask::blank(4, 3);
    /// assert_eq!(mask.cells.len(), 12);
    /// assert!(!mask.filled(2, 2));
    /// ```
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            cells: vec![false; (width * height) as usize],
            width,
            height,
        }
    }

    /// True si la cellule (x, y) est remplie.
    #[inline(always)]
    #[must_use]
    pub fn filled(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height, "cell out of bounds");
        self.cells[(y * self.width + x) as usize]
    }

    /// Mark the cell (x, y) as filled.
    #[inline(always)]
    pub fn fill(&mut self, x: u32, y: u32) {
        self.cells[(y * self.width + x) as usize] = true;
    }

    /// Number of filled cells.
    ///
    /// # Example
    /// ```
    /// use sp_core::mask::Mask;
    /// let mut mask = Mask::blank(2, 2);
    /// mask.fill(0, 1);
    /// assert_eq!(mask.filled_count(), 1);
    /// ```
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_row_major_order() {
        let mask = Mask::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert!(mask.filled(0, 0));
        assert!(mask.filled(1, 1));
        assert!(!mask.filled(1, 0));
        assert!(!mask.filled(0, 1));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Mask::from_rows(vec![vec![true, false], vec![true]]);
        assert!(matches!(
            err,
            Err(CoreError::InvalidDimensions { width: 1, .. })
        ));
    }

    #[test]
    fn from_rows_empty_is_valid() {
        let mask = Mask::from_rows(Vec::new()).unwrap();
        assert_eq!((mask.width, mask.height), (0, 0));
        assert_eq!(mask.filled_count(), 0);
    }
}
