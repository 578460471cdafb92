/// Une frame rendue : grille de caractères à taille fixe, row-major.
///
/// Remplie du glyphe de fond à la création, écrite une seule fois par la
/// rasterisation, puis immuable. Toutes les frames d'une même séquence
/// partagent les mêmes dimensions.
///
/// # Example
/// ```
/// use sp_core::frame::Frame;
/// let mut frame = Frame::filled(3, 2, '.');
/// frame.set(1, 0, '#');
/// assert_eq!(frame.get(1, 0), '#');
/// assert_eq!(frame.to_text(), ".#.\n...");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl Frame {
    /// Crée une frame pré-remplie du glyphe donné.
    ///
    /// # Example
    /// ```
    /// use sp_core::frame::Frame;
    /// let frame = Frame::filled(10, 4, '.');
    /// assert_eq!(frame.cells.len(), 40);
    /// assert_eq!(frame.get(9, 3), '.');
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, glyph: char) -> Self {
        Self {
            cells: vec![glyph; (width * height) as usize],
            width,
            height,
        }
    }

    /// Set the glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, glyph: char) {
        self.cells[(y * self.width + x) as usize] = glyph;
    }

    /// Glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[(y * self.width + x) as usize]
    }

    /// Représentation texte : lignes jointes par `\n`, sans retour final.
    ///
    /// C'est le format consommé par l'export JSON et par tout afficheur
    /// aval.
    ///
    /// # Example
    /// ```
    /// use sp_core::frame::Frame;
    /// let mut frame = Frame::filled(2, 2, '.');
    /// frame.set(0, 0, '#');
    /// assert_eq!(frame.to_text(), "#.\n..");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width * self.height + self.height) as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                out.push(self.get(x, y));
            }
        }
        out
    }

    /// True if at least one cell differs from `glyph`.
    ///
    /// # Example
    /// ```
    /// use sp_core::frame::Frame;
    /// let mut frame = Frame::filled(2, 2, '.');
    /// assert!(!frame.has_foreground('.'));
    /// frame.set(1, 1, '@');
    /// assert!(frame.has_foreground('.'));
    /// ```
    #[must_use]
    pub fn has_foreground(&self, glyph: char) -> bool {
        self.cells.iter().any(|&c| c != glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_text_joins_rows_without_trailing_newline() {
        let mut frame = Frame::filled(3, 2, '.');
        frame.set(2, 1, '#');
        assert_eq!(frame.to_text(), "...\n..#");
    }

    #[test]
    fn filled_initializes_every_cell() {
        let frame = Frame::filled(4, 4, '~');
        assert!(frame.cells.iter().all(|&c| c == '~'));
    }
}
