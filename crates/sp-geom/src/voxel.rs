use sp_core::mask::Mask;

/// Position 3D discrète issue de l'extrusion du masque, avec marquage
/// surface/intérieur.
///
/// Créé une seule fois par la voxelisation, jamais muté ensuite : la
/// rotation produit de nouvelles coordonnées, le nuage reste en lecture
/// seule pour tout le reste du pipeline.
///
/// # Example
/// ```
/// use sp_geom::voxel::Voxel;
/// let v = Voxel { x: 1, y: 2, z: 0, is_surface: true };
/// assert_eq!(v.offset([0.5, 0.0, 0.0]), [0.5, 2.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    /// Column index in the mask grid.
    pub x: i32,
    /// Row index in the mask grid.
    pub y: i32,
    /// Extrusion layer index.
    pub z: i32,
    /// True quand le voxel est sur la face avant ou arrière de l'extrusion
    /// (z == 0 ou z == depth−1), par opposition à son corps intérieur.
    pub is_surface: bool,
}

impl Voxel {
    /// Position décalée de `-center`, en f32, prête pour la rotation.
    #[inline(always)]
    #[must_use]
    pub fn offset(&self, center: [f32; 3]) -> [f32; 3] {
        [
            self.x as f32 - center[0],
            self.y as f32 - center[1],
            self.z as f32 - center[2],
        ]
    }
}

/// Extrude un masque binaire en nuage de voxels de `depth` couches.
///
/// Une cellule remplie produit exactement `depth` voxels, dont les couches
/// z == 0 et z == depth−1 sont marquées surface. Pour depth == 1, l'unique
/// couche est surface. Un masque vide produit un nuage vide — ce n'est pas
/// une erreur, c'est à l'appelant de garder l'étape de centrage.
///
/// # Example
/// ```
/// use sp_core::mask::Mask;
/// use sp_geom::voxel::voxelize;
/// let mask = Mask::from_rows(vec![vec![true, false]]).unwrap();
/// let voxels = voxelize(&mask, 3);
/// assert_eq!(voxels.len(), 3);
/// assert_eq!(voxels.iter().filter(|v| v.is_surface).count(), 2);
/// ```
#[must_use]
pub fn voxelize(mask: &Mask, depth: u32) -> Vec<Voxel> {
    let mut voxels = Vec::with_capacity(mask.filled_count() * depth as usize);
    for z in 0..depth {
        let is_surface = z == 0 || z == depth - 1;
        for y in 0..mask.height {
            for x in 0..mask.width {
                if mask.filled(x, y) {
                    voxels.push(Voxel {
                        x: x as i32,
                        y: y as i32,
                        z: z as i32,
                        is_surface,
                    });
                }
            }
        }
    }
    log::debug!(
        "Voxelisation : {} cellules × {depth} couches = {} voxels",
        mask.filled_count(),
        voxels.len()
    );
    voxels
}
