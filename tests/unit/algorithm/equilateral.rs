//! Tests for interlocking equilateral lattices

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilecollage::CollageError;
    use tilecollage::algorithm::equilateral::{Lattice, equi_stitch, equilateral_stitch, vequi_stitch};

    // One uniform colour per 40 x 35 tile of each source
    fn tiled_sources() -> Vec<RgbImage> {
        (0..2u8)
            .map(|source| {
                RgbImage::from_fn(400, 400, |x, y| {
                    Rgb([source * 100 + 1, (x / 40) as u8 * 20, (y / 35) as u8 * 20])
                })
            })
            .collect()
    }

    // Tests canvas dimensions for rows and columns
    #[test]
    fn test_lattice_dimensions() {
        let images = tiled_sources();
        let mut rng = StdRng::seed_from_u64(4);

        // Altitude 35, 220 tiles, side floor(sqrt(110)) - 1 = 9
        let rows = equi_stitch(&images, 40, &mut rng).unwrap();
        assert_eq!(rows.dimensions(), (360, 315));

        let columns = vequi_stitch(&images, 40, &mut rng).unwrap();
        assert_eq!(columns.dimensions(), (315, 360));
    }

    // Tests the edge tile closes the seam between first and last column
    #[test]
    fn test_row_seam_matches() {
        let images = tiled_sources();

        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let canvas = equilateral_stitch(&images, 40, Lattice::Rows, &mut rng).unwrap();
            let width = canvas.width();

            assert_eq!(
                canvas.get_pixel(0, 1),
                canvas.get_pixel(width - 1, 1),
                "seed {seed}"
            );
        }
    }

    // Tests every canvas pixel is covered once the lattice is complete
    #[test]
    fn test_rows_leave_no_background_inside() {
        let images = tiled_sources();
        let mut rng = StdRng::seed_from_u64(12);
        let canvas = equi_stitch(&images, 40, &mut rng).unwrap();

        let background = Rgb([100, 255, 255]);
        let uncovered = canvas.pixels().filter(|p| **p == background).count();
        assert_eq!(uncovered, 0);
    }

    // Tests sources too small for a lattice are degenerate
    #[test]
    fn test_small_sources_are_degenerate() {
        let images = [RgbImage::new(50, 50), RgbImage::new(50, 50)];
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            equi_stitch(&images, 40, &mut rng),
            Err(CollageError::DegenerateGeometry { .. })
        ));
        assert!(matches!(
            vequi_stitch(&images, 40, &mut rng),
            Err(CollageError::DegenerateGeometry { .. })
        ));
    }

    // Tests a tile taller than the crop is rejected before slicing
    #[test]
    fn test_tile_must_fit() {
        let images = [RgbImage::new(400, 30)];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            equi_stitch(&images, 40, &mut rng),
            Err(CollageError::InvalidParameter { .. })
        ));
    }
}
