//! Tests for strip stitching and grid-of-grids composition

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use tilecollage::CollageError;
    use tilecollage::algorithm::stitch::{StripAxis, grid_stitch, hstitch, strip_stitch, vstitch};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn solids() -> [RgbImage; 2] {
        [
            RgbImage::from_pixel(200, 200, RED),
            RgbImage::from_pixel(200, 200, BLUE),
        ]
    }

    // Tests both strip orientations keep the crop size with half the strips
    #[test]
    fn test_stitch_solid_sources() {
        let images = solids();
        let mut rng = StdRng::seed_from_u64(42);

        for result in [
            hstitch(&images, 50, &mut rng),
            vstitch(&images, 50, &mut rng),
        ] {
            let canvas = result.unwrap();
            assert_eq!(canvas.dimensions(), (200, 200));
            assert!(canvas.pixels().all(|p| *p == RED || *p == BLUE));
        }
    }

    // Tests each sampled strip appears whole and at most once
    #[test]
    fn test_strips_are_distinct() {
        let images: Vec<RgbImage> = (0..2u8)
            .map(|source| {
                RgbImage::from_fn(120, 200, |_, y| Rgb([source * 100, (y / 50) as u8 * 50, 9]))
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(5);

        let canvas = strip_stitch(&images, 50, StripAxis::Horizontal, &mut rng).unwrap();
        assert_eq!(canvas.dimensions(), (120, 200));

        let mut colours = HashSet::new();
        for band in 0..4 {
            let colour = *canvas.get_pixel(0, band * 50);
            for y in band * 50..(band + 1) * 50 {
                for x in 0..120 {
                    assert_eq!(*canvas.get_pixel(x, y), colour);
                }
            }
            assert!(colours.insert(colour), "strip {colour:?} used twice");
        }
    }

    // Tests vertical strips grow the canvas along the width
    #[test]
    fn test_vertical_length_follows_sample() {
        let images = [
            RgbImage::from_pixel(100, 80, RED),
            RgbImage::from_pixel(130, 90, BLUE),
        ];
        let mut rng = StdRng::seed_from_u64(8);

        // Crop 100x80, 3 strips of 30 each, 6 in total, 3 sampled
        let canvas = vstitch(&images, 30, &mut rng).unwrap();
        assert_eq!(canvas.dimensions(), (90, 80));
    }

    // Tests strips thicker than the crop are rejected
    #[test]
    fn test_oversized_strip() {
        let images = solids();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            hstitch(&images, 201, &mut rng),
            Err(CollageError::InvalidParameter { .. })
        ));
    }

    // Tests a lone strip leaves nothing to sample
    #[test]
    fn test_single_strip_is_degenerate() {
        let images = [RgbImage::from_pixel(100, 100, RED)];
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            vstitch(&images, 60, &mut rng),
            Err(CollageError::DegenerateGeometry { .. })
        ));
    }

    // Tests an empty source list is rejected
    #[test]
    fn test_empty_sources() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(hstitch(&[], 10, &mut rng).is_err());
    }

    // Tests grid stitching two square stitches stays square
    #[test]
    fn test_grid_stitch_dimensions() {
        let images = solids();
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..4 {
            let canvas = grid_stitch(&images, 50, &mut rng).unwrap();
            assert_eq!(canvas.dimensions(), (200, 200));
            assert!(canvas.pixels().all(|p| *p == RED || *p == BLUE));
        }
    }

    // Tests the same seed reproduces the same composite
    #[test]
    fn test_seeded_reproducibility() {
        let images: Vec<RgbImage> = (0..2u8)
            .map(|s| RgbImage::from_fn(150, 150, |x, y| Rgb([x as u8, y as u8, s])))
            .collect();

        let first = grid_stitch(&images, 30, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = grid_stitch(&images, 30, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    // Tests the transposed axis
    #[test]
    fn test_transposed_axis() {
        assert_eq!(StripAxis::Horizontal.transposed(), StripAxis::Vertical);
        assert_eq!(StripAxis::Vertical.transposed(), StripAxis::Horizontal);
    }
}
