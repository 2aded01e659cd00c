//! Tests for dominant colour detection

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tilecollage::analysis::palette::dominant_color;

    // Tests the most frequent colour wins
    #[test]
    fn test_most_frequent_colour() {
        let image = RgbImage::from_fn(10, 10, |x, _| {
            if x < 7 {
                Rgb([10, 20, 30])
            } else {
                Rgb([200, 200, 200])
            }
        });
        assert_eq!(dominant_color(&image), Some(Rgb([10, 20, 30])));
    }

    // Tests equal counts resolve to the larger colour
    #[test]
    fn test_ties_prefer_larger_colour() {
        let image = RgbImage::from_fn(4, 1, |x, _| {
            if x % 2 == 0 {
                Rgb([5, 0, 0])
            } else {
                Rgb([5, 0, 1])
            }
        });
        assert_eq!(dominant_color(&image), Some(Rgb([5, 0, 1])));
    }

    // Tests an empty image has no dominant colour
    #[test]
    fn test_empty_image() {
        assert_eq!(dominant_color(&RgbImage::new(0, 0)), None);
    }
}
