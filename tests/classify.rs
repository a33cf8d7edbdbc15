use image::{GrayImage, Luma, Rgb, RgbImage};
use rand::{Rng, SeedableRng};

use is_illust::{analyze, classify, grayscale, resize, Error, Label, PixelBuffer};

/// White 64x64 canvas with one horizontal and one vertical 4px stroke.
fn strokes<P>(background: P, ink: P) -> image::ImageBuffer<P, Vec<u8>>
where
    P: image::Pixel<Subpixel = u8>,
{
    image::ImageBuffer::from_fn(64, 64, |x, y| {
        let horizontal = (10..50).contains(&x) && (20..24).contains(&y);
        let vertical = (30..34).contains(&x) && (30..58).contains(&y);

        if horizontal || vertical {
            ink
        } else {
            background
        }
    })
}

#[test]
fn solid_black_is_picture_with_zero_score() {
    let buffer = PixelBuffer::Gray(GrayImage::new(8, 8));
    let c = classify(&buffer).unwrap();

    assert_eq!(c.analysis.raw_edges, 0);
    assert_eq!(c.score, 0.0);
    assert_eq!(c.label, Label::Picture);
}

#[test]
fn uniform_color_4x4_is_picture() {
    let buffer = PixelBuffer::Rgb(RgbImage::from_pixel(4, 4, Rgb([10, 200, 30])));
    let c = classify(&buffer).unwrap();

    assert_eq!(c.analysis.color_fraction, 4.0);
    assert_eq!(c.score, 0.0);
    assert_eq!(c.label, Label::Picture);
}

#[test]
fn checkerboard_texture_is_picture() {
    let img = GrayImage::from_fn(8, 8, |x, y| Luma([if (x + y) % 2 == 0 { 0 } else { 255 }]));
    let c = classify(&PixelBuffer::Gray(img)).unwrap();

    // the blur flattens the pattern completely
    assert_eq!(c.analysis.gau_ratio, 1.0);
    assert_eq!(c.analysis.gaussian_edges, 0);

    // a 5x5 median keeps a one-pixel checkerboard (13 of 25 taps share the
    // center color), so only the replicated borders change and gain edges
    assert_eq!(c.analysis.raw_edges, 4);
    assert_eq!(c.analysis.median_edges, 20);
    assert_eq!(c.analysis.med_ratio, -4.0);
    assert_eq!(c.analysis.color_fraction, 4.0);
    assert!(c.score < 0.5, "score {}", c.score);
    assert_eq!(c.label, Label::Picture);
}

#[test]
fn flat_background_with_strokes_is_illust() {
    let img = strokes(Luma([255]), Luma([0]));
    let c = classify(&PixelBuffer::Gray(img)).unwrap();

    assert_eq!(c.analysis.raw_edges, 144);
    assert!(c.analysis.gau_ratio + c.analysis.med_ratio > 0.0);
    assert!(c.analysis.gau_ratio + c.analysis.med_ratio < 0.1);
    assert!(c.analysis.color_fraction > 57.6);
    assert!(c.score >= 0.5, "score {}", c.score);
    assert_eq!(c.label, Label::Illust);
}

#[test]
fn colored_strokes_are_illust() {
    let img = strokes(Rgb([255, 255, 255]), Rgb([200, 30, 30]));
    let c = classify(&PixelBuffer::Rgb(img)).unwrap();

    assert_eq!(c.label, Label::Illust);
}

#[test]
fn classification_is_deterministic() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let img = RgbImage::from_fn(48, 32, |_, _| Rgb(rng.gen()));
    let buffer = PixelBuffer::Rgb(img);

    let first = classify(&buffer).unwrap();
    for _ in 0..3 {
        assert_eq!(classify(&buffer).unwrap(), first);
    }
}

#[test]
fn concurrent_calls_agree() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let img = GrayImage::from_fn(40, 40, |_, _| Luma([rng.gen()]));
    let buffer = PixelBuffer::Gray(img);
    let expected = classify(&buffer).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| classify(&buffer).unwrap())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn analysis_matches_classification() {
    let buffer = PixelBuffer::Gray(strokes(Luma([255]), Luma([0])));
    let analysis = analyze(&buffer).unwrap();
    let c = classify(&buffer).unwrap();

    assert_eq!(analysis, c.analysis);
    assert!(analysis.is_illust(&is_illust::STANDARD_PARAMS));
    assert!(!analysis.is_picture(&is_illust::STANDARD_PARAMS));
}

#[test]
fn empty_buffer_fails_explicitly() {
    let result = classify(&PixelBuffer::Rgb(RgbImage::new(0, 0)));

    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn normalizing_gray_is_identity() {
    let img = GrayImage::from_fn(6, 6, |x, y| Luma([(x * y * 7) as u8]));
    let buffer = PixelBuffer::Gray(img.clone());

    assert_eq!(*grayscale::normalize(&buffer), img);
}

#[test]
fn resize_policy_boundaries() {
    let small = PixelBuffer::Gray(GrayImage::new(2000, 2000));
    assert_eq!(resize::downscale_oversized(small).dimensions(), (2000, 2000));

    let large = PixelBuffer::Gray(GrayImage::new(2001, 1000));
    assert_eq!(resize::downscale_oversized(large).dimensions(), (1000, 500));
}
