use crate::shared::frame::Frame;

/// Converts an RGB frame to a single-channel luma frame.
///
/// Uses the `image` crate's grayscale conversion so luma weighting matches
/// the decoder's. Frames that are already single-channel pass through
/// unchanged.
pub fn to_luma(frame: &Frame) -> Frame {
    if frame.channels() == 1 {
        return frame.clone();
    }
    debug_assert_eq!(frame.channels(), 3, "grayscale input must be RGB or luma");

    let rgb = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .expect("frame buffer length must match its dimensions");
    let gray = image::imageops::grayscale(&rgb);

    Frame::new(gray.into_raw(), frame.width(), frame.height(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rgb_frame(width: u32, height: u32, pixel: [u8; 3]) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&pixel);
        }
        Frame::new(data, width, height, 3)
    }

    #[test]
    fn test_output_is_single_channel_same_dimensions() {
        let gray = to_luma(&rgb_frame(8, 6, [10, 20, 30]));
        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.width(), 8);
        assert_eq!(gray.height(), 6);
        assert_eq!(gray.data().len(), 48);
    }

    // Equal-channel pixels map to themselves: the luma weights sum to one.
    #[rstest]
    #[case::black(0)]
    #[case::mid(128)]
    #[case::white(255)]
    fn test_neutral_pixels_keep_their_value(#[case] value: u8) {
        let gray = to_luma(&rgb_frame(2, 2, [value, value, value]));
        assert!(gray.data().iter().all(|&p| p == value));
    }

    #[test]
    fn test_green_dominates_luma() {
        let from_green = to_luma(&rgb_frame(1, 1, [0, 200, 0]));
        let from_blue = to_luma(&rgb_frame(1, 1, [0, 0, 200]));
        assert!(from_green.data()[0] > from_blue.data()[0]);
    }

    #[test]
    fn test_single_channel_passes_through() {
        let input = Frame::new(vec![42u8; 12], 4, 3, 1);
        let output = to_luma(&input);
        assert_eq!(output, input);
    }
}
