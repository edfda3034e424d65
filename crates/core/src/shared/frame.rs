/// A single decoded image: contiguous pixel bytes in row-major order.
///
/// Format conversion happens at the decoding boundary only; everything
/// downstream treats pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// True for frames with no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_single_channel_frame() {
        let frame = Frame::new(vec![7u8; 6], 3, 2, 1);
        assert_eq!(frame.channels(), 1);
        assert_eq!(frame.data().len(), 6);
    }

    #[test]
    fn test_is_empty_zero_width() {
        let frame = Frame::new(Vec::new(), 0, 10, 3);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_is_empty_zero_height() {
        let frame = Frame::new(Vec::new(), 10, 0, 3);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_non_empty_frame() {
        let frame = Frame::new(vec![0u8; 3], 1, 1, 3);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2, 3);
        let cloned = frame.clone();
        assert_eq!(frame, cloned);
        drop(frame);
        assert_eq!(cloned.data()[0], 100);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2, 3);
    }
}
