// THEORY:
// The `mask` module is the visualization layer of the pipeline. For every
// analysis it produces five RGBA buffers, each the exact size of the source
// image, that let a caller see what the segmentation saw: a brightness
// (value-channel) grayscale, one mask per color category, and a combined
// overlay of all three categories.
//
// Key architectural principles:
// 1.  **Overwrite semantics**: Buffers start zeroed (fully transparent black)
//     and are written exactly once per pixel. The builder never reads back
//     what it wrote, so there is no blending and no order dependence.
// 2.  **Disjoint writes**: Each pixel touches only its own 4-byte slot in
//     each buffer. This is what lets the analyzer hand disjoint row bands of
//     every mask to different workers without locks.
// 3.  **Category-independent value channel**: The grayscale mask is computed
//     from the HSV value of every pixel, background included. It is a
//     brightness picture of the frame, not a segmentation output.

pub mod mask {
    use crate::core_modules::hsv::hsv::HsvColor;
    use crate::core_modules::pixel::pixel::CHANNELS;
    use crate::core_modules::segmentation::segmentation::Category;

    /// Display color for green-category pixels.
    pub const GREEN_DISPLAY: [u8; 4] = [0, 255, 0, 255];
    /// Display color for yellow-category pixels.
    pub const YELLOW_DISPLAY: [u8; 4] = [255, 255, 0, 255];
    /// Display color for brown-category pixels.
    pub const BROWN_DISPLAY: [u8; 4] = [139, 69, 19, 255];

    /// The five per-analysis visualization buffers, all `width * height * 4`
    /// bytes, RGBA, row-major. Owned by the report that carries them; the
    /// pipeline never retains a reference after returning.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MaskSet {
        /// Brightness grayscale of every pixel, alpha fixed at 255.
        pub value: Vec<u8>,
        /// Green-category pixels in `GREEN_DISPLAY`, everything else transparent.
        pub green: Vec<u8>,
        /// Yellow-category pixels in `YELLOW_DISPLAY`, everything else transparent.
        pub yellow: Vec<u8>,
        /// Brown-category pixels in `BROWN_DISPLAY`, everything else transparent.
        pub brown: Vec<u8>,
        /// Union of the three category colors, background transparent.
        pub combined: Vec<u8>,
    }

    impl MaskSet {
        /// Allocates five zeroed buffers for an image of `pixel_count` pixels.
        pub fn zeroed(pixel_count: usize) -> Self {
            let len = pixel_count * CHANNELS;
            Self {
                value: vec![0; len],
                green: vec![0; len],
                yellow: vec![0; len],
                brown: vec![0; len],
                combined: vec![0; len],
            }
        }

        /// Borrows all five buffers mutably as one band, for handing a full
        /// image (or a worker's row band) to `write_pixel` via `MaskBand`.
        pub fn as_band(&mut self) -> MaskBand<'_> {
            MaskBand {
                value: &mut self.value,
                green: &mut self.green,
                yellow: &mut self.yellow,
                brown: &mut self.brown,
                combined: &mut self.combined,
            }
        }

        /// Splits the mask set into two disjoint bands at a pixel boundary.
        /// The split index is in pixels, not bytes.
        pub fn split_at_pixel(&mut self, pixel_index: usize) -> (MaskBand<'_>, MaskBand<'_>) {
            let byte_index = pixel_index * CHANNELS;
            let (value_a, value_b) = self.value.split_at_mut(byte_index);
            let (green_a, green_b) = self.green.split_at_mut(byte_index);
            let (yellow_a, yellow_b) = self.yellow.split_at_mut(byte_index);
            let (brown_a, brown_b) = self.brown.split_at_mut(byte_index);
            let (combined_a, combined_b) = self.combined.split_at_mut(byte_index);
            (
                MaskBand {
                    value: value_a,
                    green: green_a,
                    yellow: yellow_a,
                    brown: brown_a,
                    combined: combined_a,
                },
                MaskBand {
                    value: value_b,
                    green: green_b,
                    yellow: yellow_b,
                    brown: brown_b,
                    combined: combined_b,
                },
            )
        }
    }

    /// Mutable views over a contiguous pixel range of all five masks.
    /// Each worker owns exactly one band, so writes never overlap.
    pub struct MaskBand<'a> {
        pub value: &'a mut [u8],
        pub green: &'a mut [u8],
        pub yellow: &'a mut [u8],
        pub brown: &'a mut [u8],
        pub combined: &'a mut [u8],
    }

    impl<'a> MaskBand<'a> {
        /// Splits off the first `pixel_count` pixels of this band.
        pub fn split_at_pixel(self, pixel_count: usize) -> (MaskBand<'a>, MaskBand<'a>) {
            let byte_index = pixel_count * CHANNELS;
            let (value_a, value_b) = self.value.split_at_mut(byte_index);
            let (green_a, green_b) = self.green.split_at_mut(byte_index);
            let (yellow_a, yellow_b) = self.yellow.split_at_mut(byte_index);
            let (brown_a, brown_b) = self.brown.split_at_mut(byte_index);
            let (combined_a, combined_b) = self.combined.split_at_mut(byte_index);
            (
                MaskBand {
                    value: value_a,
                    green: green_a,
                    yellow: yellow_a,
                    brown: brown_a,
                    combined: combined_a,
                },
                MaskBand {
                    value: value_b,
                    green: green_b,
                    yellow: yellow_b,
                    brown: brown_b,
                    combined: combined_b,
                },
            )
        }

        /// Writes one classified pixel into the band.
        ///
        /// `band_pixel_index` is relative to the start of this band. The value
        /// channel is written for every pixel; the category masks and the
        /// combined overlay only for fruit pixels. Background leaves its
        /// slots at transparent black.
        pub fn write_pixel(&mut self, band_pixel_index: usize, hsv: &HsvColor, category: Category) {
            let i = band_pixel_index * CHANNELS;

            let gray = (hsv.value / 100.0 * 255.0).round() as u8;
            self.value[i] = gray;
            self.value[i + 1] = gray;
            self.value[i + 2] = gray;
            self.value[i + 3] = 255;

            match category {
                Category::Green => {
                    self.green[i..i + CHANNELS].copy_from_slice(&GREEN_DISPLAY);
                    self.combined[i..i + CHANNELS].copy_from_slice(&GREEN_DISPLAY);
                }
                Category::Yellow => {
                    self.yellow[i..i + CHANNELS].copy_from_slice(&YELLOW_DISPLAY);
                    self.combined[i..i + CHANNELS].copy_from_slice(&YELLOW_DISPLAY);
                }
                Category::Brown => {
                    self.brown[i..i + CHANNELS].copy_from_slice(&BROWN_DISPLAY);
                    self.combined[i..i + CHANNELS].copy_from_slice(&BROWN_DISPLAY);
                }
                Category::Background => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mask::{BROWN_DISPLAY, GREEN_DISPLAY, MaskSet, YELLOW_DISPLAY};
    use crate::core_modules::hsv::hsv::HsvColor;
    use crate::core_modules::segmentation::segmentation::Category;

    fn hsv(hue: f64, saturation: f64, value: f64) -> HsvColor {
        HsvColor {
            hue,
            saturation,
            value,
        }
    }

    #[test]
    fn zeroed_buffers_have_image_size() {
        let masks = MaskSet::zeroed(10);
        assert_eq!(masks.value.len(), 40);
        assert_eq!(masks.combined.len(), 40);
    }

    #[test]
    fn green_pixel_lands_in_green_and_combined() {
        let mut masks = MaskSet::zeroed(2);
        let mut band = masks.as_band();
        band.write_pixel(1, &hsv(120.0, 100.0, 100.0), Category::Green);

        assert_eq!(&masks.green[4..8], &GREEN_DISPLAY);
        assert_eq!(&masks.combined[4..8], &GREEN_DISPLAY);
        // The other category masks stay transparent.
        assert_eq!(&masks.yellow[4..8], &[0, 0, 0, 0]);
        assert_eq!(&masks.brown[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn background_pixel_still_gets_value_channel() {
        let mut masks = MaskSet::zeroed(1);
        let mut band = masks.as_band();
        band.write_pixel(0, &hsv(240.0, 100.0, 50.0), Category::Background);

        // v = 50 maps to round(127.5) = 128 gray with opaque alpha.
        assert_eq!(&masks.value[0..4], &[128, 128, 128, 255]);
        assert_eq!(&masks.combined[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn display_colors_match_contract() {
        assert_eq!(GREEN_DISPLAY, [0, 255, 0, 255]);
        assert_eq!(YELLOW_DISPLAY, [255, 255, 0, 255]);
        assert_eq!(BROWN_DISPLAY, [139, 69, 19, 255]);
    }

    #[test]
    fn split_bands_are_disjoint() {
        let mut masks = MaskSet::zeroed(4);
        {
            let (mut low, mut high) = masks.split_at_pixel(2);
            low.write_pixel(0, &hsv(60.0, 100.0, 100.0), Category::Yellow);
            high.write_pixel(1, &hsv(15.0, 50.0, 30.0), Category::Brown);
        }
        assert_eq!(&masks.yellow[0..4], &YELLOW_DISPLAY);
        assert_eq!(&masks.brown[12..16], &BROWN_DISPLAY);
    }
}
