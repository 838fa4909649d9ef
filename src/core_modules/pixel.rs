// THEORY:
// The `Pixel` module is the most fundamental unit of the vision system. It is a
// "dumb" data container for a single RGBA pixel read straight out of the image
// buffer. It carries no derived color science of its own; the HSV projection
// that the segmentation layer works in lives in the `hsv` module, which takes
// a `Pixel` as input.
//
// Key architectural principles:
// 1.  **Single-pixel scope**: A `Pixel` knows nothing about its neighbors, its
//     position in the image, or the category it will eventually receive. Those
//     concerns belong to higher layers (`segmentation`, `mask`, `stats`).
// 2.  **Byte fidelity**: Channels are kept as raw 0-255 bytes so that the
//     conversion into HSV happens exactly once, in one place, with one set of
//     numerics. This matters because the downstream thresholds are exact.
// 3.  **Cheap construction**: Pixels are built per image position in the hot
//     loop, so construction is a plain field copy with no computation.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::{Bytes, Pixel};

    #[test]
    fn from_bytes_round_trips() {
        let bytes = [12u8, 34, 56, 255];
        let pixel = Pixel::from(&bytes[..]);
        assert_eq!(pixel, Pixel::new(12, 34, 56, 255));

        let back: Bytes = pixel.into();
        assert_eq!(back, bytes.to_vec());
    }

    #[test]
    #[should_panic]
    fn from_bytes_rejects_wrong_length() {
        let bytes = [1u8, 2, 3];
        let _ = Pixel::from(&bytes[..]);
    }
}
