// Thin PNG writer for mask buffers. The masks are already RGBA byte buffers
// in the exact layout the encoder wants, so export is a single encode call.

pub mod image_helper {
    use image::ImageEncoder;
    use std::path::Path;

    /// Writes one RGBA buffer as a PNG file.
    pub fn save(
        path: &Path,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::save;

    #[test]
    fn save_mask_buffer() {
        let width = 32u32;
        let height = 16u32;
        let buffer = vec![255u8; (width * height * 4) as usize];

        let dir = std::env::temp_dir().join("banana_vision_image_helper_test");
        std::fs::create_dir_all(&dir).expect("Error creating temp dir.");
        let path = dir.join("white_mask.png");

        save(&path, width, height, &buffer).expect("Error saving file.");
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
