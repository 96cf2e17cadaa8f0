use std::path::Path;

use segviz_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded image preserving the channel layout of the source file.
pub enum DecodedImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
}

impl DecodedImage {
    /// Get the size of the decoded image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            DecodedImage::L8(img) => img.size(),
            DecodedImage::Rgb8(img) => img.size(),
        }
    }

    /// Get the number of channels of the decoded image.
    pub fn num_channels(&self) -> usize {
        match self {
            DecodedImage::L8(_) => 1,
            DecodedImage::Rgb8(_) => 3,
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
/// Single-channel files decode to [`DecodedImage::L8`]; everything else is
/// converted to RGB8.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A [`DecodedImage`] containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<DecodedImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {:?} as {:?} {}", file_path, img.color(), size);

    let image = match img.color() {
        image::ColorType::L8 => DecodedImage::L8(Image::new(size, img.into_luma8().to_vec())?),
        _ => DecodedImage::Rgb8(Image::new(size, img.into_rgb8().to_vec())?),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::{read_image_any, DecodedImage};
    use crate::error::IoError;

    fn write_test_png(
        path: &std::path::Path,
        color: image::ExtendedColorType,
        channels: usize,
    ) -> Result<(), IoError> {
        let data = vec![128u8; 4 * 2 * channels];
        image::save_buffer(path, &data, 4, 2, color)?;
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_any("not/a/real/file.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_rgb_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");
        write_test_png(&file_path, image::ExtendedColorType::Rgb8, 3)?;

        let decoded = read_image_any(&file_path)?;
        assert_eq!(decoded.size().width, 4);
        assert_eq!(decoded.size().height, 2);
        assert!(matches!(decoded, DecodedImage::Rgb8(_)));
        Ok(())
    }

    #[test]
    fn read_gray_png_stays_single_channel() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");
        write_test_png(&file_path, image::ExtendedColorType::L8, 1)?;

        let decoded = read_image_any(&file_path)?;
        assert_eq!(decoded.num_channels(), 1);
        match decoded {
            DecodedImage::L8(img) => assert_eq!(img.as_slice(), &[128u8; 8]),
            DecodedImage::Rgb8(_) => panic!("expected a single channel image"),
        }
        Ok(())
    }

    #[test]
    fn read_corrupt_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"not an image at all")?;

        let res = read_image_any(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
        Ok(())
    }
}
