use std::io::BufRead;
use std::path::Path;

use segviz::image::Image;
use segviz::imgproc;
use segviz::io::functional as F;
use segviz::io::{DecodedImage, IoError};

/// Images to segment, relative to the working directory.
const IMAGE_PATHS: [&str; 2] = ["Foto/1.jpg", "Foto/2.jpg"];

/// Global intensity cutoff shared by all images in one run.
const THRESHOLD_VALUE: u8 = 127;

/// Load an image, collapse it to grayscale and apply a fixed binary threshold.
///
/// Returns the grayscale original together with the binary segmentation, or
/// `None` when the file is missing or not decodable as an image; in that case
/// the path is reported on stdout and the caller is expected to skip it.
fn segment(
    path: impl AsRef<Path>,
    threshold: u8,
) -> Result<Option<(Image<u8, 1>, Image<u8, 1>)>, Box<dyn std::error::Error>> {
    let path = path.as_ref();

    let decoded = match F::read_image_any(path) {
        Ok(decoded) => decoded,
        Err(IoError::FileDoesNotExist(_)) | Err(IoError::ImageDecodeError(_)) => {
            println!("Image {} not found.", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    // convert to grayscale only when the source carries color channels
    let gray = match decoded {
        DecodedImage::L8(img) => img,
        DecodedImage::Rgb8(img) => {
            let mut gray = Image::<u8, 1>::from_size_val(img.size(), 0)?;
            imgproc::color::gray_from_rgb_u8(&img, &mut gray)?;
            gray
        }
    };

    let mut binary = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
    imgproc::threshold::threshold_binary(&gray, &mut binary, threshold, 255)?;

    Ok(Some((gray, binary)))
}

/// Log the original, its segmentation and the intensity histogram to Rerun,
/// then block until the user dismisses the view by pressing Enter.
fn show(
    rec: &rerun::RecordingStream,
    original: &Image<u8, 1>,
    segmented: &Image<u8, 1>,
    title_original: &str,
    title_segmented: &str,
    title_histogram: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    rec.log(
        title_original,
        &rerun::Image::from_elements(
            original.as_slice(),
            original.size().into(),
            rerun::ColorModel::L,
        ),
    )?;

    rec.log(
        title_segmented,
        &rerun::Image::from_elements(
            segmented.as_slice(),
            segmented.size().into(),
            rerun::ColorModel::L,
        ),
    )?;

    // 256 buckets over the full intensity range [0, 256)
    let mut histogram = vec![0usize; 256];
    imgproc::histogram::compute_histogram(original, &mut histogram, 256)?;

    let counts = histogram.iter().map(|&v| v as i64).collect::<Vec<_>>();
    rec.log(title_histogram, &rerun::BarChart::new(counts.as_slice()))?;

    println!("Showing {title_original}. Press Enter to continue.");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // create a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("segviz: threshold segmentation").spawn()?;

    for (i, image_path) in IMAGE_PATHS.iter().enumerate() {
        log::info!("segmenting {image_path} with threshold {THRESHOLD_VALUE}");

        let Some((original, segmented)) = segment(image_path, THRESHOLD_VALUE)? else {
            continue;
        };

        let i = i + 1;
        show(
            &rec,
            &original,
            &segmented,
            &format!("Original Image {i}"),
            &format!("Thresholding Result {i}"),
            &format!("Histogram of Original Image {i}"),
        )?;
    }

    Ok(())
}
