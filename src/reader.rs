use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

use image::{DynamicImage, ImageReader};
use threadpool::ThreadPool;

use crate::error::Error;
use crate::Result;

/// Reads and decodes a single image file. The file handle is released as
/// soon as decoding finishes.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::UnableToOpenImageFileForReading(path.display().to_string(), e))?;
    let reader = reader
        .with_guessed_format()
        .map_err(|e| Error::UnableToOpenImageFileForReading(path.display().to_string(), e))?;
    let image = reader
        .decode()
        .map_err(|e| Error::UnableToDecodeImageFile(path.display().to_string(), e))?;
    log::debug!(
        "decoded {}x{} image from '{}'",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Reads the two input files concurrently. The reads are independent, so
/// each runs on its own pool worker. An error on the first path is reported
/// in preference to one on the second.
pub fn read_image_pair(path1: &Path, path2: &Path) -> Result<(DynamicImage, DynamicImage)> {
    let threadpool = ThreadPool::new(2);
    let (sender1, receiver1) = channel();
    let (sender2, receiver2) = channel();
    spawn_read_job(&threadpool, path1, sender1);
    spawn_read_job(&threadpool, path2, sender2);
    threadpool.join();
    let image1 = receive_read_result(&receiver1)?;
    let image2 = receive_read_result(&receiver2)?;
    Ok((image1, image2))
}

fn spawn_read_job(threadpool: &ThreadPool, path: &Path, sender: Sender<Result<DynamicImage>>) {
    let path: PathBuf = path.to_path_buf();
    threadpool.execute(move || {
        let result = read_image(&path);
        sender
            .send(result)
            .expect("Receiver must outlive the read job");
    });
}

fn receive_read_result(receiver: &Receiver<Result<DynamicImage>>) -> Result<DynamicImage> {
    receiver
        .recv()
        .expect("Read job must report a result before the pool is joined")
}

#[cfg(test)]
mod tests {
    use super::read_image;
    use std::path::Path;

    #[test]
    fn missing_file_fails_on_open() {
        let result = read_image(Path::new("/nonexistent/image.png"));
        assert!(result.is_err(), "Missing file was not detected");
    }
}
