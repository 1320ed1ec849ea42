use crate::error::ImageError;
use profilecheck_core::{PictureClassification, Platform};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Size bands of the heuristic, in KB.
const TINY_KB: f64 = 5.0;
const STOCK_KB: f64 = 500.0;

/// Downloads profile pictures into a staging directory and classifies them
/// by byte size.
///
/// The staging directory is shared process-wide and tolerates concurrent
/// use: every download gets a unique, request-scoped file name
/// (platform + username + timestamp), and each file is removed again before
/// `classify` returns, on every path.
pub struct PictureClassifier {
    staging_dir: PathBuf,
    client: reqwest::Client,
}

impl PictureClassifier {
    /// Create a classifier staging downloads under `staging_dir`.
    #[must_use]
    pub fn new(staging_dir: PathBuf) -> Self {
        Self {
            staging_dir,
            client: reqwest::Client::new(),
        }
    }

    /// Classify the picture at `image_url`.
    ///
    /// An absent URL returns the default classification immediately with no
    /// I/O. Retrieval or filesystem failures also return the default, with
    /// the reason in `error`; they never abort the analysis.
    pub async fn classify(
        &self,
        image_url: Option<&str>,
        platform: Platform,
        username: &str,
    ) -> PictureClassification {
        let Some(url) = image_url else {
            return PictureClassification::unavailable(None);
        };

        let path = self.staged_path(platform, username);
        let result = self.download_and_classify(url, &path).await;

        // Unconditional cleanup, success or not. NotFound just means the
        // download never got as far as writing the file.
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Failed to delete temporary image {}: {}", path.display(), e);
            }
        }

        match result {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!(url, "Profile picture classification failed: {}", e);
                PictureClassification::unavailable(Some(e.to_string()))
            }
        }
    }

    async fn download_and_classify(
        &self,
        url: &str,
        path: &Path,
    ) -> Result<PictureClassification, ImageError> {
        tokio::fs::create_dir_all(&self.staging_dir).await?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(path, &bytes).await?;

        let size = tokio::fs::metadata(path).await?.len();
        Ok(classify_size(size))
    }

    fn staged_path(&self, platform: Platform, username: &str) -> PathBuf {
        let filename = format!(
            "{}_{}_{}.jpg",
            platform,
            sanitize_username(username),
            chrono::Utc::now().timestamp_millis()
        );
        self.staging_dir.join(filename)
    }
}

/// The three-band size heuristic.
fn classify_size(bytes: u64) -> PictureClassification {
    #[allow(clippy::cast_precision_loss)]
    let size_kb = bytes as f64 / 1024.0;

    if size_kb < TINY_KB {
        // Too small to be a real profile photo.
        PictureClassification {
            is_human: false,
            confidence: 0.6,
            stock_photo: false,
            error: None,
        }
    } else if size_kb > STOCK_KB {
        // Large high-quality images skew toward stock photography.
        PictureClassification {
            is_human: true,
            confidence: 0.65,
            stock_photo: true,
            error: None,
        }
    } else {
        PictureClassification {
            is_human: true,
            confidence: 0.8,
            stock_photo: false,
            error: None,
        }
    }
}

/// Keep file names shell- and filesystem-safe whatever the page claimed
/// the username was.
fn sanitize_username(username: &str) -> String {
    if username.is_empty() {
        return "unknown".to_string();
    }
    username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
