/// Path segment the backend uses for the streaming form of a result.
pub const STREAM_SEGMENT: &str = "/download/";
/// Path segment of the retrievable file resource.
pub const FILE_SEGMENT: &str = "/download_file/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub suggested_name: Option<String>,
}

impl DownloadLink {
    pub fn from_status(download_url: &str, filename: Option<&str>) -> Self {
        Self {
            href: rewrite_download_path(download_url),
            suggested_name: filename.map(ToOwned::to_owned),
        }
    }
}

/// Rewrites the first `/download/` segment to `/download_file/`.
pub fn rewrite_download_path(download_url: &str) -> String {
    download_url.replacen(STREAM_SEGMENT, FILE_SEGMENT, 1)
}
