use once_cell::sync::Lazy;
use regex::Regex;

// Optional scheme, optional www, then a YouTube host (including the common
// "youtube/..." and "youtu.be" shorthand typos people paste) and a non-empty path.
static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$")
        .expect("video URL pattern compiles")
});

/// Check whether a string is an acceptable YouTube video URL
pub fn is_supported_video_url(url: &str) -> bool {
    VIDEO_URL.is_match(url)
}
