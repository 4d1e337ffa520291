//! Benchmark fixtures for readtime.

use readtime_types::ContentStats;

/// Counts of a representative kind of document.
#[derive(Debug, Clone, Copy)]
pub struct ContentProfile {
    /// Short identifier used as the benchmark parameter.
    pub name: &'static str,
    /// Counts fed into the estimator.
    pub stats: ContentStats,
}

impl ContentProfile {
    /// Creates a named profile.
    pub const fn new(name: &'static str, words: u64, images: u64, lines_of_code: u64) -> Self {
        Self {
            name,
            stats: ContentStats::new(words, images, lines_of_code),
        }
    }
}

/// Profiles ranging from a short note to an image-heavy long read.
pub const CONTENT_PROFILES: &[ContentProfile] = &[
    ContentProfile::new("note", 150, 0, 0),
    ContentProfile::new("blog-post", 1_200, 4, 30),
    ContentProfile::new("tutorial", 3_500, 12, 400),
    ContentProfile::new("photo-essay", 800, 60, 0),
    ContentProfile::new("book-chapter", 9_000, 25, 1_200),
];

/// Image counts used to measure how image time scales past the decay bracket.
pub const IMAGE_COUNTS: [u64; 5] = [1, 8, 12, 1_000, 1_000_000];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names_unique() {
        for (i, a) in CONTENT_PROFILES.iter().enumerate() {
            for b in &CONTENT_PROFILES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
