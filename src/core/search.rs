//! Library search matching.
//!
//! A query is a whitespace-separated list of terms; a path matches when it
//! contains every term. Comparison is case-insensitive on NFC-normalised
//! text, with no accent folding.

use unicode_normalization::UnicodeNormalization;

fn fold(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Whether `path` matches every term of `query`. A blank query matches all.
pub fn matches_search(path: &str, query: &str) -> bool {
    let haystack = fold(path);
    fold(query)
        .split_whitespace()
        .all(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_all_required() {
        let cases = [
            ("/videos/movie.mp4", "movie", true),
            ("/videos/movie.mp4", "MOVIE", true),
            ("/videos/movie.mp4", "mov mp4", true),
            ("/videos/movie.mp4", "mov mkv", false),
            ("/videos/holiday_trip_2023.mp4", "holiday 2023", true),
            ("/videos/holiday_trip_2023.mp4", "trip 2022", false),
            ("/videos/holiday_trip_2023.mp4", "holiday_trip_2023.mkv", false),
            ("/videos/series/episode01.mkv", "SERIES   EPISODE01", true),
            ("/videos/series/episode01.mkv", "series episode01.mkv extra", false),
            ("/videos/series/episode01.mkv", "series/episode01.mkv", true),
            ("/videos/!@#$_file-123.MP4", "file 123", true),
            ("/videos/!@#$_file-123.MP4", "file_124", false),
        ];
        for (path, query, expected) in cases {
            assert_eq!(matches_search(path, query), expected, "{path:?} / {query:?}");
        }
    }

    #[test]
    fn test_blank_query_matches() {
        assert!(matches_search("/videos/holiday_trip_2023.mp4", ""));
        assert!(matches_search("/videos/holiday_trip_2023.mp4", "   "));
    }

    #[test]
    fn test_unicode() {
        let path = "/videos/Äpfel_und_Öl.mp4";
        assert!(matches_search(path, "äpfel"));
        assert!(matches_search(path, "öl"));
        assert!(!matches_search(path, "apfel"));

        assert!(matches_search("/videos/スペシャル/映画.mp4", "映画"));
        assert!(!matches_search("/videos/スペシャル/映画.mp4", "えいが"));
        assert!(matches_search("/videos/emoji/🎬_movie.mp4", "🎬 movie"));
        assert!(!matches_search("/videos/emoji/🎬_movie.mp4", "🎥"));
    }

    #[test]
    fn test_decomposed_path_matches_composed_query() {
        // "A" + combining diaeresis
        let decomposed = "/videos/A\u{308}pfel.mp4";
        assert!(matches_search(decomposed, "äpfel"));
    }
}
