use std::sync::LazyLock;

use regex::Regex;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\\?&](?:t|start|time_continue)=(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s?)?")
        .unwrap()
});

/// Reads the playback start offset from YouTube links.
pub struct YouTubeTimeParser;

impl YouTubeTimeParser {
    /// Start offset in seconds from a `t`, `start` or `time_continue` query
    /// parameter such as `t=1h2m3s`, `t=95s` or `start=95`.
    ///
    /// Every unit is optional and a bare number counts as seconds. Links
    /// without a time parameter start at 0.
    pub fn parse(link: &str) -> u64 {
        let Some(caps) = TIME_RE.captures(link) else {
            return 0;
        };

        let component = |index: usize| {
            caps.get(index)
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        };

        component(1)
            .saturating_mul(3600)
            .saturating_add(component(2).saturating_mul(60))
            .saturating_add(component(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1h2m3s", 3723 ; "full_form")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=1h2m3s", 3723 ; "short_link_full_form")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=90", 90 ; "bare_seconds")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=90s", 90 ; "seconds_only")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=2m", 120 ; "minutes_only")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=1h2m", 3720 ; "hours_and_minutes")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=1h5", 3605 ; "hours_and_bare_seconds")]
    #[test_case("https://www.youtube.com/embed/dQw4w9WgXcQ?start=42", 42 ; "start_param")]
    #[test_case("https://www.youtube.com/watch?time_continue=7&v=dQw4w9WgXcQ", 7 ; "time_continue_param")]
    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", 0 ; "no_time")]
    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&feature=share", 0 ; "other_params_only")]
    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=abc&at=5", 0 ; "suffix_match_ignored")]
    fn test_parse(link: &str, expected: u64) {
        assert_eq!(YouTubeTimeParser::parse(link), expected);
    }

    #[test]
    fn test_parse_saturates() {
        let link = "https://youtu.be/dQw4w9WgXcQ?t=99999999999999999999999h";
        assert_eq!(YouTubeTimeParser::parse(link), u64::MAX);
    }
}
