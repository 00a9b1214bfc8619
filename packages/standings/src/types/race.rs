//! Where the live standings for a stage are published.

use url::Url;

pub const DEFAULT_RESULTS_BASE_URL: &str = "https://www.procyclingstats.com";
pub const DEFAULT_RACE_SLUG: &str = "tour-de-france";
pub const DEFAULT_RACE_YEAR: i32 = 2025;

/// Results site, race and edition whose live pages are scraped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSource {
    pub base_url: Url,
    pub race_slug: String,
    pub year: i32,
}

impl Default for RaceSource {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_RESULTS_BASE_URL).expect("default base URL is valid"),
            race_slug: DEFAULT_RACE_SLUG.to_string(),
            year: DEFAULT_RACE_YEAR,
        }
    }
}

impl RaceSource {
    pub fn new(base_url: Url, race_slug: impl Into<String>, year: i32) -> Self {
        Self {
            base_url,
            race_slug: race_slug.into(),
            year,
        }
    }

    /// Live standings page for a stage: `{base}/race/{slug}/{year}/stage-{n}/live`.
    pub fn stage_url(&self, stage: u32) -> String {
        format!(
            "{}/race/{}/{}/stage-{}/live",
            self.base_url.as_str().trim_end_matches('/'),
            self.race_slug,
            self.year,
            stage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage_url() {
        assert_eq!(
            RaceSource::default().stage_url(7),
            "https://www.procyclingstats.com/race/tour-de-france/2025/stage-7/live"
        );
    }

    #[test]
    fn test_custom_base_url_with_trailing_slash() {
        let source = RaceSource::new(Url::parse("http://localhost:8080/").unwrap(), "giro-d-italia", 2026);
        assert_eq!(
            source.stage_url(12),
            "http://localhost:8080/race/giro-d-italia/2026/stage-12/live"
        );
    }
}
