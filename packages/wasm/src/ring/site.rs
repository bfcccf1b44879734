//! Member site records.

use serde::Deserialize;

/// An internship listed on a member's card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Internship {
    pub company: String,
}

/// One member of the webring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSite {
    pub name: String,
    /// Graduation year, when given.
    #[serde(default)]
    pub year: Option<u32>,
    pub website: String,
    #[serde(default)]
    pub internships: Vec<Internship>,
}

impl MemberSite {
    /// Whether `url` points at this member's website.
    ///
    /// Comparison ignores the scheme, a trailing slash and ASCII case.
    pub fn matches_url(&self, url: &str) -> bool {
        normalize_url(&self.website).eq_ignore_ascii_case(normalize_url(url))
    }
}

fn normalize_url(url: &str) -> &str {
    let url = url.trim();
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(website: &str) -> MemberSite {
        MemberSite {
            name: "Ada".to_string(),
            year: Some(2026),
            website: website.to_string(),
            internships: vec![],
        }
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("https://ada.dev/"), "ada.dev");
        assert_eq!(normalize_url("http://ada.dev"), "ada.dev");
        assert_eq!(normalize_url("ada.dev/blog"), "ada.dev/blog");
    }

    #[test]
    fn test_matches_url() {
        let member = site("https://ada.dev/");
        assert!(member.matches_url("http://ada.dev"));
        assert!(member.matches_url("https://ADA.dev/"));
        assert!(!member.matches_url("https://ada.dev/blog"));
        assert!(!member.matches_url("https://bob.dev"));
    }
}
