use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Abdulbasit Yusuf";
pub const TITLE: &str = "Abdulbasit Yusuf | Frontend Developer";
pub const TAGLINE: &str = "A new day...another opportunity to become world class";

pub const GITHUB_URL: &str = "https://github.com/Jideotetic";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jideotetic/";
pub const WHATSAPP_URL: &str = "https://wa.me/+2349014349835";

pub const LOGO_PATH: &str = "/JD.svg";
pub const ILLUSTRATION_PATH: &str = "/3d-illustration.png";
pub const RESUME_PATH: &str = "/Abdulbasit Yusuf's CV.pdf";
/// Scale applied on top of the measured container width when rendering a resume page.
pub const RESUME_PAGE_SCALE: f64 = 0.975;

const FALLBACK_YEAR: i32 = 2025;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Projects",
        href: "#latest-projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Year shown in the footer, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    year_from_timestamp(env!("BUILD_TIME"))
}

fn year_from_timestamp(ts: &str) -> i32 {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_build_time() {
        assert_eq!(year_from_timestamp("2026-03-14T09:26:53.589793+00:00"), 2026);
        assert_eq!(year_from_timestamp("1999-12-31T23:59:59Z"), 1999);
    }

    #[test]
    fn test_year_falls_back_on_garbage() {
        assert_eq!(year_from_timestamp(""), FALLBACK_YEAR);
        assert_eq!(year_from_timestamp("yesterday"), FALLBACK_YEAR);
    }

    #[test]
    fn test_copyright_year_is_sane() {
        assert!(copyright_year() >= FALLBACK_YEAR);
    }

    fn public_asset(path: &str) -> Vec<u8> {
        let full = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(path.trim_start_matches('/'));
        std::fs::read(&full).unwrap_or_else(|e| panic!("{} missing: {e}", full.display()))
    }

    #[test]
    fn test_static_assets_shipped() {
        assert!(public_asset(RESUME_PATH).starts_with(b"%PDF-"));
        assert!(public_asset(ILLUSTRATION_PATH).starts_with(b"\x89PNG"));
        assert!(public_asset(LOGO_PATH).starts_with(b"<svg"));
    }

    #[test]
    fn test_nav_links_are_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
            assert!(!link.label.is_empty());
        }
    }
}
