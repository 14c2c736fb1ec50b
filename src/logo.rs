use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::{fmt, str::FromStr};

pub const DEFAULT_LOGO_WIDTH: u32 = 240;

const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

const BRAND_BLUE: &str = "#0052FF";
const WHITE: &str = "#FFFFFF";

const MARK: &str = "M152 512C152 710.823 313.177 872 512 872C710.823 872 872 710.823 872 512C872 313.177 710.823 152 512 152C313.177 152 152 313.177 152 512ZM420 396C406.745 396 396 406.745 396 420V604C396 617.255 406.745 628 420 628H604C617.255 628 628 617.255 628 604V420C628 406.745 617.255 396 604 396H420Z";

const WORDMARK: &str = "Coinbase Wallet";

/// The variants of the official wallet logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogoType {
    #[default]
    Standard,
    Circle,
    Text,
    TextWithLogo,
    TextLight,
    TextWithLogoLight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown logo type `{0}'")]
pub struct UnknownLogoType(pub String);

impl LogoType {
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Circle,
        Self::Text,
        Self::TextWithLogo,
        Self::TextLight,
        Self::TextWithLogoLight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Circle => "circle",
            Self::Text => "text",
            Self::TextWithLogo => "textWithLogo",
            Self::TextLight => "textLight",
            Self::TextWithLogoLight => "textWithLogoLight",
        }
    }

    /// width and height of the drawing
    fn view_box(&self) -> (u32, u32) {
        match self {
            Self::Standard | Self::Circle => (1024, 1024),
            Self::Text | Self::TextLight => (528, 64),
            Self::TextWithLogo | Self::TextWithLogoLight => (720, 128),
        }
    }

    fn height(&self, width: u32) -> u32 {
        let (view_width, view_height) = self.view_box();
        let height = (u64::from(width) * u64::from(view_height) + u64::from(view_width) / 2)
            / u64::from(view_width);
        // no drawing is taller than wide: fits in a u32
        height as u32
    }

    fn body(&self) -> String {
        let mark = format!(
            r#"<path fill-rule="evenodd" clip-rule="evenodd" d="{MARK}" fill="{WHITE}"/>"#
        );
        let wordmark = |x: u32, y: u32, size: u32, color: &str| {
            format!(
                r#"<text x="{x}" y="{y}" font-family="Helvetica, Arial, sans-serif" font-size="{size}" font-weight="700" fill="{color}">{WORDMARK}</text>"#
            )
        };
        let circle = format!(r#"<circle cx="512" cy="512" r="512" fill="{BRAND_BLUE}"/>"#);

        match self {
            Self::Standard => {
                format!(r#"<rect width="1024" height="1024" fill="{BRAND_BLUE}"/>{mark}"#)
            }
            Self::Circle => format!("{circle}{mark}"),
            Self::Text => wordmark(0, 50, 56, BRAND_BLUE),
            Self::TextLight => wordmark(0, 50, 56, WHITE),
            Self::TextWithLogo => format!(
                r#"<g transform="scale(0.125)">{circle}{mark}</g>{}"#,
                wordmark(160, 86, 64, BRAND_BLUE)
            ),
            Self::TextWithLogoLight => format!(
                r#"<g transform="scale(0.125)">{circle}{mark}</g>{}"#,
                wordmark(160, 86, 64, WHITE)
            ),
        }
    }
}

impl fmt::Display for LogoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoType {
    type Err = UnknownLogoType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|logo| logo.as_str() == s)
            .ok_or_else(|| UnknownLogoType(s.to_owned()))
    }
}

/// The official wallet logo, for dapps to display on their frontend.
///
/// Returns an SVG data URI of the given `width`, the height follows the
/// aspect ratio of the logo.
pub fn wallet_logo(kind: LogoType, width: u32) -> String {
    let height = kind.height(width);
    let (view_width, view_height) = kind.view_box();
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {view_width} {view_height}" fill="none">{}</svg>"#,
        kind.body()
    );

    format!(
        "{DATA_URI_PREFIX}{}",
        utf8_percent_encode(&svg, NON_ALPHANUMERIC)
    )
}
