//! Deterministic logger colors
//!
//! Every logger name is hashed (djb2) into a hue/saturation/lightness triple
//! biased toward vivid, bright colors that read well on dark terminals. The
//! same name always gets the same color, across lines and across runs.

use crossterm::style::{Color, ContentStyle, Stylize};

const DJB2_SEED: u32 = 5381;

/// An RGB color assigned to a logger name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoggerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LoggerColor {
    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<LoggerColor> for Color {
    fn from(c: LoggerColor) -> Self {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// djb2 over the name's bytes: `hash * 33 + byte`, wrapping at 2^32
pub fn djb2(name: &str) -> u32 {
    name.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(u32::from(byte))
    })
}

/// The color for a logger name
pub fn color_for(name: &str) -> LoggerColor {
    let hash = djb2(name);

    let hue = f64::from(hash % 360);
    let saturation = f64::from(70 + hash % 30);
    let lightness = f64::from(60 + hash % 10);

    hsl_to_rgb(hue, saturation, lightness)
}

/// HSL (degrees, percent, percent) to RGB
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> LoggerColor {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (255.0 * c).round().clamp(0.0, 255.0) as u8
    };

    LoggerColor {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// Render a logger name in its color.
///
/// When the last `.`-separated segment looks like a type name (starts with an
/// uppercase letter) it is rendered bold, so `ShopApplication` stands out from
/// `com.example.shop.`.
pub fn render_logger(name: &str) -> String {
    let style = ContentStyle::new().with(color_for(name).into());

    let (prefix, last) = match name.rfind('.') {
        Some(i) => name.split_at(i + 1),
        None => ("", name),
    };

    if !starts_uppercase(last) {
        return style.apply(name).to_string();
    }

    if prefix.is_empty() {
        return style.bold().apply(last).to_string();
    }

    format!("{}{}", style.apply(prefix), style.bold().apply(last))
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
