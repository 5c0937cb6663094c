//! Report window styling.
//!
//! Passed explicitly into [`super::show`]; nothing here is global.

use iced::widget::{container, progress_bar};
use iced::{Background, Border, Color, Size, Theme};

use crate::types::Rgb;

/// Palette, font sizes and window geometry for the report window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportStyle {
    pub background: Rgb,
    pub panel: Rgb,
    pub panel_border: Rgb,
    pub track: Rgb,
    pub text: Rgb,
    /// Crack-time line.
    pub accent: Rgb,
    pub pass: Rgb,
    pub fail: Rgb,
    pub title_size: f32,
    pub strength_size: f32,
    pub body_size: f32,
    pub criteria_size: f32,
    pub progress_width: f32,
    pub window_size: Size,
}

impl Default for ReportStyle {
    /// Dark palette.
    fn default() -> Self {
        Self {
            background: Rgb::from_hex(0x1E1E1E),
            panel: Rgb::from_hex(0x2D2D2D),
            panel_border: Rgb::from_hex(0x3D3D3D),
            track: Rgb::from_hex(0x3D3D3D),
            text: Rgb::from_hex(0xFFFFFF),
            accent: Rgb::from_hex(0xFFEB3B),
            pass: Rgb::from_hex(0x4CAF50),
            fail: Rgb::from_hex(0xF44336),
            title_size: 22.0,
            strength_size: 18.0,
            body_size: 15.0,
            criteria_size: 14.0,
            progress_width: 220.0,
            window_size: Size::new(420.0, 400.0),
        }
    }
}

impl ReportStyle {
    pub fn pass_or_fail(&self, passed: bool) -> Rgb {
        if passed { self.pass } else { self.fail }
    }

    pub fn background_style(&self) -> impl Fn(&Theme) -> container::Style + use<> {
        let background = to_color(self.background);
        move |_| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }

    pub fn panel_style(&self) -> impl Fn(&Theme) -> container::Style + use<> {
        let panel = to_color(self.panel);
        let border = to_color(self.panel_border);
        move |_| container::Style {
            background: Some(Background::Color(panel)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    pub fn progress_style(&self, fill: Rgb) -> impl Fn(&Theme) -> progress_bar::Style + use<> {
        let track = to_color(self.track);
        let bar = to_color(fill);
        move |_| progress_bar::Style {
            background: Background::Color(track),
            bar: Background::Color(bar),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        }
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_dark() {
        let style = ReportStyle::default();
        assert_eq!(style.background.to_string(), "#1E1E1E");
        assert_eq!(style.panel.to_string(), "#2D2D2D");
        assert_eq!(style.track.to_string(), "#3D3D3D");
        assert_eq!(style.accent.to_string(), "#FFEB3B");
    }

    #[test]
    fn test_pass_or_fail_colors() {
        let style = ReportStyle::default();
        assert_eq!(style.pass_or_fail(true).to_string(), "#4CAF50");
        assert_eq!(style.pass_or_fail(false).to_string(), "#F44336");
    }

    #[test]
    fn test_to_color() {
        let color = to_color(Rgb::from_hex(0xFF0000));
        assert_eq!(color, Color::from_rgb8(255, 0, 0));
    }
}
