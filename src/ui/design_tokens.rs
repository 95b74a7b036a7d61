// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the overlay panel.
//!
//! - **Palette**: Base and severity colors
//! - **Opacity**: Panel translucency
//! - **Spacing**: 8px grid
//! - **Sizing**: Panel dimensions
//! - **Typography**: Font sizes
//! - **Border** / **Radius**: Outline widths and corner radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    // Severity colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Panel background over the host content.
    pub const SURFACE: f32 = 0.95;
    /// Tinted status line background.
    pub const STATUS_TINT: f32 = 0.2;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const PANEL_WIDTH: f32 = 300.0;
    pub const INPUT_WIDTH: f32 = 90.0;
}

pub mod typography {
    /// Panel title
    pub const TITLE_SM: f32 = 18.0;
    /// Buttons, labels, status line
    pub const BODY: f32 = 14.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

const _: () = {
    assert!(spacing::XS == spacing::XXS * 2.0);
    assert!(spacing::MD == spacing::XS * 2.0);
    assert!(opacity::SURFACE <= 1.0);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
