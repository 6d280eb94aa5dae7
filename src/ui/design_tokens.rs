// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the admin panel widgets.
//!
//! - **Palette**: Base and semantic colors (brand violet `#7C3AED`)
//! - **Opacity**, **Spacing** (8px grid), **Sizing**, **Typography**
//! - **Border**, **Radius**, **Shadow**

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.078, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand violet (#7C3AED and neighbours)
    pub const PRIMARY_400: Color = Color::from_rgb(0.655, 0.545, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.486, 0.227, 0.929);
    pub const PRIMARY_600: Color = Color::from_rgb(0.427, 0.157, 0.851);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const TOAST_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title.
    pub const TITLE_SM: f32 = 15.0;
    /// Toast message.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Borders and Radii
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Severity accent stripe.
    pub const WIDTH_ACCENT: f32 = 4.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Toast card corners (0.75rem).
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(border::WIDTH_ACCENT > border::WIDTH_SM);
};
