mod palette;

pub use palette::{
    CLASS_COUNT, CharacterClass, DEFAULT_CLASS_COLOR, Element, Status, class_color,
};
use smart_leds::{RGB8, RGBW, White};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Fully dark pixel, all four channels off
pub const OFF: Rgbw = rgbw(0, 0, 0, 0);

/// Build a four-channel pixel color
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Widen a three-channel color to RGBW with the white channel off
pub const fn widen(color: Rgb) -> Rgbw {
    rgbw(color.r, color.g, color.b, 0)
}

/// Pixel with only the white channel lit
pub const fn white_only(level: u8) -> Rgbw {
    rgbw(0, 0, 0, level)
}
