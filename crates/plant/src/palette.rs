//! The five colors a plant is painted with.

use crate::path::color::{parse_hex, Color, ColorError};

/// Colors by role.
///
/// Palettes usually come as ordered lists of five colors, in which case the roles
/// follow the order of the fields.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Palette {
    pub background: Color,
    /// Stroke of the stem and branches, fill of the leaves and outline of the berries.
    pub stem: Color,
    pub berry: Color,
    pub pistil: Color,
    pub petal: Color,
}

impl Palette {
    pub fn new(colors: [Color; 5]) -> Self {
        let [background, stem, berry, pistil, petal] = colors;
        Palette {
            background,
            stem,
            berry,
            pistil,
            petal,
        }
    }

    /// Parses five CSS hex colors, in role order.
    pub fn from_hex(colors: [&str; 5]) -> Result<Self, ColorError> {
        Ok(Palette::new([
            parse_hex(colors[0])?,
            parse_hex(colors[1])?,
            parse_hex(colors[2])?,
            parse_hex(colors[3])?,
            parse_hex(colors[4])?,
        ]))
    }

    pub fn to_array(&self) -> [Color; 5] {
        [
            self.background,
            self.stem,
            self.berry,
            self.pistil,
            self.petal,
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new([
            Color::new(0xf4, 0xef, 0xe1),
            Color::new(0x2f, 0x4a, 0x3a),
            Color::new(0xb2, 0x3a, 0x48),
            Color::new(0xf2, 0xb1, 0x34),
            Color::new(0xe8, 0x8d, 0x9b),
        ])
    }
}

#[test]
fn palette_roles_follow_order() {
    let palette = Palette::from_hex(["#000000", "#010101", "#020202", "#030303", "#040404"]).unwrap();
    assert_eq!(palette.background, Color::new(0, 0, 0));
    assert_eq!(palette.stem, Color::new(1, 1, 1));
    assert_eq!(palette.berry, Color::new(2, 2, 2));
    assert_eq!(palette.pistil, Color::new(3, 3, 3));
    assert_eq!(palette.petal, Color::new(4, 4, 4));
    assert_eq!(Palette::new(palette.to_array()), palette);
}

#[test]
fn malformed_palette() {
    let err = Palette::from_hex(["#000000", "#010101", "nope", "#030303", "#040404"]).unwrap_err();
    assert_eq!(err.input, "nope");
}
