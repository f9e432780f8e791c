/// Raw `DXGI_COLOR_SPACE_TYPE` value as reported by an output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSpace(pub i32);

impl ColorSpace {
    pub const RGB_FULL_G22_NONE_P709: Self = Self(0);
    pub const RGB_FULL_G10_NONE_P709: Self = Self(1);
    pub const RGB_STUDIO_G22_NONE_P709: Self = Self(2);
    pub const RGB_STUDIO_G22_NONE_P2020: Self = Self(3);
    pub const RESERVED: Self = Self(4);
    pub const YCBCR_FULL_G22_NONE_P709_X601: Self = Self(5);
    pub const YCBCR_STUDIO_G22_LEFT_P601: Self = Self(6);
    pub const YCBCR_FULL_G22_LEFT_P601: Self = Self(7);
    pub const YCBCR_STUDIO_G22_LEFT_P709: Self = Self(8);
    pub const YCBCR_FULL_G22_LEFT_P709: Self = Self(9);
    pub const YCBCR_STUDIO_G22_LEFT_P2020: Self = Self(10);
    pub const YCBCR_FULL_G22_LEFT_P2020: Self = Self(11);
    pub const RGB_FULL_G2084_NONE_P2020: Self = Self(12);
    pub const YCBCR_STUDIO_G2084_LEFT_P2020: Self = Self(13);
    pub const RGB_STUDIO_G2084_NONE_P2020: Self = Self(14);
    pub const YCBCR_STUDIO_G22_TOPLEFT_P2020: Self = Self(15);
    pub const YCBCR_STUDIO_G2084_TOPLEFT_P2020: Self = Self(16);
    pub const RGB_FULL_G22_NONE_P2020: Self = Self(17);
    pub const YCBCR_STUDIO_GHLG_TOPLEFT_P2020: Self = Self(18);
    pub const YCBCR_FULL_GHLG_TOPLEFT_P2020: Self = Self(19);
    /// 0xFFFFFFFF in the unsigned header definition.
    pub const CUSTOM: Self = Self(-1);
}

impl From<i32> for ColorSpace {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Canonical `DXGI_COLOR_SPACE_*` name, or `""` for codes outside the table.
pub fn color_space_name(color_space: ColorSpace) -> &'static str {
    match color_space {
        ColorSpace::RGB_FULL_G22_NONE_P709 => "DXGI_COLOR_SPACE_RGB_FULL_G22_NONE_P709",
        ColorSpace::RGB_FULL_G10_NONE_P709 => "DXGI_COLOR_SPACE_RGB_FULL_G10_NONE_P709",
        ColorSpace::RGB_STUDIO_G22_NONE_P709 => "DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P709",
        ColorSpace::RGB_STUDIO_G22_NONE_P2020 => "DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P2020",
        ColorSpace::RESERVED => "DXGI_COLOR_SPACE_RESERVED",
        ColorSpace::YCBCR_FULL_G22_NONE_P709_X601 => {
            "DXGI_COLOR_SPACE_YCBCR_FULL_G22_NONE_P709_X601"
        }
        ColorSpace::YCBCR_STUDIO_G22_LEFT_P601 => "DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P601",
        ColorSpace::YCBCR_FULL_G22_LEFT_P601 => "DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P601",
        ColorSpace::YCBCR_STUDIO_G22_LEFT_P709 => "DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P709",
        ColorSpace::YCBCR_FULL_G22_LEFT_P709 => "DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P709",
        ColorSpace::YCBCR_STUDIO_G22_LEFT_P2020 => "DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_LEFT_P2020",
        ColorSpace::YCBCR_FULL_G22_LEFT_P2020 => "DXGI_COLOR_SPACE_YCBCR_FULL_G22_LEFT_P2020",
        ColorSpace::RGB_FULL_G2084_NONE_P2020 => "DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020",
        ColorSpace::YCBCR_STUDIO_G2084_LEFT_P2020 => {
            "DXGI_COLOR_SPACE_YCBCR_STUDIO_G2084_LEFT_P2020"
        }
        ColorSpace::RGB_STUDIO_G2084_NONE_P2020 => "DXGI_COLOR_SPACE_RGB_STUDIO_G2084_NONE_P2020",
        ColorSpace::YCBCR_STUDIO_G22_TOPLEFT_P2020 => {
            "DXGI_COLOR_SPACE_YCBCR_STUDIO_G22_TOPLEFT_P2020"
        }
        ColorSpace::YCBCR_STUDIO_G2084_TOPLEFT_P2020 => {
            "DXGI_COLOR_SPACE_YCBCR_STUDIO_G2084_TOPLEFT_P2020"
        }
        ColorSpace::RGB_FULL_G22_NONE_P2020 => "DXGI_COLOR_SPACE_RGB_FULL_G22_NONE_P2020",
        ColorSpace::YCBCR_STUDIO_GHLG_TOPLEFT_P2020 => {
            "DXGI_COLOR_SPACE_YCBCR_STUDIO_GHLG_TOPLEFT_P2020"
        }
        ColorSpace::YCBCR_FULL_GHLG_TOPLEFT_P2020 => {
            "DXGI_COLOR_SPACE_YCBCR_FULL_GHLG_TOPLEFT_P2020"
        }
        ColorSpace::CUSTOM => "DXGI_COLOR_SPACE_CUSTOM",
        _ => "",
    }
}
