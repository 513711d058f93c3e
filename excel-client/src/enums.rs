//! Excel enum conversions.
//!
//! The server marshals these as raw `i32` constants (the `Xl*` values).
//! `from_raw` is total: unknown raw values fall back to the variant noted
//! on each enum, so a newer Office build can never make a read panic.

/// XlSheetVisibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetVisibility {
    #[default]
    Visible,
    Hidden,
    /// Hidden and not listed in the unhide dialog.
    VeryHidden,
}

impl SheetVisibility {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Visible => -1,
            Self::Hidden => 0,
            Self::VeryHidden => 2,
        }
    }

    /// Unknown values read as `Visible`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Hidden,
            2 => Self::VeryHidden,
            _ => Self::Visible,
        }
    }
}

/// XlHAlign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterAcrossSelection,
    Distributed,
}

impl HAlign {
    pub const fn raw(self) -> i32 {
        match self {
            Self::General => 1,
            Self::Left => -4131,
            Self::Center => -4108,
            Self::Right => -4152,
            Self::Fill => 5,
            Self::Justify => -4130,
            Self::CenterAcrossSelection => 7,
            Self::Distributed => -4117,
        }
    }

    /// Unknown values read as `General`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            -4131 => Self::Left,
            -4108 => Self::Center,
            -4152 => Self::Right,
            5 => Self::Fill,
            -4130 => Self::Justify,
            7 => Self::CenterAcrossSelection,
            -4117 => Self::Distributed,
            _ => Self::General,
        }
    }
}

/// XlVAlign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}

impl VAlign {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Top => -4160,
            Self::Center => -4108,
            Self::Bottom => -4107,
            Self::Justify => -4130,
            Self::Distributed => -4117,
        }
    }

    /// Unknown values read as `Bottom`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            -4160 => Self::Top,
            -4108 => Self::Center,
            -4130 => Self::Justify,
            -4117 => Self::Distributed,
            _ => Self::Bottom,
        }
    }
}

/// XlUnderlineStyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl UnderlineStyle {
    pub const fn raw(self) -> i32 {
        match self {
            Self::None => -4142,
            Self::Single => 2,
            Self::Double => -4119,
            Self::SingleAccounting => 4,
            Self::DoubleAccounting => 5,
        }
    }

    /// Unknown values read as `None`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            2 => Self::Single,
            -4119 => Self::Double,
            4 => Self::SingleAccounting,
            5 => Self::DoubleAccounting,
            _ => Self::None,
        }
    }
}

/// XlBordersIndex — the key into a range's Borders collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderIndex {
    DiagonalDown,
    DiagonalUp,
    EdgeLeft,
    EdgeTop,
    EdgeBottom,
    EdgeRight,
    InsideVertical,
    InsideHorizontal,
}

impl BorderIndex {
    pub const fn raw(self) -> i32 {
        match self {
            Self::DiagonalDown => 5,
            Self::DiagonalUp => 6,
            Self::EdgeLeft => 7,
            Self::EdgeTop => 8,
            Self::EdgeBottom => 9,
            Self::EdgeRight => 10,
            Self::InsideVertical => 11,
            Self::InsideHorizontal => 12,
        }
    }

    /// Unknown values read as `EdgeLeft`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            5 => Self::DiagonalDown,
            6 => Self::DiagonalUp,
            8 => Self::EdgeTop,
            9 => Self::EdgeBottom,
            10 => Self::EdgeRight,
            11 => Self::InsideVertical,
            12 => Self::InsideHorizontal,
            _ => Self::EdgeLeft,
        }
    }
}

/// XlLineStyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    None,
    Continuous,
    Dash,
    DashDot,
    DashDotDot,
    Dot,
    Double,
    SlantDashDot,
}

impl LineStyle {
    pub const fn raw(self) -> i32 {
        match self {
            Self::None => -4142,
            Self::Continuous => 1,
            Self::Dash => -4115,
            Self::DashDot => 4,
            Self::DashDotDot => 5,
            Self::Dot => -4118,
            Self::Double => -4119,
            Self::SlantDashDot => 13,
        }
    }

    /// Unknown values read as `None`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Continuous,
            -4115 => Self::Dash,
            4 => Self::DashDot,
            5 => Self::DashDotDot,
            -4118 => Self::Dot,
            -4119 => Self::Double,
            13 => Self::SlantDashDot,
            _ => Self::None,
        }
    }
}

/// XlBorderWeight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderWeight {
    Hairline,
    #[default]
    Thin,
    Medium,
    Thick,
}

impl BorderWeight {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Hairline => 1,
            Self::Thin => 2,
            Self::Medium => -4138,
            Self::Thick => 4,
        }
    }

    /// Unknown values read as `Thin`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Hairline,
            -4138 => Self::Medium,
            4 => Self::Thick,
            _ => Self::Thin,
        }
    }
}

/// MsoShapeType (the subset the facade distinguishes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeType {
    #[default]
    Mixed,
    AutoShape,
    Chart,
    Comment,
    Group,
    Line,
    Picture,
    TextBox,
}

impl ShapeType {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Mixed => -2,
            Self::AutoShape => 1,
            Self::Chart => 3,
            Self::Comment => 4,
            Self::Group => 6,
            Self::Line => 9,
            Self::Picture => 13,
            Self::TextBox => 17,
        }
    }

    /// Unknown values read as `Mixed`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::AutoShape,
            3 => Self::Chart,
            4 => Self::Comment,
            6 => Self::Group,
            9 => Self::Line,
            13 => Self::Picture,
            17 => Self::TextBox,
            _ => Self::Mixed,
        }
    }
}

/// XlPattern (the subset that matters for cell fills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteriorPattern {
    #[default]
    Automatic,
    Solid,
    None,
    Gray25,
    Gray50,
    Gray75,
    Checker,
}

impl InteriorPattern {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => -4105,
            Self::Solid => 1,
            Self::None => -4142,
            Self::Gray25 => -4124,
            Self::Gray50 => -4125,
            Self::Gray75 => -4126,
            Self::Checker => 9,
        }
    }

    /// Unknown values read as `Automatic`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Solid,
            -4142 => Self::None,
            -4124 => Self::Gray25,
            -4125 => Self::Gray50,
            -4126 => Self::Gray75,
            9 => Self::Checker,
            _ => Self::Automatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_round_trip_through_raw() {
        for v in [
            SheetVisibility::Visible,
            SheetVisibility::Hidden,
            SheetVisibility::VeryHidden,
        ] {
            assert_eq!(SheetVisibility::from_raw(v.raw()), v);
        }
        for v in [
            HAlign::General,
            HAlign::Left,
            HAlign::Center,
            HAlign::Right,
            HAlign::Fill,
            HAlign::Justify,
            HAlign::CenterAcrossSelection,
            HAlign::Distributed,
        ] {
            assert_eq!(HAlign::from_raw(v.raw()), v);
        }
        for v in [
            VAlign::Top,
            VAlign::Center,
            VAlign::Bottom,
            VAlign::Justify,
            VAlign::Distributed,
        ] {
            assert_eq!(VAlign::from_raw(v.raw()), v);
        }
        for v in [
            UnderlineStyle::None,
            UnderlineStyle::Single,
            UnderlineStyle::Double,
            UnderlineStyle::SingleAccounting,
            UnderlineStyle::DoubleAccounting,
        ] {
            assert_eq!(UnderlineStyle::from_raw(v.raw()), v);
        }
        for v in [
            LineStyle::None,
            LineStyle::Continuous,
            LineStyle::Dash,
            LineStyle::DashDot,
            LineStyle::DashDotDot,
            LineStyle::Dot,
            LineStyle::Double,
            LineStyle::SlantDashDot,
        ] {
            assert_eq!(LineStyle::from_raw(v.raw()), v);
        }
        for v in [
            BorderIndex::DiagonalDown,
            BorderIndex::DiagonalUp,
            BorderIndex::EdgeLeft,
            BorderIndex::EdgeTop,
            BorderIndex::EdgeBottom,
            BorderIndex::EdgeRight,
            BorderIndex::InsideVertical,
            BorderIndex::InsideHorizontal,
        ] {
            assert_eq!(BorderIndex::from_raw(v.raw()), v);
        }
        for v in [
            BorderWeight::Hairline,
            BorderWeight::Thin,
            BorderWeight::Medium,
            BorderWeight::Thick,
        ] {
            assert_eq!(BorderWeight::from_raw(v.raw()), v);
        }
        for v in [
            ShapeType::Mixed,
            ShapeType::AutoShape,
            ShapeType::Chart,
            ShapeType::Comment,
            ShapeType::Group,
            ShapeType::Line,
            ShapeType::Picture,
            ShapeType::TextBox,
        ] {
            assert_eq!(ShapeType::from_raw(v.raw()), v);
        }
        for v in [
            InteriorPattern::Automatic,
            InteriorPattern::Solid,
            InteriorPattern::None,
            InteriorPattern::Gray25,
            InteriorPattern::Gray50,
            InteriorPattern::Gray75,
            InteriorPattern::Checker,
        ] {
            assert_eq!(InteriorPattern::from_raw(v.raw()), v);
        }
    }

    #[test]
    fn unknown_raw_values_fall_back() {
        assert_eq!(SheetVisibility::from_raw(99), SheetVisibility::Visible);
        assert_eq!(HAlign::from_raw(12345), HAlign::General);
        assert_eq!(BorderIndex::from_raw(12345), BorderIndex::EdgeLeft);
        assert_eq!(LineStyle::from_raw(12345), LineStyle::None);
        assert_eq!(ShapeType::from_raw(12345), ShapeType::Mixed);
        assert_eq!(InteriorPattern::from_raw(12345), InteriorPattern::Automatic);
    }
}
