//! Word enum conversions.
//!
//! The server marshals these as raw `i32` constants (the `Wd*` values).
//! `from_raw` is total: unknown raw values fall back to the variant noted
//! on each enum, so a newer Office build can never make a read panic.

use automation_core::convert::Rgb;

/// WdParagraphAlignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Distribute,
}

impl ParagraphAlignment {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
            Self::Justify => 3,
            Self::Distribute => 4,
        }
    }

    /// Unknown values read as `Left`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Justify,
            4 => Self::Distribute,
            _ => Self::Left,
        }
    }
}

/// WdUnderline (the subset the facade distinguishes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    /// Words only, not the spaces between them.
    Words,
    Double,
    Dotted,
    Thick,
    Dash,
    Wavy,
}

impl Underline {
    pub const fn raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Single => 1,
            Self::Words => 2,
            Self::Double => 3,
            Self::Dotted => 4,
            Self::Thick => 6,
            Self::Dash => 7,
            Self::Wavy => 11,
        }
    }

    /// Unknown values read as `None`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Single,
            2 => Self::Words,
            3 => Self::Double,
            4 => Self::Dotted,
            6 => Self::Thick,
            7 => Self::Dash,
            11 => Self::Wavy,
            _ => Self::None,
        }
    }
}

/// WdColor: either the theme-resolved automatic color or a literal RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordColor {
    /// `wdColorAutomatic`.
    Automatic,
    Rgb(Rgb),
}

impl WordColor {
    const AUTOMATIC_RAW: i32 = -16_777_216;

    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => Self::AUTOMATIC_RAW,
            Self::Rgb(rgb) => rgb.to_ole(),
        }
    }

    pub const fn from_raw(raw: i32) -> Self {
        if raw == Self::AUTOMATIC_RAW {
            Self::Automatic
        } else {
            Self::Rgb(Rgb::from_ole(raw))
        }
    }
}

/// WdSaveOptions, passed to `Quit` and `Close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveOptions {
    DoNotSave,
    Save,
    #[default]
    Prompt,
}

impl SaveOptions {
    pub const fn raw(self) -> i32 {
        match self {
            Self::DoNotSave => 0,
            Self::Save => -1,
            Self::Prompt => -2,
        }
    }

    /// Unknown values read as `Prompt`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::DoNotSave,
            -1 => Self::Save,
            _ => Self::Prompt,
        }
    }
}

/// WdBreakType (the subset the facade inserts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakType {
    #[default]
    Page,
    Column,
    SectionNext,
    Line,
}

impl BreakType {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Page => 7,
            Self::Column => 8,
            Self::SectionNext => 2,
            Self::Line => 6,
        }
    }

    /// Unknown values read as `Page`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            8 => Self::Column,
            2 => Self::SectionNext,
            6 => Self::Line,
            _ => Self::Page,
        }
    }
}

/// WdStyleType.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
    Table,
    List,
}

impl StyleType {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Paragraph => 1,
            Self::Character => 2,
            Self::Table => 3,
            Self::List => 4,
        }
    }

    /// Unknown values read as `Paragraph`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            2 => Self::Character,
            3 => Self::Table,
            4 => Self::List,
            _ => Self::Paragraph,
        }
    }
}

/// WdCollapseDirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseDirection {
    Start,
    End,
}

impl CollapseDirection {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Start => 1,
            Self::End => 0,
        }
    }

    /// Unknown values read as `Start`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::End,
            _ => Self::Start,
        }
    }
}

/// WdBuiltinStyle (representative subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStyle {
    Normal,
    Heading1,
    Heading2,
    Heading3,
}

impl BuiltinStyle {
    pub const fn raw(self) -> i32 {
        match self {
            Self::Normal => -1,
            Self::Heading1 => -2,
            Self::Heading2 => -3,
            Self::Heading3 => -4,
        }
    }

    /// Unknown values read as `Normal`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            -2 => Self::Heading1,
            -3 => Self::Heading2,
            -4 => Self::Heading3,
            _ => Self::Normal,
        }
    }
}

/// WdTextureIndex (the fills the facade distinguishes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingTexture {
    #[default]
    None,
    Solid,
    Percent10,
    Percent25,
    Percent50,
}

impl ShadingTexture {
    pub const fn raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Solid => 1000,
            Self::Percent10 => 100,
            Self::Percent25 => 250,
            Self::Percent50 => 500,
        }
    }

    /// Unknown values read as `None`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1000 => Self::Solid,
            100 => Self::Percent10,
            250 => Self::Percent25,
            500 => Self::Percent50,
            _ => Self::None,
        }
    }
}
