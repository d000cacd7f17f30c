//! Declarative cell styles for the report workbook
//!
//! Each kind of cell the writer emits has one descriptor here. Descriptors
//! are plain data; `CellStyle::to_format` is the only place they become
//! writer formats.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

/// Number format of every monetary cell
pub const MONEY_FORMAT: &str = "#,##0.00";

const WHITE: u32 = 0xFFFFFF;
const BLACK: u32 = 0x000000;
const DARK_BLUE: u32 = 0x1F4E79;
const LIGHT_BLUE: u32 = 0xBDD7EE;

/// Border line weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Thin,
    Medium,
}

impl From<Edge> for FormatBorder {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Thin => FormatBorder::Thin,
            Edge::Medium => FormatBorder::Medium,
        }
    }
}

/// Border weights of the four cell edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub left: Edge,
    pub right: Edge,
    pub top: Edge,
    pub bottom: Edge,
}

impl Borders {
    pub const fn all(edge: Edge) -> Self {
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
        }
    }
}

/// Column of the two-column summary sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryColumn {
    Label,
    Value,
}

impl SummaryColumn {
    /// Borders for a summary cell: medium on the sheet's outer sides,
    /// thin between the two columns
    pub const fn borders(self, top: Edge, bottom: Edge) -> Borders {
        match self {
            Self::Label => Borders {
                left: Edge::Medium,
                right: Edge::Thin,
                top,
                bottom,
            },
            Self::Value => Borders {
                left: Edge::Thin,
                right: Edge::Medium,
                top,
                bottom,
            },
        }
    }

    const fn number_format(self) -> Option<&'static str> {
        match self {
            Self::Label => None,
            Self::Value => Some(MONEY_FORMAT),
        }
    }
}

/// Visual description of one kind of cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub centered: bool,
    pub borders: Borders,
    pub number_format: Option<&'static str>,
}

impl CellStyle {
    const fn plain(borders: Borders) -> Self {
        Self {
            bold: false,
            font_color: None,
            fill: None,
            centered: false,
            borders,
            number_format: None,
        }
    }

    /// Detail sheet header cells
    pub const fn detail_header() -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(DARK_BLUE),
            centered: true,
            borders: Borders::all(Edge::Thin),
            number_format: None,
        }
    }

    /// Detail sheet text cells
    pub const fn detail_text() -> Self {
        Self::plain(Borders::all(Edge::Thin))
    }

    /// Detail sheet amount cells
    pub const fn detail_value() -> Self {
        Self {
            number_format: Some(MONEY_FORMAT),
            ..Self::plain(Borders::all(Edge::Thin))
        }
    }

    /// Summary sheet header cells
    pub const fn summary_header() -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(DARK_BLUE),
            centered: true,
            borders: Borders::all(Edge::Medium),
            number_format: None,
        }
    }

    /// Payer subtotal row
    pub const fn payer_subtotal(column: SummaryColumn) -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(DARK_BLUE),
            centered: false,
            borders: column.borders(Edge::Medium, Edge::Thin),
            number_format: column.number_format(),
        }
    }

    /// Category row under a payer
    pub const fn payer_category(column: SummaryColumn) -> Self {
        Self {
            number_format: column.number_format(),
            ..Self::plain(column.borders(Edge::Thin, Edge::Thin))
        }
    }

    /// Closing grand total row
    pub const fn grand_total(column: SummaryColumn) -> Self {
        Self {
            bold: true,
            font_color: Some(BLACK),
            fill: Some(LIGHT_BLUE),
            centered: false,
            borders: column.borders(Edge::Medium, Edge::Medium),
            number_format: column.number_format(),
        }
    }

    /// Build the writer format for this style
    pub fn to_format(&self) -> Format {
        let mut format = Format::new()
            .set_border_left(self.borders.left.into())
            .set_border_right(self.borders.right.into())
            .set_border_top(self.borders.top.into())
            .set_border_bottom(self.borders.bottom.into());

        if self.bold {
            format = format.set_bold();
        }
        if let Some(color) = self.font_color {
            format = format.set_font_color(Color::RGB(color));
        }
        if let Some(color) = self.fill {
            format = format
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(color));
        }
        if self.centered {
            format = format
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter);
        }
        if let Some(num_format) = self.number_format {
            format = format.set_num_format(num_format);
        }

        format
    }
}
