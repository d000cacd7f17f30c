//! Spreadsheet import service
//!
//! Loads the operations statement and the optional payer directory from
//! uploaded spreadsheets. Columns are resolved by header name once per file
//! into a typed column map; rows are then read into typed records.
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xls`, `.ods`) are read with calamine, CSV
//! files with the csv crate. Only the first worksheet is read and its first
//! row is the header.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::{debug, warn};

use crate::error::{RoyaltyError, RoyaltyResult};
use crate::models::{Money, PayerDirectory, Transaction};

/// Header of the rights holder column
pub const RIGHTS_HOLDER_COLUMN: &str = "RightsHolder";
/// Alternate spelling found in older statements
pub const RIGHTS_HOLDER_ALIAS: &str = "Rights-Holder";
pub const TYPE_COLUMN: &str = "Type";
pub const NAME_COLUMN: &str = "Name";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const PAYER_COLUMN: &str = "Payer";

/// An uploaded file: its name and raw contents
#[derive(Debug, Clone)]
pub struct Upload {
    /// File name, used in messages and for format detection
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Create an upload from an in-memory buffer
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an upload from disk
    pub fn from_path(path: &Path) -> RoyaltyResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            RoyaltyError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    /// The format implied by the file name
    pub fn format(&self) -> SourceFormat {
        SourceFormat::detect(&self.name)
    }
}

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Any workbook calamine can open
    Workbook,
    /// Comma separated values
    Csv,
}

impl SourceFormat {
    /// Detect the format from a file name; anything but `.csv` is a workbook
    pub fn detect(name: &str) -> Self {
        let is_csv = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::Csv
        } else {
            Self::Workbook
        }
    }
}

/// A cell value, independent of the source format
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Text(String),
    Number(f64),
    /// Booleans, dates and error cells, rendered as text
    Other(String),
}

impl Cell {
    fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) if s.trim().is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            other => Cell::Other(other.to_string()),
        }
    }

    fn from_field(field: &str) -> Self {
        if field.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(field.to_string())
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Render as text; integral numbers lose their decimal part
    ///
    /// Text is returned verbatim: rights holders and names are matched
    /// exactly, surrounding whitespace included.
    fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Other(s) => s.trim().to_string(),
            Cell::Number(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
            Cell::Number(f) => f.to_string(),
        }
    }
}

/// One data row with its 1-based spreadsheet row number
#[derive(Debug)]
struct SheetRow {
    number: usize,
    cells: Vec<Cell>,
}

impl SheetRow {
    fn cell(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&Cell::Empty)
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

/// The first sheet of an upload: header plus data rows
#[derive(Debug)]
struct Sheet {
    header: Vec<String>,
    rows: Vec<SheetRow>,
}

impl Sheet {
    fn read(upload: &Upload) -> RoyaltyResult<Self> {
        match upload.format() {
            SourceFormat::Workbook => Self::read_workbook(upload),
            SourceFormat::Csv => Self::read_csv(upload),
        }
    }

    fn read_workbook(upload: &Upload) -> RoyaltyResult<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(upload.bytes.as_slice()))
            .map_err(|e| RoyaltyError::invalid_file(&upload.name, e))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| RoyaltyError::invalid_file(&upload.name, "workbook has no worksheets"))?
            .map_err(|e| RoyaltyError::invalid_file(&upload.name, e))?;

        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let mut rows = range.rows();

        let header: Vec<String> = rows
            .next()
            .ok_or_else(|| RoyaltyError::invalid_file(&upload.name, "worksheet is empty"))?
            .iter()
            .map(|data| Cell::from_data(data).as_text())
            .collect();

        let rows = rows
            .enumerate()
            .map(|(idx, row)| SheetRow {
                // header sits on first_row + 1 (1-based)
                number: first_row + idx + 2,
                cells: row.iter().map(Cell::from_data).collect(),
            })
            .collect();

        Ok(Self { header, rows })
    }

    fn read_csv(upload: &Upload) -> RoyaltyResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(upload.bytes.as_slice());

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| RoyaltyError::invalid_file(&upload.name, e))?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if header.iter().all(String::is_empty) {
            return Err(RoyaltyError::invalid_file(&upload.name, "file is empty"));
        }

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| RoyaltyError::invalid_file(&upload.name, e))?;
            rows.push(SheetRow {
                number: idx + 2,
                cells: record.iter().map(Cell::from_field).collect(),
            });
        }

        Ok(Self { header, rows })
    }

    /// Index of the first header matching any candidate name
    fn column(&self, candidates: &[&str]) -> Option<usize> {
        self.header
            .iter()
            .position(|h| candidates.iter().any(|c| h.trim() == *c))
    }

    fn require(&self, file: &str, column: &'static str, aliases: &[&str]) -> RoyaltyResult<usize> {
        let mut candidates = vec![column];
        candidates.extend_from_slice(aliases);
        self.column(&candidates)
            .ok_or_else(|| RoyaltyError::missing_column(file, column))
    }
}

/// Column positions of the operations statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionColumns {
    pub rights_holder: usize,
    pub kind: usize,
    pub name: usize,
    pub amount: usize,
}

impl TransactionColumns {
    /// Resolve the required columns from a header row
    pub fn resolve(header: &[String], file: &str) -> RoyaltyResult<Self> {
        let sheet = Sheet {
            header: header.to_vec(),
            rows: Vec::new(),
        };
        Self::from_sheet(&sheet, file)
    }

    fn from_sheet(sheet: &Sheet, file: &str) -> RoyaltyResult<Self> {
        Ok(Self {
            rights_holder: sheet.require(file, RIGHTS_HOLDER_COLUMN, &[RIGHTS_HOLDER_ALIAS])?,
            kind: sheet.require(file, TYPE_COLUMN, &[])?,
            name: sheet.require(file, NAME_COLUMN, &[])?,
            amount: sheet.require(file, AMOUNT_COLUMN, &[])?,
        })
    }
}

/// Parse an Amount cell
fn parse_amount(cell: &Cell, file: &str, row: usize) -> RoyaltyResult<Money> {
    let invalid = |value: String| RoyaltyError::InvalidAmount {
        file: file.to_string(),
        row,
        value,
    };

    match cell {
        Cell::Empty => {
            warn!(file, row, "empty amount counted as zero");
            Ok(Money::zero())
        }
        Cell::Number(f) => Money::from_f64(*f).ok_or_else(|| invalid(f.to_string())),
        Cell::Text(s) => Money::parse(s).map_err(|_| invalid(s.clone())),
        Cell::Other(s) => Err(invalid(s.clone())),
    }
}

/// Load the operations statement
pub fn load_transactions(upload: &Upload) -> RoyaltyResult<Vec<Transaction>> {
    let sheet = Sheet::read(upload)?;
    let columns = TransactionColumns::from_sheet(&sheet, &upload.name)?;

    // Sum of absolute amounts; bounds every total the reports compute
    let mut magnitude: i64 = 0;

    let mut transactions = Vec::with_capacity(sheet.rows.len());
    for row in sheet.rows.iter().filter(|r| !r.is_blank()) {
        let cell = row.cell(columns.amount);
        let amount = parse_amount(cell, &upload.name, row.number)?;
        magnitude = amount
            .units()
            .checked_abs()
            .and_then(|units| magnitude.checked_add(units))
            .ok_or_else(|| RoyaltyError::InvalidAmount {
                file: upload.name.clone(),
                row: row.number,
                value: cell.as_text(),
            })?;
        transactions.push(Transaction::new(
            row.cell(columns.rights_holder).as_text(),
            row.cell(columns.kind).as_text(),
            row.cell(columns.name).as_text(),
            amount,
        ));
    }

    debug!(
        file = %upload.name,
        transactions = transactions.len(),
        "loaded operations statement"
    );
    Ok(transactions)
}

/// Load the payer directory (columns Name, Payer)
///
/// When a name appears more than once the last row wins.
pub fn load_payer_directory(upload: &Upload) -> RoyaltyResult<PayerDirectory> {
    let sheet = Sheet::read(upload)?;
    let name_col = sheet.require(&upload.name, NAME_COLUMN, &[])?;
    let payer_col = sheet.require(&upload.name, PAYER_COLUMN, &[])?;

    let mut directory = PayerDirectory::new();
    for row in sheet.rows.iter().filter(|r| !r.is_blank()) {
        let name = row.cell(name_col).as_text();
        let payer = row.cell(payer_col).as_text();
        if let Some(previous) = directory.insert(name.clone(), payer.clone()) {
            if previous != payer {
                warn!(
                    file = %upload.name,
                    row = row.number,
                    name = %name,
                    previous = %previous,
                    payer = %payer,
                    "name listed twice in payer directory; keeping the later payer"
                );
            }
        }
    }

    debug!(file = %upload.name, names = directory.len(), "loaded payer directory");
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_upload(contents: &str) -> Upload {
        Upload::new("operacoes.csv", contents.as_bytes().to_vec())
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(SourceFormat::detect("a.csv"), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect("A.CSV"), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect("a.xlsx"), SourceFormat::Workbook);
        assert_eq!(SourceFormat::detect("upload"), SourceFormat::Workbook);
    }

    #[test]
    fn test_load_csv_transactions() {
        let upload = csv_upload(
            "RightsHolder,Type,Name,Amount,Extra\n\
             PHONOLITE,Streaming,Ana,10.50,x\n\
             ,,,,\n\
             ACME,Sync License,Bruno,-2,y\n",
        );
        let transactions = load_transactions(&upload).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(
            transactions[0],
            Transaction::new("PHONOLITE", "Streaming", "Ana", Money::from_cents(1050))
        );
        assert_eq!(transactions[1].amount, Money::from_cents(-200));
    }

    #[test]
    fn test_columns_resolved_by_name_not_position() {
        let upload = csv_upload("Amount,Name,Type,Rights-Holder\n3.25,Ana,Streaming,PHONOLITE\n");
        let transactions = load_transactions(&upload).unwrap();
        assert_eq!(
            transactions,
            vec![Transaction::new("PHONOLITE", "Streaming", "Ana", Money::from_cents(325))]
        );
    }

    #[test]
    fn test_missing_column() {
        let upload = csv_upload("RightsHolder,Type,Name\nPHONOLITE,Streaming,Ana\n");
        let err = load_transactions(&upload).unwrap_err();
        assert!(matches!(
            err,
            RoyaltyError::MissingColumn { column: "Amount", .. }
        ));
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let upload = csv_upload("rightsholder,Type,Name,Amount\nPHONOLITE,Streaming,Ana,1\n");
        let err = load_transactions(&upload).unwrap_err();
        assert!(matches!(
            err,
            RoyaltyError::MissingColumn { column: "RightsHolder", .. }
        ));
    }

    #[test]
    fn test_invalid_amount_reports_row() {
        let upload = csv_upload(
            "RightsHolder,Type,Name,Amount\n\
             PHONOLITE,Streaming,Ana,1\n\
             PHONOLITE,Streaming,Ana,abc\n",
        );
        match load_transactions(&upload).unwrap_err() {
            RoyaltyError::InvalidAmount { row, value, .. } => {
                assert_eq!(row, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_amount_counts_as_zero() {
        let upload = csv_upload("RightsHolder,Type,Name,Amount\nPHONOLITE,Streaming,Ana,\n");
        let transactions = load_transactions(&upload).unwrap();
        assert_eq!(transactions[0].amount, Money::zero());
    }

    #[test]
    fn test_garbage_workbook_is_invalid_file() {
        let upload = Upload::new("operacoes.xlsx", b"not a spreadsheet".to_vec());
        assert!(load_transactions(&upload).unwrap_err().is_invalid_file());
    }

    #[test]
    fn test_empty_csv_is_invalid_file() {
        assert!(load_transactions(&csv_upload("")).unwrap_err().is_invalid_file());
    }

    #[test]
    fn test_load_payer_directory() {
        let upload = Upload::new(
            "incomes.csv",
            b"Name,Payer\nAna,ECAD\nBruno,UBC\nAna,ABRAMUS\n".to_vec(),
        );
        let directory = load_payer_directory(&upload).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.payer_for("Ana"), "ABRAMUS");
        assert_eq!(directory.payer_for("Bruno"), "UBC");
    }

    #[test]
    fn test_payer_directory_missing_column() {
        let upload = Upload::new("incomes.csv", b"Name,Fonte\nAna,ECAD\n".to_vec());
        let err = load_payer_directory(&upload).unwrap_err();
        assert!(matches!(
            err,
            RoyaltyError::MissingColumn { column: "Payer", .. }
        ));
    }

    #[test]
    fn test_resolve_columns() {
        let header: Vec<String> = ["Name", "Amount", "Type", "RightsHolder"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let columns = TransactionColumns::resolve(&header, "x.xlsx").unwrap();
        assert_eq!(
            columns,
            TransactionColumns {
                rights_holder: 3,
                kind: 2,
                name: 0,
                amount: 1
            }
        );
    }

    #[test]
    fn test_numeric_text_cells() {
        assert_eq!(Cell::Number(42.0).as_text(), "42");
        assert_eq!(Cell::Number(1.5).as_text(), "1.5");
        assert_eq!(Cell::Text("  Ana ".into()).as_text(), "  Ana ");
    }

    #[test]
    fn test_text_cells_keep_whitespace() {
        let upload = csv_upload(
            "RightsHolder,Type,Name,Amount\n\
             PHONOLITE ,Streaming,Ana ,1\n\
             PHONOLITE,Streaming,Ana,2\n",
        );
        let transactions = load_transactions(&upload).unwrap();
        assert_eq!(transactions[0].rights_holder, "PHONOLITE ");
        assert_eq!(transactions[0].name, "Ana ");
        assert_eq!(
            crate::services::classify_transaction(&transactions[0]),
            crate::models::Category::PublisherProvision
        );
        assert_eq!(
            crate::services::classify_transaction(&transactions[1]),
            crate::models::Category::DigitalMechanicals
        );
    }

    #[test]
    fn test_statement_too_large_to_total() {
        let upload = csv_upload(
            "RightsHolder,Type,Name,Amount\n\
             PHONOLITE,Streaming,Ana,600000000000000\n\
             PHONOLITE,Streaming,Ana,600000000000000\n",
        );
        match load_transactions(&upload).unwrap_err() {
            RoyaltyError::InvalidAmount { row, value, .. } => {
                assert_eq!(row, 3);
                assert_eq!(value, "600000000000000");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mixed_signs_bounded_by_magnitude() {
        let upload = csv_upload(
            "RightsHolder,Type,Name,Amount\n\
             PHONOLITE,Streaming,Ana,400000000000000\n\
             PHONOLITE,Streaming,Ana,-400000000000000\n",
        );
        let transactions = load_transactions(&upload).unwrap();
        let total: Money = transactions.iter().map(|t| t.amount).sum();
        assert!(total.is_zero());
    }
}
