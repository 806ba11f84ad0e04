use rust_xlsxwriter::Workbook;

use super::*;

/// Build an xlsx whose first sheet holds `header` followed by `rows`.
fn xlsx(header: &[&str], rows: &[Vec<CellValue>]) -> Vec<u8> {
    let mut book = Workbook::new();
    let sheet = book.add_worksheet();
    for (col, label) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *label).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                CellValue::Text(s) => {
                    sheet.write_string(r, c, s.as_str()).unwrap();
                }
                CellValue::Number(n) => {
                    sheet.write_number(r, c, *n).unwrap();
                }
                CellValue::Bool(b) => {
                    sheet.write_boolean(r, c, *b).unwrap();
                }
                CellValue::Blank => {}
            }
        }
    }
    book.save_to_buffer().unwrap()
}

fn debtor_rows(count: usize) -> Vec<Vec<CellValue>> {
    (0..count)
        .map(|i| vec![CellValue::from(format!("Müşteri {i}").as_str()), CellValue::Number(100.0 * i as f64)])
        .collect()
}

#[test]
fn decodes_header_and_rows_from_first_sheet() {
    let bytes = xlsx(&["Ad", "Tutar"], &debtor_rows(3));
    let table = decode_first_sheet(&bytes).unwrap();
    assert_eq!(table.headers, vec!["Ad", "Tutar"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[2], vec![CellValue::from("Müşteri 2"), CellValue::Number(200.0)]);
}

#[test]
fn keeps_every_row_not_just_the_preview() {
    let bytes = xlsx(&["Ad", "Tutar"], &debtor_rows(10));
    let table = decode_first_sheet(&bytes).unwrap();
    assert_eq!(table.row_count(), 10);
}

#[test]
fn reads_only_the_first_declared_sheet() {
    let mut book = Workbook::new();
    let first = book.add_worksheet();
    first.set_name("Borclar").unwrap();
    first.write_string(0, 0, "Cari Kod").unwrap();
    let second = book.add_worksheet();
    second.set_name("Diger").unwrap();
    second.write_string(0, 0, "ignored").unwrap();
    let bytes = book.save_to_buffer().unwrap();

    let table = decode_first_sheet(&bytes).unwrap();
    assert_eq!(table.headers, vec!["Cari Kod"]);
}

#[test]
fn booleans_and_interior_blanks_survive() {
    let bytes = xlsx(
        &["Ad", "Not", "Aktif"],
        &[vec![CellValue::from("Ayşe"), CellValue::Blank, CellValue::Bool(true)]],
    );
    let table = decode_first_sheet(&bytes).unwrap();
    assert_eq!(table.rows[0], vec![CellValue::from("Ayşe"), CellValue::Blank, CellValue::Bool(true)]);
}

#[test]
fn short_rows_are_not_padded_to_header_width() {
    let bytes = xlsx(&["Ad", "Tutar", "Vade"], &[vec![CellValue::from("Zeynep")]]);
    let table = decode_first_sheet(&bytes).unwrap();
    assert_eq!(table.headers.len(), 3);
    assert_eq!(table.rows[0], vec![CellValue::from("Zeynep")]);
}

#[test]
fn empty_sheet_yields_empty_table() {
    let mut book = Workbook::new();
    book.add_worksheet();
    let bytes = book.save_to_buffer().unwrap();

    let table = decode_first_sheet(&bytes).unwrap();
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn plain_text_is_rejected_as_workbook_error() {
    let err = decode_first_sheet(b"Ad,Tutar\nAli,100\n").unwrap_err();
    assert!(matches!(err, DecodeError::Workbook(_)));
    assert!(err.to_string().starts_with("not a readable spreadsheet"));
}

#[test]
fn empty_input_is_rejected() {
    assert!(decode_first_sheet(&[]).is_err());
}

#[test]
fn trailing_empty_cells_are_trimmed() {
    let row = [Data::String("a".into()), Data::Empty, Data::Int(3), Data::Empty, Data::Empty];
    assert_eq!(row_values(&row), vec![CellValue::from("a"), CellValue::Blank, CellValue::Number(3.0)]);
}

#[test]
fn all_empty_row_becomes_empty_vec() {
    assert!(row_values(&[Data::Empty, Data::Empty]).is_empty());
}

#[test]
fn cell_errors_render_as_text() {
    let value = cell_value(&Data::Error(calamine::CellErrorType::Div0));
    assert_eq!(value, CellValue::from("#DIV/0!"));
}
