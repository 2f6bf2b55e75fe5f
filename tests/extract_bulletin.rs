// tests/extract_bulletin.rs
mod common;

use bulletin_plot::bulletin::CategoryDate;
use bulletin_plot::extract::{decode, Extractor};
use common::{bulletin_page, ymd};

#[test]
fn two_tables_give_final_action_then_filing() {
    let doc = r#"
        <table>
          <tr><td>Employment-Based</td><td>CHINA</td><td>INDIA</td><td>MEXICO</td><td>PHILIPPINES</td></tr>
          <tr><td>1st</td><td>C</td><td>15JAN24</td><td>C</td><td>C</td></tr>
        </table>
        <table>
          <tr><td>Employment-Based</td><td>CHINA</td><td>INDIA</td><td>MEXICO</td><td>PHILIPPINES</td></tr>
          <tr><td>1st</td><td>C</td><td>01FEB24</td><td>C</td><td>C</td></tr>
        </table>
    "#;
    let (fa, f) = Extractor::default().extract(doc, ymd(2024, 3, 1));
    assert_eq!(fa.date(), Some(ymd(2024, 1, 15)));
    assert_eq!(f.date(), Some(ymd(2024, 2, 1)));
}

#[test]
fn realistic_page_skips_family_table() {
    let doc = bulletin_page("01FEB22", "01APR23");
    let (fa, f) = Extractor::default().extract(&doc, ymd(2025, 1, 1));
    assert_eq!(fa, CategoryDate::Dated(ymd(2022, 2, 1)));
    assert_eq!(f, CategoryDate::Dated(ymd(2023, 4, 1)));
}

#[test]
fn current_resolves_to_bulletin_date() {
    let doc = bulletin_page("C", "C");
    let bd = ymd(2023, 5, 1);
    let (fa, f) = Extractor::default().extract(&doc, bd);
    assert_eq!(fa.date(), Some(bd));
    assert_eq!(f.date(), Some(bd));
}

#[test]
fn slots_are_independent() {
    let doc = bulletin_page("U", "01JUN22");
    let (fa, f) = Extractor::default().extract(&doc, ymd(2024, 7, 1));
    assert_eq!(fa, CategoryDate::Unavailable);
    assert_eq!(f, CategoryDate::Dated(ymd(2022, 6, 1)));
}

#[test]
fn malformed_cells_degrade_to_unavailable() {
    let doc = bulletin_page("15/01/2024", "see note");
    let (fa, f) = Extractor::default().extract(&doc, ymd(2024, 3, 1));
    assert_eq!(fa, CategoryDate::Unavailable);
    assert_eq!(f, CategoryDate::Unavailable);
}

#[test]
fn documents_without_usable_tables() {
    let bd = ymd(2024, 3, 1);
    let ex = Extractor::default();

    let no_tables = "<html><body><h1>Page not found</h1></body></html>";
    assert_eq!(ex.extract(no_tables, bd), (CategoryDate::Unavailable, CategoryDate::Unavailable));

    let no_india = r#"
        <table><tr><td>Employment-Based</td><td>CHINA</td><td>MEXICO</td></tr>
               <tr><td>1st</td><td>C</td><td>C</td></tr></table>
        <table><tr><td>Family</td><td>All Areas</td></tr>
               <tr><td>1st</td><td>01JAN20</td></tr></table>
    "#;
    assert_eq!(ex.extract(no_india, bd), (CategoryDate::Unavailable, CategoryDate::Unavailable));

    assert_eq!(ex.extract("", bd), (CategoryDate::Unavailable, CategoryDate::Unavailable));
    assert_eq!(ex.extract("<table><tr></tr><tr><td>", bd), (CategoryDate::Unavailable, CategoryDate::Unavailable));
    assert_eq!(ex.extract("\u{0}\u{feff}<<<>>>", bd), (CategoryDate::Unavailable, CategoryDate::Unavailable));
}

#[test]
fn single_matching_table_pads_filing() {
    let doc = r#"
        <table><tr><td>Employment-Based</td><td>INDIA</td></tr>
               <tr><td>1st</td><td>01MAR21</td></tr></table>
    "#;
    let (fa, f) = Extractor::default().extract(doc, ymd(2024, 3, 1));
    assert_eq!(fa, CategoryDate::Dated(ymd(2021, 3, 1)));
    assert_eq!(f, CategoryDate::Unavailable);
}

#[test]
fn every_month_abbreviation_decodes() {
    let bd = ymd(2024, 1, 1);
    let months = ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];
    for (i, m) in months.iter().enumerate() {
        for (day, yy) in [(1u32, 15i32), (28, 24)] {
            let code = format!("{day:02}{m}{yy:02}");
            assert_eq!(
                decode(&code, bd),
                CategoryDate::Dated(ymd(2000 + yy, i as u32 + 1, day)),
                "code {code}"
            );
        }
    }
}
