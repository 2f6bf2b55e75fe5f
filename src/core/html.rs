// src/core/html.rs
//
// Flattens every <table> in a document into rows of cell text.
// Nothing here knows about bulletins; see `extract` for the lookup rules.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::stripped_text;

/// One `<table>`: its `<tr>` rows (document order), each a list of `<td>` texts.
/// `<th>` cells are not read, so a row of only `<th>` is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// First row; bulletins put the country labels there.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Everything after the header row.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

struct Selectors {
    table: Selector,
    row: Selector,
    cell: Selector,
}

impl Selectors {
    fn new() -> Option<Self> {
        Some(Self {
            table: Selector::parse("table").ok()?,
            row: Selector::parse("tr").ok()?,
            cell: Selector::parse("td").ok()?,
        })
    }
}

/// All tables in document order. The parser is lenient; broken markup yields
/// fewer (or zero) tables rather than an error.
pub fn tables(doc: &str) -> Vec<Table> {
    let Some(sel) = Selectors::new() else { return Vec::new() };
    let html = Html::parse_document(doc);

    html.select(&sel.table)
        .map(|t| read_table(&sel, t))
        .collect()
}

fn read_table(sel: &Selectors, table: ElementRef<'_>) -> Table {
    let rows = table
        .select(&sel.row)
        .map(|tr| {
            tr.select(&sel.cell)
                .map(|cell| stripped_text(cell.text()))
                .collect()
        })
        .collect();
    Table { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tables_in_order_with_cell_text() {
        let doc = r#"
            <html><body>
              <p>intro</p>
              <table>
                <tr><td>Family</td><td>INDIA</td></tr>
                <tr><td>F1</td><td>01JAN15</td></tr>
              </table>
              <div><table border=1>
                <tbody>
                  <tr><td> Employment-<br>Based </td><td><b>INDIA</b></td></tr>
                  <tr><td>1st</td><td> 15<span>JAN</span>24 </td></tr>
                </tbody>
              </table></div>
            </body></html>
        "#;
        let ts = tables(doc);
        assert_eq!(ts.len(), 2);
        assert_eq!(ts[0].header().unwrap(), ["Family", "INDIA"]);
        assert_eq!(ts[1].header().unwrap(), ["Employment-Based", "INDIA"]);
        assert_eq!(ts[1].body()[0], vec!["1st", "15JAN24"]);
    }

    #[test]
    fn no_tables_and_empty_tables() {
        assert!(tables("<html><body><p>nothing</p></body></html>").is_empty());
        assert!(tables("").is_empty());

        let ts = tables("<table></table>");
        assert_eq!(ts.len(), 1);
        assert!(ts[0].header().is_none());
        assert!(ts[0].body().is_empty());
    }

    #[test]
    fn th_cells_are_not_read() {
        let ts = tables(
            "<table>\
               <tr><th>Employment-based</th><th>INDIA</th></tr>\
               <tr><th>1st</th><td>15JAN24</td><td>C</td></tr>\
             </table>",
        );
        assert_eq!(ts[0].rows[0], Vec::<String>::new());
        assert!(ts[0].header().unwrap().is_empty());
        assert_eq!(ts[0].body()[0], vec!["15JAN24", "C"]);
    }

    #[test]
    fn entities_are_decoded() {
        let ts = tables("<table><tr><td>&nbsp;INDIA&nbsp;</td><td>A&amp;B</td></tr></table>");
        assert_eq!(ts[0].rows[0], vec!["INDIA", "A&B"]);
    }
}
