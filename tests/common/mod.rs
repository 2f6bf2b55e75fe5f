// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("bulletin_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// A cut-down bulletin page: a family table, then the employment final
/// action table, then the employment dates-for-filing table.
pub fn bulletin_page(final_action_india: &str, filing_india: &str) -> String {
    format!(
        r#"<html><head><title>Visa Bulletin</title></head><body>
<p>A. FINAL ACTION DATES FOR FAMILY-SPONSORED PREFERENCE CASES</p>
<table border="1">
  <tr><td>Family-Sponsored</td><td>All Chargeability Areas Except Those Listed</td><td>CHINA-mainland born</td><td>INDIA</td><td>MEXICO</td><td>PHILIPPINES</td></tr>
  <tr><td>F1</td><td>08NOV15</td><td>08NOV15</td><td>08NOV15</td><td>22APR04</td><td>01MAR12</td></tr>
</table>
<p>A. FINAL ACTION DATES FOR EMPLOYMENT-BASED PREFERENCE CASES</p>
<table border="1">
  <tbody>
  <tr><td><strong>Employment-based</strong></td><td>All Chargeability Areas Except Those Listed</td><td>CHINA-mainland born</td><td><strong>INDIA</strong></td><td>MEXICO</td><td>PHILIPPINES</td></tr>
  <tr><td>1st</td><td>C</td><td>01NOV22</td><td>{final_action_india}</td><td>C</td><td>C</td></tr>
  <tr><td>2nd</td><td>15MAR23</td><td>01MAR20</td><td>01JAN13</td><td>15MAR23</td><td>15MAR23</td></tr>
  </tbody>
</table>
<p>B. DATES FOR FILING OF EMPLOYMENT-BASED VISA APPLICATIONS</p>
<table border="1">
  <tr><td>Employment-based</td><td>All Chargeability Areas Except Those Listed</td><td>CHINA-mainland born</td><td>INDIA</td><td>MEXICO</td><td>PHILIPPINES</td></tr>
  <tr><td>1st</td><td>C</td><td>01JAN23</td><td>{filing_india}</td><td>C</td><td>C</td></tr>
</table>
</body></html>"#
    )
}
