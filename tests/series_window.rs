// tests/series_window.rs
mod common;

use std::fs;

use bulletin_plot::bulletin::{BulletinKey, CategoryDate, Month::*};
use bulletin_plot::extract::Extractor;
use bulletin_plot::series::{build_series, scan_store};
use bulletin_plot::store::BulletinStore;
use common::{bulletin_page, tmp_dir, ymd};

#[test]
fn output_is_sorted_whatever_the_input_order() {
    let docs = vec![
        (BulletinKey::new(2024, March), bulletin_page("01MAR22", "01MAR23")),
        (BulletinKey::new(2023, November), bulletin_page("01NOV21", "01NOV22")),
        (BulletinKey::new(2024, January), bulletin_page("01JAN22", "01JAN23")),
        (BulletinKey::new(2023, December), bulletin_page("01DEC21", "01DEC22")),
    ];
    let series = build_series(docs, 3, ymd(2024, 6, 1), &Extractor::default());

    let dates: Vec<_> = series.iter().map(|r| r.bulletin_date).collect();
    assert_eq!(dates, vec![ymd(2023, 11, 1), ymd(2023, 12, 1), ymd(2024, 1, 1), ymd(2024, 3, 1)]);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(series[2].final_action, CategoryDate::Dated(ymd(2022, 1, 1)));
    assert_eq!(series[2].filing, CategoryDate::Dated(ymd(2023, 1, 1)));
}

#[test]
fn window_of_two_years_in_2025_drops_2022() {
    let docs = vec![
        (BulletinKey::new(2022, December), bulletin_page("C", "C")),
        (BulletinKey::new(2022, January), bulletin_page("C", "C")),
        (BulletinKey::new(2023, January), bulletin_page("C", "C")),
        (BulletinKey::new(2025, February), bulletin_page("C", "C")),
    ];
    let series = build_series(docs, 2, ymd(2025, 1, 20), &Extractor::default());
    let keys: Vec<_> = series.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![BulletinKey::new(2023, January), BulletinKey::new(2025, February)]);
    assert!(series.iter().all(|r| r.key.year >= 2023));
}

#[test]
fn current_dates_track_each_bulletin() {
    let docs = vec![
        (BulletinKey::new(2024, May), bulletin_page("C", "U")),
        (BulletinKey::new(2024, April), bulletin_page("C", "U")),
    ];
    let series = build_series(docs, 1, ymd(2024, 6, 1), &Extractor::default());
    assert_eq!(series[0].final_action, CategoryDate::Current(ymd(2024, 4, 1)));
    assert_eq!(series[1].final_action, CategoryDate::Current(ymd(2024, 5, 1)));
    assert!(series.iter().all(|r| r.filing == CategoryDate::Unavailable));
}

#[test]
fn scan_store_reads_layout_and_ignores_strays() {
    let root = tmp_dir("scan_store");
    let store = BulletinStore::new(&root, "html");
    store.save(&BulletinKey::new(2024, February), &bulletin_page("01FEB22", "01FEB23")).unwrap();
    store.save(&BulletinKey::new(2023, October), &bulletin_page("01OCT21", "01OCT22")).unwrap();
    store.save(&BulletinKey::new(2019, October), &bulletin_page("01OCT15", "01OCT16")).unwrap();

    fs::create_dir_all(root.join("drafts")).unwrap();
    fs::write(root.join("drafts/march.html"), bulletin_page("C", "C")).unwrap();
    fs::write(root.join("2024/marc.html"), bulletin_page("C", "C")).unwrap();
    fs::write(root.join("2024/README"), "notes").unwrap();

    let series = scan_store(&store, 2, ymd(2025, 3, 1), &Extractor::default()).unwrap();
    let keys: Vec<_> = series.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![BulletinKey::new(2023, October), BulletinKey::new(2024, February)]);
    assert_eq!(series[0].filing, CategoryDate::Dated(ymd(2022, 10, 1)));
}

#[test]
fn empty_store_gives_empty_series() {
    let root = tmp_dir("scan_empty");
    let store = BulletinStore::new(&root, "html");
    assert!(scan_store(&store, 3, ymd(2025, 3, 1), &Extractor::default()).unwrap().is_empty());
}
