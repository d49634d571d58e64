//! Menu loop driven by scripted input.

use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::rc::Rc;

use anyhow::Result;
use pincli::PinCliApp;
use pinstats_core::{ChartPresenter, ChartSpec, Conf};
use tempfile::TempDir;

const POSTS_CSV: &str = "\
title,author,likes,comments,category
A,Ann,10,5,food
B,Bo,30,9,travel
C,Cy,20,1
";

#[derive(Clone, Default)]
struct RecordingPresenter {
    shown: Rc<RefCell<Vec<ChartSpec>>>,
}

impl ChartPresenter for RecordingPresenter {
    fn present(&self, spec: &ChartSpec) -> Result<()> {
        self.shown.borrow_mut().push(spec.clone());
        Ok(())
    }
}

struct Fixture {
    dir: TempDir,
    presenter: RecordingPresenter,
    app: PinCliApp,
}

fn fixture(with_csv: bool) -> Fixture {
    let dir = TempDir::new().unwrap();
    let csv_file = dir.path().join("pinterest_data.csv");
    if with_csv {
        fs::write(&csv_file, POSTS_CSV).unwrap();
    }
    let conf = Conf::with_paths(dir.path().join("pinterest.db"), &csv_file);
    let presenter = RecordingPresenter::default();
    let app = PinCliApp::with_presenter(conf, Box::new(presenter.clone())).unwrap();
    Fixture { dir, presenter, app }
}

fn run_script(app: &mut PinCliApp, script: &str) -> String {
    let mut out = Vec::new();
    app.run_with(Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn import_then_list_top_likes() {
    let mut fx = fixture(true);
    let output = run_script(&mut fx.app, "1\n3\n0\n");

    assert!(output.contains("✅ CSV data successfully imported into the database."));
    assert!(output.contains("🏆 Top 5 Posts by Likes:"));
    let b = output.find("(\"B\", \"Bo\", 30)").unwrap();
    let c = output.find("(\"C\", \"Cy\", 20)").unwrap();
    let a = output.find("(\"A\", \"Ann\", 10)").unwrap();
    assert!(b < c && c < a);
    assert!(output.contains("👋 Exiting Pinterest CLI. Have a great day!"));
    assert_eq!(fx.app.sqlite().count().unwrap(), 3);
}

#[test]
fn importing_twice_doubles_rows() {
    let mut fx = fixture(true);
    run_script(&mut fx.app, "1\n1\n0\n");
    assert_eq!(fx.app.sqlite().count().unwrap(), 6);
}

#[test]
fn sample_prints_rows_as_tuples() {
    let mut fx = fixture(true);
    let output = run_script(&mut fx.app, "1\n2\n0\n");

    assert!(output.contains("📌 Sample Posts:"));
    assert!(output.contains("(3, \"C\", \"Cy\", 20, 1, \"\")"));
}

#[test]
fn missing_csv_is_reported_and_loop_continues() {
    let mut fx = fixture(false);
    let output = run_script(&mut fx.app, "1\n4\n0\n");

    assert!(output.contains("not found. Please make sure it's in the same folder."));
    assert!(output.contains("🏆 Top 5 Posts by Comments:"));
    assert_eq!(fx.app.sqlite().count().unwrap(), 0);
}

#[test]
fn unknown_choice_reprompts() {
    let mut fx = fixture(true);
    let output = run_script(&mut fx.app, "7\nhello\n0\n");

    assert_eq!(output.matches("❌ Invalid option. Please choose from the menu.").count(), 2);
    assert_eq!(output.matches("Select an option: ").count(), 3);
}

#[test]
fn end_of_input_exits() {
    let mut fx = fixture(true);
    let output = run_script(&mut fx.app, "2\n");
    assert_eq!(output.matches("Select an option: ").count(), 2);
    assert!(output.ends_with("👋 Exiting Pinterest CLI. Have a great day!\n"));
}

#[test]
fn plot_options_hand_charts_to_presenter() {
    let mut fx = fixture(true);
    run_script(&mut fx.app, "1\n5\n6\n0\n");

    let shown = fx.presenter.shown.borrow();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].title, "Top 5 Posts by Likes");
    let likes: Vec<i64> = shown[0].bars.iter().map(|bar| bar.value).collect();
    assert_eq!(likes, vec![10, 20, 30]);
    assert_eq!(shown[1].title, "Top 5 Posts by Comments");
    assert_eq!(shown[1].bars.last().unwrap().label, "B");
}

#[test]
fn bad_csv_number_reports_failure_and_keeps_table_empty() {
    let mut fx = fixture(false);
    fs::write(
        fx.dir.path().join("pinterest_data.csv"),
        "title,author,likes,comments\nA,Ann,ten,1\n",
    )
    .unwrap();

    let output = run_script(&mut fx.app, "1\n0\n");
    assert!(output.contains("❌ Failed to import CSV"));
    assert_eq!(fx.app.sqlite().count().unwrap(), 0);
}

#[test]
fn invalid_metric_runs_no_query() {
    let dir = TempDir::new().unwrap();
    let db_dir = dir.path().join("db");
    fs::create_dir(&db_dir).unwrap();
    let conf = Conf::with_paths(db_dir.join("pinterest.db"), dir.path().join("none.csv"));
    let app = PinCliApp::with_presenter(conf, Box::new(RecordingPresenter::default())).unwrap();

    // Any query from here on would fail to open the database.
    fs::remove_dir_all(&db_dir).unwrap();

    let mut out = Vec::new();
    let rows = app.show_top_posts(&mut out, "invalid_metric", 5).unwrap();
    assert!(rows.is_empty());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("⚠️ Please choose a valid metric: 'likes' or 'comments'."));

    assert!(app.show_top_posts(&mut Vec::new(), "likes", 5).is_err());
}

#[test]
fn sample_limit_larger_than_table() {
    let mut fx = fixture(true);
    run_script(&mut fx.app, "1\n0\n");
    let rows = fx.app.show_sample(&mut Vec::new(), 5).unwrap();
    assert_eq!(rows.len(), 3);
}
