pub use crate::app::PinCliApp;

mod app {
    use anyhow::Result;
    use log::{error, info, warn};
    use pinstats_chart::EguiChartPresenter;
    use pinstats_core::*;
    use std::io::{self, BufRead, Write};

    pub struct PinCliApp {
        conf: Conf,
        sqlite: Sqlite,
        presenter: Box<dyn ChartPresenter>,
    }

    impl PinCliApp {
        pub fn new(conf: Conf) -> Result<Self> {
            Self::with_presenter(conf, Box::new(EguiChartPresenter::new()))
        }

        pub fn with_presenter(conf: Conf, presenter: Box<dyn ChartPresenter>) -> Result<Self> {
            let sqlite = Sqlite::new(&conf.db_file)?;

            Ok(Self {
                conf,
                sqlite,
                presenter,
            })
        }

        pub fn sqlite(&self) -> &Sqlite {
            &self.sqlite
        }

        pub fn import_csv<W: Write>(&self, out: &mut W) -> Result<()> {
            match self.sqlite.import_csv(&self.conf.csv_file)? {
                ImportOutcome::Imported(count) => {
                    writeln!(out, "✅ CSV data successfully imported into the database.")?;
                    writeln!(out, "   {} posts added.", count)?;
                }
                ImportOutcome::MissingFile(path) => {
                    writeln!(
                        out,
                        "❌ CSV file '{}' not found. Please make sure it's in the same folder.",
                        path.display()
                    )?;
                }
            }
            Ok(())
        }

        pub fn show_sample<W: Write>(&self, out: &mut W, limit: i64) -> Result<Vec<Post>> {
            let rows = self.sqlite.sample(limit)?;
            writeln!(out, "\n📌 Sample Posts:")?;
            for row in &rows {
                writeln!(out, "{:?}", row.as_tuple())?;
            }
            Ok(rows)
        }

        /// Takes the metric as typed text; anything other than `likes` or
        /// `comments` is reported and nothing is queried.
        pub fn show_top_posts<W: Write>(
            &self,
            out: &mut W,
            metric: &str,
            limit: i64,
        ) -> Result<Vec<TopPost>> {
            let metric = match metric.parse::<Metric>() {
                Ok(metric) => metric,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "⚠️ Please choose a valid metric: 'likes' or 'comments'.")?;
                    return Ok(Vec::new());
                }
            };

            let rows = self.sqlite.top_posts(metric, limit)?;
            writeln!(out, "\n🏆 Top {} Posts by {}:", limit, metric.label())?;
            for row in &rows {
                writeln!(out, "{:?}", row.as_tuple())?;
            }
            Ok(rows)
        }

        pub fn plot_top_posts(&self, metric: Metric, limit: i64) -> Result<()> {
            let rows = self.sqlite.top_posts(metric, limit)?;
            let spec = ChartSpec::top_posts(metric, limit, &rows);
            self.presenter.present(&spec)
        }

        fn show_menu<W: Write>(&self, out: &mut W) -> Result<()> {
            writeln!(out, "\n📌 Pinterest CLI Menu")?;
            writeln!(out, "----------------------")?;
            writeln!(out, "1️⃣  Load data from CSV")?;
            writeln!(out, "2️⃣  Show sample data")?;
            writeln!(out, "3️⃣  View top posts by likes")?;
            writeln!(out, "4️⃣  View top posts by comments")?;
            writeln!(out, "5️⃣  Plot top posts by likes 📊")?;
            writeln!(out, "6️⃣  Plot top posts by comments 📊")?;
            writeln!(out, "0️⃣  Exit")?;
            write!(out, "Select an option: ")?;
            out.flush()?;
            Ok(())
        }

        pub fn run(&mut self) -> Result<()> {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            self.run_with(stdin.lock(), &mut stdout)
        }

        /// Menu loop over any line source. End of input exits like `0`.
        pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
            loop {
                self.show_menu(out)?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    info!("Input closed, leaving menu");
                    writeln!(out)?;
                    writeln!(out, "👋 Exiting Pinterest CLI. Have a great day!")?;
                    break;
                }

                match line.trim() {
                    "1" => {
                        if let Err(e) = self.import_csv(out) {
                            error!("CSV import failed: {:#}", e);
                            writeln!(out, "❌ Failed to import CSV: {:#}", e)?;
                        }
                    }
                    "2" => {
                        if let Err(e) = self.show_sample(out, self.conf.sample_limit) {
                            writeln!(out, "❌ Failed to show sample posts: {:#}", e)?;
                        }
                    }
                    "3" => {
                        if let Err(e) = self.show_top_posts(out, "likes", self.conf.top_limit) {
                            writeln!(out, "❌ Failed to show top posts: {:#}", e)?;
                        }
                    }
                    "4" => {
                        if let Err(e) = self.show_top_posts(out, "comments", self.conf.top_limit) {
                            writeln!(out, "❌ Failed to show top posts: {:#}", e)?;
                        }
                    }
                    "5" => {
                        if let Err(e) = self.plot_top_posts(Metric::Likes, self.conf.top_limit) {
                            writeln!(out, "❌ Failed to plot top posts: {:#}", e)?;
                        }
                    }
                    "6" => {
                        if let Err(e) = self.plot_top_posts(Metric::Comments, self.conf.top_limit) {
                            writeln!(out, "❌ Failed to plot top posts: {:#}", e)?;
                        }
                    }
                    "0" => {
                        writeln!(out, "👋 Exiting Pinterest CLI. Have a great day!")?;
                        break;
                    }
                    _ => {
                        writeln!(out, "❌ Invalid option. Please choose from the menu.")?;
                    }
                }
            }

            Ok(())
        }
    }
}
