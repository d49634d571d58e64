use anyhow::{Context, Result};
use diesel::prelude::*;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub mod model;
#[rustfmt::skip]
pub mod schema;

use self::model::*;
use self::schema::*;
use crate::import::{open_post_reader, read_posts, ImportOutcome};
use crate::metric::Metric;

/// Handle on the posts database file. Every operation opens its own
/// connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct Sqlite {
    db_path: PathBuf,
}

impl Sqlite {
    /// Opens the database (creating the file if needed) and makes sure the
    /// posts table exists.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let sqlite = Sqlite {
            db_path: db_path.as_ref().to_path_buf(),
        };
        info!("Using SQLite database at: {:?}", sqlite.db_path);
        sqlite.initialize()?;
        Ok(sqlite)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn establish_connection(&self) -> Result<SqliteConnection> {
        let url = self.db_path.to_string_lossy();
        SqliteConnection::establish(&url)
            .with_context(|| format!("Failed to open database {}", self.db_path.display()))
    }

    pub fn initialize(&self) -> Result<()> {
        let mut connection = self.establish_connection()?;
        diesel::sql_query(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                likes INTEGER NOT NULL,
                comments INTEGER NOT NULL,
                category TEXT NOT NULL DEFAULT ''
            )",
        )
        .execute(&mut connection)
        .context("Failed to create posts table")?;
        debug!("posts table ready");
        Ok(())
    }

    /// Appends every record of the CSV file in a single transaction. A bad
    /// record rolls the whole run back.
    pub fn import_csv(&self, csv_path: impl AsRef<Path>) -> Result<ImportOutcome> {
        let csv_path = csv_path.as_ref();
        if !csv_path.exists() {
            info!("CSV file {:?} not found, skipping import", csv_path);
            return Ok(ImportOutcome::MissingFile(csv_path.to_path_buf()));
        }

        info!("Importing posts from {:?}", csv_path);
        let mut reader = open_post_reader(csv_path)?;
        let mut connection = self.establish_connection()?;
        let imported = connection.transaction::<_, anyhow::Error, _>(|conn| {
            let new_posts = read_posts(&mut reader)?;
            Ok(insert_each(conn, &new_posts)?)
        })?;

        info!("Imported {} posts from {:?}", imported, csv_path);
        Ok(ImportOutcome::Imported(imported))
    }

    /// Appends already-parsed posts in one transaction.
    pub fn insert_posts(&self, new_posts: &[NewPost]) -> Result<usize> {
        let mut connection = self.establish_connection()?;
        let inserted = connection.transaction(|conn| insert_each(conn, new_posts))?;
        Ok(inserted)
    }

    /// Up to `limit` posts in storage order.
    pub fn sample(&self, limit: i64) -> Result<Vec<Post>> {
        debug!("sample limit={}", limit);
        let mut connection = self.establish_connection()?;
        let results = posts::table
            .select(Post::as_select())
            .limit(limit)
            .load(&mut connection)?;
        Ok(results)
    }

    /// The `limit` posts with the highest `metric`, descending. Equal values
    /// keep insertion order.
    pub fn top_posts(&self, metric: Metric, limit: i64) -> Result<Vec<TopPost>> {
        debug!("top_posts metric={} limit={}", metric, limit);
        let mut connection = self.establish_connection()?;
        let results = match metric {
            Metric::Likes => posts::table
                .select((posts::title, posts::author, posts::likes))
                .order((posts::likes.desc(), posts::id.asc()))
                .limit(limit)
                .load::<TopPost>(&mut connection)?,
            Metric::Comments => posts::table
                .select((posts::title, posts::author, posts::comments))
                .order((posts::comments.desc(), posts::id.asc()))
                .limit(limit)
                .load::<TopPost>(&mut connection)?,
        };
        Ok(results)
    }

    pub fn count(&self) -> Result<i64> {
        let mut connection = self.establish_connection()?;
        let count: i64 = posts::table.count().get_result(&mut connection)?;
        Ok(count)
    }
}

fn insert_each(conn: &mut SqliteConnection, new_posts: &[NewPost]) -> QueryResult<usize> {
    let mut count = 0;
    for new_post in new_posts {
        count += diesel::insert_into(posts::table)
            .values(new_post)
            .execute(conn)?;
    }
    Ok(count)
}
