use diesel::prelude::*;
use serde::Deserialize;

use crate::sqlite::schema::posts;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub likes: i64,
    pub comments: i64,
    pub category: String,
}

impl Post {
    /// Row as a plain tuple, the shape printed by the sample listing.
    pub fn as_tuple(&self) -> (i64, &str, &str, i64, i64, &str) {
        (
            self.id,
            &self.title,
            &self.author,
            self.likes,
            self.comments,
            &self.category,
        )
    }
}

// One CSV record. Columns are matched by header name; `category` may be absent.
#[derive(Insertable, Deserialize, PartialEq, Debug, Clone)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub likes: i64,
    pub comments: i64,
    #[serde(default)]
    pub category: String,
}

#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct TopPost {
    pub title: String,
    pub author: String,
    pub value: i64,
}

impl TopPost {
    pub fn as_tuple(&self) -> (&str, &str, i64) {
        (&self.title, &self.author, self.value)
    }
}
