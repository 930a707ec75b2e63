use crate::schema::articles;
use chrono::NaiveDateTime;
use diesel::dsl::now;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS articles (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )";

#[derive(Serialize, Deserialize, Queryable, Clone, PartialEq, Debug)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Timestamps are left to the column defaults so both come from the same instant.
#[derive(Insertable)]
#[table_name = "articles"]
struct NewArticle<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl Article {
    pub fn create_table(conn: &PgConnection) -> QueryResult<()> {
        diesel::sql_query(CREATE_TABLE_SQL).execute(conn)?;
        Ok(())
    }

    /// Newest first; rows created in the same instant fall back to id order.
    pub fn list_all(conn: &PgConnection) -> QueryResult<Vec<Self>> {
        articles::table
            .order((articles::created_at.desc(), articles::id.desc()))
            .load::<Self>(conn)
    }

    pub fn find_by_id(conn: &PgConnection, id: i32) -> QueryResult<Option<Self>> {
        articles::table.find(id).first::<Self>(conn).optional()
    }

    pub fn create(conn: &PgConnection, title: &str, content: &str) -> QueryResult<Self> {
        diesel::insert_into(articles::table)
            .values(NewArticle { title, content })
            .get_result::<Self>(conn)
    }

    pub fn update(
        conn: &PgConnection,
        id: i32,
        title: &str,
        content: &str,
    ) -> QueryResult<Option<Self>> {
        diesel::update(articles::table.find(id))
            .set((
                articles::title.eq(title),
                articles::content.eq(content),
                articles::updated_at.eq(now),
            ))
            .get_result::<Self>(conn)
            .optional()
    }

    /// Returns the id of the removed row, if there was one.
    pub fn delete(conn: &PgConnection, id: i32) -> QueryResult<Option<i32>> {
        diesel::delete(articles::table.find(id))
            .returning(articles::id)
            .get_result::<i32>(conn)
            .optional()
    }
}
