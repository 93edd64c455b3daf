//! Row types for every table in the schema. Only `Student` is served over HTTP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted table: its name and the idempotent DDL that creates it.
pub trait Table {
    const NAME: &'static str;
    const DDL: &'static str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Table for Student {
    const NAME: &'static str = "student";
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS student (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
    "#;
}

/// A student not yet assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Partial update; `None` leaves the column unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The `{name, email}` shape returned by single-student responses (no id).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub email: String,
}

impl From<Student> for StudentSummary {
    fn from(s: Student) -> Self {
        StudentSummary {
            name: s.name,
            email: s.email,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub release_date: NaiveDate,
}

impl Table for Car {
    const NAME: &'static str = "cars";
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS cars (
            id BIGSERIAL PRIMARY KEY,
            model VARCHAR(255) NOT NULL,
            release_date DATE NOT NULL
        )
    "#;
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
}

impl Table for Pet {
    const NAME: &'static str = "pet";
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS pet (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            age INTEGER
        )
    "#;
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Fruit {
    pub id: i64,
    pub name: String,
    pub number: Option<i32>,
}

impl Table for Fruit {
    const NAME: &'static str = "fruits";
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS fruits (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            number INTEGER
        )
    "#;
}
