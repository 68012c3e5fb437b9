use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'active'
);";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, role, status) VALUES (?1, ?2, ?3)";
const SELECT_BY_ID: &str = "SELECT id, name, role, status FROM employees WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name, role, status FROM employees ORDER BY name";
const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?1";

/// A local mirror of an employee record from the admin grid.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub status: String,
}

pub struct Employees {
    pub conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str, role: &str, status: &str) -> Result<i64> {
        self.conn.execute(INSERT_EMPLOYEE, [name, role, status])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(SELECT_BY_ID, [id], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    role: row.get(2)?,
                    status: row.get(3)?,
                })
            })
            .optional()?;
        Ok(employee)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let employee_iter = stmt.query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                name: row.get(1)?,
                role: row.get(2)?,
                status: row.get(3)?,
            })
        })?;
        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BY_ID, [id])?)
    }
}
