use crate::db::db::Db;
use crate::libs::calendar::parse_local;
use crate::libs::interval::{Interval, IntervalKind};
use anyhow::Result;
use rusqlite::{params, Connection};

const SCHEMA_AVAILABILITY: &str = "CREATE TABLE IF NOT EXISTS availability (
    id INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP NOT NULL,
    kind TEXT NOT NULL
);";
const INSERT_INTERVAL: &str = "INSERT INTO availability (employee_id, start, end, kind) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BY_EMPLOYEE: &str = "SELECT start, end, kind FROM availability WHERE employee_id = ?1 ORDER BY start";
const DELETE_BY_EMPLOYEE: &str = "DELETE FROM availability WHERE employee_id = ?1";

// Local wall-clock storage format, millisecond precision preserved.
const STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Availability interval storage keyed by employee.
pub struct Availability {
    pub conn: Connection,
}

impl Availability {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_AVAILABILITY, [])?;
        Ok(Availability { conn: db.conn })
    }

    pub fn insert(&mut self, employee_id: i64, interval: &Interval) -> Result<()> {
        self.conn.execute(
            INSERT_INTERVAL,
            params![
                employee_id,
                interval.start.format(STORE_FORMAT).to_string(),
                interval.end.format(STORE_FORMAT).to_string(),
                interval.kind.label(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a batch of intervals, e.g. from a mobile-app JSON export.
    pub fn import(&mut self, employee_id: i64, intervals: &[Interval]) -> Result<usize> {
        for interval in intervals {
            self.insert(employee_id, interval)?;
        }
        Ok(intervals.len())
    }

    /// All intervals of one employee, ordered by start time.
    pub fn fetch(&mut self, employee_id: i64) -> Result<Vec<Interval>> {
        let mut stmt = self.conn.prepare(SELECT_BY_EMPLOYEE)?;
        let interval_iter = stmt.query_map([employee_id], |row| {
            Ok(Interval {
                start: parse_local(&row.get::<_, String>(0)?).unwrap(),
                end: parse_local(&row.get::<_, String>(1)?).unwrap(),
                kind: IntervalKind::parse(&row.get::<_, String>(2)?),
            })
        })?;
        let mut intervals = Vec::new();
        for interval in interval_iter {
            intervals.push(interval?);
        }
        Ok(intervals)
    }

    pub fn delete_for(&mut self, employee_id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BY_EMPLOYEE, [employee_id])?)
    }
}
