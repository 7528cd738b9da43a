//! SQLite-backed car store.

use std::path::Path;

use rusqlite::params;
use tokio_rusqlite::Connection;
use tracing::{debug, info};

use crate::car::{Car, NewCar};
use crate::error::StoreError;
use crate::schema::init_schema;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Demo rows inserted by [`CarStore::seed_demo`].
const DEMO_CARS: [(&str, &str, &str); 2] = [("Volvo", "V70", "70000"), ("Volvo", "V40", "45000")];

/// SQLite-backed store for the cars table.
///
/// The connection is opened once and reused for the process lifetime; its
/// worker thread serializes statements internally.
pub struct CarStore {
    conn: Connection,
}

impl CarStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        conn.call(|conn| init_schema(conn))
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Open (creating if absent) a file-backed database and ensure the
    /// cars table exists. Safe to run on every startup.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        conn.call(|conn| init_schema(conn))
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        Ok(Self { conn })
    }

    /// List every car, ordered by insertion (id).
    pub async fn list(&self) -> Result<Vec<Car>, StoreError> {
        self.conn
            .call(|conn| {
                let mut stmt =
                    conn.prepare("SELECT id, brand, model, price FROM cars ORDER BY id")?;
                let cars = stmt
                    .query_map([], |row| {
                        Ok(Car {
                            id: row.get(0)?,
                            brand: row.get(1)?,
                            model: row.get(2)?,
                            price: row.get(3)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(cars)
            })
            .await
            .map_err(|e| StoreError::Statement(e.to_string()))
    }

    /// Insert a new car and return it with the id SQLite assigned.
    pub async fn insert(&self, car: NewCar) -> Result<Car, StoreError> {
        let car = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO cars (brand, model, price) VALUES (?1, ?2, ?3)",
                    params![car.brand, car.model, car.price],
                )?;
                Ok(Car {
                    id: conn.last_insert_rowid(),
                    brand: car.brand,
                    model: car.model,
                    price: car.price,
                })
            })
            .await
            .map_err(|e| StoreError::Statement(e.to_string()))?;

        debug!("inserted car id={}", car.id);
        Ok(car)
    }

    /// Delete every row unconditionally. Returns the number of rows removed.
    pub async fn clear(&self) -> Result<usize, StoreError> {
        let removed = self
            .conn
            .call(|conn| Ok(conn.execute("DELETE FROM cars", [])?))
            .await
            .map_err(|e| StoreError::Statement(e.to_string()))?;

        debug!("cleared {} cars", removed);
        Ok(removed)
    }

    /// Count the rows in the cars table.
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.conn
            .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))?))
            .await
            .map_err(|e| StoreError::Statement(e.to_string()))
    }

    /// Insert the demo rows, but only into an empty table so restarts do
    /// not duplicate them. Returns the number of rows inserted.
    pub async fn seed_demo(&self) -> Result<usize, StoreError> {
        let inserted = self
            .conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))?;
                if count > 0 {
                    return Ok(0);
                }

                let mut stmt =
                    conn.prepare("INSERT INTO cars (brand, model, price) VALUES (?1, ?2, ?3)")?;
                for (brand, model, price) in DEMO_CARS {
                    stmt.execute(params![brand, model, price])?;
                }
                Ok(DEMO_CARS.len())
            })
            .await
            .map_err(|e| StoreError::Statement(e.to_string()))?;

        if inserted > 0 {
            info!("seeded {} demo cars", inserted);
        }
        Ok(inserted)
    }
}
