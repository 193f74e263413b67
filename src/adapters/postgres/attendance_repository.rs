//! PostgreSQL implementation of AttendanceRepository.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use super::db_error;
use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::membership::MembershipStatus;
use crate::ports::AttendanceRepository;

const MEMBER_FK_CONSTRAINT: &str = "attendance_member_id_fkey";

/// PostgreSQL implementation of the AttendanceRepository port.
///
/// The board (`attendance`) is upserted on `member_id`; the backup
/// (`attendance_backup`) is append-only.
pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AttendanceRow {
    num: i32,
    member_id: i32,
    name: String,
    end_date: Option<NaiveDate>,
    status: Option<String>,
    attendance_time: NaiveTime,
    attendance_date: NaiveDate,
    day: String,
}

impl TryFrom<AttendanceRow> for AttendanceEntry {
    type Error = DomainError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .as_deref()
            .map(|s| {
                MembershipStatus::parse(s).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Invalid status value: {}", s),
                    )
                })
            })
            .transpose()?;

        Ok(AttendanceEntry {
            num: row.num,
            record: AttendanceRecord {
                member_id: MemberId::from_db(row.member_id),
                name: row.name,
                end_date: row.end_date,
                status,
                attendance_time: row.attendance_time,
                attendance_date: row.attendance_date,
                day: row.day,
            },
        })
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    async fn record_check_in(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceEntry, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let status = record.status.map(|s| s.as_str());

        let num: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO attendance (
                member_id, name, end_date, status, attendance_time, attendance_date, day
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (member_id) DO UPDATE SET
                name = EXCLUDED.name,
                end_date = EXCLUDED.end_date,
                status = EXCLUDED.status,
                attendance_time = EXCLUDED.attendance_time,
                attendance_date = EXCLUDED.attendance_date,
                day = EXCLUDED.day
            RETURNING num
            "#,
        )
        .bind(record.member_id.as_i32())
        .bind(&record.name)
        .bind(record.end_date)
        .bind(status)
        .bind(record.attendance_time)
        .bind(record.attendance_date)
        .bind(&record.day)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some(MEMBER_FK_CONSTRAINT) {
                    return DomainError::new(ErrorCode::MemberNotFound, "Member not found")
                        .with_detail("member_id", record.member_id.to_string());
                }
            }
            db_error("Failed to record attendance", e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO attendance_backup (
                member_id, name, end_date, status, attendance_time, attendance_date, day
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.member_id.as_i32())
        .bind(&record.name)
        .bind(record.end_date)
        .bind(status)
        .bind(record.attendance_time)
        .bind(record.attendance_date)
        .bind(&record.day)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to back up attendance", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(AttendanceEntry {
            num,
            record: record.clone(),
        })
    }

    async fn list_all(&self) -> Result<Vec<AttendanceEntry>, DomainError> {
        let rows: Vec<AttendanceRow> = sqlx::query_as(
            r#"
            SELECT num, member_id, name, end_date, status, attendance_time, attendance_date, day
            FROM attendance
            ORDER BY num ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list attendance", e))?;

        rows.into_iter().map(AttendanceEntry::try_from).collect()
    }

    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceEntry>, DomainError> {
        let rows: Vec<AttendanceRow> = sqlx::query_as(
            r#"
            SELECT num, member_id, name, end_date, status, attendance_time, attendance_date, day
            FROM attendance
            WHERE attendance_date = $1
            ORDER BY attendance_time DESC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list attendance", e))?;

        rows.into_iter().map(AttendanceEntry::try_from).collect()
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM attendance")
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to clear attendance", e))?;

        Ok(result.rows_affected())
    }
}
