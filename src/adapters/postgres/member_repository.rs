//! PostgreSQL implementation of MemberRepository.
//!
//! Members live in `members`; edits and renewals are written to
//! `member_logs` and `renewal_logs` in the same transaction as the member row.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{PgPool, Postgres, Transaction};

use super::{db_error, money_from_columns, money_from_db};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Money};
use crate::domain::member::{Member, MemberChange, MemberProfile, NewMember, RenewalRecord};
use crate::domain::membership::{
    leading_months, MembershipPackage, MembershipStatus, MembershipTerms,
};
use crate::ports::{MemberFilter, MemberRepository};

const EMAIL_CONSTRAINT: &str = "members_email_key";

const MEMBER_COLUMNS: &str = r#"
    id, name, email, phone, gender, birthdate, age, actual_starting_date,
    starting_date, end_date, package, fee_minor_units, fee_currency, status,
    invitations, comment, freeze_used
"#;

/// PostgreSQL implementation of the MemberRepository port.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i32,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    gender: Option<String>,
    birthdate: Option<NaiveDate>,
    age: Option<i32>,
    actual_starting_date: Option<NaiveDate>,
    starting_date: NaiveDate,
    end_date: Option<NaiveDate>,
    package: String,
    fee_minor_units: Option<i64>,
    fee_currency: Option<String>,
    status: Option<String>,
    invitations: i32,
    comment: Option<String>,
    freeze_used: bool,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let fee = money_from_columns(row.fee_minor_units, row.fee_currency.as_deref())?;
        let status = row.status.as_deref().map(parse_status).transpose()?;
        let age = row
            .age
            .map(|age| {
                u32::try_from(age).map_err(|_| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Invalid age value: {}", age),
                    )
                })
            })
            .transpose()?;

        Ok(Member {
            id: MemberId::from_db(row.id),
            profile: MemberProfile {
                name: row.name,
                email: row.email,
                phone: row.phone,
                gender: row.gender,
                birthdate: row.birthdate,
                actual_starting_date: row.actual_starting_date,
                starting_date: row.starting_date,
                package_label: row.package.clone(),
                comment: row.comment,
            },
            age,
            terms: MembershipTerms {
                duration_months: leading_months(&row.package).ok(),
                package_label: row.package,
                end_date: row.end_date,
                fee,
                status,
            },
            invitations: row.invitations,
            freeze_used: row.freeze_used,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MemberLogRow {
    member_id: i32,
    member_name: String,
    field_name: String,
    old_value: Option<String>,
    new_value: Option<String>,
    edited_by: Option<String>,
    edited_at: NaiveDateTime,
}

impl From<MemberLogRow> for MemberChange {
    fn from(row: MemberLogRow) -> Self {
        MemberChange {
            member_id: MemberId::from_db(row.member_id),
            member_name: row.member_name,
            field_name: row.field_name,
            old_value: row.old_value,
            new_value: row.new_value,
            edited_by: row.edited_by,
            edited_at: row.edited_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RenewalLogRow {
    member_id: i32,
    package: String,
    renewal_date: NaiveDate,
    fee_minor_units: i64,
    fee_currency: String,
    edited_by: Option<String>,
    renewed_at: NaiveDateTime,
}

impl TryFrom<RenewalLogRow> for RenewalRecord {
    type Error = DomainError;

    fn try_from(row: RenewalLogRow) -> Result<Self, Self::Error> {
        let package = MembershipPackage::from_label(&row.package).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid package value: {}", row.package),
            )
        })?;

        Ok(RenewalRecord {
            member_id: MemberId::from_db(row.member_id),
            package,
            renewal_date: row.renewal_date,
            fee: money_from_db(row.fee_minor_units, &row.fee_currency)?,
            edited_by: row.edited_by,
            renewed_at: row.renewed_at,
        })
    }
}

fn parse_status(s: &str) -> Result<MembershipStatus, DomainError> {
    MembershipStatus::parse(s).ok_or_else(|| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid status value: {}", s))
    })
}

/// `%needle%` with LIKE wildcards in the needle escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn not_found(id: MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, "Member not found")
        .with_detail("member_id", id.to_string())
}

fn map_write_error(context: &str, email: Option<&str>, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(EMAIL_CONSTRAINT) {
            return DomainError::new(ErrorCode::DuplicateMember, "Email already registered")
                .with_detail("email", email.unwrap_or_default());
        }
    }
    db_error(context, e)
}

fn fee_columns(fee: Option<Money>) -> (Option<i64>, Option<&'static str>) {
    match fee {
        Some(fee) => (Some(fee.minor_units()), Some(fee.currency().code())),
        None => (None, None),
    }
}

/// Writes every column of an existing member.
async fn update_member_row(
    tx: &mut Transaction<'_, Postgres>,
    member: &Member,
) -> Result<(), DomainError> {
    let (fee_minor_units, fee_currency) = fee_columns(member.terms.fee);
    let profile = &member.profile;

    let result = sqlx::query(
        r#"
        UPDATE members SET
            name = $2,
            email = $3,
            phone = $4,
            gender = $5,
            birthdate = $6,
            age = $7,
            actual_starting_date = $8,
            starting_date = $9,
            end_date = $10,
            package = $11,
            fee_minor_units = $12,
            fee_currency = $13,
            status = $14,
            invitations = $15,
            comment = $16,
            freeze_used = $17
        WHERE id = $1
        "#,
    )
    .bind(member.id.as_i32())
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(&profile.phone)
    .bind(&profile.gender)
    .bind(profile.birthdate)
    .bind(member.age.map(|a| a as i32))
    .bind(profile.actual_starting_date)
    .bind(profile.starting_date)
    .bind(member.terms.end_date)
    .bind(&profile.package_label)
    .bind(fee_minor_units)
    .bind(fee_currency)
    .bind(member.terms.status.map(|s| s.as_str()))
    .bind(member.invitations)
    .bind(&profile.comment)
    .bind(member.freeze_used)
    .execute(&mut **tx)
    .await
    .map_err(|e| map_write_error("Failed to update member", profile.email.as_deref(), e))?;

    if result.rows_affected() == 0 {
        return Err(not_found(member.id));
    }
    Ok(())
}

async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    pool.begin()
        .await
        .map_err(|e| db_error("Failed to begin transaction", e))
}

async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), DomainError> {
    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit transaction", e))
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &NewMember) -> Result<Member, DomainError> {
        let (fee_minor_units, fee_currency) = fee_columns(member.terms.fee);
        let profile = &member.profile;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO members (
                name, email, phone, gender, birthdate, age, actual_starting_date,
                starting_date, end_date, package, fee_minor_units, fee_currency,
                status, comment
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.gender)
        .bind(profile.birthdate)
        .bind(member.age.map(|a| a as i32))
        .bind(profile.actual_starting_date)
        .bind(profile.starting_date)
        .bind(member.terms.end_date)
        .bind(&profile.package_label)
        .bind(fee_minor_units)
        .bind(fee_currency)
        .bind(member.terms.status.map(|s| s.as_str()))
        .bind(&profile.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to save member", profile.email.as_deref(), e))?;

        Ok(Member::from_new(MemberId::from_db(id), member.clone()))
    }

    async fn update(&self, member: &Member, changes: &[MemberChange]) -> Result<(), DomainError> {
        let mut tx = begin(&self.pool).await?;

        update_member_row(&mut tx, member).await?;

        for change in changes {
            sqlx::query(
                r#"
                INSERT INTO member_logs (
                    member_id, member_name, field_name, old_value, new_value, edited_by, edited_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(change.member_id.as_i32())
            .bind(&change.member_name)
            .bind(&change.field_name)
            .bind(&change.old_value)
            .bind(&change.new_value)
            .bind(&change.edited_by)
            .bind(change.edited_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to write member log", e))?;
        }

        commit(tx).await
    }

    async fn renew(&self, member: &Member, renewal: &RenewalRecord) -> Result<(), DomainError> {
        let mut tx = begin(&self.pool).await?;

        update_member_row(&mut tx, member).await?;

        sqlx::query(
            r#"
            INSERT INTO renewal_logs (
                member_id, package, renewal_date, fee_minor_units, fee_currency,
                edited_by, renewed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(renewal.member_id.as_i32())
        .bind(renewal.package.label())
        .bind(renewal.renewal_date)
        .bind(renewal.fee.minor_units())
        .bind(renewal.fee.currency().code())
        .bind(&renewal.edited_by)
        .bind(renewal.renewed_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to write renewal log", e))?;

        commit(tx).await
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> =
            sqlx::query_as(&format!("SELECT {} FROM members WHERE id = $1", MEMBER_COLUMNS))
                .bind(id.as_i32())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to find member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn search(&self, filter: &MemberFilter) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM members
            WHERE ($1::TEXT IS NULL OR name ILIKE $1)
              AND ($2::TEXT IS NULL OR phone ILIKE $2)
              AND ($3::TEXT IS NULL OR email ILIKE $3)
            ORDER BY id DESC
            "#,
            MEMBER_COLUMNS
        ))
        .bind(filter.name.as_deref().map(contains_pattern))
        .bind(filter.phone.as_deref().map(contains_pattern))
        .bind(filter.email.as_deref().map(contains_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to search members", e))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn delete(&self, id: MemberId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete member", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn changes_for(&self, id: MemberId) -> Result<Vec<MemberChange>, DomainError> {
        let rows: Vec<MemberLogRow> = sqlx::query_as(
            r#"
            SELECT member_id, member_name, field_name, old_value, new_value, edited_by, edited_at
            FROM member_logs
            WHERE member_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load member logs", e))?;

        Ok(rows.into_iter().map(MemberChange::from).collect())
    }

    async fn renewals_for(&self, id: MemberId) -> Result<Vec<RenewalRecord>, DomainError> {
        let rows: Vec<RenewalLogRow> = sqlx::query_as(
            r#"
            SELECT member_id, package, renewal_date, fee_minor_units, fee_currency,
                edited_by, renewed_at
            FROM renewal_logs
            WHERE member_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load renewal logs", e))?;

        rows.into_iter().map(RenewalRecord::try_from).collect()
    }
}
