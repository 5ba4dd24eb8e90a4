//! Self-hosted backend stored in its own SQLite file.
//!
//! Mirrors the behaviour of the hosted service: email/password accounts,
//! bearer tokens checked on every data call, a profile row created with the
//! account and per-user sessions.

use super::{NewSessionRow, ProfileRow, RemoteGateway, SessionRow};
use crate::db::initialize::open_backend;
use crate::db::migrate::{Schema, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::identity::UserIdentity;
use chrono::Local;
use rusqlite::{OptionalExtension, Row, params};
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub struct SqliteGateway {
    pool: DbPool,
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn map_session_row(row: &Row) -> rusqlite::Result<SessionRow> {
    Ok(SessionRow {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: row.get("date")?,
        game_type: row.get("game_type")?,
        stakes: row.get("stakes")?,
        location: row.get("location")?,
        buy_in: row.get("buy_in")?,
        cash_out: row.get("cash_out")?,
        profit: row.get("profit")?,
        notes: row.get("notes")?,
    })
}

impl SqliteGateway {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: open_backend(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn, Schema::Backend)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn issue_token(&self, user_id: &str) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        self.pool.conn.execute(
            "INSERT INTO auth_tokens (token, user_id, created_at) VALUES (?1, ?2, ?3)",
            params![token, user_id, Local::now().to_rfc3339()],
        )?;
        Ok(token)
    }

    /// Row-level security: the bearer token must belong to `user`.
    fn authorize(&self, user: &UserIdentity) -> AppResult<()> {
        let token = user
            .access_token
            .as_deref()
            .ok_or_else(|| AppError::Gateway("not authenticated".into()))?;

        let owner: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT user_id FROM auth_tokens WHERE token = ?1",
                [token],
                |row| row.get(0),
            )
            .optional()?;

        match owner {
            Some(id) if id == user.id => Ok(()),
            _ => Err(AppError::Gateway("invalid or expired session token".into())),
        }
    }
}

impl RemoteGateway for SqliteGateway {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        let email = email.trim().to_lowercase();

        let exists: Option<String> = self
            .pool
            .conn
            .query_row("SELECT id FROM users WHERE email = ?1", [&email], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_some() {
            return Err(AppError::Gateway("User already registered".into()));
        }

        let id = Uuid::new_v4().to_string();
        let salt = Uuid::new_v4().simple().to_string();
        let now = Local::now().to_rfc3339();

        let tx = self.pool.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO users (id, email, password_salt, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, email, salt, hash_password(&salt, password), now],
        )?;
        // The hosted service creates the profile row on sign-up, with no bankroll yet.
        tx.execute(
            "INSERT INTO profiles (id, starting_bankroll, bankroll_goal, updated_at)
             VALUES (?1, NULL, NULL, ?2)",
            params![id, now],
        )?;
        tx.commit()?;

        let token = self.issue_token(&id)?;
        log::info!("backend: registered {email}");

        Ok(UserIdentity::new(id, email, Some(token)))
    }

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        let email = email.trim().to_lowercase();

        let user: Option<(String, String, String)> = self
            .pool
            .conn
            .query_row(
                "SELECT id, password_salt, password_hash FROM users WHERE email = ?1",
                [&email],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        match user {
            Some((id, salt, hash)) if hash_password(&salt, password) == hash => {
                let token = self.issue_token(&id)?;
                Ok(UserIdentity::new(id, email, Some(token)))
            }
            _ => Err(AppError::Gateway("Invalid login credentials".into())),
        }
    }

    fn sign_out(&self, user: &UserIdentity) -> AppResult<()> {
        if let Some(token) = &user.access_token {
            self.pool
                .conn
                .execute("DELETE FROM auth_tokens WHERE token = ?1", [token])?;
        }
        Ok(())
    }

    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow> {
        self.authorize(user)?;
        if row.user_id != user.id {
            return Err(AppError::Gateway(
                "new row violates row-level security policy for table \"sessions\"".into(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        self.pool.conn.execute(
            "INSERT INTO sessions
                (id, user_id, date, game_type, stakes, location, buy_in, cash_out, profit, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                id,
                row.user_id,
                row.date,
                row.game_type,
                row.stakes,
                row.location,
                row.buy_in,
                row.cash_out,
                row.profit,
                row.notes,
                Local::now().to_rfc3339(),
            ],
        )?;

        let stored = self.pool.conn.query_row(
            "SELECT * FROM sessions WHERE id = ?1",
            [&id],
            map_session_row,
        )?;
        Ok(stored)
    }

    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>> {
        self.authorize(user)?;

        let mut stmt = self.pool.conn.prepare(
            "SELECT * FROM sessions
             WHERE user_id = ?1
             ORDER BY date DESC, created_at DESC",
        )?;
        let rows = stmt.query_map([&user.id], map_session_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>> {
        self.authorize(user)?;

        let profile = self
            .pool
            .conn
            .query_row(
                "SELECT starting_bankroll, bankroll_goal FROM profiles WHERE id = ?1",
                [&user.id],
                |row| {
                    Ok(ProfileRow {
                        starting_bankroll: row.get(0)?,
                        bankroll_goal: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()> {
        self.authorize(user)?;

        // `update ... where id = user`: a missing row is left missing.
        self.pool.conn.execute(
            "UPDATE profiles
             SET starting_bankroll = ?1, bankroll_goal = ?2, updated_at = ?3
             WHERE id = ?4",
            params![
                profile.starting_bankroll,
                profile.bankroll_goal,
                Local::now().to_rfc3339(),
                user.id
            ],
        )?;
        Ok(())
    }
}
