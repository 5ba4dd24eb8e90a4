//! Supabase backend: GoTrue auth (`/auth/v1`) and PostgREST tables (`/rest/v1`).

use super::wire::{
    self, AuthResponse, PasswordGrant, RefreshGrant, WireNewSession, WireProfile, WireSession,
};
use super::{NewSessionRow, ProfileRow, RemoteGateway, SessionRow};
use crate::errors::{AppError, AppResult};
use crate::models::identity::UserIdentity;
use chrono::Utc;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct SupabaseGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseGateway {
    pub fn new(base_url: &str, api_key: &str) -> AppResult<Self> {
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return Err(AppError::Config(
                "backend 'supabase' requires supabase_url and supabase_key".into(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(20)).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, user: &UserIdentity) -> AppResult<String> {
        user.access_token
            .as_ref()
            .map(|t| format!("Bearer {t}"))
            .ok_or_else(|| AppError::Gateway("not authenticated".into()))
    }

    fn authed(&self, req: RequestBuilder, user: &UserIdentity) -> AppResult<RequestBuilder> {
        Ok(req
            .header("apikey", &self.api_key)
            .header("Authorization", self.bearer(user)?))
    }

    fn exchange(&self, req: RequestBuilder) -> AppResult<(u16, String)> {
        let response = req.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("supabase: {status} {body}");
        Ok((status, body))
    }

    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> AppResult<Option<T>> {
        let (status, body) = self.exchange(req)?;
        wire::decode(status, &body)
    }

    fn auth_call(
        &self,
        path: &str,
        grant: &impl Serialize,
        email: &str,
    ) -> AppResult<UserIdentity> {
        let req = self
            .client
            .post(self.url(path))
            .header("apikey", &self.api_key)
            .json(grant);

        let auth: AuthResponse = self
            .send(req)?
            .ok_or_else(|| AppError::Gateway("empty auth response".into()))?;
        auth.into_identity(email, Utc::now().timestamp())
    }
}

impl RemoteGateway for SupabaseGateway {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.auth_call("/auth/v1/signup", &PasswordGrant { email, password }, email)
    }

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.auth_call(
            "/auth/v1/token?grant_type=password",
            &PasswordGrant { email, password },
            email,
        )
    }

    fn refresh_session(&self, user: &UserIdentity) -> AppResult<Option<UserIdentity>> {
        if !user.needs_refresh(Utc::now().timestamp()) {
            return Ok(None);
        }
        let refresh_token = user.refresh_token.as_deref().ok_or_else(|| {
            AppError::Gateway("session expired: sign out and sign in again".into())
        })?;

        log::info!("supabase: refreshing session for {}", user.email);
        let fresh = self.auth_call(
            "/auth/v1/token?grant_type=refresh_token",
            &RefreshGrant { refresh_token },
            &user.email,
        )?;
        Ok(Some(fresh))
    }

    /// A token the server already rejects counts as signed out.
    fn sign_out(&self, user: &UserIdentity) -> AppResult<()> {
        if user.access_token.is_none() {
            return Ok(());
        }
        let req = self.authed(self.client.post(self.url("/auth/v1/logout")), user)?;
        let (status, body) = self.exchange(req)?;
        if wire::is_auth_rejection(status) {
            log::debug!("supabase: logout answered {status}, token already invalid");
            return Ok(());
        }
        wire::decode::<serde_json::Value>(status, &body)?;
        Ok(())
    }

    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow> {
        let req = self
            .authed(self.client.post(self.url("/rest/v1/sessions")), user)?
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(&WireNewSession::from(row));

        let stored: WireSession = self
            .send(req)?
            .ok_or_else(|| AppError::Gateway("insert returned no row".into()))?;
        Ok(stored.into())
    }

    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>> {
        let req = self.authed(
            self.client
                .get(self.url("/rest/v1/sessions?select=*&order=date.desc")),
            user,
        )?;

        let rows: Vec<WireSession> = self.send(req)?.unwrap_or_default();
        Ok(rows.into_iter().map(SessionRow::from).collect())
    }

    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>> {
        let path = format!(
            "/rest/v1/profiles?select=starting_bankroll,bankroll_goal&id=eq.{}",
            user.id
        );
        let req = self
            .authed(self.client.get(self.url(&path)), user)?
            .header("Accept", "application/vnd.pgrst.object+json");

        let profile: Option<WireProfile> = self.send(req)?;
        Ok(profile.map(ProfileRow::from))
    }

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()> {
        let path = format!("/rest/v1/profiles?id=eq.{}", user.id);
        let req = self
            .authed(self.client.patch(self.url(&path)), user)?
            .json(&WireProfile::from(profile));
        self.send::<serde_json::Value>(req)?;
        Ok(())
    }
}
