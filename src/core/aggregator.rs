//! Session Aggregator: derived views over an in-memory session list.
//!
//! Every function is pure and total: an empty slice yields zeroed totals and
//! empty groups.

use crate::models::game_type::GameType;
use crate::models::session::Session;
use crate::utils::date::{month_key, month_label};
use crate::utils::money::Cents;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub total_profit: Cents,
    pub total_buy_ins: Cents,
    pub count: usize,
    /// Percentage of sessions with a positive profit, in [0, 100].
    pub win_rate: f64,
    /// Mean profit per session, in cents.
    pub average_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStats {
    pub location: String,
    pub profit: Cents,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTypeStats {
    pub game_type: GameType,
    pub stakes: String,
    pub profit: Cents,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub session_id: String,
    pub profit: Cents,
    pub cumulative: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub profit: Cents,
    pub sessions: usize,
}

pub fn totals(sessions: &[Session]) -> Totals {
    let count = sessions.len();
    if count == 0 {
        return Totals::default();
    }

    let total_profit: Cents = sessions.iter().map(Session::profit).sum();
    let total_buy_ins: Cents = sessions.iter().map(|s| s.buy_in).sum();
    let wins = sessions.iter().filter(|s| s.is_win()).count();

    Totals {
        total_profit,
        total_buy_ins,
        count,
        win_rate: wins as f64 / count as f64 * 100.0,
        average_profit: total_profit as f64 / count as f64,
    }
}

/// Sum `(profit, count)` per key, keeping first-seen order so the later
/// stable sort leaves exact ties in input order.
fn group<K, F>(sessions: &[Session], key: F) -> Vec<(K, Cents, usize)>
where
    K: std::hash::Hash + Eq + Clone,
    F: Fn(&Session) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Cents, usize)> = Vec::new();

    for s in sessions {
        let k = key(s);
        match index.get(&k) {
            Some(&i) => {
                groups[i].1 += s.profit();
                groups[i].2 += 1;
            }
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, s.profit(), 1));
            }
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

/// Profit and session count per location, best first.
pub fn group_by_location(sessions: &[Session]) -> Vec<LocationStats> {
    group(sessions, |s| s.location.clone())
        .into_iter()
        .map(|(location, profit, sessions)| LocationStats {
            location,
            profit,
            sessions,
        })
        .collect()
}

/// Profit and session count per (game type, stakes), best first.
pub fn group_by_game_type_and_stakes(sessions: &[Session]) -> Vec<GameTypeStats> {
    group(sessions, |s| (s.game_type, s.stakes.clone()))
        .into_iter()
        .map(|((game_type, stakes), profit, sessions)| GameTypeStats {
            game_type,
            stakes,
            profit,
            sessions,
        })
        .collect()
}

pub fn best_location(sessions: &[Session]) -> Option<LocationStats> {
    group_by_location(sessions).into_iter().next()
}

pub fn best_game_type(sessions: &[Session]) -> Option<GameTypeStats> {
    group_by_game_type_and_stakes(sessions).into_iter().next()
}

/// Sessions in ascending date order with a running profit total.
///
/// The input is in display order (newest first); it is reversed before the
/// stable sort so sessions sharing a date keep their recording order.
pub fn time_series(sessions: &[Session]) -> Vec<TimePoint> {
    let mut ordered: Vec<&Session> = sessions.iter().rev().collect();
    ordered.sort_by_key(|s| s.date);

    let mut cumulative = 0;
    ordered
        .into_iter()
        .map(|s| {
            cumulative += s.profit();
            TimePoint {
                date: s.date,
                session_id: s.id.clone(),
                profit: s.profit(),
                cumulative,
            }
        })
        .collect()
}

/// Profit and session count per calendar month, oldest month first.
pub fn monthly(sessions: &[Session]) -> Vec<MonthStats> {
    let mut months: BTreeMap<(i32, u32), (Cents, usize)> = BTreeMap::new();
    for s in sessions {
        let entry = months.entry(month_key(&s.date)).or_insert((0, 0));
        entry.0 += s.profit();
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (profit, sessions))| MonthStats {
            year,
            month,
            label: month_label(year, month),
            profit,
            sessions,
        })
        .collect()
}

/// Put `sessions` in display order: date descending. The sort is stable, so
/// sessions played on the same day keep their relative order.
pub fn sort_for_display(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Insert `session` ahead of every session on or before its date.
pub fn insert_for_display(sessions: &mut Vec<Session>, session: Session) {
    let at = sessions
        .iter()
        .position(|s| s.date <= session.date)
        .unwrap_or(sessions.len());
    sessions.insert(at, session);
}

/// First `n` sessions of the display order.
pub fn recent(sessions: &[Session], n: usize) -> &[Session] {
    &sessions[..n.min(sessions.len())]
}
