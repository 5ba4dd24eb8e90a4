use crate::cli::commands::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_profit;
use crate::utils::formatting::percent;
use crate::utils::money::format_amount;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let show_timeline = matches!(cmd, Commands::Analytics { timeline: true });

    let coordinator = open_loaded(cfg)?;
    let sessions = coordinator.sessions();

    if sessions.is_empty() {
        info("No sessions recorded yet: nothing to analyze.");
        return Ok(());
    }

    let t = aggregator::totals(sessions);
    header("Overview");
    println!("Total profit    : {}", colorize_profit(t.total_profit));
    println!("Total buy-ins   : {}", format_amount(t.total_buy_ins));
    println!("Sessions        : {}", t.count);
    println!("Win rate        : {}", percent(t.win_rate));
    println!(
        "Average profit  : {}",
        colorize_profit(t.average_profit.round() as i64)
    );

    if let Some(best) = aggregator::best_location(sessions) {
        println!(
            "Best location   : {} ({})",
            best.location,
            colorize_profit(best.profit)
        );
    }
    if let Some(best) = aggregator::best_game_type(sessions) {
        println!(
            "Best game       : {} {} ({})",
            best.game_type.label(),
            best.stakes,
            colorize_profit(best.profit)
        );
    }

    let locations = aggregator::group_by_location(sessions);
    if locations.len() > 1 {
        header("By location");
        let mut table = Table::new(vec![
            Column::left("Location"),
            Column::right("Sessions"),
            Column::right("Profit"),
        ]);
        for l in &locations {
            table.add_row(vec![
                l.location.clone(),
                l.sessions.to_string(),
                colorize_profit(l.profit),
            ]);
        }
        print!("{}", table.render());
    }

    let games = aggregator::group_by_game_type_and_stakes(sessions);
    if games.len() > 1 {
        header("By game");
        let mut table = Table::new(vec![
            Column::left("Game"),
            Column::left("Stakes"),
            Column::right("Sessions"),
            Column::right("Profit"),
        ]);
        for g in &games {
            table.add_row(vec![
                g.game_type.label().to_string(),
                g.stakes.clone(),
                g.sessions.to_string(),
                colorize_profit(g.profit),
            ]);
        }
        print!("{}", table.render());
    }

    header("Monthly");
    let mut table = Table::new(vec![
        Column::left("Month"),
        Column::right("Sessions"),
        Column::right("Profit"),
    ]);
    for m in aggregator::monthly(sessions) {
        table.add_row(vec![m.label, m.sessions.to_string(), colorize_profit(m.profit)]);
    }
    print!("{}", table.render());

    if show_timeline {
        header("Timeline");
        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::right("Profit"),
            Column::right("Cumulative"),
        ]);
        for p in aggregator::time_series(sessions) {
            table.add_row(vec![
                p.date.format("%Y-%m-%d").to_string(),
                colorize_profit(p.profit),
                colorize_profit(p.cumulative),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
