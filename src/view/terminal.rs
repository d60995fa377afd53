use colored::Colorize;
use std::fmt::Write;

use crate::services::dashboard::{Dashboard, Section};
use crate::stats::GroupTable;

pub const LOAD_FAILED: &str = "Failed to load tournament data. Try again later.";

/// Renders every dashboard section as plain terminal text
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    heading(&mut out, "Upcoming matches");
    render_section(&mut out, &dashboard.upcoming, |out, fixture| {
        let _ = writeln!(out, "  {} vs {}  {}", fixture.team_a, fixture.team_b, fixture.date.dimmed());
    });

    heading(&mut out, "Recent results");
    render_section(&mut out, &dashboard.results, |out, result| {
        let score = format!("{} - {}", result.goals_a, result.goals_b);
        let _ = writeln!(out, "  {}  {}  {}", result.team_a, score.bold(), result.team_b);
    });

    heading(&mut out, "Group standings");
    render_section(&mut out, &dashboard.standings, render_group_table);

    heading(&mut out, "Top scorers");
    render_section(&mut out, &dashboard.top_scorers, |out, scorer| {
        let _ = writeln!(out, "  {} ({})  {}", scorer.player, scorer.team, scorer.goals.to_string().bold());
    });

    heading(&mut out, "Fewest goals conceded");
    render_section(&mut out, &dashboard.fewest_conceded, |out, team| {
        let _ = writeln!(out, "  {}  {}", team.team, team.goals.to_string().bold());
    });

    heading(&mut out, "Cards");
    render_section(&mut out, &dashboard.discipline, |out, record| {
        let suspended = if record.suspended {
            format!(" {}", "(Susp.)".red())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "  {}  {} {}  {} {}{}",
            record.player,
            "Y".yellow(),
            record.yellow,
            "R".red(),
            record.red,
            suspended
        );
    });

    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.bold().underline());
}

fn render_section<T, F>(out: &mut String, section: &Section<T>, mut row: F)
where
    F: FnMut(&mut String, &T),
{
    match section {
        Section::Ready { rows } => rows.iter().for_each(|r| row(out, r)),
        Section::Empty { message } => {
            let _ = writeln!(out, "  {}", message.italic());
        }
        Section::Failed { reason } => {
            let _ = writeln!(out, "  {} {}", "Unavailable:".red(), reason);
        }
    }
}

fn render_group_table(out: &mut String, table: &GroupTable) {
    heading(out, &format!("Group {}", table.group));
    let _ = writeln!(
        out,
        "  {:<20} {:>3} {:>4} {:>3} {:>3} {:>4}",
        "Team", "P", "PTS", "GF", "GA", "GD"
    );
    for s in &table.standings {
        let _ = writeln!(
            out,
            "  {:<20} {:>3} {:>4} {:>3} {:>3} {:>4}",
            s.name, s.played, s.points, s.goals_for, s.goals_against, s.goal_difference
        );
    }
}
