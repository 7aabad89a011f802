use std::error::Error;

use clap::{Parser, Subcommand};
use saju_base::{FiveElement, GanzhiPair, TenGod};
use saju_calendar::{
    approximate_lunar_day, day_ganzhi, four_pillars_for_date, month_ganzhi, year_ganzhi,
};
use saju_relations::{empty_day, nobility_star, robust_day, romance_star, travel_star};
use saju_score::{
    CompatProfile, EventType, MonthContext, ScoringContext, ScoringResult, TenGodAffinity,
    compatibility, score_month,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "saju", about = "Saju favorability CLI")]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Yearly ganzhi for a CE year
    Year {
        year: i32,
    },
    /// Monthly ganzhi (simplified table mode)
    Month {
        year: i32,
        month: u32,
    },
    /// Daily ganzhi for a Gregorian date
    Day {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Year, month, and day pillars for a date
    Pillars {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Approximate lunar day (1-30) and the no-spirits flag
    LunarDay {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Shinsal flags of a candidate date against a birth date
    Shinsal {
        /// Birth date: year, month, day
        birth_year: i32,
        birth_month: u32,
        birth_day: u32,
        /// Candidate date: year, month, day
        year: i32,
        month: u32,
        day: u32,
    },
    /// Score a candidate month for an event type
    Score {
        /// Birth date: year, month, day
        birth_year: i32,
        birth_month: u32,
        birth_day: u32,
        /// Event type: marriage, career, investment, relocation, study, health
        event: String,
        /// Candidate year and month
        year: i32,
        month: u32,
        /// Beneficial elements (repeatable): wood, fire, earth, metal, water
        #[arg(long = "beneficial")]
        beneficial: Vec<String>,
        /// Detrimental elements (repeatable)
        #[arg(long = "detrimental")]
        detrimental: Vec<String>,
    },
    /// Compatibility between two birth dates
    Compat {
        a_year: i32,
        a_month: u32,
        a_day: u32,
        b_year: i32,
        b_month: u32,
        b_day: u32,
    },
}

fn pair_json(p: GanzhiPair) -> serde_json::Value {
    json!({
        "stem": p.stem.name(),
        "branch": p.branch.name(),
        "hanja": p.hanja(),
        "cycle_index": p.cycle_index(),
    })
}

fn print_pair(label: &str, p: GanzhiPair, as_json: bool) {
    if as_json {
        println!("{}", json!({ label: pair_json(p) }));
    } else {
        println!("{label}: {} ({})", p.name(), p.hanja());
    }
}

fn parse_elements(names: &[String]) -> Result<Vec<FiveElement>, Box<dyn Error>> {
    let mut elements = Vec::with_capacity(names.len());
    for name in names {
        let e = FiveElement::from_name(name).ok_or_else(|| format!("unknown element: {name}"))?;
        elements.push(e);
    }
    Ok(elements)
}

fn print_result(title: &str, r: &ScoringResult, as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({
                "score": r.score,
                "reasons": r.reasons,
                "cautions": r.cautions,
            })
        );
        return;
    }
    println!("{title}: {}", r.score);
    for reason in &r.reasons {
        println!("  + {reason}");
    }
    for caution in &r.cautions {
        println!("  - {caution}");
    }
}

/// Default inter-person affinity used by the compat command. Library
/// callers supply their own table; this one favors the officer/wealth
/// axes and penalizes the confrontational labels.
fn cli_affinity() -> TenGodAffinity {
    TenGodAffinity::from_entries(&[
        (TenGod::DirectOfficer, 8),
        (TenGod::DirectWealth, 8),
        (TenGod::DirectResource, 6),
        (TenGod::EatingGod, 4),
        (TenGod::Friend, 3),
        (TenGod::SeventhKiller, -6),
        (TenGod::HurtingOfficer, -4),
        (TenGod::RobWealth, -4),
    ])
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Year { year } => {
            print_pair("year", year_ganzhi(year), cli.json);
        }
        Commands::Month { year, month } => {
            print_pair("month", month_ganzhi(year, month)?, cli.json);
        }
        Commands::Day { year, month, day } => {
            print_pair("day", day_ganzhi(year, month, day)?, cli.json);
        }
        Commands::Pillars { year, month, day } => {
            let p = four_pillars_for_date(year, month, day)?;
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "year": pair_json(p.year),
                        "month": pair_json(p.month),
                        "day": pair_json(p.day),
                        "day_master": p.day_master().name(),
                    })
                );
            } else {
                print_pair("year", p.year, false);
                print_pair("month", p.month, false);
                print_pair("day", p.day, false);
                println!("day master: {}", p.day_master().name());
            }
        }
        Commands::LunarDay { year, month, day } => {
            let lunar = approximate_lunar_day(year, month, day)?;
            if cli.json {
                println!(
                    "{}",
                    json!({ "lunar_day": lunar, "no_spirits": empty_day(lunar) })
                );
            } else {
                println!("approximate lunar day: {lunar}");
                if empty_day(lunar) {
                    println!("no-spirits day");
                }
            }
        }
        Commands::Shinsal {
            birth_year,
            birth_month,
            birth_day,
            year,
            month,
            day,
        } => {
            let birth = day_ganzhi(birth_year, birth_month, birth_day)?;
            let birth_year_branch = year_ganzhi(birth_year).branch;
            let candidate = day_ganzhi(year, month, day)?;
            let flags = [
                ("nobility", nobility_star(birth.stem, candidate.branch)),
                ("travel", travel_star(birth_year_branch, candidate.branch)),
                ("romance", romance_star(birth_year_branch, candidate.branch)),
                ("robust", robust_day(birth.stem, candidate.branch)),
            ];
            if cli.json {
                let map: serde_json::Map<String, serde_json::Value> = flags
                    .iter()
                    .map(|(k, v)| (k.to_string(), json!(v)))
                    .collect();
                println!("{}", serde_json::Value::Object(map));
            } else {
                for (name, hit) in flags {
                    println!("{name}: {}", if hit { "yes" } else { "no" });
                }
            }
        }
        Commands::Score {
            birth_year,
            birth_month,
            birth_day,
            event,
            year,
            month,
            beneficial,
            detrimental,
        } => {
            let event = EventType::from_name(&event)
                .ok_or_else(|| format!("unknown event type: {event}"))?;
            let day_master = day_ganzhi(birth_year, birth_month, birth_day)?.stem;
            let month_pair = month_ganzhi(year, month)?;
            let mut ctx =
                ScoringContext::new(day_master, event, MonthContext::from_pair(month_pair));
            ctx.current_age = u32::try_from(year - birth_year).ok();
            ctx.beneficial_elements = parse_elements(&beneficial)?;
            ctx.detrimental_elements = parse_elements(&detrimental)?;
            let r = score_month(&ctx);
            print_result(&format!("{} score for {year}-{month:02}", event.name()), &r, cli.json);
        }
        Commands::Compat {
            a_year,
            a_month,
            a_day,
            b_year,
            b_month,
            b_day,
        } => {
            let a = CompatProfile::from_birth_date(a_year, a_month, a_day)?;
            let b = CompatProfile::from_birth_date(b_year, b_month, b_day)?;
            let r = compatibility(&a, &b, &cli_affinity());
            print_result("compatibility", &r, cli.json);
        }
    }

    Ok(())
}
