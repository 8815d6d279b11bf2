use clap::Parser;
use profile_cut_planner::input::{DEFAULT_CAPACITY, parse_lengths, validate_capacity};
use profile_cut_planner::profiles;
use profile_cut_planner::render;
use profile_cut_planner::report::{PlanDocument, ProfileGroups, build_plan, timestamp_now};
use profile_cut_planner::types::{Item, ProjectInfo};

#[derive(Parser)]
#[command(
    name = "profile_cut_planner",
    about = "Groups wall cut lengths by profile and packs them into stock bars"
)]
struct Cli {
    /// Stock bar length in mm (1000-12000)
    #[arg(long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    capacity: u32,

    /// Cuts as PROFILE:WALL:LENGTHS, PROFILE being a name or article code
    /// (e.g. "VS1:Wall 1:3000,2000" or "PRG080WCE001:Wall 1:3000")
    #[arg(long = "cut", num_args = 1..)]
    cuts: Vec<String>,

    /// Project name for the report header
    #[arg(long, default_value = "")]
    project: String,

    /// Project number for the report header
    #[arg(long, default_value = "")]
    number: String,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Draw each bar to scale
    #[arg(long)]
    layout: bool,

    /// List known profiles and exit
    #[arg(long)]
    list_profiles: bool,
}

fn parse_capacity(s: &str) -> Result<u32, String> {
    let value = s
        .parse::<i64>()
        .map_err(|_| format!("invalid capacity '{}'", s))?;
    validate_capacity(value).map_err(|e| e.to_string())
}

/// Parses `PROFILE:WALL:LENGTHS`; the wall name may not contain ':'.
fn parse_cut(s: &str, capacity: u32) -> Result<(String, Vec<Item>), String> {
    let parts: Vec<&str> = s.splitn(3, ':').collect();
    if parts.len() != 3 {
        return Err(format!(
            "invalid cut '{}', expected PROFILE:WALL:LENGTHS",
            s
        ));
    }
    let key = parts[0].trim();
    let profile = profiles::resolve(key).ok_or_else(|| format!("unknown profile '{}'", key))?;
    let wall = parts[1].trim();
    if wall.is_empty() {
        return Err(format!("missing wall name in '{}'", s));
    }
    let lengths = parse_lengths(parts[2], capacity).map_err(|e| format!("{} in '{}'", e, s))?;
    Ok((
        profile.to_string(),
        lengths.into_iter().map(|l| Item::new(l, wall)).collect(),
    ))
}

fn main() {
    let cli = Cli::parse();

    if cli.list_profiles {
        for &(code, name) in profiles::PROFILES {
            println!("{:<8} {}", name, code);
        }
        return;
    }

    let mut groups = ProfileGroups::new();
    for cut in &cli.cuts {
        let (profile, items) = parse_cut(cut, cli.capacity).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        groups.extend(&profile, items);
    }

    if groups.is_empty() {
        eprintln!("Error: no cuts given, use --cut PROFILE:WALL:LENGTHS");
        std::process::exit(1);
    }

    let plan = build_plan(&groups, cli.capacity).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let doc = PlanDocument::new(
        ProjectInfo {
            name: cli.project,
            number: cli.number,
        },
        timestamp_now(),
        plan,
    );

    if cli.json {
        match serde_json::to_string_pretty(&doc) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render::render_document(&doc, cli.layout));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cut() {
        let (profile, items) = parse_cut("VS1:Wall 1:3000, 2000", 5880).unwrap();
        assert_eq!(profile, "VS1");
        assert_eq!(
            items,
            vec![Item::new(3000, "Wall 1"), Item::new(2000, "Wall 1")]
        );
    }

    #[test]
    fn test_parse_cut_by_article_code() {
        let (profile, items) = parse_cut("PRK070DAP100:Wall 2:1500", 5880).unwrap();
        assert_eq!(profile, "RPW");
        assert_eq!(items, vec![Item::new(1500, "Wall 2")]);
    }

    #[test]
    fn test_parse_cut_errors() {
        assert!(parse_cut("VS1:3000", 5880).is_err());
        assert!(parse_cut("NOPE:Wall 1:3000", 5880).is_err());
        assert!(parse_cut("PRG000XXX000:Wall 1:3000", 5880).is_err());
        assert!(parse_cut("VS1: :3000", 5880).is_err());
        assert!(parse_cut("VS1:Wall 1:6000", 5880).is_err());
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("6000").unwrap(), 6000);
        assert!(parse_capacity("500").is_err());
        assert!(parse_capacity("six").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "profile_cut_planner",
            "--capacity",
            "5000",
            "--cut",
            "VS1:Wall 1:1000,1000",
            "VS3:Wall 2:2000",
            "--layout",
        ])
        .unwrap();
        assert_eq!(cli.capacity, 5000);
        assert_eq!(cli.cuts.len(), 2);
        assert!(cli.layout);
        assert!(!cli.json);
    }
}
