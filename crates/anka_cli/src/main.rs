use anka_rs::{
    AddressNumber, BreakdownMode, BreakdownOptions, CalendarDate, CalendarSystem, CycleStage,
    DateDigits, NameBreakdown, ProfileConfig, ProfileRequest, Script, address_number,
    balance_number, birthday_number, breakdown_name, bridge_number, challenge_numbers,
    compute_profile, cornerstone, destiny_number, detect_script, essence_cycle, health_profile,
    infer_locale, life_cycles, lucky_number, maturity_number, personal_month_matrix,
    personal_month_number, personal_year_number, personal_year_series, pinnacle_cycles, reduce,
    telephone_number, transit_numbers,
};
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "anka", about = "Numerology engine CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log level or filter spec (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number to a single digit or master number
    Reduce {
        value: u64,
    },
    /// Detect the script of a text
    Script {
        text: String,
    },
    /// Valued letters of a name and their reduced total
    Name {
        text: String,
        /// Letters to count: all, vowel or consonant
        #[arg(long, default_value = "all")]
        mode: String,
        /// Force a script: latin or rtl
        #[arg(long)]
        script: Option<String>,
    },
    /// Suggested interpretation locale for a name
    Locale {
        name: String,
    },
    /// Convert a date to Gregorian
    Convert {
        /// Date (YYYY-MM-DD) in the given calendar
        date: String,
        /// Calendar: gregorian, solarHijri or hijri
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Destiny number of a birth date
    Destiny {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Birthday number of a birth date
    Birthday {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Personal year for a target year
    PersonalYear {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// Target Gregorian year
        #[arg(long)]
        year: i32,
    },
    /// Personal month within a personal year
    PersonalMonth {
        /// Personal-year number
        #[arg(long)]
        personal_year: u32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
    },
    /// Personal years for consecutive years
    Series {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// First Gregorian year
        #[arg(long)]
        start: i32,
        #[arg(long, default_value = "9")]
        years: usize,
    },
    /// Personal-month matrix for consecutive years
    Months {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// First Gregorian year
        #[arg(long)]
        start: i32,
        #[arg(long, default_value = "9")]
        years: usize,
        /// Months per year (1-12)
        #[arg(long, default_value = "9")]
        months: u32,
    },
    /// Maturity number from name and destiny numbers
    Maturity {
        name: u32,
        destiny: u32,
    },
    /// First valued letter of a name
    Cornerstone {
        name: String,
    },
    /// Balance number from the first four consonants
    Balance {
        name: String,
    },
    /// Bridge between two numbers
    Bridge {
        a: u32,
        b: u32,
    },
    /// Address number (digits if present, else letters)
    Address {
        text: String,
    },
    /// Lucky number of a birth date
    Lucky {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Health profile from name, personal-year and birthday numbers
    Health {
        #[arg(long)]
        name: Option<u32>,
        #[arg(long)]
        personal_year: Option<u32>,
        #[arg(long)]
        birthday: Option<u32>,
    },
    /// Physical, mental and spiritual transits
    Transits {
        #[arg(long)]
        name: u32,
        #[arg(long)]
        vowel: u32,
        #[arg(long)]
        consonant: u32,
        #[arg(long)]
        personal_year: u32,
    },
    /// Essence cycle of a name
    Essence {
        name: String,
        /// First Gregorian year
        #[arg(long)]
        start: i32,
        #[arg(long, default_value = "13")]
        length: usize,
    },
    /// Four pinnacles of a birth date
    Pinnacles {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Three life cycles of a birth date
    LifeCycles {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Four challenges of a birth date
    Challenges {
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Telephone number
    Telephone {
        text: String,
    },
    /// Full profile
    Profile {
        /// Birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// Target Gregorian year
        #[arg(long)]
        year: i32,
        /// Name in use today
        #[arg(long)]
        current_name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        telephone: Option<String>,
        #[arg(long, default_value = "9")]
        series_years: usize,
        #[arg(long, default_value = "9")]
        month_columns: u32,
        #[arg(long, default_value = "13")]
        essence_length: usize,
        #[arg(long, default_value = "4")]
        essence_lead_years: u32,
    },
}

fn init_logging(level: &str) -> LoggerHandle {
    Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .unwrap_or_else(|e| {
            eprintln!("Failed to start logger: {e}");
            std::process::exit(1);
        })
}

fn parse_date(s: &str) -> Result<(i32, i32, i32), String> {
    // "YYYY-MM-DD"; a leading '-' marks a negative year.
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: i32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: i32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((sign * year, month, day))
}

fn require_date(date: &str, calendar: &str) -> CalendarDate {
    let system: CalendarSystem = calendar.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let (year, month, day) = parse_date(date).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    });
    CalendarDate::new(system, year, month, day)
}

fn parse_mode(s: &str) -> Result<BreakdownMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Ok(BreakdownMode::All),
        "vowel" | "vowels" => Ok(BreakdownMode::Vowel),
        "consonant" | "consonants" => Ok(BreakdownMode::Consonant),
        _ => Err(format!("unknown mode: {s} (use all, vowel or consonant)")),
    }
}

fn parse_script(s: &str) -> Result<Script, String> {
    match s.to_ascii_lowercase().as_str() {
        "latin" => Ok(Script::Latin),
        "rtl" | "abjad" => Ok(Script::RightToLeftAbjad),
        _ => Err(format!("unknown script: {s} (use latin or rtl)")),
    }
}

fn require<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn format_steps(steps: &[u64]) -> String {
    steps
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

fn format_age_band(stage: &CycleStage) -> String {
    match stage.end_age {
        Some(end) => format!("{}-{}", stage.start_age, end),
        None => format!("{}+", stage.start_age),
    }
}

fn print_date_digits(label: &str, d: &DateDigits) {
    println!(
        "{label}: {} (from {}; {} = {}; {})",
        d.number,
        d.calendar_used,
        format_digits(&d.digits),
        d.total,
        format_steps(&d.steps)
    );
}

fn print_breakdown(label: &str, b: &NameBreakdown) {
    let letters: Vec<String> = b
        .tokens
        .iter()
        .map(|t| format!("{}={}", t.label, t.value))
        .collect();
    println!(
        "{label}: {} ({}; total {}; {})",
        b.number,
        b.script.tag(),
        b.total,
        format_steps(&b.steps)
    );
    if !letters.is_empty() {
        println!("  letters: {}", letters.join(" "));
    }
    if !b.ignored.is_empty() {
        let ignored: String = b.ignored.iter().collect();
        println!("  ignored: {ignored}");
    }
}

fn print_stages(label: &str, stages: &[CycleStage]) {
    println!("{label}:");
    for s in stages {
        println!(
            "  {} ages {:<6} {:>2}  ({})",
            s.stage,
            format_age_band(s),
            s.number,
            format_steps(&s.steps)
        );
    }
}

fn print_absent(label: &str) {
    println!("{label}: none");
}

fn main() {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level);
    let json = cli.json;

    match cli.command {
        Commands::Reduce { value } => {
            let r = reduce(value);
            if json {
                print_json(&r);
            } else {
                println!("{} ({})", r.value, format_steps(&r.steps));
            }
        }

        Commands::Script { text } => {
            let script = detect_script(&text);
            if json {
                print_json(&script);
            } else {
                println!("{}", script.tag());
            }
        }

        Commands::Name { text, mode, script } => {
            let mode = require(parse_mode(&mode));
            let script = script.map(|s| require(parse_script(&s)));
            let b = breakdown_name(&text, BreakdownOptions { mode, script });
            if json {
                print_json(&b);
            } else {
                print_breakdown("Name", &b);
            }
        }

        Commands::Locale { name } => {
            let locale = infer_locale(&name);
            if json {
                print_json(&locale);
            } else {
                println!("{}", locale.tag());
            }
        }

        Commands::Convert { date, calendar } => {
            let d = require_date(&date, &calendar);
            let g = require(d.to_gregorian());
            if json {
                print_json(&g);
            } else {
                println!("{g}");
            }
        }

        Commands::Destiny { date, calendar } => {
            let d = require(destiny_number(&require_date(&date, &calendar)));
            if json {
                print_json(&d);
            } else {
                print_date_digits("Destiny", &d);
            }
        }

        Commands::Birthday { date, calendar } => {
            let d = require(birthday_number(&require_date(&date, &calendar)));
            if json {
                print_json(&d);
            } else {
                print_date_digits("Birthday", &d);
            }
        }

        Commands::PersonalYear {
            date,
            calendar,
            year,
        } => {
            let d = require(personal_year_number(&require_date(&date, &calendar), year));
            if json {
                print_json(&d);
            } else {
                print_date_digits(&format!("Personal year {year}"), &d);
            }
        }

        Commands::PersonalMonth {
            personal_year,
            month,
        } => {
            let m = personal_month_number(personal_year, month);
            if json {
                print_json(&m);
            } else {
                println!("{} ({})", m.number, format_steps(&m.steps));
            }
        }

        Commands::Series {
            date,
            calendar,
            start,
            years,
        } => {
            let series = require(personal_year_series(
                &require_date(&date, &calendar),
                start,
                years,
            ));
            if json {
                print_json(&series);
            } else {
                for e in &series {
                    println!(
                        "{}: {:>2}  ({})",
                        e.year,
                        e.personal_year.number,
                        format_steps(&e.personal_year.steps)
                    );
                }
            }
        }

        Commands::Months {
            date,
            calendar,
            start,
            years,
            months,
        } => {
            let matrix = require(personal_month_matrix(
                &require_date(&date, &calendar),
                start,
                years,
                months,
            ));
            if json {
                print_json(&matrix);
            } else {
                for row in &matrix {
                    let cells: Vec<String> =
                        row.months.iter().map(|m| format!("{:>2}", m.number)).collect();
                    println!("{} (PY {:>2}): {}", row.year, row.personal_year, cells.join(" "));
                }
            }
        }

        Commands::Maturity { name, destiny } => {
            let m = maturity_number(name, destiny);
            if json {
                print_json(&m);
            } else {
                println!("Maturity: {} ({})", m.number, format_steps(&m.steps));
            }
        }

        Commands::Cornerstone { name } => {
            let c = cornerstone(&name);
            if json {
                print_json(&c);
            } else {
                match c {
                    Some(c) => println!("Cornerstone: {} ({}={})", c.number, c.letter, c.value),
                    None => print_absent("Cornerstone"),
                }
            }
        }

        Commands::Balance { name } => {
            let b = balance_number(&name);
            if json {
                print_json(&b);
            } else {
                match b {
                    Some(b) => {
                        let letters: Vec<String> = b
                            .letters
                            .iter()
                            .map(|l| format!("{}={}", l.letter, l.value))
                            .collect();
                        println!(
                            "Balance: {} ({}; {})",
                            b.number,
                            letters.join(" "),
                            format_steps(&b.steps)
                        );
                    }
                    None => print_absent("Balance"),
                }
            }
        }

        Commands::Bridge { a, b } => {
            let r = bridge_number(a, b);
            if json {
                print_json(&r);
            } else {
                println!("Bridge: {} (|{a}-{b}| = {})", r.number, r.difference);
            }
        }

        Commands::Address { text } => {
            let a = address_number(&text);
            if json {
                print_json(&a);
            } else {
                match a {
                    Some(AddressNumber::Digits {
                        digits,
                        total,
                        number,
                        steps,
                    }) => println!(
                        "Address: {number} (digits {} = {total}; {})",
                        format_digits(&digits),
                        format_steps(&steps)
                    ),
                    Some(AddressNumber::Letters {
                        tokens,
                        total,
                        number,
                        steps,
                    }) => println!(
                        "Address: {number} ({} letters = {total}; {})",
                        tokens.len(),
                        format_steps(&steps)
                    ),
                    None => print_absent("Address"),
                }
            }
        }

        Commands::Lucky { date, calendar } => {
            let l = require(lucky_number(&require_date(&date, &calendar)));
            if json {
                print_json(&l);
            } else {
                println!(
                    "Lucky: {} (from {}; {})",
                    l.number,
                    l.calendar_used,
                    format_steps(&l.steps)
                );
            }
        }

        Commands::Health {
            name,
            personal_year,
            birthday,
        } => {
            let h = health_profile(name, personal_year, birthday);
            if json {
                print_json(&h);
            } else {
                match h {
                    Some(h) => println!("Health: {} ({})", h.number, format_steps(&h.steps)),
                    None => print_absent("Health"),
                }
            }
        }

        Commands::Transits {
            name,
            vowel,
            consonant,
            personal_year,
        } => {
            let t = transit_numbers(name, vowel, consonant, personal_year);
            if json {
                print_json(&t);
            } else {
                println!("Physical:  {}", t.physical.number);
                println!("Mental:    {}", t.mental.number);
                println!("Spiritual: {}", t.spiritual.number);
            }
        }

        Commands::Essence {
            name,
            start,
            length,
        } => {
            let b = breakdown_name(&name, BreakdownOptions::default());
            let cycle = essence_cycle(&b, start, length);
            if json {
                print_json(&cycle);
            } else if cycle.is_empty() {
                print_absent("Essence");
            } else {
                for e in &cycle {
                    println!("{}: {:>2}  ({})", e.year, e.number, format_steps(&e.steps));
                }
            }
        }

        Commands::Pinnacles { date, calendar } => {
            let stages = require(pinnacle_cycles(&require_date(&date, &calendar)));
            if json {
                print_json(&stages);
            } else {
                print_stages("Pinnacles", &stages);
            }
        }

        Commands::LifeCycles { date, calendar } => {
            let stages = require(life_cycles(&require_date(&date, &calendar)));
            if json {
                print_json(&stages);
            } else {
                print_stages("Life cycles", &stages);
            }
        }

        Commands::Challenges { date, calendar } => {
            let stages = require(challenge_numbers(&require_date(&date, &calendar)));
            if json {
                print_json(&stages);
            } else {
                print_stages("Challenges", &stages);
            }
        }

        Commands::Telephone { text } => {
            let t = telephone_number(&text);
            if json {
                print_json(&t);
            } else {
                match t {
                    Some(t) => println!(
                        "Telephone: {} ({} = {}; {})",
                        t.number,
                        format_digits(&t.digits),
                        t.total,
                        format_steps(&t.steps)
                    ),
                    None => print_absent("Telephone"),
                }
            }
        }

        Commands::Profile {
            name,
            date,
            calendar,
            year,
            current_name,
            address,
            telephone,
            series_years,
            month_columns,
            essence_length,
            essence_lead_years,
        } => {
            let config = ProfileConfig {
                series_years,
                month_columns,
                essence_length,
                essence_lead_years,
            };
            let request = ProfileRequest {
                birth_name: name,
                current_name,
                birth: require_date(&date, &calendar),
                target_year: year,
                address,
                telephone,
            };
            debug!("event=cli_profile calendar={calendar} target_year={year}");
            let p = require(compute_profile(&request, &config));
            if json {
                print_json(&p);
                return;
            }

            println!("Locale: {}", p.locale.tag());
            print_breakdown("Name", &p.core.name.name);
            print_breakdown("Vowel", &p.core.name.vowel);
            print_breakdown("Consonant", &p.core.name.consonant);
            print_date_digits("Destiny", &p.core.destiny);
            print_date_digits("Birthday", &p.core.birthday);
            println!(
                "Maturity: {} ({})",
                p.core.maturity.number,
                format_steps(&p.core.maturity.steps)
            );
            print_date_digits(&format!("Personal year {year}"), &p.core.personal_year);

            if let Some(current) = &p.current {
                print_breakdown("Current name", &current.name);
                print_breakdown("Current vowel", &current.vowel);
            }

            match &p.bridges.cornerstone {
                Some(c) => println!("Cornerstone: {} ({})", c.number, c.letter),
                None => print_absent("Cornerstone"),
            }
            println!("Life bridge: {}", p.bridges.life_bridge.number);
            println!("Soul bridge: {}", p.bridges.soul_bridge.number);
            match &p.bridges.balance {
                Some(b) => println!("Balance: {}", b.number),
                None => print_absent("Balance"),
            }

            let t = &p.influences.transits;
            println!(
                "Transits: physical {} / mental {} / spiritual {}",
                t.physical.number, t.mental.number, t.spiritual.number
            );
            match &p.influences.health {
                Some(h) => println!("Health: {}", h.number),
                None => print_absent("Health"),
            }

            match &p.practical.address {
                Some(a) => println!("Address: {}", a.number()),
                None => print_absent("Address"),
            }
            println!("Lucky: {}", p.practical.lucky.number);
            match &p.practical.telephone {
                Some(t) => println!("Telephone: {}", t.number),
                None => print_absent("Telephone"),
            }

            println!("Personal years:");
            for row in &p.tables.personal_months {
                let cells: Vec<String> =
                    row.months.iter().map(|m| format!("{:>2}", m.number)).collect();
                println!(
                    "  {} PY {:>2} | {}",
                    row.year,
                    row.personal_year,
                    cells.join(" ")
                );
            }
            println!("Essence:");
            for e in &p.tables.essence {
                println!("  {}: {:>2}", e.year, e.number);
            }
            print_stages("Pinnacles", &p.tables.pinnacles);
            print_stages("Life cycles", &p.tables.life_cycles);
            print_stages("Challenges", &p.tables.challenges);
        }
    }
}
