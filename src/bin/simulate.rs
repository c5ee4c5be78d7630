use quizsim::config::QuizConfig;
use quizsim::report::{save_report, ConsoleReporter, DistributionReporter};
use quizsim::simulation::{compute_statistics, run_simulation_seeded};

struct Args {
    num_participants: u64,
    num_questions: u32,
    num_options: u32,
    knowledge_shift: u32,
    seed: u64,
    output: Option<String>,
}

const USAGE: &str = "Usage: quizsim-simulate [--participants N] [--questions N] [--options N] [--shift N] [--seed S] [--output FILE]";

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        num_participants: 1000,
        num_questions: 20,
        num_options: 4,
        knowledge_shift: 0,
        seed: 42,
        output: None,
    };

    fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
        match args.get(i).and_then(|v| v.parse().ok()) {
            Some(v) => v,
            None => {
                eprintln!("Invalid {} value: {}", flag, args.get(i).map(String::as_str).unwrap_or(""));
                std::process::exit(1);
            }
        }
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                parsed.num_participants = value(&args, i, "--participants");
            }
            "--questions" => {
                i += 1;
                parsed.num_questions = value(&args, i, "--questions");
            }
            "--options" => {
                i += 1;
                parsed.num_options = value(&args, i, "--options");
            }
            "--shift" => {
                i += 1;
                parsed.knowledge_shift = value(&args, i, "--shift");
            }
            "--seed" => {
                i += 1;
                parsed.seed = value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    parsed.output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --participants N  Number of participants to simulate (default: 1000)");
                println!("  --questions N     Questions per quiz (default: 20)");
                println!("  --options N       Answer options per question (default: 4)");
                println!("  --shift N         Knowledge shift: correct answers assumed known (default: 0)");
                println!("  --seed S          RNG seed (default: 42)");
                println!("  --output FILE     Write JSON report to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn main() {
    let args = parse_args();

    let config = match QuizConfig::new(args.num_questions, args.num_options, args.knowledge_shift)
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Quiz Simulation ({} participants, seed {})",
        args.num_participants, args.seed
    );
    println!(
        "  Questions: {}  Options: {}  Knowledge shift: {}",
        config.num_questions, config.num_options, config.knowledge_shift
    );
    println!();

    let run = match run_simulation_seeded(&config, args.num_participants, args.seed) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(stats) = compute_statistics(&config, &run.distribution) {
        println!("Results:");
        println!(
            "  Mean score:  {:.2} (binomial raw mean: {:.2}, shift: {})",
            stats.mean, stats.expected_raw_mean, config.knowledge_shift
        );
        println!("  Std dev:     {:.2}", stats.std_dev);
        println!("  Min:         {}", stats.min);
        println!("  Max:         {}", stats.max);
        println!("  Median:      {}", stats.median);
        println!();
    }

    let mut console = ConsoleReporter::stdout();
    if let Err(e) = console.report(&run) {
        eprintln!("Failed to write histogram: {}", e);
        std::process::exit(1);
    }

    if let Some(ref path) = args.output {
        if let Err(e) = save_report(&run, path) {
            eprintln!("Failed to write report {}: {}", path, e);
            std::process::exit(1);
        }
        println!();
        println!("  Report saved: {}", path);
    }
}
