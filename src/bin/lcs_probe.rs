use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use plcs::debug::{MatrixDump, OccurrenceDump};
use plcs::{
    Alphabet, LcsScorer, OccurrenceTable, ParallelScorer, ReferenceChoice, Score,
    SequentialScorer, Sequence,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            process::exit(2);
        }
    };
    init_logging();

    let scorer = {
        let mut builder = ParallelScorer::builder().reference(options.reference);
        if let Some(threads) = options.threads {
            builder = builder.threads(threads);
        }
        match builder.build() {
            Ok(scorer) => scorer,
            Err(err) => {
                eprintln!("lcs_probe: {err}");
                process::exit(2);
            }
        }
    };

    let code = match options.mode {
        Mode::Pair => run_pair(&options, &scorer),
        Mode::Scale => run_scale(&options, &scorer),
    };
    process::exit(code);
}

#[cfg(feature = "probe")]
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "probe"))]
fn init_logging() {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Pair,
    Scale,
}

#[derive(Debug)]
struct Options {
    mode: Mode,
    path_a: PathBuf,
    path_b: PathBuf,
    threads: Option<usize>,
    reference: ReferenceChoice,
    dump: bool,
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            mode: Mode::Pair,
            path_a: PathBuf::from("fileA.in"),
            path_b: PathBuf::from("fileB.in"),
            threads: None,
            reference: ReferenceChoice::default(),
            dump: false,
            format: OutputFormat::Table,
            verify_limit: 2048,
        };

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            if matches!(flag.as_str(), "--help" | "--dump" | "--scale") && inline.is_some() {
                return Err(format!("{flag} does not take a value"));
            }
            match flag.as_str() {
                "-h" | "--help" => {
                    Options::print_help();
                    process::exit(0);
                }
                "--a" => options.path_a = PathBuf::from(value("--a")?),
                "--b" => options.path_b = PathBuf::from(value("--b")?),
                "--threads" => {
                    options.threads = Some(
                        value("--threads")?
                            .parse::<usize>()
                            .map_err(|_| "thread count must be a positive integer".to_string())?,
                    )
                }
                "--reference" => options.reference = value("--reference")?.parse()?,
                "--dump" => options.dump = true,
                "--scale" => options.mode = Mode::Scale,
                "--format" => options.format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => {
                    options.verify_limit = value("--verify-limit")?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a positive integer".to_string())?
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: lcs_probe [options]

Scores two sequences with the sequential and the row-parallel LCS scorers and
checks that they agree.

Options:
  --a <PATH>                     First sequence file (default: fileA.in)
  --b <PATH>                     Second sequence file (default: fileB.in)
  --threads <N>                  Worker pool size (default: all cores)
  --reference <shorter|first|second>
                                 Sequence used for the occurrence table (default: shorter)
  --dump                         Print both score matrices and the occurrence table
  --scale                        Run generated workloads of increasing size instead
  --format <csv|table|json>      Output format for --scale (default: table)
  --verify-limit <N>             Largest --scale size checked against the sequential scorer (default: 2048)
  -h, --help                     Print this help message

Logging is controlled through RUST_LOG (e.g. RUST_LOG=plcs=debug) when built
with the `probe` feature.

Examples:
  lcs_probe --a fileA.in --b fileB.in --dump
  lcs_probe --scale --threads 4 --format csv
"
        );
    }
}

fn run_pair(options: &Options, scorer: &ParallelScorer) -> i32 {
    let (a, b) = match (
        Sequence::from_path(&options.path_a),
        Sequence::from_path(&options.path_b),
    ) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("lcs_probe: {err}");
            return 1;
        }
    };

    // Oracle and candidate are independent and run side by side.
    let (sequential, parallel) = rayon::join(
        || SequentialScorer.fill(&a, &b),
        || scorer.fill(&a, &b),
    );
    let (sequential, parallel) = match (sequential, parallel) {
        (Ok(s), Ok(p)) => (s, p),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("lcs_probe: {err}");
            return 1;
        }
    };

    if options.dump {
        let (reference, other) = scorer.reference_choice().resolve(&a, &b);
        println!("{}", MatrixDump::new(&sequential, &a, &b).with_title("Sequential"));
        println!(
            "{}",
            MatrixDump::new(&parallel, reference, other).with_title("Parallel")
        );
        if let Ok(alphabet) = Alphabet::from_pair(&a, &b) {
            if let Ok(table) = OccurrenceTable::build(reference, &alphabet) {
                println!("{}", OccurrenceDump::new(&table, &alphabet, reference));
            }
        }
    }

    let (s, p) = (sequential.terminal(), parallel.terminal());
    println!("{}", score_line(&SequentialScorer, s));
    println!("{}", score_line(scorer, p));
    if s != p {
        eprintln!(
            "lcs_probe: scorers disagree ({} {s} != {} {p})",
            SequentialScorer.name(),
            scorer.name()
        );
        return 3;
    }
    0
}

fn score_line(scorer: &dyn LcsScorer, score: Score) -> String {
    format!("{:<10} score: {score}", scorer.name())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    len: usize,
    score: Score,
    wall_s: f64,
    baseline_s: Option<f64>,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_scale(options: &Options, scorer: &ParallelScorer) -> i32 {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096];
    let mut sys = System::new();
    let total = SIZES.len();

    eprintln!(
        "lcs_probe: scaling run, {} threads, reference={:?}",
        scorer.threads(),
        scorer.reference_choice()
    );
    let mut measurements = Vec::with_capacity(total);
    for (idx, &len) in SIZES.iter().enumerate() {
        eprint!("  [{}/{}] len={len}... ", idx + 1, total);
        let a = deterministic_dna(len, 0);
        let b = deterministic_dna(len + len / 3, 1);

        let before = rss_kib(&mut sys);
        let start = Instant::now();
        let result = scorer.score(&a, &b);
        let wall_s = start.elapsed().as_secs_f64();
        let rss_delta_kib = rss_kib(&mut sys).saturating_sub(before);

        let score = match result {
            Ok(score) => score,
            Err(err) => {
                eprintln!("failed: {err}");
                return 1;
            }
        };

        let (status, detail, baseline_s) = if len <= options.verify_limit {
            let start = Instant::now();
            match SequentialScorer.score(&a, &b) {
                Ok(expected) if expected == score => (
                    VerificationStatus::Passed,
                    None,
                    Some(start.elapsed().as_secs_f64()),
                ),
                Ok(expected) => (
                    VerificationStatus::Failed,
                    Some(format!("expected {expected}, got {score}")),
                    Some(start.elapsed().as_secs_f64()),
                ),
                Err(err) => (VerificationStatus::Failed, Some(err.to_string()), None),
            }
        } else {
            (VerificationStatus::NotChecked, None, None)
        };
        eprintln!("score={score}, time={wall_s:.3}s, status={}", status.label());

        measurements.push(Measurement {
            len,
            score,
            wall_s,
            baseline_s,
            rss_delta_kib,
            status,
            detail,
        });
    }

    options.format.write(&measurements);
    if measurements
        .iter()
        .any(|m| m.status == VerificationStatus::Failed)
    {
        3
    } else {
        0
    }
}

fn fmt_baseline(baseline: Option<f64>) -> String {
    baseline.map(|s| format!("{s:.3}")).unwrap_or_default()
}

fn write_csv(measurements: &[Measurement]) {
    println!("len,score,wall_s,baseline_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},{},\"{}\"",
            m.len,
            m.score,
            m.wall_s,
            fmt_baseline(m.baseline_s),
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:>8}  {:>8}  {:>10}  {:>10}  {:>14}  {:>12}  detail",
        "len", "score", "wall_s", "baseline_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<8}  {:-<8}  {:-<10}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:>8}  {:>8}  {:>10.3}  {:>10}  {:>14}  {:>12}  {}",
            m.len,
            m.score,
            m.wall_s,
            fmt_baseline(m.baseline_s),
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref().map(|s| s.replace('"', "'")) {
            Some(d) => format!("\"{d}\""),
            None => "null".to_string(),
        };
        let baseline = m
            .baseline_s
            .map(|s| format!("{s:.3}"))
            .unwrap_or_else(|| "null".to_string());
        println!(
            "  {{\"len\":{},\"score\":{},\"wall_s\":{:.3},\"baseline_s\":{},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.len,
            m.score,
            m.wall_s,
            baseline,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Cyclic DNA with a fixed phase offset, so runs are reproducible.
fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * 7 / 3 + offset) % ALPHABET.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn switches_without_value() {
        let options = parse(&["--dump", "--scale", "--format", "csv"]).unwrap();
        assert!(options.dump);
        assert_eq!(options.mode, Mode::Scale);
        assert_eq!(options.format, OutputFormat::Csv);
    }

    #[test]
    fn switches_reject_inline_value() {
        for arg in ["--dump=no", "--scale=0", "--help=1"] {
            let err = parse(&[arg]).unwrap_err();
            assert!(err.contains("does not take a value"), "{arg}: {err}");
        }
    }

    #[test]
    fn valued_flags_accept_both_spellings() {
        let options = parse(&["--threads=3", "--a", "x.in", "--reference=second"]).unwrap();
        assert_eq!(options.threads, Some(3));
        assert_eq!(options.path_a, PathBuf::from("x.in"));
        assert_eq!(options.reference, ReferenceChoice::Second);
        assert!(!options.dump);
        assert_eq!(options.mode, Mode::Pair);
    }

    #[test]
    fn score_lines_carry_scorer_names() {
        assert_eq!(score_line(&SequentialScorer, 4), "sequential score: 4");
        assert_eq!(score_line(&ParallelScorer::new(), 4), "parallel   score: 4");
    }
}
