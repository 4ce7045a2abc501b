use clap::{ArgGroup, Args};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use swiftwork::analysis::{analyze_listing, Listing, TopicStatus};
use swiftwork::error::AppError;
use swiftwork::fixtures;
use swiftwork::suggestions::suggest;
use swiftwork::views::{AnalysisResponse, TopicView};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "fixture"])))]
pub(crate) struct AnalyzeArgs {
    /// Listing JSON file to score. Use `-` to read from stdin.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Index of a bundled sample listing
    #[arg(long)]
    pub(crate) fixture: Option<usize>,
    /// Print the wire response instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Display name of the topic, e.g. "ชื่องาน"
    #[arg(long)]
    pub(crate) topic: String,
    /// Current value of the field being improved
    #[arg(long, default_value = "")]
    pub(crate) value: String,
    /// Optional JSON object passed through as suggestion context
    #[arg(long, value_parser = parse_context)]
    pub(crate) context: Option<Map<String, Value>>,
}

fn parse_context(raw: &str) -> Result<Map<String, Value>, String> {
    serde_json::from_str(raw).map_err(|err| format!("context must be a JSON object: {err}"))
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        file,
        fixture,
        json,
    } = args;

    let listing = match (file, fixture) {
        (Some(path), _) => load_listing(&path)?,
        (None, Some(index)) => fixtures::product(index)?,
        (None, None) => Listing::default(),
    };

    let response = AnalysisResponse::from(analyze_listing(&listing));
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_report(&response));
    }
    Ok(())
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    println!(
        "{}",
        suggest(&args.topic, &args.value, args.context.as_ref())
    );
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("SwiftWork listing scoring demo");

    for (index, listing) in fixtures::products().iter().enumerate() {
        let result = analyze_listing(listing);
        let failing = result
            .topics
            .iter()
            .filter(|topic| topic.status != TopicStatus::Pass)
            .count();
        println!(
            "  [{}] {:>3}/100  {} topic(s) need work  {}",
            index,
            result.overall_score,
            failing,
            listing.title.as_deref().unwrap_or("(untitled)")
        );
    }

    let sample = fixtures::product(0)?;
    println!("\nFull report for sample 0");
    print!("{}", render_report(&analyze_listing(&sample).into()));
    Ok(())
}

fn load_listing(path: &Path) -> Result<Listing, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Plain-text rendering of a report for terminal output.
pub(crate) fn render_report(response: &AnalysisResponse) -> String {
    let mut lines = vec![format!("Overall score: {}/100", response.overall_score)];

    for topic in &response.topics {
        lines.push(String::new());
        lines.extend(render_topic(topic));
    }

    if !response.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations".to_string());
        lines.extend(
            response
                .recommendations
                .iter()
                .map(|line| format!("  {line}")),
        );
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn render_topic(topic: &TopicView) -> Vec<String> {
    let details = &topic.details;
    let mut lines = vec![format!(
        "{} {}: {} ({})",
        topic.emoji,
        topic.name,
        topic.score,
        topic.status.label()
    )];

    let labelled = [
        ("Current", &details.current),
        ("Analysis", &details.ai_analysis),
        ("Suggestion", &details.suggestion),
    ];
    for (label, value) in labelled {
        if let Some(value) = value {
            lines.push(format!("  {label}: {value}"));
        }
    }

    if let Some(fix) = &details.ai_fix {
        lines.push("  Fix:".to_string());
        lines.extend(fix.lines().map(|line| format!("    {line}")));
    }

    for (label, steps) in [("Steps", &details.fail_steps), ("Tips", &details.pass_tips)] {
        if let Some(steps) = steps {
            lines.push(format!("  {label}:"));
            lines.extend(steps.iter().map(|step| format!("    {step}")));
        }
    }

    lines
}
