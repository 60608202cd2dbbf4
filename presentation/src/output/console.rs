//! Console output formatter for council outcomes

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use council_application::{EvaluationOutcome, ImprovementOutcome};
use council_domain::{
    ChairResult, ImprovementDetail, OfferState, OutputFormat, Severity, SpecialistImprovementResult,
    SpecialistResult, ThresholdKind, UpgradePackage, ValidationFinding, Verdict,
};

/// Formats council outcomes for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    // ==================== Evaluation ====================

    fn evaluation_full(outcome: &EvaluationOutcome) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Offer Council: Evaluation"));
        output.push('\n');

        output.push_str(&Self::section_header("Chair"));
        output.push_str(&Self::chair(&outcome.chair, true));

        output.push_str(&Self::section_header("Specialists"));
        for specialist in &outcome.specialists {
            output.push_str(&Self::specialist(specialist));
        }

        output.push_str(&Self::findings(&outcome.findings));
        output.push_str(&Self::footer());
        output
    }

    fn evaluation_summary(outcome: &EvaluationOutcome) -> String {
        let mut output = format!("{}\n\n", "=== Offer Council Verdict ===".cyan().bold());
        output.push_str(&Self::chair(&outcome.chair, false));

        let panel = outcome
            .specialists
            .iter()
            .map(|s| format!("{} {}", s.role, Self::verdict(s.verdict)))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("\n{} {}\n", "Panel:".dimmed(), panel));

        output.push_str(&Self::findings(&outcome.findings));
        output
    }

    fn chair(chair: &ChairResult, detailed: bool) -> String {
        let mut output = format!(
            "{} {}   {} {:.1}/10\n\n",
            "Verdict:".bold(),
            Self::verdict(chair.verdict),
            "Average:".bold(),
            chair.scores.average()
        );

        for (name, score) in chair.scores.entries() {
            output.push_str(&format!("  {:<17} {:>4.1}  {}\n", name, score, Self::bar(score)));
        }

        output.push_str(&Self::list("Top reasons", &chair.top_reasons));
        output.push_str(&Self::list("Must fix", &chair.must_fix));
        output.push_str(&Self::list("Quick wins", &chair.quick_wins));

        if !chair.benchmark.is_empty() {
            output.push_str(&format!("\n{} {}\n", "Benchmark:".cyan().bold(), chair.benchmark));
        }
        if let Some(zone) = chair.recommended_zone {
            output.push_str(&format!("{} {}\n", "Recommended zone:".cyan().bold(), zone));
        }
        if let Some(justification) = &chair.ambition_justification {
            output.push_str(&format!("{} {}\n", "Ambition:".cyan().bold(), justification));
        }

        if detailed {
            if let Some(backing) = &chair.backing {
                output.push_str(&format!("{} {}\n", "Backing:".cyan().bold(), backing));
            }
            if let Some(notes) = &chair.notes {
                output.push_str(&format!("{} {}\n", "Notes:".cyan().bold(), notes));
            }
        }

        output
    }

    fn specialist(result: &SpecialistResult) -> String {
        let mut output = format!(
            "\n{} {}\n{}\n",
            format!("── {} ──", result.role.display_name()).yellow().bold(),
            Self::verdict(result.verdict),
            result.headline
        );
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Zone:".dimmed(),
            result.scale_zone,
            "Cadence:".dimmed(),
            result.cadence_label
        ));
        output.push_str(&Self::list("Key points", &result.key_points));
        output.push_str(&Self::list("Must fix", &result.must_fix));
        output.push_str(&Self::list("Nice to have", &result.nice_to_have));
        if !result.notes_for_chair.is_empty() {
            output.push_str(&format!("{} {}\n", "For the chair:".dimmed(), result.notes_for_chair));
        }
        output
    }

    // ==================== Improvement ====================

    fn improvement_full(outcome: &ImprovementOutcome) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Offer Council: Improvement"));
        output.push('\n');

        output.push_str(&Self::section_header("Upgrade Packages"));
        for package in &outcome.chair.packages {
            let recommended = package.label.eq_ignore_ascii_case(&outcome.chair.recommended);
            output.push_str(&Self::package(package, recommended));
        }
        output.push_str(&Self::chair_notes(outcome));

        if let Some(offer) = &outcome.proposed_offer {
            output.push_str(&Self::section_header("Proposed Offer"));
            output.push_str(&Self::offer(offer));
        }

        output.push_str(&Self::section_header("Specialist Proposals"));
        for proposal in &outcome.specialists {
            output.push_str(&Self::proposal(proposal));
        }

        output.push_str(&Self::findings(&outcome.findings));
        output.push_str(&Self::footer());
        output
    }

    fn improvement_summary(outcome: &ImprovementOutcome) -> String {
        let mut output = format!("{}\n", "=== Offer Council Upgrade ===".cyan().bold());

        match outcome.chair.recommended_package() {
            Some(package) => output.push_str(&Self::package(package, true)),
            None => output.push_str(&format!(
                "\nRecommended package '{}' not found\n",
                outcome.chair.recommended
            )),
        }

        let others = outcome
            .chair
            .packages
            .iter()
            .filter(|p| !p.label.eq_ignore_ascii_case(&outcome.chair.recommended))
            .map(|p| format!("{}: {}", p.label, p.title))
            .collect::<Vec<_>>();
        if !others.is_empty() {
            output.push_str(&format!("\n{} {}\n", "Also considered:".dimmed(), others.join("; ")));
        }

        if let Some(offer) = &outcome.proposed_offer {
            output.push_str(&format!("\n{}\n", "Proposed offer:".cyan().bold()));
            output.push_str(&Self::offer(offer));
        }

        output.push_str(&Self::findings(&outcome.findings));
        output
    }

    fn package(package: &UpgradePackage, recommended: bool) -> String {
        let title = format!("── Package {}: {} ──", package.label, package.title);
        let mut output = if recommended {
            format!("\n{} {}\n", title.green().bold(), "(recommended)".green())
        } else {
            format!("\n{}\n", title.yellow().bold())
        };

        if !package.summary.is_empty() {
            output.push_str(&format!("{}\n", package.summary));
        }
        output.push_str(&Self::list("Changes", &package.changes));

        let informed_by = package
            .informed_by
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Zone:".dimmed(),
            package.scale_zone,
            "Informed by:".dimmed(),
            if informed_by.is_empty() { "-" } else { &informed_by }
        ));
        if let Some(option) = &package.offer_option {
            output.push_str(&format!("{} {}\n", "Offer option:".dimmed(), option));
        }
        if !package.preserves_signature {
            output.push_str(&format!("{}\n", "Drops the signature element".yellow()));
        }
        output
    }

    fn chair_notes(outcome: &ImprovementOutcome) -> String {
        let mut output = String::new();
        for (label, value) in [
            ("Ambition:", &outcome.chair.ambition_justification),
            ("Backing:", &outcome.chair.backing),
            ("Notes:", &outcome.chair.notes),
        ] {
            if let Some(text) = value {
                output.push_str(&format!("\n{} {}", label.cyan().bold(), text));
            }
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn proposal(proposal: &SpecialistImprovementResult) -> String {
        let mut output = format!(
            "\n{}\n",
            format!("── {} ──", proposal.role().display_name()).yellow().bold()
        );

        match &proposal.detail {
            ImprovementDetail::OfferIq(detail) => {
                for option in &detail.options {
                    let marker = match &detail.recommended_option {
                        Some(label) if label.eq_ignore_ascii_case(&option.label) => " *",
                        _ => "",
                    };
                    output.push_str(&format!(
                        "  [{}]{} {} ({})\n",
                        option.label, marker, option.summary, option.scale_zone
                    ));
                }
            }
            ImprovementDetail::Creative(detail) => {
                for hook in &detail.hooks {
                    output.push_str(&format!("  \"{}\"", hook.line));
                    if !hook.rationale.is_empty() {
                        output.push_str(&format!(" {}", hook.rationale.dimmed()));
                    }
                    output.push('\n');
                }
                if let Some(device) = &detail.story_device {
                    output.push_str(&format!("{} {}\n", "Story device:".dimmed(), device));
                }
            }
            ImprovementDetail::Shopper(detail) => {
                output.push_str(&Self::list("Simplifications", &detail.simplifications));
                if let (Some(before), Some(after)) = (detail.steps_before, detail.steps_after) {
                    output.push_str(&format!("{} {} -> {}\n", "Steps:".dimmed(), before, after));
                }
                output.push_str(&format!(
                    "{} {}\n",
                    "Suggested cadence:".dimmed(),
                    detail.suggested_cadence
                ));
            }
            ImprovementDetail::Retail(detail) => {
                output.push_str(&Self::list("Trade actions", &detail.trade_actions));
                output.push_str(&Self::list("POS requirements", &detail.pos_requirements));
                output.push_str(&Self::list("Retailer risks", &detail.retailer_risks));
            }
        }

        output.push_str(&Self::list("Must fix", &proposal.tail.must_fix));
        output.push_str(&Self::list("Nice to have", &proposal.tail.nice_to_have));
        if proposal.tail.drop_signature {
            output.push_str(&format!("{}\n", "Would drop the signature element".yellow()));
        }
        output
    }

    fn offer(offer: &OfferState) -> String {
        let base = match offer.base_value.amount {
            Some(amount) => format!("{} {}", offer.base_value.kind, amount),
            None => offer.base_value.kind.to_string(),
        };
        let mut output = format!(
            "  {:<16} {}{}\n",
            "Base value:",
            base,
            if offer.has_guaranteed_reward { " (guaranteed)" } else { "" }
        );

        if let Some(threshold) = &offer.entry_threshold {
            let unit = match threshold.kind {
                ThresholdKind::Units => "units",
                ThresholdKind::Spend => "spend",
                ThresholdKind::Visits => "visits",
            };
            output.push_str(&format!("  {:<16} {} {}\n", "Entry:", threshold.value, unit));
        }
        if !offer.major_prizes.is_empty() {
            output.push_str(&format!("  {:<16} {}\n", "Major prizes:", offer.major_prizes.join(", ")));
        }
        if !offer.runner_up_prizes.is_empty() {
            output.push_str(&format!(
                "  {:<16} {}\n",
                "Runner-up:",
                offer.runner_up_prizes.join(", ")
            ));
        }
        output
    }

    // ==================== Shared pieces ====================

    fn findings(findings: &[ValidationFinding]) -> String {
        if findings.is_empty() {
            return String::new();
        }

        let mut output = format!("\n{}\n", "Findings:".yellow().bold());
        for finding in findings {
            let tag = match finding.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow(),
            };
            output.push_str(&format!("  [{}] {}: {}\n", tag, finding.code, finding.message));
        }
        output
    }

    fn verdict(verdict: Verdict) -> ColoredString {
        match verdict {
            Verdict::Go => verdict.as_str().green().bold(),
            Verdict::Iterate => verdict.as_str().yellow().bold(),
            Verdict::Kill => verdict.as_str().red().bold(),
        }
    }

    fn bar(score: f64) -> String {
        let filled = score.round().clamp(0.0, 10.0) as usize;
        format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
    }

    fn list(title: &str, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut output = format!("\n{}\n", format!("{}:", title).cyan().bold());
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_evaluation(&self, outcome: &EvaluationOutcome) -> String {
        match self.format {
            OutputFormat::Full => Self::evaluation_full(outcome),
            OutputFormat::Summary => Self::evaluation_summary(outcome),
            OutputFormat::Json => Self::json(outcome),
        }
    }

    fn format_improvement(&self, outcome: &ImprovementOutcome) -> String {
        match self.format {
            OutputFormat::Full => Self::improvement_full(outcome),
            OutputFormat::Summary => Self::improvement_summary(outcome),
            OutputFormat::Json => Self::json(outcome),
        }
    }
}
