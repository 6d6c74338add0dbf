//! Text report for a chi-squared test.
//!
//! The distribution is drawn as a column chart, one five-character column
//! per face, with the per-face contributions printed underneath:
//!
//! ```text
//! |     |     |  *  |
//! |  *  |     |  *  |
//! |  *  |  *  |  *  |
//! |-----|-----|-----|
//! |    1|    2|    3|
//! |-----|-----|-----|
//! | 0.00| 0.50| 0.50|
//! ```

use die_stats::{ChiSquaredResult, CriticalValues, Die, FrequencyTable, Verdict};

const BAR: &str = "  *  |";
const GAP: &str = "     |";
const BREAK: &str = "-----|";

/// Render the full report: chart, statistic, and interpretation.
pub fn render_report(table: &FrequencyTable, result: &ChiSquaredResult) -> String {
    let mut out = String::from("Here is the distribution for this die:\n");
    out.push_str(&render_distribution(table, result));
    out.push('\n');
    out.push_str(&format!(
        "Overall x2 was calculated to be: {:.2}\n\n",
        result.statistic
    ));
    out.push_str(&render_interpretation(table.die(), result.statistic));
    out
}

/// Render the column chart, face labels and contribution row.
pub fn render_distribution(table: &FrequencyTable, result: &ChiSquaredResult) -> String {
    let counts = table.counts();
    let break_line = format!("|{}\n", BREAK.repeat(counts.len()));
    let mut out = String::new();

    for height in (1..=table.max_count()).rev() {
        out.push('|');
        for &count in counts {
            out.push_str(if count >= height { BAR } else { GAP });
        }
        out.push('\n');
    }

    out.push_str(&break_line);
    out.push('|');
    for face in 1..=counts.len() {
        out.push_str(&format!("{face:>5}|"));
    }
    out.push('\n');
    out.push_str(&break_line);

    out.push('|');
    for contribution in &result.contributions {
        out.push_str(&format!("{contribution:>5.2}|"));
    }
    out.push('\n');
    out
}

/// Explain the critical values for `die` and where `statistic` falls.
pub fn render_interpretation(die: Die, statistic: f64) -> String {
    let cv = die.critical_values();
    let mut out = String::from("How to interpret this data:\n");
    out.push_str(
        "The number below each face is its deviation from the expected count. \
         The closer to 0 the better.\n\n",
    );
    out.push_str(&render_thresholds(&cv));
    out.push_str("Meaning:\n");
    out.push_str(&format!("  x2 < {:.1} -> {}\n", cv.p90, Verdict::NoConcern));
    out.push_str(&format!(
        "  x2 between {:.1} and {:.1} -> {}\n",
        cv.p90,
        cv.p97,
        Verdict::MaybeConcern
    ));
    out.push_str(&format!(
        "  x2 over {:.1} -> {}\n",
        cv.p97,
        Verdict::ProbablyUnfair
    ));
    out.push_str(
        "You can choose where to draw the line, \
         it just depends on how confident you want to be.\n\n",
    );
    out.push_str(&format!(
        "This {die}: {}\n",
        Verdict::classify(statistic, &cv)
    ));
    out
}

fn render_thresholds(cv: &CriticalValues) -> String {
    let mut out = String::from("Given a fair die, x2 stays:\n");
    for (value, pct) in cv.as_array().iter().zip(["90%", "95%", "97%", "99%"]) {
        out.push_str(&format!("  below {value:<5.1} {pct} of the time\n"));
    }
    out
}
