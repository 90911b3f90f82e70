//! Plain-text rendering of outcomes and history.

use history_store::{HistoryRecord, HISTORY_COLUMNS};
use invest_core::EvaluationResult;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Whole-unit amount with thousands separators, e.g. `1,234,567 ETB`.
pub fn money(value: f64, currency: &str) -> String {
    let amount = match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round();
            if rounded.is_zero() {
                "0".to_string()
            } else {
                group_thousands(&rounded.to_string())
            }
        }
        None => format!("{value:.0}"),
    };
    format!("{amount} {currency}")
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Probability as a percentage with one decimal, e.g. `97.5%`.
pub fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Outcome block shown after an evaluation.
pub fn outcome(result: &EvaluationResult, currency: &str) -> String {
    match result {
        EvaluationResult::Approved(approval) => {
            let mut out = String::from("Investment Approved!\n");
            let rows = [
                ("Investor Return", money(approval.investor_return, currency)),
                ("Max Safe Investment", money(approval.max_safe_investment, currency)),
                ("Owner Return", money(approval.owner_return, currency)),
                ("Risk Success Probability", percent(approval.risk_probability)),
            ];
            for (label, value) in rows {
                let _ = writeln!(out, "  {label:<26}{value}");
            }
            out
        }
        EvaluationResult::Rejected { reason } => format!("{reason}\n"),
    }
}

/// Table of every stored record.
pub fn history(records: &[HistoryRecord]) -> String {
    let mut out = String::from("Historical Investment Data\n");
    if records.is_empty() {
        out.push_str("  (no approved investments yet)\n");
        return out;
    }

    let rows: Vec<[String; 13]> = records.iter().map(history_row).collect();
    let widths: Vec<usize> = HISTORY_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header: Vec<String> = HISTORY_COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{name:>width$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}

fn history_row(record: &HistoryRecord) -> [String; 13] {
    [
        format!("{:.2}", record.primary_revenue),
        format!("{:.4}", record.growth_rate),
        format!("{:.2}", record.expenses),
        format!("{:.4}", record.tax_rate),
        format!("{:.4}", record.investor_share),
        record.horizon.to_string(),
        format!("{:.2}", record.expected_multiple),
        format!("{:.2}", record.bank_loan),
        format!("{:.4}", record.bank_rate),
        format!("{:.2}", record.max_safe_investment),
        format!("{:.2}", record.investor_return),
        format!("{:.2}", record.owner_return),
        format!("{:.3}", record.risk_probability),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use invest_core::{Approval, RejectionReason};

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0.0, "ETB"), "0 ETB");
        assert_eq!(money(999.4, "ETB"), "999 ETB");
        assert_eq!(money(1_000.0, "ETB"), "1,000 ETB");
        assert_eq!(money(1_234_567.0, "USD"), "1,234,567 USD");
        assert_eq!(money(-301_695.32, "ETB"), "-301,695 ETB");
        assert_eq!(money(-0.2, "ETB"), "0 ETB");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.975), "97.5%");
        assert_eq!(percent(1.0), "100.0%");
    }

    #[test]
    fn test_approved_outcome() {
        let result = EvaluationResult::Approved(Approval {
            investor_return: 393_681.4,
            max_safe_investment: 281_201.0,
            owner_return: 1_878_590.0,
            risk_probability: 0.976,
        });
        let text = outcome(&result, "ETB");
        assert!(text.starts_with("Investment Approved!"));
        assert!(text.contains("393,681 ETB"));
        assert!(text.contains("1,878,590 ETB"));
        assert!(text.contains("97.6%"));
    }

    #[test]
    fn test_rejected_outcome() {
        let result: EvaluationResult = RejectionReason::RiskTooHigh {
            risk_probability: 0.5,
            threshold: 0.85,
        }
        .into();
        assert_eq!(
            outcome(&result, "ETB"),
            "Risk too high: 50.0% success probability (needs >= 85%)\n"
        );
    }

    #[test]
    fn test_history_table() {
        assert!(history(&[]).contains("no approved investments"));

        let record = HistoryRecord {
            primary_revenue: 80_000.0,
            growth_rate: 0.3,
            expenses: 20_000.0,
            tax_rate: 0.15,
            investor_share: 0.3,
            horizon: 12,
            expected_multiple: 1.4,
            bank_loan: 300_000.0,
            bank_rate: 0.12,
            max_safe_investment: 281_201.0,
            investor_return: 393_681.4,
            owner_return: 1_878_590.0,
            risk_probability: 0.976,
        };
        let table = history(&[record.clone(), record]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("RiskProbability"));
        assert!(lines[2].contains("393681.40"));
        assert_eq!(lines[2], lines[3]);
    }
}
