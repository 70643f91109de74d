//! Rendering a ledger snapshot as text tables, JSON or CSV.

use anyhow::{Context, Result};
use std::io::Write;
use tally_finance::LedgerSnapshot;

pub fn write_table(out: &mut impl Write, snap: &LedgerSnapshot, currency: &str) -> Result<()> {
    let s = &snap.summary;

    writeln!(out, "Financial Summary")?;
    writeln!(out, "  Total Income:   {:.2} {currency}", s.total_income)?;
    writeln!(out, "  Total Expenses: {:.2} {currency}", s.total_expenses)?;
    writeln!(out, "  Net:            {:.2} {currency}", s.net)?;
    writeln!(out, "  Savings Rate:   {:.2}%", s.savings_rate)?;

    writeln!(out, "\nTransactions")?;
    if snap.transactions.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        writeln!(
            out,
            "  {:<16} {:<30} {:>14}  CATEGORY",
            "ID",
            "DESCRIPTION",
            format!("AMOUNT ({currency})")
        )?;
        for t in &snap.transactions {
            writeln!(
                out,
                "  {:<16} {:<30} {:>14.2}  {}",
                t.id, t.description, t.amount, t.category
            )?;
        }
    }

    writeln!(out, "\nSpending by Category")?;
    if s.categories.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        writeln!(
            out,
            "  {:<12} {:>14} {:>11}",
            "CATEGORY",
            format!("TOTAL ({currency})"),
            "PERCENTAGE"
        )?;
        for c in &s.categories {
            writeln!(
                out,
                "  {:<12} {:>14.2} {:>10.2}%",
                c.name.label(),
                c.total,
                c.percentage
            )?;
        }
    }

    if !snap.needs_review.is_empty() {
        writeln!(out, "\nNeeds Review")?;
        for t in &snap.needs_review {
            writeln!(out, "  {:<16} {:<30} {:>14.2}", t.id, t.description, t.amount)?;
        }
        writeln!(out, "  (assign with: tally analyze --set <ID>=<CATEGORY>)")?;
    }

    writeln!(out, "\nInsight")?;
    writeln!(out, "  {}", s.insight)?;

    writeln!(out, "\nMonthly Trend (synthetic)")?;
    writeln!(out, "  {:<6} {:>14} {:>14}", "MONTH", "INCOME", "EXPENSES")?;
    for p in &s.trend {
        writeln!(out, "  {:<6} {:>14.2} {:>14.2}", p.month, p.income, p.expenses)?;
    }

    Ok(())
}

pub fn write_json(out: &mut impl Write, snap: &LedgerSnapshot) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, snap).context("serialize snapshot")?;
    writeln!(out)?;
    Ok(())
}

/// One row per transaction: id,description,amount,category
pub fn write_csv(out: &mut impl Write, snap: &LedgerSnapshot) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for t in &snap.transactions {
        wtr.serialize(t).with_context(|| format!("write row {}", t.id))?;
    }
    wtr.flush()?;
    Ok(())
}
