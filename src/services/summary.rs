use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::domain::Dataset;

/// Prints the win table to a terminal, most titles first.
pub struct SummaryService {
    dataset: Dataset,
}

impl SummaryService {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let wins = self.dataset.wins();
        let width = wins.iter().map(|(country, _)| country.len()).max().unwrap_or(0);

        writeln!(out, "{}", "FIFA World Cup Wins by Country".bold())?;
        for (rank, (country, times)) in wins.ranked().into_iter().enumerate() {
            let line = format!("{:>2}. {:<width$}  {}", rank + 1, country, times, width = width);
            if rank == 0 {
                writeln!(out, "{}", line.green())?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(
            out,
            "{} titles across {} tournaments ({}-{})",
            wins.total(),
            self.dataset.results().len(),
            self.dataset.years().first().copied().unwrap_or_default(),
            self.dataset.years().last().copied().unwrap_or_default(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_every_winner() {
        colored::control::set_override(false);
        let service = SummaryService::new(Dataset::load().unwrap());
        let mut out = Vec::new();

        service.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 8 + 1);
        assert!(lines[1].starts_with(" 1. Brazil"));
        assert!(lines[1].ends_with('5'));
        assert_eq!(lines[9], "22 titles across 22 tournaments (1930-2022)");
    }
}
