// src/analyze/report.rs
use std::{
    fmt,
    io::{self, Write},
};

/// One breed's share of a single year's registrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearShare {
    pub year: i64,
    pub percentage: f64,
}

/// Everything printed about a breed, in print order.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedReport {
    pub breed: String,
    /// Years the breed appears in, in order of first appearance.
    pub years: Vec<i64>,
    pub total_registrations: i64,
    /// Tracked years with a positive overall total.
    pub yearly_shares: Vec<YearShare>,
    /// `None` when the tracked years hold no registrations at all.
    pub three_year_share: Option<f64>,
    /// Months of the breed's highest-count rows; repeats kept.
    pub popular_months: Vec<String>,
}

impl fmt::Display for BreedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breed = &self.breed;
        let years: Vec<String> = self.years.iter().map(i64::to_string).collect();

        writeln!(
            f,
            "Years where the breed '{breed}' was listed in the top breeds: {}",
            years.join(", ")
        )?;
        writeln!(
            f,
            "Total number of registrations for '{breed}': {}",
            self.total_registrations
        )?;
        for share in &self.yearly_shares {
            writeln!(
                f,
                "Percentage of '{breed}' registrations in {}: {:.2}%",
                share.year, share.percentage
            )?;
        }
        if let Some(pct) = self.three_year_share {
            writeln!(
                f,
                "Percentage of '{breed}' registrations over three years: {pct:.2}%"
            )?;
        }
        writeln!(
            f,
            "Most popular months for '{breed}' registrations: {}",
            self.popular_months.join(", ")
        )
    }
}

pub fn write_report<W: Write>(report: &BreedReport, out: &mut W) -> io::Result<()> {
    write!(out, "{report}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxer() -> BreedReport {
        BreedReport {
            breed: "Boxer".into(),
            years: vec![2021, 2022],
            total_registrations: 15,
            yearly_shares: vec![
                YearShare {
                    year: 2021,
                    percentage: 15.0 / 35.0 * 100.0,
                },
                YearShare {
                    year: 2022,
                    percentage: 0.0,
                },
            ],
            three_year_share: Some(12.5),
            popular_months: vec!["JAN".into(), "JUL".into()],
        }
    }

    #[test]
    fn renders_all_lines_in_order() {
        let expected = "\
Years where the breed 'Boxer' was listed in the top breeds: 2021, 2022
Total number of registrations for 'Boxer': 15
Percentage of 'Boxer' registrations in 2021: 42.86%
Percentage of 'Boxer' registrations in 2022: 0.00%
Percentage of 'Boxer' registrations over three years: 12.50%
Most popular months for 'Boxer' registrations: JAN, JUL
";
        assert_eq!(boxer().to_string(), expected);
    }

    #[test]
    fn empty_report_keeps_the_fixed_lines() {
        let report = BreedReport {
            breed: "Akita".into(),
            years: vec![],
            total_registrations: 0,
            yearly_shares: vec![],
            three_year_share: None,
            popular_months: vec![],
        };
        let expected = "\
Years where the breed 'Akita' was listed in the top breeds: 
Total number of registrations for 'Akita': 0
Most popular months for 'Akita' registrations: 
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn write_report_matches_display() -> io::Result<()> {
        let mut buf = Vec::new();
        write_report(&boxer(), &mut buf)?;
        assert_eq!(String::from_utf8_lossy(&buf), boxer().to_string());
        Ok(())
    }
}
