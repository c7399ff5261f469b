//! scratch command - Print (and create on demand) a scratchpad directory

use anyhow::Result;
use chrono::Datelike;

use crate::core::Config;
use crate::resolver::Resolver;
use crate::tasks::{GitInit, Task};

/// Ensure the named scratchpad exists and print its path.
///
/// Without a name, the current ISO week is used (e.g. `2026w35`), giving a
/// fresh scratch space each week.
pub fn scratch(config: &Config, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => current_week_name(),
    };

    let resolver = Resolver::new(config);
    let pad = resolver.scratchpad(&name);
    GitInit.apply_scratchpad(&pad)?;

    println!("{}", pad.path().display());
    Ok(())
}

fn current_week_name() -> String {
    let week = chrono::Local::now().iso_week();
    format!("{}w{:02}", week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_name_has_year_and_week() {
        let name = current_week_name();
        let (year, week) = name.split_once('w').unwrap();
        assert!(year.parse::<i32>().unwrap() >= 2026);
        let week: u32 = week.parse().unwrap();
        assert!((1..=53).contains(&week));
    }
}
