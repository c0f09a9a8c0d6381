//! End-of-run outcome summary.

use std::fmt;

use fr_agent::Action;

use crate::AgentStepRow;

/// Action counts among the rows of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub step: u64,
    /// Non-zero counts, most frequent first; ties keep `Action::ALL` order.
    pub counts: Vec<(Action, usize)>,
    /// Households with no action recorded.
    pub undecided: usize,
}

impl OutcomeSummary {
    pub fn count(&self, action: Action) -> usize {
        self.counts
            .iter()
            .find(|(a, _)| *a == action)
            .map_or(0, |&(_, n)| n)
    }
}

impl fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Action counts at step {}:", self.step)?;
        for (action, n) in &self.counts {
            writeln!(f, "  {:<12} {n}", action.as_str())?;
        }
        if self.undecided > 0 {
            writeln!(f, "  {:<12} {}", "undecided", self.undecided)?;
        }
        Ok(())
    }
}

/// Count actions at the latest step present in `rows`.  `None` if `rows` is
/// empty.
pub fn summarize_outcomes(rows: &[AgentStepRow]) -> Option<OutcomeSummary> {
    let step = rows.iter().map(|r| r.step).max()?;
    let mut tally = [0usize; 3];
    let mut undecided = 0;
    for r in rows.iter().filter(|r| r.step == step) {
        match r.action {
            Some(a) => {
                if let Some(i) = Action::ALL.iter().position(|&x| x == a) {
                    tally[i] += 1;
                }
            }
            None => undecided += 1,
        }
    }
    let mut counts: Vec<(Action, usize)> = Action::ALL
        .iter()
        .copied()
        .zip(tally)
        .filter(|&(_, n)| n > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Some(OutcomeSummary { step, counts, undecided })
}
