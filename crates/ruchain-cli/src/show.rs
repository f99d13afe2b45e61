//! # Show Subcommand
//!
//! Prints the states and transitions of one chain for inspection.

use anyhow::{Context, Result};
use clap::Args;

use ruchain_markov::MarkovChain;

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Number of regulatory units in the ring.
    pub ring_size: usize,
}

/// Render the listing printed by `ruchain show`.
pub fn render_chain(chain: &MarkovChain) -> String {
    let mut out = format!(
        "ring size {}: {} states, {} transitions\n",
        chain.ring_size,
        chain.state_count(),
        chain.transition_count()
    );
    for state in &chain.states {
        out.push_str(&format!("{:>4} {state}\n", state.index));
    }
    for t in &chain.transitions {
        out.push_str(&format!("{:>4} {} -> {} {t}\n", t.j, t.from, t.to));
    }
    out
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs) -> Result<u8> {
    let chain = MarkovChain::generate(args.ring_size)
        .with_context(|| format!("chain generation failed for ring size {}", args.ring_size))?;
    print!("{}", render_chain(&chain));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_for_three_units() {
        let chain = MarkovChain::generate(3).unwrap();
        let listing = render_chain(&chain);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "ring size 3: 4 states, 3 transitions");
        assert_eq!(lines[1], "   0 <state: 000, alpha=0.00, beta=0.00>");
        assert_eq!(
            lines[5],
            "   0 000 -> 001 <transition: m = 3, n = 1, iPre = 0, iPost = 1, transType = 0>"
        );
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn run_rejects_zero_units() {
        assert!(run_show(&ShowArgs { ring_size: 0 }).is_err());
    }
}
