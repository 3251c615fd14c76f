//! Cardinality constraints.
//!
//! "At most `k` of these literals are true", using the sequential counter
//! encoding (Sinz, CP 2005): auxiliary variable `s[i][j]` means that at least
//! `j + 1` of `l[0..=i]` are true. The encoding needs `O(m·k)` clauses and
//! variables, where a naive encoding over all `(k+1)`-subsets is exponential.

use crate::sat::ClauseSink;
use crate::types::{Lit, Var};

/// Adds clauses enforcing that at most `k` of `lits` are true.
///
/// Returns the number of clauses added. Nothing is added when `lits.len() <= k`.
pub fn at_most_k<S: ClauseSink>(sink: &mut S, lits: &[Lit], k: usize) -> usize {
    let m = lits.len();

    if k == 0 {
        for &l in lits {
            sink.add_clause(&[-l]);
        }
        return m;
    }
    if m <= k {
        return 0;
    }

    // Counter rows for the prefixes l[0..=i], i < m - 1; the last row is never read.
    let s: Vec<Vec<Var>> = (0..m - 1).map(|_| (0..k).map(|_| sink.new_var()).collect()).collect();
    let mut added = 0;
    let mut clause = |sink: &mut S, c: &[Lit]| {
        sink.add_clause(c);
        added += 1;
    };

    // l[0] => s[0][0]; the first prefix cannot count past one.
    clause(sink, &[-lits[0], s[0][0].pos()]);
    for j in 1..k {
        clause(sink, &[s[0][j].neg()]);
    }

    for i in 1..m - 1 {
        clause(sink, &[-lits[i], s[i][0].pos()]);
        clause(sink, &[s[i - 1][0].neg(), s[i][0].pos()]);
        for j in 1..k {
            clause(sink, &[s[i - 1][j].neg(), s[i][j].pos()]);
            clause(sink, &[-lits[i], s[i - 1][j - 1].neg(), s[i][j].pos()]);
        }
    }

    // l[i] together with k earlier true literals would overflow.
    for i in k..m {
        clause(sink, &[-lits[i], s[i - 1][k - 1].neg()]);
    }

    added
}
