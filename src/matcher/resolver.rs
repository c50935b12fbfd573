use crate::matcher::selector::CompiledPattern;

/// Reduce a candidate set to the single best match.
///
/// Fewest wildcards wins outright. Among candidates tied on wildcard count,
/// the highest sum of wildcard positions wins, which favors wildcards that
/// sit collectively furthest right. Note this is a sum comparison, not a
/// comparison of leftmost wildcard positions: for equal counts the two
/// orderings can disagree (positions {0,4} sum to 4 and beat {1,2} summing
/// to 3, even though {1,2} has the rightmost leftmost wildcard). The sum is
/// the contract. On equal sums the earliest candidate in input order is
/// kept.
///
/// Returns `None` only for an empty candidate set.
pub fn best_match<'a>(candidates: &[&'a CompiledPattern]) -> Option<&'a CompiledPattern> {
	let fewest = retain_fewest_wildcards(candidates);

	match fewest.as_slice() {
		[] => None,
		[single] => Some(*single),
		tied => resolve_position_tie(tied),
	}
}

/// Keep only the candidates achieving the minimum wildcard count.
fn retain_fewest_wildcards<'a>(candidates: &[&'a CompiledPattern]) -> Vec<&'a CompiledPattern> {
	let Some(minimum) = candidates
		.iter()
		.map(|candidate| candidate.wildcard_count())
		.min()
	else {
		return Vec::new();
	};

	candidates
		.iter()
		.copied()
		.filter(|candidate| candidate.wildcard_count() == minimum)
		.collect()
}

/// Break a wildcard-count tie by the highest wildcard position sum.
/// Only a strictly higher sum displaces the current winner.
fn resolve_position_tie<'a>(tied: &[&'a CompiledPattern]) -> Option<&'a CompiledPattern> {
	let mut winner: Option<&'a CompiledPattern> = None;

	for candidate in tied.iter().copied() {
		let displaces = match winner {
			None => true,
			Some(current) => candidate.position_sum() > current.position_sum(),
		};
		if displaces {
			winner = Some(candidate);
		}
	}

	winner
}
