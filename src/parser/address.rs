use itertools::Itertools;
use tracing::debug;

use super::lines::{Claim, Claims, Line};
use super::tags::Tag;

/// Address lines at most this far apart belong to one block, leaving room for
/// two stray logo/noise lines inside a printed address.
const MAX_GAP: usize = 3;

/// Group sorted indices into runs whose neighbours are at most `MAX_GAP` apart.
fn cluster(indices: &[usize]) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for &idx in indices {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|&prev| idx <= prev + MAX_GAP) => run.push(idx),
            _ => runs.push(vec![idx]),
        }
    }
    runs
}

/// Largest run; the earliest one wins a tie.
fn largest(runs: Vec<Vec<usize>>) -> Option<Vec<usize>> {
    runs.into_iter()
        .fold(None, |best: Option<Vec<usize>>, run| match best {
            Some(b) if b.len() >= run.len() => Some(b),
            _ => Some(run),
        })
}

fn stops_expansion(idx: usize, tags: &[Tag], claims: &Claims) -> bool {
    claims.is_claimed(idx) || matches!(tags[idx], Tag::Job | Tag::Identity)
}

/// Grow `[start, end]` outwards over neighbours that are free and not a
/// name or title line.
fn expand(start: usize, end: usize, tags: &[Tag], claims: &Claims) -> (usize, usize) {
    let mut lo = start;
    while lo > 0 && !stops_expansion(lo - 1, tags, claims) {
        lo -= 1;
    }
    let mut hi = end;
    while hi + 1 < tags.len() && !stops_expansion(hi + 1, tags, claims) {
        hi += 1;
    }
    (lo, hi)
}

/// Pick the densest cluster of address lines, widen it and join it into one
/// string. Every line that contributes is claimed.
pub fn assemble(lines: &[Line], tags: &[Tag], claims: &mut Claims) -> Option<String> {
    let hits: Vec<usize> = tags
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == Tag::Address)
        .map(|(i, _)| i)
        .collect();

    let best = largest(cluster(&hits))?;
    let (&first, &last) = (best.first()?, best.last()?);
    let (lo, hi) = expand(first, last, tags, claims);

    let mut parts = Vec::new();
    for idx in lo..=hi {
        if claims.is_claimed(idx) {
            continue;
        }
        let part = lines[idx].text.trim_end_matches([',', '.', ' ']);
        claims.claim(idx, Claim::Address);
        if !part.is_empty() {
            parts.push(part);
        }
    }

    debug!(from = lo, to = hi, parts = parts.len(), "address block");
    if parts.is_empty() {
        None
    } else {
        Some(parts.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::normalize;
    use crate::parser::tags::tag_lines;

    fn run(text: &str) -> (Option<String>, Claims) {
        let lines = normalize(text);
        let mut claims = Claims::new(lines.len());
        let tags = tag_lines(&lines, &claims);
        let address = assemble(&lines, &tags, &mut claims);
        (address, claims)
    }

    #[test]
    fn clusters_tolerate_two_line_gaps() {
        assert_eq!(cluster(&[1, 4, 9, 10]), vec![vec![1, 4], vec![9, 10]]);
        assert_eq!(cluster(&[0, 5]), vec![vec![0], vec![5]]);
        assert!(cluster(&[]).is_empty());
    }

    #[test]
    fn largest_prefers_first_on_tie() {
        let runs = vec![vec![1, 2], vec![6, 7], vec![10]];
        assert_eq!(largest(runs), Some(vec![1, 2]));
        assert_eq!(largest(vec![vec![1], vec![5, 6]]), Some(vec![5, 6]));
    }

    #[test]
    fn no_address_lines() {
        let (address, _) = run("John Doe\nSoftware Engineer");
        assert_eq!(address, None);
    }

    #[test]
    fn expands_over_company_but_stops_at_title() {
        let (address, claims) = run(
            "John Doe\nSoftware Engineer\nTech Solutions Inc.\n123 Tech Park, Silicon Valley, CA 94000",
        );
        assert_eq!(
            address.as_deref(),
            Some("Tech Solutions Inc, 123 Tech Park, Silicon Valley, CA 94000")
        );
        assert!(!claims.is_claimed(1));
        assert_eq!(claims.owner(2), Some(Claim::Address));
        assert_eq!(claims.owner(3), Some(Claim::Address));
    }

    #[test]
    fn multi_line_block_with_trailing_punctuation() {
        let text = "Director\n2. IDA, Phase-I, Patancheru,\nSangareddy (Dist.),\nTelangana State - 502319";
        let (address, _) = run(text);
        assert_eq!(
            address.as_deref(),
            Some("2. IDA, Phase-I, Patancheru, Sangareddy (Dist.), Telangana State - 502319")
        );
    }

    #[test]
    fn picks_the_bigger_block() {
        let text = "Baker St.\nJane Smith\nJohn Doe\nAlice Jones\nBob Marley\nFloor 2\nMG Road\nPune 411001";
        let (address, _) = run(text);
        assert_eq!(address.as_deref(), Some("Floor 2, MG Road, Pune 411001"));
    }
}
